//! Runtime implementations of the hunt-core oracle traits.
mod table;

pub use table::{DangerEntry, TableDangerOracle};
