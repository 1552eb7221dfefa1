use bitflags::bitflags;

bitflags! {
    /// Occupancy of a single playfield cell.
    ///
    /// A cell can hold several kinds of occupant at once (a player standing on
    /// a goal, the mover reaching a goal).
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct CellFlags: u8 {
        const MOVER  = 1 << 0;
        const PLAYER = 1 << 1;
        const GOAL   = 1 << 2;
    }
}
