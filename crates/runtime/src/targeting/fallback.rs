use hunt_core::{RandomFallback, RngOracle};

/// Picks an index below `count` from a single seeded draw.
///
/// `count` must be non-zero.
pub fn pick_random(count: usize, mode: RandomFallback, rng: &dyn RngOracle, seed: u64) -> usize {
    let draw = rng.unit_interval(seed);
    let index = mode.index(draw, count);

    tracing::debug!(
        "Fallback: draw={:.4} mode={} count={} -> #{}",
        draw,
        mode,
        count,
        index
    );

    index
}
