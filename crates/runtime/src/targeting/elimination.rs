//! Strict, unscored tie-break over the best-options group.
//!
//! Each factor gets one attempt at finding a single strict winner inside the
//! group. A tie with the running best ends that factor's attempt immediately,
//! even if a later member would have beaten both. Every attempt starts from
//! the full group; nothing narrows between factors.

use hunt_core::{Factor, Verdict};

use super::Candidate;

/// Looks for a strict winner among `group` on a single factor.
///
/// `group` holds indices into `candidates`. Returns `None` when the factor
/// produced a tie with the running best.
pub fn eliminate_by_factor(
    candidates: &[Candidate],
    group: &[usize],
    factor: Factor,
) -> Option<usize> {
    let (&first, rest) = group.split_first()?;
    let mut best = first;

    for &index in rest {
        match candidates[index].compare(&candidates[best], factor) {
            Verdict::Better => best = index,
            Verdict::Equal => {
                tracing::trace!(
                    "  {}: #{} ties #{}, no decision",
                    factor.abbreviation(),
                    index,
                    best
                );
                return None;
            }
            Verdict::Worse => {}
        }
    }

    Some(best)
}

/// Tries each factor in order and returns the first one that settles the group.
pub fn eliminate(
    candidates: &[Candidate],
    group: &[usize],
    factors: &[Factor],
) -> Option<(Factor, usize)> {
    for &factor in factors {
        if let Some(winner) = eliminate_by_factor(candidates, group, factor) {
            tracing::debug!(
                "Elimination: {} settled on #{}",
                factor.abbreviation(),
                winner
            );
            return Some((factor, winner));
        }
    }

    tracing::debug!("Elimination: all {} factors tied", factors.len());
    None
}
