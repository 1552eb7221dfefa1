//! Weighted scoring pass.
//!
//! Every factor hands its weight to the candidates that end up (tied) best on
//! it. The pass walks the candidates once per factor, keeping a running best
//! and the group of candidates equal to it:
//!
//! - a challenger that beats the best takes the weight away from the whole
//!   group, becomes the new best and is credited;
//! - a challenger equal to the best is credited and joins the group;
//! - anything worse is left alone.
//!
//! The first candidate opens each group and is credited like any other
//! member, so the net effect of a factor is `+weight` for the final group and
//! `0` for everyone else, independent of input order.

use hunt_core::{Factor, FactorWeights, Verdict};

use super::{Candidate, Ratings};

/// Applies one factor's weight to `ratings`.
pub fn rate_factor(candidates: &[Candidate], factor: Factor, weight: u32, ratings: &mut Ratings) {
    let Some(first) = candidates.first() else {
        return;
    };

    let mut best = first;
    let mut equals = vec![0];
    ratings.credit(0, weight);

    for (index, challenger) in candidates.iter().enumerate().skip(1) {
        match challenger.compare(best, factor) {
            Verdict::Better => {
                for &member in &equals {
                    ratings.debit(member, weight);
                }
                equals.clear();
                best = challenger;
                ratings.credit(index, weight);
                equals.push(index);
            }
            Verdict::Equal => {
                ratings.credit(index, weight);
                equals.push(index);
            }
            Verdict::Worse => {}
        }

        tracing::trace!(
            "  {} #{}: rating={} group={:?}",
            factor.abbreviation(),
            index,
            ratings.get(index),
            equals
        );
    }
}

/// Runs [`rate_factor`] for every factor in order and returns the ratings.
pub fn rate_all(candidates: &[Candidate], factors: &[Factor], weights: &FactorWeights) -> Ratings {
    let mut ratings = Ratings::new(candidates.len());

    for &factor in factors {
        rate_factor(candidates, factor, weights.weight(factor), &mut ratings);
    }

    tracing::debug!("Scoring: ratings={:?}", ratings.as_slice());
    ratings
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunt_core::{GoalSpot, Position};

    fn candidate(tpd: i32, sd: i32, cost: i32) -> Candidate {
        Candidate {
            goal: GoalSpot::new(Position::ORIGIN, tpd, sd),
            total_player_distance: tpd,
            spot_distance: sd,
            calculated_cost: cost,
            highest_danger: 0,
            surround_threat: 0,
            penalty: 1.0,
        }
    }

    #[test]
    fn strict_winner_collects_the_weight() {
        let candidates = [candidate(3, 0, 0), candidate(9, 0, 0), candidate(5, 0, 0)];
        let mut ratings = Ratings::new(3);

        rate_factor(&candidates, Factor::TotalPlayerDistance, 4, &mut ratings);

        assert_eq!(ratings.as_slice(), &[0, 4, 0]);
    }

    #[test]
    fn ties_share_the_weight() {
        let candidates = [candidate(0, 2, 0), candidate(0, 1, 0), candidate(0, 1, 0)];
        let mut ratings = Ratings::new(3);

        rate_factor(&candidates, Factor::SpotDistance, 3, &mut ratings);

        assert_eq!(ratings.as_slice(), &[0, 3, 3]);
    }

    #[test]
    fn beaten_group_loses_what_it_gained() {
        let candidates = [candidate(0, 0, 5), candidate(0, 0, 5), candidate(0, 0, 1)];
        let mut ratings = Ratings::new(3);

        rate_factor(&candidates, Factor::FastestDangerCost, 2, &mut ratings);

        assert_eq!(ratings.as_slice(), &[0, 0, 2]);
    }

    #[test]
    fn outcome_does_not_depend_on_input_order() {
        let forward = [candidate(10, 2, 3), candidate(10, 2, 5)];
        let reverse = [forward[1], forward[0]];
        let weights = FactorWeights::default();

        let a = rate_all(&forward, &Factor::ACTIVE, &weights);
        let b = rate_all(&reverse, &Factor::ACTIVE, &weights);

        assert_eq!(a.get(0), b.get(1));
        assert_eq!(a.get(1), b.get(0));
        assert!(a.get(0) > a.get(1));
    }

    #[test]
    fn ratings_accumulate_across_factors() {
        let candidates = [candidate(1, 5, 0), candidate(2, 5, 0)];
        let weights = FactorWeights::default();

        let ratings = rate_all(&candidates, &Factor::ACTIVE, &weights);

        // TPD only to #1; SD, FDC, HD tie.
        let shared = i64::from(
            weights.spot_distance + weights.fastest_danger_cost + weights.highest_danger,
        );
        assert_eq!(ratings.get(0), shared);
        assert_eq!(
            ratings.get(1),
            shared + i64::from(weights.total_player_distance)
        );
    }

    #[test]
    fn empty_input_is_a_no_op() {
        let ratings = rate_all(&[], &Factor::ACTIVE, &FactorWeights::default());
        assert!(ratings.is_empty());
    }
}
