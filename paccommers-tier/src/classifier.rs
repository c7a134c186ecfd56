//! Nearest-reference-point tier classification.
//!
//! A member's (monthly expense, monthly income) pair is compared against the
//! reference point of every tier in [`Tier::ALL`] order. The closest tier by
//! Euclidean distance wins; on an exact tie the earlier tier is kept, so the
//! result never depends on anything but the inputs.

use serde::Serialize;

use crate::distance::euclidean_distance;
use crate::reference::ReferencePoint;
use crate::tier::Tier;

/// Distance from the member to one tier's reference point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TierDistance {
    pub tier: Tier,
    pub distance: f64,
}

/// Result of classifying one member.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Classification {
    /// The closest tier.
    pub tier: Tier,
    /// Distance to every tier, in [`Tier::ALL`] order. Audit data only.
    pub distances: Vec<TierDistance>,
}

impl Classification {
    /// Distance to a specific tier's reference point.
    pub fn distance_to(&self, tier: Tier) -> Option<f64> {
        self.distances
            .iter()
            .find(|d| d.tier == tier)
            .map(|d| d.distance)
    }

    /// Gap between the runner-up distance and the winning distance.
    ///
    /// Zero means the winner was decided by the tie-break order.
    pub fn margin(&self) -> f64 {
        let winner = self.distance_to(self.tier).unwrap_or(f64::NAN);
        self.distances
            .iter()
            .filter(|d| d.tier != self.tier)
            .map(|d| d.distance - winner)
            .fold(f64::INFINITY, f64::min)
    }
}

/// Classify a member by monthly expense and income (millions of Rupiah).
///
/// Total over all inputs: a NaN distance never compares below the current
/// minimum, so degenerate inputs fall back to the first tier.
pub fn classify(expense: f64, income: f64) -> Classification {
    let member = ReferencePoint::new(expense, income);

    let distances: Vec<TierDistance> = Tier::ALL
        .iter()
        .map(|&tier| TierDistance {
            tier,
            distance: euclidean_distance(member, tier.reference_point()),
        })
        .collect();

    // First minimum wins: only a strictly smaller distance displaces the
    // current best.
    let mut best = distances[0];
    for candidate in &distances[1..] {
        if candidate.distance < best.distance {
            best = *candidate;
        }
    }

    log::debug!(
        "classified expense={} income={} as {} (distances: {:?})",
        expense,
        income,
        best.tier,
        distances
            .iter()
            .map(|d| (d.tier.name(), d.distance))
            .collect::<Vec<_>>()
    );

    Classification {
        tier: best.tier,
        distances,
    }
}
