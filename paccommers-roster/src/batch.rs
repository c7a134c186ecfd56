//! Batch classification and checkout over a roster.
//!
//! Every entry is classified and priced on its own record; nothing is shared
//! between users. Output order matches input order.

use paccommers_tier::{Classification, MembershipRecord, PriceQuote, Tier};
use serde::Serialize;

use crate::error::RosterResult;
use crate::roster_loader::RosterEntry;

/// Classification and checkout result for one roster user.
#[derive(Clone, Debug, Serialize)]
pub struct MemberOutcome {
    pub record: MembershipRecord,
    pub classification: Classification,
    pub quote: PriceQuote,
}

/// Number of roster users placed in a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TierCount {
    pub tier: Tier,
    pub members: usize,
}

/// Aggregate result of processing a roster.
#[derive(Clone, Debug, Serialize)]
pub struct RosterReport {
    pub members: Vec<MemberOutcome>,
    /// Member count per tier, in [`Tier::ALL`] order (zero counts included).
    pub tier_counts: Vec<TierCount>,
    /// Sum of all baskets before discount.
    pub gross_total: f64,
    /// Sum of all baskets after each member's discount.
    pub net_total: f64,
}

impl RosterReport {
    /// Total discount granted across the roster.
    pub fn total_discount(&self) -> f64 {
        self.gross_total - self.net_total
    }

    /// Members of a given tier, in roster order.
    pub fn members_in(&self, tier: Tier) -> impl Iterator<Item = &MemberOutcome> {
        self.members
            .iter()
            .filter(move |m| m.classification.tier == tier)
    }
}

/// Classify one entry and price its basket.
pub fn process_entry(entry: RosterEntry) -> RosterResult<MemberOutcome> {
    let RosterEntry { mut record, items } = entry;
    let classification = record.predict_membership();
    let quote = record.calculate_price(&items)?;
    Ok(MemberOutcome {
        record,
        classification,
        quote,
    })
}

/// Classify and price every roster entry.
pub fn process_roster(entries: Vec<RosterEntry>) -> RosterResult<RosterReport> {
    let members = entries
        .into_iter()
        .map(process_entry)
        .collect::<RosterResult<Vec<_>>>()?;

    let tier_counts = Tier::ALL
        .iter()
        .map(|&tier| TierCount {
            tier,
            members: members
                .iter()
                .filter(|m| m.classification.tier == tier)
                .count(),
        })
        .collect();

    let gross_total = members.iter().map(|m| m.quote.total_price).fold(0.0, |a, b| a + b);
    let net_total = members.iter().map(|m| m.quote.final_price).fold(0.0, |a, b| a + b);

    log::info!(
        "processed {} roster members: gross {:.2}, net {:.2}",
        members.len(),
        gross_total,
        net_total
    );

    Ok(RosterReport {
        members,
        tier_counts,
        gross_total,
        net_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, expense: f64, income: f64, items: &[f64]) -> RosterEntry {
        RosterEntry {
            record: MembershipRecord::new(name, expense, income),
            items: items.to_vec(),
        }
    }

    #[test]
    fn process_entry_classifies_then_prices() {
        let outcome =
            process_entry(entry("Kresna", 7.0, 12.0, &[500_000.0, 750_000.0, 1_200_000.0]))
                .unwrap();
        assert_eq!(outcome.classification.tier, Tier::Gold);
        assert_eq!(outcome.record.membership(), Some(Tier::Gold));
        assert_eq!(outcome.quote.final_price, 2_205_000.0);
    }

    #[test]
    fn empty_roster_produces_zero_report() {
        let report = process_roster(Vec::new()).unwrap();
        assert!(report.members.is_empty());
        assert_eq!(report.gross_total, 0.0);
        assert_eq!(report.net_total, 0.0);
        assert!(report.tier_counts.iter().all(|c| c.members == 0));
        assert_eq!(report.tier_counts.len(), 3);
    }

    #[test]
    fn totals_and_counts_aggregate() {
        let report = process_roster(vec![
            entry("a", 8.0, 15.0, &[100.0]),
            entry("b", 6.0, 10.0, &[100.0]),
            entry("c", 6.1, 10.2, &[]),
            entry("d", 5.0, 7.0, &[100.0]),
        ])
        .unwrap();

        let counts: Vec<(Tier, usize)> = report
            .tier_counts
            .iter()
            .map(|c| (c.tier, c.members))
            .collect();
        assert_eq!(
            counts,
            vec![(Tier::Platinum, 1), (Tier::Gold, 2), (Tier::Silver, 1)]
        );
        assert!((report.gross_total - 300.0).abs() < 1e-9);
        assert!((report.net_total - (85.0 + 90.0 + 92.0)).abs() < 1e-9);
        assert!((report.total_discount() - 33.0).abs() < 1e-9);
    }

    #[test]
    fn member_order_is_preserved() {
        let report = process_roster(vec![
            entry("z", 5.0, 7.0, &[]),
            entry("y", 8.0, 15.0, &[]),
        ])
        .unwrap();
        let names: Vec<&str> = report
            .members
            .iter()
            .map(|m| m.record.username.as_str())
            .collect();
        assert_eq!(names, vec!["z", "y"]);
        assert_eq!(report.members_in(Tier::Platinum).count(), 1);
    }
}
