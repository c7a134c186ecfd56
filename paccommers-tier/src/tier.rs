//! The fixed membership tier vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MembershipError;
use crate::reference::{
    ReferencePoint, GOLD_DISCOUNT, GOLD_REFERENCE, PLATINUM_DISCOUNT, PLATINUM_REFERENCE,
    SILVER_DISCOUNT, SILVER_REFERENCE,
};

/// The three PacCommers membership tiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Platinum,
    Gold,
    Silver,
}

impl Tier {
    /// All tiers in declaration order.
    ///
    /// This order is the classification tie-break: when two reference points
    /// are equally close, the tier listed first wins.
    pub const ALL: [Tier; 3] = [Tier::Platinum, Tier::Gold, Tier::Silver];

    /// Lowercase label, as used in roster files and JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Tier::Platinum => "platinum",
            Tier::Gold => "gold",
            Tier::Silver => "silver",
        }
    }

    /// Upper-case label for tables.
    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Platinum => "PLATINUM",
            Tier::Gold => "GOLD",
            Tier::Silver => "SILVER",
        }
    }

    /// The (expense, income) point members of this tier are matched against.
    pub fn reference_point(&self) -> ReferencePoint {
        match self {
            Tier::Platinum => PLATINUM_REFERENCE,
            Tier::Gold => GOLD_REFERENCE,
            Tier::Silver => SILVER_REFERENCE,
        }
    }

    /// Fraction of the basket total taken off at checkout.
    pub fn discount_rate(&self) -> f64 {
        match self {
            Tier::Platinum => PLATINUM_DISCOUNT,
            Tier::Gold => GOLD_DISCOUNT,
            Tier::Silver => SILVER_DISCOUNT,
        }
    }

    /// Discount as advertised on the benefits table.
    pub fn discount_label(&self) -> &'static str {
        match self {
            Tier::Platinum => "15%",
            Tier::Gold => "10%",
            Tier::Silver => "8%",
        }
    }

    /// Perks advertised for this tier, in display order.
    pub fn benefits(&self) -> &'static [&'static str] {
        match self {
            Tier::Platinum => &[
                "Benefit silver + gold",
                "Voucher liburan",
                "Cashback max. 30%",
            ],
            Tier::Gold => &["Benefit silver", "Voucher ojek online"],
            Tier::Silver => &["Voucher makanan"],
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tier {
    type Err = MembershipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tier::ALL
            .iter()
            .copied()
            .find(|t| t.name() == s)
            .ok_or_else(|| MembershipError::UnknownTier(s.to_string()))
    }
}
