//! Centralized tier reference points and discount rates.
//!
//! Reference coordinates are in millions of Rupiah per month. Changing a value
//! here affects both classification (in `classifier.rs`) and checkout pricing
//! (in `pricing.rs`) through the accessors on [`crate::Tier`].

/// A point in (monthly expense, monthly income) space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ReferencePoint {
    pub expense: f64,
    pub income: f64,
}

impl ReferencePoint {
    pub const fn new(expense: f64, income: f64) -> Self {
        Self { expense, income }
    }
}

/// Platinum reference: 8 million expense, 15 million income.
pub const PLATINUM_REFERENCE: ReferencePoint = ReferencePoint::new(8.0, 15.0);

/// Gold reference: 6 million expense, 10 million income.
pub const GOLD_REFERENCE: ReferencePoint = ReferencePoint::new(6.0, 10.0);

/// Silver reference: 5 million expense, 7 million income.
pub const SILVER_REFERENCE: ReferencePoint = ReferencePoint::new(5.0, 7.0);

/// Checkout discount for platinum members (15%).
pub const PLATINUM_DISCOUNT: f64 = 0.15;

/// Checkout discount for gold members (10%).
pub const GOLD_DISCOUNT: f64 = 0.10;

/// Checkout discount for silver members (8%).
pub const SILVER_DISCOUNT: f64 = 0.08;

/// Discount applied when a tier label is not recognized.
pub const FALLBACK_DISCOUNT: f64 = 0.0;
