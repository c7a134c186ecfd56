//! Tier discount pricing.
//!
//! final_price = sum(items) x (1 - discount_rate)
//!
//! No rounding is performed here; amounts may carry fractional cents and are
//! only rounded for display.

use serde::Serialize;

use crate::error::{MembershipError, MembershipResult};
use crate::reference::FALLBACK_DISCOUNT;
use crate::tier::Tier;

/// Checkout breakdown for one basket.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Tier the discount was taken from. `None` when a label was not recognized.
    pub membership: Option<Tier>,
    pub total_price: f64,
    pub discount_rate: f64,
    pub discount_amount: f64,
    pub final_price: f64,
}

impl PriceQuote {
    fn from_rate(membership: Option<Tier>, items: &[f64], discount_rate: f64) -> Self {
        let total_price = items.iter().fold(0.0, |acc, p| acc + p);
        let final_price = total_price * (1.0 - discount_rate);
        Self {
            membership,
            total_price,
            discount_rate,
            discount_amount: total_price - final_price,
            final_price,
        }
    }
}

/// Price a basket for a known tier.
pub fn price(tier: Tier, items: &[f64]) -> PriceQuote {
    PriceQuote::from_rate(Some(tier), items, tier.discount_rate())
}

/// Price a basket for a tier given by label.
///
/// Unrecognized labels are priced at [`FALLBACK_DISCOUNT`] instead of failing.
pub fn price_for_label(label: &str, items: &[f64]) -> PriceQuote {
    match label.parse::<Tier>() {
        Ok(tier) => price(tier, items),
        Err(_) => {
            log::warn!(
                "unknown tier label '{}', pricing without discount",
                label
            );
            PriceQuote::from_rate(None, items, FALLBACK_DISCOUNT)
        }
    }
}

/// Price a basket for a member whose tier may not be known yet.
///
/// Refuses with [`MembershipError::UninitializedMembership`] when
/// `membership` is unset; nothing is summed in that case.
pub fn checkout(membership: Option<Tier>, items: &[f64]) -> MembershipResult<PriceQuote> {
    match membership {
        Some(tier) => Ok(price(tier, items)),
        None => Err(MembershipError::UninitializedMembership),
    }
}
