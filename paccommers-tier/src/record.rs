use serde::Serialize;

use crate::classifier::{classify, Classification};
use crate::error::MembershipResult;
use crate::pricing::{checkout, PriceQuote};
use crate::tier::Tier;

/// A PacCommers user and, once predicted, their membership tier.
///
/// Expense and income are monthly amounts in millions of Rupiah.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MembershipRecord {
    pub username: String,
    pub monthly_expense: f64,
    pub monthly_income: f64,
    /// Unset until [`MembershipRecord::predict_membership`] runs.
    membership: Option<Tier>,
}

impl MembershipRecord {
    pub fn new(username: impl Into<String>, monthly_expense: f64, monthly_income: f64) -> Self {
        Self {
            username: username.into(),
            monthly_expense,
            monthly_income,
            membership: None,
        }
    }

    /// The predicted tier, if classification has run.
    pub fn membership(&self) -> Option<Tier> {
        self.membership
    }

    /// Classify this user and remember the resulting tier.
    ///
    /// Running it again re-derives the tier from the current expense and
    /// income.
    pub fn predict_membership(&mut self) -> Classification {
        let classification = classify(self.monthly_expense, self.monthly_income);
        self.membership = Some(classification.tier);
        classification
    }

    /// Price a basket at this user's tier discount.
    ///
    /// Fails with `UninitializedMembership` if the tier has not been predicted.
    pub fn calculate_price(&self, items: &[f64]) -> MembershipResult<PriceQuote> {
        checkout(self.membership, items).inspect_err(|_| {
            log::warn!(
                "refusing to price basket for '{}': membership not predicted",
                self.username
            );
        })
    }
}
