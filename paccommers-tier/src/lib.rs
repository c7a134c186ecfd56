//! PacCommers membership tiering.
//!
//! A user is placed in the tier whose (monthly expense, monthly income)
//! reference point is nearest by Euclidean distance, and that tier's discount
//! is applied at checkout. Tier references, discounts and benefit text are
//! fixed constants.

pub mod classifier;
pub mod distance;
pub mod error;
pub mod pricing;
pub mod record;
pub mod reference;
pub mod tier;

pub use classifier::{classify, Classification, TierDistance};
pub use distance::euclidean_distance;
pub use error::{MembershipError, MembershipResult};
pub use pricing::{checkout, price, price_for_label, PriceQuote};
pub use record::MembershipRecord;
pub use reference::ReferencePoint;
pub use tier::Tier;
