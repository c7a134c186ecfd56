//! Roster processing for PacCommers membership tiering.
//!
//! Loads many users from CSV and runs each one through classification and
//! checkout independently.

pub mod batch;
pub mod error;
pub mod roster_loader;

pub use batch::{process_entry, process_roster, MemberOutcome, RosterReport, TierCount};
pub use error::{RosterError, RosterResult};
pub use roster_loader::{load_roster, load_roster_file, RosterEntry};
