//! Fundamental types for the tally ledger.
//!
//! Defines the identifiers shared by every other crate in the workspace:
//! fixed-width election/proposal names and opaque voter tokens.

pub mod error;
pub mod name;
pub mod voter;

pub use error::NameError;
pub use name::{Name, NAME_LEN};
pub use voter::VoterId;
