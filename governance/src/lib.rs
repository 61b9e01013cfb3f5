//! Governance voting ledger.
//!
//! Tracks named elections, each holding uniquely-named proposals, accepts at
//! most one vote per voter per election, and resolves a single unambiguous
//! winner on demand.
//!
//! - [`ElectionRegistry`] is the single-owner state object.
//! - [`GovernanceLedger`] wraps the same operations with per-election locks
//!   for concurrent callers.
//! - [`resolve_winner`] is the pure winner algorithm: highest tally wins,
//!   all-zero is `NoWinner`, a shared maximum is `Tie`.

pub mod election;
pub mod error;
pub mod ledger;
pub mod proposal;
pub mod registry;
pub mod winner;

pub use election::Election;
pub use error::GovernanceError;
pub use ledger::GovernanceLedger;
pub use proposal::{Proposal, ProposalView};
pub use registry::ElectionRegistry;
pub use winner::resolve_winner;
