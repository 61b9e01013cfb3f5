//! Shared utilities for the tally ledger.

pub mod logging;
pub mod stats;

pub use logging::init_tracing;
pub use stats::{OperationStats, StatsSnapshot};
