//! HTTP/JSON interface to the governance ledger.
//!
//! Provides endpoints for:
//! - Adding proposals to an election and listing them with tallies
//! - Casting a vote (caller identity from the `x-voter-id` header)
//! - Resolving an election's winner
//! - Listing elections, checking whether a voter has voted
//! - Operation statistics

pub mod error;
pub mod handlers;
pub mod server;

pub use error::RpcError;
pub use handlers::{AppState, VOTER_HEADER};
pub use server::{router, RpcServer};
