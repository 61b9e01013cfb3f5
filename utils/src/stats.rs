//! Operation counters for the ledger service.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters of ledger operations, shared across request handlers.
#[derive(Debug, Default)]
pub struct OperationStats {
    proposals_added: AtomicU64,
    batches_rejected: AtomicU64,
    votes_accepted: AtomicU64,
    votes_rejected: AtomicU64,
    winner_queries: AtomicU64,
}

/// Point-in-time copy of [`OperationStats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub proposals_added: u64,
    pub batches_rejected: u64,
    pub votes_accepted: u64,
    pub votes_rejected: u64,
    pub winner_queries: u64,
}

impl OperationStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_proposals_added(&self, count: u64) {
        self.proposals_added.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_batch_rejected(&self) {
        self.batches_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_vote(&self, accepted: bool) {
        let counter = if accepted {
            &self.votes_accepted
        } else {
            &self.votes_rejected
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_winner_query(&self) {
        self.winner_queries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            proposals_added: self.proposals_added.load(Ordering::Relaxed),
            batches_rejected: self.batches_rejected.load(Ordering::Relaxed),
            votes_accepted: self.votes_accepted.load(Ordering::Relaxed),
            votes_rejected: self.votes_rejected.load(Ordering::Relaxed),
            winner_queries: self.winner_queries.load(Ordering::Relaxed),
        }
    }
}
