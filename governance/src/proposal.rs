//! Proposals and their tallies.

use serde::{Deserialize, Serialize};
use tally_types::Name;

/// A named option within an election, carrying its vote tally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proposal {
    name: Name,
    vote_count: u64,
}

impl Proposal {
    /// A fresh proposal with no votes.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            vote_count: 0,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn vote_count(&self) -> u64 {
        self.vote_count
    }

    /// Only the ballot path in `Election::vote` may call this.
    pub(crate) fn record_vote(&mut self) -> u64 {
        self.vote_count += 1;
        self.vote_count
    }

    pub fn view(&self) -> ProposalView {
        ProposalView {
            name: self.name,
            vote_count: self.vote_count,
        }
    }
}

/// Read-only `(name, vote count)` pair returned by proposal listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalView {
    pub name: Name,
    pub vote_count: u64,
}
