//! Single-owner election registry.
//!
//! `ElectionRegistry` is the plain state object: callers own it and pass it by
//! reference, and `&mut self` gives the atomicity each operation needs. For
//! shared access from many threads, see [`crate::GovernanceLedger`].

use std::collections::HashMap;

use crate::election::Election;
use crate::error::GovernanceError;
use crate::proposal::ProposalView;
use tally_types::{Name, VoterId};
use tracing::debug;

/// Maps election names to election records.
#[derive(Clone, Debug, Default)]
pub struct ElectionRegistry {
    elections: HashMap<Name, Election>,
    /// Election names in creation order.
    order: Vec<Name>,
}

impl ElectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add proposals to an election, creating it on first use.
    ///
    /// An unknown election is only inserted once its first batch succeeds; a
    /// rejected first batch leaves it unknown, which reads the same as empty.
    pub fn add_proposals_to_election(
        &mut self,
        election: &Name,
        proposals: &[Name],
    ) -> Result<(), GovernanceError> {
        match self.elections.get_mut(election) {
            Some(existing) => existing.add_proposals(proposals),
            None => {
                let created = Election::with_proposals(proposals)?;
                debug!(%election, "election created");
                self.elections.insert(*election, created);
                self.order.push(*election);
                Ok(())
            }
        }
    }

    /// Proposals of an election in insertion order; empty for unknown elections.
    pub fn get_proposals(&self, election: &Name) -> Vec<ProposalView> {
        self.elections
            .get(election)
            .map(Election::proposal_views)
            .unwrap_or_default()
    }

    /// Record `voter`'s vote. Unknown elections report `ProposalNotFound`.
    pub fn vote(
        &mut self,
        election: &Name,
        proposal: &Name,
        voter: &VoterId,
    ) -> Result<u64, GovernanceError> {
        self.elections
            .get_mut(election)
            .ok_or(GovernanceError::ProposalNotFound(*proposal))?
            .vote(proposal, voter)
    }

    /// Resolve the current winner of an election.
    pub fn winner_name(&self, election: &Name) -> Result<Name, GovernanceError> {
        self.elections
            .get(election)
            .ok_or(GovernanceError::NoProposalsFound)?
            .winner()
    }

    pub fn has_voted(&self, election: &Name, voter: &VoterId) -> bool {
        self.elections
            .get(election)
            .is_some_and(|e| e.has_voted(voter))
    }

    /// Known elections in creation order.
    pub fn election_names(&self) -> Vec<Name> {
        self.order.clone()
    }
}
