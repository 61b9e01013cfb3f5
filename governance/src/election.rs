//! A single election: its ordered proposals and the voters who have cast a ballot.

use std::collections::{HashMap, HashSet};

use crate::error::GovernanceError;
use crate::proposal::{Proposal, ProposalView};
use crate::winner::resolve_winner;
use tally_types::{Name, VoterId};
use tracing::debug;

/// Election record. Proposals keep insertion order; nothing is ever removed.
#[derive(Clone, Debug, Default)]
pub struct Election {
    /// Proposals in insertion order.
    proposals: Vec<Proposal>,
    /// Proposal name → position in `proposals`.
    index: HashMap<Name, usize>,
    /// Voters who have cast an accepted vote.
    voters: HashSet<VoterId>,
}

impl Election {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new election from its first batch.
    ///
    /// Creation-on-first-use goes through here, so an election only comes
    /// into existence once that batch has been accepted.
    pub fn with_proposals(names: &[Name]) -> Result<Self, GovernanceError> {
        let mut election = Self::new();
        election.add_proposals(names)?;
        Ok(election)
    }

    /// Append a batch of proposals, all or nothing.
    ///
    /// Every name is checked against the existing proposals and against the
    /// names before it in the same batch before anything is appended.
    pub fn add_proposals(&mut self, names: &[Name]) -> Result<(), GovernanceError> {
        let mut batch = HashSet::with_capacity(names.len());
        for name in names {
            if self.index.contains_key(name) || !batch.insert(*name) {
                return Err(GovernanceError::ProposalExists(*name));
            }
        }

        self.proposals.reserve(names.len());
        for name in names {
            self.index.insert(*name, self.proposals.len());
            self.proposals.push(Proposal::new(*name));
        }
        debug!(added = names.len(), total = self.proposals.len(), "proposals added");
        Ok(())
    }

    /// Proposals in insertion order.
    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn proposal_views(&self) -> Vec<ProposalView> {
        self.proposals.iter().map(Proposal::view).collect()
    }

    pub fn proposal(&self, name: &Name) -> Option<&Proposal> {
        self.index.get(name).map(|&i| &self.proposals[i])
    }

    pub fn has_voted(&self, voter: &VoterId) -> bool {
        self.voters.contains(voter)
    }

    /// Cast `voter`'s single vote for `proposal`, returning the new tally.
    ///
    /// The proposal lookup happens before the voter check, so voting for an
    /// unknown proposal reports `ProposalNotFound` even for a voter who has
    /// already voted. On any error nothing changes.
    pub fn vote(&mut self, proposal: &Name, voter: &VoterId) -> Result<u64, GovernanceError> {
        let position = *self
            .index
            .get(proposal)
            .ok_or(GovernanceError::ProposalNotFound(*proposal))?;

        if self.voters.contains(voter) {
            return Err(GovernanceError::AlreadyVoted(voter.clone()));
        }

        self.voters.insert(voter.clone());
        let tally = self.proposals[position].record_vote();
        debug!(%proposal, %voter, tally, "vote recorded");
        Ok(tally)
    }

    /// Resolve the winner from the current tallies.
    pub fn winner(&self) -> Result<Name, GovernanceError> {
        resolve_winner(&self.proposals)
    }
}
