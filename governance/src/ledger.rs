//! Thread-safe governance ledger with per-election locking.
//!
//! Operations on the same election are serialized by that election's mutex
//! for their whole read-modify-write; operations on different elections run
//! in parallel. The outer map lock is held only long enough to look up or
//! insert an election handle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use crate::election::Election;
use crate::error::GovernanceError;
use crate::proposal::ProposalView;
use tally_types::{Name, VoterId};
use tracing::{debug, warn};

type ElectionHandle = Arc<Mutex<Election>>;

#[derive(Default)]
struct Elections {
    by_name: HashMap<Name, ElectionHandle>,
    /// Election names in creation order.
    order: Vec<Name>,
}

/// Shared ledger of elections, safe to use behind an `Arc` from many threads.
#[derive(Default)]
pub struct GovernanceLedger {
    elections: RwLock<Elections>,
}

impl GovernanceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an existing election handle.
    fn handle(&self, election: &Name) -> Option<ElectionHandle> {
        self.elections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .by_name
            .get(election)
            .cloned()
    }

    /// Lock one election.
    ///
    /// Mutations validate before writing, so a guard poisoned by a panicking
    /// holder still protects a consistent election.
    fn lock(handle: &ElectionHandle) -> MutexGuard<'_, Election> {
        handle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add proposals to an election, creating it on first use.
    pub fn add_proposals_to_election(
        &self,
        election: &Name,
        proposals: &[Name],
    ) -> Result<(), GovernanceError> {
        if let Some(handle) = self.handle(election) {
            return Self::lock(&handle)
                .add_proposals(proposals)
                .inspect_err(|e| debug!(%election, %e, "proposal batch rejected"));
        }

        // Validate a fresh election before publishing it, under the map's
        // write lock so a racing creator cannot slip in between.
        let mut elections = self
            .elections
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = elections.by_name.get(election) {
            let handle = Arc::clone(handle);
            drop(elections);
            return Self::lock(&handle)
                .add_proposals(proposals)
                .inspect_err(|e| debug!(%election, %e, "proposal batch rejected"));
        }

        let created = Election::with_proposals(proposals)
            .inspect_err(|e| debug!(%election, %e, "proposal batch rejected"))?;
        elections
            .by_name
            .insert(*election, Arc::new(Mutex::new(created)));
        elections.order.push(*election);
        debug!(%election, "election created");
        Ok(())
    }

    /// Proposals of an election in insertion order; empty for unknown elections.
    pub fn get_proposals(&self, election: &Name) -> Vec<ProposalView> {
        self.handle(election)
            .map(|handle| Self::lock(&handle).proposal_views())
            .unwrap_or_default()
    }

    /// Record `voter`'s single vote in `election`, returning the new tally.
    pub fn vote(
        &self,
        election: &Name,
        proposal: &Name,
        voter: &VoterId,
    ) -> Result<u64, GovernanceError> {
        let handle = self
            .handle(election)
            .ok_or(GovernanceError::ProposalNotFound(*proposal))?;
        let result = Self::lock(&handle).vote(proposal, voter);
        if let Err(ref e) = result {
            warn!(%election, %proposal, %voter, code = e.code(), "vote rejected");
        }
        result
    }

    /// Resolve the current winner of an election.
    pub fn winner_name(&self, election: &Name) -> Result<Name, GovernanceError> {
        let handle = self
            .handle(election)
            .ok_or(GovernanceError::NoProposalsFound)?;
        let winner = Self::lock(&handle).winner();
        winner
    }

    pub fn has_voted(&self, election: &Name, voter: &VoterId) -> bool {
        self.handle(election)
            .is_some_and(|handle| Self::lock(&handle).has_voted(voter))
    }

    /// Known elections in creation order.
    pub fn election_names(&self) -> Vec<Name> {
        self.elections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
    }

    /// Number of known elections.
    pub fn election_count(&self) -> usize {
        self.elections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }
}
