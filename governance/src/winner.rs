//! Winner resolution over a snapshot of an election's proposals.
//!
//! Resolution is re-evaluated from the current tallies on every call; there is
//! no "declared" winner and no tie-break. A tie is reported as an error.

use crate::error::GovernanceError;
use crate::proposal::Proposal;
use tally_types::Name;

/// Return the sole proposal holding the highest tally.
///
/// Fails with `NoProposalsFound` for an empty slice, `NoWinner` when every
/// tally is zero, and `Tie` when two or more proposals share the maximum.
pub fn resolve_winner(proposals: &[Proposal]) -> Result<Name, GovernanceError> {
    let max_count = proposals
        .iter()
        .map(Proposal::vote_count)
        .max()
        .ok_or(GovernanceError::NoProposalsFound)?;

    if max_count == 0 {
        return Err(GovernanceError::NoWinner);
    }

    let mut leaders = proposals.iter().filter(|p| p.vote_count() == max_count);
    let winner = leaders.next().ok_or(GovernanceError::NoWinner)?;
    let others = leaders.count();
    if others > 0 {
        return Err(GovernanceError::Tie {
            vote_count: max_count,
            tied: others + 1,
        });
    }
    Ok(*winner.name())
}
