use tally_types::{Name, VoterId};
use thiserror::Error;

/// Failures of the governance ledger operations.
///
/// The `Display` text of every variant is the exact message surfaced to
/// clients; the carried data is diagnostic only.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("Proposal name already exists.")]
    ProposalExists(Name),

    #[error("Proposal not found.")]
    ProposalNotFound(Name),

    #[error("Already voted.")]
    AlreadyVoted(VoterId),

    #[error("No proposals found.")]
    NoProposalsFound,

    #[error("Must have at least one vote.")]
    NoWinner,

    #[error("Multiple Winners Found.")]
    Tie { vote_count: u64, tied: usize },
}

impl GovernanceError {
    /// Stable taxonomy identifier for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ProposalExists(_) => "PROPOSAL_EXISTS",
            Self::ProposalNotFound(_) => "PROPOSAL_NOT_FOUND",
            Self::AlreadyVoted(_) => "ALREADY_VOTED",
            Self::NoProposalsFound => "NO_PROPOSALS_FOUND",
            Self::NoWinner => "NO_WINNER",
            Self::Tie { .. } => "TIE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        let name = Name::from_text("A").unwrap();
        let cases = [
            (GovernanceError::ProposalExists(name), "Proposal name already exists."),
            (GovernanceError::ProposalNotFound(name), "Proposal not found."),
            (GovernanceError::AlreadyVoted(VoterId::new("v1")), "Already voted."),
            (GovernanceError::NoProposalsFound, "No proposals found."),
            (GovernanceError::NoWinner, "Must have at least one vote."),
            (GovernanceError::Tie { vote_count: 1, tied: 2 }, "Multiple Winners Found."),
        ];
        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn codes_match_taxonomy() {
        assert_eq!(GovernanceError::NoWinner.code(), "NO_WINNER");
        assert_eq!(
            GovernanceError::Tie { vote_count: 3, tied: 2 }.code(),
            "TIE"
        );
        assert_eq!(
            GovernanceError::AlreadyVoted(VoterId::new("v")).code(),
            "ALREADY_VOTED"
        );
    }
}
