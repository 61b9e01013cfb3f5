//! End-to-end behaviour of the ledger through its public operations.

use tally_governance::{GovernanceError, GovernanceLedger, ProposalView};
use tally_types::{Name, VoterId};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn name(text: &str) -> Name {
    Name::from_text(text).expect("fits in 32 bytes")
}

fn election_1() -> Name {
    name("There is no bread")
}

fn election_2() -> Name {
    name("Hoodies or suits?")
}

fn cake() -> Name {
    name("Let them eat cake")
}

fn porridge() -> Name {
    name("Why don't they eat poridge")
}

fn voter(n: u8) -> VoterId {
    VoterId::new(format!("voter-{n}"))
}

fn view(name: Name, vote_count: u64) -> ProposalView {
    ProposalView { name, vote_count }
}

// ---------------------------------------------------------------------------
// No elections / no proposals
// ---------------------------------------------------------------------------

#[test]
fn unknown_election_has_no_proposals_and_no_winner() {
    let ledger = GovernanceLedger::new();
    assert!(ledger.get_proposals(&election_1()).is_empty());
    assert_eq!(
        ledger.vote(&election_1(), &cake(), &voter(1)),
        Err(GovernanceError::ProposalNotFound(cake()))
    );
    assert_eq!(
        ledger.winner_name(&election_1()),
        Err(GovernanceError::NoProposalsFound)
    );
}

#[test]
fn empty_election_has_no_proposals_and_no_winner() {
    let ledger = GovernanceLedger::new();
    ledger.add_proposals_to_election(&election_1(), &[]).unwrap();
    assert!(ledger.get_proposals(&election_1()).is_empty());
    assert_eq!(
        ledger.vote(&election_1(), &cake(), &voter(1)),
        Err(GovernanceError::ProposalNotFound(cake()))
    );
    assert_eq!(
        ledger.winner_name(&election_1()),
        Err(GovernanceError::NoProposalsFound)
    );
}

// ---------------------------------------------------------------------------
// Single proposal
// ---------------------------------------------------------------------------

#[test]
fn single_proposal_vote_and_declare_winner() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    assert_eq!(ledger.get_proposals(&election_1()), vec![view(cake(), 0)]);

    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    assert_eq!(ledger.winner_name(&election_1()), Ok(cake()));
}

#[test]
fn voting_twice_fails() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    assert_eq!(
        ledger.vote(&election_1(), &cake(), &voter(1)),
        Err(GovernanceError::AlreadyVoted(voter(1)))
    );
    assert_eq!(ledger.get_proposals(&election_1()), vec![view(cake(), 1)]);
    assert_eq!(ledger.winner_name(&election_1()), Ok(cake()));
}

#[test]
fn many_voters_for_one_proposal() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    for n in 1..=4 {
        ledger.vote(&election_1(), &cake(), &voter(n)).unwrap();
    }
    assert_eq!(ledger.get_proposals(&election_1()), vec![view(cake(), 4)]);
    assert_eq!(ledger.winner_name(&election_1()), Ok(cake()));
}

#[test]
fn duplicate_in_one_call_is_rejected_atomically() {
    let ledger = GovernanceLedger::new();
    assert_eq!(
        ledger.add_proposals_to_election(&election_1(), &[cake(), cake()]),
        Err(GovernanceError::ProposalExists(cake()))
    );
    assert!(ledger.get_proposals(&election_1()).is_empty());
}

#[test]
fn duplicate_across_calls_is_rejected_without_change() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    let before = ledger.get_proposals(&election_1());

    assert_eq!(
        ledger.add_proposals_to_election(&election_1(), &[porridge(), cake()]),
        Err(GovernanceError::ProposalExists(cake()))
    );
    assert_eq!(ledger.get_proposals(&election_1()), before);
}

#[test]
fn same_proposal_in_different_elections() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    ledger
        .add_proposals_to_election(&election_2(), &[cake()])
        .unwrap();
    ledger.vote(&election_2(), &cake(), &voter(1)).unwrap();

    assert_eq!(ledger.get_proposals(&election_1()), vec![view(cake(), 0)]);
    assert_eq!(ledger.get_proposals(&election_2()), vec![view(cake(), 1)]);
}

// ---------------------------------------------------------------------------
// Multiple proposals
// ---------------------------------------------------------------------------

#[test]
fn failed_vote_can_be_retried() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    assert_eq!(
        ledger.vote(&election_1(), &porridge(), &voter(1)),
        Err(GovernanceError::ProposalNotFound(porridge()))
    );
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    assert_eq!(ledger.winner_name(&election_1()), Ok(cake()));
}

#[test]
fn one_vote_per_election_across_proposals() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake()])
        .unwrap();
    ledger
        .add_proposals_to_election(&election_1(), &[porridge()])
        .unwrap();
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    assert_eq!(
        ledger.vote(&election_1(), &porridge(), &voter(1)),
        Err(GovernanceError::AlreadyVoted(voter(1)))
    );
    assert_eq!(
        ledger.get_proposals(&election_1()),
        vec![view(cake(), 1), view(porridge(), 0)]
    );
}

#[test]
fn batch_preserves_input_order() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[porridge(), cake()])
        .unwrap();
    assert_eq!(
        ledger.get_proposals(&election_1()),
        vec![view(porridge(), 0), view(cake(), 0)]
    );
}

#[test]
fn counting_votes_picks_majority() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake(), porridge()])
        .unwrap();
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    for n in 2..=4 {
        ledger.vote(&election_1(), &porridge(), &voter(n)).unwrap();
    }
    assert_eq!(ledger.winner_name(&election_1()), Ok(porridge()));
}

#[test]
fn tie_is_an_error() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake(), porridge()])
        .unwrap();
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    ledger.vote(&election_1(), &porridge(), &voter(2)).unwrap();
    let err = ledger.winner_name(&election_1()).unwrap_err();
    assert_eq!(err.code(), "TIE");
    assert_eq!(err.to_string(), "Multiple Winners Found.");
}

#[test]
fn no_votes_means_no_winner() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake(), porridge()])
        .unwrap();
    assert_eq!(
        ledger.winner_name(&election_1()),
        Err(GovernanceError::NoWinner)
    );
}

#[test]
fn winner_is_recomputed_as_votes_arrive() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&election_1(), &[cake(), porridge()])
        .unwrap();
    ledger.vote(&election_1(), &cake(), &voter(1)).unwrap();
    assert_eq!(ledger.winner_name(&election_1()), Ok(cake()));
    ledger.vote(&election_1(), &porridge(), &voter(2)).unwrap();
    assert!(matches!(
        ledger.winner_name(&election_1()),
        Err(GovernanceError::Tie { .. })
    ));
    ledger.vote(&election_1(), &porridge(), &voter(3)).unwrap();
    assert_eq!(ledger.winner_name(&election_1()), Ok(porridge()));
    // Repeated queries see the same answer.
    assert_eq!(ledger.winner_name(&election_1()), Ok(porridge()));
}

// ---------------------------------------------------------------------------
// Short-name scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_majority_for_b() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&name("E1"), &[name("A"), name("B")])
        .unwrap();
    ledger.vote(&name("E1"), &name("A"), &voter(1)).unwrap();
    ledger.vote(&name("E1"), &name("B"), &voter(2)).unwrap();
    ledger.vote(&name("E1"), &name("B"), &voter(3)).unwrap();
    assert_eq!(ledger.winner_name(&name("E1")), Ok(name("B")));
}

#[test]
fn scenario_retry_after_unknown_proposal() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&name("E1"), &[name("A")])
        .unwrap();
    assert_eq!(
        ledger.vote(&name("E1"), &name("B"), &voter(1)),
        Err(GovernanceError::ProposalNotFound(name("B")))
    );
    ledger.vote(&name("E1"), &name("A"), &voter(1)).unwrap();
    assert_eq!(ledger.winner_name(&name("E1")), Ok(name("A")));
}

#[test]
fn padding_and_case_make_distinct_proposals() {
    let ledger = GovernanceLedger::new();
    ledger
        .add_proposals_to_election(&name("E1"), &[name("a"), name("A"), name("a ")])
        .unwrap();
    assert_eq!(ledger.get_proposals(&name("E1")).len(), 3);
}
