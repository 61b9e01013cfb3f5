//! RPC request handlers and their JSON shapes.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::{Deserialize, Serialize};
use tally_governance::{GovernanceLedger, ProposalView};
use tally_types::{Name, VoterId};
use tally_utils::{OperationStats, StatsSnapshot};
use tracing::debug;

use crate::error::RpcError;

/// Header carrying the caller's voter identity.
pub const VOTER_HEADER: &str = "x-voter-id";

/// State shared by every handler.
pub struct AppState {
    pub ledger: Arc<GovernanceLedger>,
    pub stats: OperationStats,
}

impl AppState {
    pub fn new(ledger: Arc<GovernanceLedger>) -> Self {
        Self {
            ledger,
            stats: OperationStats::new(),
        }
    }
}

// ── Proposals ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddProposalsRequest {
    pub proposals: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ProposalsResponse {
    pub proposals: Vec<ProposalView>,
}

// ── Votes ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct VoteRequest {
    pub proposal: String,
}

#[derive(Serialize, Deserialize)]
pub struct VoteResponse {
    pub proposal: Name,
    pub vote_count: u64,
}

// ── Elections ────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize)]
pub struct WinnerResponse {
    pub winner: Name,
}

#[derive(Serialize, Deserialize)]
pub struct ElectionsResponse {
    pub elections: Vec<Name>,
}

#[derive(Serialize, Deserialize)]
pub struct VotedResponse {
    pub voted: bool,
}

// ── Status ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct StatusResponse {
    /// Number of known elections.
    pub elections: usize,
    #[serde(flatten)]
    pub stats: StatsSnapshot,
}

// ── Helpers ──────────────────────────────────────────────────────────────

fn parse_name(raw: &str) -> Result<Name, RpcError> {
    Ok(raw.parse::<Name>()?)
}

fn voter_from_headers(headers: &HeaderMap) -> Result<VoterId, RpcError> {
    let raw = headers
        .get(VOTER_HEADER)
        .ok_or_else(|| RpcError::InvalidRequest(format!("missing {VOTER_HEADER} header")))?
        .to_str()
        .map_err(|_| RpcError::InvalidRequest(format!("{VOTER_HEADER} is not valid text")))?;
    let voter = VoterId::new(raw);
    if voter.as_str().trim().is_empty() {
        return Err(RpcError::InvalidRequest(format!("empty {VOTER_HEADER} header")));
    }
    Ok(voter)
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, RpcError> {
    payload
        .map(|Json(inner)| inner)
        .map_err(|rejection| RpcError::InvalidRequest(rejection.body_text()))
}

// ── Handlers ─────────────────────────────────────────────────────────────

/// `POST /elections/:election/proposals`
pub async fn add_proposals(
    State(state): State<Arc<AppState>>,
    Path(election): Path<String>,
    payload: Result<Json<AddProposalsRequest>, JsonRejection>,
) -> Result<StatusCode, RpcError> {
    let election = parse_name(&election)?;
    let request = body(payload)?;
    let names = request
        .proposals
        .iter()
        .map(|raw| parse_name(raw))
        .collect::<Result<Vec<_>, _>>()?;

    match state.ledger.add_proposals_to_election(&election, &names) {
        Ok(()) => {
            state.stats.record_proposals_added(names.len() as u64);
            debug!(%election, count = names.len(), "proposals added via rpc");
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => {
            state.stats.record_batch_rejected();
            Err(e.into())
        }
    }
}

/// `GET /elections/:election/proposals`
pub async fn get_proposals(
    State(state): State<Arc<AppState>>,
    Path(election): Path<String>,
) -> Result<Json<ProposalsResponse>, RpcError> {
    let election = parse_name(&election)?;
    Ok(Json(ProposalsResponse {
        proposals: state.ledger.get_proposals(&election),
    }))
}

/// `POST /elections/:election/votes`
pub async fn vote(
    State(state): State<Arc<AppState>>,
    Path(election): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<Json<VoteResponse>, RpcError> {
    let election = parse_name(&election)?;
    let voter = voter_from_headers(&headers)?;
    let proposal = parse_name(&body(payload)?.proposal)?;

    let result = state.ledger.vote(&election, &proposal, &voter);
    state.stats.record_vote(result.is_ok());
    let vote_count = result?;
    Ok(Json(VoteResponse {
        proposal,
        vote_count,
    }))
}

/// `GET /elections/:election/winner`
pub async fn winner(
    State(state): State<Arc<AppState>>,
    Path(election): Path<String>,
) -> Result<Json<WinnerResponse>, RpcError> {
    let election = parse_name(&election)?;
    state.stats.record_winner_query();
    let winner = state.ledger.winner_name(&election)?;
    Ok(Json(WinnerResponse { winner }))
}

/// `GET /elections`
pub async fn elections(State(state): State<Arc<AppState>>) -> Json<ElectionsResponse> {
    Json(ElectionsResponse {
        elections: state.ledger.election_names(),
    })
}

/// `GET /elections/:election/voters/:voter`
pub async fn has_voted(
    State(state): State<Arc<AppState>>,
    Path((election, voter)): Path<(String, String)>,
) -> Result<Json<VotedResponse>, RpcError> {
    let election = parse_name(&election)?;
    Ok(Json(VotedResponse {
        voted: state.ledger.has_voted(&election, &VoterId::new(voter)),
    }))
}

/// `GET /status`
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        elections: state.ledger.election_count(),
        stats: state.stats.snapshot(),
    })
}
