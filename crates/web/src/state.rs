use axum::extract::FromRef;
use storage::Database;

/// Whether an all-star voter may include themselves in their picks.
#[derive(Debug, Clone, Copy, Default)]
pub struct BallotPolicy {
    pub allow_self_vote: bool,
}

#[derive(Debug, Clone, FromRef)]
pub struct AppState {
    pub db: Database,
    pub ballot_policy: BallotPolicy,
}
