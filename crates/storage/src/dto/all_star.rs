use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{validate_cycle_key, validate_player_ids};
use crate::models::{AllStarBallot, Player};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAllStarBallotRequest {
    #[validate(range(min = 1, message = "Voter id must be a positive integer"))]
    pub voter_id: i32,

    #[validate(
        length(equal = 12, message = "A ballot must contain exactly 12 picks"),
        custom(function = "validate_player_ids")
    )]
    pub pick_ids: Vec<i32>,

    #[validate(custom(function = "validate_cycle_key"))]
    pub cycle_key: Option<String>,
}

impl SubmitAllStarBallotRequest {
    pub fn picks_voter(&self) -> bool {
        self.pick_ids.contains(&self.voter_id)
    }
}

/// Ballots are secret: summaries name the voter but not the picks.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllStarBallotSummary {
    pub id: Uuid,
    pub voter: Player,
    pub submitted_at: DateTime<Utc>,
    pub cycle_key: String,
}

impl From<AllStarBallot> for AllStarBallotSummary {
    fn from(ballot: AllStarBallot) -> Self {
        Self {
            id: ballot.ballot_id,
            voter: Player::new(ballot.voter_id, ballot.voter_name),
            submitted_at: ballot.submitted_at,
            cycle_key: ballot.cycle_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllStarEntry {
    pub player: Player,
    pub votes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllStarResults {
    /// Most voted first.
    pub histogram: Vec<AllStarEntry>,
    pub total_ballots: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub cycle_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AllStarOverviewResponse {
    pub results: AllStarResults,
    pub ballots: Vec<AllStarBallotSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAllStarBallotResponse {
    pub ballot: AllStarBallotSummary,
    pub results: AllStarResults,
}
