use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_cycle_key;
use crate::models::{MatchDay, MatchDayVote, Player};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMatchDayVoteRequest {
    #[validate(range(min = 1, message = "Voter id must be a positive integer"))]
    pub voter_id: i32,

    pub day: MatchDay,

    #[validate(custom(function = "validate_cycle_key"))]
    pub cycle_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDayVoteSummary {
    pub id: Uuid,
    pub voter: Player,
    pub day: MatchDay,
    pub submitted_at: DateTime<Utc>,
    pub cycle_key: String,
}

impl From<MatchDayVote> for MatchDayVoteSummary {
    fn from(vote: MatchDayVote) -> Self {
        Self {
            id: vote.vote_id,
            voter: Player::new(vote.voter_id, vote.voter_name),
            day: vote.day,
            submitted_at: vote.submitted_at,
            cycle_key: vote.cycle_key,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DayCount {
    pub day: MatchDay,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDayResults {
    /// `None` until the first vote arrives.
    pub winning_day: Option<MatchDay>,
    /// All seven days, Monday to Sunday, zero-filled.
    pub day_counts: Vec<DayCount>,
    pub total_votes: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub cycle_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchDayOverviewResponse {
    pub results: MatchDayResults,
    pub votes: Vec<MatchDayVoteSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitMatchDayVoteResponse {
    pub vote: MatchDayVoteSummary,
    pub results: MatchDayResults,
}
