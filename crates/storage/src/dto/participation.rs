use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_cycle_key;
use crate::models::{ParticipationChoice, ParticipationStatus, Player};

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitParticipationRequest {
    #[validate(range(min = 1, message = "Player id must be a positive integer"))]
    pub player_id: i32,

    pub status: ParticipationChoice,

    /// Defaults to the current ISO week.
    #[validate(custom(function = "validate_cycle_key"))]
    pub cycle_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationRecordResponse {
    pub id: Uuid,
    pub player: Player,
    pub status: ParticipationChoice,
    pub submitted_at: DateTime<Utc>,
    pub cycle_key: String,
}

impl From<ParticipationStatus> for ParticipationRecordResponse {
    fn from(record: ParticipationStatus) -> Self {
        Self {
            id: record.record_id,
            player: Player::new(record.player_id, record.player_name),
            status: record.status,
            submitted_at: record.submitted_at,
            cycle_key: record.cycle_key,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationAggregates {
    pub yes: usize,
    pub no: usize,
    pub total_responses: usize,
    pub last_updated: Option<DateTime<Utc>>,
    pub cycle_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipationOverviewResponse {
    pub aggregates: ParticipationAggregates,
    pub records: Vec<ParticipationRecordResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitParticipationResponse {
    pub record: ParticipationRecordResponse,
    pub aggregates: ParticipationAggregates,
}
