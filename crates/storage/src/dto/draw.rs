use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::common::{validate_cycle_key, validate_player_ids, validation_error};
use crate::models::{Draw, Player};
use crate::services::draw_engine::SQUAD_SIZE;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_pools"))]
pub struct CreateDrawRequest {
    #[validate(range(min = 1, message = "Conductor id must be a positive integer"))]
    pub conductor_id: i32,

    /// Players guaranteed a primary slot.
    #[validate(
        length(max = 12, message = "At most 12 players can be locked"),
        custom(function = "validate_player_ids")
    )]
    #[serde(default)]
    pub locked_player_ids: Vec<i32>,

    /// Players competing for the remaining slots.
    #[validate(custom(function = "validate_player_ids"))]
    pub candidate_player_ids: Vec<i32>,

    #[validate(custom(function = "validate_cycle_key"))]
    pub cycle_key: Option<String>,
}

fn validate_pools(request: &CreateDrawRequest) -> Result<(), ValidationError> {
    if request
        .locked_player_ids
        .iter()
        .any(|id| request.candidate_player_ids.contains(id))
    {
        return Err(validation_error(
            "locked_in_candidates",
            "Locked players must not also be candidates",
        ));
    }

    if request.locked_player_ids.len() + request.candidate_player_ids.len() < SQUAD_SIZE {
        return Err(validation_error(
            "not_enough_players",
            "Locked players and candidates must add up to at least 12",
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DrawRecord {
    pub id: Uuid,
    pub conductor: Player,
    pub locked_players: Vec<Player>,
    /// Locked players first, then drawn candidates.
    pub primary_players: Vec<Player>,
    pub reserve_players: Vec<Player>,
    pub cycle_key: String,
    pub created_at: DateTime<Utc>,
}

impl From<Draw> for DrawRecord {
    fn from(draw: Draw) -> Self {
        Self {
            id: draw.draw_id,
            conductor: draw.conductor.0,
            locked_players: draw.locked_players.0,
            primary_players: draw.primary_players.0,
            reserve_players: draw.reserve_players.0,
            cycle_key: draw.cycle_key,
            created_at: draw.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateDrawResponse {
    pub draw: DrawRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DrawHistoryResponse {
    /// Most recent draw of the requested scope.
    pub latest: Option<DrawRecord>,
    pub history: Vec<DrawRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(locked: Vec<i32>, candidates: Vec<i32>) -> CreateDrawRequest {
        CreateDrawRequest {
            conductor_id: 1,
            locked_player_ids: locked,
            candidate_player_ids: candidates,
            cycle_key: None,
        }
    }

    #[test]
    fn test_accepts_disjoint_pools_of_twelve() {
        assert!(request(vec![1, 2], (3..=13).collect()).validate().is_ok());
        assert!(request(vec![], (1..=12).collect()).validate().is_ok());
    }

    #[test]
    fn test_rejects_small_pool() {
        let errors = request(vec![1], (2..=11).collect()).validate().unwrap_err();
        assert!(!errors.errors().is_empty());
    }

    #[test]
    fn test_rejects_overlap() {
        let errors = request(vec![3], (1..=12).collect()).validate().unwrap_err();
        assert!(!errors.errors().is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut candidates: Vec<i32> = (3..=14).collect();
        candidates.push(3);
        let errors = request(vec![1], candidates).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("candidate_player_ids"));
    }

    #[test]
    fn test_rejects_too_many_locked() {
        let errors = request((1..=13).collect(), vec![]).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("locked_player_ids"));
    }

    #[test]
    fn test_locked_players_default_to_empty() {
        let request: CreateDrawRequest = serde_json::from_str(
            r#"{"conductorId": 1, "candidatePlayerIds": [1,2,3,4,5,6,7,8,9,10,11,12]}"#,
        )
        .unwrap();
        assert!(request.locked_player_ids.is_empty());
        assert!(request.validate().is_ok());
    }
}
