use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Player;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse {
    pub players: Vec<Player>,
    /// Cycle that submissions without an explicit key fall into.
    pub current_cycle_key: String,
}
