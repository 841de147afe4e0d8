use chrono::{DateTime, Utc};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

use super::Player;

/// A persisted draw. Immutable once written; a cycle may hold several.
#[derive(Debug, Clone, FromRow)]
pub struct Draw {
    pub draw_id: Uuid,
    pub conductor: Json<Player>,
    pub locked_players: Json<Vec<Player>>,
    pub primary_players: Json<Vec<Player>>,
    pub reserve_players: Json<Vec<Player>>,
    pub cycle_key: String,
    pub created_at: DateTime<Utc>,
}
