use chrono::{DateTime, Utc};
use sqlx::{FromRow, types::Json};
use uuid::Uuid;

use super::Player;

/// A voter's 12 all-star picks for one cycle.
#[derive(Debug, Clone, FromRow)]
pub struct AllStarBallot {
    pub ballot_id: Uuid,
    pub voter_id: i32,
    pub voter_name: String,
    pub picks: Json<Vec<Player>>,
    pub cycle_key: String,
    pub submitted_at: DateTime<Utc>,
}
