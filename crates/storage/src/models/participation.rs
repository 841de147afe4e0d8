use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ParticipationChoice {
    Yes,
    No,
}

impl ParticipationChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl TryFrom<String> for ParticipationChoice {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(UnknownVariant {
                kind: "participation status",
                value,
            }),
        }
    }
}

/// One player's answer for one cycle. Unique per `(player_id, cycle_key)`.
#[derive(Debug, Clone, FromRow)]
pub struct ParticipationStatus {
    pub record_id: Uuid,
    pub player_id: i32,
    pub player_name: String,
    #[sqlx(try_from = "String")]
    pub status: ParticipationChoice,
    pub cycle_key: String,
    pub submitted_at: DateTime<Utc>,
}
