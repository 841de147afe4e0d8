use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::UnknownVariant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MatchDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl MatchDay {
    /// Canonical Monday to Sunday order. Ties in the tally resolve to the
    /// earliest entry.
    pub const ALL: [MatchDay; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<String> for MatchDay {
    type Error = UnknownVariant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == value)
            .ok_or(UnknownVariant {
                kind: "match day",
                value,
            })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct MatchDayVote {
    pub vote_id: Uuid,
    pub voter_id: i32,
    pub voter_name: String,
    #[sqlx(try_from = "String")]
    pub day: MatchDay,
    pub cycle_key: String,
    pub submitted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_parsing() {
        assert_eq!(MatchDay::try_from("friday".to_string()), Ok(MatchDay::Friday));
        assert!(MatchDay::try_from("Friday".to_string()).is_err());
        assert!(MatchDay::try_from("someday".to_string()).is_err());
    }

    #[test]
    fn test_index_follows_canonical_order() {
        for (position, day) in MatchDay::ALL.iter().enumerate() {
            assert_eq!(day.index(), position);
        }
    }
}
