pub mod all_star;
pub mod cycle;
pub mod draw;
pub mod match_day;
pub mod participation;
pub mod player;

pub use all_star::AllStarBallot;
pub use draw::Draw;
pub use match_day::{MatchDay, MatchDayVote};
pub use participation::{ParticipationChoice, ParticipationStatus};
pub use player::Player;

use thiserror::Error;

/// Raised when a stored or submitted string does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
