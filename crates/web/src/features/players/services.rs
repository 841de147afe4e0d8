use storage::{dto::player::RosterResponse, models::cycle, roster};

/// The roster with the cycle new submissions default to.
pub fn roster() -> RosterResponse {
    RosterResponse {
        players: roster::all(),
        current_cycle_key: cycle::current_cycle_key(),
    }
}
