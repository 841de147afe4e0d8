use axum::{Router, routing::get};

use super::handlers::{get_match_day, submit_match_day_vote};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_match_day).post(submit_match_day_vote))
}
