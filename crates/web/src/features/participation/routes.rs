use axum::{Router, routing::get};

use super::handlers::{get_participation, submit_participation};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_participation).post(submit_participation))
}
