use axum::{Router, routing::get};

use super::handlers::{get_all_star, submit_all_star_ballot};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(get_all_star).post(submit_all_star_ballot))
}
