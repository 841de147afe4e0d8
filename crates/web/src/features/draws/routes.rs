use axum::{Router, routing::get};

use super::handlers::{create_draw, get_draw, list_draws};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_draws).post(create_draw))
        .route("/:draw_id", get(get_draw))
}
