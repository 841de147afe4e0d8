use axum::Router;

use crate::state::AppState;

pub mod all_star;
pub mod draws;
pub mod match_day;
pub mod participation;
pub mod players;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/players", players::routes::routes())
        .nest("/participation", participation::routes::routes())
        .nest("/match-day", match_day::routes::routes())
        .nest("/all-star", all_star::routes::routes())
        .nest("/draws", draws::routes::routes())
}
