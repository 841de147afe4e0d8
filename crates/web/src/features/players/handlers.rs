use axum::{
    Json,
    response::{IntoResponse, Response},
};
use storage::dto::player::RosterResponse;

use super::services;

#[utoipa::path(
    get,
    path = "/api/players",
    responses(
        (status = 200, description = "Team roster and the current cycle", body = RosterResponse)
    ),
    tag = "players"
)]
pub async fn list_players() -> Response {
    Json(services::roster()).into_response()
}
