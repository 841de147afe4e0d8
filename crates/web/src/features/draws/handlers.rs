use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{ErrorResponse, ListParams},
        draw::{CreateDrawRequest, CreateDrawResponse, DrawHistoryResponse, DrawRecord},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/draws",
    params(ListParams),
    responses(
        (status = 200, description = "Recent draws, newest first", body = DrawHistoryResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "draws"
)]
pub async fn list_draws(
    State(db): State<Database>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(params) = params?;

    let history = services::history(db.pool(), &params).await?;

    Ok(Json(history).into_response())
}

#[utoipa::path(
    post,
    path = "/api/draws",
    request_body = CreateDrawRequest,
    responses(
        (status = 201, description = "Squad drawn and stored", body = CreateDrawResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "draws"
)]
pub async fn create_draw(
    State(db): State<Database>,
    payload: Result<Json<CreateDrawRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let draw = services::create(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CreateDrawResponse { draw })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/draws/{draw_id}",
    params(
        ("draw_id" = Uuid, Path, description = "Draw identifier")
    ),
    responses(
        (status = 200, description = "Draw found", body = DrawRecord),
        (status = 404, description = "Draw not found", body = ErrorResponse)
    ),
    tag = "draws"
)]
pub async fn get_draw(
    State(db): State<Database>,
    draw_id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(draw_id) = draw_id?;

    let draw = services::get(db.pool(), draw_id).await?;

    Ok(Json(draw).into_response())
}
