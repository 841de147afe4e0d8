use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::{ErrorResponse, ListParams},
        match_day::{MatchDayOverviewResponse, SubmitMatchDayVoteRequest, SubmitMatchDayVoteResponse},
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/match-day",
    params(ListParams),
    responses(
        (status = 200, description = "Match day results for the cycle", body = MatchDayOverviewResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "match-day"
)]
pub async fn get_match_day(
    State(db): State<Database>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(params) = params?;

    let overview = services::overview(db.pool(), &params).await?;

    Ok(Json(overview).into_response())
}

#[utoipa::path(
    post,
    path = "/api/match-day",
    request_body = SubmitMatchDayVoteRequest,
    responses(
        (status = 201, description = "First vote of the cycle recorded", body = SubmitMatchDayVoteResponse),
        (status = 200, description = "Earlier vote replaced", body = SubmitMatchDayVoteResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "match-day"
)]
pub async fn submit_match_day_vote(
    State(db): State<Database>,
    payload: Result<Json<SubmitMatchDayVoteRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let (inserted, response) = services::submit(db.pool(), &req).await?;

    let status = if inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)).into_response())
}
