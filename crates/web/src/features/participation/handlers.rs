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
        participation::{
            ParticipationOverviewResponse, SubmitParticipationRequest, SubmitParticipationResponse,
        },
    },
};
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/participation",
    params(ListParams),
    responses(
        (status = 200, description = "Participation tally for the cycle", body = ParticipationOverviewResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "participation"
)]
pub async fn get_participation(
    State(db): State<Database>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(params) = params?;

    let overview = services::overview(db.pool(), &params).await?;

    Ok(Json(overview).into_response())
}

#[utoipa::path(
    post,
    path = "/api/participation",
    request_body = SubmitParticipationRequest,
    responses(
        (status = 201, description = "First answer of the cycle recorded", body = SubmitParticipationResponse),
        (status = 200, description = "Earlier answer replaced", body = SubmitParticipationResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "participation"
)]
pub async fn submit_participation(
    State(db): State<Database>,
    payload: Result<Json<SubmitParticipationRequest>, JsonRejection>,
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
