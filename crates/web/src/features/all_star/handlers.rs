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
        all_star::{AllStarOverviewResponse, SubmitAllStarBallotRequest, SubmitAllStarBallotResponse},
        common::{ErrorResponse, ListParams},
    },
};
use validator::Validate;

use crate::error::WebError;
use crate::state::BallotPolicy;

use super::services;

#[utoipa::path(
    get,
    path = "/api/all-star",
    params(ListParams),
    responses(
        (status = 200, description = "All-star histogram for the cycle", body = AllStarOverviewResponse),
        (status = 400, description = "Invalid query parameters", body = ErrorResponse)
    ),
    tag = "all-star"
)]
pub async fn get_all_star(
    State(db): State<Database>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(params) = params?;

    let overview = services::overview(db.pool(), &params).await?;

    Ok(Json(overview).into_response())
}

#[utoipa::path(
    post,
    path = "/api/all-star",
    request_body = SubmitAllStarBallotRequest,
    responses(
        (status = 201, description = "First ballot of the cycle recorded", body = SubmitAllStarBallotResponse),
        (status = 200, description = "Earlier ballot replaced", body = SubmitAllStarBallotResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "all-star"
)]
pub async fn submit_all_star_ballot(
    State(db): State<Database>,
    State(policy): State<BallotPolicy>,
    payload: Result<Json<SubmitAllStarBallotRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let (inserted, response) = services::submit(db.pool(), policy, &req).await?;

    let status = if inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(response)).into_response())
}
