use sqlx::PgPool;
use storage::{
    dto::{
        common::ListParams,
        match_day::{MatchDayOverviewResponse, SubmitMatchDayVoteRequest, SubmitMatchDayVoteResponse},
    },
    error::Result,
    models::cycle,
    repository::match_day::MatchDayRepository,
    roster,
    services::tally,
};

use crate::error::WebResult;

const DEFAULT_VOTE_LIMIT: i64 = 20;
const MAX_VOTE_LIMIT: i64 = 100;

/// Day counts, winner and most recent votes of one cycle
pub async fn overview(pool: &PgPool, params: &ListParams) -> Result<MatchDayOverviewResponse> {
    let cycle_key = cycle::resolve_cycle_key(params.cycle_key());
    let limit = params.limit_or(DEFAULT_VOTE_LIMIT, MAX_VOTE_LIMIT) as usize;

    let votes = MatchDayRepository::new(pool)
        .list_for_cycle(&cycle_key)
        .await?;

    Ok(MatchDayOverviewResponse {
        results: tally::match_day_results(&cycle_key, &votes),
        votes: votes.into_iter().take(limit).map(Into::into).collect(),
    })
}

/// Record a match day vote. Returns whether this was the voter's first vote of the cycle.
pub async fn submit(
    pool: &PgPool,
    request: &SubmitMatchDayVoteRequest,
) -> WebResult<(bool, SubmitMatchDayVoteResponse)> {
    let voter = roster::resolve(request.voter_id)?;
    let cycle_key = cycle::resolve_cycle_key(request.cycle_key.as_deref());

    let repo = MatchDayRepository::new(pool);
    let upserted = repo.upsert(&voter, request.day, &cycle_key).await?;

    tracing::info!(
        voter_id = voter.id,
        cycle_key = %cycle_key,
        day = request.day.as_str(),
        inserted = upserted.inserted,
        "Match day vote recorded"
    );

    let votes = repo.list_for_cycle(&cycle_key).await?;

    Ok((
        upserted.inserted,
        SubmitMatchDayVoteResponse {
            vote: upserted.record.into(),
            results: tally::match_day_results(&cycle_key, &votes),
        },
    ))
}
