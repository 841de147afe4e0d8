use sqlx::PgPool;
use storage::{
    dto::{
        all_star::{AllStarOverviewResponse, SubmitAllStarBallotRequest, SubmitAllStarBallotResponse},
        common::ListParams,
    },
    error::Result,
    models::cycle,
    repository::all_star::AllStarRepository,
    roster,
    services::tally,
};

use crate::error::{WebError, WebResult};
use crate::state::BallotPolicy;

const DEFAULT_BALLOT_LIMIT: i64 = 20;
const MAX_BALLOT_LIMIT: i64 = 100;

/// Pick histogram and most recent ballots of one cycle
pub async fn overview(pool: &PgPool, params: &ListParams) -> Result<AllStarOverviewResponse> {
    let cycle_key = cycle::resolve_cycle_key(params.cycle_key());
    let limit = params.limit_or(DEFAULT_BALLOT_LIMIT, MAX_BALLOT_LIMIT) as usize;

    let ballots = AllStarRepository::new(pool)
        .list_for_cycle(&cycle_key)
        .await?;

    Ok(AllStarOverviewResponse {
        results: tally::all_star_results(&cycle_key, &ballots),
        ballots: ballots.into_iter().take(limit).map(Into::into).collect(),
    })
}

/// Store a ballot. Returns whether this was the voter's first ballot of the cycle.
pub async fn submit(
    pool: &PgPool,
    policy: BallotPolicy,
    request: &SubmitAllStarBallotRequest,
) -> WebResult<(bool, SubmitAllStarBallotResponse)> {
    if !policy.allow_self_vote && request.picks_voter() {
        return Err(WebError::BadRequest(
            "Voters cannot pick themselves".to_string(),
        ));
    }

    let voter = roster::resolve(request.voter_id)?;
    let picks = roster::resolve_many(&request.pick_ids)?;
    let cycle_key = cycle::resolve_cycle_key(request.cycle_key.as_deref());

    let repo = AllStarRepository::new(pool);
    let upserted = repo.upsert(&voter, &picks, &cycle_key).await?;

    tracing::info!(
        voter_id = voter.id,
        cycle_key = %cycle_key,
        inserted = upserted.inserted,
        "All-star ballot recorded"
    );

    let ballots = repo.list_for_cycle(&cycle_key).await?;

    Ok((
        upserted.inserted,
        SubmitAllStarBallotResponse {
            ballot: upserted.record.into(),
            results: tally::all_star_results(&cycle_key, &ballots),
        },
    ))
}
