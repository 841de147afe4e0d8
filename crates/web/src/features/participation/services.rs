use sqlx::PgPool;
use storage::{
    dto::{
        common::ListParams,
        participation::{
            ParticipationOverviewResponse, SubmitParticipationRequest, SubmitParticipationResponse,
        },
    },
    error::Result,
    models::cycle,
    repository::participation::ParticipationRepository,
    roster,
    services::tally,
};

use crate::error::WebResult;

const DEFAULT_RECORD_LIMIT: i64 = 20;
const MAX_RECORD_LIMIT: i64 = 200;

/// Tally and most recent answers of one cycle
pub async fn overview(pool: &PgPool, params: &ListParams) -> Result<ParticipationOverviewResponse> {
    let cycle_key = cycle::resolve_cycle_key(params.cycle_key());
    let limit = params.limit_or(DEFAULT_RECORD_LIMIT, MAX_RECORD_LIMIT) as usize;

    let records = ParticipationRepository::new(pool)
        .list_for_cycle(&cycle_key)
        .await?;

    Ok(ParticipationOverviewResponse {
        aggregates: tally::participation_aggregates(&cycle_key, &records),
        records: records.into_iter().take(limit).map(Into::into).collect(),
    })
}

/// Record a player's answer. Returns whether this was their first answer of the cycle.
pub async fn submit(
    pool: &PgPool,
    request: &SubmitParticipationRequest,
) -> WebResult<(bool, SubmitParticipationResponse)> {
    let player = roster::resolve(request.player_id)?;
    let cycle_key = cycle::resolve_cycle_key(request.cycle_key.as_deref());

    let repo = ParticipationRepository::new(pool);
    let upserted = repo.upsert(&player, request.status, &cycle_key).await?;

    tracing::info!(
        player_id = player.id,
        cycle_key = %cycle_key,
        status = request.status.as_str(),
        inserted = upserted.inserted,
        "Participation recorded"
    );

    let records = repo.list_for_cycle(&cycle_key).await?;

    Ok((
        upserted.inserted,
        SubmitParticipationResponse {
            record: upserted.record.into(),
            aggregates: tally::participation_aggregates(&cycle_key, &records),
        },
    ))
}
