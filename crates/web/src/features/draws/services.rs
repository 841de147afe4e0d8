use sqlx::PgPool;
use storage::{
    dto::{
        common::ListParams,
        draw::{CreateDrawRequest, DrawHistoryResponse, DrawRecord},
    },
    error::Result,
    models::cycle,
    repository::draw::{DrawRepository, NewDraw},
    roster,
    services::draw_engine,
};
use uuid::Uuid;

use crate::error::WebResult;

const DEFAULT_HISTORY_LIMIT: i64 = 10;
const MAX_HISTORY_LIMIT: i64 = 100;

/// Resolve the pools against the roster, draw a squad and persist it.
pub async fn create(pool: &PgPool, request: &CreateDrawRequest) -> WebResult<DrawRecord> {
    let conductor = roster::resolve(request.conductor_id)?;
    let locked = roster::resolve_many(&request.locked_player_ids)?;
    let candidates = roster::resolve_many(&request.candidate_player_ids)?;

    let outcome = draw_engine::draw(&locked, &candidates, &mut rand::thread_rng())?;
    let cycle_key = cycle::resolve_cycle_key(request.cycle_key.as_deref());

    let draw = DrawRepository::new(pool)
        .create(&NewDraw {
            conductor: &conductor,
            locked_players: &locked,
            primary_players: &outcome.primary,
            reserve_players: &outcome.reserve,
            cycle_key: &cycle_key,
        })
        .await?;

    tracing::info!(
        draw_id = %draw.draw_id,
        conductor_id = conductor.id,
        cycle_key = %cycle_key,
        primary = outcome.primary.len(),
        reserve = outcome.reserve.len(),
        "Squad drawn"
    );

    Ok(draw.into())
}

/// Recent draws, newest first. Without a cycle key every cycle is included.
pub async fn history(pool: &PgPool, params: &ListParams) -> Result<DrawHistoryResponse> {
    let limit = params.limit_or(DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT);

    let history: Vec<DrawRecord> = DrawRepository::new(pool)
        .history(params.cycle_key(), limit)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(DrawHistoryResponse {
        latest: history.first().cloned(),
        history,
    })
}

pub async fn get(pool: &PgPool, draw_id: Uuid) -> Result<DrawRecord> {
    let draw = DrawRepository::new(pool).find_by_id(draw_id).await?;
    Ok(draw.into())
}
