use sqlx::{PgPool, Postgres, QueryBuilder, types::Json};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::{Draw, Player};

/// Fields of a draw about to be written.
#[derive(Debug, Clone)]
pub struct NewDraw<'a> {
    pub conductor: &'a Player,
    pub locked_players: &'a [Player],
    pub primary_players: &'a [Player],
    pub reserve_players: &'a [Player],
    pub cycle_key: &'a str,
}

pub struct DrawRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> DrawRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, draw: &NewDraw<'_>) -> Result<Draw> {
        let created = sqlx::query_as::<_, Draw>(
            r#"
            INSERT INTO draws (conductor, locked_players, primary_players, reserve_players, cycle_key)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING draw_id, conductor, locked_players, primary_players, reserve_players,
                      cycle_key, created_at
            "#,
        )
        .bind(Json(draw.conductor))
        .bind(Json(draw.locked_players))
        .bind(Json(draw.primary_players))
        .bind(Json(draw.reserve_players))
        .bind(draw.cycle_key)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            let e = StorageError::from(e);
            if e.is_check_violation() {
                return StorageError::ConstraintViolation(
                    "A draw must include at least 12 primary players".to_string(),
                );
            }
            e
        })?;

        Ok(created)
    }

    pub async fn find_by_id(&self, draw_id: Uuid) -> Result<Draw> {
        let draw = sqlx::query_as::<_, Draw>(
            r#"
            SELECT draw_id, conductor, locked_players, primary_players, reserve_players,
                   cycle_key, created_at
            FROM draws
            WHERE draw_id = $1
            "#,
        )
        .bind(draw_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(draw)
    }

    /// Most recent draws first, optionally restricted to one cycle.
    pub async fn history(&self, cycle_key: Option<&str>, limit: i64) -> Result<Vec<Draw>> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            r#"
            SELECT draw_id, conductor, locked_players, primary_players, reserve_players,
                   cycle_key, created_at
            FROM draws
            "#,
        );

        if let Some(cycle_key) = cycle_key {
            query.push(" WHERE cycle_key = ");
            query.push_bind(cycle_key);
        }

        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(limit);

        let draws = query.build_query_as::<Draw>().fetch_all(self.pool).await?;

        Ok(draws)
    }
}
