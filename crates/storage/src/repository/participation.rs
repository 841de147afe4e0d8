use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{ParticipationChoice, ParticipationStatus, Player};

use super::Upserted;

pub struct ParticipationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ParticipationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Records `status` for `player` in `cycle_key`, replacing any earlier answer.
    ///
    /// A concurrent first submission for the same key loses the insert race on
    /// the unique constraint and is retried as an update.
    pub async fn upsert(
        &self,
        player: &Player,
        status: ParticipationChoice,
        cycle_key: &str,
    ) -> Result<Upserted<ParticipationStatus>> {
        match self.insert(player, status, cycle_key).await {
            Ok(record) => Ok(Upserted::inserted(record)),
            Err(e) if e.is_unique_violation() => self
                .update(player, status, cycle_key)
                .await
                .map(Upserted::replaced),
            Err(e) => Err(e),
        }
    }

    async fn insert(
        &self,
        player: &Player,
        status: ParticipationChoice,
        cycle_key: &str,
    ) -> Result<ParticipationStatus> {
        let record = sqlx::query_as::<_, ParticipationStatus>(
            r#"
            INSERT INTO participation_statuses (player_id, player_name, status, cycle_key)
            VALUES ($1, $2, $3, $4)
            RETURNING record_id, player_id, player_name, status, cycle_key, submitted_at
            "#,
        )
        .bind(player.id)
        .bind(&player.name)
        .bind(status.as_str())
        .bind(cycle_key)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }

    async fn update(
        &self,
        player: &Player,
        status: ParticipationChoice,
        cycle_key: &str,
    ) -> Result<ParticipationStatus> {
        let record = sqlx::query_as::<_, ParticipationStatus>(
            r#"
            UPDATE participation_statuses
            SET status = $3,
                player_name = $4,
                submitted_at = now()
            WHERE player_id = $1 AND cycle_key = $2
            RETURNING record_id, player_id, player_name, status, cycle_key, submitted_at
            "#,
        )
        .bind(player.id)
        .bind(cycle_key)
        .bind(status.as_str())
        .bind(&player.name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(record)
    }

    /// Every answer of a cycle, most recent first.
    pub async fn list_for_cycle(&self, cycle_key: &str) -> Result<Vec<ParticipationStatus>> {
        let records = sqlx::query_as::<_, ParticipationStatus>(
            r#"
            SELECT record_id, player_id, player_name, status, cycle_key, submitted_at
            FROM participation_statuses
            WHERE cycle_key = $1
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(cycle_key)
        .fetch_all(self.pool)
        .await?;

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count_for_cycle(pool: &PgPool, cycle_key: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participation_statuses WHERE cycle_key = $1")
            .bind(cycle_key)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when Postgres is available through DATABASE_URL
    async fn test_resubmission_replaces_answer(pool: PgPool) {
        let repo = ParticipationRepository::new(&pool);
        let player = Player::new(3, "Ahsen");

        let first = repo
            .upsert(&player, ParticipationChoice::Yes, "2025-W42")
            .await
            .unwrap();
        let second = repo
            .upsert(&player, ParticipationChoice::No, "2025-W42")
            .await
            .unwrap();

        assert!(first.inserted);
        assert!(!second.inserted);
        assert_eq!(first.record.record_id, second.record.record_id);
        assert_eq!(second.record.status, ParticipationChoice::No);
        assert!(second.record.submitted_at >= first.record.submitted_at);
        assert_eq!(count_for_cycle(&pool, "2025-W42").await, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when Postgres is available through DATABASE_URL
    async fn test_cycles_are_independent(pool: PgPool) {
        let repo = ParticipationRepository::new(&pool);
        let player = Player::new(3, "Ahsen");

        repo.upsert(&player, ParticipationChoice::Yes, "2025-W42")
            .await
            .unwrap();
        let next = repo
            .upsert(&player, ParticipationChoice::Yes, "2025-W43")
            .await
            .unwrap();

        assert!(next.inserted);
        assert_eq!(repo.list_for_cycle("2025-W42").await.unwrap().len(), 1);
        assert_eq!(repo.list_for_cycle("2025-W43").await.unwrap().len(), 1);
    }
}
