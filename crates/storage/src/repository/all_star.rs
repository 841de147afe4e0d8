use sqlx::{PgPool, types::Json};

use crate::error::{Result, StorageError};
use crate::models::{AllStarBallot, Player};

use super::Upserted;

pub struct AllStarRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AllStarRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Stores `voter`'s ballot for `cycle_key`, replacing an earlier ballot.
    pub async fn upsert(
        &self,
        voter: &Player,
        picks: &[Player],
        cycle_key: &str,
    ) -> Result<Upserted<AllStarBallot>> {
        match self.insert(voter, picks, cycle_key).await {
            Ok(ballot) => Ok(Upserted::inserted(ballot)),
            Err(e) if e.is_unique_violation() => self
                .update(voter, picks, cycle_key)
                .await
                .map(Upserted::replaced),
            Err(e) => Err(e),
        }
    }

    async fn insert(
        &self,
        voter: &Player,
        picks: &[Player],
        cycle_key: &str,
    ) -> Result<AllStarBallot> {
        let ballot = sqlx::query_as::<_, AllStarBallot>(
            r#"
            INSERT INTO all_star_ballots (voter_id, voter_name, picks, cycle_key)
            VALUES ($1, $2, $3, $4)
            RETURNING ballot_id, voter_id, voter_name, picks, cycle_key, submitted_at
            "#,
        )
        .bind(voter.id)
        .bind(&voter.name)
        .bind(Json(picks))
        .bind(cycle_key)
        .fetch_one(self.pool)
        .await?;

        Ok(ballot)
    }

    async fn update(
        &self,
        voter: &Player,
        picks: &[Player],
        cycle_key: &str,
    ) -> Result<AllStarBallot> {
        let ballot = sqlx::query_as::<_, AllStarBallot>(
            r#"
            UPDATE all_star_ballots
            SET picks = $3,
                voter_name = $4,
                submitted_at = now()
            WHERE voter_id = $1 AND cycle_key = $2
            RETURNING ballot_id, voter_id, voter_name, picks, cycle_key, submitted_at
            "#,
        )
        .bind(voter.id)
        .bind(cycle_key)
        .bind(Json(picks))
        .bind(&voter.name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(ballot)
    }

    /// Every ballot of a cycle, most recent first.
    pub async fn list_for_cycle(&self, cycle_key: &str) -> Result<Vec<AllStarBallot>> {
        let ballots = sqlx::query_as::<_, AllStarBallot>(
            r#"
            SELECT ballot_id, voter_id, voter_name, picks, cycle_key, submitted_at
            FROM all_star_ballots
            WHERE cycle_key = $1
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(cycle_key)
        .fetch_all(self.pool)
        .await?;

        Ok(ballots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster;

    async fn count_for_cycle(pool: &PgPool, cycle_key: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM all_star_ballots WHERE cycle_key = $1")
            .bind(cycle_key)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when Postgres is available through DATABASE_URL
    async fn test_ballot_resubmission_keeps_one_row(pool: PgPool) {
        let repo = AllStarRepository::new(&pool);
        let voter = roster::resolve(1).unwrap();
        let first_picks = roster::resolve_many(&(2..=13).collect::<Vec<_>>()).unwrap();
        let second_picks = roster::resolve_many(&(12..=23).collect::<Vec<_>>()).unwrap();

        repo.upsert(&voter, &first_picks, "2025-W42").await.unwrap();
        let replaced = repo
            .upsert(&voter, &second_picks, "2025-W42")
            .await
            .unwrap();

        assert!(!replaced.inserted);
        assert_eq!(replaced.record.picks.0, second_picks);
        assert_eq!(count_for_cycle(&pool, "2025-W42").await, 1);
    }
}
