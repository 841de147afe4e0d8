use sqlx::PgPool;

use crate::error::{Result, StorageError};
use crate::models::{MatchDay, MatchDayVote, Player};

use super::Upserted;

pub struct MatchDayRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchDayRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Stores `voter`'s preferred day for `cycle_key`, replacing an earlier vote.
    pub async fn upsert(
        &self,
        voter: &Player,
        day: MatchDay,
        cycle_key: &str,
    ) -> Result<Upserted<MatchDayVote>> {
        match self.insert(voter, day, cycle_key).await {
            Ok(vote) => Ok(Upserted::inserted(vote)),
            Err(e) if e.is_unique_violation() => self
                .update(voter, day, cycle_key)
                .await
                .map(Upserted::replaced),
            Err(e) => Err(e),
        }
    }

    async fn insert(&self, voter: &Player, day: MatchDay, cycle_key: &str) -> Result<MatchDayVote> {
        let vote = sqlx::query_as::<_, MatchDayVote>(
            r#"
            INSERT INTO match_day_votes (voter_id, voter_name, day, cycle_key)
            VALUES ($1, $2, $3, $4)
            RETURNING vote_id, voter_id, voter_name, day, cycle_key, submitted_at
            "#,
        )
        .bind(voter.id)
        .bind(&voter.name)
        .bind(day.as_str())
        .bind(cycle_key)
        .fetch_one(self.pool)
        .await?;

        Ok(vote)
    }

    async fn update(&self, voter: &Player, day: MatchDay, cycle_key: &str) -> Result<MatchDayVote> {
        let vote = sqlx::query_as::<_, MatchDayVote>(
            r#"
            UPDATE match_day_votes
            SET day = $3,
                voter_name = $4,
                submitted_at = now()
            WHERE voter_id = $1 AND cycle_key = $2
            RETURNING vote_id, voter_id, voter_name, day, cycle_key, submitted_at
            "#,
        )
        .bind(voter.id)
        .bind(cycle_key)
        .bind(day.as_str())
        .bind(&voter.name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(vote)
    }

    /// Every vote of a cycle, most recent first.
    pub async fn list_for_cycle(&self, cycle_key: &str) -> Result<Vec<MatchDayVote>> {
        let votes = sqlx::query_as::<_, MatchDayVote>(
            r#"
            SELECT vote_id, voter_id, voter_name, day, cycle_key, submitted_at
            FROM match_day_votes
            WHERE cycle_key = $1
            ORDER BY submitted_at DESC
            "#,
        )
        .bind(cycle_key)
        .fetch_all(self.pool)
        .await?;

        Ok(votes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn count_for_cycle(pool: &PgPool, cycle_key: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM match_day_votes WHERE cycle_key = $1")
            .bind(cycle_key)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when Postgres is available through DATABASE_URL
    async fn test_revote_moves_vote(pool: PgPool) {
        let repo = MatchDayRepository::new(&pool);
        let voter = Player::new(9, "Emirhan");

        repo.upsert(&voter, MatchDay::Monday, "2025-W42")
            .await
            .unwrap();
        let revote = repo
            .upsert(&voter, MatchDay::Friday, "2025-W42")
            .await
            .unwrap();

        assert!(!revote.inserted);
        assert_eq!(revote.record.day, MatchDay::Friday);

        let votes = repo.list_for_cycle("2025-W42").await.unwrap();
        assert_eq!(votes.len(), 1);
        assert_eq!(votes[0].day, MatchDay::Friday);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore] // Only run when Postgres is available through DATABASE_URL
    async fn test_concurrent_first_votes_keep_one_row(pool: PgPool) {
        let repo = MatchDayRepository::new(&pool);
        let voter = Player::new(9, "Emirhan");

        let (first, second) = tokio::join!(
            repo.upsert(&voter, MatchDay::Tuesday, "2025-W42"),
            repo.upsert(&voter, MatchDay::Sunday, "2025-W42"),
        );

        let outcomes = [first.unwrap(), second.unwrap()];
        assert_eq!(outcomes.iter().filter(|o| o.inserted).count(), 1);
        assert_eq!(count_for_cycle(&pool, "2025-W42").await, 1);
    }
}
