//! Server status lookups for the auxiliary client requests.

use super::DbPool;
use crate::{KaplarError, Result};

/// Race ID reported when no boosted creature is available.
pub const DEFAULT_BOOSTED_RACE_ID: i64 = 35;

/// Repository for the boosted creature and online player tables.
pub struct StatusRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> StatusRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Race ID of today's boosted creature, if the game server has set one.
    pub async fn boosted_race_id(&self) -> Result<Option<i64>> {
        let race_id = sqlx::query_scalar::<_, i64>("SELECT raceid FROM boosted_creature LIMIT 1")
            .fetch_optional(self.pool)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        Ok(race_id)
    }

    /// Replace the boosted creature.
    pub async fn set_boosted_creature(&self, name: &str, race_id: i64) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        sqlx::query("DELETE FROM boosted_creature")
            .execute(&mut *tx)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;
        sqlx::query("INSERT INTO boosted_creature (boostname, raceid) VALUES (?, ?)")
            .bind(name)
            .bind(race_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;
        Ok(())
    }

    /// Count the players currently online.
    pub async fn count_online(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM players_online")
            .fetch_one(self.pool)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        Ok(count)
    }

    /// Mark a player as online.
    pub async fn mark_online(&self, player_id: i64) -> Result<()> {
        sqlx::query("INSERT INTO players_online (player_id) VALUES (?)")
            .bind(player_id)
            .execute(self.pool)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;
        Ok(())
    }
}

#[cfg(all(test, not(feature = "mysql")))]
mod tests {
    use super::*;
    use crate::Database;

    #[tokio::test]
    async fn test_no_boosted_creature() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = StatusRepository::new(db.pool());

        assert_eq!(repo.boosted_race_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_boosted_creature_replaces() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = StatusRepository::new(db.pool());

        repo.set_boosted_creature("Rat", 21).await.unwrap();
        repo.set_boosted_creature("Dragon", 39).await.unwrap();

        assert_eq!(repo.boosted_race_id().await.unwrap(), Some(39));
    }

    #[tokio::test]
    async fn test_count_online() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = StatusRepository::new(db.pool());

        assert_eq!(repo.count_online().await.unwrap(), 0);
        repo.mark_online(1).await.unwrap();
        repo.mark_online(2).await.unwrap();
        assert_eq!(repo.count_online().await.unwrap(), 2);
    }
}
