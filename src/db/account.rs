//! Account records and their repository.

use super::DbPool;
use crate::{KaplarError, Result};

/// An account row as read during login.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct AccountRecord {
    /// Account ID.
    pub id: i64,
    /// Login email (unique).
    pub email: String,
    /// Stored password hash, in the configured algorithm's text form.
    pub password_hash: String,
    /// Remaining premium days.
    pub premium_days: i64,
}

/// New account for creation.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Login email.
    pub email: String,
    /// Stored password hash.
    pub password_hash: String,
    /// Premium days to grant.
    pub premium_days: i64,
}

impl NewAccount {
    /// Create a free account.
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_hash: password_hash.into(),
            premium_days: 0,
        }
    }

    /// Set the premium days.
    pub fn with_premium_days(mut self, days: i64) -> Self {
        self.premium_days = days;
        self
    }
}

/// Repository for account lookups.
pub struct AccountRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Get an account by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>> {
        let account = sqlx::query_as::<_, AccountRecord>(
            "SELECT id, email, password AS password_hash, premdays AS premium_days
             FROM accounts WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| KaplarError::Database(e.to_string()))?;

        Ok(account)
    }

    /// Create a new account and return it.
    pub async fn create(&self, new_account: &NewAccount) -> Result<AccountRecord> {
        sqlx::query("INSERT INTO accounts (email, password, premdays) VALUES (?, ?, ?)")
            .bind(&new_account.email)
            .bind(&new_account.password_hash)
            .bind(new_account.premium_days)
            .execute(self.pool)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        self.find_by_email(&new_account.email)
            .await?
            .ok_or_else(|| KaplarError::NotFound("account".to_string()))
    }
}

#[cfg(all(test, not(feature = "mysql")))]
mod tests {
    use super::*;
    use crate::Database;

    #[tokio::test]
    async fn test_create_and_find() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = AccountRepository::new(db.pool());

        let created = repo
            .create(&NewAccount::new("a@x.com", "deadbeef").with_premium_days(30))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert_eq!(created.email, "a@x.com");
        assert_eq!(created.password_hash, "deadbeef");
        assert_eq!(created.premium_days, 30);

        let found = repo.find_by_email("a@x.com").await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_unknown_email() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = AccountRepository::new(db.pool());

        assert_eq!(repo.find_by_email("nobody@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = AccountRepository::new(db.pool());

        repo.create(&NewAccount::new("a@x.com", "aa")).await.unwrap();
        let result = repo.create(&NewAccount::new("a@x.com", "bb")).await;
        assert!(matches!(result, Err(KaplarError::Database(_))));
    }
}
