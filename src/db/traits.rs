//! Store capabilities consumed by the login pipeline and the web layer.
//!
//! The pipeline never touches a pool directly; it is handed something that
//! implements these traits. [`Database`] is the production implementation,
//! tests substitute in-memory doubles.

use std::future::Future;

use super::{
    AccountRecord, AccountRepository, CharacterRecord, CharacterRepository, Database,
    StatusRepository,
};
use crate::Result;

/// Read access to accounts and their characters.
pub trait AccountStore: Send + Sync + 'static {
    /// Look up an account by its login email.
    fn find_account_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<AccountRecord>>> + Send;

    /// List the characters of an account in store order.
    fn list_characters_by_account(
        &self,
        account_id: i64,
    ) -> impl Future<Output = Result<Vec<CharacterRecord>>> + Send;
}

/// Read access to the live server status.
pub trait StatusStore: Send + Sync + 'static {
    /// Race ID of the boosted creature, if one is set.
    fn boosted_race_id(&self) -> impl Future<Output = Result<Option<i64>>> + Send;

    /// Number of players currently online.
    fn count_online_players(&self) -> impl Future<Output = Result<i64>> + Send;
}

impl AccountStore for Database {
    async fn find_account_by_email(&self, email: &str) -> Result<Option<AccountRecord>> {
        AccountRepository::new(self.pool()).find_by_email(email).await
    }

    async fn list_characters_by_account(&self, account_id: i64) -> Result<Vec<CharacterRecord>> {
        CharacterRepository::new(self.pool())
            .list_by_account(account_id)
            .await
    }
}

impl StatusStore for Database {
    async fn boosted_race_id(&self) -> Result<Option<i64>> {
        StatusRepository::new(self.pool()).boosted_race_id().await
    }

    async fn count_online_players(&self) -> Result<i64> {
        StatusRepository::new(self.pool()).count_online().await
    }
}
