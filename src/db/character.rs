//! Character records and their repository.

use super::DbPool;
use crate::{KaplarError, Result};

/// A character row as read during login.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct CharacterRecord {
    /// Display name.
    pub name: String,
    /// Character level.
    pub level: i64,
    /// Sex flag (1 = male).
    pub sex: i64,
    /// Vocation ID (0-8).
    pub vocation: i64,
    /// Outfit ID.
    pub look_type: i64,
    /// Head color.
    pub look_head: i64,
    /// Torso color.
    pub look_body: i64,
    /// Legs color.
    pub look_legs: i64,
    /// Detail (feet) color.
    pub look_feet: i64,
    /// Outfit addon flags.
    pub look_addons: i64,
    /// Last login as a unix timestamp (0 if never).
    pub last_login: i64,
    /// Whether a daily reward is waiting.
    pub pending_reward: bool,
    /// Whether the character is still in the tutorial.
    pub tutorial: bool,
}

impl CharacterRecord {
    /// Check if the character is male.
    pub fn is_male(&self) -> bool {
        self.sex == 1
    }
}

/// New character for creation.
#[derive(Debug, Clone)]
pub struct NewCharacter {
    pub account_id: i64,
    pub name: String,
    pub level: i64,
    pub sex: i64,
    pub vocation: i64,
    pub look_type: i64,
    pub look_head: i64,
    pub look_body: i64,
    pub look_legs: i64,
    pub look_feet: i64,
    pub look_addons: i64,
    pub last_login: i64,
    pub pending_reward: bool,
    pub tutorial: bool,
}

impl NewCharacter {
    /// A level 1 character with the default outfit.
    pub fn new(account_id: i64, name: impl Into<String>) -> Self {
        Self {
            account_id,
            name: name.into(),
            level: 1,
            sex: 0,
            vocation: 0,
            look_type: 136,
            look_head: 0,
            look_body: 0,
            look_legs: 0,
            look_feet: 0,
            look_addons: 0,
            last_login: 0,
            pending_reward: false,
            tutorial: false,
        }
    }

    /// Set the vocation ID.
    pub fn with_vocation(mut self, vocation: i64) -> Self {
        self.vocation = vocation;
        self
    }

    /// Set the level.
    pub fn with_level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    /// Set the last login timestamp.
    pub fn with_last_login(mut self, last_login: i64) -> Self {
        self.last_login = last_login;
        self
    }

    /// Set the pending reward flag.
    pub fn with_pending_reward(mut self, pending: bool) -> Self {
        self.pending_reward = pending;
        self
    }
}

const CHARACTER_COLUMNS: &str = "name, level, sex, vocation,
    looktype AS look_type, lookhead AS look_head, lookbody AS look_body,
    looklegs AS look_legs, lookfeet AS look_feet, lookaddons AS look_addons,
    lastlogin AS last_login, isreward AS pending_reward, istutorial AS tutorial";

/// Repository for character lookups.
pub struct CharacterRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> CharacterRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// List every character of an account, oldest first.
    pub async fn list_by_account(&self, account_id: i64) -> Result<Vec<CharacterRecord>> {
        let sql = format!(
            "SELECT {} FROM players WHERE account_id = ? ORDER BY id",
            CHARACTER_COLUMNS
        );
        let characters = sqlx::query_as::<_, CharacterRecord>(&sql)
            .bind(account_id)
            .fetch_all(self.pool)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        Ok(characters)
    }

    /// Get a character by name.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<CharacterRecord>> {
        let sql = format!("SELECT {} FROM players WHERE name = ?", CHARACTER_COLUMNS);
        let character = sqlx::query_as::<_, CharacterRecord>(&sql)
            .bind(name)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| KaplarError::Database(e.to_string()))?;

        Ok(character)
    }

    /// Create a new character and return it.
    pub async fn create(&self, new_character: &NewCharacter) -> Result<CharacterRecord> {
        sqlx::query(
            "INSERT INTO players (account_id, name, level, sex, vocation, looktype, lookhead,
                                  lookbody, looklegs, lookfeet, lookaddons, lastlogin,
                                  isreward, istutorial)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(new_character.account_id)
        .bind(&new_character.name)
        .bind(new_character.level)
        .bind(new_character.sex)
        .bind(new_character.vocation)
        .bind(new_character.look_type)
        .bind(new_character.look_head)
        .bind(new_character.look_body)
        .bind(new_character.look_legs)
        .bind(new_character.look_feet)
        .bind(new_character.look_addons)
        .bind(new_character.last_login)
        .bind(new_character.pending_reward)
        .bind(new_character.tutorial)
        .execute(self.pool)
        .await
        .map_err(|e| KaplarError::Database(e.to_string()))?;

        self.find_by_name(&new_character.name)
            .await?
            .ok_or_else(|| KaplarError::NotFound("character".to_string()))
    }
}
