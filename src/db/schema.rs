//! SQLite schema for the login server.
//!
//! Table and column names follow the game server's MySQL schema so the same
//! queries run against both backends.

/// Database migrations, applied in order.
///
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Accounts and their characters
    r#"
CREATE TABLE accounts (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT,
    email       TEXT NOT NULL UNIQUE,
    password    TEXT NOT NULL,              -- hex digest or PHC string
    premdays    INTEGER NOT NULL DEFAULT 0,
    creation    INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE players (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL UNIQUE,
    account_id  INTEGER NOT NULL REFERENCES accounts(id) ON DELETE CASCADE,
    level       INTEGER NOT NULL DEFAULT 1,
    sex         INTEGER NOT NULL DEFAULT 0,   -- 1 = male
    vocation    INTEGER NOT NULL DEFAULT 0,
    looktype    INTEGER NOT NULL DEFAULT 136,
    lookhead    INTEGER NOT NULL DEFAULT 0,
    lookbody    INTEGER NOT NULL DEFAULT 0,
    looklegs    INTEGER NOT NULL DEFAULT 0,
    lookfeet    INTEGER NOT NULL DEFAULT 0,
    lookaddons  INTEGER NOT NULL DEFAULT 0,
    lastlogin   INTEGER NOT NULL DEFAULT 0,   -- unix timestamp, 0 = never
    isreward    INTEGER NOT NULL DEFAULT 1,
    istutorial  INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_players_account_id ON players(account_id);
"#,
    // v2: Server status tables read by the auxiliary requests
    r#"
CREATE TABLE boosted_creature (
    boostname   TEXT NOT NULL DEFAULT '',
    date        TEXT NOT NULL DEFAULT '',
    raceid      INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE players_online (
    player_id   INTEGER PRIMARY KEY
);
"#,
];
