// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! SQLite-specific backend utilities.
//!
//! ## Connection Model
//!
//! Every query checks out its own connection from an r2d2 pool and returns
//! it when the call finishes. No connection is shared between requests.
//!
//! Each pooled connection is configured on checkout-creation with:
//! - `PRAGMA foreign_keys = ON`
//! - `PRAGMA busy_timeout`, so concurrent readers wait instead of failing

use std::time::Duration;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sql_types::Integer;
use diesel::{RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Embedded schema migrations.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Milliseconds a connection waits on a locked database before failing.
const BUSY_TIMEOUT_MS: u32 = 5_000;

/// How long `Pool::get` waits for a free connection.
const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;
pub type PooledSqliteConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Helper row struct for PRAGMA queries.
///
/// This is a justified use of raw SQL as Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Per-connection settings applied by the pool.
#[derive(Debug, Clone, Copy)]
struct ConnectionOptions {
    busy_timeout_ms: u32,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // NOTE: PRAGMA is raw SQL (justified - Diesel has no PRAGMA DSL)
        diesel::sql_query("PRAGMA foreign_keys = ON")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        diesel::sql_query(format!("PRAGMA busy_timeout = {}", self.busy_timeout_ms))
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Verifies that foreign key enforcement is enabled.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is not enabled.
pub fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }

    debug!("SQLite foreign key enforcement is enabled");
    Ok(())
}

/// Run pending migrations on the provided connection.
///
/// # Errors
///
/// Returns an error if migration execution fails.
pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    info!("Running SQLite database migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;
    Ok(())
}

/// Enable WAL mode for file-based `SQLite` databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA statement fails.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    diesel::sql_query("PRAGMA journal_mode = WAL")
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(e.to_string()))?;
    Ok(())
}

/// Builds a connection pool for the given database URL.
///
/// In-memory databases only live while a connection is open, so their pools
/// never expire idle connections.
///
/// # Arguments
///
/// * `database_url` - The `SQLite` database URL (file path or `file:` URI)
/// * `max_size` - Maximum number of pooled connections
/// * `in_memory` - Whether the URL names a shared in-memory database
///
/// # Errors
///
/// Returns an error if the initial connections cannot be established.
pub fn build_pool(
    database_url: &str,
    max_size: u32,
    in_memory: bool,
) -> Result<SqlitePool, PersistenceError> {
    let manager: ConnectionManager<SqliteConnection> = ConnectionManager::new(database_url);
    let mut builder = Pool::builder()
        .max_size(max_size)
        .connection_timeout(CONNECTION_TIMEOUT)
        .connection_customizer(Box::new(ConnectionOptions {
            busy_timeout_ms: BUSY_TIMEOUT_MS,
        }));

    if in_memory {
        builder = builder.max_lifetime(None).idle_timeout(None);
    }

    builder
        .build(manager)
        .map_err(|e| PersistenceError::DatabaseConnectionFailed(e.to_string()))
}

/// Initialize a pooled `SQLite` database at the given URL and run migrations.
///
/// # Errors
///
/// Returns an error if connection, configuration, or migration fails.
pub fn initialize_database(
    database_url: &str,
    max_size: u32,
    in_memory: bool,
) -> Result<SqlitePool, PersistenceError> {
    info!(database_url, max_size, "Initializing SQLite database");

    let pool: SqlitePool = build_pool(database_url, max_size, in_memory)?;
    let mut conn: PooledSqliteConnection = pool.get()?;

    if !in_memory {
        // WAL is a property of the database file and persists across connections.
        enable_wal_mode(&mut conn)?;
    }

    run_migrations(&mut conn)?;
    verify_foreign_key_enforcement(&mut conn)?;

    Ok(pool)
}
