// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the club training map.
//!
//! This crate reads clubs, trainings, championships, and groups from an
//! `SQLite` store through Diesel.
//!
//! ## Connection Model
//!
//! `Persistence` owns an r2d2 connection pool. Every public operation checks
//! out one connection, runs its query, and hands the connection back when it
//! returns. Cloning `Persistence` is cheap and shares the pool, so handlers
//! never contend on a single long-lived session.
//!
//! ## Schema
//!
//! The schema ships as an embedded migration using `CREATE TABLE IF NOT
//! EXISTS`, so an existing store created by another tool opens unchanged and
//! a new file becomes a valid empty store.
//!
//! ## Testing Philosophy
//!
//! - Tests run against uniquely named shared in-memory databases
//! - Each test seeds exactly the rows it asserts on

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use club_map_domain::{MapTable, normalize_filter};
use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{NewChampionship, NewClub, NewGroup, NewTraining};
pub use error::PersistenceError;

use backend::sqlite::{PooledSqliteConnection, SqlitePool};

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so that
/// tests never observe each other's rows.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Pool size for file-backed stores.
const FILE_POOL_SIZE: u32 = 8;

/// Pool size for in-memory stores.
const MEMORY_POOL_SIZE: u32 = 4;

/// Pooled access to the club map store.
#[derive(Clone)]
pub struct Persistence {
    pool: SqlitePool,
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence")
            .field("connections", &self.pool.state().connections)
            .finish_non_exhaustive()
    }
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Every pooled connection attaches to the same shared-cache database,
    /// which lives as long as the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url = format!("file:club_map_memdb_{db_id}?mode=memory&cache=shared");

        let pool: SqlitePool =
            backend::sqlite::initialize_database(&shared_memory_url, MEMORY_POOL_SIZE, true)?;

        Ok(Self { pool })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// The file is created if it does not exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let pool: SqlitePool =
            backend::sqlite::initialize_database(path_str, FILE_POOL_SIZE, false)?;

        Ok(Self { pool })
    }

    /// Checks out a connection for the duration of one operation.
    fn connection(&self) -> Result<PooledSqliteConnection, PersistenceError> {
        Ok(self.pool.get()?)
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&self) -> Result<(), PersistenceError> {
        let mut conn = self.connection()?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)
    }

    // ========================================================================
    // Map Queries
    // ========================================================================

    /// Returns the map rows for a season and phase.
    ///
    /// When either filter is missing or empty the result is an empty table
    /// and the store is not queried.
    ///
    /// # Arguments
    ///
    /// * `season` - The championship season, matched exactly
    /// * `phase` - The championship phase, matched exactly
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn fetch_map_rows(
        &self,
        season: Option<&str>,
        phase: Option<&str>,
    ) -> Result<MapTable, PersistenceError> {
        let (Some(season), Some(phase)) = (normalize_filter(season), normalize_filter(phase))
        else {
            debug!(?season, ?phase, "Incomplete selection, skipping map query");
            return Ok(MapTable::empty());
        };

        let mut conn = self.connection()?;
        let rows = queries::fetch_map_rows(&mut conn, season, phase)?;
        Ok(MapTable::new(rows))
    }

    /// Lists the distinct seasons in first-appearance order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn list_seasons(&self) -> Result<Vec<String>, PersistenceError> {
        let mut conn = self.connection()?;
        queries::list_seasons(&mut conn)
    }

    /// Lists the distinct phases of a season in first-appearance order.
    ///
    /// A missing or empty season yields no phases without querying.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    pub fn list_phases(&self, season: Option<&str>) -> Result<Vec<String>, PersistenceError> {
        let Some(season) = normalize_filter(season) else {
            return Ok(Vec::new());
        };

        let mut conn = self.connection()?;
        queries::list_phases(&mut conn, season)
    }

    // ========================================================================
    // Fixture Loading
    // ========================================================================

    /// Inserts a club and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_club(&self, club: &NewClub) -> Result<i32, PersistenceError> {
        let mut conn = self.connection()?;
        mutations::insert_club(&mut conn, club)
    }

    /// Inserts a training and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or the club does not exist.
    pub fn insert_training(&self, training: &NewTraining) -> Result<i32, PersistenceError> {
        let mut conn = self.connection()?;
        mutations::insert_training(&mut conn, training)
    }

    /// Inserts a championship and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_championship(
        &self,
        championship: &NewChampionship,
    ) -> Result<i32, PersistenceError> {
        let mut conn = self.connection()?;
        mutations::insert_championship(&mut conn, championship)
    }

    /// Inserts a group association and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails or a referenced row does not exist.
    pub fn insert_group(&self, group: &NewGroup) -> Result<i32, PersistenceError> {
        let mut conn = self.connection()?;
        mutations::insert_group(&mut conn, group)
    }
}
