// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Database backend-specific code.
//!
//! This module isolates connection pooling, per-connection configuration,
//! and migration execution. Everything here is raw `SQLite` plumbing that
//! cannot be expressed in Diesel DSL.
//!
//! Queries and fixture inserts live in `queries/` and `mutations/` and take
//! a plain `&mut SqliteConnection` checked out from the pool.

pub mod sqlite;
