// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! The map itself never writes. These inserts exist to load fixtures into a
//! fresh store (tests, local development) and are not reachable over HTTP.

pub mod fixtures;

pub use fixtures::{insert_championship, insert_club, insert_group, insert_training};
