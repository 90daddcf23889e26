// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types for the club training map.
//!
//! The map shows one point per (club, training, group) row for the
//! championship selected by a season and a phase. This crate holds the row
//! shape shared by every data source and the selection model driving the
//! two dropdowns.

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

mod selection;
mod types;

#[cfg(test)]
mod tests;

pub use selection::{Selection, SelectionState, normalize_filter};
pub use types::{
    CLUB_LABEL, COLUMN_COUNT, COLUMN_LABELS, COMMENT_LABEL, GROUP_LABEL, MapRow, MapTable,
    TRAINING_DAY_LABEL, TRAINING_START_LABEL,
};
