// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use club_map_persistence::PersistenceError;
use thiserror::Error;

/// API-level errors.
///
/// An empty or incomplete selection is never an error; it yields an empty
/// map. These variants cover the data source failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The row source could not answer a query.
    #[error("Data source error: {message}")]
    DataSource {
        /// A description of the underlying failure.
        message: String,
    },

    /// A CSV row source has a missing header or an unparsable cell.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat {
        /// Which header, row, or cell was rejected.
        reason: String,
    },

    /// A CSV row source file could not be opened or read.
    #[error("Cannot read CSV file '{path}': {message}")]
    CsvUnreadable {
        /// The file that was requested.
        path: String,
        /// The I/O error message.
        message: String,
    },
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::DataSource {
            message: err.to_string(),
        }
    }
}
