// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Treats an empty filter value the same as a missing one.
///
/// Non-empty values are returned untouched: filters match exactly and
/// case-sensitively, so no trimming or case folding happens here.
#[must_use]
pub fn normalize_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// The current dropdown selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub season: Option<String>,
    pub phase: Option<String>,
}

impl Selection {
    /// Creates a selection, mapping empty strings to `None`.
    #[must_use]
    pub fn new(season: Option<&str>, phase: Option<&str>) -> Self {
        Self {
            season: normalize_filter(season).map(str::to_owned),
            phase: normalize_filter(phase).map(str::to_owned),
        }
    }

    /// Returns `(season, phase)` when both are selected.
    #[must_use]
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (self.season.as_deref(), self.phase.as_deref()) {
            (Some(season), Some(phase)) => Some((season, phase)),
            _ => None,
        }
    }

    /// Derives the controller state for this selection.
    ///
    /// A phase without a season is not reachable through the dropdowns and
    /// is treated as no selection.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        match (&self.season, &self.phase) {
            (None, _) => SelectionState::NoSelection,
            (Some(season), None) => SelectionState::SeasonSelected {
                season: season.clone(),
            },
            (Some(season), Some(phase)) => SelectionState::SeasonAndPhaseSelected {
                season: season.clone(),
                phase: phase.clone(),
            },
        }
    }
}

/// States of the season/phase dropdown pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    NoSelection,
    SeasonSelected { season: String },
    SeasonAndPhaseSelected { season: String, phase: String },
}

impl SelectionState {
    /// Returns whether the map can be populated in this state.
    #[must_use]
    pub const fn is_plottable(&self) -> bool {
        matches!(self, Self::SeasonAndPhaseSelected { .. })
    }
}
