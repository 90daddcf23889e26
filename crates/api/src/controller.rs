// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The season/phase dropdown state machine.
//!
//! Two transitions drive the map. A season change recomputes the phase
//! options and picks the first as the default. A change of the
//! (season, phase) pair recomputes the figure. A season change therefore
//! always lands on a pair that already carries the new default phase.

use club_map_domain::{Selection, SelectionState, normalize_filter};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::MapConfig;
use crate::error::ApiError;
use crate::figure::{MapFigure, build_map_figure, empty_figure};
use crate::source::MapDataSource;

/// Phase dropdown contents after a season change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PhaseOptions {
    pub options: Vec<String>,
    /// The default phase: the first option, if any.
    pub value: Option<String>,
}

/// Computes the phase options and default phase for `season`.
///
/// # Errors
///
/// Returns an error if the row source fails.
pub fn phase_options<S>(source: &S, season: Option<&str>) -> Result<PhaseOptions, ApiError>
where
    S: MapDataSource + ?Sized,
{
    if normalize_filter(season).is_none() {
        return Ok(PhaseOptions::default());
    }

    let options: Vec<String> = source.phases(season)?;
    let value: Option<String> = options.first().cloned();
    Ok(PhaseOptions { options, value })
}

/// Computes the figure for a (season, phase) pair.
///
/// An incomplete pair yields the zero-point figure without touching the
/// source.
///
/// # Errors
///
/// Returns an error if the row source fails.
pub fn map_figure<S>(
    source: &S,
    config: &MapConfig,
    season: Option<&str>,
    phase: Option<&str>,
) -> Result<MapFigure, ApiError>
where
    S: MapDataSource + ?Sized,
{
    let selection: Selection = Selection::new(season, phase);
    let Some((season, phase)) = selection.complete() else {
        return Ok(empty_figure(config));
    };

    let table = source.map_rows(Some(season), Some(phase))?;
    let figure: MapFigure = build_map_figure(&table, config);
    debug!(
        season,
        phase,
        rows = table.len(),
        traces = figure.data.len(),
        "Map figure rebuilt"
    );
    Ok(figure)
}

/// Holds one viewer's selection and the outputs derived from it.
pub struct MapController<'a, S: MapDataSource + ?Sized> {
    source: &'a S,
    config: MapConfig,
    selection: Selection,
    phase_options: PhaseOptions,
    figure: MapFigure,
}

impl<'a, S: MapDataSource + ?Sized> MapController<'a, S> {
    /// Starts with nothing selected and an empty map.
    #[must_use]
    pub fn new(source: &'a S, config: MapConfig) -> Self {
        let figure: MapFigure = empty_figure(&config);
        Self {
            source,
            config,
            selection: Selection::default(),
            phase_options: PhaseOptions::default(),
            figure,
        }
    }

    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.selection.state()
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub const fn phase_options(&self) -> &PhaseOptions {
        &self.phase_options
    }

    #[must_use]
    pub const fn figure(&self) -> &MapFigure {
        &self.figure
    }

    /// Lists the season dropdown options.
    ///
    /// # Errors
    ///
    /// Returns an error if the row source fails.
    pub fn seasons(&self) -> Result<Vec<String>, ApiError> {
        self.source.seasons()
    }

    /// Applies a season change.
    ///
    /// The phase options are recomputed first and the phase resets to the
    /// new default; the map then follows the resulting pair. Returns whether
    /// the map was recomputed.
    ///
    /// # Errors
    ///
    /// Returns an error if the row source fails. The controller is left
    /// unchanged in that case.
    pub fn select_season(&mut self, season: Option<&str>) -> Result<bool, ApiError> {
        let options: PhaseOptions = phase_options(self.source, season)?;
        let next: Selection = Selection::new(season, options.value.as_deref());

        info!(
            season = ?next.season,
            phases = options.options.len(),
            default_phase = ?next.phase,
            "Season changed"
        );

        let changed: bool = self.apply_selection(next)?;
        self.phase_options = options;
        Ok(changed)
    }

    /// Applies a phase change under the current season.
    ///
    /// Returns whether the map was recomputed.
    ///
    /// # Errors
    ///
    /// Returns an error if the row source fails. The controller is left
    /// unchanged in that case.
    pub fn select_phase(&mut self, phase: Option<&str>) -> Result<bool, ApiError> {
        let next: Selection = Selection::new(self.selection.season.as_deref(), phase);
        self.apply_selection(next)
    }

    /// Recomputes the figure when the pair differs from the current one.
    fn apply_selection(&mut self, next: Selection) -> Result<bool, ApiError> {
        if next == self.selection {
            return Ok(false);
        }

        let figure: MapFigure = map_figure(
            self.source,
            &self.config,
            next.season.as_deref(),
            next.phase.as_deref(),
        )?;
        self.figure = figure;
        self.selection = next;
        Ok(true)
    }
}
