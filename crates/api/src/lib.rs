// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod config;
mod controller;
mod csv_source;
mod error;
mod figure;
mod source;

#[cfg(test)]
mod tests;

pub use config::{MAPBOX_TOKEN_VAR, MapConfig, MapStyle};
pub use controller::{MapController, PhaseOptions, map_figure, phase_options};
pub use csv_source::{CsvMapSource, PHASE_COLUMN, SEASON_COLUMN};
pub use error::ApiError;
pub use figure::{
    DEFAULT_CENTER, DEFAULT_MARKER_SIZE, DEFAULT_ZOOM, Legend, LegendTitle, MapCenter, MapFigure,
    MapLayout, MapMarker, MapTrace, Mapbox, Margin, PALETTE, SIZE_MAX, build_map_figure,
    empty_figure,
};
pub use source::MapDataSource;
