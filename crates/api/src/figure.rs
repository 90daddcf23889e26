// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Map figure construction.
//!
//! Turns a [`MapTable`] into a Plotly-shaped figure description: one
//! `scattermapbox` trace per group label plus a fixed layout. The page hands
//! the serialized value to `Plotly.react` as is.

use club_map_domain::{COMMENT_LABEL, MapRow, MapTable, TRAINING_DAY_LABEL, TRAINING_START_LABEL};
use serde::Serialize;

use crate::config::{MapConfig, MapStyle};

/// Pixel diameter of the largest marker.
pub const SIZE_MAX: f64 = 15.0;

/// Size used for rows without a `marker_size`.
pub const DEFAULT_MARKER_SIZE: f64 = 1.0;

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 7.0;

/// Center used when no point can be placed.
pub const DEFAULT_CENTER: MapCenter = MapCenter {
    lat: 48.11,
    lon: -1.68,
};

/// Qualitative palette cycled across group traces.
pub const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

const HOVER_TEMPLATE: &str = "%{hovertext}<extra></extra>";

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapFigure {
    pub data: Vec<MapTrace>,
    pub layout: MapLayout,
}

impl MapFigure {
    /// Total number of plotted points across all traces.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.data.iter().map(|trace| trace.lat.len()).sum()
    }
}

/// One group's markers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapTrace {
    #[serde(rename = "type")]
    pub trace_type: &'static str,
    pub mode: &'static str,
    pub name: String,
    pub legendgroup: String,
    pub showlegend: bool,
    pub lat: Vec<f64>,
    pub lon: Vec<f64>,
    pub hovertext: Vec<String>,
    pub hovertemplate: &'static str,
    pub marker: MapMarker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub color: &'static str,
    pub size: Vec<f64>,
    pub sizemode: &'static str,
    pub sizeref: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayout {
    pub margin: Margin,
    pub legend: Legend,
    pub mapbox: Mapbox,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub r: u32,
    pub t: u32,
    pub l: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub title: LegendTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendTitle {
    pub text: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mapbox {
    pub style: MapStyle,
    pub zoom: f64,
    pub center: MapCenter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accesstoken: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub lat: f64,
    pub lon: f64,
}

/// A placeable row reduced to what the figure needs.
struct Point<'a> {
    lat: f64,
    lon: f64,
    size: f64,
    hover: String,
    group: &'a str,
}

/// Bold club name followed by the training details, one `label=value` per line.
fn hover_text(row: &MapRow) -> String {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    format!(
        "<b>{}</b><br><br>{TRAINING_DAY_LABEL}={}<br>{TRAINING_START_LABEL}={}<br>{COMMENT_LABEL}={}",
        field(&row.club),
        field(&row.training_day),
        field(&row.training_start),
        field(&row.comment),
    )
}

/// Area-mode size reference so that the largest marker is `SIZE_MAX` pixels.
fn size_reference(points: &[Point<'_>]) -> f64 {
    let largest: f64 = points.iter().map(|p| p.size).fold(0.0, f64::max);
    if largest > 0.0 {
        2.0 * largest / (SIZE_MAX * SIZE_MAX)
    } else {
        1.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn center_of(points: &[Point<'_>]) -> MapCenter {
    if points.is_empty() {
        return DEFAULT_CENTER;
    }
    let count: f64 = points.len() as f64;
    MapCenter {
        lat: points.iter().map(|p| p.lat).sum::<f64>() / count,
        lon: points.iter().map(|p| p.lon).sum::<f64>() / count,
    }
}

fn layout(config: &MapConfig, center: MapCenter) -> MapLayout {
    MapLayout {
        margin: Margin {
            r: 0,
            t: 0,
            l: 0,
            b: 0,
        },
        legend: Legend {
            orientation: "h",
            x: 0.01,
            y: 0.99,
            xanchor: "left",
            yanchor: "top",
            title: LegendTitle {
                text: club_map_domain::GROUP_LABEL,
            },
        },
        mapbox: Mapbox {
            style: config.style(),
            zoom: DEFAULT_ZOOM,
            center,
            accesstoken: config.access_token().map(str::to_string),
        },
    }
}

/// Builds the figure for a result table.
///
/// Rows without both coordinates are skipped. An empty table yields a figure
/// with no traces.
#[must_use]
pub fn build_map_figure(table: &MapTable, config: &MapConfig) -> MapFigure {
    let points: Vec<Point<'_>> = table
        .rows()
        .iter()
        .filter_map(|row| {
            let (lat, lon) = row.coordinates()?;
            Some(Point {
                lat,
                lon,
                size: row.marker_size.map_or(DEFAULT_MARKER_SIZE, f64::from),
                hover: hover_text(row),
                group: row.group.as_deref().unwrap_or_default(),
            })
        })
        .collect();

    let sizeref: f64 = size_reference(&points);
    let center: MapCenter = center_of(&points);

    let mut data: Vec<MapTrace> = Vec::new();
    for point in points {
        let idx: usize = match data.iter().position(|t| t.name == point.group) {
            Some(idx) => idx,
            None => {
                data.push(MapTrace {
                    trace_type: "scattermapbox",
                    mode: "markers",
                    name: point.group.to_string(),
                    legendgroup: point.group.to_string(),
                    showlegend: true,
                    lat: Vec::new(),
                    lon: Vec::new(),
                    hovertext: Vec::new(),
                    hovertemplate: HOVER_TEMPLATE,
                    marker: MapMarker {
                        color: PALETTE[data.len() % PALETTE.len()],
                        size: Vec::new(),
                        sizemode: "area",
                        sizeref,
                    },
                });
                data.len() - 1
            }
        };

        let trace: &mut MapTrace = &mut data[idx];
        trace.lat.push(point.lat);
        trace.lon.push(point.lon);
        trace.hovertext.push(point.hover);
        trace.marker.size.push(point.size);
    }

    MapFigure {
        data,
        layout: layout(config, center),
    }
}

/// The zero-point figure shown while the selection is incomplete.
#[must_use]
pub fn empty_figure(config: &MapConfig) -> MapFigure {
    build_map_figure(&MapTable::empty(), config)
}
