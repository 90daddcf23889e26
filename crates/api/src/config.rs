// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Base map configuration.

use serde::Serialize;
use std::fmt;
use tracing::warn;

/// Environment variable holding the Mapbox access token.
pub const MAPBOX_TOKEN_VAR: &str = "MAPBOX_TOKEN";

/// Base map tile style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapStyle {
    /// Mapbox streets tiles; needs an access token.
    #[serde(rename = "streets")]
    Streets,
    /// Token-free OpenStreetMap tiles.
    #[serde(rename = "open-street-map")]
    OpenStreetMap,
}

impl MapStyle {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Streets => "streets",
            Self::OpenStreetMap => "open-street-map",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tile provider settings resolved at startup.
///
/// Without a token the map falls back to a token-free style instead of
/// failing.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    access_token: Option<String>,
}

impl fmt::Debug for MapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapConfig")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("style", &self.style())
            .finish()
    }
}

impl MapConfig {
    /// Creates a configuration; an empty token counts as no token.
    #[must_use]
    pub fn new(access_token: Option<String>) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Reads the token from `MAPBOX_TOKEN`.
    #[must_use]
    pub fn from_env() -> Self {
        let config: Self = Self::new(std::env::var(MAPBOX_TOKEN_VAR).ok());
        if config.access_token.is_none() {
            warn!(
                variable = MAPBOX_TOKEN_VAR,
                fallback = %MapStyle::OpenStreetMap,
                "No map access token configured, using degraded map style"
            );
        }
        config
    }

    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    #[must_use]
    pub const fn style(&self) -> MapStyle {
        if self.access_token.is_some() {
            MapStyle::Streets
        } else {
            MapStyle::OpenStreetMap
        }
    }
}
