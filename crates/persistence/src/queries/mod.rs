// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! - `map_rows`: the season/phase filtered join feeding the map
//! - `championships`: season and phase options for the dropdowns

pub mod championships;
pub mod map_rows;

pub use championships::{list_phases, list_seasons};
pub use map_rows::fetch_map_rows;
