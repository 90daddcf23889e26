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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use club_map_api::{
    ApiError, CsvMapSource, MapConfig, MapDataSource, MapFigure, PhaseOptions, map_figure,
    phase_options,
};
use club_map_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// The single page: two dropdowns and the map canvas.
const INDEX_HTML: &str = include_str!("../static/index.html");

/// Club Map Server - HTTP server for the club training map
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file.
    #[arg(short, long, default_value = "club_map.db")]
    database: String,

    /// Serve rows from a CSV export instead of the database.
    #[arg(long)]
    csv: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 8050)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// Holds no selection: each browser keeps its own and sends it with every
/// request.
#[derive(Clone)]
struct AppState {
    /// Where rows, seasons and phases come from.
    source: Arc<dyn MapDataSource>,
    /// Tile style and token, resolved once at startup.
    map_config: Arc<MapConfig>,
}

#[derive(Debug, Deserialize)]
struct PhasesQuery {
    season: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FigureQuery {
    season: Option<String>,
    phase: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct SeasonsResponse {
    seasons: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidCsvFormat { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::DataSource { .. } | ApiError::CsvUnreadable { .. } => {
                error!(error = %err, "Data source error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<QueryRejection> for HttpError {
    fn from(rejection: QueryRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Runs a synchronous source call on the blocking pool.
async fn run_blocking<T, F>(task: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| {
            error!(error = %e, "Blocking task failed");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: format!("Background task failed: {e}"),
            }
        })?
        .map_err(HttpError::from)
}

/// Handler for GET / endpoint.
async fn handle_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for GET /health endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET /api/seasons endpoint.
async fn handle_list_seasons(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SeasonsResponse>, HttpError> {
    info!("Handling list_seasons request");

    let source = Arc::clone(&app_state.source);
    let seasons: Vec<String> = run_blocking(move || source.seasons()).await?;

    Ok(Json(SeasonsResponse { seasons }))
}

/// Handler for GET /api/phases endpoint.
///
/// The season-change transition: phase options plus the default phase.
async fn handle_list_phases(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<PhasesQuery>, QueryRejection>,
) -> Result<Json<PhaseOptions>, HttpError> {
    let Query(params) = query?;
    info!(season = ?params.season, "Handling list_phases request");

    let source = Arc::clone(&app_state.source);
    let options: PhaseOptions =
        run_blocking(move || phase_options(source.as_ref(), params.season.as_deref())).await?;

    Ok(Json(options))
}

/// Handler for GET /api/figure endpoint.
///
/// The selection-change transition: the map for a (season, phase) pair.
async fn handle_get_figure(
    AxumState(app_state): AxumState<AppState>,
    query: Result<Query<FigureQuery>, QueryRejection>,
) -> Result<Json<MapFigure>, HttpError> {
    let Query(params) = query?;
    info!(
        season = ?params.season,
        phase = ?params.phase,
        "Handling get_figure request"
    );

    let source = Arc::clone(&app_state.source);
    let config = Arc::clone(&app_state.map_config);
    let figure: MapFigure = run_blocking(move || {
        map_figure(
            source.as_ref(),
            &config,
            params.season.as_deref(),
            params.phase.as_deref(),
        )
    })
    .await?;

    Ok(Json(figure))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/api/seasons", get(handle_list_seasons))
        .route("/api/phases", get(handle_list_phases))
        .route("/api/figure", get(handle_get_figure))
        .with_state(app_state)
}

/// Opens the row source selected on the command line.
fn open_source(args: &Args) -> Result<Arc<dyn MapDataSource>, Box<dyn std::error::Error>> {
    if let Some(csv_path) = &args.csv {
        info!("Using CSV row source at: {}", csv_path);
        let source: CsvMapSource = CsvMapSource::from_path(csv_path)?;
        return Ok(Arc::new(source));
    }

    info!("Using file-based database at: {}", args.database);
    let persistence: Persistence = Persistence::new_with_file(&args.database)?;
    Ok(Arc::new(persistence))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Environment first so RUST_LOG and MAPBOX_TOKEN can come from .env
    dotenvy::dotenv().ok();

    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Club Map Server");

    let app_state: AppState = AppState {
        source: open_source(&args)?,
        map_config: Arc::new(MapConfig::from_env()),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
