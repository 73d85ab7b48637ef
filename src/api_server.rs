// Axum API Server Module
//
// JSON endpoints for every dashboard projection plus the HTML dashboard page.
// Every request re-ranks the compiled-in dataset; nothing is cached or mutated.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::data::{Dataset, DatasetVariant};
use crate::error::DashboardError;
use crate::presentation::{
    build_park_detail, build_priority_table, build_quadrant_chart, build_radar_chart,
    build_ranking_chart, Dashboard, DashboardGenerator, ParkDetail, PriorityTable,
    QuadrantChart, RadarChart, RankingChart, Selection,
};
use crate::scorer::{ParkScorer, Ranking};
use crate::web::handlers::pages;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub datasets: Arc<FxHashMap<DatasetVariant, Dataset>>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State holding both compiled-in datasets
    pub fn new(config: ServerConfig) -> Self {
        let datasets: FxHashMap<DatasetVariant, Dataset> = DatasetVariant::ALL
            .iter()
            .map(|&variant| (variant, Dataset::builtin(variant)))
            .collect();

        for dataset in datasets.values() {
            tracing::info!(
                "Loaded dataset '{}' ({} parks, {} attributes)",
                dataset.variant.slug(),
                dataset.len(),
                dataset.schema.len()
            );
        }

        Self {
            datasets: Arc::new(datasets),
            config: Arc::new(config),
        }
    }

    /// Resolve a `:variant` path segment
    pub fn dataset(&self, variant: &str) -> Result<&Dataset, AppError> {
        let variant: DatasetVariant = variant.parse()?;
        self.datasets
            .get(&variant)
            .ok_or_else(|| AppError::NotFound(format!("Dataset '{}' not loaded", variant)))
    }

    /// Ranked and filtered view of a dataset
    fn filtered_ranking(&self, variant: &str, query: &ViewQuery) -> Result<(&Dataset, Ranking), AppError> {
        let dataset = self.dataset(variant)?;
        let ranking = ParkScorer::for_dataset(dataset).rank(dataset);
        let selection = Selection::from_param(query.parks.as_deref());
        Ok((dataset, selection.apply(&ranking)))
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))

        // HTML dashboard
        .route("/", get(pages::default_dashboard_page))
        .route("/dashboard/:variant", get(pages::dashboard_page))

        // Dataset listing
        .route("/api/datasets", get(list_datasets))

        // Projections (JSON)
        .route("/api/:variant/ranking", get(get_ranking))
        .route("/api/:variant/scatter", get(get_scatter))
        .route("/api/:variant/table", get(get_table))
        .route("/api/:variant/bar", get(get_bar))
        .route("/api/:variant/radar", get(get_radar))
        .route("/api/:variant/parks/:name", get(get_park_detail))
        .route("/api/:variant/dashboard", get(get_dashboard))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Filter and detail controls
///
/// `parks` is comma-separated; absent means every park, blank means none.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    pub parks: Option<String>,
    pub detail: Option<String>,
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn list_datasets(State(state): State<AppState>) -> Json<serde_json::Value> {
    let data: Vec<serde_json::Value> = DatasetVariant::ALL
        .iter()
        .filter_map(|variant| state.datasets.get(variant))
        .map(|dataset| {
            serde_json::json!({
                "variant": dataset.variant,
                "slug": dataset.variant.slug(),
                "title": dataset.variant.title(),
                "schema": dataset.schema,
                "parks": dataset.park_names(),
            })
        })
        .collect();

    Json(serde_json::json!({
        "rows": data.len(),
        "data": data,
    }))
}

async fn get_ranking(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<Ranking>, AppError> {
    let (_, ranking) = state.filtered_ranking(&variant, &query)?;
    tracing::debug!("Ranking for '{}' with {} parks", variant, ranking.len());
    Ok(Json(ranking))
}

async fn get_scatter(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<QuadrantChart>, AppError> {
    let (dataset, ranking) = state.filtered_ranking(&variant, &query)?;
    let scorer = ParkScorer::for_dataset(dataset);
    Ok(Json(build_quadrant_chart(&ranking, scorer.scheme())?))
}

async fn get_table(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<PriorityTable>, AppError> {
    let (_, ranking) = state.filtered_ranking(&variant, &query)?;
    Ok(Json(build_priority_table(&ranking)))
}

async fn get_bar(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<RankingChart>, AppError> {
    let (_, ranking) = state.filtered_ranking(&variant, &query)?;
    Ok(Json(build_ranking_chart(&ranking)))
}

async fn get_radar(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<RadarChart>, AppError> {
    let (_, ranking) = state.filtered_ranking(&variant, &query)?;
    Ok(Json(build_radar_chart(&ranking)))
}

/// Detail lookup ignores the filter: any park in the dataset can be viewed
async fn get_park_detail(
    State(state): State<AppState>,
    Path((variant, name)): Path<(String, String)>,
) -> Result<Json<ParkDetail>, AppError> {
    let dataset = state.dataset(&variant)?;
    let ranking = ParkScorer::for_dataset(dataset).rank(dataset);
    Ok(Json(build_park_detail(&ranking, &name)?))
}

async fn get_dashboard(
    State(state): State<AppState>,
    Path(variant): Path<String>,
    Query(query): Query<ViewQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let dataset = state.dataset(&variant)?;
    let selection = Selection::from_param(query.parks.as_deref());
    let dashboard = DashboardGenerator::generate(dataset, &selection, query.detail.as_deref())?;

    tracing::info!(
        "Dashboard '{}' generated for {} selected parks",
        dataset.variant.slug(),
        dashboard.selected.len()
    );

    Ok(Json(dashboard))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    Unprocessable(String),
    Internal(String),
}

impl From<DashboardError> for AppError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::UnknownPark(_) | DashboardError::UnknownVariant(_) => {
                AppError::NotFound(err.to_string())
            }
            DashboardError::QuadrantUnavailable(_) => AppError::Unprocessable(err.to_string()),
            DashboardError::SchemaMismatch { .. }
            | DashboardError::DuplicatePark(_)
            | DashboardError::EmptySchema
            | DashboardError::UnexpectedSchema(_) => AppError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unprocessable(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        if status.is_server_error() {
            tracing::error!("{}", message);
        }

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
