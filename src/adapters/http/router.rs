//! Top-level router: every resource router plus cross-cutting layers.

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::memory::{
    InMemoryBowRepository, InMemoryRecipeRepository, InMemoryRibbonRepository,
    InMemorySaleRepository,
};
use crate::config::{AppConfig, ServerConfig};
use crate::domain::foundation::Money;
use crate::ports::{BowRepository, RecipeRepository, RibbonRepository, SaleRepository};

use super::bow::{bow_routes, BowHandlers};
use super::estimate::{estimate_routes, EstimateHandlers};
use super::recipe::{recipe_routes, RecipeHandlers};
use super::ribbon::{ribbon_routes, RibbonHandlers};
use super::sale::{sale_routes, SaleHandlers};

/// Storage handles shared by all routers.
#[derive(Clone)]
pub struct Repositories {
    pub ribbons: Arc<dyn RibbonRepository>,
    pub bows: Arc<dyn BowRepository>,
    pub recipes: Arc<dyn RecipeRepository>,
    pub sales: Arc<dyn SaleRepository>,
}

impl Repositories {
    /// Process-local storage, empty on start.
    pub fn in_memory() -> Self {
        Self {
            ribbons: Arc::new(InMemoryRibbonRepository::new()),
            bows: Arc::new(InMemoryBowRepository::new()),
            recipes: Arc::new(InMemoryRecipeRepository::new()),
            sales: Arc::new(InMemorySaleRepository::new()),
        }
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// All API routes without middleware.
pub fn api_router(repos: &Repositories, default_hourly_rate: Money) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(ribbon_routes(RibbonHandlers::new(repos.ribbons.clone())))
        .merge(bow_routes(BowHandlers::new(
            repos.bows.clone(),
            repos.recipes.clone(),
            repos.ribbons.clone(),
            default_hourly_rate,
        )))
        .merge(recipe_routes(RecipeHandlers::new(
            repos.recipes.clone(),
            repos.ribbons.clone(),
        )))
        .merge(estimate_routes(EstimateHandlers::new(
            repos.ribbons.clone(),
            default_hourly_rate,
        )))
        .merge(sale_routes(SaleHandlers::new(
            repos.sales.clone(),
            repos.bows.clone(),
        )))
}

/// API routes wrapped in tracing, CORS and request timeout layers.
pub fn build_router(repos: &Repositories, config: &AppConfig) -> Router {
    api_router(repos, config.pricing.default_hourly_rate())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(cors_layer(&config.server))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
