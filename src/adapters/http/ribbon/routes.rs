//! Route configuration for ribbon inventory endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_ribbon, delete_ribbon, get_ribbon, list_ribbons, update_ribbon, RibbonHandlers,
};

/// Creates the ribbon router.
///
/// Routes:
/// - `GET /api/ribbons` - List with `q`, `availability`, `lowStock` filters
/// - `POST /api/ribbons` - Add a ribbon
/// - `GET /api/ribbons/:id` - Fetch one ribbon
/// - `PUT /api/ribbons/:id` - Partial update with optional `version`
/// - `DELETE /api/ribbons/:id` - Remove a ribbon
pub fn ribbon_routes(handlers: RibbonHandlers) -> Router {
    Router::new()
        .route("/api/ribbons", get(list_ribbons).post(create_ribbon))
        .route(
            "/api/ribbons/:id",
            get(get_ribbon).put(update_ribbon).delete(delete_ribbon),
        )
        .with_state(handlers)
}
