//! Route configuration for bow endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_bow, delete_bow, get_bow, list_bows, update_bow, BowHandlers};

/// Creates the bow router.
///
/// Routes:
/// - `GET /api/bows` - List with `q`, `category`, `status` filters
/// - `POST /api/bows` - Price and save a wizard-built bow
/// - `GET /api/bows/:id` - Fetch one bow
/// - `PUT|PATCH /api/bows/:id` - Partial update, re-priced
/// - `DELETE /api/bows/:id` - Remove a bow
pub fn bow_routes(handlers: BowHandlers) -> Router {
    Router::new()
        .route("/api/bows", get(list_bows).post(create_bow))
        .route(
            "/api/bows/:id",
            get(get_bow)
                .put(update_bow)
                .patch(update_bow)
                .delete(delete_bow),
        )
        .with_state(handlers)
}
