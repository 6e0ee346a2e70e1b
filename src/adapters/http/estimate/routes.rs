//! Route configuration for cost estimation.

use axum::routing::post;
use axum::Router;

use super::handlers::{estimate_cost, EstimateHandlers};

/// Creates the estimate router.
///
/// Routes:
/// - `POST /api/estimates` - Price ribbon usages without saving a bow
pub fn estimate_routes(handlers: EstimateHandlers) -> Router {
    Router::new()
        .route("/api/estimates", post(estimate_cost))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryRibbonRepository;
    use crate::domain::foundation::{Money, RibbonId};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        estimate_routes(EstimateHandlers::new(
            Arc::new(InMemoryRibbonRepository::new()),
            "20".parse::<Money>().unwrap(),
        ))
    }

    fn post(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/estimates")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn explicit_costs_are_priced_without_inventory() {
        let body = json!({
            "usages": [{
                "ribbonId": RibbonId::new().to_string(),
                "name": "Pink grosgrain",
                "costPerInch": 0.05,
                "loops": [{"quantity": 2, "length": 12}],
                "tails": [{"quantity": 2, "length": 6}]
            }],
            "targetPrice": 12,
            "labor": {"minutes": 15}
        });

        let response = app().oneshot(post(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["materials"]["totalCost"], json!(1.8));
        assert_eq!(body["pricing"]["laborCost"], json!(5.0));
        assert_eq!(body["pricing"]["totalCost"], json!(6.8));
        assert_eq!(body["pricing"]["status"], "good");
    }

    #[tokio::test]
    async fn unknown_ribbon_without_cost_is_404() {
        let body = json!({
            "usages": [{
                "ribbonId": RibbonId::new().to_string(),
                "loops": [{"quantity": 1, "length": 10}]
            }],
            "desiredMargin": 50
        });

        let response = app().oneshot(post(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn margin_of_100_is_400() {
        let body = json!({"usages": [], "desiredMargin": 100});
        let response = app().oneshot(post(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
