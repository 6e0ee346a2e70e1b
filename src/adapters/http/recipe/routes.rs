//! Route configuration for recipe endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    create_recipe, delete_recipe, estimate_recipe, get_recipe, list_recipes, update_recipe,
    RecipeHandlers,
};

/// Creates the recipe router.
///
/// Routes:
/// - `GET /api/recipes` - List with `q`, `category`, `difficulty` filters
/// - `POST /api/recipes` - Create a recipe
/// - `GET /api/recipes/:id` - Fetch one recipe
/// - `PUT /api/recipes/:id` - Replace a recipe
/// - `DELETE /api/recipes/:id` - Remove a recipe
/// - `GET /api/recipes/:id/estimate` - Cost the recipe from inventory
pub fn recipe_routes(handlers: RecipeHandlers) -> Router {
    Router::new()
        .route("/api/recipes", get(list_recipes).post(create_recipe))
        .route(
            "/api/recipes/:id",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        .route("/api/recipes/:id/estimate", get(estimate_recipe))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryRecipeRepository, InMemoryRibbonRepository};
    use crate::domain::foundation::{Money, Repository, RibbonId};
    use crate::domain::ribbon::{Ribbon, RibbonDraft};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use rust_decimal::Decimal;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn app_with_ribbon() -> (Router, RibbonId) {
        let ribbons = InMemoryRibbonRepository::new();
        let ribbon = Ribbon::new(
            RibbonId::new(),
            RibbonDraft {
                name: "Pink grosgrain".to_string(),
                ribbon_type: "Grosgrain".to_string(),
                material: "Polyester".to_string(),
                width: Decimal::new(15, 1),
                roll_length: Decimal::from(50),
                colors: vec!["pink".to_string()],
                pattern: None,
                vendor: None,
                availability: None,
                cost_per_yard: "1.80".parse::<Money>().unwrap(),
                in_stock: 3,
                min_stock: 1,
                notes: None,
            },
        )
        .unwrap();
        ribbons.save(&ribbon).await.unwrap();

        let app = recipe_routes(RecipeHandlers::new(
            Arc::new(InMemoryRecipeRepository::new()),
            Arc::new(ribbons),
        ));
        (app, *ribbon.id())
    }

    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn read_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn recipe_body(ribbon_id: RibbonId) -> Value {
        json!({
            "name": "Classic Cheer",
            "category": "Cheer",
            "layers": [{
                "ribbonId": ribbon_id.to_string(),
                "name": "Base",
                "loops": [{"quantity": 2, "length": 12}],
                "tails": [{"quantity": 2, "length": 6}]
            }],
            "instructions": ["Cut loops", "Tie center"]
        })
    }

    #[tokio::test]
    async fn create_then_estimate_from_inventory() {
        let (app, ribbon_id) = app_with_ribbon().await;
        let created = app
            .clone()
            .oneshot(json_request("POST", "/api/recipes", recipe_body(ribbon_id)))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let id = read_json(created).await["id"].as_str().unwrap().to_string();

        let response = app
            .oneshot(get(&format!("/api/recipes/{}/estimate?targetPrice=4", id)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["materials"]["totalCost"], json!(1.8));
        assert_eq!(body["pricing"]["status"], "excellent");
    }

    #[tokio::test]
    async fn estimate_without_target_omits_pricing() {
        let (app, ribbon_id) = app_with_ribbon().await;
        let created = read_json(
            app.clone()
                .oneshot(json_request("POST", "/api/recipes", recipe_body(ribbon_id)))
                .await
                .unwrap(),
        )
        .await;
        let uri = format!("/api/recipes/{}/estimate", created["id"].as_str().unwrap());

        let body = read_json(app.oneshot(get(&uri)).await.unwrap()).await;
        assert!(body.get("pricing").is_none());
        assert_eq!(body["materials"]["breakdown"][0]["name"], "Base");
    }

    #[tokio::test]
    async fn put_replaces_recipe() {
        let (app, ribbon_id) = app_with_ribbon().await;
        let created = read_json(
            app.clone()
                .oneshot(json_request("POST", "/api/recipes", recipe_body(ribbon_id)))
                .await
                .unwrap(),
        )
        .await;
        let uri = format!("/api/recipes/{}", created["id"].as_str().unwrap());

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                json!({"name": "Minimal", "difficulty": "Easy"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json(response).await;
        assert_eq!(body["name"], "Minimal");
        assert_eq!(body["difficulty"], "Easy");
        assert_eq!(body["layers"], json!([]));
    }

    #[tokio::test]
    async fn unknown_recipe_is_404() {
        let (app, _) = app_with_ribbon().await;
        let response = app
            .oneshot(get(&format!("/api/recipes/{}", RibbonId::new())))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
