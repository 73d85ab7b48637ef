// API Integration Tests
//
// Purpose: Drive every route through the router with the compiled-in datasets
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use park_priority_rust::{create_router, AppState, ServerConfig};
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    // Helper: Create test router
    fn create_test_app() -> axum::Router {
        create_router(AppState::new(ServerConfig::default()))
    }

    // Helper: GET a URI and return status + body bytes
    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let (status, body) = get(uri).await;
        (status, serde_json::from_slice(&body).expect("Failed to parse JSON"))
    }

    // =========================================================================
    // Section 1: Health and datasets
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_list_datasets() {
        let (status, body) = get_json("/api/datasets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rows"], 2);
        assert_eq!(body["data"][0]["variant"], "a");
        assert_eq!(body["data"][0]["schema"][0], "Threat Level");
        assert_eq!(body["data"][1]["parks"].as_array().unwrap().len(), 5);
    }

    // =========================================================================
    // Section 2: Ranking and filter
    // =========================================================================

    #[tokio::test]
    async fn test_ranking_all_parks() {
        let (status, body) = get_json("/api/a/ranking").await;
        assert_eq!(status, StatusCode::OK);

        let parks = body["parks"].as_array().unwrap();
        let totals: Vec<i64> = parks.iter().map(|p| p["total_score"].as_i64().unwrap()).collect();
        assert_eq!(totals, vec![25, 19, 13, 13, 12]);
        assert_eq!(parks[2]["record"]["name"], "Dunham Park");
    }

    #[tokio::test]
    async fn test_ranking_filtered() {
        let (status, body) = get_json("/api/a/ranking?parks=Thomas%20Brooks,Hemlock%20Bluffs").await;
        assert_eq!(status, StatusCode::OK);

        let parks = body["parks"].as_array().unwrap();
        assert_eq!(parks.len(), 2);
        assert_eq!(parks[0]["record"]["name"], "Hemlock Bluffs");
        assert_eq!(parks[0]["total_score"], 19);
    }

    #[tokio::test]
    async fn test_empty_selection() {
        let (status, body) = get_json("/api/a/bar?parks=").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["bars"].as_array().unwrap().is_empty());
    }

    // =========================================================================
    // Section 3: Projections
    // =========================================================================

    #[tokio::test]
    async fn test_scatter_cary() {
        let (status, body) = get_json("/api/a/scatter").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["points"].as_array().unwrap().len(), 5);
        assert_eq!(body["labels"].as_array().unwrap().len(), 4);
        assert!((body["feasibility_mean"].as_f64().unwrap() - 7.2).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_scatter_field_survey_unavailable() {
        let (status, body) = get_json("/api/b/scatter").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"].as_str().unwrap().contains("field_survey"));
    }

    #[tokio::test]
    async fn test_table_and_radar() {
        let (status, table) = get_json("/api/b/table").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(table["columns"].as_array().unwrap().len(), 6);
        assert_eq!(table["rows"][0]["park"], "Hemlock Bluffs");

        let (status, radar) = get_json("/api/b/radar?parks=Carpenter").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(radar["radial_max"], 9);
        assert_eq!(radar["traces"][0]["points"].as_array().unwrap().len(), 6);
    }

    // =========================================================================
    // Section 4: Detail and errors
    // =========================================================================

    #[tokio::test]
    async fn test_park_detail() {
        let (status, body) = get_json("/api/a/parks/Hemlock%20Bluffs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["park"], "Hemlock Bluffs");
        assert_eq!(body["total_score"], 19);
        assert_eq!(body["feasibility"], 6);
        assert_eq!(body["urgency"], 13);
    }

    #[tokio::test]
    async fn test_unknown_park_is_404() {
        let (status, body) = get_json("/api/a/parks/Umstead").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("Umstead"));
    }

    #[tokio::test]
    async fn test_unknown_variant_is_404() {
        let (status, _) = get_json("/api/z/ranking").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_dashboard_json() {
        let (status, body) = get_json("/api/a/dashboard?parks=Carpenter&detail=Dunham%20Park").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["selected"], serde_json::json!(["Carpenter"]));
        assert_eq!(body["detail"]["park"], "Dunham Park");
        assert_eq!(body["detail"]["rank"], 3);
    }

    // =========================================================================
    // Section 5: HTML page
    // =========================================================================

    #[tokio::test]
    async fn test_dashboard_page() {
        let (status, body) = get("/dashboard/a?filtered=1&park=Carpenter&detail=Carpenter").await;
        assert_eq!(status, StatusCode::OK);

        let html = String::from_utf8(body).unwrap();
        assert!(html.contains("Town of Cary Invasive Species Priority Dashboard"));
        assert!(html.contains("<h3>Carpenter</h3>"));
        assert!(html.contains("value=\"Carpenter\" checked"));
    }

    #[tokio::test]
    async fn test_root_serves_default_variant() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8(body).unwrap().contains("Town of Cary"));
    }
}
