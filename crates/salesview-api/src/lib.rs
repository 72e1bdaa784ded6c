//! HTTP API server for salesview
//!
//! Routes:
//! - /api/health: liveness probe
//! - /api/transactions: paginated, filtered, sorted transaction list
//! - /api/transactions/filters: faceted filter options

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use salesview_config::Config;
use salesview_core::TransactionService;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TransactionService>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::{api_transaction_filters, api_transactions};

    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/filters", get(api_transaction_filters))
        // The UI is served from another origin; allow all, as the
        // upstream deployment does.
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Start the HTTP server
///
/// Creates the router, binds to the configured address, and serves
/// requests until shutdown.
pub async fn start_server(config: Config, service: Arc<TransactionService>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { service, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting salesview server on http://{addr}");
    log::info!("  - GET /api/transactions");
    log::info!("  - GET /api/transactions/filters");

    axum::serve(listener, router).await?;
    log::info!("Server stopped");
    Ok(())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use salesview_core::{
        FacetField, FilterCriteria, SortSpec, StoreError, Transaction, TransactionStore,
    };
    use salesview_store::MemoryStore;
    use tower::ServiceExt;

    fn tx(id: &str, name: &str, region: &str, date: &str) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            customer_id: format!("CUST-{id}"),
            customer_name: name.to_string(),
            phone_number: "+1-555-0000".to_string(),
            gender: "Female".to_string(),
            age: 30,
            customer_region: region.to_string(),
            customer_type: "New".to_string(),
            product_id: "PROD-1".to_string(),
            product_name: "Widget".to_string(),
            brand: "Acme".to_string(),
            product_category: "Gadgets".to_string(),
            tags: vec!["new".to_string()],
            quantity: 1,
            price_per_unit: Decimal::new(1000, 2),
            discount_percentage: Decimal::ZERO,
            total_amount: Decimal::new(1000, 2),
            final_amount: Decimal::new(1000, 2),
            payment_method: "Card".to_string(),
            order_status: "Delivered".to_string(),
            delivery_type: "Home Delivery".to_string(),
            store_id: "ST-1".to_string(),
            store_location: "Springfield".to_string(),
            salesperson_id: "EMP-1".to_string(),
            employee_name: "Sam Lee".to_string(),
        }
    }

    fn app_with_records(records: Vec<Transaction>) -> Router {
        let store = Arc::new(MemoryStore::new(records));
        let service = Arc::new(TransactionService::new(store, 10));
        create_router(AppState {
            service,
            config: Config::default(),
        })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = app_with_records(vec![]);
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_transactions_envelope() {
        let app = app_with_records(vec![
            tx("A", "Alice Chen", "East", "2024-01-10"),
            tx("B", "Bob Novak", "West", "2024-02-20"),
        ]);
        let (status, json) = get_json(app, "/api/transactions?sortBy=date-oldest").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
        assert_eq!(json["data"][0]["transactionId"], "A");
        assert_eq!(json["pagination"]["currentPage"], 1);
        assert_eq!(json["pagination"]["totalRecords"], 2);
        assert_eq!(json["pagination"]["hasNextPage"], false);
    }

    #[tokio::test]
    async fn test_transactions_filtered_by_query() {
        let app = app_with_records(vec![
            tx("A", "Alice Chen", "East", "2024-01-10"),
            tx("B", "Bob Novak", "West", "2024-02-20"),
        ]);
        let (status, json) = get_json(app, "/api/transactions?customerRegion=East").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
        assert_eq!(json["data"][0]["customerRegion"], "East");
    }

    #[tokio::test]
    async fn test_filter_options() {
        let app = app_with_records(vec![
            tx("A", "Alice Chen", "West", "2024-01-10"),
            tx("B", "Bob Novak", "East", "2024-02-20"),
            tx("C", "Carla Diaz", "East", "2024-03-05"),
        ]);
        let (status, json) = get_json(app, "/api/transactions/filters").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["customerRegion"][0], "East");
        assert_eq!(json["customerRegion"][1], "West");
        assert_eq!(json["dateRange"]["minDate"], "2024-01-10");
        assert_eq!(json["dateRange"]["maxDate"], "2024-03-05");
    }

    /// Store whose reads always fail, for the 500 path
    struct BrokenStore;

    #[async_trait]
    impl TransactionStore for BrokenStore {
        async fn find(
            &self,
            _filter: &FilterCriteria,
            _sort: SortSpec,
            _skip: i64,
            _limit: i64,
        ) -> Result<Vec<Transaction>, StoreError> {
            Err(StoreError::backend("connection refused"))
        }

        async fn count(&self, _filter: &FilterCriteria) -> Result<u64, StoreError> {
            Err(StoreError::backend("connection refused"))
        }

        async fn distinct(&self, _field: FacetField) -> Result<Vec<String>, StoreError> {
            Err(StoreError::backend("connection refused"))
        }

        async fn date_bounds(
            &self,
        ) -> Result<Option<(NaiveDate, NaiveDate)>, StoreError> {
            Err(StoreError::backend("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_500_body() {
        let service = Arc::new(TransactionService::new(Arc::new(BrokenStore), 10));
        let app = create_router(AppState {
            service,
            config: Config::default(),
        });
        let (status, json) = get_json(app, "/api/transactions").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "Failed to fetch transactions");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("connection refused"));
    }
}
