//! Transaction endpoints - list with search/filter/sort/pagination,
//! plus the faceted filter options

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use salesview_core::{FilterOptions, ListQuery, TransactionsResponse};

/// Get transactions with search, filter, sort, and pagination
pub async fn api_transactions(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<TransactionsResponse>, ApiError> {
    state.service.list(&params).await.map(Json).map_err(|e| {
        log::error!("Error fetching transactions: {e}");
        ApiError::internal("Failed to fetch transactions", e)
    })
}

/// Get the available filter options
pub async fn api_transaction_filters(
    State(state): State<AppState>,
) -> Result<Json<FilterOptions>, ApiError> {
    state.service.filter_options().await.map(Json).map_err(|e| {
        log::error!("Error fetching filters: {e}");
        ApiError::internal("Failed to fetch filters", e)
    })
}
