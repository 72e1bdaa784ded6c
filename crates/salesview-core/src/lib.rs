//! Core query translation and orchestration for salesview
//!
//! The flow is one-way: raw request parameters are translated into
//! `FilterCriteria` and a `SortSpec`, combined with the pagination
//! request, and executed against the storage collaborator behind the
//! `TransactionStore` trait. The collaborator only has to offer four
//! read primitives: find, count, distinct, and a date min/max
//! aggregate.

pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod types;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

pub use error::{CoreError, CoreResult, StoreError};
pub use models::Transaction;
pub use pagination::{PageRequest, PageResult};
pub use query::{build_filters, build_sort, FilterCriteria, ListQuery, SortSpec};
pub use types::{FacetField, SortDirection, SortField};

/// Storage collaborator contract
///
/// All operations are read-only and fallible; failures are not
/// retried here. Any backing store that can evaluate a conjunctive
/// filter, sort on a single field, slice with skip/limit, count,
/// report distinct values of a field, and aggregate a min/max date
/// satisfies this contract.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// The page slice: filtered, sorted, then skip/limit applied
    async fn find(
        &self,
        filter: &FilterCriteria,
        sort: SortSpec,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<Transaction>, StoreError>;

    /// Total count of records matching the filter
    async fn count(&self, filter: &FilterCriteria) -> Result<u64, StoreError>;

    /// Distinct values of a facet field, deduplicated, order unspecified
    async fn distinct(&self, field: FacetField) -> Result<Vec<String>, StoreError>;

    /// Global minimum and maximum date, or None for an empty collection
    async fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>, StoreError>;
}

/// Shared store reference type
pub type StoreRef = Arc<dyn TransactionStore>;

/// Response envelope for the transaction list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionsResponse {
    pub data: Vec<Transaction>,
    pub pagination: PageResult,
}

/// Global date range across the whole collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
}

/// Available filter options for the faceted UI
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub customer_region: Vec<String>,
    pub gender: Vec<String>,
    pub product_category: Vec<String>,
    pub tags: Vec<String>,
    pub payment_method: Vec<String>,
    pub date_range: DateRange,
}

/// Query orchestrator
///
/// Freshly constructs every filter/sort/pagination value per request;
/// no state is shared between requests beyond the store reference.
pub struct TransactionService {
    store: StoreRef,
    default_page_size: i64,
}

impl TransactionService {
    /// Create a service over a storage collaborator
    pub fn new(store: StoreRef, default_page_size: i64) -> Self {
        Self {
            store,
            default_page_size,
        }
    }

    /// List transactions: filter, sort, and paginate
    ///
    /// The page-slice read and the count read are independent, so
    /// they are issued concurrently and joined before the response is
    /// composed. Either failure fails the whole request.
    pub async fn list(&self, params: &ListQuery) -> CoreResult<TransactionsResponse> {
        let request = PageRequest::from_params(
            params.page.as_deref(),
            params.limit.as_deref(),
            self.default_page_size,
        );
        let filter = build_filters(params);
        let sort = build_sort(params.sort_by.as_deref());

        log::debug!(
            "listing transactions: page={} size={} sort={}-{}",
            request.page,
            request.size,
            sort.field,
            sort.direction
        );

        let (slice, total) = tokio::join!(
            self.store.find(&filter, sort, request.skip(), request.size),
            self.store.count(&filter)
        );
        let (data, total) = (slice?, total?);

        Ok(TransactionsResponse {
            pagination: PageResult::compute(&request, total),
            data,
        })
    }

    /// Report the distinct values of every facet plus the global date
    /// range
    ///
    /// Six independent full-collection aggregations, issued
    /// concurrently. Each distinct list is sorted ascending here;
    /// the store only guarantees deduplication.
    pub async fn filter_options(&self) -> CoreResult<FilterOptions> {
        let (regions, genders, categories, tags, methods, bounds) = tokio::join!(
            self.store.distinct(FacetField::CustomerRegion),
            self.store.distinct(FacetField::Gender),
            self.store.distinct(FacetField::ProductCategory),
            self.store.distinct(FacetField::Tags),
            self.store.distinct(FacetField::PaymentMethod),
            self.store.date_bounds()
        );

        let mut customer_region = regions?;
        let mut gender = genders?;
        let mut product_category = categories?;
        let mut tags = tags?;
        let mut payment_method = methods?;
        customer_region.sort();
        gender.sort();
        product_category.sort();
        tags.sort();
        payment_method.sort();

        let (min_date, max_date) = match bounds? {
            Some((min, max)) => (Some(min), Some(max)),
            None => (None, None),
        };

        Ok(FilterOptions {
            customer_region,
            gender,
            product_category,
            tags,
            payment_method,
            date_range: DateRange { min_date, max_date },
        })
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    /// Minimal store stub: serves a fixed record list, or a canned
    /// failure
    struct StubStore {
        records: Vec<Transaction>,
        fail: bool,
    }

    impl StubStore {
        fn with_count(n: usize) -> Self {
            let records = (0..n)
                .map(|i| test_transaction(&format!("TXN-{i:04}"), "East", i as u32))
                .collect();
            Self {
                records,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                records: vec![],
                fail: true,
            }
        }
    }

    fn test_transaction(id: &str, region: &str, seq: u32) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(seq as u64),
            customer_id: format!("CUST-{seq}"),
            customer_name: format!("Customer {seq}"),
            phone_number: format!("+1-555-{seq:04}"),
            gender: "Female".to_string(),
            age: 30 + seq,
            customer_region: region.to_string(),
            customer_type: "New".to_string(),
            product_id: "PROD-1".to_string(),
            product_name: "Widget".to_string(),
            brand: "Acme".to_string(),
            product_category: "Gadgets".to_string(),
            tags: vec!["new".to_string()],
            quantity: 1 + seq,
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

    #[async_trait]
    impl TransactionStore for StubStore {
        async fn find(
            &self,
            _filter: &FilterCriteria,
            _sort: SortSpec,
            skip: i64,
            limit: i64,
        ) -> Result<Vec<Transaction>, StoreError> {
            if self.fail {
                return Err(StoreError::backend("connection lost"));
            }
            let skip = skip.max(0) as usize;
            let limit = usize::try_from(limit).unwrap_or(0);
            Ok(self
                .records
                .iter()
                .skip(skip)
                .take(limit)
                .cloned()
                .collect())
        }

        async fn count(&self, _filter: &FilterCriteria) -> Result<u64, StoreError> {
            if self.fail {
                return Err(StoreError::backend("connection lost"));
            }
            Ok(self.records.len() as u64)
        }

        async fn distinct(&self, field: FacetField) -> Result<Vec<String>, StoreError> {
            if self.fail {
                return Err(StoreError::backend("connection lost"));
            }
            match field {
                // Deliberately unsorted upstream
                FacetField::CustomerRegion => {
                    Ok(vec!["West".to_string(), "East".to_string()])
                }
                FacetField::Gender => Ok(vec!["Female".to_string()]),
                FacetField::ProductCategory => Ok(vec!["Gadgets".to_string()]),
                FacetField::Tags => Ok(vec!["new".to_string()]),
                FacetField::PaymentMethod => Ok(vec!["Card".to_string()]),
            }
        }

        async fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>, StoreError> {
            if self.fail {
                return Err(StoreError::backend("connection lost"));
            }
            if self.records.is_empty() {
                return Ok(None);
            }
            let min = self.records.iter().map(|t| t.date).min().unwrap();
            let max = self.records.iter().map(|t| t.date).max().unwrap();
            Ok(Some((min, max)))
        }
    }

    fn service(store: StubStore) -> TransactionService {
        TransactionService::new(Arc::new(store), 10)
    }

    #[tokio::test]
    async fn test_second_page_of_fifteen_records() {
        let svc = service(StubStore::with_count(15));
        let params = ListQuery {
            page: Some("2".to_string()),
            limit: Some("10".to_string()),
            ..Default::default()
        };
        let response = svc.list(&params).await.unwrap();
        assert_eq!(response.data.len(), 5);
        assert_eq!(response.data[0].transaction_id, "TXN-0010");
        assert_eq!(response.pagination.current_page, 2);
        assert_eq!(response.pagination.total_pages, 2);
        assert_eq!(response.pagination.total_records, 15);
        assert!(!response.pagination.has_next_page);
        assert!(response.pagination.has_prev_page);
    }

    #[tokio::test]
    async fn test_empty_collection_zeroes_pagination() {
        let svc = service(StubStore::with_count(0));
        let response = svc.list(&ListQuery::default()).await.unwrap();
        assert!(response.data.is_empty());
        assert_eq!(response.pagination.total_pages, 0);
        assert!(!response.pagination.has_next_page);
        assert!(!response.pagination.has_prev_page);
    }

    #[tokio::test]
    async fn test_default_page_size_comes_from_configuration() {
        let svc = TransactionService::new(Arc::new(StubStore::with_count(30)), 5);
        let response = svc.list(&ListQuery::default()).await.unwrap();
        assert_eq!(response.data.len(), 5);
        assert_eq!(response.pagination.records_per_page, 5);
        assert_eq!(response.pagination.total_pages, 6);
    }

    #[tokio::test]
    async fn test_store_failure_propagates() {
        let svc = service(StubStore::failing());
        let err = svc.list(&ListQuery::default()).await.unwrap_err();
        assert!(err.to_string().contains("connection lost"));

        let err = svc.filter_options().await.unwrap_err();
        assert!(err.to_string().contains("connection lost"));
    }

    #[tokio::test]
    async fn test_filter_options_sorted_and_bounded() {
        let svc = service(StubStore::with_count(3));
        let options = svc.filter_options().await.unwrap();
        assert_eq!(options.customer_region, vec!["East", "West"]);
        assert_eq!(
            options.date_range.min_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(
            options.date_range.max_date,
            NaiveDate::from_ymd_opt(2024, 1, 3)
        );
    }

    #[tokio::test]
    async fn test_filter_options_empty_collection_has_null_dates() {
        let svc = service(StubStore::with_count(0));
        let options = svc.filter_options().await.unwrap();
        assert_eq!(options.date_range.min_date, None);
        assert_eq!(options.date_range.max_date, None);
        let json = serde_json::to_value(&options).unwrap();
        assert!(json["dateRange"]["minDate"].is_null());
        assert!(json["dateRange"]["maxDate"].is_null());
    }
}
