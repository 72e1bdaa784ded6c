//! Query translation - raw request parameters to filter/sort structures
//!
//! Incoming parameters arrive as optional raw strings. Translation is
//! deliberately permissive: a value that fails to parse installs no
//! constraint instead of failing the request, and unknown sort tokens
//! fall back to the default ordering.

use chrono::NaiveDate;
use serde::Deserialize;

use super::types::{SortDirection, SortField};

/// Raw query parameters for the transaction list endpoint
///
/// One optional field per recognized parameter; everything is kept as
/// the raw string so that absent, empty, and unparseable values each
/// keep their own behavior downstream. Unrecognized parameters are
/// dropped during extraction.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub customer_region: Option<String>,
    pub gender: Option<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub product_category: Option<String>,
    pub tags: Option<String>,
    pub payment_method: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Store-agnostic representation of the active constraints
///
/// A conjunction: every present predicate must hold. The order the
/// predicates were supplied in never changes the result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against customer name OR
    /// phone number. `Some("")` matches every record but is still a
    /// present clause, mirroring how the search parameter behaves.
    pub search: Option<String>,
    /// Membership list for customer region
    pub customer_region: Option<Vec<String>>,
    /// Membership list for gender
    pub gender: Option<Vec<String>>,
    /// Membership list for product category
    pub product_category: Option<Vec<String>>,
    /// Membership list matched against any element of the tag set
    pub tags: Option<Vec<String>>,
    /// Membership list for payment method
    pub payment_method: Option<Vec<String>>,
    /// Inclusive lower bound on age
    pub age_min: Option<i64>,
    /// Inclusive upper bound on age
    pub age_max: Option<i64>,
    /// Inclusive lower bound on date
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on date
    pub date_to: Option<NaiveDate>,
}

impl FilterCriteria {
    /// True when no predicate is installed at all
    pub fn is_unconstrained(&self) -> bool {
        self == &FilterCriteria::default()
    }
}

/// Single-field sort specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Build the filter criteria from the raw parameters
///
/// Each dimension is independently optional. Multi-select values are
/// split on `,` with no trimming: `"East, West"` becomes
/// `["East", " West"]` and a record only matches the second entry if
/// its region carries the leading space too.
pub fn build_filters(params: &ListQuery) -> FilterCriteria {
    FilterCriteria {
        search: params.search.clone(),
        customer_region: split_list(params.customer_region.as_deref()),
        gender: split_list(params.gender.as_deref()),
        product_category: split_list(params.product_category.as_deref()),
        tags: split_list(params.tags.as_deref()),
        payment_method: split_list(params.payment_method.as_deref()),
        age_min: parse_int_bound(params.age_min.as_deref()),
        age_max: parse_int_bound(params.age_max.as_deref()),
        date_from: parse_date_bound(params.date_from.as_deref()),
        date_to: parse_date_bound(params.date_to.as_deref()),
    }
}

/// Resolve the sort token to a (field, direction) pair
///
/// Unknown or absent tokens never fail; they take the default of
/// newest-first by date.
pub fn build_sort(sort_by: Option<&str>) -> SortSpec {
    match sort_by {
        Some("date-newest") => SortSpec {
            field: SortField::Date,
            direction: SortDirection::Descending,
        },
        Some("date-oldest") => SortSpec {
            field: SortField::Date,
            direction: SortDirection::Ascending,
        },
        Some("quantity-high") => SortSpec {
            field: SortField::Quantity,
            direction: SortDirection::Descending,
        },
        Some("quantity-low") => SortSpec {
            field: SortField::Quantity,
            direction: SortDirection::Ascending,
        },
        Some("name-asc") => SortSpec {
            field: SortField::CustomerName,
            direction: SortDirection::Ascending,
        },
        Some("name-desc") => SortSpec {
            field: SortField::CustomerName,
            direction: SortDirection::Descending,
        },
        // Default: newest first
        _ => SortSpec {
            field: SortField::Date,
            direction: SortDirection::Descending,
        },
    }
}

/// Split a multi-select parameter into its membership list
///
/// Entries are NOT trimmed. An absent or empty parameter installs no
/// constraint.
fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    match raw {
        Some(value) if !value.is_empty() => {
            Some(value.split(',').map(str::to_string).collect())
        }
        _ => None,
    }
}

/// Parse an integer bound; failures degrade to "no bound"
fn parse_int_bound(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.parse().ok())
}

/// Parse a date bound (`YYYY-MM-DD`); failures degrade to "no bound"
fn parse_date_bound(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

// ==================== Tests ====================
