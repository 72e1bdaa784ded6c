//! Pagination arithmetic
//!
//! Page and limit parameters follow the same permissive policy as the
//! filter bounds: a value that fails to parse (or parses to zero)
//! takes the default. Negative values survive parsing, so a negative
//! page produces a negative skip; clamping that is the storage
//! collaborator's business, not done here.

use serde::Serialize;

/// Parsed page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: i64,
    /// Records per page
    pub size: i64,
}

impl PageRequest {
    /// Resolve page/limit from their raw parameter values
    pub fn from_params(page: Option<&str>, limit: Option<&str>, default_size: i64) -> Self {
        Self {
            page: parse_or(page, 1),
            size: parse_or(limit, default_size),
        }
    }

    /// Number of records to skip before the page slice
    pub fn skip(&self) -> i64 {
        (self.page - 1) * self.size
    }
}

/// Parse a numeric parameter, treating unparseable and zero values as
/// absent
fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(0) | None => default,
        Some(n) => n,
    }
}

/// Derived pagination envelope returned with every page slice
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_records: u64,
    pub records_per_page: i64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PageResult {
    /// Compute the envelope for a page request and a total match count
    pub fn compute(request: &PageRequest, total: u64) -> Self {
        let total_pages = (total as f64 / request.size as f64).ceil() as i64;
        Self {
            current_page: request.page,
            total_pages,
            total_records: total,
            records_per_page: request.size,
            has_next_page: request.page < total_pages,
            has_prev_page: request.page > 1,
        }
    }
}

// ==================== Tests ====================
