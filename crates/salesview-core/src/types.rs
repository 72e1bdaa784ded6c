//! Basic types for the core query module

use serde::{Deserialize, Serialize};

/// Sortable field enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    /// Transaction date
    Date,
    /// Purchased quantity
    Quantity,
    /// Customer name
    CustomerName,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::Date => write!(f, "date"),
            SortField::Quantity => write!(f, "quantity"),
            SortField::CustomerName => write!(f, "customerName"),
        }
    }
}

/// Sort direction enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order
    Ascending,
    /// Descending order
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "ascending"),
            SortDirection::Descending => write!(f, "descending"),
        }
    }
}

/// Facet field enumeration - the multi-select filter dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FacetField {
    /// Customer region
    CustomerRegion,
    /// Customer gender
    Gender,
    /// Product category
    ProductCategory,
    /// Product tags
    Tags,
    /// Payment method
    PaymentMethod,
}

impl std::fmt::Display for FacetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FacetField::CustomerRegion => write!(f, "customerRegion"),
            FacetField::Gender => write!(f, "gender"),
            FacetField::ProductCategory => write!(f, "productCategory"),
            FacetField::Tags => write!(f, "tags"),
            FacetField::PaymentMethod => write!(f, "paymentMethod"),
        }
    }
}
