//! Core data models for sales transactions

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single sales-transaction record
///
/// Records are created once by the dataset import and never mutated.
/// Amounts are stored as captured upstream: `total_amount` and
/// `final_amount` are independent columns, the discount is already
/// applied, nothing is recomputed at query time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique transaction identifier
    pub transaction_id: String,
    /// Transaction date
    pub date: NaiveDate,
    /// Customer identifier
    pub customer_id: String,
    /// Customer display name
    pub customer_name: String,
    /// Customer phone number
    pub phone_number: String,
    /// Customer gender
    pub gender: String,
    /// Customer age in years
    pub age: u32,
    /// Customer region
    pub customer_region: String,
    /// Customer type (e.g., "New", "Returning")
    pub customer_type: String,
    /// Product identifier
    pub product_id: String,
    /// Product display name
    pub product_name: String,
    /// Product brand
    pub brand: String,
    /// Product category
    pub product_category: String,
    /// Product tags
    pub tags: Vec<String>,
    /// Purchased quantity
    pub quantity: u32,
    /// Unit price
    pub price_per_unit: Decimal,
    /// Discount percentage applied upstream
    pub discount_percentage: Decimal,
    /// Amount before discount
    pub total_amount: Decimal,
    /// Amount after discount
    pub final_amount: Decimal,
    /// Payment method
    pub payment_method: String,
    /// Order status (e.g., "Delivered", "Cancelled")
    pub order_status: String,
    /// Delivery type (e.g., "Home Delivery", "In-store Pickup")
    pub delivery_type: String,
    /// Store identifier
    pub store_id: String,
    /// Store location
    pub store_location: String,
    /// Salesperson identifier
    pub salesperson_id: String,
    /// Salesperson display name
    pub employee_name: String,
}
