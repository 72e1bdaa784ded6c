//! Dataset import - reads the sales CSV into transaction records
//!
//! Column headers follow the upstream dataset ("Transaction ID",
//! "Customer Name", ...). Tags arrive as one comma-separated cell and
//! are trimmed entry by entry at import time; the query layer never
//! trims anything afterwards.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use salesview_core::Transaction;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

use super::error::ImportError;

/// One raw CSV row, keyed by the dataset's column headers
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Transaction ID")]
    transaction_id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Customer ID")]
    customer_id: String,
    #[serde(rename = "Customer Name")]
    customer_name: String,
    #[serde(rename = "Phone Number")]
    phone_number: String,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "Age")]
    age: u32,
    #[serde(rename = "Customer Region")]
    customer_region: String,
    #[serde(rename = "Customer Type")]
    customer_type: String,
    #[serde(rename = "Product ID")]
    product_id: String,
    #[serde(rename = "Product Name")]
    product_name: String,
    #[serde(rename = "Brand")]
    brand: String,
    #[serde(rename = "Product Category")]
    product_category: String,
    #[serde(rename = "Tags")]
    tags: String,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Price per Unit")]
    price_per_unit: String,
    #[serde(rename = "Discount Percentage")]
    discount_percentage: String,
    #[serde(rename = "Total Amount")]
    total_amount: String,
    #[serde(rename = "Final Amount")]
    final_amount: String,
    #[serde(rename = "Payment Method")]
    payment_method: String,
    #[serde(rename = "Order Status")]
    order_status: String,
    #[serde(rename = "Delivery Type")]
    delivery_type: String,
    #[serde(rename = "Store ID")]
    store_id: String,
    #[serde(rename = "Store Location")]
    store_location: String,
    #[serde(rename = "Salesperson ID")]
    salesperson_id: String,
    #[serde(rename = "Employee Name")]
    employee_name: String,
}

/// Load the dataset CSV from disk
pub fn load_csv(path: &Path) -> Result<Vec<Transaction>, ImportError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut transactions = Vec::new();

    for (index, row) in reader.deserialize::<CsvRecord>().enumerate() {
        let record = index as u64 + 1;
        let row = row?;
        transactions.push(convert(row, record)?);
    }

    log::info!("Imported {} transactions", transactions.len());
    Ok(transactions)
}

/// Parse the dataset CSV from an in-memory buffer
pub fn parse_csv(content: &str) -> Result<Vec<Transaction>, ImportError> {
    let mut reader = csv::Reader::from_reader(content.as_bytes());
    let mut transactions = Vec::new();

    for (index, row) in reader.deserialize::<CsvRecord>().enumerate() {
        let record = index as u64 + 1;
        let row = row?;
        transactions.push(convert(row, record)?);
    }

    Ok(transactions)
}

fn convert(row: CsvRecord, record: u64) -> Result<Transaction, ImportError> {
    let date =
        NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|_| ImportError::InvalidDate {
            record,
            value: row.date.clone(),
        })?;

    Ok(Transaction {
        transaction_id: row.transaction_id,
        date,
        customer_id: row.customer_id,
        customer_name: row.customer_name,
        phone_number: row.phone_number,
        gender: row.gender,
        age: row.age,
        customer_region: row.customer_region,
        customer_type: row.customer_type,
        product_id: row.product_id,
        product_name: row.product_name,
        brand: row.brand,
        product_category: row.product_category,
        tags: split_tags(&row.tags),
        quantity: row.quantity,
        price_per_unit: parse_amount(&row.price_per_unit, "Price per Unit", record)?,
        discount_percentage: parse_amount(&row.discount_percentage, "Discount Percentage", record)?,
        total_amount: parse_amount(&row.total_amount, "Total Amount", record)?,
        final_amount: parse_amount(&row.final_amount, "Final Amount", record)?,
        payment_method: row.payment_method,
        order_status: row.order_status,
        delivery_type: row.delivery_type,
        store_id: row.store_id,
        store_location: row.store_location,
        salesperson_id: row.salesperson_id,
        employee_name: row.employee_name,
    })
}

/// Split the tag cell, trimming each entry; an empty cell means no tags
fn split_tags(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|t| t.trim().to_string()).collect()
}

fn parse_amount(raw: &str, field: &'static str, record: u64) -> Result<Decimal, ImportError> {
    Decimal::from_str(raw.trim()).map_err(|_| ImportError::InvalidNumber {
        record,
        field,
        value: raw.to_string(),
    })
}

// ==================== Tests ====================
