//! Route handlers, one module per resource

pub mod transactions;

pub use transactions::{api_transaction_filters, api_transactions};
