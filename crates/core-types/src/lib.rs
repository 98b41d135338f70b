//! # Dashboard Core Types
//!
//! The plain records shared by every other crate: stored entities mirrored from
//! the `invoices`, `customers` and `revenue` tables, the derived view types the
//! dashboard renders, and the currency formatting used to produce display amounts.
//!
//! Nothing in this crate talks to a database. Row types derive `sqlx::FromRow`
//! so the database crate can decode straight into them.

pub mod enums;
pub mod error;
pub mod money;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::InvoiceStatus;
pub use error::CoreError;
pub use money::{format_currency, minor_to_major};
pub use structs::{
    CardData, Customer, CustomerField, CustomersTable, CustomersTableRow, Invoice, InvoiceForm,
    InvoiceFormRow, InvoicesTable, LatestInvoice, LatestInvoiceRaw, Revenue,
};
