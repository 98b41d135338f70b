use crate::enums::InvoiceStatus;
use crate::money::{format_currency, minor_to_major};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ==============================================================================
// Stored entities
// ==============================================================================

/// A row of the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// A row of the `invoices` table. `amount` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: String,
    pub customer_id: String,
    pub amount: i32,
    pub date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
}

/// A precomputed monthly revenue aggregate, read as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Revenue {
    pub month: String,
    pub revenue: i32,
}

// ==============================================================================
// Derived views
// ==============================================================================

/// An invoice joined with its customer, before the amount is formatted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LatestInvoiceRaw {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: i32,
}

/// An entry of the "latest invoices" card. `amount` is already a display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoice {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

impl From<LatestInvoiceRaw> for LatestInvoice {
    fn from(raw: LatestInvoiceRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            image_url: raw.image_url,
            email: raw.email,
            amount: format_currency(i64::from(raw.amount)),
        }
    }
}

/// The four summary cards at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub number_of_customers: i64,
    pub number_of_invoices: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl CardData {
    /// Combines the three aggregate results. A missing sum (no invoices) counts as zero.
    pub fn from_totals(
        number_of_invoices: i64,
        number_of_customers: i64,
        total_paid: Option<i64>,
        total_pending: Option<i64>,
    ) -> Self {
        Self {
            number_of_customers,
            number_of_invoices,
            total_paid_invoices: format_currency(total_paid.unwrap_or(0)),
            total_pending_invoices: format_currency(total_pending.unwrap_or(0)),
        }
    }
}

/// A row of the searchable invoices table. The amount stays in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct InvoicesTable {
    pub id: String,
    pub amount: i32,
    pub date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct InvoiceFormRow {
    pub id: String,
    pub customer_id: String,
    pub amount: i32,
    #[sqlx(try_from = "String")]
    pub status: InvoiceStatus,
}

/// A single invoice prepared for the edit form, with the amount in dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: String,
    pub customer_id: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

impl From<InvoiceFormRow> for InvoiceForm {
    fn from(row: InvoiceFormRow) -> Self {
        Self {
            id: row.id,
            customer_id: row.customer_id,
            amount: minor_to_major(i64::from(row.amount)),
            status: row.status,
        }
    }
}

/// The id/name pair used by customer pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CustomerField {
    pub id: String,
    pub name: String,
}

/// A customer with aggregated invoice totals, as returned by the grouped query.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CustomersTableRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: Option<i64>,
    pub total_paid: Option<i64>,
}

/// A row of the customers table view, totals formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomersTable {
    pub id: String,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<CustomersTableRow> for CustomersTable {
    fn from(row: CustomersTableRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            total_invoices: row.total_invoices,
            total_pending: format_currency(row.total_pending.unwrap_or(0)),
            total_paid: format_currency(row.total_paid.unwrap_or(0)),
        }
    }
}
