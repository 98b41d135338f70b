//! Fixed datasets served when no live database is available.
//!
//! One function per dataset. `FixtureSource` returns them unchanged, whatever
//! the query parameters.

use crate::error::DbError;
use crate::source::{DataSource, SourceKind};
use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{
    CardData, CustomerField, CustomersTable, InvoiceForm, InvoiceStatus, InvoicesTable,
    LatestInvoice, Revenue,
};
use rust_decimal_macros::dec;

pub fn revenue() -> Vec<Revenue> {
    [
        ("Jan", 2000),
        ("Feb", 1800),
        ("Mar", 2200),
        ("Apr", 2500),
        ("May", 2300),
        ("Jun", 3200),
        ("Jul", 3500),
        ("Aug", 3700),
        ("Sep", 2500),
        ("Oct", 2800),
        ("Nov", 3000),
        ("Dec", 4800),
    ]
    .into_iter()
    .map(|(month, revenue)| Revenue {
        month: month.to_string(),
        revenue,
    })
    .collect()
}

pub fn latest_invoices() -> Vec<LatestInvoice> {
    [
        ("1", "示例客户", "user@example.com", "$250.00"),
        ("2", "示例客户2", "user2@example.com", "$150.00"),
        ("3", "示例客户3", "user3@example.com", "$350.00"),
        ("4", "示例客户4", "user4@example.com", "$450.00"),
        ("5", "示例客户5", "user5@example.com", "$550.00"),
    ]
    .into_iter()
    .map(|(id, name, email, amount)| LatestInvoice {
        id: id.to_string(),
        name: name.to_string(),
        image_url: format!("/customers/customer-{id}.png"),
        email: email.to_string(),
        amount: amount.to_string(),
    })
    .collect()
}

pub fn card_data() -> CardData {
    CardData {
        number_of_customers: 10,
        number_of_invoices: 25,
        total_paid_invoices: "$12,000.00".to_string(),
        total_pending_invoices: "$5,000.00".to_string(),
    }
}

pub fn filtered_invoices() -> Vec<InvoicesTable> {
    vec![
        InvoicesTable {
            id: "1".to_string(),
            amount: 15000,
            date: fixture_date(2023, 12, 1),
            status: InvoiceStatus::Pending,
            name: "示例客户".to_string(),
            email: "user@example.com".to_string(),
            image_url: "/customers/customer-1.png".to_string(),
        },
        InvoicesTable {
            id: "2".to_string(),
            amount: 20000,
            date: fixture_date(2023, 11, 15),
            status: InvoiceStatus::Paid,
            name: "示例客户2".to_string(),
            email: "user2@example.com".to_string(),
            image_url: "/customers/customer-2.png".to_string(),
        },
    ]
}

/// The fixture invoices fit on one page.
pub fn invoices_pages() -> i64 {
    1
}

pub fn invoice_form() -> InvoiceForm {
    InvoiceForm {
        id: "1".to_string(),
        customer_id: "1".to_string(),
        amount: dec!(150),
        status: InvoiceStatus::Pending,
    }
}

pub fn customers() -> Vec<CustomerField> {
    vec![
        CustomerField {
            id: "1".to_string(),
            name: "示例客户".to_string(),
        },
        CustomerField {
            id: "2".to_string(),
            name: "示例客户2".to_string(),
        },
    ]
}

pub fn filtered_customers() -> Vec<CustomersTable> {
    vec![
        CustomersTable {
            id: "1".to_string(),
            name: "示例客户".to_string(),
            email: "user@example.com".to_string(),
            image_url: "/customers/customer-1.png".to_string(),
            total_invoices: 5,
            total_pending: "$2,000.00".to_string(),
            total_paid: "$5,000.00".to_string(),
        },
        CustomersTable {
            id: "2".to_string(),
            name: "示例客户2".to_string(),
            email: "user2@example.com".to_string(),
            image_url: "/customers/customer-2.png".to_string(),
            total_invoices: 3,
            total_pending: "$1,000.00".to_string(),
            total_paid: "$4,000.00".to_string(),
        },
    ]
}

fn fixture_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The `DataSource` used when the database is unavailable. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

#[async_trait]
impl DataSource for FixtureSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Fixture
    }

    async fn revenue(&self) -> Result<Vec<Revenue>, DbError> {
        tracing::info!("Serving fixture revenue data.");
        Ok(revenue())
    }

    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, DbError> {
        tracing::info!("Serving fixture latest invoices.");
        Ok(latest_invoices())
    }

    async fn card_data(&self) -> Result<CardData, DbError> {
        tracing::info!("Serving fixture card data.");
        Ok(card_data())
    }

    async fn filtered_invoices(
        &self,
        _query: &str,
        _current_page: u32,
    ) -> Result<Vec<InvoicesTable>, DbError> {
        tracing::info!("Serving fixture invoices.");
        Ok(filtered_invoices())
    }

    async fn invoices_pages(&self, _query: &str) -> Result<i64, DbError> {
        Ok(invoices_pages())
    }

    async fn invoice_by_id(&self, _id: &str) -> Result<Option<InvoiceForm>, DbError> {
        tracing::info!("Serving fixture invoice.");
        Ok(Some(invoice_form()))
    }

    async fn customers(&self) -> Result<Vec<CustomerField>, DbError> {
        tracing::info!("Serving fixture customers.");
        Ok(customers())
    }

    async fn filtered_customers(&self, _query: &str) -> Result<Vec<CustomersTable>, DbError> {
        tracing::info!("Serving fixture customer table.");
        Ok(filtered_customers())
    }
}
