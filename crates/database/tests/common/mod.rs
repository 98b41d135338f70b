//! Test doubles for the `DataSource` seam.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use core_types::{
    CardData, Customer, CustomerField, CustomersTable, CustomersTableRow, Invoice, InvoiceForm,
    InvoiceFormRow, InvoiceStatus, InvoicesTable, LatestInvoice, LatestInvoiceRaw, Revenue,
};
use database::pagination::{ITEMS_PER_PAGE, page_offset, total_pages};
use database::{DataSource, DbError, SourceKind};

/// A source whose every call fails, like a database that is down.
pub struct FailingSource;

fn outage() -> DbError {
    DbError::QueryError(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl DataSource for FailingSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }
    async fn revenue(&self) -> Result<Vec<Revenue>, DbError> {
        Err(outage())
    }
    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, DbError> {
        Err(outage())
    }
    async fn card_data(&self) -> Result<CardData, DbError> {
        Err(outage())
    }
    async fn filtered_invoices(&self, _: &str, _: u32) -> Result<Vec<InvoicesTable>, DbError> {
        Err(outage())
    }
    async fn invoices_pages(&self, _: &str) -> Result<i64, DbError> {
        Err(outage())
    }
    async fn invoice_by_id(&self, _: &str) -> Result<Option<InvoiceForm>, DbError> {
        Err(outage())
    }
    async fn customers(&self) -> Result<Vec<CustomerField>, DbError> {
        Err(outage())
    }
    async fn filtered_customers(&self, _: &str) -> Result<Vec<CustomersTable>, DbError> {
        Err(outage())
    }
}

/// An in-memory stand-in for the two tables, answering the same questions the SQL does.
#[derive(Default)]
pub struct MemorySource {
    pub customers: Vec<Customer>,
    pub invoices: Vec<Invoice>,
    pub revenue: Vec<Revenue>,
}

impl MemorySource {
    pub fn customer(&mut self, id: &str, name: &str, email: &str) {
        self.customers.push(Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            image_url: format!("/customers/{id}.png"),
        });
    }

    pub fn invoice(&mut self, id: &str, customer_id: &str, amount: i32, date: NaiveDate, status: InvoiceStatus) {
        self.invoices.push(Invoice {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            amount,
            date,
            status,
        });
    }

    fn joined(&self) -> Vec<(&Invoice, &Customer)> {
        self.invoices
            .iter()
            .filter_map(|invoice| {
                self.customers
                    .iter()
                    .find(|c| c.id == invoice.customer_id)
                    .map(|c| (invoice, c))
            })
            .collect()
    }

    fn matching(&self, query: &str) -> Vec<InvoicesTable> {
        let needle = query.to_lowercase();
        let mut rows: Vec<InvoicesTable> = self
            .joined()
            .into_iter()
            .filter(|(invoice, customer)| {
                [
                    customer.name.clone(),
                    customer.email.clone(),
                    invoice.amount.to_string(),
                    invoice.date.to_string(),
                    invoice.status.to_string(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            })
            .map(|(invoice, customer)| InvoicesTable {
                id: invoice.id.clone(),
                amount: invoice.amount,
                date: invoice.date,
                status: invoice.status,
                name: customer.name.clone(),
                email: customer.email.clone(),
                image_url: customer.image_url.clone(),
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        rows
    }

    fn sum_for(&self, customer_id: Option<&str>, status: InvoiceStatus) -> i64 {
        self.invoices
            .iter()
            .filter(|i| customer_id.is_none_or(|id| i.customer_id == id) && i.status == status)
            .map(|i| i64::from(i.amount))
            .sum()
    }
}

#[async_trait]
impl DataSource for MemorySource {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }

    async fn revenue(&self) -> Result<Vec<Revenue>, DbError> {
        Ok(self.revenue.clone())
    }

    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, DbError> {
        let mut joined = self.joined();
        joined.sort_by(|a, b| b.0.date.cmp(&a.0.date));
        Ok(joined
            .into_iter()
            .take(5)
            .map(|(invoice, customer)| {
                LatestInvoice::from(LatestInvoiceRaw {
                    id: invoice.id.clone(),
                    name: customer.name.clone(),
                    image_url: customer.image_url.clone(),
                    email: customer.email.clone(),
                    amount: invoice.amount,
                })
            })
            .collect())
    }

    async fn card_data(&self) -> Result<CardData, DbError> {
        let sum = |status| {
            if self.invoices.is_empty() {
                None
            } else {
                Some(self.sum_for(None, status))
            }
        };
        Ok(CardData::from_totals(
            self.invoices.len() as i64,
            self.customers.len() as i64,
            sum(InvoiceStatus::Paid),
            sum(InvoiceStatus::Pending),
        ))
    }

    async fn filtered_invoices(
        &self,
        query: &str,
        current_page: u32,
    ) -> Result<Vec<InvoicesTable>, DbError> {
        Ok(self
            .matching(query)
            .into_iter()
            .skip(page_offset(current_page) as usize)
            .take(ITEMS_PER_PAGE as usize)
            .collect())
    }

    async fn invoices_pages(&self, query: &str) -> Result<i64, DbError> {
        Ok(total_pages(self.matching(query).len() as i64))
    }

    async fn invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, DbError> {
        Ok(self.invoices.iter().find(|i| i.id == id).map(|i| {
            InvoiceForm::from(InvoiceFormRow {
                id: i.id.clone(),
                customer_id: i.customer_id.clone(),
                amount: i.amount,
                status: i.status,
            })
        }))
    }

    async fn customers(&self) -> Result<Vec<CustomerField>, DbError> {
        let mut customers: Vec<CustomerField> = self
            .customers
            .iter()
            .map(|c| CustomerField {
                id: c.id.clone(),
                name: c.name.clone(),
            })
            .collect();
        customers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(customers)
    }

    async fn filtered_customers(&self, query: &str) -> Result<Vec<CustomersTable>, DbError> {
        let needle = query.to_lowercase();
        let mut rows: Vec<CustomersTable> = self
            .customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle) || c.email.to_lowercase().contains(&needle)
            })
            .map(|c| {
                CustomersTable::from(CustomersTableRow {
                    id: c.id.clone(),
                    name: c.name.clone(),
                    email: c.email.clone(),
                    image_url: c.image_url.clone(),
                    total_invoices: self.invoices.iter().filter(|i| i.customer_id == c.id).count() as i64,
                    total_pending: Some(self.sum_for(Some(&c.id), InvoiceStatus::Pending)),
                    total_paid: Some(self.sum_for(Some(&c.id), InvoiceStatus::Paid)),
                })
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
