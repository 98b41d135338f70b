use crate::error::{DataAccessError, DbError, Operation};
use crate::source::{DataSource, SourceKind};
use core_types::{
    CardData, CustomerField, CustomersTable, InvoiceForm, InvoicesTable, LatestInvoice, Revenue,
};
use std::sync::Arc;

/// The read API the dashboard pages call.
///
/// Wraps whichever `DataSource` the host selected at startup. Every operation
/// either returns the source's result or, when the source fails, logs the cause
/// and returns a `DataAccessError` naming the operation. Nothing is cached, so
/// each call sees the latest committed data.
#[derive(Clone)]
pub struct Dashboard {
    source: Arc<dyn DataSource>,
}

impl Dashboard {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, DataAccessError> {
        self.source
            .revenue()
            .await
            .map_err(failed(Operation::Revenue))
    }

    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, DataAccessError> {
        self.source
            .latest_invoices()
            .await
            .map_err(failed(Operation::LatestInvoices))
    }

    pub async fn fetch_card_data(&self) -> Result<CardData, DataAccessError> {
        self.source
            .card_data()
            .await
            .map_err(failed(Operation::CardData))
    }

    /// `current_page` is 1-based; an empty `query` matches every invoice.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        current_page: u32,
    ) -> Result<Vec<InvoicesTable>, DataAccessError> {
        self.source
            .filtered_invoices(query, current_page)
            .await
            .map_err(failed(Operation::FilteredInvoices))
    }

    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<i64, DataAccessError> {
        self.source
            .invoices_pages(query)
            .await
            .map_err(failed(Operation::InvoicesPages))
    }

    /// An unknown id is `Ok(None)`, not an error.
    pub async fn fetch_invoice_by_id(
        &self,
        id: &str,
    ) -> Result<Option<InvoiceForm>, DataAccessError> {
        self.source
            .invoice_by_id(id)
            .await
            .map_err(failed(Operation::InvoiceById))
    }

    pub async fn fetch_customers(&self) -> Result<Vec<CustomerField>, DataAccessError> {
        self.source
            .customers()
            .await
            .map_err(failed(Operation::Customers))
    }

    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomersTable>, DataAccessError> {
        self.source
            .filtered_customers(query)
            .await
            .map_err(failed(Operation::FilteredCustomers))
    }
}

fn failed(operation: Operation) -> impl FnOnce(DbError) -> DataAccessError {
    move |error| {
        tracing::error!(operation = %operation, error = %error, "Database error.");
        DataAccessError::new(operation)
    }
}
