use crate::error::DbError;
use async_trait::async_trait;
use core_types::{
    CardData, CustomerField, CustomersTable, InvoiceForm, InvoicesTable, LatestInvoice, Revenue,
};

/// Which implementation is answering queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Queries run against PostgreSQL.
    Live,
    /// Fixed fixture data, used when no database is available.
    Fixture,
}

/// The abstract interface behind every dashboard read.
///
/// The dashboard holds one of these, chosen once at startup, so the query
/// functions never look at the environment themselves. Implementations must be
/// safe to share across concurrent callers.
#[async_trait]
pub trait DataSource: Send + Sync {
    fn kind(&self) -> SourceKind;

    /// All monthly revenue points, in stored order.
    async fn revenue(&self) -> Result<Vec<Revenue>, DbError>;

    /// The five most recent invoices with their customers, amounts formatted.
    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, DbError>;

    /// Customer and invoice counts plus paid/pending totals.
    async fn card_data(&self) -> Result<CardData, DbError>;

    /// One page of invoices matching `query`, newest first.
    async fn filtered_invoices(
        &self,
        query: &str,
        current_page: u32,
    ) -> Result<Vec<InvoicesTable>, DbError>;

    /// Number of pages the invoices matching `query` span.
    async fn invoices_pages(&self, query: &str) -> Result<i64, DbError>;

    /// A single invoice for the edit form, or `None` if the id is unknown.
    async fn invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, DbError>;

    /// All customers by name, for pickers.
    async fn customers(&self) -> Result<Vec<CustomerField>, DbError>;

    /// Customers matching `query` with their invoice totals.
    async fn filtered_customers(&self, query: &str) -> Result<Vec<CustomersTable>, DbError>;
}
