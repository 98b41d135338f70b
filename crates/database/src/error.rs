use std::fmt;
use thiserror::Error;

/// Failures raised while talking to the database. Never shown to callers of the dashboard.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),
}

/// The eight read operations the dashboard exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Revenue,
    LatestInvoices,
    CardData,
    FilteredInvoices,
    InvoicesPages,
    InvoiceById,
    Customers,
    FilteredCustomers,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Revenue,
        Operation::LatestInvoices,
        Operation::CardData,
        Operation::FilteredInvoices,
        Operation::InvoicesPages,
        Operation::InvoiceById,
        Operation::Customers,
        Operation::FilteredCustomers,
    ];

    /// The fixed message handed to callers when this operation fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Revenue => "Failed to fetch revenue data.",
            Operation::LatestInvoices => "Failed to fetch the latest invoices.",
            Operation::CardData => "Failed to fetch card data.",
            Operation::FilteredInvoices => "Failed to fetch invoices.",
            Operation::InvoicesPages => "Failed to fetch total number of invoices.",
            Operation::InvoiceById => "Failed to fetch invoice.",
            Operation::Customers => "Failed to fetch all customers.",
            Operation::FilteredCustomers => "Failed to fetch customer table.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Revenue => "fetch_revenue",
            Operation::LatestInvoices => "fetch_latest_invoices",
            Operation::CardData => "fetch_card_data",
            Operation::FilteredInvoices => "fetch_filtered_invoices",
            Operation::InvoicesPages => "fetch_invoices_pages",
            Operation::InvoiceById => "fetch_invoice_by_id",
            Operation::Customers => "fetch_customers",
            Operation::FilteredCustomers => "fetch_filtered_customers",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The only error the dashboard returns. The underlying cause is logged, not carried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .operation.failure_message())]
pub struct DataAccessError {
    operation: Operation,
}

impl DataAccessError {
    pub fn new(operation: Operation) -> Self {
        Self { operation }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}
