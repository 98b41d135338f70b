use crate::DbError;
use crate::connection::ConnectionHandle;
use crate::pagination::{ITEMS_PER_PAGE, page_offset, search_pattern, total_pages};
use crate::source::{DataSource, SourceKind};
use async_trait::async_trait;
use core_types::{
    CardData, CustomerField, CustomersTable, CustomersTableRow, InvoiceForm, InvoiceFormRow,
    InvoicesTable, LatestInvoice, LatestInvoiceRaw, Revenue,
};
use sqlx::postgres::PgPool;

/// The `DbRepository` provides the live implementation of every dashboard read.
/// It encapsulates all SQL; every user-supplied value is a bound parameter.
#[derive(Debug, Clone)]
pub struct DbRepository {
    handle: ConnectionHandle,
}

impl DbRepository {
    /// Creates a new `DbRepository` over the process-wide connection handle.
    pub fn new(handle: ConnectionHandle) -> Self {
        Self { handle }
    }

    fn pool(&self) -> Result<&PgPool, DbError> {
        self.handle.pool()
    }
}

#[async_trait]
impl DataSource for DbRepository {
    fn kind(&self) -> SourceKind {
        SourceKind::Live
    }

    async fn revenue(&self) -> Result<Vec<Revenue>, DbError> {
        let revenue = sqlx::query_as::<_, Revenue>("SELECT month, revenue FROM revenue")
            .fetch_all(self.pool()?)
            .await?;
        Ok(revenue)
    }

    async fn latest_invoices(&self) -> Result<Vec<LatestInvoice>, DbError> {
        let rows = sqlx::query_as::<_, LatestInvoiceRaw>(
            r#"
            SELECT invoices.amount, customers.name, customers.image_url, customers.email, invoices.id::text AS id
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC
            LIMIT 5
            "#,
        )
        .fetch_all(self.pool()?)
        .await?;

        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }

    /// The three aggregates are independent, so they run concurrently and are
    /// combined only once all of them have finished.
    async fn card_data(&self) -> Result<CardData, DbError> {
        let pool = self.pool()?;

        let invoice_count_future =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices").fetch_one(pool);
        let customer_count_future =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers").fetch_one(pool);
        let invoice_status_future = sqlx::query_as::<_, (Option<i64>, Option<i64>)>(
            r#"
            SELECT
                SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS paid,
                SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS pending
            FROM invoices
            "#,
        )
        .fetch_one(pool);

        let (invoice_count_res, customer_count_res, invoice_status_res) = tokio::join!(
            invoice_count_future,
            customer_count_future,
            invoice_status_future
        );

        let (paid, pending) = invoice_status_res?;
        Ok(CardData::from_totals(
            invoice_count_res?,
            customer_count_res?,
            paid,
            pending,
        ))
    }

    async fn filtered_invoices(
        &self,
        query: &str,
        current_page: u32,
    ) -> Result<Vec<InvoicesTable>, DbError> {
        // `invoices.id` breaks date ties so consecutive pages never overlap.
        let invoices = sqlx::query_as::<_, InvoicesTable>(
            r#"
            SELECT
                invoices.id::text AS id,
                invoices.amount,
                invoices.date,
                invoices.status,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1 OR
                invoices.amount::text ILIKE $1 OR
                invoices.date::text ILIKE $1 OR
                invoices.status ILIKE $1
            ORDER BY invoices.date DESC, invoices.id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(search_pattern(query))
        .bind(ITEMS_PER_PAGE)
        .bind(page_offset(current_page))
        .fetch_all(self.pool()?)
        .await?;

        Ok(invoices)
    }

    async fn invoices_pages(&self, query: &str) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1 OR
                invoices.amount::text ILIKE $1 OR
                invoices.date::text ILIKE $1 OR
                invoices.status ILIKE $1
            "#,
        )
        .bind(search_pattern(query))
        .fetch_one(self.pool()?)
        .await?;

        Ok(total_pages(count))
    }

    async fn invoice_by_id(&self, id: &str) -> Result<Option<InvoiceForm>, DbError> {
        let row = sqlx::query_as::<_, InvoiceFormRow>(
            r#"
            SELECT
                invoices.id::text AS id,
                invoices.customer_id::text AS customer_id,
                invoices.amount,
                invoices.status
            FROM invoices
            WHERE invoices.id = $1::uuid
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool()?)
        .await?;

        Ok(row.map(InvoiceForm::from))
    }

    async fn customers(&self) -> Result<Vec<CustomerField>, DbError> {
        let customers = sqlx::query_as::<_, CustomerField>(
            "SELECT id::text AS id, name FROM customers ORDER BY name ASC",
        )
        .fetch_all(self.pool()?)
        .await?;
        Ok(customers)
    }

    /// The left join keeps customers without invoices; their totals come back as zero.
    async fn filtered_customers(&self, query: &str) -> Result<Vec<CustomersTable>, DbError> {
        let rows = sqlx::query_as::<_, CustomersTableRow>(
            r#"
            SELECT
                customers.id::text AS id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END) AS total_pending,
                SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END) AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC
            "#,
        )
        .bind(search_pattern(query))
        .fetch_all(self.pool()?)
        .await?;

        Ok(rows.into_iter().map(CustomersTable::from).collect())
    }
}
