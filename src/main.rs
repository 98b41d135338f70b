use anyhow::Result;
use clap::{Parser, Subcommand};
use comfy_table::Table;
use core_types::{CustomersTable, InvoicesTable, LatestInvoice};
use database::{Dashboard, SourceKind};
use serde_json::Value;

/// The main entry point for the dashboard host.
#[tokio::main]
async fn main() {
    // A missing .env is fine: the variables may come from the real environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = configuration::load_settings()?;
    let _log_guard = configuration::init_tracing(&settings)?;

    // The data source is chosen exactly once, here.
    let dashboard = Dashboard::new(database::connect(&settings).into_data_source());
    if dashboard.source_kind() == SourceKind::Fixture {
        tracing::info!("Database unavailable; showing fixture data.");
    }

    let output = Output { json: cli.json };
    match cli.command {
        Commands::Revenue => {
            let revenue = dashboard.fetch_revenue().await?;
            output.render(&revenue, &["Month", "Revenue"], |r| {
                vec![r.month.clone(), r.revenue.to_string()]
            })?;
        }
        Commands::LatestInvoices => {
            let latest = dashboard.fetch_latest_invoices().await?;
            output.render(&latest, &["Id", "Name", "Email", "Amount"], latest_row)?;
        }
        Commands::Cards => {
            let cards = dashboard.fetch_card_data().await?;
            if output.json {
                println!("{}", serde_json::to_string_pretty(&cards)?);
            } else {
                let mut table = Table::new();
                table.set_header(vec!["Card", "Value"]);
                table.add_row(vec!["Collected".to_string(), cards.total_paid_invoices]);
                table.add_row(vec!["Pending".to_string(), cards.total_pending_invoices]);
                table.add_row(vec!["Total Invoices".to_string(), cards.number_of_invoices.to_string()]);
                table.add_row(vec!["Total Customers".to_string(), cards.number_of_customers.to_string()]);
                println!("{table}");
            }
        }
        Commands::Invoices(args) => {
            let invoices = dashboard.fetch_filtered_invoices(&args.query, args.page).await?;
            output.render(
                &invoices,
                &["Id", "Customer", "Email", "Amount", "Date", "Status"],
                invoice_row,
            )?;
        }
        Commands::Pages(args) => {
            let pages = dashboard.fetch_invoices_pages(&args.query).await?;
            if output.json {
                println!("{}", Value::from(pages));
            } else {
                println!("{pages}");
            }
        }
        Commands::Invoice { id } => match dashboard.fetch_invoice_by_id(&id).await? {
            Some(invoice) if output.json => println!("{}", serde_json::to_string_pretty(&invoice)?),
            Some(invoice) => {
                let mut table = Table::new();
                table.set_header(vec!["Id", "Customer Id", "Amount", "Status"]);
                table.add_row(vec![
                    invoice.id,
                    invoice.customer_id,
                    invoice.amount.to_string(),
                    invoice.status.to_string(),
                ]);
                println!("{table}");
            }
            None => println!("No invoice with id {id}"),
        },
        Commands::Customers => {
            let customers = dashboard.fetch_customers().await?;
            output.render(&customers, &["Id", "Name"], |c| vec![c.id.clone(), c.name.clone()])?;
        }
        Commands::CustomerTable(args) => {
            let customers = dashboard.fetch_filtered_customers(&args.query).await?;
            output.render(
                &customers,
                &["Name", "Email", "Invoices", "Pending", "Paid"],
                customer_row,
            )?;
        }
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Reads the invoicing dashboard's data, from PostgreSQL or from fixtures.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print JSON instead of a table.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly revenue points.
    Revenue,
    /// The five most recent invoices.
    LatestInvoices,
    /// Summary cards: customer and invoice counts, paid and pending totals.
    Cards,
    /// One page of invoices matching a search.
    Invoices(InvoiceSearchArgs),
    /// How many pages of invoices a search spans.
    Pages(SearchArgs),
    /// A single invoice, amount in dollars.
    Invoice {
        /// The invoice id.
        id: String,
    },
    /// All customers by name.
    Customers,
    /// Customers matching a search, with invoice totals.
    CustomerTable(SearchArgs),
}

#[derive(Parser)]
struct SearchArgs {
    /// Case-insensitive search text. Empty matches everything.
    #[arg(long, short, default_value = "")]
    query: String,
}

#[derive(Parser)]
struct InvoiceSearchArgs {
    /// Case-insensitive search text. Empty matches everything.
    #[arg(long, short, default_value = "")]
    query: String,

    /// The 1-based page to show.
    #[arg(long, short, default_value_t = 1)]
    page: u32,
}

// ==============================================================================
// Rendering
// ==============================================================================

struct Output {
    json: bool,
}

impl Output {
    fn render<T: serde::Serialize>(
        &self,
        rows: &[T],
        header: &[&str],
        to_row: impl Fn(&T) -> Vec<String>,
    ) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(rows)?);
            return Ok(());
        }

        let mut table = Table::new();
        table.set_header(header.to_vec());
        for row in rows {
            table.add_row(to_row(row));
        }
        println!("{table}");
        Ok(())
    }
}

fn latest_row(invoice: &LatestInvoice) -> Vec<String> {
    vec![
        invoice.id.clone(),
        invoice.name.clone(),
        invoice.email.clone(),
        invoice.amount.clone(),
    ]
}

fn invoice_row(invoice: &InvoicesTable) -> Vec<String> {
    vec![
        invoice.id.clone(),
        invoice.name.clone(),
        invoice.email.clone(),
        core_types::format_currency(i64::from(invoice.amount)),
        invoice.date.to_string(),
        invoice.status.to_string(),
    ]
}

fn customer_row(customer: &CustomersTable) -> Vec<String> {
    vec![
        customer.name.clone(),
        customer.email.clone(),
        customer.total_invoices.to_string(),
        customer.total_pending.clone(),
        customer.total_paid.clone(),
    ]
}
