//! # Dashboard Database Crate
//!
//! This crate is the dashboard's data-access layer: eight read operations over
//! the `revenue`, `invoices` and `customers` tables, with a fixture fallback for
//! builds that run without a database.
//!
//! ## Architectural Principles
//!
//! - **Chosen once:** `connect` inspects the settings a single time and
//!   `Connection::into_data_source` picks either the live `DbRepository` or the
//!   `FixtureSource`. The `Dashboard` façade never looks at the environment.
//! - **Parameterized SQL only:** every user-supplied value is bound, never
//!   spliced into the statement text.
//! - **Opaque failures:** callers only ever see a `DataAccessError` naming the
//!   failed operation; the underlying `DbError` is logged.
//!
//! ## Public API
//!
//! - `connect`: decides between a lazily connecting, TLS-only pool and fixtures.
//! - `Dashboard`: the read operations (`fetch_revenue`, `fetch_card_data`, ...).
//! - `DataSource`: the trait behind the façade, for custom or test sources.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod dashboard;
pub mod error;
pub mod fixtures;
pub mod pagination;
pub mod repository;
pub mod source;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{Connection, ConnectionHandle, UnavailableReason, connect};
pub use dashboard::Dashboard;
pub use error::{DataAccessError, DbError, Operation};
pub use fixtures::FixtureSource;
pub use pagination::ITEMS_PER_PAGE;
pub use repository::DbRepository;
pub use source::{DataSource, SourceKind};
