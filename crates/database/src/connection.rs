use crate::error::DbError;
use crate::fixtures::FixtureSource;
use crate::repository::DbRepository;
use crate::source::DataSource;
use configuration::Settings;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const MAX_CONNECTIONS: u32 = 10;
const NO_RUNTIME: &str = "database pool must be created inside a Tokio runtime";

/// Why no live database is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    /// A production bundle is being built.
    BuildPhase,
    /// Neither `POSTGRES_URL` nor `DATABASE_URL` is set.
    MissingUrl,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::BuildPhase => f.write_str("production build phase"),
            UnavailableReason::MissingUrl => f.write_str("no connection string configured"),
        }
    }
}

/// The process-wide database handle. Read-only once created.
///
/// A connection string that cannot be parsed still yields a handle; the
/// problem is reported by each query instead of at startup.
#[derive(Debug, Clone)]
pub enum ConnectionHandle {
    Pool(PgPool),
    Misconfigured(String),
}

impl ConnectionHandle {
    pub fn pool(&self) -> Result<&PgPool, DbError> {
        match self {
            ConnectionHandle::Pool(pool) => Ok(pool),
            ConnectionHandle::Misconfigured(reason) => {
                Err(DbError::ConnectionConfigError(reason.clone()))
            }
        }
    }
}

/// The outcome of connection provisioning.
#[derive(Debug, Clone)]
pub enum Connection {
    Live(ConnectionHandle),
    Unavailable(UnavailableReason),
}

impl Connection {
    pub fn is_available(&self) -> bool {
        matches!(self, Connection::Live(_))
    }

    /// Selects the data source the dashboard will use for the rest of the process.
    pub fn into_data_source(self) -> Arc<dyn DataSource> {
        match self {
            Connection::Live(handle) => Arc::new(DbRepository::new(handle)),
            Connection::Unavailable(_) => Arc::new(FixtureSource),
        }
    }
}

/// Decides once whether a live database can be used.
///
/// Never fails or panics. The pool connects lazily, so nothing touches the
/// network here; TLS is always required. The pool needs a Tokio runtime for its
/// maintenance tasks: called outside one, the handle is `Misconfigured` and
/// every query reports that instead.
pub fn connect(settings: &Settings) -> Connection {
    if settings.is_build_phase() {
        let reason = UnavailableReason::BuildPhase;
        tracing::info!(%reason, "No live database, serving fixture data.");
        return Connection::Unavailable(reason);
    }

    let Some(url) = settings.connection_url() else {
        let reason = UnavailableReason::MissingUrl;
        tracing::info!(%reason, "No live database, serving fixture data.");
        return Connection::Unavailable(reason);
    };

    Connection::Live(open_handle(url))
}

fn open_handle(url: &str) -> ConnectionHandle {
    if tokio::runtime::Handle::try_current().is_err() {
        tracing::warn!("No Tokio runtime while provisioning; queries will fail.");
        return ConnectionHandle::Misconfigured(NO_RUNTIME.to_string());
    }

    match PgConnectOptions::from_str(url) {
        Ok(options) => {
            let pool = PgPoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_lazy_with(options.ssl_mode(PgSslMode::Require));
            tracing::debug!("Database pool created.");
            ConnectionHandle::Pool(pool)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Connection string could not be parsed; queries will fail.");
            ConnectionHandle::Misconfigured(e.to_string())
        }
    }
}
