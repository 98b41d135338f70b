use serde::Deserialize;
use std::path::PathBuf;

/// `VERCEL_ENV` value of a production deployment.
pub const PRODUCTION_ENV: &str = "production";
/// `NEXT_PHASE` value while the production bundle is being built.
pub const PRODUCTION_BUILD_PHASE: &str = "phase-production-build";

const DEFAULT_LOG_LEVEL: &str = "info";

/// Everything the dashboard reads from its environment.
///
/// Keys come from the process environment (lowercased by `config`), so
/// `POSTGRES_URL` lands in `postgres_url`. Missing keys are `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Primary connection string for the dashboard database.
    pub postgres_url: Option<String>,
    /// Fallback connection string, used when `POSTGRES_URL` is absent.
    pub database_url: Option<String>,
    /// Deployment stage marker.
    pub vercel_env: Option<String>,
    /// Framework build phase marker.
    pub next_phase: Option<String>,
    pub log_level: Option<String>,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub log_dir: Option<PathBuf>,
}

impl Settings {
    /// The configured connection string, if any. Blank values count as unset.
    pub fn connection_url(&self) -> Option<&str> {
        [&self.postgres_url, &self.database_url]
            .into_iter()
            .filter_map(|url| url.as_deref())
            .map(str::trim)
            .find(|url| !url.is_empty())
    }

    /// True while a production bundle is being built, when no live database is reachable.
    pub fn is_build_phase(&self) -> bool {
        self.vercel_env.as_deref() == Some(PRODUCTION_ENV)
            && self.next_phase.as_deref() == Some(PRODUCTION_BUILD_PHASE)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
