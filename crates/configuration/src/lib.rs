// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use error::ConfigError;
pub use logging::init_tracing;
pub use settings::{PRODUCTION_BUILD_PHASE, PRODUCTION_ENV, Settings};

/// Optional file next to the binary; environment variables override it.
const CONFIG_FILE: &str = "dashboard";

/// Loads the dashboard settings from `dashboard.toml` (if present) and the process environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(config::Environment::default())
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}

/// Loads settings from an explicit variable map instead of the process environment.
pub fn load_settings_from(vars: config::Map<String, String>) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::Environment::default().source(Some(vars)))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    Ok(settings)
}
