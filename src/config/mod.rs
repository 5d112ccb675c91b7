// Configuration module entry point
// Loads settings from config.toml, CATALOG__* environment variables and defaults

mod state;
mod types;

use std::net::SocketAddr;

pub use state::AppState;
pub use types::Config;

/// Environment variable prefix, e.g. `CATALOG__SERVER__PORT=9000`
const ENV_PREFIX: &str = "CATALOG";

impl Config {
    /// Load configuration from `config.toml` (optional) in the working directory
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("catalog.variant", "users")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    /// Configured port, or the variant's default when unset
    pub fn port(&self) -> u16 {
        self.server
            .port
            .unwrap_or_else(|| self.catalog.variant.default_port())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.port())
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
