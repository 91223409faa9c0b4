/// Server configuration.
///
/// Bind settings default to the constants below and can be overridden
/// through the `MATH_PATH_HOST` and `MATH_PATH_PORT` environment variables.
use log::warn;

/// Default interface the HTTP server binds to.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 8080;

pub const HOST_ENV: &str = "MATH_PATH_HOST";
pub const PORT_ENV: &str = "MATH_PATH_PORT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var(HOST_ENV).ok(), std::env::var(PORT_ENV).ok())
    }

    /// Build the configuration from optional raw values.
    /// An unparsable port falls back to the default.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => config.port = port,
                Err(_) => warn!(
                    "[Config] Invalid {} value '{}', using default port {}",
                    PORT_ENV, raw, DEFAULT_PORT
                ),
            }
        }
        config
    }
}
