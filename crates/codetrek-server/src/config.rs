use codetrek_core::{AppError, ProviderConfig};

pub const DEFAULT_PORT: u16 = 3000;

/// Server settings: listening port plus the provider settings shared with the CLI.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub provider: ProviderConfig,
}

impl ServerConfig {
    /// Read `CODETREK_SERVER_PORT` and the `CODETREK_*` provider variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let port = match lookup("CODETREK_SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| {
                AppError::ConfigError(format!("Invalid CODETREK_SERVER_PORT '{raw}'"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            provider: ProviderConfig::from_lookup(lookup)?,
        })
    }
}
