use thiserror::Error;

// =============================================================================
// Environment variables
// =============================================================================

/// Bearer token callers must present, required at startup
pub const TOKEN_VAR: &str = "ARGOCD_TOKEN";

/// Optional GitHub personal access token for authenticated API calls
pub const GITHUB_PAT_VAR: &str = "GITHUB_PAT";

/// TCP port the server binds to
pub const PORT_VAR: &str = "PORT";

/// Minimum severity for emitted log records
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Port used when PORT is not set
pub const DEFAULT_PORT: u16 = 8080;

/// Level used when LOG_LEVEL is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Startup configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ARGOCD_TOKEN must be set to the bearer token callers authenticate with")]
    MissingToken,

    #[error("PORT must be a TCP port number, got {value:?}")]
    InvalidPort { value: String },
}

/// Runtime configuration resolved from the environment
///
/// An empty variable counts as unset, so `PORT=""` still yields the
/// default port and `GITHUB_PAT=""` leaves API calls unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Token callers must present as `Authorization: Bearer <token>`
    pub auth_token: String,
    /// GitHub personal access token; `None` means unauthenticated calls
    pub github_token: Option<String>,
    /// TCP port the server binds to
    pub port: u16,
    /// Requested log level, interpreted by the logging setup
    pub log_level: String,
}

impl Config {
    /// Resolves the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(TOKEN_VAR).ok(),
            std::env::var(GITHUB_PAT_VAR).ok(),
            std::env::var(PORT_VAR).ok(),
            std::env::var(LOG_LEVEL_VAR).ok(),
        )
    }

    fn from_vars(
        auth_token: Option<String>,
        github_token: Option<String>,
        port: Option<String>,
        log_level: Option<String>,
    ) -> Result<Self, ConfigError> {
        let auth_token = auth_token
            .filter(|token| !token.is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let port = match port.filter(|value| !value.is_empty()) {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidPort { value })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            auth_token,
            github_token: github_token.filter(|token| !token.is_empty()),
            port,
            log_level: log_level
                .filter(|level| !level.is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}
