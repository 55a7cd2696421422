//! Client configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_SIGN_UP_PATH: &str = "/signUp";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_LOGOUT_PATH: &str = "/logout";
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A numeric setting could not be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Parse { var: &'static str, value: String },
}

/// Backend paths for each auth call, joined onto the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub sign_up: String,
    pub login: String,
    pub logout: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sign_up: DEFAULT_SIGN_UP_PATH.to_owned(),
            login: DEFAULT_LOGIN_PATH.to_owned(),
            logout: DEFAULT_LOGOUT_PATH.to_owned(),
        }
    }
}

/// `request_secs` is unset by default: an auth call runs until the backend
/// answers or the connection drops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    pub connect_secs: u64,
    pub request_secs: Option<u64>,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self { connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS, request_secs: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClientConfig {
    pub base_url: String,
    pub endpoints: Endpoints,
    pub timeouts: ClientTimeouts,
}

impl Default for AuthClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}

impl AuthClientConfig {
    /// Default endpoints and timeouts against the given backend.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            endpoints: Endpoints::default(),
            timeouts: ClientTimeouts::default(),
        }
    }

    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `CHAT_API_BASE_URL`: default `http://127.0.0.1:8080`
    /// - `CHAT_API_SIGN_UP_PATH`: default `/signUp`
    /// - `CHAT_API_LOGIN_PATH`: default `/login`
    /// - `CHAT_API_LOGOUT_PATH`: default `/logout`
    /// - `CHAT_API_CONNECT_TIMEOUT_SECS`: default 10
    /// - `CHAT_API_REQUEST_TIMEOUT_SECS`: unset means no overall timeout
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if a timeout is not a whole number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("CHAT_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());
        let mut config = Self::with_base_url(&base_url);

        config.endpoints = Endpoints {
            sign_up: env_path("CHAT_API_SIGN_UP_PATH", DEFAULT_SIGN_UP_PATH),
            login: env_path("CHAT_API_LOGIN_PATH", DEFAULT_LOGIN_PATH),
            logout: env_path("CHAT_API_LOGOUT_PATH", DEFAULT_LOGOUT_PATH),
        };
        config.timeouts = ClientTimeouts {
            connect_secs: env_u64("CHAT_API_CONNECT_TIMEOUT_SECS")?.unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_secs: env_u64("CHAT_API_REQUEST_TIMEOUT_SECS")?,
        };

        Ok(config)
    }
}

fn env_path(key: &str, default: &str) -> String {
    let raw = std::env::var(key).unwrap_or_else(|_| default.to_owned());
    normalize_path(raw.trim())
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') { path.to_owned() } else { format!("/{path}") }
}

fn env_u64(key: &'static str) -> Result<Option<u64>, ConfigError> {
    let Ok(raw) = std::env::var(key) else {
        return Ok(None);
    };
    raw.trim()
        .parse::<u64>()
        .map(Some)
        .map_err(|_| ConfigError::Parse { var: key, value: raw })
}
