//! Server configuration module.
//!
//! Configuration is loaded from environment variables once at startup.
//!
//! # Environment Variables
//!
//! - `LDF_SERVER_BACKEND`: backend string in `<identifier>?<configuration>`
//!   form (default: `turtle?example.ttl`)
//! - `LDF_SERVER_LISTEN_PORT`: port to listen on (default: `5000`)
//!
//! # Invariants
//!
//! - `backend` is never empty
//! - `listen_port` is always a valid port number (1-65535)

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Backend string, resolved exactly once at startup.
    pub backend: String,
    /// Port to listen on for fragment requests.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 5000;
    /// Default backend string.
    pub const DEFAULT_BACKEND: &'static str = "turtle?example.ttl";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LDF_SERVER_BACKEND` is set but empty
    /// - `LDF_SERVER_LISTEN_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = Self::load_backend()?;
        let listen_port = Self::load_listen_port()?;

        Ok(Self {
            backend,
            listen_port,
        })
    }

    /// Load the backend string from environment.
    ///
    /// Returns the default if not set.
    fn load_backend() -> Result<String, ConfigError> {
        match std::env::var("LDF_SERVER_BACKEND") {
            Ok(value) => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        name: "LDF_SERVER_BACKEND".to_string(),
                        message: "must not be empty".to_string(),
                    });
                }
                Ok(value)
            }
            Err(_) => Ok(Self::DEFAULT_BACKEND.to_string()),
        }
    }

    /// Load the listen port from environment.
    ///
    /// Returns the default if not set.
    fn load_listen_port() -> Result<u16, ConfigError> {
        match std::env::var("LDF_SERVER_LISTEN_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "LDF_SERVER_LISTEN_PORT".to_string(),
                message: format!("'{value}' is not a valid port number (must be 1-65535)"),
            }),
            Err(_) => Ok(Self::DEFAULT_PORT),
        }
    }
}
