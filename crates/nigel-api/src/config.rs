//! # Server Configuration
//!
//! Command-line flags with environment-variable fallbacks, validated into an
//! [`AppConfig`] before the listener is bound.
//!
//! | Flag             | Environment              | Default     |
//! |------------------|--------------------------|-------------|
//! | `--host`         | `NIGEL_API_HOST`         | `127.0.0.1` |
//! | `--port`         | `NIGEL_API_PORT`         | `8000`      |
//! | `--max-n`        | `NIGEL_API_MAX_N`        | `10000000`  |
//! | `--cors-origins` | `NIGEL_API_CORS_ORIGINS` | `*`         |
//! | `--debug`        | `NIGEL_API_DEBUG`        | off         |
//! | `--log-json`     | `NIGEL_API_LOG_JSON`     | off         |
//! | `-v, --verbose`  |                          | off         |
//!
//! `RUST_LOG`, when set, overrides the log filter derived from
//! `--debug` / `--verbose`.

use axum::http::HeaderValue;
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use nigel_core::DEFAULT_MAX_N;
use thiserror::Error;

/// Start the Nigel Number API server.
#[derive(Parser, Debug, Clone)]
#[command(name = "nigel-api", version, about)]
pub struct ServerArgs {
    /// Host to bind the server to.
    #[arg(long, env = "NIGEL_API_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind the server to.
    #[arg(long, env = "NIGEL_API_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Largest accepted value of `n`. Bounds per-request memory and CPU.
    #[arg(long, env = "NIGEL_API_MAX_N", default_value_t = DEFAULT_MAX_N)]
    pub max_n: u64,

    /// Comma-separated origins allowed to call the API cross-origin (`*` for any).
    #[arg(
        long,
        env = "NIGEL_API_CORS_ORIGINS",
        default_value = "*",
        value_delimiter = ','
    )]
    pub cors_origins: Vec<String>,

    /// Enable debug mode (debug-level logging).
    #[arg(long, env = "NIGEL_API_DEBUG", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub debug: bool,

    /// Emit log lines as JSON.
    #[arg(long, env = "NIGEL_API_LOG_JSON", action = ArgAction::SetTrue, value_parser = BoolishValueParser::new())]
    pub log_json: bool,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServerArgs {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.debug || self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Cross-origin policy for the API routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; a single `*` entry allows any origin.
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Whether any origin is allowed.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Validated server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Ceiling for `n`, handed to the validator.
    pub max_n: u64,
    pub cors: CorsConfig,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            max_n: DEFAULT_MAX_N,
            cors: CorsConfig::default(),
            debug: false,
        }
    }
}

impl TryFrom<ServerArgs> for AppConfig {
    type Error = ConfigError;

    fn try_from(args: ServerArgs) -> Result<Self, Self::Error> {
        let host = args.host.trim().to_string();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if args.port == 0 {
            return Err(ConfigError::InvalidPort(args.port));
        }
        if args.max_n == 0 {
            return Err(ConfigError::InvalidMaxN);
        }

        let allowed_origins: Vec<String> = args
            .cors_origins
            .iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if let Some(bad) = allowed_origins
            .iter()
            .find(|o| *o != "*" && HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::InvalidCorsOrigin(bad.clone()));
        }

        Ok(Self {
            host,
            port: args.port,
            max_n: args.max_n,
            cors: CorsConfig { allowed_origins },
            debug: args.debug || args.verbose,
        })
    }
}

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("host cannot be empty")]
    EmptyHost,
    #[error("invalid port number: {0}; must be between 1 and 65535")]
    InvalidPort(u16),
    #[error("max_n must be at least 1")]
    InvalidMaxN,
    #[error("invalid CORS origin: {0:?}")]
    InvalidCorsOrigin(String),
}
