//! Server configuration for the Roster HTTP API.
//!
//! This module provides configuration types for the server, supporting
//! command line arguments, environment variable overrides and programmatic
//! construction.
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROSTER_SERVER_PORT` | 8080 | Server port |
//! | `ROSTER_SERVER_HOST` | 127.0.0.1 | Host to bind |
//! | `ROSTER_LOG_LEVEL` | info | Log level |
//! | `ROSTER_REQUEST_TIMEOUT` | 30 | Request timeout (seconds) |
//! | `ROSTER_ENABLE_CORS` | true | Enable CORS |
//! | `ROSTER_CORS_ORIGINS` | * | Allowed origins |
//! | `ROSTER_CORS_METHODS` | GET,OPTIONS | Allowed methods |
//! | `ROSTER_CORS_HEADERS` | Content-Type,Accept | Allowed headers |
//! | `ROSTER_EMPLOYEE_COUNT` | 50 | Number of synthetic employees |
//! | `ROSTER_SEED` | (none) | RNG seed for reproducible data |
//! | `ROSTER_SNAPSHOT_PATH` | employees.json | Where generated data is written |
//! | `ROSTER_NO_SNAPSHOT` | false | Skip writing the snapshot |
//! | `ROSTER_SNAPSHOT_IN` | (none) | Load employees from a snapshot instead of generating |
//! | `ROSTER_STRICT_FILTERS` | false | Reject malformed comparison filters with 400 |
//!
//! # Example
//!
//! ```rust
//! use roster_rest::ServerConfig;
//!
//! // Create from environment
//! let config = ServerConfig::from_env();
//!
//! // Or create programmatically
//! let config = ServerConfig {
//!     port: 3000,
//!     host: "0.0.0.0".to_string(),
//!     employee_count: 500,
//!     ..Default::default()
//! };
//! ```

use clap::Parser;
use roster_query::MalformedFilterPolicy;
use roster_store::GeneratorConfig;

/// Server configuration for the Roster HTTP API.
///
/// This struct can be constructed from environment variables using [`ServerConfig::from_env`],
/// from command line arguments using [`ServerConfig::parse`], or programmatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "roster")]
#[command(about = "Synthetic employee directory HTTP server")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(short, long, env = "ROSTER_SERVER_PORT", default_value = "8080")]
    pub port: u16,

    /// Host address to bind to.
    #[arg(long, env = "ROSTER_SERVER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "ROSTER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Request timeout in seconds.
    #[arg(long, env = "ROSTER_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Enable CORS.
    #[arg(long, env = "ROSTER_ENABLE_CORS", default_value = "true")]
    pub enable_cors: bool,

    /// Allowed CORS origins (comma-separated, or * for all).
    #[arg(long, env = "ROSTER_CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Allowed CORS methods (comma-separated, or * for all).
    #[arg(long, env = "ROSTER_CORS_METHODS", default_value = "GET,OPTIONS")]
    pub cors_methods: String,

    /// Allowed CORS headers (comma-separated, or * for all).
    #[arg(long, env = "ROSTER_CORS_HEADERS", default_value = "Content-Type,Accept")]
    pub cors_headers: String,

    /// Number of synthetic employees to generate.
    #[arg(short = 'n', long, env = "ROSTER_EMPLOYEE_COUNT", default_value = "50")]
    pub employee_count: u32,

    /// RNG seed for reproducible data.
    #[arg(long, env = "ROSTER_SEED")]
    pub seed: Option<u64>,

    /// Path the generated employees are written to.
    #[arg(long, env = "ROSTER_SNAPSHOT_PATH", default_value = "employees.json")]
    pub snapshot_path: String,

    /// Skip writing the snapshot file.
    #[arg(long, env = "ROSTER_NO_SNAPSHOT")]
    pub no_snapshot: bool,

    /// Load employees from this snapshot instead of generating them.
    #[arg(long, env = "ROSTER_SNAPSHOT_IN")]
    pub snapshot_in: Option<String>,

    /// Reject malformed comparison filters with 400 instead of matching nothing.
    #[arg(long, env = "ROSTER_STRICT_FILTERS")]
    pub strict_filters: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "127.0.0.1".to_string(),
            log_level: "info".to_string(),
            request_timeout: 30,
            enable_cors: true,
            cors_origins: "*".to_string(),
            cors_methods: "GET,OPTIONS".to_string(),
            cors_headers: "Content-Type,Accept".to_string(),
            employee_count: 50,
            seed: None,
            snapshot_path: "employees.json".to_string(),
            no_snapshot: false,
            snapshot_in: None,
            strict_filters: false,
        }
    }
}

impl ServerConfig {
    /// Creates a new ServerConfig from environment variables.
    ///
    /// This is a convenience method that parses environment variables without
    /// requiring command line arguments.
    pub fn from_env() -> Self {
        // Try to parse from environment, falling back to defaults
        Self::try_parse_from(["roster"]).unwrap_or_default()
    }

    /// Returns the socket address to bind to.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the generator settings derived from this configuration.
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            count: self.employee_count,
            seed: self.seed,
            ..Default::default()
        }
    }

    /// Returns how malformed comparison filters are handled.
    pub fn filter_policy(&self) -> MalformedFilterPolicy {
        if self.strict_filters {
            MalformedFilterPolicy::Reject
        } else {
            MalformedFilterPolicy::ExcludeAll
        }
    }

    /// Returns true if a snapshot file should be written at startup.
    pub fn writes_snapshot(&self) -> bool {
        !self.no_snapshot && self.snapshot_in.is_none()
    }

    /// Validates the configuration and returns errors if any.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.port == 0 {
            errors.push("Port cannot be 0".to_string());
        }

        if self.request_timeout == 0 {
            errors.push("Request timeout cannot be 0".to_string());
        }

        if !self.no_snapshot && self.snapshot_path.trim().is_empty() {
            errors.push("Snapshot path cannot be empty".to_string());
        }

        if self.snapshot_in.is_some() && self.seed.is_some() {
            errors.push("Seed cannot be combined with a snapshot input".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Creates a configuration suitable for testing.
    ///
    /// This uses ephemeral port 0, a fixed seed, and disables features that
    /// might interfere with tests.
    pub fn for_testing() -> Self {
        Self {
            port: 0, // Let OS assign port
            host: "127.0.0.1".to_string(),
            log_level: "debug".to_string(),
            request_timeout: 5, // Shorter timeout for tests
            enable_cors: false,
            cors_origins: "*".to_string(),
            cors_methods: "*".to_string(),
            cors_headers: "*".to_string(),
            employee_count: 50,
            seed: Some(42),
            snapshot_path: "employees.json".to_string(),
            no_snapshot: true,
            snapshot_in: None,
            strict_filters: false,
        }
    }
}
