//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use jsonwebtoken::Algorithm;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_ALGORITHM, DEFAULT_JWT_TTL_SECONDS,
    DEFAULT_PAGINATION_MAX_LIMIT, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MIN_JWT_SECRET_LENGTH,
};

/// Application configuration
///
/// Constructed once at startup and treated as immutable afterwards; the
/// token codec and server read from it, never from ambient state.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub jwt_ttl_seconds: i64,
    pub pagination_max_limit: u64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("jwt_ttl_seconds", &self.jwt_ttl_seconds)
            .field("pagination_max_limit", &self.pagination_max_limit)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Panics
    /// Panics if JWT_SECRET is missing in a release build, too short, or if
    /// JWT_ALGORITHM names an unknown algorithm (startup validation).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            if cfg!(debug_assertions) {
                // Development mode: use default but warn
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            } else {
                // Production mode: panic
                panic!("JWT_SECRET environment variable must be set in production");
            }
        });

        // Validate JWT secret length
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            panic!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            );
        }

        let algorithm_name =
            env::var("JWT_ALGORITHM").unwrap_or_else(|_| DEFAULT_JWT_ALGORITHM.to_string());
        let jwt_algorithm = Algorithm::from_str(&algorithm_name)
            .unwrap_or_else(|_| panic!("JWT_ALGORITHM '{}' is not supported", algorithm_name));

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_algorithm,
            jwt_ttl_seconds: env::var("JWT_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JWT_TTL_SECONDS),
            pagination_max_limit: env::var("PAGINATION_MAX_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PAGINATION_MAX_LIMIT),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
