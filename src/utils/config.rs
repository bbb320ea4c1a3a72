use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file, or ":memory:" for an ephemeral store
    pub url: String,
    pub turso_url: Option<String>,
    pub turso_auth_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Secret for signing JWTs. Must come from the environment, never from
    /// source control.
    pub jwt_secret: String,
    /// Token validity in seconds
    pub token_ttl: i64,
    /// Argon2 memory cost in KiB
    pub argon2_memory_kib: u32,
    /// Argon2 iteration count
    pub argon2_iterations: u32,
    /// Argon2 lane count
    pub argon2_parallelism: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8080".to_string())
                    .parse()?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "marquee.db".to_string()),
                turso_url: env::var("TURSO_URL").ok(),
                turso_auth_token: env::var("TURSO_AUTH_TOKEN").ok(),
            },
            auth: AuthConfig {
                jwt_secret: env::var("JWT_SECRET")?,
                token_ttl: env::var("TOKEN_TTL")
                    .unwrap_or_else(|_| "604800".to_string())
                    .parse()?,
                argon2_memory_kib: env::var("ARGON2_MEMORY_KIB")
                    .unwrap_or_else(|_| "19456".to_string())
                    .parse()?,
                argon2_iterations: env::var("ARGON2_ITERATIONS")
                    .unwrap_or_else(|_| "2".to_string())
                    .parse()?,
                argon2_parallelism: env::var("ARGON2_PARALLELISM")
                    .unwrap_or_else(|_| "1".to_string())
                    .parse()?,
            },
        })
    }
}
