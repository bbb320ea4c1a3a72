//! Store backend selection.

use super::store::Store;
use crate::types::Result;
use crate::utils::config::DatabaseConfig;

/// Store backend configuration
#[derive(Debug, Clone, Default)]
pub enum StoreProvider {
    /// In-memory SQLite database (ephemeral, lost on restart)
    #[default]
    Memory,
    /// File-based SQLite database
    SQLite {
        /// Path to the SQLite database file
        path: String,
    },
    /// Remote Turso database (requires network access)
    #[cfg(feature = "turso")]
    Turso {
        /// The Turso database URL (e.g., `libsql://your-db.turso.io`)
        url: String,
        /// Authentication token for the Turso database
        auth_token: String,
    },
}

impl StoreProvider {
    /// Open a store for this backend.
    pub async fn create(&self) -> Result<Store> {
        match self {
            StoreProvider::Memory => Store::new_memory().await,
            StoreProvider::SQLite { path } => Store::new_local(path).await,
            #[cfg(feature = "turso")]
            StoreProvider::Turso { url, auth_token } => {
                Store::new_remote(url.clone(), auth_token.clone()).await
            }
        }
    }

    /// Pick a backend from the database configuration: remote Turso when
    /// fully configured (and compiled in), otherwise the local file, with
    /// `:memory:` selecting the ephemeral store.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        #[cfg(feature = "turso")]
        {
            if let (Some(url), Some(token)) = (&config.turso_url, &config.turso_auth_token) {
                if !url.is_empty() && !token.is_empty() {
                    return StoreProvider::Turso {
                        url: url.clone(),
                        auth_token: token.clone(),
                    };
                }
            }
        }

        if config.url == ":memory:" {
            StoreProvider::Memory
        } else {
            StoreProvider::SQLite {
                path: config.url.clone(),
            }
        }
    }
}
