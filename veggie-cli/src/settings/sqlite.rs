//! SQLite settings store, read through a `DashMap` cache.

use std::path::Path;

use async_sqlite::{Client, ClientBuilder};
use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use rusqlite::OptionalExtension;

use super::{SettingsBackend, SettingsError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS preferences (
    name  TEXT PRIMARY KEY,
    bytes BLOB NOT NULL
)";

/// Settings persisted in a single-table SQLite file.
pub struct SqliteBackend {
    client: Client,
    cache: DashMap<String, Vec<u8>>,
}

impl SqliteBackend {
    /// Open the database at `path`, creating it and its directory if needed.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let backend = Self::with_client(ClientBuilder::new().path(path).open().await?).await?;
        debug!("settings: {}", path.display());
        Ok(backend)
    }

    /// A throwaway database that lives as long as the backend.
    pub async fn open_in_memory() -> Result<Self, SettingsError> {
        Self::with_client(ClientBuilder::new().open().await?).await
    }

    async fn with_client(client: Client) -> Result<Self, SettingsError> {
        client.conn(|conn| conn.execute_batch(SCHEMA)).await?;
        Ok(Self {
            client,
            cache: DashMap::new(),
        })
    }
}

#[async_trait]
impl SettingsBackend for SqliteBackend {
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, SettingsError> {
        if let Some(hit) = self.cache.get(key) {
            return Ok(Some(hit.value().clone()));
        }

        let name = key.to_string();
        let stored: Option<Vec<u8>> = self
            .client
            .conn(move |conn| {
                conn.query_row(
                    "SELECT bytes FROM preferences WHERE name = ?1",
                    [name],
                    |row| row.get(0),
                )
                .optional()
            })
            .await?;

        if let Some(bytes) = &stored {
            self.cache.insert(key.to_string(), bytes.clone());
        }
        Ok(stored)
    }

    async fn set_bytes(&self, key: &str, value: Vec<u8>) -> Result<(), SettingsError> {
        let name = key.to_string();
        let bytes = value.clone();
        self.client
            .conn(move |conn| {
                conn.execute(
                    "INSERT OR REPLACE INTO preferences (name, bytes) VALUES (?1, ?2)",
                    rusqlite::params![name, bytes],
                )
            })
            .await?;
        self.cache.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        let name = key.to_string();
        self.client
            .conn(move |conn| conn.execute("DELETE FROM preferences WHERE name = ?1", [name]))
            .await?;
        self.cache.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, SettingsError> {
        let names = self
            .client
            .conn(|conn| {
                conn.prepare("SELECT name FROM preferences ORDER BY name")?
                    .query_map([], |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>()
            })
            .await?;
        Ok(names)
    }
}
