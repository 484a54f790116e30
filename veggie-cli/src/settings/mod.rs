//! Settings system for typed key-value storage.

mod backend;
mod memory;
mod sqlite;

pub use backend::SettingsBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use gridkit::{SelectAllScope, DEFAULT_PAGE_SIZE};
use log::LevelFilter;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Settings error type.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("database error: {0}")]
    Database(#[from] async_sqlite::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(bincode::Error),
    #[error("deserialization error: {0}")]
    Deserialization(bincode::Error),
    #[error("unknown setting: {0}")]
    UnknownKey(String),
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Typed settings provider.
///
/// Wraps a `SettingsBackend` with typed serialization via bincode.
#[derive(Clone)]
pub struct SettingsProvider {
    backend: Arc<dyn SettingsBackend>,
}

impl SettingsProvider {
    pub fn new(backend: impl SettingsBackend + 'static) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// Get a typed value for a key.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SettingsError> {
        match self.backend.get_bytes(key).await? {
            Some(bytes) => Ok(Some(
                bincode::deserialize(&bytes).map_err(SettingsError::Deserialization)?,
            )),
            None => Ok(None),
        }
    }

    /// Get a typed value for a key, returning a default if not found.
    pub async fn get_or<T: DeserializeOwned>(
        &self,
        key: &str,
        default: T,
    ) -> Result<T, SettingsError> {
        Ok(self.get(key).await?.unwrap_or(default))
    }

    /// Set a typed value for a key.
    pub async fn set<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<(), SettingsError> {
        let bytes = bincode::serialize(value).map_err(SettingsError::Serialization)?;
        self.backend.set_bytes(key, bytes).await
    }

    pub async fn delete(&self, key: &str) -> Result<(), SettingsError> {
        self.backend.delete(key).await
    }

    pub async fn keys(&self) -> Result<Vec<String>, SettingsError> {
        self.backend.keys().await
    }
}

/// The settings the CLI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    PageSize,
    SelectAllScope,
    LogLevel,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::PageSize,
        SettingKey::SelectAllScope,
        SettingKey::LogLevel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::PageSize => "table.page_size",
            SettingKey::SelectAllScope => "table.select_all_scope",
            SettingKey::LogLevel => "log.level",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SettingsError::UnknownKey(s.to_string()))
    }
}

/// Persistent user preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub page_size: usize,
    pub select_all_scope: SelectAllScope,
    pub log_level: LevelFilter,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            select_all_scope: SelectAllScope::default(),
            log_level: LevelFilter::Info,
        }
    }
}

fn invalid(key: SettingKey, value: &str, reason: impl ToString) -> SettingsError {
    SettingsError::InvalidValue {
        key: key.as_str(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl Preferences {
    /// Load preferences, falling back to defaults for unset keys.
    pub async fn load(settings: &SettingsProvider) -> Result<Self, SettingsError> {
        let defaults = Self::default();
        let page_size: u64 = settings
            .get_or(SettingKey::PageSize.as_str(), defaults.page_size as u64)
            .await?;
        let select_all_scope = settings
            .get_or(SettingKey::SelectAllScope.as_str(), defaults.select_all_scope)
            .await?;
        let log_level: Option<String> = settings.get(SettingKey::LogLevel.as_str()).await?;
        Ok(Self {
            page_size: usize::try_from(page_size).unwrap_or(defaults.page_size),
            select_all_scope,
            log_level: log_level
                .and_then(|l| l.parse().ok())
                .unwrap_or(defaults.log_level),
        })
    }

    /// Current value of `key`, as text.
    pub fn get(&self, key: SettingKey) -> String {
        match key {
            SettingKey::PageSize => self.page_size.to_string(),
            SettingKey::SelectAllScope => self.select_all_scope.to_string(),
            SettingKey::LogLevel => self.log_level.to_string().to_lowercase(),
        }
    }

    /// Parse `value` for `key` and persist it.
    pub async fn set(
        settings: &SettingsProvider,
        key: SettingKey,
        value: &str,
    ) -> Result<(), SettingsError> {
        match key {
            SettingKey::PageSize => {
                let size: u64 = value.trim().parse().map_err(|e| invalid(key, value, e))?;
                if size == 0 {
                    return Err(invalid(key, value, "page size must be at least 1"));
                }
                settings.set(key.as_str(), &size).await
            }
            SettingKey::SelectAllScope => {
                let scope: SelectAllScope = value.parse().map_err(|e| invalid(key, value, e))?;
                settings.set(key.as_str(), &scope).await
            }
            SettingKey::LogLevel => {
                let level: LevelFilter = value.parse().map_err(|e| invalid(key, value, e))?;
                settings
                    .set(key.as_str(), &level.to_string().to_lowercase())
                    .await
            }
        }
    }

    /// Forget `key`, restoring its default.
    pub async fn reset(settings: &SettingsProvider, key: SettingKey) -> Result<(), SettingsError> {
        settings.delete(key.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> SettingsProvider {
        SettingsProvider::new(MemoryBackend::new())
    }

    #[tokio::test]
    async fn test_defaults_when_unset() {
        let prefs = Preferences::load(&provider()).await.unwrap();
        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.page_size, 10);
        assert_eq!(prefs.get(SettingKey::LogLevel), "info");
    }

    #[tokio::test]
    async fn test_set_and_reload() {
        let settings = provider();
        Preferences::set(&settings, SettingKey::PageSize, "25").await.unwrap();
        Preferences::set(&settings, SettingKey::SelectAllScope, "filtered")
            .await
            .unwrap();
        Preferences::set(&settings, SettingKey::LogLevel, "DEBUG").await.unwrap();

        let prefs = Preferences::load(&settings).await.unwrap();
        assert_eq!(prefs.page_size, 25);
        assert_eq!(prefs.select_all_scope, SelectAllScope::FilteredRows);
        assert_eq!(prefs.log_level, LevelFilter::Debug);
        assert_eq!(
            settings.keys().await.unwrap(),
            vec!["log.level", "table.page_size", "table.select_all_scope"]
        );
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected() {
        let settings = provider();
        assert!(matches!(
            Preferences::set(&settings, SettingKey::PageSize, "0").await,
            Err(SettingsError::InvalidValue { .. })
        ));
        assert!(Preferences::set(&settings, SettingKey::LogLevel, "loud").await.is_err());
        assert!(settings.keys().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_restores_default() {
        let settings = provider();
        Preferences::set(&settings, SettingKey::PageSize, "3").await.unwrap();
        Preferences::reset(&settings, SettingKey::PageSize).await.unwrap();
        assert_eq!(Preferences::load(&settings).await.unwrap().page_size, 10);
    }

    #[test]
    fn test_unknown_key() {
        assert!(matches!(
            "table.colour".parse::<SettingKey>(),
            Err(SettingsError::UnknownKey(_))
        ));
    }
}
