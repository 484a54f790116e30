//! CLI error type.

use gridkit::TableError;
use thiserror::Error;
use veggie_lib::{FormError, StoreError};

use crate::settings::SettingsError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error("no row with key {0:?}")]
    UnknownRow(String),
    #[error("invalid argument {arg}: {reason}")]
    InvalidArgument { arg: &'static str, reason: String },
}

impl CliError {
    pub fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
