//! Subcommand handlers. Each returns the text to print.

pub mod complaint;
pub mod delivery;
pub mod list;
pub mod order;
pub mod settings;

use veggie_lib::AdminStore;

use crate::cli::Command;
use crate::error::CliError;
use crate::settings::{Preferences, SettingsProvider};

/// Everything a command needs.
pub struct Context<'a> {
    pub store: &'a dyn AdminStore,
    pub settings: &'a SettingsProvider,
    pub prefs: Preferences,
}

pub async fn run(cx: &Context<'_>, command: &Command) -> Result<String, CliError> {
    match command {
        Command::List(args) => list::run(cx, args).await,
        Command::Order(args) => order::run(cx, args).await,
        Command::EditDelivery(args) => delivery::run(cx, args).await,
        Command::Complaint(args) => complaint::run(cx, args).await,
        Command::Settings { action } => settings::run(cx, action).await,
    }
}
