//! `veggie settings`.

use log::info;

use super::Context;
use crate::cli::SettingsAction;
use crate::error::CliError;
use crate::settings::{Preferences, SettingKey};

pub async fn run(cx: &Context<'_>, action: &SettingsAction) -> Result<String, CliError> {
    match action {
        SettingsAction::Get { key: Some(key) } => {
            let key: SettingKey = key.parse()?;
            Ok(cx.prefs.get(key))
        }
        SettingsAction::Get { key: None } => Ok(SettingKey::ALL
            .into_iter()
            .map(|k| format!("{k} = {}", cx.prefs.get(k)))
            .collect::<Vec<_>>()
            .join("\n")),
        SettingsAction::Set { key, value } => {
            let key: SettingKey = key.parse()?;
            Preferences::set(cx.settings, key, value).await?;
            let prefs = Preferences::load(cx.settings).await?;
            info!("setting {key} changed to {}", prefs.get(key));
            Ok(format!("{key} = {}", prefs.get(key)))
        }
        SettingsAction::Reset { key } => {
            let key: SettingKey = key.parse()?;
            Preferences::reset(cx.settings, key).await?;
            let prefs = Preferences::load(cx.settings).await?;
            info!("setting {key} reset");
            Ok(format!("{key} = {}", prefs.get(key)))
        }
    }
}
