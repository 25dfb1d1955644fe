use baitulmal_core::settings::SettingKey;
use baitulmal_domain::{AppSettings, Result};

use super::{render, OutputFormat};
use crate::cli::SettingsCommand;
use crate::context::AppContext;

fn describe(settings: &AppSettings) -> String {
    format!(
        "currency: {}\nlanguage: {}\ntheme: {}",
        settings.currency, settings.language, settings.theme
    )
}

/// Preferences are local and need no session
pub fn run(ctx: &AppContext, command: SettingsCommand, format: OutputFormat) -> Result<String> {
    let settings = match command {
        SettingsCommand::Show => ctx.settings.load()?,
        SettingsCommand::Set { key, value } => {
            ctx.settings.set(key.parse::<SettingKey>()?, &value)?
        }
    };
    render(format, &settings, describe)
}
