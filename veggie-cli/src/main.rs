use std::fs::{self, File};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{Config, WriteLogger};
use veggie_cli::cli::{effective_log_level, Cli, OutputFormat};
use veggie_cli::commands::{self, Context};
use veggie_cli::settings::{MemoryBackend, Preferences, SettingsProvider, SqliteBackend};
use veggie_cli::{output, paths, CliError};
use veggie_lib::MemoryStore;

fn init_logging(level: LevelFilter) -> Result<(), CliError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(level, Config::default(), File::create(path)?)?;
    Ok(())
}

async fn open_settings() -> SettingsProvider {
    if let Some(path) = paths::settings_db() {
        match SqliteBackend::open(&path).await {
            Ok(backend) => return SettingsProvider::new(backend),
            Err(e) => eprintln!("Warning: settings unavailable ({e}), using defaults"),
        }
    }
    SettingsProvider::new(MemoryBackend::new())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = open_settings().await;
    let prefs = match Preferences::load(&settings).await {
        Ok(prefs) => prefs,
        Err(e) => {
            eprintln!("Warning: {e}");
            Preferences::default()
        }
    };

    if let Err(e) = init_logging(effective_log_level(cli.log_level, prefs.log_level)) {
        eprintln!("Warning: logging disabled: {e}");
    }
    info!("veggie {} starting", env!("CARGO_PKG_VERSION"));

    let store = MemoryStore::seeded();
    let cx = Context {
        store: &store,
        settings: &settings,
        prefs,
    };

    match commands::run(&cx, &cli.command).await {
        Ok(out) => {
            let out = match (cli.command.format(), output::terminal_width()) {
                (OutputFormat::Text, Some(width)) => output::clip(&out, width),
                _ => out,
            };
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
