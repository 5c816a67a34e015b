pub mod cli;
pub mod codec;
pub mod db;
pub mod history;
pub mod logo;
pub mod models;
pub mod render;
pub mod settings;
pub mod utils;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use cli::{Cli, Command};
use codec::{decode_payload_with, encode_payload};
use db::Database;
use history::commands::{
    delete_from_history, export_png, get_settings, list_history, load_saved_qr_code,
    prepare_logo, save_to_history, update_settings,
};
use models::{CodableColor, QrContent};
use settings::SettingsStore;

pub struct AppState {
    pub db: Database,
    pub settings: SettingsStore,
}

impl AppState {
    /// Opens (creating if needed) the history database and settings file in
    /// `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("failed to create data directory {}", data_dir.display()))?;

        let db = Database::new(data_dir.join("qrcody.sqlite3"))?;
        let settings = SettingsStore::new(data_dir.join("settings.json"))?;

        Ok(Self { db, settings })
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join("qrcody"))
        .context("no data directory on this platform; pass --data-dir")
}

pub fn run() {
    utils::logging::init();

    let cli = Cli::parse();
    if let Err(err) = execute(cli) {
        log::error!("{err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    // Encoding needs neither the database nor settings.
    if let Command::Encode { content } = &cli.command {
        println!("{}", encode_payload(&QrContent::from(content.clone())));
        return Ok(());
    }

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let state = AppState::open(&data_dir)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(dispatch(&state, cli.command))
}

async fn dispatch(state: &AppState, command: Command) -> Result<()> {
    match command {
        Command::Encode { content } => {
            println!("{}", encode_payload(&QrContent::from(content)));
        }
        Command::Decode { kind, payload } => {
            let options = state.settings.wifi_decode_options();
            let content = decode_payload_with(kind, &payload, &options);
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
        Command::Save {
            name,
            background,
            logo,
            content,
        } => {
            let mut style = state.settings.default_style();
            if let Some(hex) = background {
                style.background_color = CodableColor::from_hex(&hex)?;
            }
            if let Some(path) = logo {
                let raw = std::fs::read(&path)
                    .with_context(|| format!("failed to read logo {}", path.display()))?;
                style.logo_data = Some(prepare_logo(&raw).map_err(|e| anyhow!(e))?);
            }

            let record = save_to_history(state, content.into(), name, Some(style))
                .await
                .map_err(|e| anyhow!(e))?;
            println!("{}", record.id);
        }
        Command::History => {
            let codes = list_history(state).await.map_err(|e| anyhow!(e))?;
            for code in codes {
                println!(
                    "{}  {}  {:<7}  {}",
                    code.id,
                    code.created_at.format("%Y-%m-%d %H:%M"),
                    code.content_type.title(),
                    code.name
                );
            }
        }
        Command::Show { id } => {
            let loaded = load_saved_qr_code(state, id).await.map_err(|e| anyhow!(e))?;
            println!("{}", serde_json::to_string_pretty(&loaded)?);
        }
        Command::Delete { id } => {
            delete_from_history(state, id)
                .await
                .map_err(|e| anyhow!(e))?;
        }
        Command::Export { id, path, size } => {
            let written = export_png(state, id, &path, size)
                .await
                .map_err(|e| anyhow!(e))?;
            println!("{}", written.display());
        }
        Command::Config {
            history_limit,
            wifi_default_security,
            background,
        } => {
            let settings = if history_limit.is_none()
                && wifi_default_security.is_none()
                && background.is_none()
            {
                get_settings(state)
            } else {
                let background = background
                    .as_deref()
                    .map(CodableColor::from_hex)
                    .transpose()?;
                update_settings(
                    state,
                    history_limit,
                    wifi_default_security.map(Into::into),
                    background,
                )
                .map_err(|e| anyhow!(e))?
            };
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
