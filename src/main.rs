use clap::Parser;
use cursor_prompt_export::paths::{self, Platform};
use cursor_prompt_export::process::{self, ExportConfig, Source};
use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Export Cursor AI prompt history from workspace state databases to Org files.
/// Output goes to ./chat_history_exports unless set in config.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a single workspace database (state.vscdb).
    /// Scans Cursor's workspaceStorage directory if omitted.
    #[arg(value_name = "DB")]
    db: Option<PathBuf>,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    target_dir: Option<PathBuf>,
    workspace_storage: Option<PathBuf>,
}

fn load_file_config() -> Result<FileConfig> {
    let path = dirs::config_dir()
        .map(|d| d.join("cursor-prompt-export/config.toml"))
        .filter(|p| p.exists());

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

fn default_workspace_storage() -> Option<PathBuf> {
    dirs::home_dir().map(|home| paths::default_root(Platform::current(), &home))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let file_cfg = load_file_config()?;

    let target_dir = file_cfg
        .target_dir
        .unwrap_or_else(|| PathBuf::from("chat_history_exports"));

    // Explicit DB > config workspace_storage > platform default
    let source = match cli.db {
        Some(db) => Source::File(db),
        None => Source::Scan(
            file_cfg
                .workspace_storage
                .or_else(default_workspace_storage)
                .ok_or_else(|| {
                    eyre!("Could not determine the Cursor workspaceStorage directory.\nPass a state.vscdb path, or set workspace_storage in config.toml.")
                })?,
        ),
    };

    process::execute(&ExportConfig { source, target_dir })?;
    Ok(())
}
