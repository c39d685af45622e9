use crate::exporter;
use crate::locator::{self, STATE_DB_NAME};
use crate::prompts;
use crate::store::{self, Extraction, PROMPTS_KEY, SqliteStore, StateStore};
use eyre::{Context, Result, eyre};
use std::fs;
use std::path::{Path, PathBuf};

/// Where to look for state databases.
#[derive(Debug, Clone)]
pub enum Source {
    /// Export exactly this database. It must exist.
    File(PathBuf),
    /// Export every `state.vscdb` found below this directory.
    Scan(PathBuf),
}

/// Configuration required to run the export process.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub source: Source,
    pub target_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    Exported(PathBuf),
    NoPrompts,
    Unreadable,
}

/// Per-run tally of file outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub exported: usize,
    pub no_prompts: usize,
    pub unreadable: usize,
    pub failed: usize,
}

/// The main entry point for the business logic, reading databases from disk.
pub fn execute(config: &ExportConfig) -> Result<RunSummary> {
    execute_with(&SqliteStore, config)
}

pub fn execute_with<S: StateStore>(store: &S, config: &ExportConfig) -> Result<RunSummary> {
    let db_paths = match &config.source {
        Source::File(path) => {
            if !path.exists() {
                return Err(eyre!("File {} does not exist.", path.display()));
            }
            tracing::info!("Running in single-file mode on {}", path.display());
            vec![path.clone()]
        }
        Source::Scan(root) => {
            let found = locator::find_state_files(root)?;
            tracing::info!(
                "Running in multi-workspace mode, found {} files.",
                found.len()
            );
            found
        }
    };

    let mut summary = RunSummary::default();
    if db_paths.is_empty() {
        tracing::warn!("No {} files found.", STATE_DB_NAME);
        return Ok(summary);
    }

    fs::create_dir_all(&config.target_dir).wrap_err_with(|| {
        format!(
            "Failed to create target directory: {}",
            config.target_dir.display()
        )
    })?;

    for db_path in &db_paths {
        match process_file(store, db_path, &config.target_dir) {
            Ok(ProcessResult::Exported(out)) => {
                summary.exported += 1;
                tracing::info!("Exported {} to {}", PROMPTS_KEY, out.display());
            }
            Ok(ProcessResult::NoPrompts) => {
                summary.no_prompts += 1;
                tracing::info!("No {} found in {}", PROMPTS_KEY, db_path.display());
            }
            Ok(ProcessResult::Unreadable) => summary.unreadable += 1,
            Err(e) => {
                summary.failed += 1;
                tracing::error!("Error exporting {}: {:#}", db_path.display(), e);
            }
        }
    }

    tracing::info!(
        "Done. {} exported, {} without prompts, {} unreadable, {} failed.",
        summary.exported,
        summary.no_prompts,
        summary.unreadable,
        summary.failed
    );
    Ok(summary)
}

fn process_file<S: StateStore>(
    store: &S,
    db_path: &Path,
    target_dir: &Path,
) -> Result<ProcessResult> {
    let raw = match store::extract(store, db_path) {
        Extraction::Unreadable => return Ok(ProcessResult::Unreadable),
        extraction => extraction.into_value(),
    };

    let prompts = prompts::parse_prompts(raw.as_deref()).unwrap_or_default();
    if prompts.is_empty() {
        return Ok(ProcessResult::NoPrompts);
    }

    let output_file = target_dir.join(output_file_name(db_path));
    exporter::export_prompts(&prompts, &output_file)?;
    Ok(ProcessResult::Exported(output_file))
}

/// `aiService_prompts_<workspace-id>.org`, where the workspace id is the name of the
/// directory holding the database.
pub fn output_file_name(db_path: &Path) -> String {
    let workspace_id = db_path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("aiService_prompts_{}.org", workspace_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new(
                "/home/u/.config/Cursor/User/workspaceStorage/9f1c2e/state.vscdb"
            )),
            "aiService_prompts_9f1c2e.org"
        );
        assert_eq!(
            output_file_name(Path::new("ws/state.vscdb")),
            "aiService_prompts_ws.org"
        );
    }

    #[test]
    fn test_output_file_name_without_parent() {
        assert_eq!(
            output_file_name(Path::new("state.vscdb")),
            "aiService_prompts_.org"
        );
    }
}
