//! # cursor-prompt-export
//!
//! A CLI tool that exports the AI prompt history recorded by the [Cursor](https://cursor.com)
//! editor to plain-text Org outline files.
//!
//! ## What it does
//!
//! Cursor keeps one SQLite database (`state.vscdb`) per workspace under its
//! `workspaceStorage` directory. Each database has a key-value `ItemTable`; the
//! `aiService.prompts` key holds a JSON array of the prompts typed into the AI panel.
//! This tool finds those databases, reads that single row, and writes every prompt as a
//! top-level `* heading` line in `aiService_prompts_<workspace-id>.org`.
//!
//! Databases are opened **read-only**. Your data is never modified.
//!
//! ## Usage
//!
//! ```sh
//! # Scan the default workspaceStorage directory
//! cursor-prompt-export
//!
//! # Export a single database
//! cursor-prompt-export ~/.config/Cursor/User/workspaceStorage/<id>/state.vscdb
//! ```
//!
//! Output goes to `./chat_history_exports`. Both the output directory and the scanned
//! directory can be overridden in `~/.config/cursor-prompt-export/config.toml`.

pub mod exporter;
pub mod locator;
pub mod paths;
pub mod process;
pub mod prompts;
pub mod store;
