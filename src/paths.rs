use std::path::{Path, PathBuf};

/// Operating-system families with distinct Cursor data layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
}

impl Platform {
    /// Map a `std::env::consts::OS` style tag.
    pub fn from_os(os: &str) -> Option<Self> {
        match os {
            "linux" | "freebsd" | "openbsd" | "netbsd" | "dragonfly" => Some(Self::Linux),
            "macos" => Some(Self::MacOs),
            "windows" => Some(Self::Windows),
            _ => None,
        }
    }

    /// Platform of the running binary; unknown Unix flavours use the XDG layout.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS).unwrap_or(Self::Linux)
    }
}

/// Cursor's `workspaceStorage` directory for `platform`, relative to the user's home.
pub fn default_root(platform: Platform, home: &Path) -> PathBuf {
    let app_data = match platform {
        Platform::Linux => home.join(".config"),
        Platform::MacOs => home.join("Library").join("Application Support"),
        Platform::Windows => home.join("AppData").join("Roaming"),
    };
    app_data.join("Cursor").join("User").join("workspaceStorage")
}
