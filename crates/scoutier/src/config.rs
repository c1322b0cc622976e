//! Runtime configuration.

use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory.
const APP_DIR: &str = "scoutier";

/// Database file name.
const DB_FILE: &str = "scoutier.db";

/// Resolves the database path, preferring an explicit one.
pub fn database_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(
        || {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
                .join(DB_FILE)
        },
        Path::to_path_buf,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = database_path(Some(Path::new("/tmp/custom.db")));
        assert_eq!(path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_default_path() {
        let path = database_path(None);
        assert!(path.ends_with("scoutier/scoutier.db"));
    }
}
