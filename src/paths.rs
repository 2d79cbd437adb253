//! Path resolution for the shopping list database.
//!
//! Provides XDG-compliant defaults used when no `--db` path is given.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "shopping-list";
const DB_FILE: &str = "shopping_list.db";

/// Get XDG-compliant data directory.
///
/// # Returns
/// `$XDG_DATA_HOME/shopping-list/`, falling back to
/// `~/.local/share/shopping-list/`. Without `HOME` the current directory is
/// used as the base.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            env::var("HOME")
                .map(|home| PathBuf::from(home).join(".local/share"))
                .unwrap_or_else(|_| PathBuf::from("."))
        });

    data_home.join(APP_DIR)
}

/// Get database file path (data_dir/shopping_list.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join(DB_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_data_dir_ends_with_app_dir() {
        // Only check the suffix (env vars are unreliable in parallel tests)
        let path = get_data_dir();
        assert!(path.ends_with("shopping-list"));
    }

    #[test]
    fn test_get_db_path_ends_with_db_file() {
        let path = get_db_path();
        assert!(path.ends_with("shopping-list/shopping_list.db"));
    }
}
