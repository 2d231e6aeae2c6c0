// src/config.rs
// Default on-disk database location

use std::path::PathBuf;

/// Default database file path, used when neither `--db` nor `HELPDESK_DB`
/// is given: `~/.helpdesk/helpdesk.db`.
pub fn default_db_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".helpdesk").join("helpdesk.db")
}
