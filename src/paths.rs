//! Centralized path definitions for gazette-digest
//!
//! Single source of truth for every filesystem location the tool reads.
//!
//! ```text
//! <config dir>/gazette-digest/
//! └── config.toml               # Filters, sender, recipient, source settings
//!
//! ./.env                        # Optional secrets (SENDGRID_API_KEY, TO_EMAIL, FROM_EMAIL)
//! ```
//!
//! `<config dir>` is the platform configuration directory, e.g.
//! `~/.config` on Linux.

use std::path::PathBuf;

/// Application directory name under the platform config dir
const APP_DIR: &str = "gazette-digest";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Environment file read from the working directory
pub const ENV_FILE: &str = ".env";

/// Get the gazette-digest config directory.
///
/// Falls back to `./.gazette-digest` when the platform reports no config dir.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR}")), |dir| dir.join(APP_DIR))
}

/// Get the default config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Get the `.env` path in the working directory.
#[must_use]
pub fn env_file() -> PathBuf {
    PathBuf::from(ENV_FILE)
}
