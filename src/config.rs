use std::path::PathBuf;

use simplelog::LevelFilter;

/// Startup settings. There are no flags or environment variables, so these
/// are fixed defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// credential store, relative to the working directory
    pub users_path: PathBuf,
    /// kept at warn so log lines do not interleave with the menus
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            users_path: PathBuf::from("users.xml"),
            log_level: LevelFilter::Warn,
        }
    }
}
