use std::path::{Path, PathBuf};

const APP_NAME: &str = "sprig";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

fn cache_dir() -> PathBuf {
    #[cfg(unix)]
    {
        // XDG first, ~/.cache fallback, on macOS too
        let base = std::env::var("XDG_CACHE_HOME")
            .ok()
            .filter(|v| !v.is_empty())
            .map_or_else(
                || {
                    dirs::home_dir()
                        .expect("Unable to find home directory")
                        .join(".cache")
                },
                PathBuf::from,
            );
        base.join(APP_NAME)
    }
    #[cfg(windows)]
    {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_NAME)
    }
}

pub fn default_log_file() -> PathBuf {
    cache_dir().join("sprig.log")
}

pub fn setup_logging(log_file: &Path, level: log::LevelFilter) -> anyhow::Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    simple_log::file(log_file.to_string_lossy().into_owned(), level, 10, 10)
        .map_err(|e| anyhow::anyhow!(e))?;
    log::info!("logging to {} (level={level})", log_file.display());
    Ok(())
}
