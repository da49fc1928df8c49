use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const APP_NAME: &str = "sprig";
const SESSION_LOG_FILE_NAME: &str = "session.log";

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

fn state_dir() -> PathBuf {
    #[cfg(unix)]
    {
        if let Ok(xdg_state_home) = std::env::var("XDG_STATE_HOME")
            && !xdg_state_home.is_empty()
        {
            return PathBuf::from(xdg_state_home).join(APP_NAME);
        }
        dirs::home_dir()
            .expect("Unable to find home directory")
            .join(".local")
            .join("state")
            .join(APP_NAME)
    }
    #[cfg(windows)]
    {
        if let Some(local_data) = dirs::data_local_dir() {
            local_data.join(APP_NAME)
        } else {
            std::env::temp_dir().join(APP_NAME)
        }
    }
}

pub fn session_log_file() -> PathBuf {
    state_dir().join(SESSION_LOG_FILE_NAME)
}

/// Mirror one scrollback line to the session log file, timestamped.
/// Every failure is swallowed: logging must never break interactivity.
/// The file is write-only from the app's perspective, never read back.
pub fn append(path: &Path, line: &str) {
    let Some(parent) = path.parent() else {
        return;
    };
    if fs::create_dir_all(parent).is_err() {
        return;
    }
    let Ok(mut file) = fs::OpenOptions::new().create(true).append(true).open(path) else {
        return;
    };
    let _ = writeln!(file, "[{}] {line}", timestamp());
}

fn timestamp() -> String {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_default()
}
