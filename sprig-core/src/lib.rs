pub mod action;
pub mod branch;
pub mod config;
pub mod event;
pub mod git;
pub mod input;
pub mod process;
pub mod session_log;
pub mod state;

// Re-export commonly used types at crate root
pub use action::Action;
pub use branch::Branch;
pub use config::Config;
pub use event::AppEvent;
pub use git::{CliGitProvider, GitProvider};
pub use process::Supervisor;
pub use state::{AppState, Mode, PendingOp};
