mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use sprig_core::{
    branch,
    config::{self, Config},
    git::{CliGitProvider, GitProvider},
    state::AppState,
};
use sprig_tui::Theme;
use std::{path::PathBuf, process::ExitCode, sync::Arc};

#[derive(Parser)]
#[command(version, about = "Interactive git branch switcher")]
struct Cli {
    /// Override path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Exit after a successful branch switch
    #[arg(long)]
    quit_on_switch: bool,

    /// Log level for the file log (error, warn, info, debug, trace)
    #[arg(long, default_value = logging::DEFAULT_LOG_LEVEL)]
    log_level: log::LevelFilter,

    /// Write the file log somewhere other than the cache directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error:#}");
            return ExitCode::from(2);
        }
    };

    // Logging failures shouldn't keep the tool from running
    let log_file = cli
        .log_file
        .unwrap_or_else(logging::default_log_file);
    if let Err(error) = logging::setup_logging(&log_file, cli.log_level) {
        eprintln!("Failed to set up logging: {error:#}");
    }

    let git: Arc<dyn GitProvider> = Arc::new(CliGitProvider);

    let repo_path = match std::env::current_dir() {
        Ok(path) => path,
        Err(error) => {
            eprintln!("Failed to resolve current directory: {error}");
            return ExitCode::from(2);
        }
    };

    // Refuse before touching the terminal so the message stays readable
    if !git.is_work_tree(&repo_path) {
        eprintln!("Not a git repository: {}", repo_path.display());
        return ExitCode::from(1);
    }

    match run_tui(&config, &git, repo_path, cli.quit_on_switch) {
        Ok(()) => ExitCode::from(0),
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::from(1)
        }
    }
}

fn run_tui(
    config: &Config,
    git: &Arc<dyn GitProvider>,
    repo_path: PathBuf,
    quit_on_switch: bool,
) -> Result<()> {
    let branches =
        branch::list_branches(git.as_ref(), &repo_path).context("failed to list branches")?;
    log::info!(
        "starting in {} with {} branches",
        repo_path.display(),
        branches.len()
    );

    // An empty list still opens the UI; the list pane explains itself
    let mut state = AppState::new(
        repo_path,
        branches,
        quit_on_switch || config.quit_on_switch,
    );
    let theme = Theme::from_config(&config.theme);

    let mut terminal = ratatui::init();
    let result = sprig_tui::run(&mut terminal, &mut state, git, &theme);
    ratatui::restore();

    result
}
