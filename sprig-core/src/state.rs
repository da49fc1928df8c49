use crate::{
    branch::{self, Branch},
    git::GitProvider,
    input::InputLine,
    session_log,
};
use std::path::PathBuf;

pub const NAV_HINTS: &str = "↑/↓ to move • Enter to switch • Delete to delete • Ctrl-C/Esc to quit";

/// What the currently running command will do when it exits. An explicit
/// tag instead of success/failure callbacks: one completion handler
/// switches on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingOp {
    Switch { branch: String },
    Delete { branch: String },
    ForceDelete { branch: String },
}

impl PendingOp {
    /// The argument vector the operation runs
    pub fn argv(&self) -> Vec<String> {
        let (args, branch): (&[&str], &String) = match self {
            PendingOp::Switch { branch } => (&["git", "switch"], branch),
            PendingOp::Delete { branch } => (&["git", "branch", "-d"], branch),
            PendingOp::ForceDelete { branch } => (&["git", "branch", "-D"], branch),
        };
        let mut argv: Vec<String> = args.iter().map(ToString::to_string).collect();
        argv.push(branch.clone());
        argv
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Browsing the branch list
    Navigating,
    /// A supervised process is running; keys edit the input line
    Busy { op: PendingOp },
    /// A plain delete failed; waiting for y/n on escalating to -D
    ConfirmingForceDelete { branch: String },
}

/// Whether the app keeps running after a completion was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    QuitApp,
}

pub struct AppState {
    pub repo_path: PathBuf,
    pub branches: Vec<Branch>,
    /// Index into `branches`; meaningless while the list is empty
    pub selected: usize,
    pub mode: Mode,
    pub status: String,
    /// Append-only scrollback, never truncated or reordered
    pub log: Vec<String>,
    pub input: InputLine,
    pub quit_on_switch: bool,
    /// Mirror target for the scrollback; `None` disables mirroring (tests)
    pub session_log_file: Option<PathBuf>,
}

impl AppState {
    pub fn new(repo_path: PathBuf, branches: Vec<Branch>, quit_on_switch: bool) -> Self {
        Self {
            repo_path,
            branches,
            selected: 0,
            mode: Mode::Navigating,
            status: NAV_HINTS.to_string(),
            log: Vec::new(),
            input: InputLine::default(),
            quit_on_switch,
            session_log_file: Some(session_log::session_log_file()),
        }
    }

    pub fn selected_branch(&self) -> Option<&Branch> {
        self.branches.get(self.selected)
    }

    /// Move the selection with wrap-around; a no-op on an empty list
    pub fn move_selection(&mut self, delta: i32) {
        let len = self.branches.len();
        if len == 0 {
            return;
        }
        let current = i64::try_from(self.selected.min(len - 1)).unwrap_or(0);
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let next = (current + i64::from(delta)).rem_euclid(len);
        self.selected = usize::try_from(next).unwrap_or(0);
    }

    /// Append one line to the scrollback and mirror it to the session log
    pub fn append_log(&mut self, line: impl Into<String>) {
        let line = line.into();
        if let Some(path) = &self.session_log_file {
            session_log::append(path, &line);
        }
        self.log.push(line);
    }

    /// Re-query the branch list. On success the previously selected
    /// branch keeps the selection if it still exists, else index 0. On
    /// failure the list and selection are left untouched and the error
    /// goes to the scrollback.
    pub fn refresh_branches(&mut self, git: &dyn GitProvider) {
        let previous = self.selected_branch().map(|b| b.name.clone());
        match branch::list_branches(git, &self.repo_path) {
            Ok(branches) => {
                self.branches = branches;
                self.selected = previous
                    .and_then(|name| self.branches.iter().position(|b| b.name == name))
                    .unwrap_or(0);
            }
            Err(err) => self.append_log(format!("[error] {err:#}")),
        }
    }

    /// Enter busy mode for an already-started command
    pub fn enter_busy(&mut self, op: PendingOp, command_display: &str) {
        self.status = format!("Running: {command_display}");
        self.input.reset();
        self.mode = Mode::Busy { op };
    }

    /// Completion handler for the pending operation. Runs only after the
    /// supervisor has drained all output, so the scrollback is complete.
    #[must_use]
    pub fn on_command_exit(&mut self, code: i32, git: &dyn GitProvider) -> Outcome {
        let Mode::Busy { op } = std::mem::replace(&mut self.mode, Mode::Navigating) else {
            // Exit event with no pending operation; nothing to do.
            return Outcome::Continue;
        };
        self.input.reset();

        if code == 0 {
            match op {
                PendingOp::Switch { .. } => {
                    // Nothing reads the list again when we quit here,
                    // so skip the re-query entirely.
                    if self.quit_on_switch {
                        return Outcome::QuitApp;
                    }
                    self.refresh_branches(git);
                    self.status = format!("Switched. {NAV_HINTS}");
                }
                PendingOp::Delete { .. } | PendingOp::ForceDelete { .. } => {
                    self.refresh_branches(git);
                    self.status = format!("Done. {NAV_HINTS}");
                }
            }
        } else {
            match op {
                // Deletes of unmerged branches fail routinely; offer the
                // escalation the user must confirm. The scrollback above
                // the prompt explains why the delete failed.
                PendingOp::Delete { branch } => {
                    self.status = format!("Delete failed. FORCE delete {branch}? y/N");
                    self.mode = Mode::ConfirmingForceDelete { branch };
                }
                PendingOp::Switch { .. } | PendingOp::ForceDelete { .. } => {
                    self.status = format!("git exited with code {code}. See output.");
                }
            }
        }
        Outcome::Continue
    }

    /// Leave the force-delete prompt without escalating
    pub fn cancel_force_delete(&mut self) {
        if matches!(self.mode, Mode::ConfirmingForceDelete { .. }) {
            self.mode = Mode::Navigating;
            self.status = format!("Force delete canceled. {NAV_HINTS}");
        }
    }
}
