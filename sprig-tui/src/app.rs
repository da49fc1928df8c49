use crate::{components, keymap, theme::Theme};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Paragraph,
};
use sprig_core::{
    action::Action,
    event::AppEvent,
    git::GitProvider,
    process::Supervisor,
    state::{AppState, Mode, Outcome, PendingOp},
};
use std::{
    sync::{Arc, mpsc},
    time::Duration,
};

/// Run the interactive session until the user quits. One loop multiplexes
/// terminal key events, the supervised process's output stream, and the
/// 80ms redraw tick; all state mutation happens here, on this thread.
pub fn run(
    terminal: &mut DefaultTerminal,
    state: &mut AppState,
    git: &Arc<dyn GitProvider>,
    theme: &Theme,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<AppEvent>();
    let mut supervisor = Supervisor::new();

    loop {
        terminal.draw(|f| draw(f, state, theme))?;

        // Check the background channel first (non-blocking)
        if let Ok(app_event) = rx.try_recv() {
            if process_app_event(app_event, state, &mut supervisor, git.as_ref())
                == Outcome::QuitApp
            {
                return Ok(());
            }
            continue;
        }

        // Poll terminal events with a timeout so streamed output shows
        // up without a keypress
        if event::poll(Duration::from_millis(80))?
            && let Event::Key(key) = event::read()?
        {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = keymap::resolve_action(key, state)
                && process_action(action, state, &mut supervisor, &tx) == Outcome::QuitApp
            {
                return Ok(());
            }
        }
    }
}

fn draw(f: &mut Frame, state: &AppState, theme: &Theme) {
    let chunks = Layout::vertical([
        Constraint::Percentage(45),
        Constraint::Min(4),
        Constraint::Length(1),
    ])
    .split(f.area());

    components::branch_list::draw(f, chunks[0], state, theme);
    components::log_view::draw(f, chunks[1], state, theme);

    let status = Paragraph::new(state.status.as_str()).style(Style::default().fg(theme.muted));
    f.render_widget(status, chunks[2]);

    if let Mode::ConfirmingForceDelete { branch } = &state.mode {
        components::dialog::draw_force_delete(f, f.area(), branch, theme);
    }
}

/// Handle events from the supervisor's background threads
fn process_app_event(
    event: AppEvent,
    state: &mut AppState,
    supervisor: &mut Supervisor,
    git: &dyn GitProvider,
) -> Outcome {
    match event {
        AppEvent::CommandOutput(line) => {
            state.append_log(line);
            Outcome::Continue
        }
        AppEvent::CommandExited { code } => {
            // Handle and mode leave busy together; the exit event is
            // only sent after all output has been drained.
            supervisor.clear();
            state.on_command_exit(code, git)
        }
    }
}

#[must_use]
fn process_action(
    action: Action,
    state: &mut AppState,
    supervisor: &mut Supervisor,
    tx: &mpsc::Sender<AppEvent>,
) -> Outcome {
    match action {
        Action::Quit => return Outcome::QuitApp,

        Action::MoveSelection(delta) => state.move_selection(delta),

        Action::SwitchBranch => {
            if let Some(branch) = selected_branch_name(state) {
                start_pending_op(state, supervisor, tx, PendingOp::Switch { branch });
            }
        }

        Action::DeleteBranch => {
            if let Some(branch) = selected_branch_name(state) {
                start_pending_op(state, supervisor, tx, PendingOp::Delete { branch });
            }
        }

        Action::ConfirmForceDelete => {
            if let Mode::ConfirmingForceDelete { branch } = state.mode.clone() {
                state.append_log(format!("Force deleting {branch}"));
                state.mode = Mode::Navigating;
                start_pending_op(state, supervisor, tx, PendingOp::ForceDelete { branch });
            }
        }

        Action::CancelForceDelete => state.cancel_force_delete(),

        Action::SubmitInput => {
            if matches!(state.mode, Mode::Busy { .. }) {
                let text = state.input.take();
                supervisor.send(&text);
                state.append_log(format!("> {text}"));
            }
        }

        Action::InputInsert(c) => state.input.insert(c),
        Action::InputBackspace => state.input.backspace(),
        Action::InputCursorLeft => state.input.cursor_left(),
        Action::InputCursorRight => state.input.cursor_right(),
        Action::InputCursorStart => state.input.cursor_start(),
        Action::InputCursorEnd => state.input.cursor_end(),
    }
    Outcome::Continue
}

/// Selection-dependent operations no-op on an empty list and while a
/// process is active
fn selected_branch_name(state: &AppState) -> Option<String> {
    if !matches!(state.mode, Mode::Navigating) {
        return None;
    }
    state.selected_branch().map(|b| b.name.clone())
}

fn start_pending_op(
    state: &mut AppState,
    supervisor: &mut Supervisor,
    tx: &mpsc::Sender<AppEvent>,
    op: PendingOp,
) {
    if supervisor.is_active() {
        // The mode gate should make this unreachable; keep the invariant
        // anyway rather than start a second process.
        return;
    }
    let argv = op.argv();
    let display = argv.join(" ");
    state.append_log(format!("$ {display}"));
    match supervisor.start(&argv, &state.repo_path, tx.clone()) {
        Ok(()) => state.enter_busy(op, &display),
        Err(err) => {
            log::warn!("failed to spawn '{display}': {err:#}");
            state.append_log(format!("[error] {err:#}"));
            state.status = format!("Failed to run: {display}");
        }
    }
}
