/// Events that arrive asynchronously from background threads.
/// These get merged into the main event loop alongside keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// One line of the supervised process's merged output, in delivery order
    CommandOutput(String),

    /// The supervised process exited and its output is fully drained.
    /// Always the last event a command produces.
    CommandExited { code: i32 },
}
