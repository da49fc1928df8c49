/// Every user interaction produces an Action. The keymap never touches
/// git or the supervisor directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveSelection(i32),
    SwitchBranch,
    DeleteBranch,
    Quit,

    // Input line, live while a command runs
    InputInsert(char),
    InputBackspace,
    InputCursorLeft,
    InputCursorRight,
    InputCursorStart,
    InputCursorEnd,
    SubmitInput,

    // Force-delete confirmation
    ConfirmForceDelete,
    CancelForceDelete,
}
