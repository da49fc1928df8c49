use anyhow::Result;
use std::path::Path;

/// Seam for the read-only version-control queries. Commands that mutate
/// branches (switch/delete) go through the process supervisor instead so
/// their output can stream into the scrollback.
pub trait GitProvider: Send + Sync {
    /// Name of the checked-out branch, or `None` if it cannot be determined
    /// (detached HEAD, query failure). Not an error: the branch list is
    /// still usable, just with nothing marked current.
    fn current_branch(&self, repo_path: &Path) -> Option<String>;

    /// All local branch names in the order git reports them. The error
    /// carries the raw command output.
    fn branch_names(&self, repo_path: &Path) -> Result<Vec<String>>;

    /// Whether `path` is inside a git work tree.
    fn is_work_tree(&self, path: &Path) -> bool;
}
