use super::provider::GitProvider;
use anyhow::Result;
use std::{path::Path, sync::Mutex};

#[derive(Default)]
pub struct MockGitProvider {
    pub current: Option<String>,
    pub branches: Vec<String>,
    /// One-shot override for the next `branch_names` call.
    pub branch_names_result: Mutex<Option<Result<Vec<String>>>>,
    pub work_tree: bool,
}

impl GitProvider for MockGitProvider {
    fn current_branch(&self, _repo_path: &Path) -> Option<String> {
        self.current.clone()
    }

    fn branch_names(&self, _repo_path: &Path) -> Result<Vec<String>> {
        self.branch_names_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(self.branches.clone()))
    }

    fn is_work_tree(&self, _path: &Path) -> bool {
        self.work_tree
    }
}
