use crate::git::GitProvider;
use anyhow::Result;
use std::path::Path;

/// One local branch. Immutable once constructed; the whole list is
/// replaced on every refresh rather than patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub name: String,
    pub is_current: bool,
}

/// Merge the two external queries into an ordered branch list: the branch
/// whose name equals the current-branch query result is marked current.
/// A failed current-branch query marks nothing current; a failed
/// enumeration fails the whole listing.
pub fn list_branches(git: &dyn GitProvider, repo_path: &Path) -> Result<Vec<Branch>> {
    let current = git.current_branch(repo_path);
    let names = git.branch_names(repo_path)?;
    Ok(names
        .into_iter()
        .map(|name| Branch {
            is_current: Some(name.as_str()) == current.as_deref(),
            name,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::mock::MockGitProvider;
    use std::path::PathBuf;

    #[test]
    fn test_current_branch_marked() {
        let git = MockGitProvider {
            current: Some("dev".to_string()),
            branches: vec!["main".into(), "dev".into(), "feat".into()],
            ..Default::default()
        };
        let branches = list_branches(&git, &PathBuf::from("/tmp/repo")).unwrap();
        let current: Vec<&str> = branches
            .iter()
            .filter(|b| b.is_current)
            .map(|b| b.name.as_str())
            .collect();
        assert_eq!(current, vec!["dev"]);
    }

    #[test]
    fn test_no_current_when_query_fails() {
        let git = MockGitProvider {
            current: None,
            branches: vec!["main".into(), "dev".into()],
            ..Default::default()
        };
        let branches = list_branches(&git, &PathBuf::from("/tmp/repo")).unwrap();
        assert!(branches.iter().all(|b| !b.is_current));
        assert_eq!(branches.len(), 2);
    }

    #[test]
    fn test_enumeration_failure_propagates() {
        let git = MockGitProvider {
            branch_names_result: std::sync::Mutex::new(Some(Err(anyhow::anyhow!(
                "fatal: not a git repository"
            )))),
            ..Default::default()
        };
        assert!(list_branches(&git, &PathBuf::from("/tmp/repo")).is_err());
    }

    #[test]
    fn test_order_preserved() {
        let git = MockGitProvider {
            branches: vec!["zebra".into(), "alpha".into()],
            ..Default::default()
        };
        let branches = list_branches(&git, &PathBuf::from("/tmp/repo")).unwrap();
        let names: Vec<&str> = branches.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "alpha"]);
    }
}
