use super::{parse_branch_names, provider::GitProvider};
use anyhow::Result;
use std::{path::Path, process::Command};

pub struct CliGitProvider;

/// Run a git command and capture its combined stdout + stderr, the way
/// the interactive commands merge their streams.
fn git_output(args: &[&str], cwd: &Path) -> std::io::Result<(bool, String)> {
    let output = Command::new("git").args(args).current_dir(cwd).output()?;
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok((output.status.success(), combined))
}

impl GitProvider for CliGitProvider {
    fn current_branch(&self, repo_path: &Path) -> Option<String> {
        let (ok, out) = git_output(&["rev-parse", "--abbrev-ref", "HEAD"], repo_path).ok()?;
        if !ok {
            return None;
        }
        let name = out.trim();
        (!name.is_empty()).then(|| name.to_string())
    }

    fn branch_names(&self, repo_path: &Path) -> Result<Vec<String>> {
        let (ok, out) = git_output(
            &["for-each-ref", "refs/heads", "--format=%(refname:short)"],
            repo_path,
        )?;
        if !ok {
            anyhow::bail!("git for-each-ref failed: {}", out.trim());
        }
        Ok(parse_branch_names(&out))
    }

    fn is_work_tree(&self, path: &Path) -> bool {
        matches!(
            git_output(&["rev-parse", "--is-inside-work-tree"], path),
            Ok((true, out)) if out.trim() == "true"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn init_test_repo(dir: &Path) {
        Command::new("git")
            .args(["init"])
            .current_dir(dir)
            .output()
            .unwrap();
        Command::new("git")
            .args(["config", "user.email", "test@test.com"])
            .current_dir(dir)
            .output()
            .unwrap();
        Command::new("git")
            .args(["config", "user.name", "Test"])
            .current_dir(dir)
            .output()
            .unwrap();
        let dummy = dir.join("README.md");
        fs::write(&dummy, "# test").unwrap();
        Command::new("git")
            .args(["add", "."])
            .current_dir(dir)
            .output()
            .unwrap();
        Command::new("git")
            .args(["commit", "-m", "init"])
            .current_dir(dir)
            .output()
            .unwrap();
    }

    #[test]
    fn test_branch_names_lists_local_branches() {
        let tmp = tempfile::tempdir().unwrap();
        init_test_repo(tmp.path());

        Command::new("git")
            .args(["branch", "feat/test"])
            .current_dir(tmp.path())
            .output()
            .unwrap();

        let provider = CliGitProvider;
        let branches = provider.branch_names(tmp.path()).unwrap();
        assert!(branches.contains(&"master".to_string()));
        assert!(branches.contains(&"feat/test".to_string()));
    }

    #[test]
    fn test_current_branch_matches_checkout() {
        let tmp = tempfile::tempdir().unwrap();
        init_test_repo(tmp.path());

        let provider = CliGitProvider;
        assert_eq!(provider.current_branch(tmp.path()).as_deref(), Some("master"));

        Command::new("git")
            .args(["switch", "-c", "dev"])
            .current_dir(tmp.path())
            .output()
            .unwrap();
        assert_eq!(provider.current_branch(tmp.path()).as_deref(), Some("dev"));
    }

    #[test]
    fn test_is_work_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = CliGitProvider;
        assert!(!provider.is_work_tree(tmp.path()));

        init_test_repo(tmp.path());
        assert!(provider.is_work_tree(tmp.path()));
    }

    #[test]
    fn test_branch_names_fails_outside_repo() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = CliGitProvider;
        assert!(provider.branch_names(tmp.path()).is_err());
    }

    #[test]
    fn test_current_branch_none_outside_repo() {
        let tmp = tempfile::tempdir().unwrap();
        let provider = CliGitProvider;
        assert!(provider.current_branch(tmp.path()).is_none());
    }
}
