//! Access to the version-control history being analysed

use crate::error::{CheckError, CheckResult};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Read-only view of a repository, as needed by break detection
pub trait Repository {
    /// True iff `reference` resolves in the repository
    fn ref_exists(&self, reference: &str) -> bool;

    /// `<status> <path>` descriptors of the files changed between two refs
    fn changed_files(&self, start: &str, end: &str) -> CheckResult<Vec<String>>;

    /// Unified diff lines of one file between two refs
    fn diff_file(&self, start: &str, end: &str, path: &str) -> CheckResult<Vec<String>>;

    /// Full content of a file at a ref
    fn show_file(&self, reference: &str, path: &str) -> CheckResult<Vec<String>>;
}

/// `Repository` backed by the git command line, run against an explicit
/// working tree rather than the process current directory
#[derive(Debug, Clone)]
pub struct GitCli {
    working_path: PathBuf,
}

impl GitCli {
    pub fn new(working_path: impl Into<PathBuf>) -> Self {
        Self {
            working_path: working_path.into(),
        }
    }

    pub fn working_path(&self) -> &Path {
        &self.working_path
    }

    fn run(&self, args: &[&str]) -> CheckResult<Vec<String>> {
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.working_path)
            .args(args)
            .output()
            .map_err(|e| CheckError::Git(format!("Failed to execute git: {}", e)))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout)
                .lines()
                .map(str::to_string)
                .collect())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            Err(CheckError::Git(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )))
        }
    }
}

impl Repository for GitCli {
    fn ref_exists(&self, reference: &str) -> bool {
        let Ok(repo) = git2::Repository::discover(&self.working_path) else {
            return false;
        };
        let found = repo.revparse_single(reference).is_ok();
        found
    }

    fn changed_files(&self, start: &str, end: &str) -> CheckResult<Vec<String>> {
        let lines = self.run(&["diff", "--no-color", "--name-status", start, end])?;
        Ok(lines.into_iter().filter(|l| !l.trim().is_empty()).collect())
    }

    fn diff_file(&self, start: &str, end: &str, path: &str) -> CheckResult<Vec<String>> {
        self.run(&["diff", "--no-color", "--no-ext-diff", start, end, "--", path])
    }

    fn show_file(&self, reference: &str, path: &str) -> CheckResult<Vec<String>> {
        self.run(&["show", &format!("{}:{}", reference, path)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ref_exists_outside_repository() {
        let dir = TempDir::new().unwrap();
        let git = GitCli::new(dir.path());
        assert!(!git.ref_exists("HEAD"));
    }

    #[test]
    fn test_working_path_is_kept() {
        let git = GitCli::new("/tmp/project");
        assert_eq!(git.working_path(), Path::new("/tmp/project"));
    }
}
