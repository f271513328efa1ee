//! Git porcelain wrapper
//!
//! Thin subprocess wrapper over the `git` binary for the handful of
//! operations the workflows need: repository detection, branch lookup,
//! modified-file listing, and committing a written report. The core
//! pipeline only consumes the strings these return.

use std::path::Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{DevtrailError, Result};

/// Run a git command and return trimmed stdout
async fn run_git(dir: &Path, args: &[&str]) -> Result<String> {
    debug!("Executing git command: git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .await
        .map_err(|e| {
            DevtrailError::Git(format!("failed to execute git {}: {}", args.join(" "), e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DevtrailError::Git(format!(
            "git {} failed: {}",
            args.join(" "),
            stderr.trim()
        ))
        .into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Whether `dir` is inside a git work tree
pub async fn is_git_repo(dir: &Path) -> bool {
    run_git(dir, &["rev-parse", "--is-inside-work-tree"])
        .await
        .map(|out| out == "true")
        .unwrap_or(false)
}

/// Name of the currently checked-out branch
pub async fn current_branch(dir: &Path) -> Result<String> {
    run_git(dir, &["rev-parse", "--abbrev-ref", "HEAD"]).await
}

/// Paths with uncommitted changes, in `git status` order
///
/// Parses porcelain output; renames report the new path.
pub async fn modified_files(dir: &Path) -> Result<Vec<String>> {
    let output = run_git(dir, &["status", "--porcelain"]).await?;

    let files = output
        .lines()
        .filter(|line| line.len() > 3)
        .map(|line| {
            let path = line[3..].trim();
            // Rename entries look like "old -> new"
            match path.split_once(" -> ") {
                Some((_, new)) => new.to_string(),
                None => path.to_string(),
            }
        })
        .collect();

    Ok(files)
}

/// Stage a written report and commit it, referencing `identifier`
///
/// The identifier (a session id or branch name) lands in the commit message
/// so the report can be traced back from history.
pub async fn commit_report(dir: &Path, report_path: &Path, identifier: &str) -> Result<()> {
    let path = report_path.to_string_lossy();
    run_git(dir, &["add", &path]).await?;

    let message = format!("docs: add report for {}", identifier);
    run_git(dir, &["commit", "-m", &message]).await?;

    tracing::info!("Committed report {} ({})", path, identifier);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Scratch repository with one initial commit on `main`
    async fn scratch_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        let path = dir.path();

        run_git(path, &["init"]).await.unwrap();
        run_git(path, &["config", "user.name", "Test User"]).await.unwrap();
        run_git(path, &["config", "user.email", "test@example.com"])
            .await
            .unwrap();
        run_git(path, &["branch", "-M", "main"]).await.unwrap();

        std::fs::write(path.join("README.md"), "# Test").unwrap();
        run_git(path, &["add", "README.md"]).await.unwrap();
        run_git(path, &["commit", "-m", "Initial commit"]).await.unwrap();

        dir
    }

    #[tokio::test]
    async fn test_detects_git_repository() {
        let repo = scratch_repo().await;
        assert!(is_git_repo(repo.path()).await);

        let plain = TempDir::new().unwrap();
        assert!(!is_git_repo(plain.path()).await);
    }

    #[tokio::test]
    async fn test_current_branch() {
        let repo = scratch_repo().await;
        assert_eq!(current_branch(repo.path()).await.unwrap(), "main");
    }

    #[tokio::test]
    async fn test_detects_modified_files() {
        let repo = scratch_repo().await;
        std::fs::write(repo.path().join("test.rs"), "fn main() {}").unwrap();

        let files = modified_files(repo.path()).await.unwrap();
        assert!(files.contains(&"test.rs".to_string()));
    }

    #[tokio::test]
    async fn test_clean_repo_has_no_modified_files() {
        let repo = scratch_repo().await;
        assert!(modified_files(repo.path()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_commit_report_references_identifier() {
        let repo = scratch_repo().await;
        let report_dir = repo.path().join("docs/ai-sessions");
        std::fs::create_dir_all(&report_dir).unwrap();
        let report = report_dir.join("2026-02-17-143022-test.html");
        std::fs::write(&report, "<html>Session</html>").unwrap();

        commit_report(repo.path(), &report, "session-123")
            .await
            .unwrap();

        let message = run_git(repo.path(), &["log", "-1", "--pretty=%B"])
            .await
            .unwrap();
        assert!(message.contains("session-123"));
    }

    #[tokio::test]
    async fn test_current_branch_outside_repo_is_an_error() {
        let plain = TempDir::new().unwrap();
        let err = current_branch(plain.path()).await.unwrap_err();
        assert!(err.to_string().contains("Git error"));
    }
}
