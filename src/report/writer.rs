//! Report persistence
//!
//! Orchestrates filename derivation and rendering, then writes the rendered
//! document under the project's `docs/` tree. The write is a single complete
//! write of the fully rendered string; a prior file at the same path is
//! replaced wholesale, never appended to or streamed into.

use std::path::{Path, PathBuf};

use crate::error::{DevtrailError, Result};
use crate::publish::PublishReport;
use crate::report::filename::report_filename;
use crate::report::renderer::ReportRenderer;
use crate::session::Session;

/// Directory for session reports, relative to the project root
pub const SESSION_REPORT_DIR: &str = "docs/ai-sessions";

/// Directory for publish reports, relative to the project root
pub const PUBLISH_REPORT_DIR: &str = "docs/publish";

/// Writes rendered reports into a project's `docs/` tree
pub struct ReportWriter {
    root: PathBuf,
    renderer: ReportRenderer,
}

impl ReportWriter {
    /// Create a writer rooted at a project directory, with embedded templates
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            renderer: ReportRenderer::new(),
        }
    }

    /// Create a writer with a custom renderer
    pub fn with_renderer(root: impl Into<PathBuf>, renderer: ReportRenderer) -> Self {
        Self {
            root: root.into(),
            renderer,
        }
    }

    /// Render a session and write it under `docs/ai-sessions/`
    ///
    /// The filename stamp comes from the session's timestamp; the slug from
    /// the caller-supplied topic. Returns the absolute path of the written
    /// report.
    ///
    /// # Errors
    ///
    /// Propagates validation, template, and filesystem errors; an invalid
    /// session is rejected before anything touches the filesystem.
    pub async fn write_session(&self, session: &Session, topic: &str) -> Result<PathBuf> {
        let html = self.renderer.render_session(session)?;
        let filename = report_filename(&session.timestamp, topic)?;
        let path = self.persist(SESSION_REPORT_DIR, &filename, &html).await?;
        tracing::info!("Wrote session report: {}", path.display());
        Ok(path)
    }

    /// Render a publish report and write it under `docs/publish/`
    ///
    /// The slug is derived from the branch name.
    pub async fn write_publish(&self, report: &PublishReport) -> Result<PathBuf> {
        let html = self.renderer.render_publish(report)?;
        let filename = report_filename(&report.timestamp, &report.branch)?;
        let path = self.persist(PUBLISH_REPORT_DIR, &filename, &html).await?;
        tracing::info!("Wrote publish report: {}", path.display());
        Ok(path)
    }

    /// Ensure the target directory exists and write the document
    async fn persist(&self, subdir: &str, filename: &str, html: &str) -> Result<PathBuf> {
        let dir = self.root.join(subdir);
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| DevtrailError::Filesystem {
                path: dir.display().to_string(),
                source: e,
            })?;

        let path = dir.join(filename);
        tokio::fs::write(&path, html)
            .await
            .map_err(|e| DevtrailError::Filesystem {
                path: path.display().to_string(),
                source: e,
            })?;

        absolute(path)
    }
}

/// Resolve a path against the current working directory when relative
fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(std::env::current_dir()
            .map_err(DevtrailError::Io)?
            .join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{AgentKind, CodeChange, SubAgent};
    use regex::Regex;
    use tempfile::TempDir;

    fn sample_session() -> Session {
        Session {
            id: "session-123".to_string(),
            timestamp: "2026-02-17T14:30:22Z".to_string(),
            user: "test-user".to_string(),
            branch: "feature/auth".to_string(),
            main_prompt: "Add user authentication".to_string(),
            files_modified: vec!["src/auth.ts".to_string()],
            sub_agents: vec![SubAgent {
                kind: AgentKind::Explore,
                task: "Find auth patterns".to_string(),
                results: "Found JWT implementation".to_string(),
                sub_agents: vec![],
            }],
            code_changes: vec![CodeChange {
                file: "src/auth.ts".to_string(),
                additions: 50,
                deletions: 5,
                diff: None,
            }],
            incomplete: None,
        }
    }

    fn sample_publish_report() -> PublishReport {
        PublishReport {
            branch: "feature/test".to_string(),
            timestamp: "2026-02-17T14:30:22Z".to_string(),
            tests_passed: false,
            tests_output: "2 tests failed".to_string(),
            code_review_passed: true,
            code_review_report: None,
            security_audit_passed: true,
            security_report: None,
            visual_qa_passed: true,
            visual_qa_report: None,
            pr_url: None,
        }
    }

    #[tokio::test]
    async fn test_write_session_round_trip() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        let path = writer
            .write_session(&sample_session(), "auth feature")
            .await
            .unwrap();

        assert!(path.is_absolute());
        assert!(path.exists());
        let shape = Regex::new(
            r"docs[/\\]ai-sessions[/\\]\d{4}-\d{2}-\d{2}-\d{6}-auth-feature\.html$",
        )
        .unwrap();
        assert!(shape.is_match(&path.to_string_lossy()), "path: {:?}", path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("session-123"));
        assert!(content.contains("Add user authentication"));
        assert!(content.contains("src/auth.ts"));
        assert!(content.contains("Explore"));
    }

    #[tokio::test]
    async fn test_write_session_sanitizes_topic() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        let path = writer
            .write_session(&sample_session(), "User/Auth Feature!")
            .await
            .unwrap();
        assert!(path.to_string_lossy().ends_with("user-auth-feature.html"));
    }

    #[tokio::test]
    async fn test_write_session_falls_back_to_untitled() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        for topic in ["", "!!!@@@###", "   "] {
            let path = writer
                .write_session(&sample_session(), topic)
                .await
                .unwrap();
            assert!(
                path.to_string_lossy().ends_with("untitled.html"),
                "topic: {:?}",
                topic
            );
            assert!(path.exists());
        }
    }

    #[tokio::test]
    async fn test_write_session_creates_directories() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        assert!(!root.path().join(SESSION_REPORT_DIR).exists());
        writer
            .write_session(&sample_session(), "topic")
            .await
            .unwrap();
        assert!(root.path().join(SESSION_REPORT_DIR).is_dir());
    }

    #[tokio::test]
    async fn test_write_session_same_second_same_topic_overwrites() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        let first = writer
            .write_session(&sample_session(), "topic")
            .await
            .unwrap();

        let mut second_session = sample_session();
        second_session.id = "session-456".to_string();
        let second = writer
            .write_session(&second_session, "topic")
            .await
            .unwrap();

        assert_eq!(first, second);
        let content = std::fs::read_to_string(&second).unwrap();
        assert!(content.contains("session-456"));
        assert!(!content.contains("session-123"));
    }

    #[tokio::test]
    async fn test_write_session_rejects_invalid_session() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        let mut session = sample_session();
        session.user = String::new();

        let err = writer.write_session(&session, "topic").await.unwrap_err();
        assert!(err.to_string().contains("Validation error"));
        // Nothing was written
        assert!(!root.path().join(SESSION_REPORT_DIR).exists());
    }

    #[tokio::test]
    async fn test_write_publish_report() {
        let root = TempDir::new().unwrap();
        let writer = ReportWriter::new(root.path());

        let path = writer
            .write_publish(&sample_publish_report())
            .await
            .unwrap();

        let shape =
            Regex::new(r"docs[/\\]publish[/\\]\d{4}-\d{2}-\d{2}-\d{6}-feature-test\.html$")
                .unwrap();
        assert!(shape.is_match(&path.to_string_lossy()), "path: {:?}", path);

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("status-failed"));
        assert!(content.contains("2 tests failed"));
    }

    #[tokio::test]
    async fn test_write_fails_when_directory_is_a_file() {
        let root = TempDir::new().unwrap();
        std::fs::create_dir_all(root.path().join("docs")).unwrap();
        std::fs::write(root.path().join("docs/ai-sessions"), "not a dir").unwrap();

        let writer = ReportWriter::new(root.path());
        let err = writer
            .write_session(&sample_session(), "topic")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Filesystem error"));
    }
}
