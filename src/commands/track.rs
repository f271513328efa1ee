//! Session tracking command
//!
//! Loads a recorded session from its JSON artifact, writes the HTML report
//! under `docs/ai-sessions/`, and commits the report referencing the
//! session id.

use colored::Colorize;
use std::path::Path;

use crate::error::{DevtrailError, Result};
use crate::git;
use crate::report::ReportWriter;
use crate::session::{validate, Session};

/// Write and commit the report for a recorded session
pub async fn run_track(
    root: &Path,
    session_path: &Path,
    topic: &str,
    no_commit: bool,
) -> Result<()> {
    let raw = tokio::fs::read_to_string(session_path)
        .await
        .map_err(|e| DevtrailError::Filesystem {
            path: session_path.display().to_string(),
            source: e,
        })?;
    let session: Session = serde_json::from_str(&raw).map_err(DevtrailError::Serialization)?;

    if !validate(&session) {
        return Err(DevtrailError::Validation(format!(
            "session file {} is missing required fields",
            session_path.display()
        ))
        .into());
    }

    let writer = ReportWriter::new(root);
    let report_path = writer.write_session(&session, topic).await?;
    println!(
        "{} Session report written to {}",
        "✓".green(),
        report_path.display()
    );

    if no_commit {
        return Ok(());
    }

    if git::is_git_repo(root).await {
        git::commit_report(root, &report_path, &session.id).await?;
        println!("{} Committed report for {}", "✓".green(), session.id);
    } else {
        tracing::warn!("Not a git repository; skipping commit");
    }

    Ok(())
}
