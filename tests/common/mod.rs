use std::path::{Path, PathBuf};
use tempfile::TempDir;

use devtrail::session::{AgentKind, CodeChange, Session, SubAgent};

#[allow(dead_code)]
pub fn temp_project() -> TempDir {
    TempDir::new().expect("failed to create tempdir")
}

#[allow(dead_code)]
pub fn sample_session() -> Session {
    Session {
        id: "session-123".to_string(),
        timestamp: "2026-02-17T14:30:22Z".to_string(),
        user: "test-user".to_string(),
        branch: "feature/auth".to_string(),
        main_prompt: "Add user authentication".to_string(),
        files_modified: vec!["src/auth.ts".to_string(), "tests/auth.test.ts".to_string()],
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

#[allow(dead_code)]
pub fn write_session_json(dir: &Path, session: &Session) -> PathBuf {
    let path = dir.join("session.json");
    let json = serde_json::to_string_pretty(session).expect("failed to serialize session");
    std::fs::write(&path, json).expect("failed to write session file");
    path
}
