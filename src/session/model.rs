//! Session data model
//!
//! Defines the entities recorded for one AI-assisted development session:
//! the session itself, its tree of delegated sub-agent tasks, and the code
//! changes it produced. Values are constructed once by the caller and are
//! immutable afterwards; the rendering pipeline never mutates them.
//!
//! Serialized field names stay camelCase so recorded JSON artifacts keep
//! the same wire format across tool versions.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Number of random characters appended to a generated session id
const SESSION_ID_SUFFIX_LEN: usize = 9;

/// Kind of a delegated sub-agent task
///
/// A small closed set of recognized kinds plus an open extension point:
/// unrecognized tags pass through unchanged in `Other`, so new agent kinds
/// survive a round trip without widening this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentKind {
    /// Read-only codebase exploration
    Explore,
    /// Planning / design task
    Plan,
    /// General-purpose delegated task
    GeneralPurpose,
    /// Shell command execution
    Bash,
    /// Any unrecognized kind, preserved verbatim
    Other(String),
}

impl From<String> for AgentKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Explore" => AgentKind::Explore,
            "Plan" => AgentKind::Plan,
            "general-purpose" => AgentKind::GeneralPurpose,
            "Bash" => AgentKind::Bash,
            _ => AgentKind::Other(value),
        }
    }
}

impl From<AgentKind> for String {
    fn from(value: AgentKind) -> Self {
        value.to_string()
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentKind::Explore => write!(f, "Explore"),
            AgentKind::Plan => write!(f, "Plan"),
            AgentKind::GeneralPurpose => write!(f, "general-purpose"),
            AgentKind::Bash => write!(f, "Bash"),
            AgentKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// One delegated sub-agent task
///
/// Sub-agents form a tree: each node may delegate further sub-agents of its
/// own, to unbounded depth. A node has no identity beyond its position in
/// the tree and is owned exclusively by its parent. Empty `task`/`results`
/// are permissible, low-information content rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubAgent {
    /// Agent kind tag
    #[serde(rename = "type")]
    pub kind: AgentKind,
    /// Free-text task description handed to the sub-agent
    pub task: String,
    /// Free-text results reported back
    pub results: String,
    /// Nested sub-agents, in delegation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_agents: Vec<SubAgent>,
}

/// One file-level code change produced during a session
///
/// Order-preserving within the session; the same file may appear more than
/// once (e.g. touched by multiple commits).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChange {
    /// Path of the changed file
    pub file: String,
    /// Lines added
    pub additions: u32,
    /// Lines removed
    pub deletions: u32,
    /// Optional unified diff text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// One recorded AI-assisted development session
///
/// The session is transient: constructed in memory, rendered once into an
/// HTML report, and discarded. The report file is the durable record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Unique token, format `session-<epoch-ms>-<random-suffix>`
    pub id: String,
    /// ISO-8601 timestamp; used for display and filename derivation only
    pub timestamp: String,
    /// User who ran the session
    pub user: String,
    /// Git branch the session ran on
    pub branch: String,
    /// The main prompt that started the session
    pub main_prompt: String,
    /// Paths touched during the session, in order
    pub files_modified: Vec<String>,
    /// Top-level sub-agent forest
    pub sub_agents: Vec<SubAgent>,
    /// Code changes, in order
    pub code_changes: Vec<CodeChange>,
    /// Set when the session was truncated by an external timeout or crash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incomplete: Option<bool>,
}

/// Validate a session's structure
///
/// Returns true iff every required scalar field is non-empty after trimming
/// whitespace. Collection fields are guaranteed present by the type (JSON
/// input missing one is rejected earlier, at deserialization). Sub-agents
/// and code changes are not recursed into: a sub-agent with an empty task
/// or results is accepted.
///
/// An invalid session must never be rendered or written.
pub fn validate(session: &Session) -> bool {
    !session.id.trim().is_empty()
        && !session.timestamp.trim().is_empty()
        && !session.user.trim().is_empty()
        && !session.branch.trim().is_empty()
        && !session.main_prompt.trim().is_empty()
}

/// Generate a fresh session id
///
/// Composes a non-decreasing wall-clock millisecond component with a
/// 9-character random alphanumeric suffix. Uniqueness is probabilistic, not
/// guaranteed: two calls in the same millisecond still differ with
/// overwhelming probability (62^9 suffix space).
pub fn generate_session_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);

    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(SESSION_ID_SUFFIX_LEN)
        .map(char::from)
        .collect();

    format!("session-{}-{}", millis, suffix)
}
