//! Devtrail - AI development session tracker library
//!
//! This library provides the core functionality for recording AI-assisted
//! development sessions and rendering them, together with pre-merge check
//! results, into durable HTML reports committed alongside the repository.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: Session, sub-agent, and code-change model plus validation
//! - `report`: filename derivation, HTML rendering, and report persistence
//! - `publish`: publish report model and the test-runner wrapper
//! - `git`: git porcelain subprocess wrapper
//! - `commands`: init / track / publish flows wired from the CLI
//! - `config`: configuration management and validation
//! - `error`: error types and result aliases
//! - `cli`: command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use devtrail::report::ReportWriter;
//! use devtrail::session::{generate_session_id, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Session {
//!         id: generate_session_id(),
//!         timestamp: "2026-02-17T14:30:22Z".to_string(),
//!         user: "dev".to_string(),
//!         branch: "main".to_string(),
//!         main_prompt: "Add user authentication".to_string(),
//!         files_modified: vec![],
//!         sub_agents: vec![],
//!         code_changes: vec![],
//!         incomplete: None,
//!     };
//!
//!     let writer = ReportWriter::new(".");
//!     let path = writer.write_session(&session, "auth feature").await?;
//!     println!("report at {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod publish;
pub mod report;
pub mod session;

// Re-export commonly used types
pub use config::Config;
pub use error::{DevtrailError, Result};
pub use publish::PublishReport;
pub use report::{ReportRenderer, ReportWriter};
pub use session::{generate_session_id, validate, AgentKind, CodeChange, Session, SubAgent};
