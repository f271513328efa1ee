//! Command-line interface definition for Devtrail
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for project initialization, session tracking, and
//! the pre-merge publish workflow.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Devtrail - AI development session tracker
///
/// Records AI-assisted development sessions and renders them, together
/// with pre-merge check results, into durable HTML reports committed
/// alongside the repository.
#[derive(Parser, Debug, Clone)]
#[command(name = "devtrail")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for Devtrail
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize devtrail in the current project
    Init,

    /// Write the HTML report for a recorded session
    Track {
        /// Path to the recorded session JSON file
        #[arg(short, long)]
        session: PathBuf,

        /// Topic used for the report filename slug
        #[arg(short, long)]
        topic: String,

        /// Do not commit the written report
        #[arg(long)]
        no_commit: bool,
    },

    /// Run the full pre-merge workflow
    Publish {
        /// Skip visual QA checks
        #[arg(long)]
        skip_visual_qa: bool,

        /// Skip the security audit
        #[arg(long)]
        skip_security_audit: bool,

        /// Do not commit the written report
        #[arg(long)]
        no_commit: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
