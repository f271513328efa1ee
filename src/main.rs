//! Devtrail - AI development session tracker
//!
//! Main entry point for the devtrail CLI.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use devtrail::cli::{Cli, Commands};
use devtrail::commands::{self, PublishOptions};
use devtrail::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    let root = std::env::current_dir()?;

    match cli.command {
        Commands::Init => {
            tracing::info!("Initializing devtrail in {}", root.display());
            commands::run_init(&root).await?;
            Ok(())
        }
        Commands::Track {
            session,
            topic,
            no_commit,
        } => {
            tracing::info!("Tracking session from {}", session.display());
            commands::run_track(&root, &session, &topic, no_commit).await?;
            Ok(())
        }
        Commands::Publish {
            skip_visual_qa,
            skip_security_audit,
            no_commit,
        } => {
            tracing::info!("Starting publish workflow");

            let config = Config::load(&root)?;
            config.validate()?;

            let options = PublishOptions {
                skip_visual_qa,
                skip_security_audit,
                no_commit,
            };
            let passed = commands::run_publish(&root, &config, options).await?;
            if !passed {
                anyhow::bail!("publish checks failed; see the report for details");
            }
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "devtrail=debug"
    } else {
        "devtrail=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
