//! Project initialization
//!
//! Creates the report directory layout and the default configuration file.
//! Safe to run repeatedly: existing directories and config are left alone.

use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::error::{DevtrailError, Result};

/// Directories every devtrail project carries
pub const REQUIRED_DIRS: [&str; 6] = [
    "docs/ai-sessions",
    "docs/security",
    "docs/publish",
    "docs/code-review",
    "docs/plans",
    ".devtrail",
];

/// Initialize devtrail under a project root
pub async fn run_init(root: &Path) -> Result<()> {
    println!("Initializing devtrail...\n");

    for dir in REQUIRED_DIRS {
        let full = root.join(dir);
        if full.exists() {
            println!("{} {}/ already exists", "-".dimmed(), dir);
        } else {
            tokio::fs::create_dir_all(&full)
                .await
                .map_err(|e| DevtrailError::Filesystem {
                    path: full.display().to_string(),
                    source: e,
                })?;
            println!("{} Created {}/", "✓".green(), dir);
        }
    }

    let config_path = Config::path(root);
    if !config_path.exists() {
        let yaml = serde_yaml::to_string(&Config::default())
            .map_err(DevtrailError::Yaml)?;
        tokio::fs::write(&config_path, yaml)
            .await
            .map_err(|e| DevtrailError::Filesystem {
                path: config_path.display().to_string(),
                source: e,
            })?;
        println!("{} Created .devtrail/config.yaml", "✓".green());
    }

    println!("\nDevtrail initialized successfully");
    Ok(())
}
