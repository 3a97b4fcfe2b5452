//! Check command

use clap::Args;
use console::style;
use std::path::PathBuf;
use tracing::info;

use keywright_core::{PropertiesFile, KEYSTORE_PROPERTIES};
use keywright_signing::{KeystoreProperties, SigningError, REQUIRED_KEYS};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Check a keystore properties file for completeness
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Path to the keystore properties file (default: ./keystore.properties)
    #[arg(short, long)]
    pub properties: Option<PathBuf>,
}

impl CheckCommand {
    /// Execute the check command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let path = self.properties_path()?;
        info!(path = %path.display(), "checking keystore properties");

        let file = PropertiesFile::load_if_exists(&path)?;
        let keystore = file.as_ref().map(KeystoreProperties::from_properties);

        let missing = keystore
            .as_ref()
            .map(KeystoreProperties::missing_or_blank)
            .unwrap_or_default();
        let present = keystore.is_some();
        let complete = present && missing.is_empty();

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "properties_file": path,
                    "present": present,
                    "complete": complete,
                    "missing": missing,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                println!("{} {}", style("Checking").bold(), path.display());
                println!();

                if !present {
                    // Absent file is fine for debug builds, fatal for release
                    println!(
                        "  {}",
                        style("Not present - release builds will fail until it exists").yellow()
                    );
                } else {
                    for key in REQUIRED_KEYS {
                        let status = if missing.contains(&key) {
                            style("MISSING").red()
                        } else {
                            style("OK").green()
                        };
                        println!("  {:<15} [{}]", key, status);
                    }
                }
                println!();
            }
        }

        if present && !complete {
            eprintln!(
                "{} {}",
                style("error:").red().bold(),
                SigningError::IncompleteProperties
            );
            std::process::exit(exit_codes::CONFIG_ERROR);
        }

        Ok(())
    }

    fn properties_path(&self) -> anyhow::Result<PathBuf> {
        match &self.properties {
            Some(path) => Ok(path.clone()),
            None => Ok(std::env::current_dir()?.join(KEYSTORE_PROPERTIES)),
        }
    }
}
