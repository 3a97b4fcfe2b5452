//! Resolve command

use clap::Args;
use console::style;
use std::path::PathBuf;
use tracing::info;

use keywright_core::{BuildInvocation, PropertiesFile, KEYSTORE_PROPERTIES};
use keywright_signing::{resolve, KeystoreProperties, SigningResolution};

use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Resolve the signing configuration for a build invocation
#[derive(Debug, Args)]
pub struct ResolveCommand {
    /// Requested build task names (release detection via substring match)
    pub tasks: Vec<String>,

    /// Treat the invocation as a release build regardless of task names
    #[arg(long)]
    pub release: bool,

    /// Path to the keystore properties file (default: ./keystore.properties)
    #[arg(short, long)]
    pub properties: Option<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let path = self.properties_path()?;

        let invocation = if self.release {
            BuildInvocation::release()
        } else {
            BuildInvocation::from_task_names(&self.tasks)
        };
        info!(
            path = %path.display(),
            is_release = invocation.is_release_build(),
            "resolving signing configuration"
        );

        let file = PropertiesFile::load_if_exists(&path)?;
        let keystore = file.as_ref().map(KeystoreProperties::from_properties);

        let resolution = match resolve(keystore.as_ref(), &invocation) {
            Ok(resolution) => resolution,
            Err(err) => {
                eprintln!("{} {}", style("error:").red().bold(), err);
                std::process::exit(exit_codes::CONFIG_ERROR);
            }
        };

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "properties_file": path,
                    "is_release_build": invocation.is_release_build(),
                    "result": resolution,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text if !cli.quiet => match &resolution {
                SigningResolution::NoSigning => {
                    println!(
                        "{}",
                        style("No signing configuration (default signing used downstream)").dim()
                    );
                }
                SigningResolution::Signing(config) => {
                    println!("{}", style("Release signing configuration").bold());
                    println!();
                    println!("  Store file:   {}", style(config.store_file.display()).cyan());
                    println!("  Key alias:    {}", config.key_alias);
                    println!("  Store pass:   {}", style("********").dim());
                    println!("  Key pass:     {}", style("********").dim());
                }
            },
            OutputFormat::Text => {}
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
