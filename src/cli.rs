use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "agent-cards",
    about = "Generate the agents documentation page from per-agent metadata",
    version = env!("GIT_DESCRIBE"),
    after_help = "With no options, scans the current directory and renders docs/_index.mdx into docs/index.mdx.\n\nSet RUST_LOG to control log output on stderr."
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, help = "Path to agent-cards.yaml config file")]
    pub config: Option<PathBuf>,

    /// Directory scanned for agent subdirectories
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Template containing the placeholder token
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Generated page path
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Fail if the output is missing or out of date instead of writing it
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, help = "Suppress non-error output")]
    pub quiet: bool,
}

impl Cli {
    /// Apply command-line path overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref root) = self.root {
            config.paths.root = root.clone();
        }
        if let Some(ref template) = self.template {
            config.paths.template = template.clone();
        }
        if let Some(ref output) = self.output {
            config.paths.output = output.clone();
        }
    }
}
