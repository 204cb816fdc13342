//! inertia-setup CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use inertia_setup::{Frontend, ScaffoldRequest, SetupCommand, ShellRunner};

#[derive(Parser)]
#[command(name = "inertia-setup")]
#[command(version)]
#[command(about = "Wire Inertia.js into the Rails app in the current directory", long_about = None)]
struct Cli {
    /// Frontend framework to generate components for
    #[arg(value_enum, default_value_t = Frontend::React)]
    framework: Frontend,

    /// Generate TypeScript instead of JavaScript
    #[arg(long)]
    typescript: bool,

    /// Install the Tailwind CSS integration
    #[arg(long)]
    tailwind: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let request = ScaffoldRequest {
        framework: cli.framework,
        typescript: cli.typescript,
        tailwind: cli.tailwind,
    };

    let project_dir = std::env::current_dir().context("Failed to get current directory")?;

    let cmd = SetupCommand::new(request, project_dir)?;
    cmd.execute(&ShellRunner)?;

    Ok(())
}
