//! Inertia setup command

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::PathBuf;

use crate::runner::CommandRunner;
use crate::templates::{INERTIA_INITIALIZER, INITIALIZER_PATH};
use crate::ScaffoldRequest;

/// Dependency-declaration file expected at the project root
const MANIFEST_FILE: &str = "Gemfile";

/// Marker scanned for in the manifest; if present, `bundle add` is skipped
const DEPENDENCY_MARKER: &str = "inertia_rails";

/// Wire Inertia.js into the Rails application in `project_dir`
///
/// Runs a strictly linear sequence: declare the gem dependency, invoke the
/// install generator, create the baseline initializer when absent. Any failing
/// step aborts the run; there is no rollback of earlier steps.
#[derive(Debug)]
pub struct SetupCommand {
    request: ScaffoldRequest,
    project_dir: PathBuf,
}

impl SetupCommand {
    /// Create a new command instance
    ///
    /// # Errors
    ///
    /// Returns an error if `project_dir` does not contain a `Gemfile`. This is
    /// checked up front so nothing external is invoked against a directory
    /// that is not a Rails application.
    pub fn new(request: ScaffoldRequest, project_dir: PathBuf) -> Result<Self> {
        if !project_dir.join(MANIFEST_FILE).exists() {
            anyhow::bail!(
                "No {MANIFEST_FILE} found in {}. Run inertia-setup from the root of a Rails application.",
                project_dir.display()
            );
        }

        Ok(Self {
            request,
            project_dir,
        })
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemfile cannot be read, an external command
    /// fails, or the initializer cannot be written.
    pub fn execute(&self, runner: &dyn CommandRunner) -> Result<()> {
        println!(
            "{} {} {}",
            style("Installing").green().bold(),
            style("Inertia.js for").bold(),
            style(self.request.framework).cyan().bold()
        );
        println!();

        self.ensure_dependency(runner)?;
        self.run_generator(runner)?;
        self.write_initializer()?;

        self.print_success();

        Ok(())
    }

    /// Declare the gem dependency unless the Gemfile already references it
    ///
    /// The Gemfile is only scanned as text; all rewriting is delegated to
    /// bundler.
    fn ensure_dependency(&self, runner: &dyn CommandRunner) -> Result<()> {
        let gemfile = self.project_dir.join(MANIFEST_FILE);
        let contents = fs::read_to_string(&gemfile)
            .with_context(|| format!("Failed to read {}", gemfile.display()))?;

        if contents.contains(DEPENDENCY_MARKER) {
            println!(
                "  {} {}",
                style("✓").green(),
                style("inertia_rails already in Gemfile, skipping bundle add").dim()
            );
            return Ok(());
        }

        println!("  {} the inertia_rails gem...", style("Adding").cyan());
        runner.run("bundle", &bundle_add_args())
    }

    /// Run the framework's install generator with the requested flags
    fn run_generator(&self, runner: &dyn CommandRunner) -> Result<()> {
        println!("  {} the install generator...", style("Running").cyan());
        runner.run("bin/rails", &generator_args(&self.request))
    }

    /// Create the baseline initializer, never overwriting an existing one
    fn write_initializer(&self) -> Result<()> {
        let path = self.project_dir.join(INITIALIZER_PATH);

        if path.exists() {
            println!(
                "  {} {}",
                style("✓").green(),
                style(format!("{INITIALIZER_PATH} already exists, leaving it untouched")).dim()
            );
            return Ok(());
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message(format!("Writing {INITIALIZER_PATH}..."));

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&path, INERTIA_INITIALIZER)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        spinner.finish_and_clear();

        println!("  {} {}", style("✓").green(), style(INITIALIZER_PATH).dim());

        Ok(())
    }

    /// Print the chosen configuration and next steps
    fn print_success(&self) {
        let onoff = |enabled: bool| if enabled { "enabled" } else { "disabled" };

        println!();
        println!("{}", style("✓ Inertia.js is wired up!").green().bold());
        println!();
        println!("  framework:  {}", style(self.request.framework).cyan());
        println!(
            "  typescript: {}",
            style(onoff(self.request.typescript)).cyan()
        );
        println!("  tailwind:   {}", style(onoff(self.request.tailwind)).cyan());
        println!();
        println!("{}", style("Next steps:").bold());
        println!();
        println!("  {} Start the development servers:", style("1.").cyan());
        println!("     {} {}", style("$").dim(), style("bin/dev").cyan());
        println!();
        println!(
            "  {} Render your first Inertia page from a controller:",
            style("2.").cyan()
        );
        println!(
            "     {}",
            style("render inertia: \"Home\", props: { name: \"world\" }").cyan()
        );
        println!();
        println!(
            "  {} Tune defaults in {}",
            style("3.").cyan(),
            style(INITIALIZER_PATH).cyan()
        );
        println!();
    }
}

/// Arguments for the bundler dependency-add invocation
fn bundle_add_args() -> Vec<String> {
    vec!["add".to_string(), DEPENDENCY_MARKER.to_string()]
}

/// Arguments for the install generator, in fixed order: framework,
/// then TypeScript, then Tailwind
fn generator_args(request: &ScaffoldRequest) -> Vec<String> {
    let mut args = vec![
        "generate".to_string(),
        "inertia:install".to_string(),
        format!("--framework={}", request.framework),
    ];

    if request.typescript {
        args.push("--typescript".to_string());
    }
    if request.tailwind {
        args.push("--tailwind".to_string());
    }

    args
}
