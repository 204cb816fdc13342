//! inertia-setup library
//!
//! Scaffolding logic for wiring Inertia.js into an existing Rails
//! application: dependency declaration, install generator invocation, and
//! baseline initializer creation.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod runner;
pub mod templates;

pub use commands::SetupCommand;
pub use runner::{CommandRunner, ShellRunner};
pub use templates::INERTIA_INITIALIZER;

/// Frontend framework for the Inertia install generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Frontend {
    /// React - the Inertia default
    #[default]
    React,
    /// Vue 3
    Vue,
    /// Svelte 5
    Svelte,
}

impl Frontend {
    /// Token passed to the install generator's `--framework` flag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Vue => "vue",
            Self::Svelte => "svelte",
        }
    }
}

impl std::fmt::Display for Frontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for one scaffolding run, built once from the command line
///
/// Immutable after construction; each step reads from it, nothing writes back.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaffoldRequest {
    /// Frontend framework to generate components for
    pub framework: Frontend,
    /// Generate TypeScript instead of JavaScript
    pub typescript: bool,
    /// Install the Tailwind CSS integration
    pub tailwind: bool,
}
