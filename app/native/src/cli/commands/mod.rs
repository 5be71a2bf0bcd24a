//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! domain-specific submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `layout_cmd` - Layout and zone inspection commands
//! - `types` - Shared types used across commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::SnapzoneError;
use crate::{config, schema};

pub mod config_cmd;
pub mod layout_cmd;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use types::ViewportArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapzone CLI - inspect snap layouts and manage configuration.
#[derive(Parser, Debug)]
#[command(name = "snapzone")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Enable debug logging (overridden by `SNAPZONE_LOG`).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// List the layouts offered for a viewport size.
    #[command(after_long_help = r#"Examples:
  snapzone layouts 1920 1080             # Table of layouts
  snapzone layouts 1920 1080 --detailed  # Every zone with its rectangle
  snapzone layouts 2560 1440 --json      # Output as JSON"#)]
    Layouts {
        #[command(flatten)]
        viewport: ViewportArgs,

        /// Output in JSON format instead of table format.
        #[arg(long, short = 'j')]
        json: bool,

        /// List every zone with its rectangle.
        #[arg(long, short = 'd')]
        detailed: bool,
    },

    /// Print the rectangle of one zone for a viewport size.
    #[command(after_long_help = r#"Examples:
  snapzone rect split-2 left 1920 1080
  snapzone rect grid-3x2 r2c3 2560 1440 --json"#)]
    Rect {
        /// Layout identifier (e.g. `split-2`, `grid-3x2`).
        #[arg(value_name = "LAYOUT")]
        layout: String,

        /// Zone identifier within the layout (e.g. `left`, `r1c2`).
        #[arg(value_name = "ZONE")]
        zone: String,

        #[command(flatten)]
        viewport: ViewportArgs,

        /// Output in JSON format instead of table format.
        #[arg(long, short = 'j')]
        json: bool,
    },

    /// Configuration file management commands.
    ///
    /// Initialize, view, and locate the configuration file.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output Snapzone configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(snapzone completions --shell zsh)"
    ///   snapzone completions --shell fish > ~/.config/fish/completions/snapzone.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), SnapzoneError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(SnapzoneError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Layouts { viewport, json, detailed } => {
                layout_cmd::execute_layouts(*viewport, *json, *detailed)
            }
            Commands::Rect { layout, zone, viewport, json } => {
                layout_cmd::execute_rect(layout, zone, *viewport, *json)
            }
            Commands::Config(cmd) => config_cmd::execute(cmd),
            Commands::Schema => {
                println!("{}", schema::print_schema());
                Ok(())
            }
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, "snapzone", &mut io::stdout());
    }
}
