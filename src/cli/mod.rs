//! Command-line interface.
//!
//! With no subcommand the TUI is launched; the subcommands print the menu
//! catalog for scripting.

mod completions;
mod menu;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Pick a course, pick a dish, fill in its details
#[derive(Parser, Debug)]
#[command(name = "kitchen", version, about = "Christoffel's Kitchen: a terminal menu app", long_about = None, disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// UI theme, overriding the config file (NO_COLOR still wins)
    #[arg(long, global = true, value_parser = ["dark", "light", "nocolor"])]
    pub theme: Option<String>,
    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the dishes offered for a course
    Dishes {
        /// Course name, e.g. "Starters" or "Main Course"
        course: String,
        /// Print a JSON array instead of one dish per line
        #[arg(long)]
        json: bool,
    },
    /// List the courses
    Courses,
    /// Generate shell completions
    Completions {
        /// Shell to generate for (detected from $SHELL when omitted)
        shell: Option<Shell>,
    },
}

impl Cli {
    /// Config file to use: `--config` or the default location.
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(crate::config::get_config_path)
    }

    /// Run a subcommand. Returns `Ok(false)` when there is none and the TUI should start.
    pub fn execute(&self) -> Result<bool> {
        let Some(command) = &self.command else {
            return Ok(false);
        };
        let mut out = std::io::stdout().lock();
        match command {
            Commands::Dishes { course, json } => menu::print_dishes(&mut out, course, *json)?,
            Commands::Courses => menu::print_courses(&mut out)?,
            Commands::Completions { shell } => completions::generate(*shell)?,
        }
        Ok(true)
    }
}
