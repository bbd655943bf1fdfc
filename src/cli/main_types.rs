use crate::storage::config::ConfigOverrides;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "reqres-client")]
#[command(about = "Page through a REST user listing and print every user")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Endpoint to page through, e.g. https://reqres.in/api/users
    #[arg(long, global = true, env = "REQRES_BASE_URL")]
    pub base_url: Option<String>,

    /// Print every field of each user
    #[arg(long, global = true, overrides_with = "no_debug")]
    pub debug: bool,

    /// Turn debug output off even if the config file enables it
    #[arg(long, global = true, overrides_with = "debug")]
    pub no_debug: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Stop after this many pages even if more exist
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            base_url: self.base_url.clone(),
            debug: self.debug_override(),
            timeout_seconds: self.timeout,
            max_pages: self.max_pages,
        }
    }

    fn debug_override(&self) -> Option<bool> {
        match (self.debug, self.no_debug) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Fetch every page until the listing runs out (default)
    Fetch,
    /// Fetch a single page
    Page {
        /// Page number, starting at 1
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,
    /// Write a starter config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
