pub mod commands;
pub mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Browse, search and bookmark news from the terminal", long_about = None)]
pub struct Cli {
    /// Path to the config file (default: ~/.config/newsdesk/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Use the built-in sample feed instead of the news API
    #[arg(long, global = true)]
    pub offline: bool,

    /// Articles per page
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the latest news
    Browse {
        /// Number of pages to load
        #[arg(short, long, default_value_t = 1)]
        pages: u32,
    },
    /// Search news by keyword
    Search {
        /// Search keywords
        query: String,
    },
    /// Interactive session with paging, search and bookmarks (default)
    Shell,
}

impl Cli {
    /// Overlay command-line flags on the loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if self.offline {
            config.api.offline = true;
        }
        if let Some(page_size) = self.page_size {
            config.api.page_size = page_size;
        }
    }

    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Shell)
    }
}
