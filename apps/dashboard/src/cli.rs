//! Command-line interface definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dashboard for a URL-shortening service: links, analytics and reports.
#[derive(Parser, Debug)]
#[command(name = "shortener-dashboard")]
#[command(version)]
#[command(about = "Create short links and browse their analytics", long_about = None)]
pub struct Cli {
    /// Print results (and errors) as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding config.toml (default: $SHORTENER_CONFIG_DIR or the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// Echo log records to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the terminal dashboard (default)
    Tui {
        /// Start at this path (/dashboard, /overall, /analytics)
        #[arg(long)]
        path: Option<String>,
    },

    /// Sign in with Google
    ///
    /// Without an argument, prints the sign-in URL and reads the redirect URL
    /// (or the bare token) from stdin.
    Login {
        /// Redirect URL containing `?token=...`, or the token itself
        callback: Option<String>,
    },

    /// Forget the stored token
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Create a short URL
    Shorten {
        /// Destination URL
        long_url: String,

        /// Custom alias instead of a generated one
        #[arg(long)]
        alias: Option<String>,

        /// Topic used to group links in reports
        #[arg(long)]
        topic: Option<String>,
    },

    /// List your short URLs
    List,

    /// Delete a short URL by record id (see `list`)
    Delete {
        id: String,
    },

    /// Show where an alias redirects
    Resolve {
        alias: String,
    },

    /// Show analytics
    Analytics {
        #[command(subcommand)]
        scope: AnalyticsScope,
    },

    /// Chart clicks by topic or alias (overall distribution by default)
    Report {
        #[arg(long, conflicts_with = "alias")]
        topic: Option<String>,

        #[arg(long)]
        alias: Option<String>,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsScope {
    /// Totals across all of your links
    Overall,

    /// Analytics of one topic
    Topic { topic: String },

    /// Analytics of one alias
    Alias { alias: String },
}
