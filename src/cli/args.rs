use clap::{Args, Parser, Subcommand};

/// trakr - A terminal client for Trakt.tv
#[derive(Parser)]
#[command(name = "trakr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// First-time setup
    Init,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set a config value (format: key=value)
        #[arg(long)]
        set: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },

    /// Search for TV shows
    #[command(alias = "s")]
    Search {
        /// Search query
        term: String,

        /// Prompt for show IDs to add to the watchlist
        #[arg(long)]
        add: bool,

        #[command(flatten)]
        view: ViewOptions,
    },

    /// List the watchlist and manage watched status
    #[command(alias = "w")]
    Watchlist {
        /// Prompt for show IDs to remove from the watchlist
        #[arg(long)]
        delete: bool,

        /// Prompt for episodes to mark watched (Ie: 2x3x10 2x3-3x3)
        #[arg(long, conflicts_with = "unwatch")]
        watch: bool,

        /// Prompt for episodes to mark unwatched
        #[arg(long)]
        unwatch: bool,

        #[command(flatten)]
        view: ViewOptions,
    },
}

/// Listing options shared by search and watchlist
#[derive(Args, Clone, Copy, Default)]
pub struct ViewOptions {
    /// Detailed view with per-season episode grids
    #[arg(short, long)]
    pub details: bool,

    /// Skip looking up watched episodes (HUGE timesaver)
    #[arg(short, long)]
    pub skip_watch_info: bool,

    /// Limit the output
    #[arg(short, long)]
    pub limit: Option<u32>,

    /// Skip fully-watched shows in the listing
    #[arg(long)]
    pub todo: bool,
}
