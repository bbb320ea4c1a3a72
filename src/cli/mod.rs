//! CLI module for Marquee
//!
//! Provides command-line interface parsing and handling for the
//! marquee-server binary. Uses clap for argument parsing and owo-colors for
//! colored terminal output.

pub mod output;

use clap::{Parser, Subcommand};

/// Marquee - Movie Catalog Server
///
/// A movie catalog REST server with JWT authentication and per-user
/// favorites.
#[derive(Parser, Debug)]
#[command(
    name = "marquee-server",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Marquee - Movie Catalog Server",
    long_about = "A movie catalog REST server with JWT authentication and per-user favorites.\n\n\
                  Run without arguments to start the server. Configuration comes from the\n\
                  environment (or a .env file); JWT_SECRET is required.",
    after_help = "EXAMPLES:\n    \
                  marquee-server                # Start the server\n    \
                  marquee-server config         # Show the resolved configuration\n    \
                  marquee-server seed           # Seed the fixture catalog and exit"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the resolved configuration (the signing secret is redacted)
    Config,

    /// Seed the fixture movie catalog into the configured database and exit
    Seed,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
