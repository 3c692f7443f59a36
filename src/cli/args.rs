//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};

/// dirpick - pick the dated or versioned subdirectory closest to a request
#[derive(Parser, Debug)]
#[command(name = "dirpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; only results and errors are printed
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve a mask to a subdirectory path
    #[command(
        name = "resolve",
        long_about = "Resolve a mask to a subdirectory path.\n\n\
            Children of the base directory named like YYYY-MM-DD or a.b.c.d are \
            matched against the mask. An exact match wins; otherwise the nearest \
            earlier child of the same kind is chosen; otherwise the latest child \
            (latest date, or latest version if there are no dates).\n\n\
            The query is either BASE|MASK or a bare MASK when the base comes from \
            --base, $DIRPICK_BASE, or the config file.",
        after_help = "\
EXAMPLES:
    # Combined form
    dirpick resolve '/srv/builds|41.1.104.2'

    # Base from a flag
    dirpick resolve --base /srv/builds 2016-01-01

    # Latest entry, with the reason on stderr
    dirpick resolve --base /srv/builds latest --explain

EXIT STATUS:
    0  resolved
    1  other failure (missing base, bad query, config)
    2  usage error
    3  mask is not a date, a version, or 'latest'
    4  base directory cannot be read
    5  base directory has no dated or versioned children"
    )]
    Resolve {
        /// BASE|MASK, or MASK alone
        query: String,

        /// Base directory (supports ~, $VAR, ${VAR}, %VAR%)
        #[arg(long, short)]
        base: Option<String>,

        /// Seed a missing base with sample directories first
        #[arg(long)]
        bootstrap: bool,

        /// Print the result as JSON
        #[arg(long, conflicts_with = "explain")]
        json: bool,

        /// Also print how the match was made (to stderr)
        #[arg(long)]
        explain: bool,
    },

    /// List the dated and versioned children of a base directory
    List {
        /// Base directory (supports ~, $VAR, ${VAR}, %VAR%)
        #[arg(long, short)]
        base: Option<String>,

        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a base directory with sample subdirectories
    #[command(
        name = "init",
        long_about = "Create a base directory populated with sample dated and \
            versioned subdirectories.\n\n\
            An existing directory is left untouched."
    )]
    Init {
        /// Directory to create (defaults to the configured base)
        dir: Option<String>,
    },

    /// Get, set, or list configuration values
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
EXAMPLES:
    # Bash (add to ~/.bashrc)
    dirpick completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    dirpick completion zsh >> ~/.zshrc

    # Fish
    dirpick completion fish > ~/.config/fish/completions/dirpick.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Get a configuration value
    Get {
        /// Configuration key (base, separator, bootstrap)
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (base, separator, bootstrap)
        key: String,
        /// Value to set
        value: String,
    },
    /// List all configuration values
    List,
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
