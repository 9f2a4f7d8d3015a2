use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cookie-bookie")]
#[command(about = "A small recipe box for the command line", long_about = None, version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding recipes and config (overrides COOKIE_BOOKIE_DATA)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new recipe
    #[command(alias = "n")]
    Add {
        /// Recipe title (at least 3 characters)
        #[arg(short, long)]
        title: String,

        /// Image URL (http or https)
        #[arg(short, long, default_value = "")]
        image: String,

        /// Ingredients, comma or newline separated
        #[arg(short = 'g', long)]
        ingredients: String,

        /// Steps, comma or newline separated
        #[arg(short, long)]
        steps: String,
    },

    /// List recipes, newest first
    #[command(alias = "ls")]
    List {
        /// Only recipes whose title or ingredients contain this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show a recipe in full
    #[command(alias = "v")]
    Show {
        /// Recipe id (or the short id shown by `list`)
        id: String,
    },

    /// Edit a recipe; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// Recipe id (or the short id shown by `list`)
        id: String,

        #[arg(short, long)]
        title: Option<String>,

        /// New image URL; pass an empty string to remove it
        #[arg(short, long)]
        image: Option<String>,

        #[arg(short = 'g', long)]
        ingredients: Option<String>,

        #[arg(short, long)]
        steps: Option<String>,
    },

    /// Delete a recipe
    #[command(alias = "rm")]
    Delete {
        /// Recipe id (or the short id shown by `list`)
        id: String,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete all recipes
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Add the sample recipes
    Seed,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, pretty-json)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
