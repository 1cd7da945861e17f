use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "edit-layout",
    version,
    about = "Pack, preview and edit content-type edit layouts"
)]
pub struct Cli {
    /// TOML file with field size overrides
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `edit_layout=trace` (defaults to RUST_LOG)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the packed edit layout as JSON
    Pack {
        /// Configuration document (JSON)
        input: PathBuf,
    },
    /// Print a text preview of the edit and list layouts
    Preview {
        /// Configuration document (JSON)
        input: PathBuf,
    },
    /// Apply edit actions and save the resulting configuration update
    Apply {
        /// Configuration document (JSON)
        input: PathBuf,

        /// Actions, one JSON object per line or a JSON array
        #[arg(short, long)]
        actions: PathBuf,

        /// Where to write the update body (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Report layout entries that name unknown attributes
    Check {
        /// Configuration document (JSON)
        input: PathBuf,
    },
}
