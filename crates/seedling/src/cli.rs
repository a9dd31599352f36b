//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;

/// seedling - create a new project from the bundled template
#[derive(Parser, Debug)]
#[command(name = "seedling")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Project name; prompted for when omitted
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Template directory to copy instead of the bundled one
    #[arg(long, value_name = "DIR", env = "SEEDLING_TEMPLATE_DIR")]
    pub template: Option<Utf8PathBuf>,

    /// Exit with an error if any file could not be copied or the manifest was not updated
    #[arg(long)]
    pub strict: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}
