use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::business::BusinessInput;

#[derive(Parser, Debug)]
#[command(
    name = "sitecloner",
    about = "Analyze a scraped website and generate a site config for a new business",
    version,
    long_about = None
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Number of worker threads for extraction
    #[arg(short, long, global = true)]
    pub workers: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract structure, colors, fonts and content from scraped HTML/Markdown
    Analyze {
        /// Path to scraped content file
        #[arg(short, long, conflicts_with = "stdin", required_unless_present = "stdin")]
        file: Option<PathBuf>,

        /// Read content from stdin
        #[arg(long)]
        stdin: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Merge a previous analysis with new business details
    Generate {
        /// Path to analysis JSON file
        #[arg(short, long)]
        analysis: PathBuf,

        #[command(flatten)]
        business: BusinessArgs,

        /// Path to custom default tables (JSON)
        #[arg(long)]
        defaults: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the built-in default tables to site_defaults.json
    Init,
}

#[derive(clap::Args, Debug)]
pub struct BusinessArgs {
    /// New business name
    #[arg(short, long)]
    pub name: String,

    /// Phone number
    #[arg(short, long)]
    pub phone: String,

    /// Business address
    #[arg(long)]
    pub address: String,

    /// Email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// Doctor name
    #[arg(short, long)]
    pub doctor: Option<String>,

    /// Business tagline
    #[arg(short, long)]
    pub tagline: Option<String>,

    /// Reference URL (for record keeping)
    #[arg(short, long)]
    pub url: Option<String>,
}

impl From<BusinessArgs> for BusinessInput {
    fn from(args: BusinessArgs) -> Self {
        BusinessInput {
            name: args.name,
            phone: args.phone,
            address: args.address,
            email: args.email,
            doctor: args.doctor,
            tagline: args.tagline,
            reference_url: args.url,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print single-line JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}
