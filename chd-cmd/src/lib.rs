//! Command implementations for the county health CLI.
//!
//! Provides subcommands for downloading the dashboard's data files and
//! checking a CSV against a topology before serving it.

use chd_core::Attribute;
use clap::Subcommand;

pub mod check;
pub mod fetch;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Download the county topology (and optionally the health CSV)
    Fetch {
        /// Directory the files are written to
        #[arg(short = 'o', long, default_value = "data")]
        out_dir: String,

        /// TopoJSON source for county boundaries
        #[arg(long, default_value = fetch::DEFAULT_TOPOLOGY_URL)]
        topology_url: String,

        /// Source for the health statistics CSV
        #[arg(long)]
        csv_url: Option<String>,
    },

    /// Print per-attribute statistics and a text histogram for a CSV
    Summary {
        /// Path to the health statistics CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Attribute to draw the histogram for
        #[arg(short = 'a', long, default_value = "poverty_perc")]
        attribute: Attribute,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report counties without geometry, shapes without data and N/A counts
    Check {
        /// Path to the health statistics CSV
        #[arg(short = 'c', long)]
        csv: String,

        /// Path to the counties TopoJSON
        #[arg(short = 't', long)]
        topology: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch {
            out_dir,
            topology_url,
            csv_url,
        } => fetch::run_fetch(&out_dir, &topology_url, csv_url.as_deref()).await,
        Command::Summary {
            csv,
            attribute,
            json,
        } => summary::run_summary(&csv, attribute, json),
        Command::Check {
            csv,
            topology,
            json,
        } => check::run_check(&csv, &topology, json),
    }
}
