//! Command implementations for the rainfall heatmap CLI.
//!
//! Provides subcommands for inspecting a daily rainfall record file and
//! exporting the heatmap draw plan for one year.

use clap::Subcommand;

pub mod fetch;
pub mod inspect;
pub mod load;
pub mod project;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List the years that have rainfall data
    Years {
        /// Record file (JSON or CSV, optionally gzip-compressed)
        #[arg(short = 'i', long)]
        input: String,
    },

    /// Print rainfall totals per year
    Summary {
        /// Record file (JSON or CSV, optionally gzip-compressed)
        #[arg(short = 'i', long)]
        input: String,

        /// Only summarize this year
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },

    /// Write the heatmap draw plan for one year as JSON
    Project {
        /// Record file (JSON or CSV, optionally gzip-compressed)
        #[arg(short = 'i', long)]
        input: String,

        /// Year to lay out
        #[arg(short = 'y', long)]
        year: i32,

        /// Heatmap config JSON (cellUnit, domainMax, bucketCount, ...)
        #[arg(short = 'c', long)]
        config: Option<String>,

        /// Output path for the plan (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// First day to include (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Last day to include (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Download a record file
    Fetch {
        /// URL serving JSON or CSV records
        #[arg(long)]
        url: String,

        /// Where to save the downloaded file
        #[arg(short = 'o', long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Years { input } => inspect::run_years(&input).await,
        Command::Summary { input, year } => inspect::run_summary(&input, year).await,
        Command::Project {
            input,
            year,
            config,
            output,
            start,
            end,
            pretty,
        } => {
            let options = project::ProjectOptions {
                year,
                config_path: config,
                output,
                start,
                end,
                pretty,
            };
            project::run_project(&input, options).await
        }
        Command::Fetch { url, output } => fetch::run_fetch(&url, &output).await,
    }
}
