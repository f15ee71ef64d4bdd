//! Command implementations for the BRD CLI.
//!
//! Every subcommand loads the rainfall and summary documents together
//! (local paths or http(s) URLs) and fails if either one cannot be read.

use clap::{Args, Subcommand, ValueEnum};

pub mod check;
pub mod series;
pub mod source;
pub mod summary;

#[cfg(test)]
pub(crate) mod testing;

/// Where to read the two documents from.
#[derive(Args, Debug, Clone)]
pub struct Sources {
    /// Path or URL of rainfall_data.json
    #[arg(short = 'r', long, default_value = "rainfall_data.json")]
    pub rainfall: String,

    /// Path or URL of summary_stats.json
    #[arg(short = 's', long, default_value = "summary_stats.json")]
    pub summary: String,
}

/// One of the four dashboard charts.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartArg {
    Heatmap,
    Top10,
    YearlyTrend,
    DistrictTrend,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the chart-ready series for one chart as JSON
    Series {
        #[command(flatten)]
        sources: Sources,

        /// Which chart to build
        #[arg(short = 'c', long, value_enum)]
        chart: ChartArg,

        /// Heatmap column set: all, total or a year (2021-2025)
        #[arg(short = 'y', long, default_value = "all")]
        year: String,

        /// Print the full ECharts option instead of the bare series
        #[arg(long)]
        option: bool,
    },

    /// Report broken invariants between the two documents (non-zero exit if any)
    Check {
        #[command(flatten)]
        sources: Sources,
    },

    /// Print the headline statistics and the top-10 ranking
    Summary {
        #[command(flatten)]
        sources: Sources,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Series {
            sources,
            chart,
            year,
            option,
        } => series::run_series(&sources, chart, &year, option).await,
        Command::Check { sources } => check::run_check(&sources).await,
        Command::Summary { sources } => summary::run_summary(&sources).await,
    }
}
