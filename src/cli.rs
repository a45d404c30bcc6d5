use anyhow::Result;
use clap::{Args, Parser};

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "pa-usage-report",
    version,
    about = "Generate custom usage report config for a list of rule UUIDs read from stdin"
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    pub(crate) verbose: bool,
    /// Query the Panorama log database (report type `panorama-traffic`)
    #[arg(short, long)]
    pub(crate) panorama: bool,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::logging::init(cli.report.verbose);
    commands::report::cmd_report(cli.report)
}
