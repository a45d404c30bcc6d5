use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use crate::cli::ReportArgs;
use crate::stdin;

use pa_usage_report::input::parse_rule_uuids;
use pa_usage_report::report::{render_reports, ReportConfig, ReportType};
use pa_usage_report::ReportError;

pub(crate) fn cmd_report(args: ReportArgs) -> Result<()> {
    let start = Instant::now();

    let config = ReportConfig {
        report_type: ReportType::from_panorama(args.panorama),
    };

    if stdin::is_interactive() {
        info!("Reading rule UUIDs from stdin, one per line, until EOF");
    }
    let text = stdin::read_all()?;
    let uuids = parse_rule_uuids(&text);
    if uuids.is_empty() {
        return Err(ReportError::EmptyInput.into());
    }
    info!("Total parsed rule UUIDs: {}", uuids.len());

    info!(
        "Welcome to {} v{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("Created custom report config:");

    let mut out = std::io::stdout().lock();
    let summary =
        render_reports(&uuids, &config, &mut out).context("Cannot create report config")?;
    info!(
        "Total created report config: {} for {} rule UUIDs",
        summary.reports, summary.rule_uuids
    );

    info!("All done in {:.1}s, bye!", start.elapsed().as_secs_f64());
    Ok(())
}
