use std::io::Write;

use tracing::debug;

use crate::rule_uuid::is_valid_rule_uuid;
use crate::ReportError;

/// Maximum number of rule UUIDs OR-combined into a single report query.
pub const GROUP_SIZE: usize = 36;

pub const REPORT_NAME_PREFIX: &str = "X-Custom-Usage-Report-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportType {
    #[default]
    Traffic,
    /// Reads from the Panorama log database instead of the firewall's own.
    PanoramaTraffic,
}

impl ReportType {
    pub fn from_panorama(panorama: bool) -> Self {
        if panorama {
            ReportType::PanoramaTraffic
        } else {
            ReportType::Traffic
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportType::Traffic => "traffic",
            ReportType::PanoramaTraffic => "panorama-traffic",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReportConfig {
    pub report_type: ReportType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub rule_uuids: usize,
    pub reports: usize,
}

pub fn report_name(number: usize) -> String {
    format!("{REPORT_NAME_PREFIX}{number}")
}

pub fn rule_filter_clause(uuid: &str) -> String {
    format!("(rule_uuid eq '{uuid}')")
}

/// Writes the `set shared reports ...` statements for one report, one per line.
pub fn write_report<W: Write>(
    out: &mut W,
    number: usize,
    report_type: ReportType,
    query: &str,
) -> std::io::Result<()> {
    let name = report_name(number);
    let prefix = format!("set shared reports {name} ");
    let ty = report_type.as_str();

    writeln!(out, "{prefix}caption {name}")?;
    writeln!(
        out,
        "{prefix}type {ty} aggregate-by [ rule rule_uuid action device_name vsys_name ]"
    )?;
    writeln!(out, "{prefix}type {ty} values [ packets bytes repeatcnt ]")?;
    writeln!(out, "{prefix}type {ty} sortby repeatcnt")?;
    writeln!(out, "{prefix}period last-7-days")?;
    writeln!(out, "{prefix}topn 1000")?;
    writeln!(out, "{prefix}topm 1000")?;
    writeln!(out, "{prefix}query \"{query}\"")?;
    Ok(())
}

/// Streams one report per group of [`GROUP_SIZE`] rule UUIDs to `out`.
///
/// Stops at the first malformed UUID. Reports for earlier groups have
/// already been written by then and are left in place.
pub fn render_reports<S, W>(
    uuids: &[S],
    config: &ReportConfig,
    out: &mut W,
) -> Result<RenderSummary, ReportError>
where
    S: AsRef<str>,
    W: Write,
{
    let Some(last) = uuids.len().checked_sub(1) else {
        return Err(ReportError::EmptyInput);
    };

    let mut reports = 0;
    let mut query = String::new();
    for (n, uuid) in uuids.iter().enumerate() {
        let uuid = uuid.as_ref();
        if !is_valid_rule_uuid(uuid) {
            return Err(ReportError::InvalidRuleUuid {
                uuid: uuid.to_string(),
                position: n + 1,
            });
        }

        if n % GROUP_SIZE == 0 {
            query.clear();
            reports += 1;
        } else {
            query.push_str(" or ");
        }
        query.push_str(&rule_filter_clause(uuid));

        if n % GROUP_SIZE == GROUP_SIZE - 1 || n == last {
            write_report(out, reports, config.report_type, &query)?;
            debug!(report = reports, rule_uuids = n % GROUP_SIZE + 1, "wrote report config");
        }
    }

    Ok(RenderSummary {
        rule_uuids: uuids.len(),
        reports,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_clause_quotes_uuid() {
        assert_eq!(
            rule_filter_clause("550e8400-e29b-41d4-a716-446655440000"),
            "(rule_uuid eq '550e8400-e29b-41d4-a716-446655440000')"
        );
    }

    #[test]
    fn report_type_follows_panorama_flag() {
        assert_eq!(ReportType::from_panorama(true).as_str(), "panorama-traffic");
        assert_eq!(ReportType::from_panorama(false).as_str(), "traffic");
    }
}
