use crate::errors::AppError;
use crate::filter::RestrictionFilter;
use crate::model::Activation;
use crate::sota::SummitLookup;
use log::info;
use std::io::Write;

#[derive(Clone, Debug)]
pub struct ReportConfig {
    pub filter: RestrictionFilter,
    pub hours: u32,
    pub show_callsign: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            filter: RestrictionFilter::default(),
            hours: 1,
            show_callsign: false,
        }
    }
}

/// `W4V/SH-001 "Spruce Knob" at <time>, frequencies "<freq>"`, optionally `by <call>`.
pub fn format_activation(r: &Activation, name: &str, show_callsign: bool) -> String {
    let mut line = format!(
        "{}/{} \"{}\" at {}, frequencies \"{}\"",
        r.association, r.summit, name, r.timestamp, r.frequency
    );
    if show_callsign {
        line.push_str(" by ");
        line.push_str(&r.callsign);
    }
    line
}

/// Restricted records rendered in input order. The name lookup is a separate
/// request from the restriction check.
pub fn restricted_lines<L: SummitLookup + ?Sized>(
    lookup: &L,
    records: &[Activation],
    cfg: &ReportConfig,
) -> Vec<String> {
    cfg.filter
        .restricted(lookup, records)
        .into_iter()
        .map(|r| {
            let name = lookup.name(&r.association, &r.summit);
            format_activation(r, &name, cfg.show_callsign)
        })
        .collect()
}

pub fn restricted_spots<L: SummitLookup + ?Sized>(lookup: &L, cfg: &ReportConfig) -> Vec<String> {
    let spots = lookup.spots(cfg.hours);
    info!("{} spots in last {}h", spots.len(), cfg.hours);
    restricted_lines(lookup, &spots, cfg)
}

pub fn restricted_alerts<L: SummitLookup + ?Sized>(lookup: &L, cfg: &ReportConfig) -> Vec<String> {
    let alerts = lookup.alerts();
    info!("{} alerts", alerts.len());
    restricted_lines(lookup, &alerts, cfg)
}

fn spot_header(hours: u32) -> String {
    if hours == 1 {
        "List of restricted spots in last hour:".to_string()
    } else {
        format!("List of restricted spots in last {} hours:", hours)
    }
}

fn write_section<W: Write>(out: &mut W, header: &str, lines: &[String]) -> Result<(), AppError> {
    writeln!(out, "{}", header)?;
    if lines.is_empty() {
        writeln!(out, "None")?;
    }
    for l in lines {
        writeln!(out, "{}", l)?;
    }
    Ok(())
}

/// Spots section, blank line, alerts section. Spots are fully printed before
/// the alert feed is fetched.
pub fn write_report<W: Write, L: SummitLookup + ?Sized>(
    out: &mut W,
    lookup: &L,
    cfg: &ReportConfig,
) -> Result<(), AppError> {
    let spots = restricted_spots(lookup, cfg);
    write_section(out, &spot_header(cfg.hours), &spots)?;
    writeln!(out)?;
    let alerts = restricted_alerts(lookup, cfg);
    write_section(out, "List of restricted alerts:", &alerts)?;
    out.flush()?;
    Ok(())
}
