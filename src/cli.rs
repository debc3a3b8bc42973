use crate::errors::AppError;
use crate::filter::{DEFAULT_ASSOCS, RestrictionFilter};
use crate::report::ReportConfig;
use crate::sota::DEFAULT_API_ROOT;
use argparse::{ArgumentParser, Collect, Store, StoreTrue};

pub struct CliArgs {
    pub assocs: Vec<String>,
    pub hours: u32,
    pub api_root: String,
    pub show_callsign: bool,
    pub log_level: String,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            assocs: vec![],
            hours: 1,
            api_root: DEFAULT_API_ROOT.into(),
            show_callsign: false,
            log_level: "essential".into(),
        }
    }
}

impl CliArgs {
    /// No `--assoc` given means the default allow-list.
    pub fn report_config(&self) -> Result<ReportConfig, AppError> {
        if self.hours == 0 {
            return Err(AppError::Config("--hours must be at least 1".into()));
        }
        let filter = if self.assocs.is_empty() {
            RestrictionFilter::default()
        } else {
            RestrictionFilter::new(self.assocs.iter().map(|a| a.trim().to_uppercase()).collect())
        };
        Ok(ReportConfig {
            filter,
            hours: self.hours,
            show_callsign: self.show_callsign,
        })
    }
}

pub fn parse_cli() -> CliArgs {
    let mut args = CliArgs::default();
    let assoc_help = format!(
        "Association code to check for restrictions (repeatable, default {})",
        DEFAULT_ASSOCS.join(" ")
    );
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("List SOTA spots and alerts on summits with restrictions");
        ap.refer(&mut args.assocs)
            .add_option(&["-a", "--assoc"], Collect, &assoc_help);
        ap.refer(&mut args.hours)
            .add_option(&["--hours"], Store, "Spot age window in hours");
        ap.refer(&mut args.api_root)
            .add_option(&["--api-root"], Store, "SOTA API base URL");
        ap.refer(&mut args.show_callsign)
            .add_option(&["--callsign"], StoreTrue, "Append the activator callsign to each line");
        ap.refer(&mut args.log_level)
            .add_option(&["--log"], Store, "Log level (essential|debug|trace|warn|error)");
        ap.parse_args_or_exit();
    }
    args
}
