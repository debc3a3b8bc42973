mod cli;
mod errors;
mod filter;
mod model;
mod report;
mod sota;
#[cfg(test)]
mod fake;

use crate::errors::AppError;
use env_logger::Env;
use log::info;

fn setup_logging(level: &str) {
    let env = Env::default().filter_or("RUST_LOG", match level {
        "essential" => "warn",
        "info" => "info",
        "debug" => "debug",
        "trace" => "trace",
        "warn" => "warn",
        "error" => "error",
        _ => "warn",
    });
    env_logger::Builder::from_env(env).init();
}

fn main() -> Result<(), AppError> {
    let args = cli::parse_cli();
    setup_logging(&args.log_level);

    let cfg = args.report_config()?;
    let client = sota::SotaClient::new(&args.api_root)?;
    info!(
        "Checking {} for restrictions via {}",
        cfg.filter.assocs.join(", "),
        args.api_root
    );

    let stdout = std::io::stdout();
    report::write_report(&mut stdout.lock(), &client, &cfg)?;
    Ok(())
}
