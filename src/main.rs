use miette::{IntoDiagnostic, Result};
use payment_patterns::application::global;
use payment_patterns::config::Config;
use payment_patterns::interfaces::demo;
use payment_patterns::logging::init_logging;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config.log_filter);

    // Runs against the process-wide registry
    let report = demo::run(global::registry(), &config.database_url).into_diagnostic()?;

    print!("{report}");

    Ok(())
}
