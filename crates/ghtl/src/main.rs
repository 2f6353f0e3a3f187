//! ghtl: print a GitHub repository's history as one timeline
//!
//! This binary fetches the most recent commits, issues and pull requests of
//! a repository and prints them oldest first, one colored line per event.

use std::process::ExitCode;

use clap::Parser;
use ghtl::config::Config;
use tracing::debug;

fn main() -> ExitCode {
    // Usage errors exit with clap's status 2
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the timeline
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    if let Err(e) = config.validate() {
        eprintln!("error: {e}");
        return ExitCode::from(2);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to start runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    debug!(repository = %config.slug(), pages = config.pages, "starting");

    let color = config.use_color();
    let mut stdout = std::io::stdout().lock();
    match runtime.block_on(ghtl::run(&config, &mut stdout, color)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
