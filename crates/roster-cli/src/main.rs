mod args;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use roster_report::Reporter;

use crate::args::Args;

fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "get_users=info,roster_db=info,roster_report=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = args.into_config();
    debug!("Reporting from {}", config.db_path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let status = Reporter::new(config).run(&mut out);

    if status.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
