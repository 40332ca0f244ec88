//! Seed/reset utility: `carepath-seed [--reset] [--count N]`.
//!
//! Reads the same CAREPATH_DATABASE variable as the server. `--reset`
//! clears the three directory tables and exits; otherwise the specialty
//! catalog and N synthetic advocates (default 100) are inserted.

use std::process::ExitCode;

use carepath::config::Config;
use carepath::db::{self, repository};
use carepath::seed;

struct Args {
    reset: bool,
    count: usize,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        reset: false,
        count: seed::DEFAULT_ADVOCATE_COUNT,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--reset" => args.reset = true,
            "--count" => {
                let value = iter.next().ok_or("--count requires a value")?;
                args.count = value
                    .parse()
                    .map_err(|_| format!("Invalid --count value: {value}"))?;
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    carepath::init_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let conn = match db::open_database(&config.database_path) {
        Ok(conn) => conn,
        Err(e) => {
            tracing::error!(path = %config.database_path.display(), "Cannot open database: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = if args.reset {
        tracing::info!("Resetting directory tables");
        repository::clear_directory(&conn)
    } else {
        tracing::info!(count = args.count, "Seeding directory");
        seed::seed_directory(&conn, args.count)
    };

    match result {
        Ok(()) => {
            tracing::info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Seed failed: {e}");
            ExitCode::FAILURE
        }
    }
}
