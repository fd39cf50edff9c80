//! logit-primitives smoke harness
//!
//! Spawns the driver binary, captures its output, and checks that the
//! emitted probabilities sum to 1.0. Exits 0 on success, 1 on any failure,
//! printing a ✅ / ❌ marker line either way.
//!
//! Run with:
//!   cargo build --bins && cargo run --bin smoke
//!   cargo run --bin smoke -- --timeout-secs 5 -- --logits=3,1,2

mod check;
mod error;
mod runner;

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use clap::Parser;
use logit_primitives::logging;

use error::HarnessError;
use runner::DriverInvocation;

const DRIVER_NAME: &str = "logit-primitives";

#[derive(Parser, Debug)]
#[command(name = "smoke", about = "Smoke-test the logit-primitives driver", version)]
struct Cli {
    /// Driver binary; defaults to `logit-primitives` next to this executable
    #[arg(long)]
    driver: Option<PathBuf>,

    /// Kill the driver and fail if it runs longer than this
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Extra arguments passed through to the driver
    #[arg(last = true)]
    driver_args: Vec<String>,
}

fn default_driver() -> Result<PathBuf, HarnessError> {
    let exe = std::env::current_exe().map_err(HarnessError::Locate)?;
    Ok(exe.with_file_name(format!("{DRIVER_NAME}{}", std::env::consts::EXE_SUFFIX)))
}

fn run(cli: Cli) -> Result<f64, HarnessError> {
    let invocation = DriverInvocation {
        program: match cli.driver {
            Some(path) => path,
            None => default_driver()?,
        },
        args: cli.driver_args,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };
    let output = runner::run_driver(&invocation)?;
    check::validate(&output)
}

fn main() {
    logging::init("info");
    let cli = Cli::parse();

    match run(cli) {
        Ok(sum) => {
            tracing::info!(sum_probs = sum, "driver output validated");
            println!("✅ Smoke test passed");
        }
        Err(e) => {
            println!("❌ {e}");
            if let Some(detail) = e.detail() {
                println!("{detail}");
            }
            process::exit(1);
        }
    }
}
