//! Driver around the TFD entry script: three file arguments in, the
//! solver's exit code out.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tfd_domain::*;
use tfd_solver::{run_solver, TfdConfig};
use tracing::{debug, error};

/// Exit code for a malformed invocation.
pub const USAGE_EXIT_CODE: i32 = 64;
/// Exit code when the solver could not be set up or launched.
pub const SETUP_EXIT_CODE: i32 = 78;

#[derive(Debug, Parser)]
#[command(name = "tfd-plan", version, about = "Run Temporal Fast Downward on a PDDL domain and problem")]
pub struct DriverArgs {
    /// PDDL domain file
    pub domain: PathBuf,
    /// PDDL problem file
    pub problem: PathBuf,
    /// Where the solver writes its plan
    pub plan: PathBuf,
}

/// Parse `argv` and run the solver with the configuration from the
/// environment.
pub fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match DriverArgs::try_parse_from(argv) {
        Ok(args) => drive(&args, TfdConfig::from_env()),
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => USAGE_EXIT_CODE,
            }
        }
    }
}

pub fn drive(args: &DriverArgs, config: TfdResult<TfdConfig>) -> i32 {
    let result = config.and_then(|c| run_solver(&c, &args.domain, &args.problem, &args.plan));
    match result {
        Ok(output) => {
            debug!("solver stdout:\n{}", output.stdout);
            debug!("solver stderr:\n{}", output.stderr);
            output.exit_code
        }
        Err(e) => {
            error!("{}", e);
            SETUP_EXIT_CODE
        }
    }
}
