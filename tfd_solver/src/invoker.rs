//! Launching the solver's entry script and collecting its outcome.

use crate::config::TfdConfig;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tfd_domain::*;
use tracing::{debug, info, warn};

/// Exit code reported for a solver killed by a signal.
pub const NO_EXIT_CODE: i32 = -1;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SolverCommand {
    shell: PathBuf,
    script: PathBuf,
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct SolverOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl SolverOutput {
    /// 0 and 1 both mean the solver ran to completion.
    pub fn completed(&self) -> bool {
        matches!(self.exit_code, 0 | 1)
    }
}

impl SolverCommand {
    pub fn new(config: &TfdConfig) -> TfdResult<SolverCommand> {
        let script = config.script_path();
        if !script.is_file() {
            return Err(TfdError::ScriptNotFound(script));
        }
        Ok(SolverCommand {
            shell: config.shell.clone(),
            script,
        })
    }

    pub fn script(&self) -> &Path {
        &self.script
    }

    /// The solver finds its own resources relative to the script directory.
    pub fn working_dir(&self) -> &Path {
        self.script.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn command(&self, domain: &Path, problem: &Path, plan: &Path) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg(&self.script)
            .arg(domain)
            .arg(problem)
            .arg(plan)
            .current_dir(self.working_dir())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Runs the solver to completion. Blocks until the child exits; both
    /// pipes are drained before returning. Relative paths are taken from
    /// the caller's working directory, not the solver's.
    pub fn run(&self, domain: &Path, problem: &Path, plan: &Path) -> TfdResult<SolverOutput> {
        let mut cmd = self.command(
            &std::path::absolute(domain)?,
            &std::path::absolute(problem)?,
            &std::path::absolute(plan)?,
        );
        debug!("running {:?}", cmd);
        let output = cmd.output().map_err(TfdError::Launch)?;
        let exit_code = output.status.code().unwrap_or(NO_EXIT_CODE);
        let result = SolverOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        if result.completed() {
            info!("solver finished with exit code {}", exit_code);
        } else {
            warn!("solver failed with exit code {}: {}", exit_code, result.stderr.trim());
        }
        Ok(result)
    }
}

/// Build the solver command from `config` and run it on the three files.
pub fn run_solver(
    config: &TfdConfig,
    domain: &Path,
    problem: &Path,
    plan: &Path,
) -> TfdResult<SolverOutput> {
    SolverCommand::new(config)?.run(domain, problem, plan)
}
