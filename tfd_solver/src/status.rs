use serde::{Deserialize, Serialize};
use std::fmt;
use tfd_domain::*;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PlanGenerationResultStatus {
    SolvedSatisficing,
    UnsolvableIncompletely,
    InternalError,
}

impl fmt::Display for PlanGenerationResultStatus {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlanGenerationResultStatus::SolvedSatisficing => "SOLVED_SATISFICING",
            PlanGenerationResultStatus::UnsolvableIncompletely => "UNSOLVABLE_INCOMPLETELY",
            PlanGenerationResultStatus::InternalError => "INTERNAL_ERROR",
        };
        write!(fmtr, "{s}")
    }
}

/// TFD exits with 0 when it wrote a plan and with 1 when it finished
/// without one; anything else means the process itself broke. A missing
/// exit code is treated like a completed run.
pub fn result_status(exit_code: Option<i32>, plan: Option<&Plan>) -> PlanGenerationResultStatus {
    match exit_code {
        None | Some(0) | Some(1) => match plan {
            Some(_) => PlanGenerationResultStatus::SolvedSatisficing,
            None => PlanGenerationResultStatus::UnsolvableIncompletely,
        },
        Some(_) => PlanGenerationResultStatus::InternalError,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct LogMessage {
    pub level: LogLevel,
    pub message: String,
}

impl LogMessage {
    pub fn new(level: LogLevel, message: &str) -> LogMessage {
        LogMessage {
            level,
            message: message.to_string(),
        }
    }
}

/// The outcome of one solving attempt.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct PlanGenerationResult<'a> {
    pub status: PlanGenerationResultStatus,
    pub plan: Option<Plan<'a>>,
    pub engine_name: String,
    pub log_messages: Vec<LogMessage>,
}

impl<'a> PlanGenerationResult<'a> {
    pub fn is_solved(&self) -> bool {
        self.status == PlanGenerationResultStatus::SolvedSatisficing
    }
}
