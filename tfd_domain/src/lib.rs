//! The TFD domain: problem entities, name resolution and plans.

pub mod model;
pub use model::*;

pub mod resolver;
pub use resolver::*;

pub mod plan;
pub use plan::*;

pub mod kind;
pub use kind::*;

pub use rust_decimal::Decimal;

use std::path::PathBuf;
use thiserror::Error;

pub type TfdResult<T> = std::result::Result<T, TfdError>;

#[derive(Debug, Error)]
pub enum TfdError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),
    #[error("solver script not found at {}", .0.display())]
    ScriptNotFound(PathBuf),
    #[error("could not launch solver: {0}")]
    Launch(#[source] std::io::Error),
    #[error("error parsing plan generated by {solver}, line {line}: {text:?}")]
    PlanSyntax {
        solver: String,
        line: usize,
        text: String,
    },
    #[error("plan generated by {solver} mixes timed and untimed actions at line {line}")]
    MixedPlan { solver: String, line: usize },
    #[error("wrong plan or renaming: {name:?} resolved to {found}, expected {expected}")]
    WrongPlanOrRenaming {
        name: String,
        expected: ItemKind,
        found: ItemKind,
    },
    #[error("action {action} takes {expected} parameters, got {found}")]
    ArityMismatch {
        action: String,
        expected: usize,
        found: usize,
    },
    #[error("name {0:?} is already bound to another item")]
    DuplicateName(String),
    #[error("problem {0} is not supported by this engine")]
    UnsupportedProblem(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl TfdError {
    pub fn plan_syntax(solver: &str, line: usize, text: &str) -> TfdError {
        TfdError::PlanSyntax {
            solver: solver.to_string(),
            line,
            text: text.to_string(),
        }
    }
}
