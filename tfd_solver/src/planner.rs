//! The TFD engine: serialize, run, parse back, classify.

use crate::config::TfdConfig;
use crate::invoker::{run_solver, SolverOutput};
use crate::reconstruct::plan_from_file;
use crate::status::*;
use std::path::Path;
use tfd_domain::*;
use tracing::debug;

/// Writes the PDDL files for a problem and knows how the names it wrote
/// map back to the problem entities.
pub trait PddlWriter<'a>: NameResolver<'a> {
    fn write_domain(&self, path: &Path) -> std::io::Result<()>;
    fn write_problem(&self, path: &Path) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct TfdPlanner {
    config: TfdConfig,
}

impl TfdPlanner {
    pub const NAME: &'static str = "Temporal Fast Downward";

    pub fn new(config: TfdConfig) -> TfdPlanner {
        TfdPlanner { config }
    }

    pub fn from_env() -> TfdResult<TfdPlanner> {
        Ok(TfdPlanner::new(TfdConfig::from_env()?))
    }

    pub fn config(&self) -> &TfdConfig {
        &self.config
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    pub fn credits() -> &'static Credits {
        &TFD_CREDITS
    }

    /// Minimal separation between dependent happenings.
    pub fn engine_epsilon() -> Decimal {
        Decimal::new(1, 2)
    }

    pub fn supported_kind() -> ProblemKind {
        ProblemKind::from_features(&[
            Feature::ActionBased,
            Feature::SimpleNumericPlanning,
            Feature::GeneralNumericPlanning,
            Feature::ContinuousTime,
            Feature::DiscreteTime,
            Feature::StaticFluentsInDurations,
            Feature::ContinuousNumbers,
            Feature::DiscreteNumbers,
            Feature::NegativeConditions,
            Feature::DisjunctiveConditions,
            Feature::Equalities,
            Feature::ConditionalEffects,
            Feature::IncreaseEffects,
            Feature::DecreaseEffects,
            Feature::FlatTyping,
            Feature::HierarchicalTyping,
            Feature::NumericFluents,
            Feature::ObjectFluents,
            Feature::ActionsCost,
            Feature::Makespan,
        ])
    }

    pub fn supports(kind: &ProblemKind) -> bool {
        kind.is_subset_of(&Self::supported_kind())
    }

    pub fn satisfies(guarantee: OptimalityGuarantee) -> bool {
        guarantee == OptimalityGuarantee::Satisficing
    }

    /// Solve `problem` with files produced by `writer`. The working files
    /// live in a temporary directory removed before returning.
    pub fn solve<'a, W>(
        &self,
        problem: &'a Problem,
        writer: &W,
    ) -> TfdResult<PlanGenerationResult<'a>>
    where
        W: PddlWriter<'a> + ?Sized,
    {
        if !Self::supports(&problem.kind) {
            let missing: Vec<_> = problem
                .kind
                .unsupported_by(&Self::supported_kind())
                .iter()
                .map(|f| f.to_string())
                .collect();
            return Err(TfdError::UnsupportedProblem(format!(
                "{} (unsupported: {})",
                problem.name,
                missing.join(", ")
            )));
        }

        let dir = tempfile::Builder::new().prefix("tfd-").tempdir()?;
        let domain_path = dir.path().join("domain.pddl");
        let problem_path = dir.path().join("problem.pddl");
        let plan_path = dir.path().join("plan.txt");
        writer.write_domain(&domain_path)?;
        writer.write_problem(&problem_path)?;
        debug!("wrote {} to {}", problem.name, dir.path().display());

        let output = run_solver(&self.config, &domain_path, &problem_path, &plan_path)?;
        let plan = if output.completed() && plan_path.is_file() {
            Some(plan_from_file(self.name(), &plan_path, writer)?)
        } else {
            None
        };
        let status = result_status(Some(output.exit_code), plan.as_ref());

        Ok(PlanGenerationResult {
            status,
            plan,
            engine_name: self.name().to_string(),
            log_messages: log_messages(&output),
        })
    }
}

fn log_messages(output: &SolverOutput) -> Vec<LogMessage> {
    let mut logs = vec![];
    if !output.stdout.trim().is_empty() {
        logs.push(LogMessage::new(LogLevel::Info, &output.stdout));
    }
    if !output.stderr.trim().is_empty() {
        logs.push(LogMessage::new(LogLevel::Error, &output.stderr));
    }
    logs
}
