//! Plans built from solver output. Instances borrow their action and
//! object parameters from the problem.

use super::*;
use serde::Serialize;
use std::fmt;

#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct ActionInstance<'a> {
    pub action: &'a Action,
    pub parameters: Vec<Expression<'a>>,
}

impl<'a> ActionInstance<'a> {
    pub fn new(action: &'a Action, parameters: Vec<Expression<'a>>) -> TfdResult<Self> {
        if parameters.len() != action.arity() {
            return Err(TfdError::ArityMismatch {
                action: action.name.clone(),
                expected: action.arity(),
                found: parameters.len(),
            });
        }
        Ok(ActionInstance { action, parameters })
    }

    pub fn action(&self) -> &'a Action {
        self.action
    }

    pub fn parameters(&self) -> &[Expression<'a>] {
        self.parameters.as_slice()
    }
}

impl fmt::Display for ActionInstance<'_> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmtr, "({}", self.action.name)?;
        for p in &self.parameters {
            write!(fmtr, " {p}")?;
        }
        write!(fmtr, ")")
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct SequentialPlan<'a> {
    pub actions: Vec<ActionInstance<'a>>,
}

impl<'a> SequentialPlan<'a> {
    pub fn new(actions: Vec<ActionInstance<'a>>) -> Self {
        SequentialPlan { actions }
    }
}

/// One scheduled action: start time, instance and optional duration.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct TimedAction<'a> {
    pub start: Decimal,
    pub instance: ActionInstance<'a>,
    pub duration: Option<Decimal>,
}

impl<'a> TimedAction<'a> {
    pub fn new(start: Decimal, instance: ActionInstance<'a>, duration: Option<Decimal>) -> Self {
        TimedAction {
            start,
            instance,
            duration,
        }
    }

    /// Start plus duration, or the start for actions without a duration.
    pub fn end(&self) -> Decimal {
        self.start + self.duration.unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize)]
pub struct TimeTriggeredPlan<'a> {
    pub timed_actions: Vec<TimedAction<'a>>,
}

impl<'a> TimeTriggeredPlan<'a> {
    pub fn new(timed_actions: Vec<TimedAction<'a>>) -> Self {
        TimeTriggeredPlan { timed_actions }
    }

    pub fn makespan(&self) -> Decimal {
        self.timed_actions
            .iter()
            .map(|ta| ta.end())
            .max()
            .unwrap_or_default()
    }
}

#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Plan<'a> {
    Sequential(SequentialPlan<'a>),
    TimeTriggered(TimeTriggeredPlan<'a>),
}

impl<'a> Plan<'a> {
    pub fn len(&self) -> usize {
        match self {
            Plan::Sequential(p) => p.actions.len(),
            Plan::TimeTriggered(p) => p.timed_actions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Plan::Sequential(_) => "sequential",
            Plan::TimeTriggered(_) => "time-triggered",
        }
    }

    pub fn as_sequential(&self) -> Option<&SequentialPlan<'a>> {
        match self {
            Plan::Sequential(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_time_triggered(&self) -> Option<&TimeTriggeredPlan<'a>> {
        match self {
            Plan::TimeTriggered(p) => Some(p),
            _ => None,
        }
    }
}

impl fmt::Display for Plan<'_> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Plan::Sequential(p) => {
                for a in &p.actions {
                    writeln!(fmtr, "{a}")?;
                }
            }
            Plan::TimeTriggered(p) => {
                for ta in &p.timed_actions {
                    // the plan format requires a fractional part
                    write!(fmtr, "{}: {}", with_fraction(ta.start), ta.instance)?;
                    if let Some(d) = ta.duration {
                        write!(fmtr, " [{}]", with_fraction(d))?;
                    }
                    writeln!(fmtr)?;
                }
            }
        }
        Ok(())
    }
}

fn with_fraction(d: Decimal) -> String {
    let s = d.normalize().to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}
