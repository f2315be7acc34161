//! Static engine metadata: credits, problem kinds and optimality
//! guarantees. These are plain values, nothing here is mutable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Credits {
    pub name: &'static str,
    pub author: &'static str,
    pub contact: &'static str,
    pub website: &'static str,
    pub license: &'static str,
    pub short_description: &'static str,
    pub long_description: &'static str,
}

const TFD_DESCRIPTION: &str = "TFD is a temporal planning system that is based on Fast Downward \
     and uses an adaptation of the context-enhanced additive heuristic.";

pub const TFD_CREDITS: Credits = Credits {
    name: "Temporal Fast Downward",
    author: "Davide Lusuardi",
    contact: "davide.lusuardi@studenti.unitn.it",
    website: "http://gki.informatik.uni-freiburg.de/tools/tfd/",
    license: "GPLv3",
    short_description: TFD_DESCRIPTION,
    long_description: TFD_DESCRIPTION,
};

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Feature {
    // problem class
    ActionBased,
    Hierarchical,
    // problem type
    SimpleNumericPlanning,
    GeneralNumericPlanning,
    // time
    ContinuousTime,
    DiscreteTime,
    IntermediateConditionsAndEffects,
    TimedEffects,
    TimedGoals,
    // expression duration
    StaticFluentsInDurations,
    FluentsInDurations,
    // numbers
    ContinuousNumbers,
    DiscreteNumbers,
    // conditions
    NegativeConditions,
    DisjunctiveConditions,
    Equalities,
    ExistentialConditions,
    UniversalConditions,
    // effects
    ConditionalEffects,
    IncreaseEffects,
    DecreaseEffects,
    // typing
    FlatTyping,
    HierarchicalTyping,
    // fluents
    NumericFluents,
    ObjectFluents,
    // quality metrics
    ActionsCost,
    Makespan,
    PlanLength,
}

impl fmt::Display for Feature {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{self:?}");
        // ActionBased -> ACTION_BASED
        let mut out = String::with_capacity(s.len() + 4);
        for (i, c) in s.chars().enumerate() {
            if c.is_uppercase() && i > 0 {
                out.push('_');
            }
            out.push(c.to_ascii_uppercase());
        }
        write!(fmtr, "{out}")
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct ProblemKind {
    features: BTreeSet<Feature>,
}

impl ProblemKind {
    pub fn new() -> Self {
        ProblemKind::default()
    }

    pub fn from_features(features: &[Feature]) -> Self {
        ProblemKind {
            features: features.iter().copied().collect(),
        }
    }

    pub fn set(&mut self, feature: Feature) -> &mut Self {
        self.features.insert(feature);
        self
    }

    pub fn has(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    pub fn features(&self) -> impl Iterator<Item = Feature> + '_ {
        self.features.iter().copied()
    }

    pub fn is_subset_of(&self, other: &ProblemKind) -> bool {
        self.features.is_subset(&other.features)
    }

    /// Features of `self` missing from `other`.
    pub fn unsupported_by(&self, other: &ProblemKind) -> Vec<Feature> {
        self.features.difference(&other.features).copied().collect()
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fs: Vec<_> = self.features.iter().map(|f| f.to_string()).collect();
        write!(fmtr, "[{}]", fs.join(", "))
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum OptimalityGuarantee {
    Satisficing,
    SolvedOptimally,
}
