//! Turning a solver plan file into a `Plan` over the original problem.
//!
//! The file is read line by line. Blank and comment lines are skipped,
//! every other line must be either an untimed `(name args..)` line or a
//! timed `start: (name args..) [duration]` line, and all recognized lines
//! of one file must have the same form. Names are resolved through the
//! caller's `NameResolver`; any failure aborts the whole reconstruction.

use crate::plan_parser::{plan_parser, PlanLine};
use std::path::Path;
use tfd_domain::*;
use tracing::debug;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum Mode {
    Untimed,
    Timed,
}

enum Steps<'a> {
    Untimed(Vec<ActionInstance<'a>>),
    Timed(Vec<TimedAction<'a>>),
}

pub fn plan_from_file<'a, R>(solver: &str, path: &Path, resolver: &R) -> TfdResult<Plan<'a>>
where
    R: NameResolver<'a> + ?Sized,
{
    let text = std::fs::read_to_string(path)?;
    plan_from_str(solver, &text, resolver)
}

pub fn plan_from_str<'a, R>(solver: &str, text: &str, resolver: &R) -> TfdResult<Plan<'a>>
where
    R: NameResolver<'a> + ?Sized,
{
    let mut steps: Option<Steps<'a>> = None;

    for (i, raw) in text.lines().enumerate() {
        let line_no = i + 1;
        if plan_parser::ignorable(raw).is_ok() {
            continue;
        }
        let lower = raw.to_lowercase();
        let parsed = plan_parser::line(&lower)
            .map_err(|_| TfdError::plan_syntax(solver, line_no, raw))?;
        debug!("plan line {}: {:?}", line_no, parsed);

        let mode = if parsed.is_timed() {
            Mode::Timed
        } else {
            Mode::Untimed
        };
        let steps = steps.get_or_insert_with(|| match mode {
            Mode::Untimed => Steps::Untimed(vec![]),
            Mode::Timed => Steps::Timed(vec![]),
        });

        match (steps, &parsed) {
            (Steps::Untimed(actions), PlanLine::Untimed { name, params }) => {
                actions.push(resolve_instance(name, params, resolver)?);
            }
            (
                Steps::Timed(timed),
                PlanLine::Timed {
                    start,
                    name,
                    params,
                    duration,
                },
            ) => {
                let start = decimal(solver, line_no, raw, start)?;
                let duration = duration
                    .map(|d| decimal(solver, line_no, raw, d))
                    .transpose()?;
                let instance = resolve_instance(name, params, resolver)?;
                timed.push(TimedAction::new(start, instance, duration));
            }
            _ => {
                return Err(TfdError::MixedPlan {
                    solver: solver.to_string(),
                    line: line_no,
                })
            }
        }
    }

    Ok(match steps {
        Some(Steps::Timed(timed)) => Plan::TimeTriggered(TimeTriggeredPlan::new(timed)),
        Some(Steps::Untimed(actions)) => Plan::Sequential(SequentialPlan::new(actions)),
        None => Plan::Sequential(SequentialPlan::default()),
    })
}

fn resolve_instance<'a, R>(
    name: &str,
    params: &[&str],
    resolver: &R,
) -> TfdResult<ActionInstance<'a>>
where
    R: NameResolver<'a> + ?Sized,
{
    let action = resolver.action_named(name)?;
    let parameters = params
        .iter()
        .map(|p| resolver.object_named(p).map(Expression::object))
        .collect::<TfdResult<Vec<_>>>()?;
    ActionInstance::new(action, parameters)
}

fn decimal(solver: &str, line: usize, raw: &str, s: &str) -> TfdResult<Decimal> {
    Decimal::from_str_exact(s).map_err(|_| TfdError::plan_syntax(solver, line, raw))
}

#[cfg(test)]
mod reconstruct_tests {
    use super::*;
    use std::str::FromStr;

    const SOLVER: &str = "Temporal Fast Downward";

    fn problem() -> Problem {
        let mut p = Problem::new("logistics");
        p.add_type(Type::new("truck"))
            .add_type(Type::new("location"))
            .add_object(Object::new("truck1", "truck"))
            .add_object(Object::new("loc1", "location"))
            .add_object(Object::new("loc2", "location"))
            .add_action(Action::durative(
                "load",
                vec![Parameter::new("t", "truck"), Parameter::new("l", "location")],
            ))
            .add_action(Action::durative(
                "drive",
                vec![
                    Parameter::new("t", "truck"),
                    Parameter::new("from", "location"),
                    Parameter::new("to", "location"),
                ],
            ))
            .add_action(Action::new("noop", vec![]));
        p
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn sequential_plan_in_file_order() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let text = "; plan found\n\
                    (LOAD Truck1 loc1)\n\
                    \n   \n\
                    (drive truck1 loc1 loc2)\n\
                    ; cost = 2 (unit cost)\n\
                    (noop)\n";
        let plan = plan_from_str(SOLVER, text, &names).unwrap();
        let seq = plan.as_sequential().unwrap();
        let got: Vec<_> = seq.actions.iter().map(|a| a.to_string()).collect();
        assert_eq!(
            got,
            vec!["(load truck1 loc1)", "(drive truck1 loc1 loc2)", "(noop)"]
        );
        assert!(std::ptr::eq(seq.actions[0].action, &p.actions[0]));
        assert_eq!(seq.actions[0].parameters[0], Expression::object(&p.objects[0]));
    }

    #[test]
    fn timed_plan_with_exact_numbers() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let text = "0.000: (load truck1 loc1) [1.500]\n\
                    2.0: (drive truck1 loc1 loc2) [0.1]\n\
                    3.30000000000000000001: (noop) [0.2]\n";
        let plan = plan_from_str(SOLVER, text, &names).unwrap();
        let tt = plan.as_time_triggered().unwrap();
        assert_eq!(tt.timed_actions.len(), 3);
        assert_eq!(tt.timed_actions[0].start, Decimal::ZERO);
        assert_eq!(tt.timed_actions[0].duration, Some(dec("1.5")));
        assert_eq!(tt.timed_actions[1].start, dec("2"));
        assert_eq!(tt.timed_actions[1].instance.action.name, "drive");
        assert_eq!(
            tt.timed_actions[2].start,
            dec("3.30000000000000000001")
        );
        // 0.1 + 0.2 is exact here
        assert_eq!(
            tt.timed_actions[1].duration.unwrap() + tt.timed_actions[2].duration.unwrap(),
            dec("0.3")
        );
    }

    #[test]
    fn missing_duration_is_none() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let plan = plan_from_str(SOLVER, "1.0: (noop)\n", &names).unwrap();
        let tt = plan.as_time_triggered().unwrap();
        assert_eq!(tt.timed_actions[0].duration, None);
    }

    #[test]
    fn empty_file_is_empty_sequential_plan() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        for text in ["", "\n\n", "; only a comment\n   \n"] {
            let plan = plan_from_str(SOLVER, text, &names).unwrap();
            assert!(plan.as_sequential().is_some());
            assert!(plan.is_empty());
        }
    }

    #[test]
    fn mixed_files_are_rejected() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let text = "0.0: (noop) [1.0]\n(noop)\n";
        match plan_from_str(SOLVER, text, &names) {
            Err(TfdError::MixedPlan { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
        let text = "(noop)\n\n0.0: (noop) [1.0]\n";
        match plan_from_str(SOLVER, text, &names) {
            Err(TfdError::MixedPlan { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected {:?}", other),
        }
        // the form mismatch is reported before any name is looked up
        let text = "0.0: (noop) [1.0]\n(fly nowhere)\n";
        match plan_from_str(SOLVER, text, &names) {
            Err(TfdError::MixedPlan { line, .. }) => assert_eq!(line, 2),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn times_beyond_decimal_precision_are_rejected() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let text = "0.00000000000000000000000000001: (noop) [1.0]\n";
        match plan_from_str(SOLVER, text, &names) {
            Err(TfdError::PlanSyntax { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected {:?}", other),
        }
        let text = "1.0: (noop) [0.00000000000000000000000000001]\n";
        assert!(matches!(
            plan_from_str(SOLVER, text, &names),
            Err(TfdError::PlanSyntax { .. })
        ));
    }

    #[test]
    fn unparseable_line_names_the_solver() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let err = plan_from_str(SOLVER, "(noop)\nSolution found!\n", &names).unwrap_err();
        match &err {
            TfdError::PlanSyntax { solver, line, text } => {
                assert_eq!(solver, SOLVER);
                assert_eq!(*line, 2);
                assert_eq!(text, "Solution found!");
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(err.to_string().contains(SOLVER));
    }

    #[test]
    fn unknown_and_wrong_kind_names() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();

        match plan_from_str(SOLVER, "(fly truck1)\n", &names) {
            Err(TfdError::WrongPlanOrRenaming { name, found, .. }) => {
                assert_eq!(name, "fly");
                assert_eq!(found, ItemKind::NotFound);
            }
            other => panic!("unexpected {:?}", other),
        }
        match plan_from_str(SOLVER, "(truck1 loc1)\n", &names) {
            Err(TfdError::WrongPlanOrRenaming {
                expected, found, ..
            }) => {
                assert_eq!(expected, ItemKind::Action);
                assert_eq!(found, ItemKind::Object);
            }
            other => panic!("unexpected {:?}", other),
        }
        match plan_from_str(SOLVER, "(load truck1 location)\n", &names) {
            Err(TfdError::WrongPlanOrRenaming {
                expected, found, ..
            }) => {
                assert_eq!(expected, ItemKind::Object);
                assert_eq!(found, ItemKind::Type);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            plan_from_str(SOLVER, "(load truck1)\n", &names),
            Err(TfdError::ArityMismatch { .. })
        ));
    }

    #[test]
    fn renamed_symbols_resolve_to_originals() {
        let p = problem();
        let mut names = NameMap::new();
        names.insert("a_load", Item::Action(&p.actions[0])).unwrap();
        names.insert("o_1", Item::Object(&p.objects[0])).unwrap();
        names.insert("o_2", Item::Object(&p.objects[1])).unwrap();
        let plan = plan_from_str(SOLVER, "(A_LOAD o_1 o_2)", &names).unwrap();
        assert_eq!(plan.to_string(), "(load truck1 loc1)\n");
    }

    #[test]
    fn displayed_plans_parse_again() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let text = "0.5: (load truck1 loc1) [2.25]\n3.0: (noop)\n";
        let plan = plan_from_str(SOLVER, text, &names).unwrap();
        let again = plan_from_str(SOLVER, &plan.to_string(), &names).unwrap();
        assert_eq!(plan, again);
    }

    #[test]
    fn reads_plan_files() {
        let p = problem();
        let names = NameMap::from_problem(&p).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.txt");
        std::fs::write(&path, "(noop)\r\n(noop)\r\n").unwrap();
        let plan = plan_from_file(SOLVER, &path, &names).unwrap();
        assert_eq!(plan.len(), 2);

        let missing = dir.path().join("nope");
        assert!(matches!(
            plan_from_file(SOLVER, &missing, &names),
            Err(TfdError::Io(_))
        ));
    }
}
