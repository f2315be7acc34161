//! Grammar for single lines of a TFD plan file.
//!
//! ```text
//! ; comment
//! (name arg1 arg2)
//! 12.345: (name arg1 arg2) [6.789]
//! ```

/// A recognized plan line, borrowing from the (lowercased) line text.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PlanLine<'input> {
    Untimed {
        name: &'input str,
        params: Vec<&'input str>,
    },
    Timed {
        start: &'input str,
        name: &'input str,
        params: Vec<&'input str>,
        duration: Option<&'input str>,
    },
}

impl<'input> PlanLine<'input> {
    pub fn name(&self) -> &'input str {
        match self {
            PlanLine::Untimed { name, .. } | PlanLine::Timed { name, .. } => name,
        }
    }

    pub fn params(&self) -> &[&'input str] {
        match self {
            PlanLine::Untimed { params, .. } | PlanLine::Timed { params, .. } => params,
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, PlanLine::Timed { .. })
    }
}

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

peg::parser! {
    pub grammar plan_parser() for str {
        rule ws() = quiet!{[c if c.is_whitespace()]}
        rule _() = ws()*
        rule __() = ws()+

        // untimed tokens may hold '?' (e.g. leftover variable names)
        rule untimed_token() -> &'input str
            = $([c if is_word(c) || c == '-' || c == '?']+)

        rule timed_token() -> &'input str
            = $([c if is_word(c) || c == '-']+)

        rule decimal() -> &'input str
            = $(['0'..='9']+ "." ['0'..='9']+)

        // whitespace separated, possibly empty, may directly follow the name
        rule timed_params() -> Vec<&'input str>
            = s:$([c if c.is_whitespace() || is_word(c) || c == '-']*) {
                s.split_whitespace().collect()
            }

        pub rule ignorable()
            = _ (";" [_]*)?

        pub rule untimed() -> PlanLine<'input>
            = _ "(" _ name:untimed_token() params:(__ t:untimed_token() { t })* _ ")" _ {
                PlanLine::Untimed { name, params }
            }

        pub rule timed() -> PlanLine<'input>
            = _ start:decimal() ":" _ "(" _ name:timed_token() params:timed_params() ")" _
              duration:("[" d:decimal() "]" { d })? _ {
                PlanLine::Timed { start, name, params, duration }
            }

        pub rule line() -> PlanLine<'input>
            = untimed() / timed()
    }
}
