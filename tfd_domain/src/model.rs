//! Problem entities. A `Problem` owns every entity; plans and name
//! resolvers only borrow them.

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Type {
    pub name: String,
    pub father: Option<String>,
}

impl Type {
    pub fn new(name: &str) -> Type {
        Type {
            name: name.to_string(),
            father: None,
        }
    }

    pub fn with_father(name: &str, father: &str) -> Type {
        Type {
            name: name.to_string(),
            father: Some(father.to_string()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Object {
    pub name: String,
    pub type_name: String,
}

impl Object {
    pub fn new(name: &str, type_name: &str) -> Object {
        Object {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub type_name: String,
}

impl Parameter {
    pub fn new(name: &str, type_name: &str) -> Parameter {
        Parameter {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub type_name: String,
}

impl Variable {
    pub fn new(name: &str, type_name: &str) -> Variable {
        Variable {
            name: name.to_string(),
            type_name: type_name.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Fluent {
    pub name: String,
    pub signature: Vec<Parameter>,
    pub value_type: String,
}

impl Fluent {
    pub fn new(name: &str, signature: Vec<Parameter>, value_type: &str) -> Fluent {
        Fluent {
            name: name.to_string(),
            signature,
            value_type: value_type.to_string(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum ActionDuration {
    Instantaneous,
    Durative,
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub duration: ActionDuration,
}

impl Action {
    pub fn new(name: &str, parameters: Vec<Parameter>) -> Action {
        Action {
            name: name.to_string(),
            parameters,
            duration: ActionDuration::Instantaneous,
        }
    }

    pub fn durative(name: &str, parameters: Vec<Parameter>) -> Action {
        Action {
            name: name.to_string(),
            parameters,
            duration: ActionDuration::Durative,
        }
    }

    pub fn arity(&self) -> usize {
        self.parameters.len()
    }
}

/// Expressions as they appear in action instance parameters.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub enum Expression<'a> {
    Object(&'a Object),
    Bool(bool),
    Int(i64),
    Real(Decimal),
}

impl<'a> Expression<'a> {
    pub fn object(object: &'a Object) -> Self {
        Expression::Object(object)
    }

    pub fn as_object(&self) -> Option<&'a Object> {
        match self {
            Expression::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Object(o) => write!(fmtr, "{}", o.name),
            Expression::Bool(b) => write!(fmtr, "{b}"),
            Expression::Int(i) => write!(fmtr, "{i}"),
            Expression::Real(r) => write!(fmtr, "{r}"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub types: Vec<Type>,
    pub objects: Vec<Object>,
    pub fluents: Vec<Fluent>,
    pub actions: Vec<Action>,
    pub kind: ProblemKind,
}

impl Problem {
    pub fn new(name: &str) -> Problem {
        Problem {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn add_type(&mut self, t: Type) -> &mut Self {
        self.types.push(t);
        self
    }

    pub fn add_object(&mut self, o: Object) -> &mut Self {
        self.objects.push(o);
        self
    }

    pub fn add_fluent(&mut self, f: Fluent) -> &mut Self {
        self.fluents.push(f);
        self
    }

    pub fn add_action(&mut self, a: Action) -> &mut Self {
        self.actions.push(a);
        self
    }

    pub fn set_kind(&mut self, kind: ProblemKind) -> &mut Self {
        self.kind = kind;
        self
    }

    pub fn type_named(&self, name: &str) -> Option<&Type> {
        self.types.iter().find(|t| t.name == name)
    }

    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn fluent(&self, name: &str) -> Option<&Fluent> {
        self.fluents.iter().find(|f| f.name == name)
    }

    pub fn action(&self, name: &str) -> Option<&Action> {
        self.actions.iter().find(|a| a.name == name)
    }
}
