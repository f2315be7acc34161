//! Mapping from the (possibly renamed) names written for the solver back
//! to the entities of the original problem.

use super::*;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Item<'a> {
    Action(&'a Action),
    Object(&'a Object),
    Fluent(&'a Fluent),
    Parameter(&'a Parameter),
    Variable(&'a Variable),
    Type(&'a Type),
    NotFound,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Action,
    Object,
    Fluent,
    Parameter,
    Variable,
    Type,
    NotFound,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, fmtr: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::Action => "action",
            ItemKind::Object => "object",
            ItemKind::Fluent => "fluent",
            ItemKind::Parameter => "parameter",
            ItemKind::Variable => "variable",
            ItemKind::Type => "type",
            ItemKind::NotFound => "nothing",
        };
        write!(fmtr, "{s}")
    }
}

impl<'a> Item<'a> {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Action(_) => ItemKind::Action,
            Item::Object(_) => ItemKind::Object,
            Item::Fluent(_) => ItemKind::Fluent,
            Item::Parameter(_) => ItemKind::Parameter,
            Item::Variable(_) => ItemKind::Variable,
            Item::Type(_) => ItemKind::Type,
            Item::NotFound => ItemKind::NotFound,
        }
    }

    /// Two items are the same binding when they point at the same entity.
    fn same_entity(&self, other: &Item<'a>) -> bool {
        match (self, other) {
            (Item::Action(a), Item::Action(b)) => std::ptr::eq(*a, *b),
            (Item::Object(a), Item::Object(b)) => std::ptr::eq(*a, *b),
            (Item::Fluent(a), Item::Fluent(b)) => std::ptr::eq(*a, *b),
            (Item::Parameter(a), Item::Parameter(b)) => std::ptr::eq(*a, *b),
            (Item::Variable(a), Item::Variable(b)) => std::ptr::eq(*a, *b),
            (Item::Type(a), Item::Type(b)) => std::ptr::eq(*a, *b),
            (Item::NotFound, Item::NotFound) => true,
            _ => false,
        }
    }
}

pub trait NameResolver<'a> {
    /// Look up a lowercase name. Unknown names give `Item::NotFound`.
    fn item_named(&self, name: &str) -> Item<'a>;

    fn action_named(&self, name: &str) -> TfdResult<&'a Action> {
        match self.item_named(name) {
            Item::Action(a) => Ok(a),
            other => Err(TfdError::WrongPlanOrRenaming {
                name: name.to_string(),
                expected: ItemKind::Action,
                found: other.kind(),
            }),
        }
    }

    fn object_named(&self, name: &str) -> TfdResult<&'a Object> {
        match self.item_named(name) {
            Item::Object(o) => Ok(o),
            other => Err(TfdError::WrongPlanOrRenaming {
                name: name.to_string(),
                expected: ItemKind::Object,
                found: other.kind(),
            }),
        }
    }
}

impl<'a, F> NameResolver<'a> for F
where
    F: Fn(&str) -> Item<'a>,
{
    fn item_named(&self, name: &str) -> Item<'a> {
        self(name)
    }
}

/// Hash map backed resolver. Keys are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct NameMap<'a> {
    items: FxHashMap<String, Item<'a>>,
}

impl<'a> NameMap<'a> {
    pub fn new() -> Self {
        NameMap {
            items: FxHashMap::default(),
        }
    }

    /// Binds every entity of the problem to its own (lowercased) name.
    pub fn from_problem(problem: &'a Problem) -> TfdResult<Self> {
        let mut map = NameMap::new();
        for t in &problem.types {
            map.insert(&t.name, Item::Type(t))?;
        }
        for o in &problem.objects {
            map.insert(&o.name, Item::Object(o))?;
        }
        for f in &problem.fluents {
            map.insert(&f.name, Item::Fluent(f))?;
        }
        for a in &problem.actions {
            map.insert(&a.name, Item::Action(a))?;
        }
        // parameters give way to every named entity; shared parameter
        // names across actions bind to the first one
        for p in problem.actions.iter().flat_map(|a| &a.parameters) {
            map.items
                .entry(p.name.to_lowercase())
                .or_insert(Item::Parameter(p));
        }
        Ok(map)
    }

    pub fn insert(&mut self, name: &str, item: Item<'a>) -> TfdResult<()> {
        let key = name.to_lowercase();
        match self.items.get(&key) {
            Some(existing) if !existing.same_entity(&item) => Err(TfdError::DuplicateName(key)),
            _ => {
                self.items.insert(key, item);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> NameResolver<'a> for NameMap<'a> {
    fn item_named(&self, name: &str) -> Item<'a> {
        self.items.get(name).copied().unwrap_or(Item::NotFound)
    }
}
