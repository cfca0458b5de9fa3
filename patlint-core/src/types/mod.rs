//! Minimal type model and evaluation context for yield-expression
//! inference.
//!
//! The host's type-evaluation service is replaced by an explicit
//! expression-to-type table ([`TypeEvalContext`]) filled by whoever built
//! the program model. Types are structural: a class-like type with
//! optional generic arguments, the dedicated "no value" type, and an
//! unknown placeholder.

pub mod generator;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::ExprId;

pub use generator::{infer_yield_type, GENERATOR_QNAME};

/// A type in the modeled language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ty {
    /// A class-like type, possibly generic.
    Class { name: String, args: Vec<Ty> },
    /// The "no value" type (the type of a bare return).
    None,
    /// A type the context could not determine.
    Unknown,
}

impl Ty {
    /// A non-generic class type.
    pub fn class(name: impl Into<String>) -> Self {
        Self::Class {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic class type with arguments.
    pub fn generic(name: impl Into<String>, args: Vec<Ty>) -> Self {
        Self::Class {
            name: name.into(),
            args,
        }
    }

    pub fn is_none_type(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Explicit expression-type table standing in for the host's
/// type-evaluation service.
#[derive(Debug, Clone, Default)]
pub struct TypeEvalContext {
    types: HashMap<ExprId, Ty>,
}

impl TypeEvalContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the evaluated type of an expression.
    pub fn insert(&mut self, expr: ExprId, ty: Ty) {
        self.types.insert(expr, ty);
    }

    /// The evaluated type of an expression, if the context knows it.
    pub fn type_of(&self, expr: ExprId) -> Option<&Ty> {
        self.types.get(&expr)
    }
}
