//! Expression-level nodes consumed by the analyses.
//!
//! A [`CtorUse`] records one syntactic reference to a constructor together
//! with just enough of its surrounding tree to classify the use: whether the
//! reference sits inside a construction ("new") expression, and what that
//! construction flows into. Use sites are produced for a single analysis
//! pass and never persisted back into a model file by the detector itself.

use serde::{Deserialize, Serialize};

use super::{CtorId, ExprId, FieldId, UnitId};

/// Target of an assignment left-hand side, as far as resolution got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignTarget {
    /// The LHS resolved to a field declaration.
    Field(FieldId),
    /// The LHS resolved to a local variable.
    Local(String),
    /// The LHS did not resolve to any declaration.
    Unresolved(String),
}

/// The immediate context a construction expression flows into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NewContext {
    /// The construction is the declared initializer of a field.
    FieldInitializer(FieldId),
    /// The construction is the RHS of an assignment statement.
    Assignment { lhs: AssignTarget },
    /// The construction initializes a local variable binding.
    LocalBinding,
    /// The construction is returned from a method.
    ReturnValue,
    /// The construction is passed as a call argument.
    Argument,
    /// The construction result is discarded (expression statement).
    Discarded,
}

/// Syntactic parent of a constructor reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefParent {
    /// The reference is wrapped in a construction expression.
    New(NewContext),
    /// Any other reference form (method reference, reflection handle).
    Other,
}

/// One syntactic use of a constructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtorUse {
    pub constructor: CtorId,
    /// Compilation unit the use occurs in, for scope filtering.
    pub unit: UnitId,
    pub parent: RefParent,
}

/// A yield expression node of the modeled generator syntax.
///
/// `delegating` marks the `yield from` form, which forwards to a nested
/// generator's sub-iteration instead of producing a value directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YieldExpr {
    /// The yielded sub-expression, absent for a bare `yield`.
    pub expression: Option<ExprId>,
    #[serde(default)]
    pub delegating: bool,
}

impl YieldExpr {
    /// A plain `yield <expr>` node.
    pub fn new(expression: ExprId) -> Self {
        Self {
            expression: Some(expression),
            delegating: false,
        }
    }

    /// A `yield from <expr>` node.
    pub fn delegating(expression: ExprId) -> Self {
        Self {
            expression: Some(expression),
            delegating: true,
        }
    }

    /// A bare `yield` with no sub-expression.
    pub fn bare() -> Self {
        Self {
            expression: None,
            delegating: false,
        }
    }

    pub fn expression(&self) -> Option<ExprId> {
        self.expression
    }

    pub fn is_delegating(&self) -> bool {
        self.delegating
    }
}
