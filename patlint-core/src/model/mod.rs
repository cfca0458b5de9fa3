//! Explicit class-model AST.
//!
//! Analysis here does not run against a live host syntax tree. Programs in
//! the modeled class language are represented as an explicit arena of
//! declarations and use sites ([`Program`]), constructed either through the
//! `add_*` methods or by deserializing a JSON model file.
//!
//! - [`class`]: class declarations, constructors, fields, visibility
//! - [`expr`]: constructor use sites and yield-expression nodes
//! - [`program`]: the arena tying the nodes together

pub mod class;
pub mod expr;
pub mod program;

use serde::{Deserialize, Serialize};

/// Identifier of a compilation unit within a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub u32);

/// Identifier of a class declaration within a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub u32);

/// Identifier of a constructor within a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CtorId(pub u32);

/// Identifier of a field within a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(pub u32);

/// Identifier of an expression known to a type-evaluation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExprId(pub u32);

pub use class::{ClassDecl, ClassKind, Constructor, Field, TypeRef, Visibility};
pub use expr::{AssignTarget, CtorUse, NewContext, RefParent, YieldExpr};
pub use program::{Program, Unit};
