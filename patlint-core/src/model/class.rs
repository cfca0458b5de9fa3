//! Class declarations and their members.
//!
//! The member lists on [`ClassDecl`] hold arena ids, not owned nodes, so a
//! declaration stays cheap to clone and the same member can be looked up
//! from any analysis pass.

use serde::{Deserialize, Serialize};

use super::{ClassId, CtorId, FieldId, UnitId};

/// The kind of a type declaration.
///
/// Only [`ClassKind::Class`] can carry the singleton pattern; the other
/// kinds either have no constructors of their own or no stable identity
/// (anonymous classes, type parameters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassKind {
    /// Ordinary (possibly nested) class.
    Class,
    /// Interface declaration.
    Interface,
    /// Enumeration declaration.
    Enum,
    /// Annotation type declaration.
    Annotation,
    /// Type parameter of a generic declaration.
    TypeParameter,
    /// Anonymous class body at a construction site.
    Anonymous,
}

/// Member visibility in the modeled language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Protected,
    /// Package-private (the default when no modifier is written).
    Package,
    Private,
}

impl Visibility {
    /// Whether the member is reachable from anywhere in the program.
    pub fn is_program_wide(self) -> bool {
        matches!(self, Self::Public | Self::Protected)
    }
}

/// A reference to a type by name, resolved through the symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef {
    pub name: String,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A named type declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDecl {
    pub id: ClassId,
    pub name: String,
    pub kind: ClassKind,
    /// Compilation unit the declaration lives in.
    pub unit: UnitId,
    /// Whether a nested declaration is static. Always false for top-level
    /// classes.
    #[serde(default)]
    pub is_static: bool,
    /// Declared constructors, in source order.
    #[serde(default)]
    pub constructors: Vec<CtorId>,
    /// Declared fields, in source order.
    #[serde(default)]
    pub fields: Vec<FieldId>,
    /// Nested type declarations.
    #[serde(default)]
    pub nested: Vec<ClassId>,
}

/// A constructor declaration. Belongs to exactly one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Constructor {
    pub id: CtorId,
    pub owner: ClassId,
    pub visibility: Visibility,
}

/// A field declaration. Belongs to exactly one class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: FieldId,
    pub name: String,
    pub owner: ClassId,
    pub is_static: bool,
    pub declared_type: TypeRef,
    pub visibility: Visibility,
}
