//! Symbol resolution over the class model.
//!
//! The host IDE this analysis was modeled after resolves type references
//! lazily against a global index. Here resolution is an explicit symbol
//! table built in one pass over the program: type names map to class ids,
//! and a field's "use scope" is derived from its visibility.

use std::collections::HashMap;

use crate::model::{ClassId, FieldId, Program, TypeRef, UnitId, Visibility};

/// The region of a program a reference search is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Only use sites inside one compilation unit.
    Unit(UnitId),
    /// The whole program.
    Program,
}

impl SearchScope {
    /// Whether a use site in `unit` falls inside this scope.
    pub fn contains(self, unit: UnitId) -> bool {
        match self {
            Self::Program => true,
            Self::Unit(u) => u == unit,
        }
    }
}

/// Name-to-declaration table for type references.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    by_name: HashMap<String, ClassId>,
}

impl SymbolTable {
    /// Builds the table from every class declaration in the program.
    ///
    /// Later declarations shadow earlier ones with the same name, matching
    /// the single-namespace simplification of the model.
    pub fn build(program: &Program) -> Self {
        let mut by_name = HashMap::with_capacity(program.classes.len());
        for class in &program.classes {
            by_name.insert(class.name.clone(), class.id);
        }
        Self { by_name }
    }

    /// Resolves a type reference to a class declaration, if any.
    pub fn resolve(&self, ty: &TypeRef) -> Option<ClassId> {
        self.by_name.get(&ty.name).copied()
    }
}

/// Whether `field` is a static field whose declared type resolves exactly
/// to `class`.
pub fn is_static_self_field(
    program: &Program,
    symbols: &SymbolTable,
    class: ClassId,
    field: FieldId,
) -> bool {
    let f = program.field(field);
    if !f.is_static {
        return false;
    }
    symbols.resolve(&f.declared_type) == Some(class)
}

/// The search scope a field's uses must fall into, derived from its
/// visibility: private and package members are confined to their owning
/// unit, protected and public members are visible program-wide.
pub fn field_use_scope(program: &Program, field: FieldId) -> SearchScope {
    let f = program.field(field);
    match f.visibility {
        Visibility::Private | Visibility::Package => {
            SearchScope::Unit(program.class(f.owner).unit)
        }
        Visibility::Protected | Visibility::Public => SearchScope::Program,
    }
}
