//! Singleton-pattern classification.
//!
//! A class is classified as a singleton when:
//! - it is an ordinary class (not an interface, enum, annotation type,
//!   type parameter, or anonymous class),
//! - it has at least one constructor and every constructor is private or
//!   protected (a public or package-private constructor disqualifies),
//! - exactly one static field, on the class itself or on a *static*
//!   nested class, has a declared type resolving back to the class, and
//! - every syntactic use of the constructor within the field's use scope
//!   is a construction expression that either initializes that field
//!   directly or is assigned to it.
//!
//! The defining behavioral signature is "constructed only to populate the
//! self-instance field". Classes that also leak instances through
//! reflection or serialization are not tracked and may still classify as
//! singletons.

use crate::index::UseSiteIndex;
use crate::model::{
    AssignTarget, ClassDecl, ClassId, ClassKind, CtorId, FieldId, NewContext, Program, RefParent,
};
use crate::resolve::{field_use_scope, is_static_self_field, SymbolTable};

/// Whether `class` implements the singleton pattern.
pub fn is_singleton(
    program: &Program,
    symbols: &SymbolTable,
    index: &UseSiteIndex,
    class: ClassId,
) -> bool {
    singleton_instance_field(program, symbols, index, class).is_some()
}

/// Full singleton classification, returning the self-instance field when
/// the class qualifies.
pub fn singleton_instance_field(
    program: &Program,
    symbols: &SymbolTable,
    index: &UseSiteIndex,
    class: ClassId,
) -> Option<FieldId> {
    let decl = program.class(class);
    if matches!(
        decl.kind,
        ClassKind::Interface
            | ClassKind::Enum
            | ClassKind::Annotation
            | ClassKind::TypeParameter
            | ClassKind::Anonymous
    ) {
        return None;
    }

    let constructors = invisible_constructors(program, decl);
    if constructors.is_empty() {
        return None;
    }

    let field = single_static_self_field(program, symbols, decl)?;
    // Only the first constructor's use sites are checked; a class with
    // several non-public constructors is validated against the first one
    // found.
    if new_only_assigns_to_field(program, index, constructors[0], field) {
        Some(field)
    } else {
        None
    }
}

/// Whether a class passes the constructor-visibility gate: at least one
/// constructor, none public, all private or protected.
pub fn has_only_invisible_constructors(program: &Program, class: ClassId) -> bool {
    !invisible_constructors(program, program.class(class)).is_empty()
}

/// The class's constructors if they all pass the visibility gate, empty
/// otherwise.
fn invisible_constructors<'a>(program: &Program, decl: &'a ClassDecl) -> &'a [CtorId] {
    if decl.constructors.is_empty() {
        return &[];
    }
    for &ctor in &decl.constructors {
        let vis = program.constructor(ctor).visibility;
        if vis == crate::model::Visibility::Public {
            return &[];
        }
        if vis != crate::model::Visibility::Private && vis != crate::model::Visibility::Protected {
            return &[];
        }
    }
    &decl.constructors
}

/// The unique static self-typed field among the class's own fields and
/// the fields of its static nested classes, if exactly one exists.
///
/// Collection stops at the second match: two candidates already make the
/// instance holder ambiguous.
fn single_static_self_field(
    program: &Program,
    symbols: &SymbolTable,
    decl: &ClassDecl,
) -> Option<FieldId> {
    let own = decl.fields.iter().copied();
    let nested = decl
        .nested
        .iter()
        .map(|&id| program.class(id))
        .filter(|n| n.is_static)
        .flat_map(|n| n.fields.iter().copied());

    let mut candidates = own
        .chain(nested)
        .filter(|&f| is_static_self_field(program, symbols, decl.id, f))
        .take(2);

    let first = candidates.next()?;
    match candidates.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Whether every use of `ctor` inside the field's use scope is a
/// construction that initializes or assigns to `field`. Stops at the
/// first disqualifying use.
fn new_only_assigns_to_field(
    program: &Program,
    index: &UseSiteIndex,
    ctor: CtorId,
    field: FieldId,
) -> bool {
    let scope = field_use_scope(program, field);
    for site in index.uses_in_scope(program, ctor, scope) {
        let RefParent::New(ref context) = site.parent else {
            return false;
        };
        match context {
            NewContext::FieldInitializer(f) if *f == field => {}
            NewContext::Assignment {
                lhs: AssignTarget::Field(f),
            } if *f == field => {}
            _ => return false,
        }
    }
    true
}
