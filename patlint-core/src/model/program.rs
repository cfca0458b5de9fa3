//! The program arena: every declaration and use site of one analyzed
//! program, addressable by id.
//!
//! Ids are dense indexes handed out by the `add_*` methods, so lookups are
//! plain vector indexing. A whole program serializes to a single JSON model
//! file, which is the interchange format the CLI consumes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatlintError, PatlintResult};

use super::class::{ClassDecl, ClassKind, Constructor, Field, TypeRef, Visibility};
use super::expr::{CtorUse, RefParent};
use super::{ClassId, CtorId, FieldId, UnitId};

/// A compilation unit of the modeled language (one source file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub name: String,
}

/// Arena holding one program's declarations and constructor use sites.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Program {
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub classes: Vec<ClassDecl>,
    #[serde(default)]
    pub constructors: Vec<Constructor>,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub ctor_uses: Vec<CtorUse>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a compilation unit and returns its id.
    pub fn add_unit(&mut self, name: impl Into<String>) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(Unit {
            id,
            name: name.into(),
        });
        id
    }

    /// Adds a top-level class declaration to a unit.
    pub fn add_class(&mut self, unit: UnitId, name: impl Into<String>, kind: ClassKind) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassDecl {
            id,
            name: name.into(),
            kind,
            unit,
            is_static: false,
            constructors: Vec::new(),
            fields: Vec::new(),
            nested: Vec::new(),
        });
        id
    }

    /// Adds a class nested inside `parent`, inheriting the parent's unit.
    pub fn add_nested_class(
        &mut self,
        parent: ClassId,
        name: impl Into<String>,
        kind: ClassKind,
        is_static: bool,
    ) -> ClassId {
        let unit = self.class(parent).unit;
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassDecl {
            id,
            name: name.into(),
            kind,
            unit,
            is_static,
            constructors: Vec::new(),
            fields: Vec::new(),
            nested: Vec::new(),
        });
        self.classes[parent.0 as usize].nested.push(id);
        id
    }

    /// Adds a constructor to a class.
    pub fn add_constructor(&mut self, owner: ClassId, visibility: Visibility) -> CtorId {
        let id = CtorId(self.constructors.len() as u32);
        self.constructors.push(Constructor {
            id,
            owner,
            visibility,
        });
        self.classes[owner.0 as usize].constructors.push(id);
        id
    }

    /// Adds a field to a class. `declared_type` is a type name resolved
    /// later through the symbol table.
    pub fn add_field(
        &mut self,
        owner: ClassId,
        name: impl Into<String>,
        declared_type: impl Into<String>,
        is_static: bool,
        visibility: Visibility,
    ) -> FieldId {
        let id = FieldId(self.fields.len() as u32);
        self.fields.push(Field {
            id,
            name: name.into(),
            owner,
            is_static,
            declared_type: TypeRef::new(declared_type),
            visibility,
        });
        self.classes[owner.0 as usize].fields.push(id);
        id
    }

    /// Records one syntactic use of a constructor.
    pub fn add_ctor_use(&mut self, constructor: CtorId, unit: UnitId, parent: RefParent) {
        self.ctor_uses.push(CtorUse {
            constructor,
            unit,
            parent,
        });
    }

    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.0 as usize]
    }

    pub fn class(&self, id: ClassId) -> &ClassDecl {
        &self.classes[id.0 as usize]
    }

    pub fn constructor(&self, id: CtorId) -> &Constructor {
        &self.constructors[id.0 as usize]
    }

    pub fn field(&self, id: FieldId) -> &Field {
        &self.fields[id.0 as usize]
    }

    pub fn ctor_use(&self, index: u32) -> &CtorUse {
        &self.ctor_uses[index as usize]
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Checks every recorded id against the arena bounds, returning a
    /// description of the first dangling reference.
    ///
    /// Model files are external input: a file can deserialize cleanly
    /// while its member lists point at nodes that were never declared,
    /// and such ids would panic at the first lookup instead of failing
    /// at the load boundary.
    pub fn validate(&self) -> Result<(), String> {
        let units = self.units.len() as u32;
        let classes = self.classes.len() as u32;
        let ctors = self.constructors.len() as u32;
        let fields = self.fields.len() as u32;

        for class in &self.classes {
            if class.unit.0 >= units {
                return Err(format!(
                    "class '{}' references missing unit {}",
                    class.name, class.unit.0
                ));
            }
            for c in &class.constructors {
                if c.0 >= ctors {
                    return Err(format!(
                        "class '{}' references missing constructor {}",
                        class.name, c.0
                    ));
                }
            }
            for f in &class.fields {
                if f.0 >= fields {
                    return Err(format!(
                        "class '{}' references missing field {}",
                        class.name, f.0
                    ));
                }
            }
            for n in &class.nested {
                if n.0 >= classes {
                    return Err(format!(
                        "class '{}' references missing nested class {}",
                        class.name, n.0
                    ));
                }
            }
        }
        for ctor in &self.constructors {
            if ctor.owner.0 >= classes {
                return Err(format!(
                    "constructor {} references missing class {}",
                    ctor.id.0, ctor.owner.0
                ));
            }
        }
        for field in &self.fields {
            if field.owner.0 >= classes {
                return Err(format!(
                    "field '{}' references missing class {}",
                    field.name, field.owner.0
                ));
            }
        }
        for (i, site) in self.ctor_uses.iter().enumerate() {
            if site.constructor.0 >= ctors {
                return Err(format!(
                    "use site {} references missing constructor {}",
                    i, site.constructor.0
                ));
            }
            if site.unit.0 >= units {
                return Err(format!(
                    "use site {} references missing unit {}",
                    i, site.unit.0
                ));
            }
        }
        Ok(())
    }

    /// Deserializes and validates a program from JSON text.
    pub fn from_json(text: &str) -> PatlintResult<Self> {
        let program: Self = serde_json::from_str(text)
            .map_err(|e| PatlintError::model("<inline>", format!("invalid model JSON: {}", e)))?;
        program
            .validate()
            .map_err(|m| PatlintError::model("<inline>", m))?;
        Ok(program)
    }

    /// Reads, deserializes, and validates a program from a JSON model
    /// file.
    pub fn from_json_file(path: &Path) -> PatlintResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| PatlintError::io(path, e))?;
        let program: Self = serde_json::from_str(&text)
            .map_err(|e| PatlintError::model(path, format!("invalid model JSON: {}", e)))?;
        program.validate().map_err(|m| PatlintError::model(path, m))?;
        Ok(program)
    }

    /// Serializes the program to pretty JSON.
    pub fn to_json(&self) -> PatlintResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PatlintError::internal(format!("model serialization failed: {}", e))
        })
    }
}
