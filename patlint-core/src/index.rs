//! Use-site index for constructor references.
//!
//! The host platform answers "find all references to this constructor"
//! with a live global search. Here the same query is an explicit index:
//! one pass over the program's recorded use sites, keyed by constructor
//! id. Queries can additionally be restricted to a [`SearchScope`].

use std::collections::HashMap;

use crate::model::{CtorId, CtorUse, Program};
use crate::resolve::SearchScope;

/// Index from constructor to its syntactic use sites.
#[derive(Debug, Clone, Default)]
pub struct UseSiteIndex {
    /// Values are indexes into `Program::ctor_uses`.
    by_ctor: HashMap<CtorId, Vec<u32>>,
}

impl UseSiteIndex {
    /// Builds the index in a single pass over the program's use sites.
    pub fn build(program: &Program) -> Self {
        let mut by_ctor: HashMap<CtorId, Vec<u32>> = HashMap::new();
        for (i, site) in program.ctor_uses.iter().enumerate() {
            by_ctor.entry(site.constructor).or_default().push(i as u32);
        }
        Self { by_ctor }
    }

    /// All recorded use sites of a constructor, in program order.
    pub fn uses_of<'a>(
        &'a self,
        program: &'a Program,
        ctor: CtorId,
    ) -> impl Iterator<Item = &'a CtorUse> + 'a {
        self.by_ctor
            .get(&ctor)
            .into_iter()
            .flatten()
            .map(move |&i| program.ctor_use(i))
    }

    /// Use sites of a constructor restricted to a search scope.
    pub fn uses_in_scope<'a>(
        &'a self,
        program: &'a Program,
        ctor: CtorId,
        scope: SearchScope,
    ) -> impl Iterator<Item = &'a CtorUse> + 'a {
        self.uses_of(program, ctor)
            .filter(move |site| scope.contains(site.unit))
    }

    /// Number of recorded use sites for a constructor.
    pub fn use_count(&self, ctor: CtorId) -> usize {
        self.by_ctor.get(&ctor).map_or(0, Vec::len)
    }
}
