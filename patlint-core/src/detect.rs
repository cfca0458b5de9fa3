//! Pattern-detection pipeline over a whole program.
//!
//! Builds the symbol table and use-site index once, then classifies every
//! class in parallel. Classification of one class is independent of every
//! other, so the rayon split is embarrassingly parallel.

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::error::{PatlintError, PatlintResult};
use crate::index::UseSiteIndex;
use crate::model::Program;
use crate::patterns::singleton::{has_only_invisible_constructors, singleton_instance_field};
use crate::resolve::SymbolTable;

/// One detected singleton class.
#[derive(Debug, Clone, Serialize)]
pub struct SingletonMatch {
    /// Name of the matched class.
    pub class: String,
    /// Name of the self-instance field.
    pub instance_field: String,
    /// Compilation unit the class is declared in.
    pub unit: String,
}

/// Statistics about one analysis run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PatternStats {
    /// Classes examined.
    pub total_classes: usize,
    /// Classes passing the constructor-visibility gate.
    pub candidate_count: usize,
    /// Classes classified as singletons.
    pub singleton_count: usize,
}

/// Result of running pattern detection over a program.
#[derive(Debug, Clone, Serialize)]
pub struct PatternAnalysis {
    pub singletons: Vec<SingletonMatch>,
    pub stats: PatternStats,
}

/// Compiles ignore patterns into regexes.
pub fn compile_ignore_patterns(patterns: &[String]) -> PatlintResult<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| {
            Regex::new(p).map_err(|e| {
                PatlintError::invalid_argument(format!("bad ignore pattern '{}': {}", p, e))
            })
        })
        .collect()
}

fn is_ignored(name: &str, ignore: &[Regex]) -> bool {
    ignore.iter().any(|re| re.is_match(name))
}

/// Classifies every class in the program, skipping ignored names.
pub fn analyze_program(program: &Program, ignore: &[Regex]) -> PatternAnalysis {
    let symbols = SymbolTable::build(program);
    let index = UseSiteIndex::build(program);

    let examined: Vec<_> = program
        .classes
        .par_iter()
        .filter(|class| !is_ignored(&class.name, ignore))
        .map(|class| {
            let candidate = has_only_invisible_constructors(program, class.id);
            let instance_field = singleton_instance_field(program, &symbols, &index, class.id);
            (class, candidate, instance_field)
        })
        .collect();

    let mut singletons: Vec<SingletonMatch> = examined
        .iter()
        .filter_map(|(class, _, instance_field)| {
            instance_field.map(|field| SingletonMatch {
                class: class.name.clone(),
                instance_field: program.field(field).name.clone(),
                unit: program.unit(class.unit).name.clone(),
            })
        })
        .collect();

    // Deterministic output regardless of parallel scheduling.
    singletons.sort_by(|a, b| a.unit.cmp(&b.unit).then_with(|| a.class.cmp(&b.class)));

    let stats = PatternStats {
        total_classes: examined.len(),
        candidate_count: examined.iter().filter(|(_, c, _)| *c).count(),
        singleton_count: singletons.len(),
    };

    PatternAnalysis { singletons, stats }
}

/// Classifies every class in the program with no ignore filtering.
pub fn find_singletons(program: &Program) -> Vec<SingletonMatch> {
    analyze_program(program, &[]).singletons
}
