//! Design-pattern classifiers over the class model.
//!
//! Each classifier is a pure, read-only query: it never mutates the
//! program and degrades to a negative answer instead of erroring when a
//! class is malformed or inconclusive.

pub mod singleton;

pub use singleton::{is_singleton, singleton_instance_field};
