//! patlint-core: design-pattern detection library over an explicit class
//! model.
//!
//! The library analyzes programs of a class-based language represented as
//! explicit model files rather than live host syntax trees: declarations,
//! constructor use sites, and expression types are all data, so every
//! analysis is a pure query over a [`model::Program`] arena.
//!
//! # Features
//!
//! - **Singleton detection**: classify classes that restrict themselves to
//!   one live instance behind a static self-typed field
//! - **Use-site indexing**: explicit constructor-reference index replacing
//!   a host IDE's global reference search
//! - **Symbol resolution**: name-based type resolution with
//!   visibility-derived search scopes
//! - **Yield typing**: generator yield-expression type inference over an
//!   explicit type-evaluation context
//! - **Persisted settings**: versioned workspace/application settings with
//!   an explicit migration path and a capped recency list
//! - **Model discovery**: parallel scanning for JSON model files
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use patlint_core::prelude::*;
//!
//! let program = Program::from_json_file(path)?;
//! let analysis = analyze_program(&program, &[]);
//!
//! for m in &analysis.singletons {
//!     println!("Singleton: {}", m.class);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`model`]: the class-model AST and program arena
//! - [`resolve`]: symbol table and search scopes
//! - [`index`]: constructor use-site index
//! - [`patterns`]: pattern classifiers (singleton)
//! - [`detect`]: whole-program detection pipeline
//! - [`types`]: type model and yield-expression inference
//! - [`settings`]: versioned persisted settings
//! - [`config`]: patlint.toml loading
//! - [`scan`]: model-file discovery
//! - [`report`]: plaintext/JSON output
//! - [`error`]: typed error handling

pub mod config;
pub mod detect;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod patterns;
pub mod prelude;
pub mod report;
pub mod resolve;
pub mod scan;
pub mod settings;
pub mod types;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{IoResultExt, PatlintError, PatlintResult};

// Class model
pub use model::{
    AssignTarget, ClassDecl, ClassId, ClassKind, Constructor, CtorId, CtorUse, ExprId, Field,
    FieldId, NewContext, Program, RefParent, TypeRef, Unit, UnitId, Visibility, YieldExpr,
};

// Resolution and indexing
pub use index::UseSiteIndex;
pub use resolve::{field_use_scope, is_static_self_field, SearchScope, SymbolTable};

// Pattern classification
pub use patterns::{is_singleton, singleton_instance_field};

// Detection pipeline
pub use detect::{
    analyze_program, compile_ignore_patterns, find_singletons, PatternAnalysis, PatternStats,
    SingletonMatch,
};

// Yield typing
pub use types::{infer_yield_type, Ty, TypeEvalContext, GENERATOR_QNAME};

// Settings
pub use settings::{
    load_app_settings, load_workspace_settings, migrate, save_app_settings,
    save_workspace_settings, AppSettings, EngineKind, ReportDetail, WorkspaceSettings,
    RECENT_TARGETS_LIMIT, SETTINGS_VERSION,
};

// Configuration
pub use config::{load_config, OutputConfig, PatlintConfig};

// Model discovery
pub use scan::{gather_model_files, gather_model_files_with_excludes};

// Reporting
pub use report::{print_json, print_plain, render_plain};

// Logging
pub use logging::{init_structured_logging, log_error, log_info, log_warn};

#[cfg(test)]
mod tests;
