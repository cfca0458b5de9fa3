//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use patlint_core::prelude::*;
//! ```

// Core analysis types
pub use crate::error::{PatlintError, PatlintResult};
pub use crate::model::{
    ClassId, ClassKind, NewContext, Program, RefParent, Visibility, YieldExpr,
};

// Resolution and indexing
pub use crate::index::UseSiteIndex;
pub use crate::resolve::{SearchScope, SymbolTable};

// Pattern classification
pub use crate::patterns::{is_singleton, singleton_instance_field};

// Detection pipeline
pub use crate::detect::{analyze_program, find_singletons, PatternAnalysis, SingletonMatch};

// Yield typing
pub use crate::types::{infer_yield_type, Ty, TypeEvalContext};

// Settings
pub use crate::settings::{
    load_workspace_settings, save_workspace_settings, AppSettings, WorkspaceSettings,
};

// Configuration
pub use crate::config::{load_config, PatlintConfig};

// Model discovery
pub use crate::scan::gather_model_files;
