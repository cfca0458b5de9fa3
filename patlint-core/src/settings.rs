//! Persisted workspace and application settings.
//!
//! Settings are explicit versioned structs with documented defaults,
//! serialized as TOML. Old files migrate through [`migrate`] on load
//! instead of being lazily patched at each accessor: version 1 files
//! stored the engine preference per workspace, version 2 moved it to the
//! application scope.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PatlintError, PatlintResult};

/// Maximum number of entries kept in the recent-targets list.
pub const RECENT_TARGETS_LIMIT: usize = 16;

/// Current on-disk settings format version.
pub const SETTINGS_VERSION: u32 = 2;

/// How much detail reports carry by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportDetail {
    /// Counts plus matched class names.
    #[default]
    Summary,
    /// Everything, including the instance field per match.
    Full,
}

/// Which analysis engine runs the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EngineKind {
    /// The in-process classifier.
    #[default]
    Builtin,
    /// An external engine invoked per model file.
    External,
}

fn default_version() -> u32 {
    // Files written before versioning carry no field at all.
    1
}

fn default_true() -> bool {
    true
}

/// Per-workspace persisted settings.
///
/// Every field has a default so that partially written files still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WorkspaceSettings {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Most recently analyzed targets, newest first, distinct, capped at
    /// [`RECENT_TARGETS_LIMIT`].
    #[serde(default)]
    pub recent_targets: Vec<String>,

    /// The root most recently analyzed from this workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_root: Option<String>,

    /// Most recently selected report profile per project path.
    #[serde(default)]
    pub recent_profile_by_project: HashMap<String, String>,

    /// Detail level of plain-text reports.
    #[serde(default)]
    pub report_detail: ReportDetail,

    /// Recorded preference for report consumers: whether rejections
    /// caused by a package-private constructor deserve a note. The
    /// builtin classifier applies its visibility gate unconditionally.
    #[serde(default = "default_true")]
    pub warn_on_package_private: bool,

    /// Recorded preference for report consumers: whether matches whose
    /// instance holder sits on a static nested class should be called
    /// out. The builtin classifier always searches static nested
    /// holders.
    #[serde(default = "default_true")]
    pub check_nested_holders: bool,

    /// Pre-v2 files stored the engine preference here; kept only so
    /// migration can move it to the application scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineKind>,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION,
            recent_targets: Vec::new(),
            recent_root: None,
            recent_profile_by_project: HashMap::new(),
            report_detail: ReportDetail::default(),
            warn_on_package_private: true,
            check_nested_holders: true,
            engine: None,
        }
    }
}

impl WorkspaceSettings {
    /// Saves a target as the most recent one. Re-saving an existing entry
    /// keeps it unique and moves it to the front; when the list is full
    /// the least recently saved entry is evicted.
    pub fn push_recent_target(&mut self, target: &str) {
        self.recent_targets.retain(|t| t != target);
        while self.recent_targets.len() >= RECENT_TARGETS_LIMIT {
            self.recent_targets.pop();
        }
        self.recent_targets.insert(0, target.to_string());
    }

    pub fn recent_targets(&self) -> &[String] {
        &self.recent_targets
    }

    pub fn set_recent_root(&mut self, root: impl Into<String>) {
        self.recent_root = Some(root.into());
    }

    pub fn recent_root(&self) -> Option<&str> {
        self.recent_root.as_deref()
    }

    pub fn set_recent_profile(&mut self, project: impl Into<String>, profile: impl Into<String>) {
        self.recent_profile_by_project
            .insert(project.into(), profile.into());
    }

    pub fn recent_profile(&self, project: &str) -> Option<&str> {
        self.recent_profile_by_project
            .get(project)
            .map(String::as_str)
    }
}

/// Application-scope persisted settings, shared across workspaces.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppSettings {
    /// Preferred analysis engine. None means "not decided yet".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineKind>,
}

/// Migrates a workspace settings value (and the app settings it may feed)
/// to the current version.
///
/// v1 → v2: the engine preference moves from workspace to application
/// scope, unless the application scope was already decided.
pub fn migrate(workspace: &mut WorkspaceSettings, app: &mut AppSettings) {
    if workspace.version < 2 {
        if let Some(engine) = workspace.engine.take() {
            if app.engine.is_none() {
                app.engine = Some(engine);
            }
        }
    }
    workspace.version = SETTINGS_VERSION;
}

/// Loads workspace settings from a TOML file, applying migration.
///
/// A missing file yields defaults at the current version.
pub fn load_workspace_settings(path: &Path, app: &mut AppSettings) -> PatlintResult<WorkspaceSettings> {
    if !path.exists() {
        return Ok(WorkspaceSettings::default());
    }
    let text = fs::read_to_string(path).map_err(|e| PatlintError::io(path, e))?;
    let mut settings: WorkspaceSettings = toml::from_str(&text)
        .map_err(|e| PatlintError::settings(path, format!("invalid settings TOML: {}", e)))?;
    migrate(&mut settings, app);
    Ok(settings)
}

/// Saves workspace settings as TOML, creating parent directories.
pub fn save_workspace_settings(path: &Path, settings: &WorkspaceSettings) -> PatlintResult<()> {
    let text = toml::to_string_pretty(settings)
        .map_err(|e| PatlintError::settings(path, format!("settings serialization failed: {}", e)))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PatlintError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| PatlintError::io(path, e))
}

/// Loads application settings from a TOML file; missing file yields
/// defaults.
pub fn load_app_settings(path: &Path) -> PatlintResult<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }
    let text = fs::read_to_string(path).map_err(|e| PatlintError::io(path, e))?;
    toml::from_str(&text)
        .map_err(|e| PatlintError::settings(path, format!("invalid settings TOML: {}", e)))
}

/// Saves application settings as TOML, creating parent directories.
pub fn save_app_settings(path: &Path, settings: &AppSettings) -> PatlintResult<()> {
    let text = toml::to_string_pretty(settings)
        .map_err(|e| PatlintError::settings(path, format!("settings serialization failed: {}", e)))?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PatlintError::io(parent, e))?;
    }
    fs::write(path, text).map_err(|e| PatlintError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = WorkspaceSettings::default();
        assert_eq!(s.version, SETTINGS_VERSION);
        assert!(s.recent_targets.is_empty());
        assert_eq!(s.report_detail, ReportDetail::Summary);
        assert!(s.warn_on_package_private);
        assert!(s.check_nested_holders);
        assert!(s.engine.is_none());
    }

    #[test]
    fn test_recent_target_dedup_moves_to_front() {
        let mut s = WorkspaceSettings::default();
        s.push_recent_target("Alpha");
        s.push_recent_target("Beta");
        s.push_recent_target("Alpha");

        assert_eq!(s.recent_targets(), &["Alpha", "Beta"]);
    }

    #[test]
    fn test_recent_target_eviction_at_limit() {
        let mut s = WorkspaceSettings::default();
        for i in 0..RECENT_TARGETS_LIMIT {
            s.push_recent_target(&format!("Class{}", i));
        }
        assert_eq!(s.recent_targets().len(), RECENT_TARGETS_LIMIT);

        s.push_recent_target("Overflow");
        assert_eq!(s.recent_targets().len(), RECENT_TARGETS_LIMIT);
        assert_eq!(s.recent_targets()[0], "Overflow");
        // "Class0" was the least recently saved entry.
        assert!(!s.recent_targets().iter().any(|t| t == "Class0"));
        assert!(s.recent_targets().iter().any(|t| t == "Class1"));
    }

    #[test]
    fn test_recent_profile_map() {
        let mut s = WorkspaceSettings::default();
        s.set_recent_profile("/proj/a", "strict");
        s.set_recent_profile("/proj/a", "relaxed");

        assert_eq!(s.recent_profile("/proj/a"), Some("relaxed"));
        assert_eq!(s.recent_profile("/proj/b"), None);
    }

    #[test]
    fn test_migration_moves_engine_to_app_scope() {
        let mut ws = WorkspaceSettings {
            version: 1,
            engine: Some(EngineKind::External),
            ..WorkspaceSettings::default()
        };
        let mut app = AppSettings::default();

        migrate(&mut ws, &mut app);

        assert_eq!(ws.version, SETTINGS_VERSION);
        assert!(ws.engine.is_none());
        assert_eq!(app.engine, Some(EngineKind::External));
    }

    #[test]
    fn test_migration_keeps_decided_app_engine() {
        let mut ws = WorkspaceSettings {
            version: 1,
            engine: Some(EngineKind::External),
            ..WorkspaceSettings::default()
        };
        let mut app = AppSettings {
            engine: Some(EngineKind::Builtin),
        };

        migrate(&mut ws, &mut app);

        assert_eq!(app.engine, Some(EngineKind::Builtin));
        assert!(ws.engine.is_none());
    }

    #[test]
    fn test_migration_is_a_noop_at_current_version() {
        let mut ws = WorkspaceSettings::default();
        let mut app = AppSettings::default();
        migrate(&mut ws, &mut app);

        assert_eq!(ws.version, SETTINGS_VERSION);
        assert!(app.engine.is_none());
    }

    #[test]
    fn test_unversioned_file_is_treated_as_v1() {
        // No version field at all, engine still in workspace scope.
        let text = "engine = \"external\"\n";
        let mut ws: WorkspaceSettings = toml::from_str(text).unwrap();
        assert_eq!(ws.version, 1);

        let mut app = AppSettings::default();
        migrate(&mut ws, &mut app);
        assert_eq!(app.engine, Some(EngineKind::External));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut s = WorkspaceSettings::default();
        s.push_recent_target("Config");
        s.set_recent_root("/work/demo");
        s.report_detail = ReportDetail::Full;

        let text = toml::to_string_pretty(&s).unwrap();
        let back: WorkspaceSettings = toml::from_str(&text).unwrap();

        assert_eq!(back.version, SETTINGS_VERSION);
        assert_eq!(back.recent_targets(), &["Config"]);
        assert_eq!(back.recent_root(), Some("/work/demo"));
        assert_eq!(back.report_detail, ReportDetail::Full);
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let mut app = AppSettings::default();
        let s = load_workspace_settings(
            Path::new("/nonexistent/patlint/settings.toml"),
            &mut app,
        )
        .unwrap();
        assert_eq!(s.version, SETTINGS_VERSION);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join("patlint_settings_test");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("settings.toml");

        let mut s = WorkspaceSettings::default();
        s.push_recent_target("Service");
        save_workspace_settings(&path, &s).unwrap();

        let mut app = AppSettings::default();
        let back = load_workspace_settings(&path, &mut app).unwrap();
        assert_eq!(back.recent_targets(), &["Service"]);

        fs::remove_dir_all(&dir).ok();
    }
}
