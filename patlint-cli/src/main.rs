//! patlint CLI - design-pattern detector over class-model files.
//!
//! Accepts either a single `.json` model file or a directory of them,
//! classifies every class in each model, and prints plain or JSON reports.
//! The analyzed root and matched class names are remembered in the
//! workspace settings under `.patlint/`.
//!
//! Exit codes: 0 for a clean run, 1 when a pattern matched (unless
//! `fail_on_match` is disabled), 2 on internal error.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use regex::Regex;

use patlint_core::{
    analyze_program, compile_ignore_patterns, gather_model_files, init_structured_logging,
    load_app_settings, load_config, load_workspace_settings, log_error, log_warn, print_json,
    print_plain, save_app_settings, save_workspace_settings, AppSettings, PatternAnalysis,
    Program, ReportDetail, WorkspaceSettings,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Design-pattern detector for class-model files")]
pub struct Cli {
    /// Path to a model file or a directory of model files
    #[arg(default_value = ".")]
    path: String,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Class-name regexes to ignore
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Do not read or update workspace settings
    #[arg(long)]
    no_settings: bool,
}

/// Analyzes one model file, printing its report.
fn analyze_file(
    path: &Path,
    ignore: &[Regex],
    json: bool,
    detail: ReportDetail,
) -> Result<PatternAnalysis> {
    let program = Program::from_json_file(path)
        .with_context(|| format!("Failed to load model: {}", path.display()))?;
    let analysis = analyze_program(&program, ignore);

    if json {
        print_json(&analysis);
    } else {
        println!("=== {} ===", path.display());
        print_plain(&analysis, detail);
        println!();
    }

    Ok(analysis)
}

/// Loads the persisted session state; failures only warn.
fn load_session(ws_path: &Path, app_path: &Path) -> Option<(WorkspaceSettings, AppSettings)> {
    let mut app = match load_app_settings(app_path) {
        Ok(a) => a,
        Err(e) => {
            log_warn(&format!("settings load failed: {}", e));
            return None;
        }
    };
    match load_workspace_settings(ws_path, &mut app) {
        Ok(ws) => Some((ws, app)),
        Err(e) => {
            log_warn(&format!("settings load failed: {}", e));
            None
        }
    }
}

/// Records the session in the workspace settings; failures only warn.
fn save_session(
    ws_path: &Path,
    app_path: &Path,
    mut settings: WorkspaceSettings,
    app: &AppSettings,
    root: &Path,
    matches: &[String],
) {
    settings.set_recent_root(root.display().to_string());
    for class in matches {
        settings.push_recent_target(class);
    }

    if let Err(e) = save_workspace_settings(ws_path, &settings) {
        log_warn(&format!("settings save failed: {}", e));
    }
    if let Err(e) = save_app_settings(app_path, app) {
        log_warn(&format!("settings save failed: {}", e));
    }
}

/// Directory root for config and settings: the directory itself, or the
/// file's parent for single-file runs.
fn settings_root(input: &Path) -> PathBuf {
    if input.is_dir() {
        return input.to_path_buf();
    }
    input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(cli: Cli) -> Result<()> {
    let input = PathBuf::from(&cli.path);
    let root = settings_root(&input);

    let settings_dir = root.join(".patlint");
    let ws_path = settings_dir.join("settings.toml");
    let app_path = settings_dir.join("app.toml");
    let session = if cli.no_settings {
        None
    } else {
        load_session(&ws_path, &app_path)
    };
    let detail = session
        .as_ref()
        .map(|(ws, _)| ws.report_detail)
        .unwrap_or_default();

    // Merge CLI ignores with patlint.toml (lenient on config errors).
    let mut ignore_patterns = cli.ignore.clone();
    let mut json = cli.json;
    let mut fail_on_match = true;
    match load_config(&root) {
        Ok(Some(cfg)) => {
            if let Some(list) = cfg.ignore {
                ignore_patterns.extend(list);
            }
            if let Some(fail) = cfg.fail_on_match {
                fail_on_match = fail;
            }
            if let Some(output) = cfg.output {
                if output.format.as_deref() == Some("json") {
                    json = true;
                }
            }
        }
        Ok(None) => {}
        Err(e) => {
            log_warn(&format!("config load failed: {}", e));
        }
    }

    let ignore = compile_ignore_patterns(&ignore_patterns)
        .context("Failed to compile ignore patterns")?;

    // Collect the model files to analyze.
    let files = if input.is_dir() {
        let found = gather_model_files(&input)
            .with_context(|| format!("Failed to scan for model files in: {}", cli.path))?;
        if found.is_empty() {
            eprintln!("No model files found under {}", input.display());
        }
        found
    } else {
        vec![input.clone()]
    };

    let mut matched_classes: Vec<String> = Vec::new();
    for file in &files {
        match analyze_file(file, &ignore, json, detail) {
            Ok(analysis) => {
                matched_classes.extend(analysis.singletons.into_iter().map(|m| m.class));
            }
            Err(e) => {
                // A malformed model should not abort the remaining files.
                eprintln!("[WARN] Skipping {}: {:#}", file.display(), e);
            }
        }
    }

    if let Some((settings, app)) = session {
        save_session(&ws_path, &app_path, settings, &app, &root, &matched_classes);
    }

    // Exit code (CI-friendly)
    if fail_on_match && !matched_classes.is_empty() {
        std::process::exit(1);
    }
    Ok(())
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] patlint internal error: {}", info);
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    if let Err(e) = run(Cli::parse()) {
        log_error(&format!("{:#}", e));
        eprintln!("Error: {:#}", e);
        // Exit code 1 is reserved for findings.
        std::process::exit(2);
    }
}
