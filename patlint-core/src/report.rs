//! Output formatting - plaintext and JSON.

use serde_json::json;

use crate::detect::PatternAnalysis;
use crate::settings::ReportDetail;

/// Renders an analysis as plain text.
///
/// Summary detail lists counts and matched class names; full detail adds
/// the instance field and compilation unit per match.
pub fn render_plain(analysis: &PatternAnalysis, detail: ReportDetail) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Classes examined: {}\n",
        analysis.stats.total_classes
    ));
    out.push_str(&format!(
        "Candidates:       {}\n",
        analysis.stats.candidate_count
    ));
    out.push_str(&format!(
        "Singletons:       {}\n",
        analysis.stats.singleton_count
    ));

    if analysis.singletons.is_empty() {
        out.push_str("\nNo singleton classes found.\n");
    } else {
        out.push_str("\nSINGLETON CLASSES:\n");
        for m in &analysis.singletons {
            match detail {
                ReportDetail::Summary => out.push_str(&format!("  {}\n", m.class)),
                ReportDetail::Full => out.push_str(&format!(
                    "  {} (field: {}, unit: {})\n",
                    m.class, m.instance_field, m.unit
                )),
            }
        }
    }
    out
}

/// Prints an analysis in plain text format.
pub fn print_plain(analysis: &PatternAnalysis, detail: ReportDetail) {
    print!("{}", render_plain(analysis, detail));
}

/// Prints an analysis in JSON format.
///
/// Falls back to a minimal shape if serialization fails (should never
/// happen for these derive-serialized structs).
pub fn print_json(analysis: &PatternAnalysis) {
    match serde_json::to_string_pretty(&json!({
        "stats": analysis.stats,
        "singletons": analysis.singletons,
    })) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!("{{\"singleton_count\": {}}}", analysis.stats.singleton_count);
        }
    }
}
