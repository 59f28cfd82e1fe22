use std::fmt::Write;

use studygate_core::AppViewModel;

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();

    let gate_label = if view.study_time_active {
        "study time active, lookups disabled"
    } else {
        "lookups allowed"
    };
    let _ = writeln!(
        out,
        "Study window: {}-{} ({})",
        view.window.start, view.window.end, gate_label
    );
    let _ = writeln!(out, "URL: {}", view.url_input);
    if view.lookup_pending {
        let _ = writeln!(out, "Looking up...");
    }
    if let Some(error) = &view.error_message {
        let _ = writeln!(out, "! {error}");
    }

    let _ = writeln!(out, "Filtering taxonomy:");
    for item in &view.filtering_taxonomy {
        let _ = writeln!(out, "  - {item}");
    }

    let _ = writeln!(
        out,
        "Last IAB category: {}",
        view.leaf_category.as_deref().unwrap_or("")
    );

    if let Some(preview) = &view.response_preview {
        let _ = writeln!(out, "API response (partial):");
        let _ = writeln!(out, "{preview}");
    }

    out
}
