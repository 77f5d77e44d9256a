use crate::report::report_model::{AuditEntry, AuditReport, LocatorHealth};

// ============================================================================
// Console reporter — formatted terminal output
// ============================================================================

/// Format an audit report for terminal output.
///
/// Produces output like:
/// ```text
/// === Locator Audit: checkout ===
///
/// ✓ OK    #0 tap (id "btn_submit", score 88, 2 fallbacks)
/// ✗ WEAK  #1 tap (xpath "//android.widget.Button[@class=...]", score 74)
///         suggest: text "Continue"
/// - SKIP  #2 wait
///
/// === Results: 1 flagged of 3 steps ===
/// ```
pub fn format_console_report(report: &AuditReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Locator Audit: {} ===\n\n", report.scenario_name));

    for entry in &report.entries {
        out.push_str(&format_entry(entry));
    }

    out.push_str(&format!(
        "\n=== Results: {} flagged of {} steps ===\n",
        report.flagged_count(),
        report.entries.len()
    ));

    out
}

fn format_entry(entry: &AuditEntry) -> String {
    let marker = match entry.health {
        LocatorHealth::Healthy => "\u{2713} OK   ",
        LocatorHealth::NotApplicable => "- SKIP ",
        LocatorHealth::WeakXPath => "\u{2717} WEAK ",
        LocatorHealth::CoordinateFallback => "\u{2717} COORD",
        LocatorHealth::Critical => "\u{2717} CRIT ",
        LocatorHealth::MissingBundle => "\u{2717} NONE ",
    };

    let mut line = format!("{}  #{} {}", marker, entry.index, entry.action_type);

    if let (Some(strategy), Some(value)) = (&entry.primary_strategy, &entry.primary_value) {
        line.push_str(&format!(
            " ({} \"{}\", score {}, {} fallbacks)",
            strategy.as_str(),
            value,
            entry.primary_score.unwrap_or(0),
            entry.fallback_count
        ));
    }
    line.push('\n');

    if let Some(suggestion) = &entry.suggestion {
        line.push_str(&format!(
            "         suggest: {} \"{}\"\n",
            suggestion.strategy.as_str(),
            suggestion.value
        ));
    } else if matches!(
        entry.health,
        LocatorHealth::WeakXPath
            | LocatorHealth::Critical
            | LocatorHealth::MissingBundle
            | LocatorHealth::CoordinateFallback
    ) {
        line.push_str("         no stable substitute; re-capture the element\n");
    }

    line
}
