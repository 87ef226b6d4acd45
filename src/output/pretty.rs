use colored::{Color, Colorize};

use super::rows::{stat_strings, SessionRow, StyleHint, TimingRow};
use crate::features::stats::BreathStats;
use crate::store::{Health, Profile};

/// Terminal color for a style hint.
#[must_use]
pub const fn hint_color(hint: StyleHint) -> Color {
    match hint {
        StyleHint::Good => Color::Green,
        StyleHint::Borderline => Color::Yellow,
        StyleHint::Bad => Color::Magenta,
    }
}

/// Format the past-data table.
pub fn format_timings_pretty(rows: &[TimingRow]) -> String {
    if rows.is_empty() {
        return "Past Data (0 records)\n  No records yet.".to_string();
    }

    let mut output = format!("Past Data ({} records)\n", rows.len());
    output.push_str(&format!(
        "{:<8} {:<20} {:<12} {:>9}\n",
        "ID", "Date", "Type", "Duration"
    ));
    output.push_str(&"─".repeat(52));
    output.push('\n');

    for row in rows {
        output.push_str(&format!(
            "{:<8} {:<20} {:<12} {:>8}s\n",
            row.id.dimmed(),
            row.date,
            row.phase.as_str().bold(),
            row.duration
        ));
    }

    output
}

/// Format the classified sessions table.
pub fn format_sessions_pretty(rows: &[SessionRow]) -> String {
    if rows.is_empty() {
        return "Breath Sessions (0)\n  No complete sessions saved yet.".to_string();
    }

    let mut output = format!("Breath Sessions ({})\n", rows.len());
    output.push_str(&format!(
        "{:<5} {:>7} {:>7} {:>7}  {:<15} {:>8}  {:<16} {}\n",
        "#", "Inhale", "Hold", "Exhale", "Ratio (H:E)", "Distance", "Category", "Date"
    ));
    output.push_str(&"─".repeat(88));
    output.push('\n');

    for row in rows {
        let category = format!("{:<16}", row.category.label())
            .color(hint_color(row.style))
            .bold();
        output.push_str(&format!(
            "{:<5} {:>7} {:>7} {:>7}  {:<15} {:>8}  {} {}\n",
            row.index,
            row.inhale,
            row.hold,
            row.exhale,
            row.ratio,
            row.distance,
            category,
            row.date.dimmed()
        ));
    }

    output.push_str(&format!(
        "\n{}\n",
        "Ideal ratio inhale:hold:exhale = 1:4:2".dimmed()
    ));
    output
}

/// Format aggregate stats.
pub fn format_stats_pretty(stats: &BreathStats) -> String {
    let strings = stat_strings(stats);
    let mut output = "Breath Statistics\n".bold().to_string();
    output.push_str(&"─".repeat(30));
    output.push('\n');
    output.push_str(&format!("  {:<16} {}\n", "Avg inhale:", strings.avg_inhale.cyan()));
    output.push_str(&format!("  {:<16} {}\n", "Avg hold:", strings.avg_hold.cyan()));
    output.push_str(&format!("  {:<16} {}\n", "Avg exhale:", strings.avg_exhale.cyan()));
    output.push_str(&format!("  {:<16} {}\n", "Total timings:", strings.total.green()));
    output
}

/// Format the profile.
pub fn format_profile_pretty(profile: &Profile) -> String {
    if profile.is_blank() {
        return "Profile\n  No profile saved yet.".to_string();
    }

    let mut output = "Profile\n".bold().to_string();
    for (label, value) in profile.fields() {
        output.push_str(&format!("  {}: {}\n", label.dimmed(), value));
    }
    if let Some(updated) = &profile.updated {
        output.push_str(&format!("  {}: {}\n", "Updated".dimmed(), updated));
    }
    output
}

/// Format a health report.
pub fn format_health_pretty(health: &Health) -> String {
    let status = if health.status.eq_ignore_ascii_case("healthy") {
        health.status.green()
    } else {
        health.status.red()
    };
    format!(
        "Store: {status}\n  Timings: {}\n  Sessions: {}",
        health.timings_count, health.sessions_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::output::rows::session_rows;
    use crate::features::analysis::classify_sessions;
    use crate::store::BreathSession;

    #[test]
    fn test_empty_tables() {
        assert!(format_timings_pretty(&[]).contains("No records yet."));
        assert!(format_sessions_pretty(&[]).contains("No complete sessions saved yet."));
    }

    #[test]
    fn test_timings_table() {
        colored::control::set_override(false);
        let rows = vec![TimingRow {
            id: "3".to_string(),
            date: "2024-03-01 08:00:00".to_string(),
            phase: Phase::BreathHold.into(),
            duration: "16.50".to_string(),
        }];
        let output = format_timings_pretty(&rows);
        assert!(output.contains("Breath-Hold"));
        assert!(output.contains("16.50s"));
    }

    #[test]
    fn test_sessions_table_shows_category() {
        colored::control::set_override(false);
        let sessions = vec![BreathSession {
            id: None,
            inhale: 4.0,
            hold: 16.0,
            exhale: 8.0,
            date: "2024-03-01".to_string(),
            timestamp: None,
        }];
        let output = format_sessions_pretty(&session_rows(classify_sessions(&sessions)));
        assert!(output.contains("Healthy"));
        assert!(output.contains("4.00 : 2.00"));
    }

    #[test]
    fn test_blank_profile() {
        assert!(format_profile_pretty(&Profile::default()).contains("No profile saved yet."));
    }

    #[test]
    fn test_stats_pretty() {
        colored::control::set_override(false);
        let output = format_stats_pretty(&BreathStats::default());
        assert!(output.contains("0.00s"));
    }
}
