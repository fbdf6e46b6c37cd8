//! Outcome rendering: headings, emphasis, and value serialization.

use colored::Colorize;
use serde_json::Value;
use thiserror::Error;

use vigil_diff::{TreeChange, TreeDiff};
use vigil_watch::Outcome;

/// Rendering failures.
///
/// Serialization of a well-formed document cannot fail; if it does, it is
/// a broken invariant upstream and the run stops.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize document for display: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Render one outcome as an ordered list of display lines.
///
/// A `Changed` outcome with an empty diff produces no lines; the event was
/// still consumed by the tracker's baseline update.
pub fn render_outcome(outcome: &Outcome) -> Result<Vec<String>, RenderError> {
    match outcome {
        Outcome::Created(doc) => {
            let mut lines = vec![heading("CREATED")];
            let body = serde_json::to_string_pretty(doc)?;
            lines.extend(body.lines().map(|l| l.green().to_string()));
            Ok(lines)
        }
        Outcome::Changed(_, diff) if diff.is_empty() => Ok(Vec::new()),
        Outcome::Changed(kind, diff) => {
            let mut lines = vec![heading(&kind.to_string())];
            lines.extend(diff_lines(diff)?);
            Ok(lines)
        }
    }
}

fn heading(label: &str) -> String {
    label.blue().bold().to_string()
}

fn diff_lines(diff: &TreeDiff) -> Result<Vec<String>, RenderError> {
    diff.changes.iter().map(change_line).collect()
}

fn change_line(change: &TreeChange) -> Result<String, RenderError> {
    let line = match change {
        TreeChange::Added { path, value } => {
            format!("+ {}: {}", path, compact(value)?).green().to_string()
        }
        TreeChange::Removed { path, value } => {
            format!("- {}: {}", path, compact(value)?).red().to_string()
        }
        TreeChange::Modified { path, old, new } => format!(
            "~ {}: {} -> {}",
            path,
            compact(old)?.red(),
            compact(new)?.green()
        ),
    };
    Ok(line)
}

/// Compact serialization keeps type distinctions: the string `"1"` renders
/// quoted, the number `1` does not.
fn compact(value: &Value) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vigil_diff::diff_documents;
    use vigil_watch::ChangeKind;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn created_renders_heading_and_pretty_body() {
        plain();
        let lines = render_outcome(&Outcome::Created(json!({"x": 1}))).unwrap();
        assert_eq!(lines[0], "CREATED");
        assert_eq!(lines[1], "{");
        assert_eq!(lines[2], "  \"x\": 1");
        assert_eq!(lines[3], "}");
    }

    #[test]
    fn empty_diff_renders_nothing() {
        plain();
        let outcome = Outcome::Changed(ChangeKind::Modified, TreeDiff::new());
        assert!(render_outcome(&outcome).unwrap().is_empty());
    }

    #[test]
    fn changed_renders_kind_heading_and_one_line_per_change() {
        plain();
        let diff = diff_documents(
            &json!({"a": 1, "b": "old"}),
            &json!({"b": "new", "c": true}),
        );
        let outcome = Outcome::Changed(ChangeKind::Modified, diff);
        let lines = render_outcome(&outcome).unwrap();

        assert_eq!(lines[0], "MODIFIED");
        assert!(lines.contains(&"- a: 1".to_string()));
        assert!(lines.contains(&"~ b: \"old\" -> \"new\"".to_string()));
        assert!(lines.contains(&"+ c: true".to_string()));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn string_and_number_render_distinctly() {
        plain();
        let diff = diff_documents(&json!({"v": "1"}), &json!({"v": 1}));
        let lines = render_outcome(&Outcome::Changed(ChangeKind::Modified, diff)).unwrap();
        assert_eq!(lines[1], "~ v: \"1\" -> 1");
    }

    #[test]
    fn nested_paths_render_dotted() {
        plain();
        let diff = diff_documents(
            &json!({"status": {"conditions": [{"ok": true}]}}),
            &json!({"status": {"conditions": [{"ok": false}]}}),
        );
        let lines = render_outcome(&Outcome::Changed(ChangeKind::Modified, diff)).unwrap();
        assert_eq!(lines[1], "~ status.conditions.0.ok: true -> false");
    }

    #[test]
    fn deleted_kind_used_as_heading() {
        plain();
        let diff = diff_documents(&json!({"x": 1}), &json!({}));
        let lines = render_outcome(&Outcome::Changed(ChangeKind::Deleted, diff)).unwrap();
        assert_eq!(lines[0], "DELETED");
        assert_eq!(lines[1], "- x: 1");
    }
}
