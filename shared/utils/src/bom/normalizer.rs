//! BOM Normalizer
//!
//! Renders any materials representation as the canonical markdown-like text
//! the estimator matches keywords against.

use couture_models::{MaterialsInput, StructuredBom};

pub const BOM_HEADER: &str = "## Bill of Materials";
pub const NOTES_HEADER: &str = "### Production Notes";

/// Canonical text for a materials field. Absent input yields an empty string.
pub fn normalize(input: Option<&MaterialsInput>) -> String {
    match input {
        None => String::new(),
        Some(MaterialsInput::Text(text)) => text.clone(),
        Some(MaterialsInput::Lines(lines)) => lines.join("\n"),
        Some(MaterialsInput::Structured(bom)) => render_structured(bom),
        Some(MaterialsInput::Other(value)) => render_other(value),
    }
}

/// Renders a structured BOM as header, item rows and optional notes
pub fn render_structured(bom: &StructuredBom) -> String {
    let rows: Vec<String> = bom
        .items
        .iter()
        .map(|item| {
            format!(
                "- **{}**: {} ({}) [{}]",
                item.category, item.name, item.composition, item.estimated_qty
            )
        })
        .collect();

    let mut out = format!("{}\n\n{}", BOM_HEADER, rows.join("\n"));

    let notes = bom.notes();
    if !notes.is_empty() {
        let notes: Vec<String> = notes.iter().map(|note| format!("- {}", note)).collect();
        out.push_str("\n\n");
        out.push_str(NOTES_HEADER);
        out.push('\n');
        out.push_str(&notes.join("\n"));
    }

    out
}

// Falsy values (null, false, 0) count as absent.
fn render_other(value: &serde_json::Value) -> String {
    use serde_json::Value;

    let falsy = match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if falsy {
        return String::new();
    }

    // Serializing a Value cannot fail: keys are always strings.
    serde_json::to_string(value).unwrap_or_default()
}
