//! Form-field contract and HTML fragment builders.
//!
//! The frontend posts checklist answers as radio inputs named
//! `{phase}__{point_key}`. This module owns both directions of that
//! contract: extracting answers from a posted field list, and rendering a
//! case's points back into form fragments. All builders are pure functions
//! over [`PointView`] rows; DOM insertion is the frontend's problem.

use crate::phase::Phase;

/// Separator between the phase prefix and the point key in a field name.
const FIELD_SEP: &str = "__";

/// The three answer choices offered by the UI.
///
/// Stored values are not validated against this list; the columns are
/// free-form text and the UI is the only thing constraining them.
pub const ANSWER_CHOICES: &[&str] = &["Sí", "No", "No Aplica"];

/// View-model for one checklist point, decoupled from the database row.
#[derive(Debug, Clone)]
pub struct PointView {
    pub point_key: String,
    pub point_label: String,
    pub salida_value: Option<String>,
    pub entrada_value: Option<String>,
}

// ---------------------------------------------------------------------------
// Field-name contract
// ---------------------------------------------------------------------------

/// Build the form-field name for a point in a given phase.
pub fn field_name(phase: Phase, point_key: &str) -> String {
    format!("{phase}{FIELD_SEP}{point_key}")
}

/// Split a field name back into its phase and point key.
///
/// Returns `None` for names that do not follow the contract (e.g. the
/// `salida_by` text field).
pub fn split_field_name(name: &str) -> Option<(Phase, &str)> {
    let (prefix, key) = name.split_once(FIELD_SEP)?;
    let phase = prefix.parse().ok()?;
    if key.is_empty() {
        return None;
    }
    Some((phase, key))
}

/// Extract the `(point_key, value)` answers for one phase from a posted
/// field list. Fields for the other phase and non-answer fields are ignored.
pub fn extract_answers(phase: Phase, fields: &[(String, String)]) -> Vec<(String, String)> {
    fields
        .iter()
        .filter_map(|(name, value)| match split_field_name(name) {
            Some((p, key)) if p == phase => Some((key.to_string(), value.clone())),
            _ => None,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// HTML helpers
// ---------------------------------------------------------------------------

/// Escape text for interpolation into HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Accent-insensitive lowercase sort key for Spanish point labels.
///
/// Stands in for a full locale collation: enough to keep "Árbol" next to
/// "Arbol" without pulling in ICU.
fn label_sort_key(label: &str) -> String {
    label
        .chars()
        .flat_map(|c| {
            let lower = c.to_lowercase();
            lower.map(|l| match l {
                'á' => 'a',
                'é' => 'e',
                'í' => 'i',
                'ó' => 'o',
                'ú' | 'ü' => 'u',
                other => other,
            })
        })
        .collect()
}

/// Sort points by label, accent-insensitively, without mutating the input.
fn sorted_by_label(points: &[PointView]) -> Vec<&PointView> {
    let mut sorted: Vec<&PointView> = points.iter().collect();
    sorted.sort_by_key(|p| label_sort_key(&p.point_label));
    sorted
}

fn radio(name: &str, value: &str, checked: bool) -> String {
    format!(
        "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{}> {}</label>",
        escape_html(name),
        escape_html(value),
        if checked { " checked" } else { "" },
        escape_html(value),
    )
}

fn radio_group(phase: Phase, point_key: &str, current: Option<&str>) -> String {
    let name = field_name(phase, point_key);
    ANSWER_CHOICES
        .iter()
        .map(|choice| radio(&name, choice, current == Some(*choice)))
        .collect()
}

// ---------------------------------------------------------------------------
// Fragment builders
// ---------------------------------------------------------------------------

/// Radio-row fragments for the salida entry form.
pub fn build_salida_form(points: &[PointView]) -> String {
    if points.is_empty() {
        return "<p><em>No hay puntos todavía para esta tablilla.</em></p>".to_string();
    }
    sorted_by_label(points)
        .iter()
        .map(|p| {
            format!(
                "<div class=\"row\"><div class=\"label\">{}</div><div class=\"controls\">{}</div></div>",
                escape_html(&p.point_label),
                radio_group(Phase::Salida, &p.point_key, p.salida_value.as_deref()),
            )
        })
        .collect()
}

/// Radio-row fragments for the entrada entry form, each showing the prior
/// salida answer alongside the controls.
pub fn build_entrada_form(points: &[PointView]) -> String {
    if points.is_empty() {
        return "<p><em>No hay puntos para esta tablilla.</em></p>".to_string();
    }
    sorted_by_label(points)
        .iter()
        .map(|p| {
            format!(
                "<div class=\"row two-col\"><div class=\"left\"><div class=\"label\">{}</div>\
                 <div class=\"prev\"><strong>Salida:</strong> {}</div></div><div class=\"right\">{}</div></div>",
                escape_html(&p.point_label),
                escape_html(p.salida_value.as_deref().unwrap_or("-")),
                radio_group(Phase::Entrada, &p.point_key, p.entrada_value.as_deref()),
            )
        })
        .collect()
}

/// Read-only summary table for a closed case.
pub fn build_closed_table(points: &[PointView]) -> String {
    if points.is_empty() {
        return "<p>No hay puntos.</p>".to_string();
    }
    let rows: String = sorted_by_label(points)
        .iter()
        .map(|p| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape_html(&p.point_label),
                escape_html(p.salida_value.as_deref().unwrap_or("-")),
                escape_html(p.entrada_value.as_deref().unwrap_or("-")),
            )
        })
        .collect();
    format!(
        "<table class=\"table\"><thead><tr><th>Punto</th><th>Salida</th><th>Entrada</th></tr></thead>\
         <tbody>{rows}</tbody></table>"
    )
}

/// Clickable thumbnail list for a case/phase photo set.
pub fn build_photo_list(urls: &[String]) -> String {
    urls.iter()
        .map(|url| {
            let escaped = escape_html(url);
            format!(
                "<a href=\"{escaped}\" target=\"_blank\"><img src=\"{escaped}\" alt=\"foto\"/></a>"
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, salida: Option<&str>, entrada: Option<&str>) -> PointView {
        PointView {
            point_key: label.to_lowercase().replace(' ', "_"),
            point_label: label.to_string(),
            salida_value: salida.map(String::from),
            entrada_value: entrada.map(String::from),
        }
    }

    #[test]
    fn field_name_round_trip() {
        let name = field_name(Phase::Salida, "frenos");
        assert_eq!(name, "salida__frenos");
        assert_eq!(split_field_name(&name), Some((Phase::Salida, "frenos")));
        assert_eq!(split_field_name("salida_by"), None);
        assert_eq!(split_field_name("salida__"), None);
    }

    #[test]
    fn extract_answers_filters_by_phase() {
        let fields = vec![
            ("salida__frenos".to_string(), "Sí".to_string()),
            ("salida__luces".to_string(), "No".to_string()),
            ("entrada__frenos".to_string(), "No Aplica".to_string()),
            ("salida_by".to_string(), "J. Doe".to_string()),
        ];
        let salida = extract_answers(Phase::Salida, &fields);
        assert_eq!(
            salida,
            vec![
                ("frenos".to_string(), "Sí".to_string()),
                ("luces".to_string(), "No".to_string()),
            ]
        );
        let entrada = extract_answers(Phase::Entrada, &fields);
        assert_eq!(entrada, vec![("frenos".to_string(), "No Aplica".to_string())]);
    }

    #[test]
    fn closed_table_empty_shows_message() {
        assert_eq!(build_closed_table(&[]), "<p>No hay puntos.</p>");
    }

    #[test]
    fn closed_table_renders_row_with_dash_for_missing() {
        let html = build_closed_table(&[point("Brakes", Some("Sí"), None)]);
        assert!(html.contains("<td>Brakes</td><td>Sí</td><td>-</td>"));
        assert!(html.contains("<th>Punto</th><th>Salida</th><th>Entrada</th>"));
    }

    #[test]
    fn salida_form_sorts_by_label_accent_insensitively() {
        let html = build_salida_form(&[
            point("Órgano", None, None),
            point("Frenos", None, None),
            point("Aceite", None, None),
        ]);
        let frenos = html.find("Frenos").unwrap();
        let aceite = html.find("Aceite").unwrap();
        let organo = html.find("Órgano").unwrap();
        assert!(aceite < frenos && frenos < organo);
    }

    #[test]
    fn entrada_form_shows_prior_salida_answer() {
        let html = build_entrada_form(&[point("Gomas", Some("No"), None)]);
        assert!(html.contains("<strong>Salida:</strong> No"));
        assert!(html.contains("name=\"entrada__gomas\""));
    }

    #[test]
    fn empty_forms_render_placeholder() {
        assert!(build_salida_form(&[]).contains("No hay puntos todavía"));
        assert!(build_entrada_form(&[]).contains("No hay puntos"));
    }

    #[test]
    fn labels_are_escaped() {
        let html = build_closed_table(&[point("<script>", None, None)]);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn photo_list_renders_thumbnails() {
        let html = build_photo_list(&["http://x/1.jpg".to_string()]);
        assert!(html.contains("href=\"http://x/1.jpg\""));
        assert!(html.contains("<img src=\"http://x/1.jpg\""));
        assert_eq!(build_photo_list(&[]), "");
    }

    #[test]
    fn current_answer_is_checked() {
        let html = build_salida_form(&[point("Bocina", Some("Sí"), None)]);
        assert!(html.contains("value=\"Sí\" checked"));
        assert!(!html.contains("value=\"No\" checked"));
    }
}
