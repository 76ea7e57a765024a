// HTML for the scanner page

use inventory_domain::StatusIntent;

const SCAN_FORM_TEMPLATE: &str = include_str!("./static/scan_form.html");
const ERROR_PAGE_TEMPLATE: &str = include_str!("./static/error_page.html");

pub const TEAMS: [(&str, &str); 2] = [("Crimson", "Crimson 12864"), ("Black", "Black 9686")];
const INTENTS: [(StatusIntent, &str); 2] = [
    (StatusIntent::CheckOut, "Check Out"),
    (StatusIntent::CheckIn, "Check In"),
];

#[derive(Debug, Default, Clone)]
pub struct FormView<'a> {
    pub barcode: &'a str,
    pub user: &'a str,
    pub team: &'a str,
    pub intent: Option<StatusIntent>,
    pub error: &'a str,
    pub status: &'a str,
}

pub fn render_form(view: &FormView<'_>) -> String {
    fill(
        SCAN_FORM_TEMPLATE,
        &[
            ("barcode_attr", text_attr(view.barcode, "Barcode")),
            ("user_attr", text_attr(view.user, "Name")),
            ("team_options", team_options(view.team)),
            ("status_options", intent_options(view.intent)),
            ("error", escape_html(view.error)),
            ("status", escape_html(view.status)),
        ],
    )
}

pub fn render_error_page(message: &str) -> String {
    fill(ERROR_PAGE_TEMPLATE, &[("message", escape_html(message))])
}

fn text_attr(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        format!("placeholder=\"{}\"", placeholder)
    } else {
        format!("value=\"{}\"", escape_html(value))
    }
}

fn team_options(selected: &str) -> String {
    TEAMS
        .iter()
        .map(|(value, label)| option(value, label, *value == selected))
        .collect::<Vec<_>>()
        .join("\n")
}

fn intent_options(selected: Option<StatusIntent>) -> String {
    INTENTS
        .iter()
        .map(|(intent, label)| option(intent.as_str(), label, Some(*intent) == selected))
        .collect::<Vec<_>>()
        .join("\n")
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        "      <option value=\"{}\"{}>{}</option>",
        escape_html(value),
        if selected { " selected" } else { "" },
        escape_html(label)
    )
}

// Single pass, so substituted text is never scanned again.
fn fill(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let name = &after[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
