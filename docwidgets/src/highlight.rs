//! JSON example rendering.
//!
//! Independent of the widget coordination: runs once per marked example node
//! at page-ready time, escaping markup-special characters and wrapping
//! recognized JSON tokens in per-class span markup for styling.

use std::sync::OnceLock;

use docdom::{Role, Tree};
use regex::{Captures, Regex};

/// One alternation per token class: strings (optionally followed by a colon,
/// which makes them keys), the bare literals, and numbers.
const TOKEN_PATTERN: &str = r#""(\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(\s*:)?|\b(true|false|null)\b|-?\d+(?:\.\d*)?(?:[eE][+\-]?\d+)?"#;

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"))
}

fn token_class(token: &str) -> &'static str {
    if token.starts_with('"') {
        if token.ends_with(':') { "key" } else { "string" }
    } else if token == "true" || token == "false" {
        "boolean"
    } else if token == "null" {
        "null"
    } else {
        "number"
    }
}

/// Escape markup-special characters and wrap each recognized token in a
/// `<span class="...">` with class `key`, `string`, `number`, `boolean` or
/// `null`.
pub fn highlight_json(source: &str) -> String {
    let escaped = source
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");

    token_regex()
        .replace_all(&escaped, |caps: &Captures<'_>| {
            let token = &caps[0];
            format!("<span class=\"{}\">{token}</span>", token_class(token))
        })
        .into_owned()
}

/// Rewrite the text of every JSON example node in place. Called once at
/// page-ready time; has no interaction with the coordination logic.
pub fn render_json_examples(tree: &mut Tree) {
    let examples = tree.descendants_with_role(tree.root(), Role::JsonExample);
    log::debug!("[highlight] rendering {} json examples", examples.len());
    for node in examples {
        if let Some(source) = tree.text(node).map(str::to_owned) {
            tree.set_text(node, highlight_json(&source));
        }
    }
}
