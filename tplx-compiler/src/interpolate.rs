//! Turning `{ident}` markers into `props` references, plus the indentation
//! helpers both generators share.

use once_cell::sync::Lazy;
use regex::Regex;

/// A `{...}` marker; group 1 is the text between the braces.
pub(crate) static PLACEHOLDER_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());
static VARIABLE_NAME_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[$A-Za-z][$A-Za-z0-9]*$").unwrap());

/// `n` spaces.
pub fn indent(n: usize) -> String {
    " ".repeat(n)
}

pub fn indent_content(pretty: bool, n: usize, content: &str) -> String {
    if pretty { format!("{}{content}", indent(n)) } else { content.to_string() }
}

pub fn is_valid_variable_name(name: &str) -> bool {
    VARIABLE_NAME_REGEXP.is_match(name)
}

/// Double-quoted string literal with JSON escaping.
pub fn quote_str(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

/// `props.name`, or `props["name"]` when `name` is not a plain identifier.
pub fn standardize_prop(prop: &str) -> String {
    if is_valid_variable_name(prop) {
        format!("props.{prop}")
    } else {
        format!("props[{}]", quote_str(prop))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExprOptions {
    /// Wrap an interpolated result in `{ }`.
    pub wrap_exp: bool,
    /// Quote text that has no markers at all.
    pub wrap_str: bool,
    /// Treat marker contents as prop names and emit `props` references;
    /// otherwise the contents are emitted verbatim.
    pub prefix_prop: bool,
    /// `a + b` instead of `a+b`.
    pub pretty: bool,
}

impl ExprOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrap_exp(mut self, on: bool) -> Self {
        self.wrap_exp = on;
        self
    }

    pub fn wrap_str(mut self, on: bool) -> Self {
        self.wrap_str = on;
        self
    }

    pub fn prefix_prop(mut self, on: bool) -> Self {
        self.prefix_prop = on;
        self
    }

    pub fn pretty(mut self, on: bool) -> Self {
        self.pretty = on;
        self
    }
}

/// Split `text` on `{...}` markers and join the pieces into one expression.
///
/// Literal runs become string literals (empty runs are dropped); markers
/// become `props` references or their verbatim contents depending on
/// [`ExprOptions::prefix_prop`]. Text without any marker skips the split and
/// is returned as-is or quoted.
pub fn convert_text_to_expression(text: &str, opts: ExprOptions) -> String {
    if !PLACEHOLDER_REGEXP.is_match(text) {
        return if opts.wrap_str { quote_str(text) } else { text.to_string() };
    }

    let mut parts = Vec::new();
    let mut last = 0;
    for m in PLACEHOLDER_REGEXP.find_iter(text) {
        if m.start() > last {
            parts.push(quote_str(&text[last..m.start()]));
        }
        let inner = &m.as_str()[1..m.as_str().len() - 1];
        parts.push(if opts.prefix_prop { standardize_prop(inner) } else { inner.to_string() });
        last = m.end();
    }
    if last < text.len() {
        parts.push(quote_str(&text[last..]));
    }

    let joiner = if opts.pretty { " + " } else { "+" };
    let exp = parts.join(joiner);
    if opts.wrap_exp { format!("{{{exp}}}") } else { exp }
}
