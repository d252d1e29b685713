//! Options accepted by [`compile`](crate::compile).
//!
//! The option surface is loosely typed on purpose so it can be read from
//! JSON the same way it is written by hand:
//!
//! ```json
//! { "componentName": "Card", "pretty": 4, "jsx": { "jsx": "h" } }
//! ```
//!
//! `pretty` accepts `false`, `true` (2-space indent), a bare indent size, or
//! `{ "initialIndent": n, "indentSize": m }`. `jsx` accepts `false`, `true`,
//! or an object overriding any of the factory names.

use serde::Deserialize;

pub const DEFAULT_COMPONENT_NAME: &str = "TemplateComponent";
pub const DEFAULT_INDENT_SIZE: usize = 2;

/// Indentation used in pretty mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub initial_indent: usize,
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Self { initial_indent: 0, indent_size: DEFAULT_INDENT_SIZE }
    }
}

fn default_indent_size() -> usize {
    DEFAULT_INDENT_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PrettyOption {
    Flag(bool),
    IndentSize(usize),
    Layout(Layout),
}

impl Default for PrettyOption {
    fn default() -> Self {
        PrettyOption::Flag(false)
    }
}

impl PrettyOption {
    /// `None` means compact output.
    pub fn layout(&self) -> Option<Layout> {
        match *self {
            PrettyOption::Flag(false) => None,
            PrettyOption::Flag(true) => Some(Layout::default()),
            PrettyOption::IndentSize(indent_size) => Some(Layout { initial_indent: 0, indent_size }),
            PrettyOption::Layout(layout) => Some(layout),
        }
    }
}

/// Values bound to the `frg`, `jsx` and `jsxs` aliases in factory-call output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactoryNames {
    pub fragment: String,
    pub jsx: String,
    pub jsxs: String,
}

impl Default for FactoryNames {
    fn default() -> Self {
        Self {
            fragment: "React.Fragment".to_string(),
            jsx: "React.createElement".to_string(),
            jsxs: "React.createElement".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum JsxOption {
    Flag(bool),
    Names(FactoryNames),
}

impl Default for JsxOption {
    fn default() -> Self {
        JsxOption::Flag(false)
    }
}

impl JsxOption {
    /// `Some` selects factory-call output.
    pub fn factory_names(&self) -> Option<FactoryNames> {
        match self {
            JsxOption::Flag(false) => None,
            JsxOption::Flag(true) => Some(FactoryNames::default()),
            JsxOption::Names(names) => Some(names.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    pub component_name: String,
    pub pretty: PrettyOption,
    pub jsx: JsxOption,
    /// Keep leading/trailing whitespace of text nodes. Not honoured when both
    /// `pretty` and `jsx` are on.
    pub preserve_whitespace: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            component_name: DEFAULT_COMPONENT_NAME.to_string(),
            pretty: PrettyOption::default(),
            jsx: JsxOption::default(),
            preserve_whitespace: false,
        }
    }
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component_name(mut self, name: impl Into<String>) -> Self {
        self.component_name = name.into();
        self
    }

    pub fn pretty(mut self, on: bool) -> Self {
        self.pretty = PrettyOption::Flag(on);
        self
    }

    pub fn indent(mut self, initial_indent: usize, indent_size: usize) -> Self {
        self.pretty = PrettyOption::Layout(Layout { initial_indent, indent_size });
        self
    }

    pub fn jsx(mut self, on: bool) -> Self {
        self.jsx = JsxOption::Flag(on);
        self
    }

    pub fn factory_names(mut self, names: FactoryNames) -> Self {
        self.jsx = JsxOption::Names(names);
        self
    }

    pub fn preserve_whitespace(mut self, on: bool) -> Self {
        self.preserve_whitespace = on;
        self
    }

    /// Whitespace preservation after the pretty+jsx override.
    pub fn effective_preserve_whitespace(&self) -> bool {
        let pretty_jsx = self.pretty.layout().is_some() && self.jsx.factory_names().is_some();
        self.preserve_whitespace && !pretty_jsx
    }
}
