use crate::ast::{NameRef, Node};
use crate::codegen::{Generated, factory, jsx_text};
use crate::error::Result;
use crate::interpolate::indent;
use crate::normalize::normalize;
use crate::options::{CompileOptions, Layout};
use crate::parser::parse;

/// Public API: compile a template into the source of a component function
/// `function <componentName>(props) { ... }`.
pub fn compile(template: &str, options: &CompileOptions) -> Result<String> {
    let nodes = parse(template)?;
    Ok(compile_ast(nodes, options))
}

/// Normalize and generate from an already parsed tree.
pub fn compile_ast(nodes: Vec<Node>, options: &CompileOptions) -> String {
    let layout = options.pretty.layout();
    let pretty = layout.is_some();
    let Layout { initial_indent, indent_size } = layout.unwrap_or_default();
    let body_indent = initial_indent + indent_size;

    let root = normalize(nodes, options.effective_preserve_whitespace())
        .into_iter()
        .next()
        .unwrap_or_else(|| Node::Element {
            name: NameRef::fragment(),
            attributes: Vec::new(),
            children: Vec::new(),
        });

    let generated = match options.jsx.factory_names() {
        Some(names) => factory::build(&root, &names, pretty, body_indent, indent_size),
        None => jsx_text::build(&root, pretty, body_indent, indent_size),
    };
    tracing::debug!(
        component = %options.component_name,
        pretty,
        factory = options.jsx.factory_names().is_some(),
        "compiled template"
    );
    wrap_function(&options.component_name, &generated, pretty, initial_indent, body_indent)
}

fn wrap_function(name: &str, generated: &Generated, pretty: bool, outer: usize, inner: usize) -> String {
    let Generated { code, injected_code } = generated;
    if !pretty {
        return format!("function {name}(props){{{injected_code}return {code}}}");
    }
    format!(
        "{o}function {name}(props) {{{injected_code}\n{i}return {code}\n{o}}}",
        o = indent(outer),
        i = indent(inner),
    )
}
