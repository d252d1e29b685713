use crate::ast::{Attribute, NameKind, NameRef, Node};
use crate::codegen::{ATTR_WRAP_THRESHOLD, Generated, rooted};
use crate::interpolate::{
    ExprOptions, convert_text_to_expression, indent, is_valid_variable_name, quote_str, standardize_prop,
};
use crate::options::FactoryNames;

const FRAGMENT_ALIAS: &str = "frg";
const NESTED_ALIAS: &str = "jsx";
const ROOT_ALIAS: &str = "jsxs";

/// `const frg=...;const jsx=...;const jsxs=...;`, one set per function.
pub fn alias_statements(names: &FactoryNames, pretty: bool, indent_at: usize) -> String {
    let sp = if pretty { " " } else { "" };
    let statements = [
        format!("const {FRAGMENT_ALIAS}{sp}={sp}{};", names.fragment),
        format!("const {NESTED_ALIAS}{sp}={sp}{};", names.jsx),
        format!("const {ROOT_ALIAS}{sp}={sp}{};", names.jsxs),
    ];
    if !pretty {
        return statements.concat();
    }
    statements
        .iter()
        .map(|s| format!("\n{}{s}", indent(indent_at)))
        .collect()
}

struct Ctx {
    pretty: bool,
    indent_size: usize,
}

impl Ctx {
    fn space(&self) -> &'static str {
        if self.pretty { " " } else { "" }
    }
}

/// Render `root` as `jsxs(tag, attrs, [children])`.
pub fn build(root: &Node, names: &FactoryNames, pretty: bool, indent_at: usize, indent_size: usize) -> Generated {
    let ctx = Ctx { pretty, indent_size };
    let root = rooted(root);
    let code = render(&ctx, &root, indent_at, true);
    tracing::debug!(fragment = %names.fragment, jsx = %names.jsx, "rendered factory calls");
    Generated { code, injected_code: alias_statements(names, pretty, indent_at) }
}

fn render(ctx: &Ctx, node: &Node, indent_at: usize, is_root: bool) -> String {
    match node {
        Node::Comment(_) => String::new(),
        Node::Text(value) => convert_text_to_expression(
            value,
            ExprOptions::new().pretty(ctx.pretty).wrap_str(true),
        ),
        Node::Element { name, attributes, children } => {
            let kids = render_children(ctx, children, indent_at + ctx.indent_size);
            element_call(ctx, name, attributes, kids, indent_at, is_root)
        }
        Node::SelfClosingElement { name, attributes } => {
            element_call(ctx, name, attributes, "[]".to_string(), indent_at, is_root)
        }
    }
}

fn element_call(
    ctx: &Ctx,
    name: &NameRef,
    attributes: &[Attribute],
    children: String,
    indent_at: usize,
    is_root: bool,
) -> String {
    let factory = if is_root { ROOT_ALIAS } else { NESTED_ALIAS };
    let sp = ctx.space();
    let attrs = render_attributes(ctx, attributes, indent_at + ctx.indent_size);
    format!("{factory}({},{sp}{attrs},{sp}{children})", tag_arg(name))
}

fn tag_arg(name: &NameRef) -> String {
    match name.kind {
        NameKind::Literal => quote_str(&name.text),
        NameKind::Fragment => FRAGMENT_ALIAS.to_string(),
        NameKind::Property => name.property_expr().unwrap_or(&name.text).to_string(),
        NameKind::Placeholder => standardize_prop(&name.text),
    }
}

fn property_key(name: &str) -> String {
    if is_valid_variable_name(name) { name.to_string() } else { quote_str(name) }
}

fn render_attributes(ctx: &Ctx, attributes: &[Attribute], indent_at: usize) -> String {
    if attributes.is_empty() {
        return "null".to_string();
    }
    let sp = ctx.space();
    let opts = ExprOptions::new().pretty(ctx.pretty).prefix_prop(true).wrap_str(true);
    let entries: Vec<String> = attributes
        .iter()
        .map(|a| {
            format!(
                "{}:{sp}{}",
                property_key(&a.name),
                convert_text_to_expression(&a.value, opts)
            )
        })
        .collect();

    if !ctx.pretty || entries.concat().len() <= ATTR_WRAP_THRESHOLD {
        return format!("{{{sp}{}{sp}}}", entries.join(&format!(",{sp}")));
    }
    let leading = format!("\n{}", indent(indent_at));
    format!(
        "{{{leading}{}\n{}}}",
        entries.join(&format!(",{leading}")),
        indent(indent_at - ctx.indent_size)
    )
}

fn render_children(ctx: &Ctx, children: &[Node], indent_at: usize) -> String {
    let items: Vec<String> = children
        .iter()
        .map(|child| render(ctx, child, indent_at, false))
        .filter(|item| !item.is_empty())
        .collect();
    if items.is_empty() {
        return "[]".to_string();
    }
    if !ctx.pretty {
        return format!("[{}]", items.join(","));
    }
    let leading = format!("\n{}", indent(indent_at));
    format!(
        "[{leading}{}\n{}]",
        items.join(&format!(",{leading}")),
        indent(indent_at - ctx.indent_size)
    )
}
