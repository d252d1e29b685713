use crate::ast::{Attribute, NameKind, NameRef, Node};
use crate::codegen::{ATTR_WRAP_THRESHOLD, Generated, rooted};
use crate::interpolate::{ExprOptions, convert_text_to_expression, indent, indent_content, standardize_prop};

/// Local bindings for property tag names.
///
/// JSX only accepts an identifier or member expression in tag position, so
/// `<{comp}>` is emitted as `const C$c0 = props.comp;` followed by `<C$c0>`.
/// Bindings are numbered in first-use order and reused per property.
#[derive(Debug, Default)]
pub struct HoistTable {
    bindings: Vec<(String, String)>,
}

impl HoistTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding for the property expression `expr`, allocating the next
    /// `C$c<N>` on first use.
    pub fn binding_for(&mut self, expr: &str) -> String {
        if let Some((_, binding)) = self.bindings.iter().find(|(e, _)| e == expr) {
            return binding.clone();
        }
        let binding = format!("C$c{}", self.bindings.len());
        tracing::trace!(%binding, property = expr, "hoisting dynamic tag");
        self.bindings.push((expr.to_string(), binding.clone()));
        binding
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }

    /// `const C$c0=props.comp;` statements in allocation order.
    pub fn statements(&self, pretty: bool, indent_by: usize) -> String {
        self.bindings
            .iter()
            .map(|(expr, binding)| {
                if pretty {
                    format!("\n{}const {binding} = {expr};", indent(indent_by))
                } else {
                    format!("const {binding}={expr};")
                }
            })
            .collect()
    }
}

struct Ctx {
    pretty: bool,
    indent_size: usize,
    hoist: HoistTable,
}

/// Render `root` as JSX. `indent_at` is the column of the root expression.
pub fn build(root: &Node, pretty: bool, indent_at: usize, indent_size: usize) -> Generated {
    let mut ctx = Ctx { pretty, indent_size, hoist: HoistTable::new() };
    let root = rooted(root);
    let content = render(&mut ctx, &root, indent_at).trim().to_string();
    let code = if pretty && !content.is_empty() { format!("({content})") } else { content };
    tracing::debug!(hoisted = ctx.hoist.len(), "rendered jsx text");
    Generated { code, injected_code: ctx.hoist.statements(pretty, indent_at) }
}

fn render(ctx: &mut Ctx, node: &Node, indent_at: usize) -> String {
    let leading = if ctx.pretty { format!("\n{}", indent(indent_at)) } else { String::new() };
    let inner_indent = indent_at + ctx.indent_size;
    match node {
        Node::Comment(_) => String::new(),
        Node::Text(value) => {
            let text = if ctx.pretty { value.clone() } else { value.replace('\n', "\\n") };
            format!("{leading}{text}")
        }
        Node::SelfClosingElement { name, attributes } => {
            let (_, open) = open_tag(ctx, name, attributes, inner_indent);
            format!("{leading}<{open}/>")
        }
        Node::Element { name, attributes, children } => {
            let (tag, open) = open_tag(ctx, name, attributes, inner_indent);
            if children.is_empty() {
                return format!("{leading}<{open}></{tag}>");
            }
            let inner: String = children
                .iter()
                .map(|child| render(ctx, child, inner_indent))
                .collect();
            format!("{leading}<{open}>{inner}{leading}</{tag}>")
        }
    }
}

fn tag_name(ctx: &mut Ctx, name: &NameRef) -> String {
    match name.kind {
        NameKind::Literal => name.text.clone(),
        NameKind::Fragment => String::new(),
        NameKind::Property => match name.property_expr() {
            Some(expr) => ctx.hoist.binding_for(expr),
            None => name.text.clone(),
        },
        NameKind::Placeholder => ctx.hoist.binding_for(&standardize_prop(&name.text)),
    }
}

/// Returns the bare tag and the tag followed by its attributes.
fn open_tag(ctx: &mut Ctx, name: &NameRef, attributes: &[Attribute], attr_indent: usize) -> (String, String) {
    let tag = tag_name(ctx, name);
    let opts = ExprOptions::new()
        .pretty(ctx.pretty)
        .prefix_prop(true)
        .wrap_str(true)
        .wrap_exp(true);
    let attrs: Vec<String> = attributes
        .iter()
        .map(|a| format!("{}={}", a.name, convert_text_to_expression(&a.value, opts)))
        .collect();
    let inline = attrs.join(" ");

    if inline.is_empty() {
        return (tag.clone(), tag);
    }
    if ctx.pretty && inline.len() > ATTR_WRAP_THRESHOLD {
        let lines: Vec<String> = attrs
            .iter()
            .map(|a| indent_content(true, attr_indent, a))
            .collect();
        let open = format!(
            "{tag}\n{}\n{}",
            lines.join("\n"),
            indent(attr_indent - ctx.indent_size)
        );
        return (tag, open);
    }
    let open = format!("{tag} {inline}");
    (tag, open)
}
