use regex::Captures;

use crate::ast::{Attribute, NameKind, NameRef, Node, has_root_node};
use crate::interpolate::{PLACEHOLDER_REGEXP, standardize_prop};

/// JSX spelling of HTML attribute names that differ.
pub fn map_attribute_name(name: &str) -> &str {
    match name {
        "class" => "className",
        "for" => "htmlFor",
        other => other,
    }
}

/// The braced property reference that stands in for `{ident}` after
/// normalization, e.g. `{props.title}`.
pub fn prop_marker(ident: &str) -> String {
    format!("{{{}}}", standardize_prop(ident))
}

/// Prepare a parsed tree for code generation.
///
/// Drops comments, rewrites text placeholders and placeholder tag names into
/// property markers, maps attribute names, trims text unless
/// `preserve_whitespace` is set, and wraps the result in a fragment when it
/// does not have exactly one element at the root.
pub fn normalize(nodes: Vec<Node>, preserve_whitespace: bool) -> Vec<Node> {
    let normalized = normalize_nodes(nodes, preserve_whitespace);
    if has_root_node(&normalized) {
        tracing::debug!("normalized tree has its own root");
        return normalized;
    }
    tracing::debug!(children = normalized.len(), "wrapping roots in a fragment");
    vec![Node::Element {
        name: NameRef::fragment(),
        attributes: Vec::new(),
        children: normalized,
    }]
}

fn normalize_nodes(nodes: Vec<Node>, preserve_whitespace: bool) -> Vec<Node> {
    nodes
        .into_iter()
        .filter_map(|n| normalize_node(n, preserve_whitespace))
        .collect()
}

fn normalize_node(node: Node, preserve_whitespace: bool) -> Option<Node> {
    match node {
        Node::Comment(_) => None,
        Node::Text(value) => {
            // every marker becomes a props lookup, never raw code
            let value = PLACEHOLDER_REGEXP
                .replace_all(&value, |caps: &Captures| prop_marker(&caps[1]))
                .into_owned();
            let value = if preserve_whitespace { value } else { value.trim().to_string() };
            if value.is_empty() { None } else { Some(Node::Text(value)) }
        }
        Node::Element { name, attributes, children } => Some(Node::Element {
            name: normalize_name(name),
            attributes: normalize_attributes(attributes),
            children: normalize_nodes(children, preserve_whitespace),
        }),
        Node::SelfClosingElement { name, attributes } => Some(Node::SelfClosingElement {
            name: normalize_name(name),
            attributes: normalize_attributes(attributes),
        }),
    }
}

fn normalize_name(name: NameRef) -> NameRef {
    match name.kind {
        NameKind::Placeholder => NameRef { kind: NameKind::Property, text: prop_marker(&name.text) },
        _ => name,
    }
}

fn normalize_attributes(attributes: Vec<Attribute>) -> Vec<Attribute> {
    attributes
        .into_iter()
        .map(|a| Attribute { name: map_attribute_name(&a.name).to_string(), value: a.value })
        .collect()
}
