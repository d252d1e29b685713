use once_cell::sync::Lazy;
use pest::Parser;
use pest::iterators::Pair;
use regex::Regex;

use crate::ast::{Attribute, NameRef, Node};
use crate::error::{Position, Result, SyntaxError, SyntaxErrorKind};

#[derive(pest_derive::Parser)]
#[grammar = "template.pest"]
struct TemplateParser;

// Comments, closing tags (group 1), opening tags (group 2, `/` in group 3),
// and a lone `<` that starts none of them.
static TAG_SCAN_REGEXP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?s)<!--.*?-->",
        r"|</([A-Za-z][A-Za-z0-9_-]*|\{[A-Za-z][A-Za-z0-9_]*\})>",
        r#"|<([A-Za-z][A-Za-z0-9_-]*|\{[A-Za-z][A-Za-z0-9_]*\})(?:\s+[A-Za-z][A-Za-z0-9_-]*=(?:"[^"]*"|'[^']*'))*\s*(/?)>"#,
        r"|<",
    ))
    .unwrap()
});

/// Parse a template into its root-level nodes.
///
/// Supports:
/// - nested elements and self-closing tags (`<br/>`)
/// - placeholder tag names (`<{comp}>...</{comp}>`)
/// - attributes with either quote style, values kept verbatim
/// - comments and text; text runs until the next `<`
pub fn parse(input: &str) -> Result<Vec<Node>> {
    let mut pairs = TemplateParser::parse(Rule::template, input)
        .map_err(|e| find_mismatched_close(input).unwrap_or_else(|| SyntaxError::from_pest(input, e)))?;
    let Some(template) = pairs.next() else {
        return Ok(Vec::new());
    };

    let mut roots = Vec::new();
    for pair in template.into_inner() {
        if pair.as_rule() == Rule::document {
            roots = build_document(pair, input)?;
        }
    }
    tracing::debug!(roots = roots.len(), bytes = input.len(), "parsed template");
    Ok(roots)
}

fn build_document(document: Pair<Rule>, src: &str) -> Result<Vec<Node>> {
    document
        .into_inner()
        .map(|pair| build_node(pair, src))
        .collect()
}

fn build_node(pair: Pair<Rule>, src: &str) -> Result<Node> {
    match pair.as_rule() {
        Rule::text => Ok(Node::Text(pair.as_str().to_string())),
        Rule::comment => {
            let body = pair
                .into_inner()
                .next()
                .map(|b| b.as_str().to_string())
                .unwrap_or_default();
            Ok(Node::Comment(body))
        }
        Rule::tag => build_tag(pair, src),
        Rule::self_closing_tag => {
            let mut name = None;
            let mut attributes = Vec::new();
            for part in pair.into_inner() {
                match part.as_rule() {
                    Rule::literal_name | Rule::placeholder => name = Some(build_name(part, src)?),
                    Rule::attribute => attributes.push(build_attribute(part)),
                    _ => {}
                }
            }
            Ok(Node::SelfClosingElement { name: name.ok_or_else(|| missing_name(src))?, attributes })
        }
        other => Err(SyntaxError::new(
            SyntaxErrorKind::Unexpected,
            Position::from_offset(src, pair.as_span().start()),
            format!("unexpected {other:?}"),
        )),
    }
}

fn build_tag(pair: Pair<Rule>, src: &str) -> Result<Node> {
    let mut name: Option<NameRef> = None;
    let mut attributes = Vec::new();
    let mut children = Vec::new();

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::literal_name | Rule::placeholder => name = Some(build_name(part, src)?),
            Rule::attribute => attributes.push(build_attribute(part)),
            Rule::document => children = build_document(part, src)?,
            Rule::close_tag => {
                let opened = name.as_ref().ok_or_else(|| missing_name(src))?;
                let start = part.as_span().start();
                // raw text comparison: `{p1}` only closes `{p1}`
                let closing = part
                    .into_inner()
                    .next()
                    .map(|n| n.as_str().to_string())
                    .unwrap_or_default();
                if closing != opened.raw() {
                    return Err(SyntaxError::new(
                        SyntaxErrorKind::MismatchedTag,
                        Position::from_offset(src, start),
                        format!("expected </{}> but found </{}>", opened.raw(), closing),
                    ));
                }
            }
            _ => {}
        }
    }

    Ok(Node::Element { name: name.ok_or_else(|| missing_name(src))?, attributes, children })
}

fn build_name(pair: Pair<Rule>, src: &str) -> Result<NameRef> {
    match pair.as_rule() {
        Rule::placeholder => {
            let ident = pair
                .into_inner()
                .next()
                .map(|i| i.as_str().to_string())
                .unwrap_or_default();
            Ok(NameRef::placeholder(ident))
        }
        _ => {
            let name = pair.as_str();
            if name.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(SyntaxError::new(
                    SyntaxErrorKind::UppercaseTag,
                    Position::from_offset(src, pair.as_span().start()),
                    format!("tag name `{name}` must be lowercase"),
                ));
            }
            Ok(NameRef::literal(name))
        }
    }
}

fn build_attribute(attr: Pair<Rule>) -> Attribute {
    // attribute = name "=" quoted
    let mut name = String::new();
    let mut value = String::new();

    for part in attr.into_inner() {
        match part.as_rule() {
            Rule::attr_name => name = part.as_str().to_string(),
            Rule::double_quoted | Rule::single_quoted => {
                value = part
                    .into_inner()
                    .next()
                    .map(|v| v.as_str().to_string())
                    .unwrap_or_default();
            }
            _ => {}
        }
    }
    Attribute { name, value }
}

/// Walk the tags of a template the grammar rejected and report the first
/// closing tag that does not close the innermost open tag.
///
/// A nested `</div>` closing a `<span>` leaves the outer tag unterminated, so
/// the grammar only sees a generic failure further on. Returns `None` when the
/// walk reaches a `<` it cannot read as a tag, leaving the grammar's report.
fn find_mismatched_close(src: &str) -> Option<SyntaxError> {
    let mut open: Vec<&str> = Vec::new();
    for caps in TAG_SCAN_REGEXP.captures_iter(src) {
        let whole = caps.get(0)?;
        if let Some(closing) = caps.get(1) {
            let expected = open.pop()?;
            if expected != closing.as_str() {
                tracing::debug!(expected, found = closing.as_str(), "mismatched closing tag");
                return Some(SyntaxError::new(
                    SyntaxErrorKind::MismatchedTag,
                    Position::from_offset(src, whole.start()),
                    format!("expected </{expected}> but found </{}>", closing.as_str()),
                ));
            }
        } else if let Some(name) = caps.get(2) {
            if caps.get(3).is_some_and(|slash| slash.as_str().is_empty()) {
                open.push(name.as_str());
            }
        } else if !whole.as_str().starts_with("<!--") {
            return None;
        }
    }
    None
}

fn missing_name(src: &str) -> SyntaxError {
    SyntaxError::new(
        SyntaxErrorKind::Unexpected,
        Position::from_offset(src, 0),
        "tag without a name",
    )
}
