/// How a tag name is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Literal,     // <div>
    Placeholder, // <{comp}> as parsed
    Property,    // placeholder after normalization, text is `{props.comp}`
    Fragment,    // synthetic root, no tag
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRef {
    pub kind: NameKind,
    pub text: String,
}

impl NameRef {
    pub fn literal(text: impl Into<String>) -> Self {
        Self { kind: NameKind::Literal, text: text.into() }
    }

    pub fn placeholder(ident: impl Into<String>) -> Self {
        Self { kind: NameKind::Placeholder, text: ident.into() }
    }

    pub fn fragment() -> Self {
        Self { kind: NameKind::Fragment, text: String::new() }
    }

    /// Raw template spelling, used to match start and closing tags.
    pub fn raw(&self) -> String {
        match self.kind {
            NameKind::Placeholder => format!("{{{}}}", self.text),
            _ => self.text.clone(),
        }
    }

    /// For a normalized property name, the expression between the braces
    /// (`props.comp` for `{props.comp}`).
    pub fn property_expr(&self) -> Option<&str> {
        if self.kind != NameKind::Property {
            return None;
        }
        self.text.strip_prefix('{').and_then(|s| s.strip_suffix('}'))
    }

    pub fn is_fragment(&self) -> bool {
        self.kind == NameKind::Fragment
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// Raw template text with quotes stripped; may contain `{ident}` markers.
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { name: name.into(), value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Comment(String),
    Element {
        name: NameRef,
        attributes: Vec<Attribute>,
        children: Vec<Node>,
    },
    SelfClosingElement {
        name: NameRef,
        attributes: Vec<Attribute>,
    },
}

impl Node {
    pub fn is_tag(&self) -> bool {
        matches!(self, Node::Element { .. } | Node::SelfClosingElement { .. })
    }
}

/// True when `nodes` is exactly one element or self-closing element, i.e. the
/// document needs no fragment wrapper.
pub fn has_root_node(nodes: &[Node]) -> bool {
    matches!(nodes, [only] if only.is_tag())
}
