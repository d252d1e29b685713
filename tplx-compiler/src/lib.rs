//! Compile `{placeholder}` HTML templates into component functions.
//!
//! ```rust
//! use tplx_compiler::{CompileOptions, compile};
//!
//! let out = compile("<div class='{tone}'>Hi {name}</div>", &CompileOptions::default()).unwrap();
//! assert_eq!(
//!     out,
//!     "function TemplateComponent(props){return <div className={props.tone}>Hi {props.name}</div>}"
//! );
//! ```

pub mod ast;
pub mod codegen;
pub mod compile;
pub mod error;
pub mod interpolate;
pub mod normalize;
pub mod options;
pub mod parser;

pub use ast::{Attribute, NameKind, NameRef, Node, has_root_node};
pub use codegen::Generated;
pub use compile::{compile, compile_ast};
pub use error::{Position, SyntaxError, SyntaxErrorKind};
pub use interpolate::{ExprOptions, convert_text_to_expression};
pub use normalize::normalize;
pub use options::{CompileOptions, FactoryNames, JsxOption, Layout, PrettyOption};
pub use parser::parse;
