use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tplx_compiler::{CompileOptions, Layout, PrettyOption};

/// Command line overrides applied on top of an options file.
#[derive(Clone, Debug, Default)]
pub struct BuildFlags {
    pub options_file: Option<PathBuf>,
    pub name: Option<String>,
    pub jsx: bool,
    pub pretty: bool,
    pub indent_size: Option<usize>,
    pub initial_indent: Option<usize>,
    pub preserve_whitespace: bool,
}

/// Resolve the effective [`CompileOptions`] for `input`.
///
/// Starts from the JSON options file when given, then applies flags. The
/// component name falls back to the input's file stem.
pub fn resolve_options(input: &Path, flags: &BuildFlags) -> Result<CompileOptions> {
    let mut options = match &flags.options_file {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str::<CompileOptions>(&raw)
                .with_context(|| format!("invalid options in {}", path.display()))?
        }
        None => {
            let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("component");
            CompileOptions::new().component_name(component_name_from_stem(stem))
        }
    };

    if let Some(name) = &flags.name {
        options.component_name = name.clone();
    }
    if flags.jsx {
        options = options.jsx(true);
    }
    if flags.pretty || flags.indent_size.is_some() || flags.initial_indent.is_some() {
        let base = options.pretty.layout().unwrap_or_default();
        options.pretty = PrettyOption::Layout(Layout {
            initial_indent: flags.initial_indent.unwrap_or(base.initial_indent),
            indent_size: flags.indent_size.unwrap_or(base.indent_size),
        });
    }
    if flags.preserve_whitespace {
        options.preserve_whitespace = true;
    }
    Ok(options)
}

/// `card-list` -> `CardList`.
pub fn component_name_from_stem(stem: &str) -> String {
    let name: String = stem
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("Template{name}")
    } else {
        name
    }
}

/// Compile a template file into `<out_dir>/<stem>.js`.
pub fn build_cmd(input: &Path, out_dir: Option<&Path>, flags: &BuildFlags) -> Result<PathBuf> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let options = resolve_options(input, flags)?;

    let code = tplx_compiler::compile(&src, &options)
        .map_err(|e| anyhow::anyhow!(e.format_with_source(&src)))
        .with_context(|| format!("failed to compile {}", input.display()))?;

    let name = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("component");

    let out_dir = out_dir
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("target/tplx-gen"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let out_path = out_dir.join(format!("{}.js", name));
    fs::write(&out_path, format!("{code}\n"))
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    tracing::info!(component = %options.component_name, output = %out_path.display(), "generated");
    Ok(out_path)
}

/// Parse a template file without generating code.
pub fn check_cmd(input: &Path) -> Result<usize> {
    let src =
        fs::read_to_string(input).with_context(|| format!("failed to read {}", input.display()))?;
    let nodes = tplx_compiler::parse(&src)
        .map_err(|e| anyhow::anyhow!(e.format_with_source(&src)))
        .with_context(|| format!("{} is not a valid template", input.display()))?;
    tracing::debug!(roots = nodes.len(), "template ok");
    Ok(nodes.len())
}
