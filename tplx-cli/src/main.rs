use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tplx_cli::{BuildFlags, build_cmd, check_cmd};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tplx", version, about = "Compile placeholder templates into component functions")]
struct Cli {
    /// Log compiler internals (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a template file into a `.js` component function.
    Build {
        /// Path to the template file
        input: PathBuf,
        /// Output directory (default: target/tplx-gen)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// JSON options file (componentName, pretty, jsx, preserveWhitespace)
        #[arg(long)]
        options: Option<PathBuf>,
        /// Component function name (default: derived from the file name)
        #[arg(long)]
        name: Option<String>,
        /// Emit factory calls instead of JSX tags
        #[arg(long)]
        jsx: bool,
        /// Pretty-print with 2-space indentation
        #[arg(long)]
        pretty: bool,
        /// Indentation step for pretty output (implies --pretty)
        #[arg(long)]
        indent_size: Option<usize>,
        /// Indentation of the function itself (implies --pretty)
        #[arg(long)]
        initial_indent: Option<usize>,
        /// Keep leading/trailing whitespace in text
        #[arg(long)]
        preserve_whitespace: bool,
    },
    /// Parse a template and report the first syntax error, if any.
    Check {
        /// Path to the template file
        input: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Commands::Build {
            input,
            out_dir,
            options,
            name,
            jsx,
            pretty,
            indent_size,
            initial_indent,
            preserve_whitespace,
        } => {
            let flags = BuildFlags {
                options_file: options,
                name,
                jsx,
                pretty,
                indent_size,
                initial_indent,
                preserve_whitespace,
            };
            let out = build_cmd(&input, out_dir.as_deref(), &flags)?;
            println!("Generated: {}", out.display());
        }
        Commands::Check { input } => {
            let roots = check_cmd(&input)?;
            println!("{}: ok ({} root nodes)", input.display(), roots);
        }
    }
    Ok(())
}
