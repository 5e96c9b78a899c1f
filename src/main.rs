//! CLI entry point for repo4llm

use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use repo4llm::{
    Document, DocumentFormatter, FilterConfig, OutputConfig, OutputFormat, TreeNode,
    build, project_title,
};
use termcolor::{BufferedStandardStream, ColorChoice, NoColor, WriteColor};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "repo4llm")]
#[command(about = "Print a filtered directory tree of a codebase for LLM context")]
#[command(version)]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Only show files matching pattern, e.g. '*.py' or '.py' (can be used multiple times)
    #[arg(short = 'i', long = "include", value_name = "PATTERN")]
    include: Vec<String>,

    /// Hide files and directories matching pattern (can be used multiple times)
    #[arg(short = 'e', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Descend at most N levels below the root's entries (0 = root entries only)
    #[arg(short = 'd', long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// Write output to FILE instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print only the tree, without project header and footer
    #[arg(long = "plain", conflicts_with = "json")]
    plain: bool,

    /// Output the tree as JSON
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

impl Args {
    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.plain {
            OutputFormat::Plain
        } else {
            OutputFormat::Context
        }
    }
}

fn fail(err: impl Display) -> ! {
    eprintln!("repo4llm: {}", err);
    process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let format = args.format();

    let config = FilterConfig::new(&args.include, &args.exclude, args.max_depth)
        .unwrap_or_else(|e| fail(e));
    log::debug!("filter config: {:?}", config);

    let tree = build(&args.directory, &config).unwrap_or_else(|e| fail(e));
    warn_unreadable(&tree, &args.directory);

    let title = match format {
        OutputFormat::Context => project_title(&args.directory),
        _ => String::new(),
    };
    let doc = Document {
        title: &title,
        root: &tree,
        root_label: tree.name(),
        included: &args.include,
    };

    let result = match &args.output {
        Some(path) => write_file(path, format, &doc),
        None => {
            let use_color = should_use_color(args.color);
            let formatter = DocumentFormatter::new(OutputConfig { format, use_color });
            let choice = if use_color {
                ColorChoice::Always
            } else {
                ColorChoice::Never
            };
            let mut stdout = BufferedStandardStream::stdout(choice);
            write_and_flush(&formatter, &mut stdout, &doc)
        }
    };

    if let Err(e) = result {
        fail(format_args!("error writing output: {}", e));
    }
}

/// Files never get color codes.
fn write_file(path: &Path, format: OutputFormat, doc: &Document<'_>) -> io::Result<()> {
    let file = File::create(path).map_err(|e| {
        io::Error::new(e.kind(), format!("cannot create '{}': {}", path.display(), e))
    })?;
    let formatter = DocumentFormatter::new(OutputConfig {
        format,
        use_color: false,
    });
    let mut out = NoColor::new(BufWriter::new(file));
    write_and_flush(&formatter, &mut out, doc)
}

fn write_and_flush<W: WriteColor>(
    formatter: &DocumentFormatter,
    out: &mut W,
    doc: &Document<'_>,
) -> io::Result<()> {
    formatter.write(out, doc)?;
    out.flush()
}

fn warn_unreadable(tree: &TreeNode, root: &Path) {
    for (path, error) in tree.unreadable_dirs(root) {
        log::warn!("cannot open directory '{}': {}", path.display(), error);
    }
}
