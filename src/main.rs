//! CLI entry point for memspace

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use memspace::{
    Config, DiskUsage, Item, Result, Size, TreeRenderer, TreeWalker, print_disk_usage, print_json,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

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
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "memspace")]
#[command(about = "Show disk usage of a directory as an annotated tree")]
#[command(version)]
struct Args {
    /// The base path to start scanning from
    #[arg(short, long, default_value = ".")]
    path: PathBuf,

    /// Only show directories
    #[arg(short, long)]
    dir: bool,

    /// Show files (and directories) recursively
    #[arg(short, long)]
    recursive: bool,

    /// The depth of recursion (negative for unlimited)
    #[arg(short = 'e', long, allow_negative_numbers = true)]
    depth: Option<i64>,

    /// Show only files or directories at least this large (e.g. 10MB, 1gb)
    #[arg(short, long, value_name = "SIZE")]
    threshold: Option<String>,

    /// Show filesystem usage for the base path before the tree
    #[arg(short, long)]
    memory: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print the walked tree as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config(&self) -> Result<Config> {
        let threshold = Size::parse_threshold(self.threshold.as_deref().unwrap_or(""))?;
        // Negative depths mean unlimited.
        let depth = self.depth.and_then(|d| usize::try_from(d).ok());

        Ok(Config {
            base_path: self.path.clone(),
            directory_only: self.dir,
            recursive: self.recursive,
            depth,
            threshold,
            show_memory: self.memory,
        })
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = args.to_config()?;
    config.validate()?;
    debug!(?config, "resolved configuration");

    let use_color = should_use_color(args.color);

    if config.show_memory {
        let usage = DiskUsage::for_path(&config.base_path)?;
        print_disk_usage(&usage, use_color)?;
    }

    let mut root = Item::root(&config.base_path);
    let mut walker = TreeWalker::new();
    walker.walk(&mut root, &config.base_path)?;

    if args.json {
        return print_json(&root);
    }

    TreeRenderer::new(config.render_config(use_color)).print(&root)?;
    Ok(())
}

fn main() {
    init_logging();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("memspace: {}", e);
        process::exit(1);
    }
}
