//! CLI entry point for bough

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use bough::{BoughError, OutputConfig, TreeFormatter, TreeWalker, WalkerConfig, print_json};
use clap::{Parser, ValueEnum};

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
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "bough")]
#[command(about = "Display a directory tree with box-drawing connectors")]
#[command(version)]
struct Args {
    /// Directory or file to display
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Skip entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Omit the trailing "N directories, M files" report
    #[arg(long = "no-report")]
    no_report: bool,
}

fn main() {
    let args = Args::parse();

    let walker_config = WalkerConfig {
        max_depth: args.level,
        dirs_only: args.dirs_only,
        ignore_patterns: args.ignore.clone(),
    };

    let root = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(&args.path)
    };

    let walker = TreeWalker::new(walker_config);
    let tree = match walker.walk(&root) {
        Ok(tree) => tree,
        Err(BoughError::NotFound(_)) => {
            // Report the path as the user typed it, not the resolved one.
            eprintln!(
                "bough: cannot access '{}': No such file or directory",
                args.path.display()
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("bough: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_json(&tree)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            show_report: !args.no_report,
        };
        TreeFormatter::new(output_config).print(&tree)
    };

    if let Err(e) = result {
        eprintln!("bough: error writing output: {}", e);
        process::exit(1);
    }
}
