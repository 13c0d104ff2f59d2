//! CLI entry point for repotext

use std::collections::VecDeque;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser, ValueEnum};
use repotext::config::{DEFAULT_EXTENSIONS, DEFAULT_OUTPUT_FILE};
use repotext::{Config, OutputConfig, RuleSet, RunSummary, SourceConfig};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

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

/// Determine whether to color the completion notice on stderr.
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
            std::io::stderr().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "repotext")]
#[command(about = "Write a repository's file tree and file contents into one text file")]
#[command(version)]
struct Args {
    /// Repository to read (same as --repo-path)
    ///
    /// Positionals fill the slots the flags leave open, in order: with
    /// --repo-path given, the first positional is the output file.
    #[arg(value_name = "REPO_PATH")]
    repo_path: Option<PathBuf>,

    /// File to write (same as --output-file-path)
    #[arg(value_name = "OUTPUT_FILE_PATH")]
    output_file_path: Option<PathBuf>,

    /// Extensions whose content is included, in addition to --extensions
    #[arg(value_name = "EXTENSIONS")]
    positional_extensions: Vec<String>,

    /// Path to the repository [default: .]
    #[arg(short = 'r', long = "repo-path", value_name = "PATH")]
    repo_path_flag: Option<PathBuf>,

    /// Path to the output file [default: output.txt]
    #[arg(short = 'o', long = "output-file-path", value_name = "PATH")]
    output_file_path_flag: Option<PathBuf>,

    /// File extensions whose content is included [default: .ts .tsx]
    #[arg(
        short = 'e',
        long = "extensions",
        value_name = "EXT",
        num_args = 1..,
        value_delimiter = ','
    )]
    extensions: Vec<String>,

    /// Include all files and disable every exclusion
    #[arg(short = 'a', long = "include-all", visible_alias = "all")]
    include_all: bool,

    /// Exclude paths matching PATTERN (can be used multiple times)
    /// `dir/` excludes a directory prefix, `name` a suffix, `*.ext` a glob
    #[arg(short = 'x', long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Always include paths containing PATTERN (can be used multiple times)
    #[arg(short = 'i', long = "include", value_name = "PATTERN")]
    include: Vec<String>,

    /// Start from an empty exclusion list instead of the built-in one
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Walk the directory even inside a git repository
    #[arg(long = "no-git")]
    no_git: bool,

    /// Also write an "===== END <path> =====" line after each file
    #[arg(long = "end-markers")]
    end_markers: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn into_config(self) -> Config {
        let mut rules = RuleSet::default();
        if self.no_default_excludes {
            rules.exclusions.clear();
        }
        rules.exclusions.extend(self.exclude);
        rules.inclusions.extend(self.include);
        rules.include_all = self.include_all;

        // clap assigns positionals left to right; shift them past the slots
        // already taken by a flag.
        let mut positionals: VecDeque<PathBuf> =
            self.repo_path.into_iter().chain(self.output_file_path).collect();
        let repo_path = self
            .repo_path_flag
            .or_else(|| positionals.pop_front())
            .unwrap_or_else(|| PathBuf::from("."));
        let output_path = self
            .output_file_path_flag
            .or_else(|| positionals.pop_front())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let extensions: Vec<String> = positionals
            .into_iter()
            .map(|p| p.to_string_lossy().into_owned())
            .chain(self.positional_extensions)
            .chain(self.extensions)
            .collect();
        rules = if extensions.is_empty() {
            rules.with_extensions(DEFAULT_EXTENSIONS.iter())
        } else {
            rules.with_extensions(extensions)
        };

        Config {
            repo_path,
            output_path,
            rules,
            output: OutputConfig {
                end_markers: self.end_markers,
                ..Default::default()
            },
            source: SourceConfig {
                force_walk: self.no_git,
            },
        }
    }
}

/// Parse arguments; usage errors exit with status 1.
fn parse_args() -> Args {
    let matches = Args::command().try_get_matches().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            let _ = e.print();
            process::exit(1);
        }
    });
    Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("repotext: argument parsing error: {}", e);
        process::exit(1);
    })
}

/// Install the stderr log subscriber. RUST_LOG always takes precedence;
/// --verbose falls back to DEBUG, otherwise WARN.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .with(filter)
        .try_init();
}

fn print_completion(summary: &RunSummary, config: &Config, use_color: bool) -> std::io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stderr = StandardStream::stderr(choice);
    stderr.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stderr, "Processing completed!")?;
    stderr.reset()?;
    writeln!(
        stderr,
        " {} files listed, {} written to {} (from {})",
        summary.listed,
        summary.written,
        config.output_path.display(),
        summary.source
    )
}

fn main() {
    let args = parse_args();
    init_logging(args.verbose);
    let use_color = should_use_color(args.color);
    let config = args.into_config();

    match repotext::run(&config) {
        Ok(summary) => {
            if let Err(e) = print_completion(&summary, &config, use_color) {
                tracing::debug!("could not write completion notice: {}", e);
            }
        }
        Err(e) => {
            eprintln!("repotext: {}", e);
            process::exit(1);
        }
    }
}
