//! `lettersort` - watch a document's letters sort themselves home
//!
//! Loads a text or HTML file, alphabetizes its letters and bubble-sorts
//! them back into reading order on the terminal, one pass per tick.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lettersort -- page.html
//! cargo run --bin lettersort -- 'page.html#mono'
//! cargo run --bin lettersort -- --headless notes.txt
//! ```

use lettersort::terminal::{Screen, is_tty, terminal_size};
use lettersort::view::{layout, status_line};
use lettersort::{
    Document, LogLevel, NoDelay, SleepPacer, SortOptions, app, emit_log, parse_markup,
    set_log_callback,
};
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

// ============================================================================
// CLI Parsing
// ============================================================================

const HELP_TEXT: &str = "lettersort - alphabetize a document, then bubble-sort it back

USAGE:
    lettersort [OPTIONS] <FILE[#FRAGMENT]>

ARGS:
    <FILE>          Text file, or HTML when the name ends in .html/.htm
    #FRAGMENT       #mono selects a monospace font, anything else sans-serif

OPTIONS:
    -h, --help      Print this help message and exit
    --headless      Don't drive the terminal; print the scrambled and the
                    sorted text to stdout
    -v, --verbose   Log progress to stderr

EXAMPLES:
    lettersort page.html              # Animate in the terminal
    lettersort 'page.html#mono'       # Same, monospace body font
    lettersort --headless notes.txt   # Print first and last frame
";

/// Application configuration parsed from command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub fragment: Option<String>,
    pub headless: bool,
    pub verbose: bool,
}

/// Result of CLI parsing.
#[derive(Debug)]
pub enum ParseResult {
    /// Successfully parsed configuration.
    Config(Config),
    /// User requested help.
    Help,
    /// Bad command line.
    Error(lettersort::Error),
}

impl Config {
    /// Parse configuration from command-line arguments.
    pub fn from_args<I>(args: I) -> ParseResult
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let mut target: Option<String> = None;
        let mut headless = false;
        let mut verbose = false;

        // Skip program name
        args.next();

        for arg in args {
            let arg_str = arg.to_string_lossy();
            match arg_str.as_ref() {
                "-h" | "--help" => return ParseResult::Help,
                "--headless" => headless = true,
                "-v" | "--verbose" => verbose = true,
                other if other.starts_with('-') && other.len() > 1 => {
                    return invalid(format!("unknown option: {other}"));
                }
                other => {
                    if target.is_some() {
                        return invalid(format!("unexpected argument: {other}"));
                    }
                    target = Some(other.to_string());
                }
            }
        }

        let Some(target) = target else {
            return invalid("missing <FILE> argument".to_string());
        };
        let (path, fragment) = split_fragment(&target);
        if path.as_os_str().is_empty() {
            return invalid(format!("no file name in {target}"));
        }
        ParseResult::Config(Self {
            path,
            fragment,
            headless,
            verbose,
        })
    }
}

fn invalid(msg: String) -> ParseResult {
    ParseResult::Error(lettersort::Error::InvalidArgument(msg))
}

/// Split `FILE#FRAGMENT`. A name that exists as given keeps any `#`.
fn split_fragment(target: &str) -> (PathBuf, Option<String>) {
    if Path::new(target).exists() {
        return (PathBuf::from(target), None);
    }
    match target.rfind('#') {
        Some(at) => (
            PathBuf::from(&target[..at]),
            Some(target[at..].to_string()),
        ),
        None => (PathBuf::from(target), None),
    }
}

/// Read `path` as HTML or plain text depending on its extension.
fn load_document(path: &Path) -> lettersort::Result<Document> {
    let source = std::fs::read_to_string(path)?;
    let is_html = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"));
    if is_html {
        parse_markup(&source)
    } else {
        Ok(Document::from_text(&source))
    }
}

// ============================================================================
// Hosts
// ============================================================================

fn main() -> ExitCode {
    let config = match Config::from_args(std::env::args_os()) {
        ParseResult::Config(config) => config,
        ParseResult::Help => {
            print!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        ParseResult::Error(err) => {
            eprintln!("error: {err}\n\nRun with --help for usage.");
            return ExitCode::from(2);
        }
    };

    if config.verbose {
        set_log_callback(|level, msg| eprintln!("[{}] {msg}", level.as_str()));
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> lettersort::Result<()> {
    let mut doc = load_document(&config.path)?;
    emit_log(
        LogLevel::Info,
        &format!("loaded {} ({} nodes)", config.path.display(), doc.len()),
    );

    if config.headless || !is_tty(&io::stdout()) {
        run_headless(&mut doc, config)
    } else {
        run_interactive(&mut doc, config)
    }
}

fn run_headless(doc: &mut Document, config: &Config) -> lettersort::Result<()> {
    let mut scrambled: Option<Vec<String>> = None;
    let summary = app::run(
        doc,
        config.fragment.as_deref(),
        &SortOptions::default(),
        &mut NoDelay,
        |doc, _| {
            scrambled.get_or_insert_with(|| doc.visible_lines());
        },
    );
    emit_log(
        LogLevel::Info,
        &format!("{} passes, {} swaps", summary.passes, summary.swaps),
    );

    let mut out = io::stdout().lock();
    for line in scrambled.unwrap_or_default() {
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    for line in doc.visible_lines() {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn run_interactive(doc: &mut Document, config: &Config) -> lettersort::Result<()> {
    let (width, height) = terminal_size().unwrap_or((80, 24));
    let mut screen = Screen::new(io::stdout().lock(), width, height);
    screen.enter()?;

    let mut draw_error: Option<io::Error> = None;
    let summary = app::run(
        doc,
        config.fragment.as_deref(),
        &SortOptions::default(),
        &mut SleepPacer,
        |doc, stepper| {
            if draw_error.is_some() {
                return;
            }
            let lines = layout(doc, usize::from(width));
            if let Err(err) = screen.draw(&lines, &status_line(doc, stepper)) {
                draw_error = Some(err);
            }
        },
    );
    if let Some(err) = draw_error {
        return Err(err.into());
    }
    emit_log(
        LogLevel::Info,
        &format!("{} passes, {} swaps", summary.passes, summary.swaps),
    );

    if is_tty(&io::stdin()) {
        let lines = layout(doc, usize::from(width));
        screen.draw(&lines, " sorted - press Enter to exit")?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
    }
    screen.leave()?;
    Ok(())
}
