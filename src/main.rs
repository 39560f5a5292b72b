//! textdraw - a text-mode drawing program
//!
//! textdraw keeps a bordered character canvas and draws on it with short
//! commands read from the terminal or from a script file.
//!
//! # Quick Start
//!
//! ```text
//! textdraw                 # Interactive prompt
//! textdraw -f picture.txt  # Run commands from a file
//! textdraw --no-color      # Plain output
//! ```
//!
//! # Commands
//!
//! | Command | Action |
//! |---------|--------|
//! | C w h | New canvas of width w and height h |
//! | L x1 y1 x2 y2 | Horizontal or vertical line |
//! | R x1 y1 x2 y2 | Rectangle with corners (x1,y1) and (x2,y2) |
//! | B x y c | Fill the area connected to (x,y) with "colour" c |
//! | Q | Quit |

mod config;
mod core;
mod ui;

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::Context;
use crossterm::tty::IsTty;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{ColorScheme, Config as TextdrawConfig};
use crate::core::{Outcome, Session};
use crate::ui::Renderer;

/// Command line options
#[derive(Debug, Default)]
struct Options {
    /// Read commands from this file instead of stdin
    script: Option<PathBuf>,
    /// Config file overriding ~/.textdraw/config.toml
    config_path: Option<PathBuf>,
    /// Disable colored output
    no_color: bool,
}

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const BANNER: &str = "Commands: C w h | L x1 y1 x2 y2 | R x1 y1 x2 y2 | B x y c | Q";

fn print_version() {
    eprintln!("textdraw {}", VERSION);
}

fn print_help() {
    eprintln!("textdraw {} - A text-mode drawing program", VERSION);
    eprintln!();
    eprintln!("Usage: textdraw [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -f, --file <PATH>     Run commands from a file");
    eprintln!("  -c, --config <PATH>   Use a specific config file");
    eprintln!("      --no-color        Plain output without colors");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  C w h                 Create a canvas of width w and height h");
    eprintln!("  L x1 y1 x2 y2         Draw a line (horizontal or vertical only)");
    eprintln!("  R x1 y1 x2 y2         Draw a rectangle");
    eprintln!("  B x y c               Fill the area connected to (x,y) with c");
    eprintln!("  Q                     Quit");
    eprintln!();
    eprintln!("Configuration: ~/.textdraw/config.toml");
    eprintln!("Color schemes: {}", ColorScheme::list().join(", "));
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut options = Options::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-f" | "--file" => {
                let path = args.next().ok_or("Missing file argument")?;
                options.script = Some(PathBuf::from(path));
            }
            "-c" | "--config" => {
                let path = args.next().ok_or("Missing config argument")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--no-color" => {
                options.no_color = true;
            }
            arg => {
                return Err(format!("Unknown argument: {}. Use -h for help.", arg));
            }
        }
    }

    Ok(options)
}

/// Log to ~/.textdraw/textdraw.log, never to the terminal
fn init_logging(config: &TextdrawConfig) {
    let log_path = TextdrawConfig::data_dir()
        .map(|dir| dir.join("textdraw.log"))
        .unwrap_or_else(|| PathBuf::from("textdraw.log"));

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    let options = match parse_args(env::args().skip(1)) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information");
            std::process::exit(1);
        }
    };

    let loaded = match &options.config_path {
        Some(path) => TextdrawConfig::load_from(path),
        None => TextdrawConfig::load(),
    };
    let (config, config_error) = match loaded {
        Ok(c) => (c, None),
        Err(e) => (TextdrawConfig::default(), Some(e)),
    };

    init_logging(&config);
    info!("textdraw {} starting...", VERSION);

    if let Some(e) = config_error {
        warn!("Using default configuration: {}", e);
        eprintln!("Warning: {} (using defaults)", e);
    }

    // Validated on load; the defaults always pass
    let glyphs = config.glyphs.to_glyphs()?;
    let limits = config.canvas.to_limits()?;

    let mut stdout = io::stdout();
    let styled = config.color && !options.no_color && stdout.is_tty();
    let renderer = Renderer::new(config.get_color_scheme(), styled);
    info!("Color scheme: {} (styled: {})", config.color_scheme, renderer.is_styled());

    let mut session = Session::new(glyphs, limits);
    session.start();

    match &options.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            info!("Running script {}", path.display());
            run_main_loop(&mut session, &renderer, BufReader::new(file), &mut stdout, false)?;
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_tty();
            if interactive {
                writeln!(stdout, "textdraw {}", VERSION)?;
                writeln!(stdout, "{}", BANNER)?;
            }
            run_main_loop(&mut session, &renderer, stdin.lock(), &mut stdout, interactive)?;
        }
    }

    info!("textdraw exiting");
    Ok(())
}

/// Read-dispatch-render loop. Stops at `Q` or end of input.
fn run_main_loop<R: BufRead, W: Write>(
    session: &mut Session,
    renderer: &Renderer,
    input: R,
    out: &mut W,
    prompt: bool,
) -> anyhow::Result<()> {
    show_prompt(out, prompt)?;
    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            show_prompt(out, prompt)?;
            continue;
        }

        match session.execute(&line) {
            Ok(Outcome::Drawn) => {
                if let Some(grid) = session.grid() {
                    renderer.render(out, grid)?;
                }
            }
            Ok(Outcome::Unchanged) => {}
            Ok(Outcome::Quit) => {
                if let Some(grid) = session.visible_grid() {
                    let (width, height) = grid.dimensions();
                    info!("Quit with a {}x{} canvas", width, height);
                }
                return Ok(());
            }
            Err(e) => renderer.render_error(out, &e)?,
        }
        show_prompt(out, prompt)?;
    }

    if prompt {
        writeln!(out)?;
    }
    Ok(())
}

fn show_prompt<W: Write>(out: &mut W, enabled: bool) -> io::Result<()> {
    if enabled {
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(script: &str) -> (Session, String) {
        let mut session = Session::default();
        session.start();
        let mut out = Vec::new();
        run_main_loop(
            &mut session,
            &Renderer::plain(),
            Cursor::new(script.to_string()),
            &mut out,
            false,
        )
        .unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_loop_renders_after_each_drawing() {
        let (session, output) = run("C 3 1\n\nL 1 1 2 1\n");
        assert_eq!(output, "-----\n|   |\n-----\n-----\n|xx |\n-----\n");
        assert!(session.is_ready());
    }

    #[test]
    fn test_loop_reports_errors_and_continues() {
        let (_, output) = run("L 1 1 2 1\nC 2 2\nL 1 1 2 2\n");
        assert_eq!(
            output,
            "Error: Create a canvas first, e.g. C 20 4\n\
             ----\n|  |\n|  |\n----\n\
             Error: Only horizontal or vertical lines are supported\n"
        );
    }

    #[test]
    fn test_loop_stops_at_quit() {
        let (session, output) = run("C 1 1\nQ\nC 2 2\n");
        assert_eq!(output, "---\n| |\n---\n");
        assert!(!session.is_ready());
        assert!(session.visible_grid().is_some());
    }

    #[test]
    fn test_loop_skips_output_for_noop_fill() {
        let (_, output) = run("C 1 1\nB 1 1 o\nB 1 1 o\n");
        assert_eq!(output, "---\n| |\n---\n---\n|o|\n---\n");
    }

    #[test]
    fn test_prompt() {
        let mut session = Session::default();
        session.start();
        let mut out = Vec::new();
        run_main_loop(
            &mut session,
            &Renderer::plain(),
            Cursor::new("q\n".to_string()),
            &mut out,
            true,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> ");
    }

    #[test]
    fn test_parse_args() {
        let options = parse_args(args(&["-f", "pic.txt", "--no-color"])).unwrap();
        assert_eq!(options.script, Some(PathBuf::from("pic.txt")));
        assert!(options.no_color);
        assert!(options.config_path.is_none());

        let options = parse_args(args(&["--config", "my.toml"])).unwrap();
        assert_eq!(options.config_path, Some(PathBuf::from("my.toml")));

        assert!(parse_args(args(&["--file"])).is_err());
        assert!(parse_args(args(&["--bogus"])).is_err());
    }
}
