//! Termpad entrypoint.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_editor::{Editor, EditorOptions};
use core_terminal::CrosstermConsole;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE: &str = "termpad.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "termpad", version, about = "Minimal terminal text editor")]
struct Args {
    /// File to edit. Created on first save if it does not exist.
    pub path: PathBuf,
    /// Configuration file path (overrides discovery of `termpad.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
        .ok()
        .map(|_| guard)
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn run(args: Args) -> Result<()> {
    let config_override = args.config.is_some();
    let config = load_from(args.config).context("invalid configuration")?;
    let options = EditorOptions::from_config(&config);
    info!(
        target: "runtime.startup",
        path = %args.path.display(),
        config_override,
        history = options.history_size,
        "bootstrap_complete"
    );

    let mut console =
        CrosstermConsole::new(config.file.cursor.style).context("terminal unavailable")?;
    console.enter().context("cannot enter raw mode")?;
    let mut editor = Editor::open(&args.path, console, options)
        .with_context(|| format!("cannot open {}", args.path.display()))?;
    let outcome = editor.run();
    // Restore the terminal before any error reaches stderr.
    editor.console_mut().leave()?;
    outcome.context("editor loop failed")
}

fn main() -> Result<()> {
    let _log_guard = configure_logging();
    install_panic_hook();
    info!(target: "runtime", "startup");

    let args = Args::parse();
    let result = run(args);
    match &result {
        Ok(()) => info!(target: "runtime", "shutdown"),
        Err(e) => error!(target: "runtime", error = %format!("{e:#}"), "fatal"),
    }
    result
}
