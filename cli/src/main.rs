//! Termodoro CLI - binary entry point and terminal session management.
//!
//! # Event Loop
//!
//! A fixed 100ms cadence on a single-threaded runtime:
//!
//! 1. Wait for the frame tick (or a shutdown signal)
//! 2. Drain input without blocking; `q`, `Esc` or `Ctrl-C` quit
//! 3. Advance the session (`session.tick()`)
//! 4. Render the frame
//!
//! Terminal state lives in [`TerminalSession`], which restores the terminal on
//! drop so early returns and panics leave a usable shell behind.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, prelude::CrosstermBackend};
use std::{
    fs::{self, OpenOptions},
    future::pending,
    io::{Stdout, stdout},
    path::PathBuf,
    pin::pin,
    sync::Mutex,
    time::Duration,
};
use tokio::time::{MissedTickBehavior, interval};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use termodoro_config::{Settings, config_path, load_settings};
use termodoro_core::{Session, SystemClock, TimeSource};
use termodoro_tui::{Dashboard, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // The face owns stdout; no log file means no logs.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: next to the config, usually ~/.termodoro/logs/termodoro.log
    if let Some(config_path) = config_path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("termodoro.log"));
    }

    // Fallback: ./.termodoro/logs/termodoro.log
    candidates.push(PathBuf::from(".termodoro").join("logs").join("termodoro.log"));

    candidates
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode, the alternate screen and a hidden cursor are set up in
/// [`TerminalSession::new`] and undone in reverse on drop.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            let _ = execute!(out, LeaveAlternateScreen, Show);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen, Show);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    // A broken config must not keep the clock from starting.
    let (settings, config_warning) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(err) => {
            tracing::warn!("Using default settings: {err}");
            (Settings::default(), Some(err))
        }
    };

    let mut dashboard = Dashboard::new(settings.display);
    let mut session = Session::start(SystemClock, settings.session);

    let result = {
        let mut terminal = TerminalSession::new()?;
        run_app(&mut terminal.terminal, &mut dashboard, &mut session).await
    };

    if let Some(err) = config_warning {
        eprintln!("Warning: {err}; default settings were used");
    }

    tracing::info!(
        completed_rounds = session.completed_rounds(),
        "Session ended"
    );
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(100);

async fn run_app<B, C>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
    session: &mut Session<C>,
) -> Result<()>
where
    B: Backend,
    C: TimeSource + Clone,
{
    let mut frames = interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut shutdown = pin!(shutdown_signal());

    loop {
        tokio::select! {
            _ = frames.tick() => {}
            () = &mut shutdown => return Ok(()),
        }

        // Non-blocking input (drain queue only)
        if handle_events()? {
            return Ok(());
        }

        session.tick();

        // A failed frame is dropped; the next tick redraws everything.
        if let Err(err) = terminal.draw(|frame| draw(frame, dashboard, session)) {
            tracing::warn!("Frame dropped: {err}");
        }
    }
}

/// Resolves on SIGINT, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {err}");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::warn!("Failed to install SIGTERM handler: {err}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received SIGINT"),
        () = terminate => tracing::info!("Received SIGTERM"),
    }
}
