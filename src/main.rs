//! Terminal entry point.
//!
//! Wires the library together on a single-threaded tokio runtime:
//!
//! ```text
//! ┌──────────────┐  lines   ┌─────────────┐  spawn   ┌──────────────────┐
//! │ stdin        │ ───────▶ │   Runtime   │ ───────▶ │ HttpSearchClient │
//! │ (parse_input)│          │ (AppState)  │ ◀─────── │  (tokio task)    │
//! └──────────────┘          └─────────────┘  mpsc    └──────────────────┘
//!                                  │
//!                                  ▼ render
//!                               stdout
//! ```
//!
//! # Input
//!
//! - any text + `Enter`: search
//! - `:1` … `:4`: popular searches
//! - `:n` / `:p`: next / previous results page
//! - `:q`: quit
//!
//! The terminal size is taken from `LINES` and `COLUMNS` when exported by
//! the shell.

#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use wealthwagon::app::parse_input;
use wealthwagon::runtime::Runtime;
use wealthwagon::{Config, Event, HttpSearchClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("wealthwagon: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(trace_file) = wealthwagon::observability::init_tracing(&config) {
        tracing::info!(trace_file = %trace_file.display(), "tracing enabled");
    }

    let state = wealthwagon::initialize(&config);
    let client = Arc::new(HttpSearchClient::new(config.api_url.as_str()));
    let mut runtime = Runtime::new(state, client);

    if let Some((rows, cols)) = terminal_size() {
        runtime.dispatch(Event::Resize { rows, cols });
    }

    match run(&mut runtime).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "terminal I/O failed");
            eprintln!("wealthwagon: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(runtime: &mut Runtime) -> wealthwagon::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    draw(runtime)?;

    loop {
        let (event, from_input) = tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => (parse_input(&line), true),
                None => (Event::Quit, true),
            },
            completion = runtime.next_completion() => (completion, false),
        };

        let outcome = runtime.dispatch(event);
        if outcome.quit {
            tracing::debug!("quit requested");
            return Ok(());
        }
        // Input echo scrolls the prompt, so redraw after every line.
        if outcome.render || from_input {
            draw(runtime)?;
        }
    }
}

fn draw(runtime: &Runtime) -> wealthwagon::Result<()> {
    let frame = wealthwagon::ui::render(runtime.state());
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn terminal_size() -> Option<(usize, usize)> {
    let read = |key: &str| std::env::var(key).ok()?.trim().parse::<usize>().ok();
    Some((read("LINES")?, read("COLUMNS")?))
}
