use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use journal_store::{Journal, SystemClock};
use journey::app::run_interactive;
use journey::cli::{append_once, print_journal, Args, Mode, ViewKind};
use journey::logging;
use journey::session::SessionController;
use journey::style::RenderStyle;
use journey::view::{ContentView, ListView, ScrollView};
use journey_tui::{EnvConfig, ProcessTerminal, TUI};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = Args::parse();
    // The local offset can only be read while the process is single-threaded.
    let clock = SystemClock::detect();
    let env = EnvConfig::from_env();
    logging::init_global(&args.log_file, env.debug);

    match run(&args, &env, clock) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("journey: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, env: &EnvConfig, clock: SystemClock) -> Result<()> {
    info!("Starting");
    let mut journal = Journal::open(&args.path)
        .with_context(|| format!("opening journal {}", args.path.display()))?;
    info!(path = %args.path.display(), entries = journal.len(), "journal loaded");

    match args.mode() {
        Mode::Print => {
            print_journal(journal.path(), &mut io::stdout().lock()).context("printing journal")?;
        }
        Mode::Append(text) => {
            append_once(&mut journal, &text, &clock).context("appending entry")?;
        }
        Mode::Interactive(ViewKind::Scroll) => {
            let style = RenderStyle::default();
            let view = ScrollView::new(style.body_margin);
            interactive(journal, view, clock, env, &style)?;
        }
        Mode::Interactive(ViewKind::List) => {
            interactive(journal, ListView::new(), clock, env, &RenderStyle::default())?;
        }
    }
    Ok(())
}

fn interactive<V: ContentView>(
    journal: Journal,
    view: V,
    clock: SystemClock,
    env: &EnvConfig,
    style: &RenderStyle,
) -> Result<()> {
    let mut session = SessionController::new(journal, view, Box::new(clock));
    let mut tui = TUI::new(ProcessTerminal::with_config(env));
    run_interactive(&mut tui, &mut session, style)?;
    info!(entries = session.journal().len(), "session closed");
    Ok(())
}
