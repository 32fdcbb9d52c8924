//! NIBS-TUI: Evidence-Based Treatment Selector
//!
//! Interactive selector, or `--print` to write a single report to stdout.

use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use nibs_evidence::ReportRenderer;
use nibs_tui::{init_logging, print_report, ui, App, Args, LogTarget, TuiConfig};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = TuiConfig::from_env();
    config.apply_args(&args);

    init_logging(&config, &LogTarget::for_mode(&config, args.print))
        .context("Failed to initialize logging")?;

    if args.print {
        return run_headless(&args, &config);
    }

    let mut app = App::new(config.selection_config());
    app.preselect(args.disorder, args.modality)
        .context("Invalid starting selection")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!("Selector started");
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(path) = &app.last_export {
        println!("Last report saved to {}", path.display());
    }

    result.context("Terminal I/O failed")
}

/// Print one report to stdout and exit.
fn run_headless(args: &Args, config: &TuiConfig) -> Result<()> {
    let Some(disorder) = args.disorder else {
        bail!("--print requires --disorder");
    };

    let mut app = App::new(config.selection_config());
    app.preselect(Some(disorder), args.modality)
        .context("Invalid selection")?;

    let report = ReportRenderer::new(&app.store)
        .render_selection(&app.controller)
        .context("Failed to render report")?;

    let stdout = io::stdout();
    print_report(&report, config.export_format, &mut stdout.lock())
        .context("Failed to print report")?;
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &TuiConfig,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.resize(size.width, size.height);
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            // Only handle key press events (not release)
            if key.kind == KeyEventKind::Press {
                let action = match key.code {
                    KeyCode::Char(c) => app.handle_key(c),
                    KeyCode::Tab => app.handle_key('\t'),
                    KeyCode::Up => {
                        app.select_prev();
                        None
                    }
                    KeyCode::Down => {
                        app.select_next();
                        None
                    }
                    KeyCode::Enter => {
                        app.confirm();
                        None
                    }
                    KeyCode::Esc => {
                        app.escape();
                        None
                    }
                    _ => None,
                };
                if let Some(action) = action {
                    app.run_action(action, config);
                }
            }
        }

        if app.should_quit() {
            info!("Selector closed");
            return Ok(());
        }
    }
}
