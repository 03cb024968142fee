// src/main.rs
mod app;
mod config;
mod input;
mod logging;
mod models;
mod network;
mod theme;
mod ui;
mod utils;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::app::App;
use crate::config::{Overrides, Settings};
use crate::input::{handle_key, handle_paste, Dispatcher};
use crate::models::{OutputLanguage, SummaryOutput, SummaryStyle};
use crate::network::SummaryClient;
use crate::theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "tubesum", version, about = "Summarize a YouTube video through the ingest backend")]
struct Cli {
    /// Backend endpoint, e.g. http://localhost:8000/ingest-youtube
    #[arg(long)]
    backend_url: Option<String>,

    /// Prefill the URL field
    #[arg(long)]
    url: Option<String>,

    /// Output language: en or hi
    #[arg(long, value_parser = parse_language)]
    language: Option<OutputLanguage>,

    /// Summary type: study_guide, medium_articles_ai_ml or medium_articles_cloud
    #[arg(long, value_parser = parse_style)]
    style: Option<SummaryStyle>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<String>,
}

fn parse_language(s: &str) -> Result<OutputLanguage, String> {
    OutputLanguage::from_wire(s).ok_or_else(|| format!("unknown language '{}', expected en or hi", s))
}

fn parse_style(s: &str) -> Result<SummaryStyle, String> {
    SummaryStyle::from_wire(s).ok_or_else(|| {
        format!(
            "unknown summary type '{}', expected study_guide, medium_articles_ai_ml or medium_articles_cloud",
            s
        )
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = Overrides {
        backend_url: cli.backend_url,
        language: cli.language,
        summary_style: cli.style,
        log_file: cli.log_file,
    };
    let settings = Settings::new(&overrides).context("failed to load configuration")?;
    logging::init(&settings.log_path(), &settings.log_level)?;
    tracing::info!(backend_url = %settings.backend_url, "starting tubesum");

    let rt = Runtime::new().context("failed to start tokio runtime")?;
    let (tx, rx) = mpsc::unbounded_channel();
    let dispatcher = Dispatcher::new(SummaryClient::new(settings.backend_url.clone()), rt.handle().clone(), tx);

    let mut app = App::new(settings.default_language, settings.default_summary_style);
    if let Some(url) = cli.url {
        app.source_url = url;
    }

    let mut terminal = setup_terminal()?;
    let result = run(&mut terminal, &mut app, &dispatcher, rx);
    restore_terminal(&mut terminal)?;
    tracing::info!("exiting");
    result
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    dispatcher: &Dispatcher,
    mut results: mpsc::UnboundedReceiver<SummaryOutput>,
) -> anyhow::Result<()> {
    let theme = Theme::default();
    loop {
        while let Ok(output) = results.try_recv() {
            app.finish_submit(output);
        }

        terminal.draw(|f| ui::render(f, app, dispatcher.endpoint(), &theme))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    let size = terminal.size()?;
                    let pane = ui::output_pane_size(size.width, size.height);
                    if !handle_key(key, app, pane, dispatcher) {
                        break;
                    }
                }
                Event::Paste(text) => handle_paste(&text, app),
                _ => {}
            }
        }
    }
    Ok(())
}
