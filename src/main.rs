//! Orbitscope - A terminal-based phase-plane plot viewer.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use orbitscope::app::App;
use orbitscope::figure::plot_orbit;
use orbitscope::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "orbitscope")]
#[command(about = "A terminal-based phase-plane plot viewer for trajectory CSV files", long_about = None)]
struct Args {
    /// Trajectory CSV files to plot (columns: t,y1,y2,v1,v2, no header)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Figure title, repeatable, matched to files by position
    #[arg(long)]
    title: Vec<String>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_path = log_path.clone();
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_writer(move || {
                std::fs::OpenOptions::new()
                    .create(true)
                    .write(true)
                    .truncate(true)
                    .append(false)
                    .open(&log_path)
                    .expect("Failed to open log file")
            })
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Orbitscope");
    }

    // Load every figure before touching the terminal so read and parse
    // errors surface on stderr with a nonzero exit.
    let mut figures = Vec::with_capacity(args.files.len());
    for (i, path) in args.files.iter().enumerate() {
        let title = match args.title.get(i) {
            Some(title) => title.clone(),
            None => path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
        };
        figures.push(plot_orbit(path, &title)?);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Show all figures; returns when the user quits
    let app = App::new(figures);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if args.log.is_some() {
        tracing::info!("Orbitscope exited");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc) => return Ok(()),

                    // Figure switching
                    (KeyModifiers::NONE, KeyCode::Tab)
                    | (KeyModifiers::NONE, KeyCode::Char(']'))
                    | (KeyModifiers::NONE, KeyCode::Char('l'))
                    | (KeyModifiers::NONE, KeyCode::Right) => {
                        app.next_figure();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('['))
                    | (KeyModifiers::NONE, KeyCode::Char('h'))
                    | (KeyModifiers::NONE, KeyCode::Left) => {
                        app.prev_figure();
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('g')) => {
                        app.toggle_grid();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },

                    _ => {},
                }
            }
        }
    }
}
