mod app;
mod handlers;
mod ui;

use std::io;
use std::time::Duration;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use handlers::handle_key_event;
use ratatui::{Terminal, backend::CrosstermBackend};
use threadview::RenderMode;
use tracing_subscriber::EnvFilter;
use ui::ui;

#[derive(Parser)]
#[command(name = "threadview")]
#[command(about = "A terminal chat-thread viewer built on the threadview model")]
#[command(version)]
struct Args {
    /// Thread to create at startup; repeat for multiple threads
    #[arg(short, long = "thread", value_name = "NAME")]
    threads: Vec<String>,

    /// Interpret inline emphasis markup in messages instead of displaying
    /// it literally (the legacy behavior)
    #[arg(long, env = "THREADVIEW_LEGACY_MARKUP")]
    legacy_markup: bool,

    /// Enable verbose debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing on stderr so the alternate screen stays clean
    let directive = if args.verbose {
        "threadview=debug"
    } else {
        "threadview=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive.parse().unwrap()))
        .with_writer(io::stderr)
        .init();

    let mode = if args.legacy_markup {
        RenderMode::Markup
    } else {
        RenderMode::Literal
    };
    let mut app = App::new(&args.threads, mode);

    // Setup terminal for TUI
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Block briefly for the next event; each one is handled to
        // completion before the next draw.
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key_event(app, key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
