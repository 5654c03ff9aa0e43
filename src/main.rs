mod ui;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use newyear::utils::{build_info, persistence};
use newyear::{input, App, Config, INPUT_POLL_MS, LOG_FILE_NAME};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io::{self, Write};
use std::time::{Duration, Instant};

type Term = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let mut no_fireworks = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Newyear - Terminal New Year Countdown\n");
                println!("Usage: newyear [options]\n");
                println!("Options:");
                println!("  --no-fireworks  Skip the fireworks on the celebration screen");
                println!("  --write-config  Write the default config to ~/.newyear/config.json");
                println!("  --version       Show version information");
                println!("  --help          Show this help message");
                std::process::exit(0);
            }
            "--no-fireworks" => no_fireworks = true,
            "--write-config" => {
                let path = Config::write_default()?;
                println!("Default configuration written to {}", path.display());
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'newyear --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    init_logging();

    let mut config = Config::load();
    if no_fireworks {
        config.fireworks.enabled = false;
    }
    let today = chrono::Local::now().date_naive();
    let year = config.celebration.resolved_year(today);
    log::info!("Starting {} (celebrating {})", build_info::version_line(), year);

    let mut app = App::new(config, year, rand::thread_rng());

    // Setup terminal
    enable_raw_mode()?;
    let setup = enter_screen(io::stdout())
        .and_then(|stdout| Terminal::new(CrosstermBackend::new(stdout)));
    let mut terminal = match setup {
        Ok(terminal) => terminal,
        Err(e) => {
            // Undo whatever part of the setup took effect
            let _ = leave_screen(&mut io::stdout());
            let _ = disable_raw_mode();
            log::error!("Terminal setup failed: {}", e);
            return Err(e);
        }
    };

    let result = run(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Exited with error: {}", e);
    } else {
        log::info!("Goodbye after {} celebration(s)", app.celebrations);
    }
    result
}

fn run<R: rand::Rng>(terminal: &mut Term, app: &mut App<R>) -> io::Result<()> {
    let size = terminal.size()?;
    app.resize(size.width, size.height);

    let mut last_frame = Instant::now();
    loop {
        terminal.draw(|frame| ui::draw(frame, &*app))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let event = event::read()?;
            if let Event::Resize(cols, rows) = event {
                app.resize(cols, rows);
            } else if let Some(input) = input::map_event(&event) {
                app.handle_input(input);
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        let now = Instant::now();
        let dt_ms = now.duration_since(last_frame).as_millis() as u64;
        last_frame = now;
        app.advance(dt_ms);
    }
}

fn enter_screen<W: Write>(mut out: W) -> io::Result<W> {
    out.execute(EnterAlternateScreen)?;
    out.execute(EnableMouseCapture)?;
    Ok(out)
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.execute(DisableMouseCapture)?;
    out.execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Log to `~/.newyear/newyear.log` since stdout belongs to the UI.
/// `RUST_LOG` overrides the default `info` level.
fn init_logging() {
    let file = match persistence::app_path(LOG_FILE_NAME).and_then(File::create) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: logging disabled ({})", e);
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
}
