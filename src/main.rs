mod app;
mod ui;

use app::{App, Focus};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use torus_life::config::AppConfig;
use torus_life::patterns::PatternId;

#[derive(Parser, Debug)]
#[command(name = "torus-life")]
#[command(about = "Conway's Game of Life on a wrapped board in the terminal")]
struct Args {
    /// Board edge length (clamped to the configured min/max, default 10-25)
    #[arg(short = 'g', long = "grid-size")]
    grid_size: Option<usize>,

    /// Initial pattern (empty, glider, small-exploder, exploder, ten-cell-row,
    /// lightweight-spaceship, block, tub, boat)
    #[arg(short = 'p', long)]
    pattern: Option<String>,

    /// Auto-tick speed (1-100, higher is faster)
    #[arg(short = 's', long)]
    speed: Option<u32>,

    /// Add a random live cell after every tick
    #[arg(long = "random-life")]
    random_life: bool,

    /// Start auto-ticking immediately
    #[arg(long)]
    run: bool,

    /// Settings file (JSON); defaults to the user config directory
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the current settings to the config file and exit
    #[arg(long = "save-config")]
    save_config: bool,

    /// Write log output to this file (level via RUST_LOG, default info)
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Target ~60fps; also the coarsest wait between auto-tick checks
const FRAME_DURATION: Duration = Duration::from_millis(16);

fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn load_config(args: &Args) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    // Command-line flags override the file
    if let Some(size) = args.grid_size {
        config.settings.initial_grid_size = config.settings.clamp_grid_size(size);
    }
    if let Some(name) = &args.pattern {
        config.selected_pattern = PatternId::from_name(name);
    }
    if let Some(speed) = args.speed {
        config.tick_speed = speed;
    }
    if args.random_life {
        config.random_life = true;
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = load_config(&args)?;

    if args.save_config {
        let path = match &args.config {
            Some(path) => path.clone(),
            None => AppConfig::default_path()?,
        };
        config.save_to_file(&path)?;
        println!("Saved config to {}", path.display());
        return Ok(());
    }

    let now = Instant::now();
    let mut app = App::new(&config, now);
    if args.run {
        app.simulation.start_ticking(now);
    }
    log::info!(
        "starting with {} on a {}x{} board",
        app.simulation.selected_pattern().name(),
        app.simulation.grid_size(),
        app.simulation.grid_size()
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("terminal loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn pattern_for_digit(c: char) -> Option<PatternId> {
    let index = c.to_digit(10)? as usize;
    // 0 is Empty and not bound; 1-8 map onto the remaining patterns
    if index == 0 || index >= PatternId::ALL.len() {
        return None;
    }
    Some(PatternId::ALL[index])
}

/// How long to wait for input: one frame, or less if the ticker is due sooner
fn poll_timeout(app: &App, now: Instant) -> Duration {
    match app.simulation.ticker().time_until_due(now) {
        Some(remaining) => remaining.min(FRAME_DURATION),
        None => FRAME_DURATION,
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(poll_timeout(app, Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(());
                }

                let now = Instant::now();
                match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                    KeyCode::Char(' ') => app.toggle_ticking(now),
                    KeyCode::Char('n') | KeyCode::Char('N') => app.step(),
                    KeyCode::Enter => app.toggle_at_cursor(),
                    KeyCode::Char('r') | KeyCode::Char('R') => app.reset(),
                    KeyCode::Char('e') | KeyCode::Char('E') => app.reset_empty(),
                    KeyCode::Char('x') | KeyCode::Char('X') => app.randomize(),
                    KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_random_life(),
                    KeyCode::Char('p') => app.cycle_pattern(),
                    KeyCode::Char('P') => app.cycle_pattern_prev(),
                    KeyCode::Char(c @ '1'..='8') => {
                        if let Some(pattern) = pattern_for_digit(c) {
                            app.load_pattern(pattern);
                        }
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        app.increase_speed(now);
                        app.focus = Focus::Speed;
                    }
                    KeyCode::Char('-') | KeyCode::Char('_') => {
                        app.decrease_speed(now);
                        app.focus = Focus::Speed;
                    }
                    KeyCode::Char('[') => {
                        app.adjust_grid_size(-1);
                        app.focus = Focus::GridSize;
                    }
                    KeyCode::Char(']') => {
                        app.adjust_grid_size(1);
                        app.focus = Focus::GridSize;
                    }
                    KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('?') => app.toggle_help(),
                    KeyCode::Char('j') | KeyCode::Char('J') if app.show_help => {
                        app.scroll_help_down(ui::HELP_CONTENT_LINES);
                    }
                    KeyCode::Char('k') | KeyCode::Char('K') if app.show_help => app.scroll_help_up(),

                    // Navigation
                    KeyCode::Tab => app.next_focus(),
                    KeyCode::BackTab => app.prev_focus(),
                    KeyCode::Up => app.adjust_focused_up(now),
                    KeyCode::Down => app.adjust_focused_down(now),
                    KeyCode::Left if !app.focus.is_param() => app.move_cursor(0, -1),
                    KeyCode::Right if !app.focus.is_param() => app.move_cursor(0, 1),
                    KeyCode::Esc => {
                        if app.show_help {
                            app.toggle_help();
                        } else {
                            app.focus = Focus::Board;
                        }
                    }
                    _ => {}
                }
            }
        }

        app.update(Instant::now());
    }
}
