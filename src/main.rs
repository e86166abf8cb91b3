use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::constants::FRAME_INTERVAL_MS;
use flappy::input::{handle_input, map_event};
use flappy::ui::hud::Hud;
use flappy::{
    build_info, logging, FileHighScore, GameConfig, GameCoordinator, HighScoreStorage,
    MemoryHighScore,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

struct Args {
    config: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_help() {
    println!("Flappy - terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --config <path>  Read settings from a JSON file");
    println!("  --seed <n>       Fixed seed for pipe gaps and backgrounds");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nControls: Space/Enter/Up or left click to flap, M to mute, Q/Esc to quit");
}

fn usage_error(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> Args {
    let mut args = Args {
        config: None,
        seed: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--config" => match iter.next() {
                Some(path) => args.config = Some(PathBuf::from(path)),
                None => usage_error("--config needs a path"),
            },
            "--seed" => match iter.next().map(|s| s.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = Some(seed),
                _ => usage_error("--seed needs a non-negative integer"),
            },
            other => usage_error(&format!("Unknown option: {}", other)),
        }
    }

    args
}

fn open_storage() -> Box<dyn HighScoreStorage> {
    match FileHighScore::new() {
        Ok(store) => {
            info!(path = %store.path().display(), "high score file");
            Box::new(store)
        }
        Err(e) => {
            warn!(error = %e, "no data directory, high score will not persist");
            Box::new(MemoryHighScore::new())
        }
    }
}

fn main() -> io::Result<()> {
    let args = parse_args();

    if let Some(path) = logging::default_log_path() {
        if let Err(e) = logging::init(&path) {
            eprintln!("Warning: logging disabled ({})", e);
        }
    }
    info!(version = %build_info::version_string(), "starting");

    let config_path = args.config.or_else(GameConfig::default_path);
    let config = GameConfig::load_or_default(config_path.as_deref());

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = GameCoordinator::new(config, open_storage(), rng);
    let mut hud = Hud::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut game, &mut hud);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    info!(high_score = game.session().high_score(), "exiting");
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut GameCoordinator,
    hud: &mut Hud,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_frame = Instant::now();

    loop {
        hud.apply_all(game.drain_signals());
        terminal.draw(|frame| flappy::ui::draw(frame, game, hud))?;

        let timeout = frame_interval.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let input = map_event(&event::read()?);
            if !handle_input(game, input) {
                return Ok(());
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame_interval {
            let dt = elapsed.as_secs_f32();
            last_frame = Instant::now();
            game.advance(dt);
            hud.tick(dt);
        }
    }
}
