mod display;

use std::collections::HashMap;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use robots_vs_dinosaurs::compute::{init_state, move_robot_left, move_robot_right, robot_shoot, tick};
use robots_vs_dinosaurs::config::TICKS_PER_SECOND;
use robots_vs_dinosaurs::entities::{Direction, GameState, GameStatus};
use robots_vs_dinosaurs::{GameConfig, GameResult};

const FRAME: Duration = Duration::from_millis(1000 / TICKS_PER_SECOND);

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  Covers terminals that never report key releases.
const HOLD_WINDOW: u64 = 8;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "robots_vs_dinosaurs")]
#[command(about = "Defend the robot against the descending dinosaur formation")]
#[command(version)]
struct Args {
    /// Seed for the simulation RNG (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of dinosaur rows
    #[arg(long, default_value_t = robots_vs_dinosaurs::config::DEFAULT_DINOSAUR_ROWS)]
    rows: usize,

    /// Number of dinosaur columns
    #[arg(long, default_value_t = robots_vs_dinosaurs::config::DEFAULT_DINOSAUR_COLS)]
    cols: usize,

    /// Number of obstacles spread across the screen
    #[arg(long, default_value_t = robots_vs_dinosaurs::config::DEFAULT_OBSTACLE_AMOUNT)]
    obstacles: usize,

    /// Keep the dinosaur formation in place
    #[arg(long)]
    static_dinosaurs: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence.
    /// Logs go to stderr and share the terminal with the game.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            dinosaur_rows: self.rows,
            dinosaur_cols: self.cols,
            obstacle_amount: self.obstacles,
            dinosaur_direction: if self.static_dinosaurs {
                Direction::Static
            } else {
                Direction::Right
            },
            ..GameConfig::default()
        }
    }
}

fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_target(false)
        .init();
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

enum LoopExit {
    Quit,
    Restart,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs one game until the player quits or asks for a restart.
///
/// Input model: a `key_frame` map records the frame of the last press/repeat
/// for every key.  Each frame applies every still-fresh key at once, so
/// Space and a direction can be held together.
fn game_loop<W: Write>(
    out: &mut W,
    state: &mut GameState,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> GameResult<LoopExit> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        while let Ok(Event::Key(KeyEvent { code, kind, modifiers, .. })) = rx.try_recv() {
            match kind {
                KeyEventKind::Press => {
                    key_frame.insert(code, frame);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            return Ok(LoopExit::Quit);
                        }
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                            return Ok(LoopExit::Quit);
                        }
                        KeyCode::Char('r') | KeyCode::Char('R') if state.status.is_terminal() => {
                            return Ok(LoopExit::Restart);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => {
                    key_frame.insert(code, frame);
                }
                KeyEventKind::Release => {
                    key_frame.remove(&code);
                }
            }
        }

        if state.status == GameStatus::Ongoing {
            let left = is_held(&key_frame, &KeyCode::Left, frame)
                || is_held(&key_frame, &KeyCode::Char('a'), frame)
                || is_held(&key_frame, &KeyCode::Char('A'), frame);
            let right = is_held(&key_frame, &KeyCode::Right, frame)
                || is_held(&key_frame, &KeyCode::Char('d'), frame)
                || is_held(&key_frame, &KeyCode::Char('D'), frame);
            let shoot = is_held(&key_frame, &KeyCode::Char(' '), frame);

            if left {
                *state = move_robot_left(state);
            } else if right {
                *state = move_robot_right(state);
            }
            if shoot {
                *state = robot_shoot(state);
            }

            *state = tick(state, rng);
        }

        display::render(out, state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> GameResult<()> {
    let args = Args::parse();
    initialize_logging(&args.log_level);

    let config = args.config();
    config.validate()?;
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(
        "Starting Robots vs Dinosaurs v{} (seed {}, {}x{} dinosaurs, {} obstacles)",
        robots_vs_dinosaurs::VERSION,
        seed,
        config.dinosaur_rows,
        config.dinosaur_cols,
        config.obstacle_amount
    );

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Blocking event reads live on their own thread so the loop never stalls.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break;
            }
        }
    });

    let mut rng = StdRng::seed_from_u64(seed);
    let result = run(&mut out, &config, &mut rng, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match result? {
        GameStatus::Lost { score } => println!("GAME OVER! Final score: {score}"),
        GameStatus::Cleared { score } => println!("Formation cleared! Final score: {score}"),
        GameStatus::Ongoing => info!("Quit before the end of the run"),
    }
    Ok(())
}

/// Plays games back to back; returns the status of the last one.
fn run<W: Write>(
    out: &mut W,
    config: &GameConfig,
    rng: &mut StdRng,
    rx: &mpsc::Receiver<Event>,
) -> GameResult<GameStatus> {
    loop {
        let mut state = init_state(config.clone(), rng)?;
        match game_loop(out, &mut state, rng, rx)? {
            LoopExit::Quit => return Ok(state.status),
            LoopExit::Restart => info!("Restarting after {:?}", state.status),
        }
    }
}
