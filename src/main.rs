//! Terminal blockfall runner (default binary).
//!
//! A thin host around the engine: it polls crossterm input once per frame,
//! forwards actions to the engine right away, calls `soft_drop` on the gravity
//! cadence, and redraws from a snapshot every frame.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use blockfall::core::{
    DropOutcome, EngineConfig, GameOverPolicy, GameSnapshot, GameState, SimpleRng,
};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, HostStatus, TerminalRenderer, Viewport};
use blockfall::types::{
    GameAction, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_FPS, DEFAULT_GRAVITY_FRAMES,
};
use blockfall::Gravity;

#[derive(Parser, Debug)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Piece sequence seed. Defaults to one derived from the system clock.
    #[arg(long)]
    seed: Option<u32>,

    /// Board width in cells.
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u8,

    /// Board height in cells.
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u8,

    /// Polling iterations (frames) per second.
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Frames between two gravity drops.
    #[arg(long, default_value_t = DEFAULT_GRAVITY_FRAMES)]
    gravity_frames: u32,

    /// Stop on a blocked spawn instead of wiping the board.
    #[arg(long)]
    halt_on_game_over: bool,

    /// Write logs to this file (filter with RUST_LOG, default "info").
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(seed_from_clock);
    let policy = if args.halt_on_game_over {
        GameOverPolicy::Halt
    } else {
        GameOverPolicy::Reset
    };
    let config = EngineConfig::default()
        .with_size(args.width, args.height)
        .with_game_over(policy);
    let game =
        GameState::new(config, SimpleRng::new(seed)).context("invalid board configuration")?;
    info!(
        "starting {}x{} game, seed {}, {} fps, gravity every {} frames",
        args.width, args.height, seed, args.fps, args.gravity_frames
    );

    let mut term = TerminalRenderer::new();
    let result = term
        .enter()
        .and_then(|()| run(&mut term, game, &args, seed));

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // stderr would scribble over the raw-mode screen, so logging is file-only.
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

fn run(
    term: &mut TerminalRenderer,
    mut game: GameState,
    args: &Args,
    seed: u32,
) -> Result<()> {
    let view = GameView::default();
    let mut gravity = Gravity::new(args.gravity_frames);
    let frame = Duration::from_millis(1000 / u64::from(args.fps.max(1)));
    let mut status = HostStatus {
        paused: false,
        seed,
    };

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, &status, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit with score {}, lines {}", game.score(), game.lines());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        apply_host_action(&mut game, &mut status, &mut gravity, action);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if last_frame.elapsed() >= frame {
            last_frame = Instant::now();
            if !status.paused && gravity.tick() {
                if let DropOutcome::Locked {
                    lines_cleared,
                    topped_out: true,
                    ..
                } = game.soft_drop()
                {
                    info!(
                        "topped out (cleared {} on the last lock), score {}",
                        lines_cleared,
                        game.score()
                    );
                }
            }
        }
    }
}

fn apply_host_action(
    game: &mut GameState,
    status: &mut HostStatus,
    gravity: &mut Gravity,
    action: GameAction,
) {
    match action {
        GameAction::Pause => {
            status.paused = !status.paused;
            debug!("paused: {}", status.paused);
        }
        GameAction::Restart => {
            game.restart();
            gravity.reset();
            status.paused = false;
        }
        _ if status.paused => {}
        _ => {
            game.apply_action(action);
        }
    }
}
