//! Terminal blockfall runner (default binary).
//!
//! Drives a `Session` from a fixed-period frame loop: crossterm key events
//! become commands, each frame calls `tick` with milliseconds since start,
//! and the resulting framebuffer is flushed as a diff.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use log::info;

use blockfall::core::{Frame, GameConfig, Session};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{BellSound, GameView, TerminalRenderer, Viewport};
use blockfall::types::{FRAME_MS, INITIAL_DROP_MS, MIN_DROP_MS};

/// How long to wait for input while the game is halted.
const HALTED_POLL: Duration = Duration::from_millis(250);

/// Falling-block puzzle game in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle game in the terminal.",
    long_about = "Stack falling pieces and clear full rows. Each level is 50ms faster.\n\n\
        CONTROLS:\n  Left/Right (h/l, a/d)  Move     Up (k, w)   Rotate CW\n  \
        Down (j, s)            Soft drop  Space       Hard drop\n  \
        P / Esc                Pause      R / Enter   Restart    Q / Ctrl-C  Quit"
)]
struct Args {
    /// Seed for the piece generator (random if omitted).
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Gravity interval at level 1.
    #[arg(long, default_value_t = INITIAL_DROP_MS, value_name = "MS")]
    drop_ms: u32,

    /// Fastest gravity interval.
    #[arg(long, default_value_t = MIN_DROP_MS, value_name = "MS")]
    min_drop_ms: u32,

    /// Frame period of the host loop.
    #[arg(
        long,
        default_value_t = FRAME_MS,
        value_name = "MS",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    frame_ms: u32,

    /// Do not draw the landing projection.
    #[arg(long)]
    no_ghost: bool,

    /// Ring the terminal bell when a piece locks.
    #[arg(long)]
    bell: bool,

    /// Write logs to FILE (filtered by RUST_LOG, default info).
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            initial_drop_ms: self.drop_ms,
            min_drop_ms: self.min_drop_ms,
            show_ghost: !self.no_ghost,
            ..GameConfig::default()
        }
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut session = Session::try_new(args.game_config(), seed).context("invalid game settings")?;
    info!("seed {}", seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut sound = BellSound::new(args.bell);
    let result = run(
        &mut term,
        &mut session,
        &mut sound,
        Duration::from_millis(u64::from(args.frame_ms)),
    );

    // Always try to restore terminal state.
    let _ = term.exit();

    if result.is_ok() {
        println!(
            "score {}  level {}  (seed {})",
            session.score(),
            session.level(),
            seed
        );
    }
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    sound: &mut BellSound,
    frame: Duration,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut view = GameView::new(Viewport::new(w, h));

    let start = Instant::now();
    let mut next_frame = start;
    let mut halted = false;

    loop {
        let now = Instant::now();
        if !halted && now >= next_frame {
            let now_ms = start.elapsed().as_millis() as u64;
            halted = session.tick(now_ms, &mut view) == Frame::Halt;
            session.dispatch_sound(sound);
            term.draw_swap(view.framebuffer_mut())?;

            next_frame += frame;
            if next_frame < now {
                // Fell behind (suspended terminal, slow flush): skip ahead.
                next_frame = now + frame;
            }
        }

        let timeout = if halted {
            HALTED_POLL
        } else {
            next_frame.saturating_duration_since(Instant::now())
        };

        if !event::poll(timeout)? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                if should_quit(key) {
                    return Ok(());
                }
                let Some(command) = handle_key_event(key) else {
                    continue;
                };
                if session.handle(command) && halted && !session.game_over() {
                    // Restarted: resume the frame loop right away.
                    halted = false;
                    next_frame = Instant::now();
                }
                session.dispatch_sound(sound);
            }
            Event::Resize(w, h) => {
                view.set_viewport(Viewport::new(w, h));
                term.invalidate();
                if halted {
                    redraw(term, session, &mut view)?;
                }
            }
            _ => {}
        }
    }
}

/// Draw without ticking, for when the loop is halted.
fn redraw(term: &mut TerminalRenderer, session: &Session, view: &mut GameView) -> Result<()> {
    session.render(view);
    term.draw_swap(view.framebuffer_mut())
}
