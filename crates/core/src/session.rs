//! Session module - the game loop
//!
//! A session ties the board, the active piece, the next queue and the score
//! keeper together. The host drives it with two calls:
//!
//! - [`Session::handle`] for every input command, applied immediately
//! - [`Session::tick`] once per frame with a monotonic timestamp in ms
//!
//! Gravity is a plain accumulator: the delta between consecutive ticks is
//! added to a drop counter and the piece soft-drops once the counter exceeds
//! the current drop interval. Any soft or hard drop resets the counter.
//!
//! Locking always runs in the same order: merge, sweep, score, spawn. A spawn
//! that collides ends the game.

use log::{debug, info};

use crate::board::Board;
use crate::catalog::get_shape;
use crate::collab::{notify, Renderer, Sound};
use crate::config::{ConfigError, GameConfig};
use crate::player::{Player, Step};
use crate::queue::NextQueue;
use crate::scoring::ScoreKeeper;
use crate::shape::Position;
use crate::types::{Command, GameEvent, PieceKind};

/// Whether the host should keep calling `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Continue,
    /// The game is over; ticking resumes after a restart.
    Halt,
}

pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const PAUSED_TEXT: &str = "PAUSED";

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    board: Board,
    player: Player,
    queue: NextQueue,
    scoring: ScoreKeeper,
    drop_counter_ms: u64,
    /// Timestamp of the previous tick; `None` until the first tick.
    last_timestamp: Option<u64>,
    paused: bool,
    game_over: bool,
    /// Number of restarts so far.
    episode: u32,
    pieces_locked: u32,
    events: Vec<GameEvent>,
}

impl Session {
    /// New game with the default rules.
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// New game with custom rules.
    pub fn try_new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let board = Board::new();
        let mut queue = NextQueue::new(seed);
        // Placeholder; `reset` deals the real first piece.
        let mut player = Player::spawn(PieceKind::O);
        let game_over = player.reset(&mut queue, &board);

        info!("game started (seed {})", seed);

        let mut events = vec![GameEvent::GameStart];
        if game_over {
            events.push(GameEvent::GameOver);
        }

        Self {
            scoring: ScoreKeeper::new(&config),
            config,
            board,
            player,
            queue,
            drop_counter_ms: 0,
            last_timestamp: None,
            paused: false,
            game_over,
            episode: 0,
            pieces_locked: 0,
            events,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions (tests, benchmarks).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn score(&self) -> u32 {
        self.scoring.score()
    }

    pub fn level(&self) -> u32 {
        self.scoring.level()
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.scoring.drop_interval_ms()
    }

    pub fn drop_counter_ms(&self) -> u64 {
        self.drop_counter_ms
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Landing position of the active piece; `None` once the game is over.
    pub fn ghost_position(&self) -> Option<Position> {
        if self.game_over {
            return None;
        }
        Some(self.player.ghost_position(&self.board))
    }

    /// Swap the active piece for a fresh `kind` at its spawn position.
    ///
    /// Used to set up positions. Returns false (and changes nothing) if the
    /// piece would collide or the game is over.
    pub fn replace_active(&mut self, kind: PieceKind) -> bool {
        let candidate = Player::spawn(kind);
        if self.game_over || candidate.collides(&self.board) {
            return false;
        }
        self.player = candidate;
        true
    }

    /// Apply one input command.
    ///
    /// While the game is over only `Restart` is honored; while paused only
    /// `TogglePause` and `Restart`. Returns whether the command had an effect.
    ///
    /// Events raised here are queued until [`Session::drain_events`] or
    /// [`Session::dispatch_sound`] takes them.
    pub fn handle(&mut self, command: Command) -> bool {
        match command {
            Command::Restart => {
                self.restart();
                true
            }
            Command::TogglePause => self.toggle_pause(),
            Command::MoveLeft => self.move_piece(-1),
            Command::MoveRight => self.move_piece(1),
            Command::SoftDrop => self.soft_drop(),
            Command::HardDrop => self.hard_drop(),
            Command::RotateCw => self.rotate(),
        }
    }

    fn accepts_moves(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
        true
    }

    /// Shift the active piece; `dir` is -1 or +1.
    pub fn move_piece(&mut self, dir: i8) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        self.player.shift(&self.board, dir)
    }

    /// Move down one row, locking the piece if it cannot.
    ///
    /// Returns true if the piece moved. The drop counter is reset either way.
    pub fn soft_drop(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        self.drop_counter_ms = 0;
        match self.player.step_down(&self.board) {
            Step::Moved => true,
            Step::Landed => {
                self.lock_piece();
                false
            }
        }
    }

    /// Drop to the landing position and lock.
    pub fn hard_drop(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        let fallen = self.player.hard_drop(&self.board);
        debug!("hard drop: {} rows", fallen);
        self.lock_piece();
        self.drop_counter_ms = 0;
        true
    }

    /// Rotate clockwise; false when paused, over or no kick fits.
    pub fn rotate(&mut self) -> bool {
        if !self.accepts_moves() {
            return false;
        }
        self.player.rotate(&self.board)
    }

    fn lock_piece(&mut self) {
        self.player.lock_into(&mut self.board);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.events.push(GameEvent::Lock);

        let sweep = self.board.sweep();
        if !sweep.is_empty() {
            let delta = self.scoring.record_sweep(sweep.count());
            debug!(
                "swept rows {:?}: +{} points (score {})",
                sweep.rows(),
                delta.points,
                self.scoring.score()
            );
            for level in delta.levels_reached() {
                info!(
                    "level {} reached, drop interval {}ms",
                    level,
                    self.scoring.drop_interval_ms()
                );
                self.events.push(GameEvent::LevelUp { level });
            }
        }

        if self.player.reset(&mut self.queue, &self.board) {
            self.game_over = true;
            self.events.push(GameEvent::GameOver);
            info!(
                "game over: score {}, level {}, {} pieces",
                self.scoring.score(),
                self.scoring.level(),
                self.pieces_locked
            );
        }
    }

    /// Throw the current game away and start a fresh one.
    ///
    /// The random stream carries on, so the new game deals different pieces.
    pub fn restart(&mut self) {
        self.board.clear();
        self.queue.reset();
        self.scoring.reset();
        self.game_over = self.player.reset(&mut self.queue, &self.board);
        self.paused = false;
        self.drop_counter_ms = 0;
        self.last_timestamp = None;
        self.pieces_locked = 0;
        self.episode = self.episode.wrapping_add(1);
        self.events.push(GameEvent::Restart);
        info!("restart (episode {})", self.episode);
    }

    /// Advance the clock to `now_ms` and draw a frame.
    ///
    /// Raised events accumulate until drained; hosts call
    /// [`Session::dispatch_sound`] (or [`Session::drain_events`]) once per frame.
    pub fn tick<R: Renderer + ?Sized>(&mut self, now_ms: u64, renderer: &mut R) -> Frame {
        if self.game_over {
            self.render(renderer);
            return Frame::Halt;
        }

        let delta = self
            .last_timestamp
            .map_or(0, |last| now_ms.saturating_sub(last));
        self.last_timestamp = Some(now_ms);

        if self.paused {
            self.render(renderer);
            return Frame::Continue;
        }

        self.drop_counter_ms += delta;
        if self.drop_counter_ms > u64::from(self.scoring.drop_interval_ms()) {
            self.soft_drop();
        }

        self.render(renderer);
        if self.game_over {
            Frame::Halt
        } else {
            Frame::Continue
        }
    }

    /// Draw the current state without advancing time.
    ///
    /// A paused game shows only the pause indicator.
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.begin_frame();
        if self.paused && !self.game_over {
            renderer.draw_overlay_text(PAUSED_TEXT);
            return;
        }
        renderer.draw_board(&self.board);

        if !self.game_over {
            if self.config.show_ghost {
                let ghost = self.player.ghost_position(&self.board);
                if ghost != self.player.position() {
                    renderer.draw_piece(self.player.shape(), ghost, true);
                }
            }
            renderer.draw_piece(self.player.shape(), self.player.position(), false);
        }

        for (slot, kind) in self.queue.iter().enumerate() {
            renderer.draw_preview(&get_shape(kind), slot);
        }

        renderer.draw_stats(self.scoring.score(), self.scoring.level());

        if self.game_over {
            renderer.draw_overlay_text(GAME_OVER_TEXT);
        }
    }

    /// Take the events raised since the last drain.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Forward pending events to `sound` and clear them.
    pub fn dispatch_sound<S: Sound + ?Sized>(&mut self, sound: &mut S) {
        for event in self.events.drain(..) {
            notify(sound, event);
        }
    }
}
