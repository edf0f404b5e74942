//! Terminal bell as the sound collaborator.
//!
//! A terminal has one sound: BEL. It rings when a piece locks and when the
//! game ends; the other cues are only logged. Ringing is opt-in.

use std::io::{self, Write};

use log::{debug, warn};

use crate::core::Sound;

const BEL: &[u8] = b"\x07";

pub struct BellSound<W: Write = io::Stdout> {
    out: W,
    enabled: bool,
    rung: u32,
}

impl BellSound<io::Stdout> {
    pub fn new(enabled: bool) -> Self {
        Self::with_writer(io::stdout(), enabled)
    }
}

impl<W: Write> BellSound<W> {
    pub fn with_writer(out: W, enabled: bool) -> Self {
        Self {
            out,
            enabled,
            rung: 0,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// How many times the bell actually rang.
    pub fn rung(&self) -> u32 {
        self.rung
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn ring(&mut self) {
        if !self.enabled {
            return;
        }
        // A failed bell must never stop the game.
        match self.out.write_all(BEL).and_then(|_| self.out.flush()) {
            Ok(()) => self.rung += 1,
            Err(e) => warn!("bell failed: {}", e),
        }
    }
}

impl<W: Write> Sound for BellSound<W> {
    fn on_lock(&mut self) {
        self.ring();
    }

    fn on_level_up(&mut self, level: u32) {
        debug!("sound: level {}", level);
    }

    fn on_game_start(&mut self) {
        debug!("sound: game start");
    }

    fn on_game_over(&mut self) {
        debug!("sound: game over");
        self.ring();
    }

    fn on_restart(&mut self) {
        debug!("sound: restart");
    }
}
