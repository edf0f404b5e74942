//! Game configuration - rule constants with validation

use thiserror::Error;

use crate::types::{DROP_STEP_MS, INITIAL_DROP_MS, LEVEL_SCORE_STEP, LINE_BASE_POINTS, MIN_DROP_MS};

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("drop interval must be greater than zero (initial {initial_ms}ms, minimum {min_ms}ms)")]
    ZeroInterval { initial_ms: u32, min_ms: u32 },
    #[error("minimum drop interval {min_ms}ms exceeds initial interval {initial_ms}ms")]
    MinAboveInitial { initial_ms: u32, min_ms: u32 },
    #[error("level score step must be greater than zero")]
    ZeroLevelStep,
    #[error("line base points must be greater than zero")]
    ZeroBasePoints,
}

/// Tunable rules of a session
///
/// Defaults reproduce the classic browser game: 1000ms gravity at level 1,
/// 50ms faster per level down to 100ms, a new level every 100 points and
/// 10 points for the first row of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub initial_drop_ms: u32,
    pub drop_step_ms: u32,
    pub min_drop_ms: u32,
    pub level_score_step: u32,
    pub line_base_points: u32,
    /// Draw the landing projection of the active piece.
    pub show_ghost: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_drop_ms: INITIAL_DROP_MS,
            drop_step_ms: DROP_STEP_MS,
            min_drop_ms: MIN_DROP_MS,
            level_score_step: LEVEL_SCORE_STEP,
            line_base_points: LINE_BASE_POINTS,
            show_ghost: true,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_drop_ms == 0 || self.min_drop_ms == 0 {
            return Err(ConfigError::ZeroInterval {
                initial_ms: self.initial_drop_ms,
                min_ms: self.min_drop_ms,
            });
        }
        if self.min_drop_ms > self.initial_drop_ms {
            return Err(ConfigError::MinAboveInitial {
                initial_ms: self.initial_drop_ms,
                min_ms: self.min_drop_ms,
            });
        }
        if self.level_score_step == 0 {
            return Err(ConfigError::ZeroLevelStep);
        }
        if self.line_base_points == 0 {
            return Err(ConfigError::ZeroBasePoints);
        }
        Ok(())
    }
}
