//! Scoring module - sweep points, levels and gravity speed
//!
//! Rows of a sweep are credited one at a time: the k-th row found (k from 0)
//! is worth `base * 2^k`, and the doubling starts over with every sweep.
//! Level N lasts until the score reaches `N * level_score_step`; each level
//! gained shortens the drop interval by `drop_step_ms`, never going below
//! `min_drop_ms`.

use crate::config::GameConfig;

/// Points for the `row_index`-th row (0-based) cleared in one sweep.
pub fn row_points(row_index: u32, base: u32) -> u32 {
    2u32.checked_pow(row_index)
        .map_or(u32::MAX, |m| base.saturating_mul(m))
}

/// Total points for a sweep that cleared `cleared` rows.
///
/// ```
/// use blockfall_core::sweep_points;
///
/// assert_eq!(sweep_points(0, 10), 0);
/// assert_eq!(sweep_points(1, 10), 10);
/// assert_eq!(sweep_points(2, 10), 30);
/// assert_eq!(sweep_points(4, 10), 150);
/// ```
pub fn sweep_points(cleared: u32, base: u32) -> u32 {
    (0..cleared).fold(0u32, |acc, k| acc.saturating_add(row_points(k, base)))
}

/// What one call into the score keeper changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreDelta {
    pub points: u32,
    /// Number of level thresholds crossed.
    pub level_ups: u32,
    /// Level after the update.
    pub level: u32,
}

impl ScoreDelta {
    /// The levels that were reached, in order.
    pub fn levels_reached(&self) -> impl Iterator<Item = u32> {
        let first = self.level + 1 - self.level_ups;
        first..=self.level
    }
}

/// Score, level and drop interval of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u32,
    level: u32,
    drop_interval_ms: u32,
    initial_drop_ms: u32,
    drop_step_ms: u32,
    min_drop_ms: u32,
    level_score_step: u32,
    line_base_points: u32,
}

impl ScoreKeeper {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            level: 1,
            drop_interval_ms: config.initial_drop_ms,
            initial_drop_ms: config.initial_drop_ms,
            drop_step_ms: config.drop_step_ms,
            min_drop_ms: config.min_drop_ms,
            level_score_step: config.level_score_step,
            line_base_points: config.line_base_points,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    /// Back to level 1 with no points and the initial interval.
    pub fn reset(&mut self) {
        self.score = 0;
        self.level = 1;
        self.drop_interval_ms = self.initial_drop_ms;
    }

    /// Credit a sweep of `cleared` rows.
    pub fn record_sweep(&mut self, cleared: u32) -> ScoreDelta {
        let mut delta = ScoreDelta {
            level: self.level,
            ..ScoreDelta::default()
        };
        for k in 0..cleared {
            let step = self.add_points(row_points(k, self.line_base_points));
            delta.points = delta.points.saturating_add(step.points);
            delta.level_ups += step.level_ups;
            delta.level = step.level;
        }
        delta
    }

    /// Add points and apply every level threshold they cross.
    pub fn add_points(&mut self, points: u32) -> ScoreDelta {
        self.score = self.score.saturating_add(points);

        let mut level_ups = 0;
        while u64::from(self.score) >= u64::from(self.level) * u64::from(self.level_score_step) {
            self.level += 1;
            self.drop_interval_ms = self
                .drop_interval_ms
                .saturating_sub(self.drop_step_ms)
                .max(self.min_drop_ms);
            level_ups += 1;
        }

        ScoreDelta {
            points,
            level_ups,
            level: self.level,
        }
    }
}

impl Default for ScoreKeeper {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_scores_base_points() {
        let mut keeper = ScoreKeeper::default();
        let delta = keeper.record_sweep(1);
        assert_eq!(delta.points, 10);
        assert_eq!(keeper.score(), 10);
        assert_eq!(keeper.level(), 1);
    }

    #[test]
    fn multiplier_doubles_within_a_sweep() {
        let mut keeper = ScoreKeeper::default();
        assert_eq!(keeper.record_sweep(2).points, 30);
        assert_eq!(keeper.record_sweep(3).points, 70);
        assert_eq!(keeper.score(), 100);
    }

    #[test]
    fn multiplier_resets_between_sweeps() {
        let mut keeper = ScoreKeeper::default();
        keeper.record_sweep(1);
        keeper.record_sweep(1);
        assert_eq!(keeper.score(), 20);
    }

    #[test]
    fn empty_sweep_changes_nothing() {
        let mut keeper = ScoreKeeper::default();
        let delta = keeper.record_sweep(0);
        assert_eq!(delta, ScoreDelta { points: 0, level_ups: 0, level: 1 });
        assert_eq!(keeper.score(), 0);
    }

    #[test]
    fn level_up_at_exact_threshold() {
        let mut keeper = ScoreKeeper::default();
        let delta = keeper.add_points(99);
        assert_eq!(delta.level_ups, 0);
        assert_eq!(keeper.drop_interval_ms(), 1000);

        let delta = keeper.add_points(1);
        assert_eq!(delta.level_ups, 1);
        assert_eq!(keeper.level(), 2);
        assert_eq!(keeper.drop_interval_ms(), 950);
        assert_eq!(delta.levels_reached().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn several_thresholds_in_one_call_each_count() {
        let mut keeper = ScoreKeeper::default();
        // 350 points crosses 100, 200 and 300.
        let delta = keeper.add_points(350);
        assert_eq!(delta.level_ups, 3);
        assert_eq!(keeper.level(), 4);
        assert_eq!(keeper.drop_interval_ms(), 850);
        assert_eq!(delta.levels_reached().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn interval_is_floored() {
        let mut keeper = ScoreKeeper::default();
        keeper.add_points(10_000);
        assert_eq!(keeper.level(), 101);
        assert_eq!(keeper.drop_interval_ms(), 100);
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut keeper = ScoreKeeper::default();
        keeper.add_points(450);
        keeper.reset();
        assert_eq!(keeper, ScoreKeeper::default());
    }

    #[test]
    fn custom_rules_are_honored() {
        let config = GameConfig {
            initial_drop_ms: 500,
            drop_step_ms: 100,
            min_drop_ms: 300,
            level_score_step: 50,
            line_base_points: 25,
            show_ghost: true,
        };
        let mut keeper = ScoreKeeper::new(&config);
        // 25 + 50 = 75: crosses 50 only.
        let delta = keeper.record_sweep(2);
        assert_eq!(delta.points, 75);
        assert_eq!(delta.level_ups, 1);
        assert_eq!(keeper.drop_interval_ms(), 400);
        keeper.add_points(200);
        assert_eq!(keeper.drop_interval_ms(), 300);
    }
}
