use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty level shared by the policy-tap game and the escape room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Level {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }

    #[must_use]
    pub const fn config(self) -> LevelConfig {
        match self {
            Self::Beginner => LevelConfig {
                ball_count: 3,
                speed: 0.5,
                spawn_delay_ms: 500,
                countdown_secs: None,
            },
            Self::Intermediate => LevelConfig {
                ball_count: 4,
                speed: 1.0,
                spawn_delay_ms: 350,
                countdown_secs: None,
            },
            Self::Expert => LevelConfig {
                ball_count: 5,
                speed: 1.5,
                spawn_delay_ms: 300,
                countdown_secs: Some(5),
            },
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown level: {0}")]
pub struct UnknownLevel(pub String);

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "expert" => Ok(Self::Expert),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// Tuning for one level of the policy-tap game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub ball_count: usize,
    pub speed: f64,
    pub spawn_delay_ms: u64,
    pub countdown_secs: Option<u32>,
}

/// Full traversal time of a ball at speed 1.0.
const BASE_FALL_MS: f64 = 10_000.0;
/// Stagger used when deciding when the expert countdown begins.
const COUNTDOWN_STAGGER_MS: u64 = 200;
const COUNTDOWN_BUFFER_MS: u64 = 500;
const MARGIN_PERCENT: f64 = 10.0;

impl LevelConfig {
    /// Milliseconds a ball takes to fall through the play field.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fall_duration_ms(&self) -> u64 {
        (BASE_FALL_MS / self.speed).round() as u64
    }

    /// Delay from question start until the countdown starts, for `balls` balls.
    #[must_use]
    pub const fn countdown_start_ms(&self, balls: usize) -> u64 {
        (balls.saturating_sub(1) as u64) * COUNTDOWN_STAGGER_MS + COUNTDOWN_BUFFER_MS
    }

    /// Delay before ball `index` appears.
    #[must_use]
    pub const fn spawn_offset_ms(&self, index: usize) -> u64 {
        index as u64 * self.spawn_delay_ms
    }

    #[must_use]
    pub const fn has_countdown(&self) -> bool {
        self.countdown_secs.is_some()
    }
}

/// Horizontal position (percent of the play field) of ball `index` out of `count`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ball_x_percent(index: usize, count: usize) -> f64 {
    let spacing = (100.0 - MARGIN_PERCENT * 2.0) / (count as f64 + 1.0);
    MARGIN_PERCENT + spacing * (index as f64 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_tuning_matches_expected_table() {
        let beginner = Level::Beginner.config();
        assert_eq!(beginner.ball_count, 3);
        assert_eq!(beginner.fall_duration_ms(), 20_000);
        assert!(!beginner.has_countdown());

        let intermediate = Level::Intermediate.config();
        assert_eq!(intermediate.ball_count, 4);
        assert_eq!(intermediate.fall_duration_ms(), 10_000);

        let expert = Level::Expert.config();
        assert_eq!(expert.ball_count, 5);
        assert_eq!(expert.fall_duration_ms(), 6_667);
        assert_eq!(expert.countdown_secs, Some(5));
        assert_eq!(expert.countdown_start_ms(5), 1_300);
        assert_eq!(expert.spawn_offset_ms(4), 1_200);
    }

    #[test]
    fn balls_are_spread_inside_margins() {
        let xs: Vec<f64> = (0..3).map(|i| ball_x_percent(i, 3)).collect();
        assert!((xs[0] - 30.0).abs() < 1e-9);
        assert!((xs[1] - 50.0).abs() < 1e-9);
        assert!((xs[2] - 70.0).abs() < 1e-9);
        assert!(xs.iter().all(|x| *x > 10.0 && *x < 90.0));
    }

    #[test]
    fn parses_levels_case_insensitively() {
        assert_eq!("Expert".parse::<Level>(), Ok(Level::Expert));
        assert_eq!(" beginner ".parse::<Level>(), Ok(Level::Beginner));
        assert!("legendary".parse::<Level>().is_err());
        assert_eq!(Level::Intermediate.to_string(), "intermediate");
    }
}
