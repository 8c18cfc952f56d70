use crate::level::{LevelConfig, ball_x_percent};
use crate::models::TapQuestion;
use rand::Rng;
use rand::seq::SliceRandom;

const BASE_Z_INDEX: u32 = 20;

/// One falling option.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: usize,
    pub option: String,
    pub correct: bool,
    pub x_percent: f64,
    pub z_index: u32,
    pub spawn_offset_ms: u64,
    pub fall_ms: u64,
    pub spawned: bool,
    pub landed: bool,
}

impl Ball {
    /// Visible and still tappable.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.spawned && !self.landed
    }
}

/// Build the balls for one round: the correct option plus up to
/// `ball_count - 1` distinct decoys, shuffled.
pub fn deal_balls<R: Rng + ?Sized>(
    question: &TapQuestion,
    config: &LevelConfig,
    rng: &mut R,
) -> Vec<Ball> {
    let mut decoys: Vec<&String> = Vec::new();
    for wrong in &question.wrong_options {
        if wrong != &question.correct && !decoys.contains(&wrong) && !wrong.trim().is_empty() {
            decoys.push(wrong);
        }
    }
    let wanted = config.ball_count.saturating_sub(1);
    if decoys.len() < wanted {
        log::warn!(
            "question '{}' has {} decoys, level wants {wanted}",
            question.question,
            decoys.len()
        );
    }

    let mut options: Vec<(String, bool)> = decoys
        .choose_multiple(rng, wanted)
        .map(|wrong| ((*wrong).clone(), false))
        .collect();
    options.push((question.correct.clone(), true));
    options.shuffle(rng);

    let count = options.len();
    let fall_ms = config.fall_duration_ms();
    options
        .into_iter()
        .enumerate()
        .map(|(id, (option, correct))| Ball {
            id,
            option,
            correct,
            x_percent: ball_x_percent(id, count),
            z_index: BASE_Z_INDEX + u32::try_from(id).unwrap_or(u32::MAX - BASE_Z_INDEX),
            spawn_offset_ms: config.spawn_offset_ms(id),
            fall_ms,
            spawned: false,
            landed: false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn question(wrong: &[&str]) -> TapQuestion {
        TapQuestion {
            question: "Who approves remote access?".into(),
            correct: "IT Security".into(),
            wrong_options: wrong.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    #[test]
    fn every_level_deals_its_ball_count_with_one_correct() {
        let q = question(&["HR", "Finance", "Legal", "Facilities", "Marketing"]);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            for level in Level::ALL {
                let cfg = level.config();
                let balls = deal_balls(&q, &cfg, &mut rng);
                assert_eq!(balls.len(), cfg.ball_count);
                assert_eq!(balls.iter().filter(|b| b.correct).count(), 1);
                assert!(balls.iter().all(|b| !b.spawned && !b.landed));
            }
        }
    }

    #[test]
    fn short_decoy_lists_use_what_exists() {
        let q = question(&["HR", "HR", "IT Security", ""]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let balls = deal_balls(&q, &Level::Expert.config(), &mut rng);
        assert_eq!(balls.len(), 2);
        assert_eq!(balls.iter().filter(|b| b.correct).count(), 1);
    }

    #[test]
    fn layout_and_stacking_follow_spawn_order() {
        let q = question(&["HR", "Finance"]);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let balls = deal_balls(&q, &Level::Beginner.config(), &mut rng);
        let z: Vec<u32> = balls.iter().map(|b| b.z_index).collect();
        assert_eq!(z, vec![20, 21, 22]);
        let offsets: Vec<u64> = balls.iter().map(|b| b.spawn_offset_ms).collect();
        assert_eq!(offsets, vec![0, 500, 1000]);
        assert!(balls.iter().all(|b| b.fall_ms == 20_000));
    }
}
