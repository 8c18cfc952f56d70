pub mod alert;
pub mod confetti;
pub mod explosion;
pub mod game_hud;
pub mod header;
pub mod leaderboard_table;
pub mod level_picker;
pub mod loading;
pub mod policy_list;
pub mod question_card;
pub mod score_tracker;
pub mod tap_ball;
pub mod timer;
