pub mod admin_analytics;
pub mod admin_dashboard;
pub mod admin_policies;
pub mod admin_policy_analysis;
pub mod escape_leaderboard;
pub mod escape_levels;
pub mod escape_play;
pub mod escape_results;
pub mod escape_room;
pub mod game_play;
pub mod games;
pub mod home;
pub mod leaderboard;
pub mod login;
pub mod not_found;
pub mod policy_tap;
pub mod signup;
pub mod tap_leaderboard;
pub mod tap_levels;
pub mod tap_play;
pub mod tap_results;
pub mod upload;
pub mod user_scores;
