//! PolicyPlay Client Core
//!
//! Platform-agnostic client logic for the PolicyPlay policy-learning games.
//! This crate holds the wire models, the auth session, endpoint resolution and
//! the timer-driven game flows without any browser dependencies.

pub mod auth;
pub mod endpoint;
pub mod error;
pub mod escape;
pub mod level;
pub mod models;
pub mod quiz;
pub mod results;
pub mod store;
pub mod tap;

pub use auth::{AuthSession, TOKEN_KEY, USER_KEY};
pub use endpoint::{ApiEndpoint, DEFAULT_API_URL, resolve_endpoint};
pub use error::{ApiError, Recovery, detail_from_body};
pub use escape::{EscapeError, EscapeFlow, MasterPart, NextStep, RoomAnswer, RoomNumber, RoomView};
pub use level::{Level, LevelConfig};
pub use models::*;
pub use quiz::{QuizError, QuizSelection, build_submission, locate_violation_range};
pub use results::{
    AttemptResults, ESCAPE_RESULTS_KEY, TAP_RESULTS_KEY, stash_results, take_results,
    take_results_for,
};
pub use store::{KeyValueStore, MemoryStore, StoreError};
pub use tap::{
    Ball, QuestionPhase, TapEffect, TapSession, Tally, Timer, TimerKind, VirtualClock,
};
