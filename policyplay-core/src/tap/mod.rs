//! Policy-tap play loop: falling option balls, one question at a time.
//!
//! [`TapSession`] is a pure state machine. Hosts feed it taps, fired timers
//! and API acknowledgements, and execute the [`TapEffect`]s it returns.
//! Timers are plain data tagged with the session epoch; a timer whose epoch
//! is stale when it fires is ignored.

mod ball;
mod clock;
mod session;

pub use ball::{Ball, deal_balls};
pub use clock::VirtualClock;
pub use session::{
    ADVANCE_DELAY_MS, CLEAR_BALLS_DELAY_MS, COUNTDOWN_TICK_MS, EXPIRY_GRACE_MS, Explosion,
    FEEDBACK_HOLD_MS, NAVIGATE_DELAY_MS, QuestionPhase, RESPAWN_DELAY_MS, TapEffect, TapSession,
    Tally,
};

/// Timer identity. Ordering only breaks ties inside the virtual clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerKind {
    SpawnBall(usize),
    BallLanded(usize),
    CountdownStart,
    CountdownTick,
    ReportMissed,
    Respawn,
    ClearBalls,
    ClearField,
    Advance,
    Navigate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timer {
    pub epoch: u64,
    pub kind: TimerKind,
}
