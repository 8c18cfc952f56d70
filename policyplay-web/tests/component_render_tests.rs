use futures::executor::block_on;
use policyplay_core::{Ball, Level, User};
use policyplay_web::components::alert::{AlertBanner, AlertKind};
use policyplay_web::components::game_hud::GameHud;
use policyplay_web::components::header::Header;
use policyplay_web::components::leaderboard_table::{LeaderboardRow, LeaderboardTable};
use policyplay_web::components::level_picker::LevelPicker;
use policyplay_web::components::tap_ball::TapBall;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn admin() -> User {
    User {
        id: "a1".into(),
        email: "root@example.com".into(),
        name: "Robin".into(),
        role: "admin".into(),
        created_at: None,
    }
}

fn ball(spawned: bool, landed: bool) -> Ball {
    Ball {
        id: 3,
        option: "Encrypt the laptop".into(),
        correct: true,
        x_percent: 62.5,
        z_index: 4,
        spawn_offset_ms: 700,
        fall_ms: 12_000,
        spawned,
        landed,
    }
}

#[test]
fn header_shows_auth_links_for_visitors() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::components::header::Props {
        user: None,
        on_navigate: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("nav-login"));
    assert!(html.contains("nav-signup"));
    assert!(!html.contains("nav-logout"));
}

#[test]
fn header_shows_admin_link_only_for_admins() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::components::header::Props {
        user: Some(admin()),
        on_navigate: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("nav-admin"));
    assert!(html.contains("nav-logout"));
    assert!(html.contains("Robin"));

    let mut player = admin();
    player.role = "user".into();
    let props = policyplay_web::components::header::Props {
        user: Some(player),
        on_navigate: Callback::noop(),
        on_logout: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(!html.contains("nav-admin"));
}

#[test]
fn alert_banner_renders_nothing_without_message() {
    let props = policyplay_web::components::alert::Props {
        message: None,
        kind: AlertKind::Error,
    };
    let html = block_on(LocalServerRenderer::<AlertBanner>::with_props(props).render());
    assert!(!html.contains("alert-banner"));

    let props = policyplay_web::components::alert::Props {
        message: Some(AttrValue::from("Saved")),
        kind: AlertKind::Success,
    };
    let html = block_on(LocalServerRenderer::<AlertBanner>::with_props(props).render());
    assert!(html.contains("alert-success"));
    assert!(html.contains("Saved"));
}

#[test]
fn hud_flags_the_last_seconds() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::components::game_hud::Props {
        score: 24,
        question_index: 1,
        total_questions: 5,
        level: Level::Expert,
        time_remaining: Some(3),
    };
    let html = block_on(LocalServerRenderer::<GameHud>::with_props(props).render());
    assert!(html.contains("hud-timer"));
    assert!(html.contains("⏰"));
    assert!(html.contains("24"));

    let props = policyplay_web::components::game_hud::Props {
        score: 0,
        question_index: 0,
        total_questions: 5,
        level: Level::Beginner,
        time_remaining: None,
    };
    let html = block_on(LocalServerRenderer::<GameHud>::with_props(props).render());
    assert!(!html.contains("hud-timer"));
}

#[test]
fn only_live_balls_are_drawn() {
    let live = policyplay_web::components::tap_ball::Props {
        ball: ball(true, false),
        on_tap: Callback::noop(),
        disabled: false,
    };
    let html = block_on(LocalServerRenderer::<TapBall>::with_props(live).render());
    assert!(html.contains("tap-ball-3"));
    assert!(html.contains("Encrypt the laptop"));
    assert!(html.contains("left: 62.50%"));

    for (spawned, landed) in [(false, false), (true, true)] {
        let props = policyplay_web::components::tap_ball::Props {
            ball: ball(spawned, landed),
            on_tap: Callback::noop(),
            disabled: false,
        };
        let html = block_on(LocalServerRenderer::<TapBall>::with_props(props).render());
        assert!(!html.contains("tap-ball-3"));
    }
}

#[test]
fn level_picker_offers_every_level() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::components::level_picker::Props {
        on_pick: Callback::noop(),
        busy: Some(Level::Intermediate),
    };
    let html = block_on(LocalServerRenderer::<LevelPicker>::with_props(props).render());
    for id in ["level-beginner", "level-intermediate", "level-expert"] {
        assert!(html.contains(id), "missing {id}");
    }
    assert!(html.contains("Generating game..."));
}

#[test]
fn leaderboard_table_highlights_current_player() {
    policyplay_web::i18n::set_lang("en");
    let rows = vec![
        LeaderboardRow {
            rank: 1,
            name: "Ada".into(),
            email: "ada@example.com".into(),
            score: 310,
            detail: "92%".into(),
            highlight: false,
        },
        LeaderboardRow {
            rank: 4,
            name: "Sam".into(),
            email: "sam@example.com".into(),
            score: 120,
            detail: "60%".into(),
            highlight: true,
        },
    ];
    let props = policyplay_web::components::leaderboard_table::Props {
        rows,
        detail_label: AttrValue::from("Accuracy"),
    };
    let html = block_on(LocalServerRenderer::<LeaderboardTable>::with_props(props).render());
    assert!(html.contains("🥇"));
    assert!(html.contains("#4"));
    assert!(html.contains("leaderboard-row-4"));
    assert!(html.contains("Accuracy"));
}
