use futures::executor::block_on;
use policyplay_core::{
    Ball, EscapeResults, GameSession, GameType, Leaderboard, Level, PolicySummary, QuestionPhase,
    QuizSelection, RoomAnswer, RoomNumber, RoomStatus, RoomView, Scenario, TapResults,
    TapSubmitResponse, User,
};
use policyplay_web::pages::escape_play::{EscapePlayPage, EscapeView};
use policyplay_web::pages::escape_results::EscapeResultsPage;
use policyplay_web::pages::game_play::GamePlayPage;
use policyplay_web::pages::games::GamesPage;
use policyplay_web::pages::home::HomePage;
use policyplay_web::pages::leaderboard::LeaderboardPage;
use policyplay_web::pages::login::LoginPage;
use policyplay_web::pages::not_found::NotFound;
use policyplay_web::pages::tap_play::{TapPlayPage, TapView};
use policyplay_web::pages::tap_results::TapResultsPage;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn player() -> User {
    User {
        id: "u1".into(),
        email: "sam@example.com".into(),
        name: "Sam".into(),
        role: "user".into(),
        created_at: None,
    }
}

fn policy() -> PolicySummary {
    PolicySummary {
        policy_id: "p1".into(),
        title: "Remote Work".into(),
        filename: "remote.pdf".into(),
        rules_count: 4,
        clauses_count: 9,
        uploaded_by: None,
        uploaded_at: None,
    }
}

fn tap_view(phase: QuestionPhase) -> TapView {
    TapView {
        question: Some("Who signs off on VPN exceptions?".into()),
        index: 0,
        total: 3,
        level: Level::Beginner,
        phase,
        balls: vec![Ball {
            id: 0,
            option: "Security lead".into(),
            correct: true,
            x_percent: 40.0,
            z_index: 1,
            spawn_offset_ms: 0,
            fall_ms: 15_000,
            spawned: true,
            landed: false,
        }],
        score: 12,
        countdown: None,
        explosion: None,
        confetti: false,
        feedback: None,
        alert: None,
    }
}

#[test]
fn home_offers_sign_in_to_visitors_and_games_to_players() {
    policyplay_web::i18n::set_lang("en");
    let anon = policyplay_web::pages::home::Props {
        user: None,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(anon).render());
    assert!(html.contains("home-login"));
    assert!(html.contains("home-signup"));
    assert!(!html.contains("home-games"));
    assert!(html.contains("AI-Powered"));

    let signed_in = policyplay_web::pages::home::Props {
        user: Some(player()),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(signed_in).render());
    assert!(html.contains("home-games"));
    assert!(html.contains("home-tap"));
    assert!(html.contains("home-escape"));
    assert!(!html.contains("home-login"));
}

#[test]
fn login_page_switches_copy_for_admins() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::pages::login::Props {
        admin: true,
        busy: false,
        error: Some(AttrValue::from("Invalid credentials")),
        on_submit: Callback::noop(),
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
    assert!(html.contains("admin_login-page"));
    assert!(html.contains("Admin Login"));
    assert!(html.contains("Invalid credentials"));
}

#[test]
fn not_found_links_home() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::pages::not_found::Props {
        on_go_home: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<NotFound>::with_props(props).render());
    assert!(html.contains("not-found"));
    assert!(html.contains("Go Home"));
}

#[test]
fn games_page_lists_policies_with_generate_buttons() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::pages::games::Props {
        loading: false,
        policies: vec![policy()],
        expanded: None,
        expanded_games: None,
        generating: None,
        error: None,
        on_toggle: Callback::noop(),
        on_generate: Callback::noop(),
        on_play: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamesPage>::with_props(props).render());
    assert!(html.contains("games-page"));
    assert!(html.contains("Remote Work"));
    assert!(html.contains("generate-p1"));
}

#[test]
fn scenario_game_renders_lettered_options() {
    policyplay_web::i18n::set_lang("en");
    let session = GameSession {
        session_id: "s1".into(),
        policy_id: "p1".into(),
        game_type: GameType::Scenario,
        scenario: Some(Scenario {
            scenario_text: "A contractor asks for the guest Wi-Fi password.".into(),
            options: vec!["Share it".into(), "Refer them to IT".into()],
            correct_answer: 1,
            explanation: String::new(),
            policy_rule_used: String::new(),
        }),
        violation_scenario: None,
        created_at: None,
    };
    let props = policyplay_web::pages::game_play::Props {
        session: Some(session),
        selection: QuizSelection::Option(1),
        result: None,
        submitting: false,
        error: None,
        on_pick_option: Callback::noop(),
        on_select_text: Callback::noop(),
        on_submit: Callback::noop(),
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<GamePlayPage>::with_props(props).render());
    assert!(html.contains("quiz-option-0"));
    assert!(html.contains("quiz-option-1"));
    assert!(html.contains("Refer them to IT"));
    assert!(html.contains("aria-pressed=\"true\""));
}

#[test]
fn leaderboard_without_entries_shows_empty_state() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::pages::leaderboard::Props {
        board: Some(Leaderboard::default()),
        error: None,
    };
    let html = block_on(LocalServerRenderer::<LeaderboardPage>::with_props(props).render());
    assert!(html.contains("leaderboard-empty"));
}

#[test]
fn halted_tap_round_offers_retry() {
    policyplay_web::i18n::set_lang("en");
    let mut view = tap_view(QuestionPhase::Halted);
    view.alert = Some("Failed to submit answer: offline".into());
    let props = policyplay_web::pages::tap_play::Props {
        view: Some(view),
        on_tap: Callback::noop(),
        on_retry: Callback::noop(),
        on_quit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TapPlayPage>::with_props(props).render());
    assert!(html.contains("tap-retry"));
    assert!(html.contains("Failed to submit answer: offline"));
    assert!(html.contains("tap-ball-0"));
}

#[test]
fn tap_feedback_and_missed_banners_follow_phase() {
    policyplay_web::i18n::set_lang("en");
    let mut answered = tap_view(QuestionPhase::Transition);
    answered.feedback = Some(TapSubmitResponse {
        correct: true,
        points: 12,
        new_score: 12,
        correct_answer: "Security lead".into(),
        message: None,
    });
    let props = policyplay_web::pages::tap_play::Props {
        view: Some(answered),
        on_tap: Callback::noop(),
        on_retry: Callback::noop(),
        on_quit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TapPlayPage>::with_props(props).render());
    assert!(html.contains("tap-feedback"));
    assert!(html.contains("+12"));
    assert!(!html.contains("tap-retry"));

    let props = policyplay_web::pages::tap_play::Props {
        view: Some(tap_view(QuestionPhase::Missed)),
        on_tap: Callback::noop(),
        on_retry: Callback::noop(),
        on_quit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TapPlayPage>::with_props(props).render());
    assert!(html.contains("tap-missed"));
}

#[test]
fn tap_results_show_accuracy() {
    policyplay_web::i18n::set_lang("en");
    let props = policyplay_web::pages::tap_results::Props {
        results: Some(TapResults {
            attempt_id: "tap-9".into(),
            final_score: 27,
            correct_answers: 3,
            wrong_answers: 1,
            missed_answers: 0,
            time_taken: 42,
        }),
        on_play_again: Callback::noop(),
        on_leaderboard: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TapResultsPage>::with_props(props).render());
    assert!(html.contains("tap-final-score"));
    assert!(html.contains("75%"));
    assert!(html.contains("42s"));
}

#[test]
fn escape_room_renders_current_puzzle_and_progress() {
    policyplay_web::i18n::set_lang("en");
    let view = EscapeView {
        room: RoomNumber::FIRST,
        puzzle: RoomView::Definition {
            term: "Confidential data".into(),
            options: vec!["Public filings".into(), "Restricted to named roles".into()],
        },
        answer: RoomAnswer::Selection("Public filings".into()),
        score: 0,
        room_status: RoomStatus::default(),
        result: None,
        submitting: false,
        can_submit: true,
        started_at_ms: 0,
    };
    let props = policyplay_web::pages::escape_play::Props {
        view: Some(view),
        error: None,
        on_select: Callback::noop(),
        on_fix: Callback::noop(),
        on_master: Callback::noop(),
        on_submit: Callback::noop(),
        on_next: Callback::noop(),
        on_quit: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<EscapePlayPage>::with_props(props).render());
    assert!(html.contains("escape-room-title"));
    assert!(html.contains("Definitions Chamber"));
    assert!(html.contains("escape-option-1"));
    assert!(html.contains("escape-progress"));
    assert!(html.contains("escape-submit"));
}

#[test]
fn escape_results_distinguish_missing_from_loading() {
    policyplay_web::i18n::set_lang("en");
    let missing = policyplay_web::pages::escape_results::Props {
        results: None,
        missing: true,
        on_play_again: Callback::noop(),
        on_leaderboard: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<EscapeResultsPage>::with_props(missing).render());
    assert!(html.contains("escape-results-missing"));

    let found = policyplay_web::pages::escape_results::Props {
        results: Some(EscapeResults {
            attempt_id: "esc-1".into(),
            final_score: 140,
            time_taken: 125,
            rooms_completed: vec!["1".into(), "2".into()],
        }),
        missing: false,
        on_play_again: Callback::noop(),
        on_leaderboard: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<EscapeResultsPage>::with_props(found).render());
    assert!(html.contains("escape-final-score"));
    assert!(html.contains("02:05"));
    assert!(html.contains(" / 5"));
}
