use policyplay_core::{Level, QuestionPhase, RoomAnswer, RoomNumber, RoomStatus, RoomView};
use policyplay_web::pages::escape_play::EscapeView;
use policyplay_web::pages::tap_play::{Props as TapPlayProps, TapView};
use yew::Callback;

fn view() -> TapView {
    TapView {
        question: Some("Where do incident reports go?".into()),
        index: 2,
        total: 5,
        level: Level::Intermediate,
        phase: QuestionPhase::AwaitingAnswer,
        balls: Vec::new(),
        score: 20,
        countdown: None,
        explosion: None,
        confetti: false,
        feedback: None,
        alert: None,
    }
}

#[test]
fn tap_play_props_compare_by_snapshot() {
    let on_tap = Callback::from(|_: usize| ());
    let on_retry = Callback::from(|()| ());
    let on_quit = Callback::from(|()| ());
    let props = |view: Option<TapView>| TapPlayProps {
        view,
        on_tap: on_tap.clone(),
        on_retry: on_retry.clone(),
        on_quit: on_quit.clone(),
    };

    assert!(props(Some(view())) == props(Some(view())));

    let mut ticked = view();
    ticked.countdown = Some(4);
    assert!(props(Some(view())) != props(Some(ticked)));

    let mut halted = view();
    halted.phase = QuestionPhase::Halted;
    assert!(props(Some(view())) != props(Some(halted)));
    assert!(props(None) != props(Some(view())));
}

#[test]
fn escape_view_tracks_answer_edits() {
    let base = EscapeView {
        room: RoomNumber::FIRST,
        puzzle: RoomView::Unavailable,
        answer: RoomAnswer::Empty,
        score: 0,
        room_status: RoomStatus::default(),
        result: None,
        submitting: false,
        can_submit: false,
        started_at_ms: 1_000,
    };
    let mut edited = base.clone();
    edited.answer = RoomAnswer::Selection("Public filings".into());
    assert_ne!(base, edited);
    assert_eq!(base, base.clone());
}
