use crate::components::alert::AlertBanner;
use crate::components::confetti::Confetti;
use crate::components::explosion::BallExplosion;
use crate::components::game_hud::GameHud;
use crate::components::loading::Loading;
use crate::components::question_card::QuestionCard;
use crate::components::tap_ball::{TAP_FIELD_CSS, TapBall};
use crate::i18n::t;
use policyplay_core::{Ball, Level, QuestionPhase, TapSession, TapSubmitResponse};
use yew::prelude::*;

/// Render snapshot of a [`TapSession`].
#[derive(Clone, Debug, PartialEq)]
pub struct TapView {
    pub question: Option<String>,
    pub index: usize,
    pub total: usize,
    pub level: Level,
    pub phase: QuestionPhase,
    pub balls: Vec<Ball>,
    pub score: i32,
    pub countdown: Option<u32>,
    /// Horizontal position and verdict of the last tapped ball.
    pub explosion: Option<(f64, bool)>,
    pub confetti: bool,
    pub feedback: Option<TapSubmitResponse>,
    pub alert: Option<String>,
}

impl From<&TapSession> for TapView {
    fn from(session: &TapSession) -> Self {
        let explosion = session.explosion().and_then(|boom| {
            session
                .balls()
                .iter()
                .find(|b| b.id == boom.ball_id)
                .map(|b| (b.x_percent, boom.correct))
        });
        Self {
            question: session.current_question().map(|q| q.question.clone()),
            index: session.index(),
            total: session.question_count(),
            level: session.level(),
            phase: session.phase(),
            balls: session.balls().to_vec(),
            score: session.score(),
            countdown: session.countdown(),
            explosion,
            confetti: session.confetti(),
            feedback: session.feedback().cloned(),
            alert: session.alert().map(str::to_string),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// `None` while the game set loads.
    pub view: Option<TapView>,
    pub on_tap: Callback<usize>,
    pub on_retry: Callback<()>,
    pub on_quit: Callback<()>,
}

fn feedback_banner(feedback: &TapSubmitResponse) -> Html {
    let (class, heading) = if feedback.correct {
        ("alert alert-success", t("tap.feedback_correct"))
    } else {
        ("alert alert-error", t("tap.feedback_wrong"))
    };
    let points = if feedback.points > 0 {
        format!("+{}", feedback.points)
    } else {
        feedback.points.to_string()
    };
    html! {
        <div {class} role="status" data-testid="tap-feedback">
            <span class="font-bold">{ heading }{ " " }{ points }</span>
            if !feedback.correct && !feedback.correct_answer.is_empty() {
                <span>{ t("tap.correct_was") }{ ": " }{ feedback.correct_answer.clone() }</span>
            }
            if let Some(message) = &feedback.message {
                <span class="text-xs">{ message.clone() }</span>
            }
        </div>
    }
}

#[function_component(TapPlayPage)]
pub fn tap_play_page(p: &Props) -> Html {
    let Some(view) = &p.view else {
        return html! { <Loading label={AttrValue::from(t("tap.loading"))} /> };
    };
    let quit = {
        let cb = p.on_quit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let retry = {
        let cb = p.on_retry.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let accepting = matches!(view.phase, QuestionPhase::Spawning | QuestionPhase::AwaitingAnswer);
    let balls = view.balls.iter().map(|ball| {
        html! { <TapBall key={ball.id} ball={ball.clone()} on_tap={p.on_tap.clone()} disabled={!accepting} /> }
    });
    let missed = view.phase == QuestionPhase::Missed && view.feedback.is_none();
    let regenerating = view.phase == QuestionPhase::Regenerating;

    html! {
        <section class="space-y-4" data-testid="tap-play-page">
            <style>{ TAP_FIELD_CSS }</style>
            <div class="flex justify-between items-center">
                <button class="btn btn-ghost btn-sm" onclick={quit} data-testid="tap-quit">{ "← " }{ t("tap.quit") }</button>
            </div>
            <GameHud score={view.score} question_index={view.index} total_questions={view.total}
                level={view.level} time_remaining={view.countdown} />
            if let Some(question) = &view.question {
                <QuestionCard question={AttrValue::from(question.clone())} index={view.index} total={view.total} />
            }
            <AlertBanner message={view.alert.clone().map(AttrValue::from)} />
            if view.phase == QuestionPhase::Halted {
                <button class="btn btn-warning" onclick={retry} data-testid="tap-retry">{ t("tap.retry") }</button>
            }
            if let Some(feedback) = &view.feedback {
                { feedback_banner(feedback) }
            }
            if missed {
                <div class="alert alert-warning" data-testid="tap-missed">{ t("tap.missed") }</div>
            }
            if regenerating {
                <div class="alert alert-info" data-testid="tap-regenerating">{ t("tap.regenerating") }</div>
            }
            <div class="relative h-[60vh] overflow-hidden rounded-box bg-base-200" data-testid="tap-field">
                { for balls }
                if let Some((x, correct)) = view.explosion {
                    <BallExplosion x_percent={x} {correct} />
                }
                <Confetti active={view.confetti} />
            </div>
            if view.phase == QuestionPhase::Finished {
                <Loading label={AttrValue::from(t("tap.finishing"))} />
            }
        </section>
    }
}
