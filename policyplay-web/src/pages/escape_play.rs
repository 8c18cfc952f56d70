use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::components::score_tracker::ScoreTracker;
use crate::components::timer::ElapsedTimer;
use crate::dom;
use crate::i18n::t;
use policyplay_core::{
    EscapeFlow, MasterPart, RoomAnswer, RoomNumber, RoomResult, RoomState, RoomStatus, RoomView,
};
use yew::prelude::*;

/// Render snapshot of an [`EscapeFlow`].
#[derive(Clone, Debug, PartialEq)]
pub struct EscapeView {
    pub room: RoomNumber,
    pub puzzle: RoomView,
    pub answer: RoomAnswer,
    pub score: i32,
    pub room_status: RoomStatus,
    pub result: Option<RoomResult>,
    pub submitting: bool,
    pub can_submit: bool,
    pub started_at_ms: u64,
}

impl From<&EscapeFlow> for EscapeView {
    fn from(flow: &EscapeFlow) -> Self {
        Self {
            room: flow.room(),
            puzzle: flow.view(),
            answer: flow.answer().clone(),
            score: flow.score(),
            room_status: flow.room_status().clone(),
            result: flow.result().cloned(),
            submitting: flow.is_submitting(),
            can_submit: flow.can_submit(),
            started_at_ms: flow.started_at_ms(),
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub view: Option<EscapeView>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_select: Callback<String>,
    pub on_fix: Callback<String>,
    pub on_master: Callback<(MasterPart, String)>,
    pub on_submit: Callback<()>,
    pub on_next: Callback<()>,
    pub on_quit: Callback<()>,
}

fn choices(options: &[String], chosen: Option<&str>, locked: bool, on_pick: &Callback<String>, prefix: &str) -> Html {
    let buttons = options.iter().enumerate().map(|(idx, option)| {
        let selected = chosen == Some(option.as_str());
        let cb = on_pick.clone();
        let value = option.clone();
        let class = classes!(
            "btn", "btn-block", "justify-start", "h-auto", "py-3", "normal-case",
            if selected { "btn-primary" } else { "btn-outline" }
        );
        html! {
            <button {class} disabled={locked} onclick={Callback::from(move |_| cb.emit(value.clone()))}
                data-testid={format!("{prefix}-option-{idx}")} aria-pressed={selected.to_string()}>
                { option.clone() }
            </button>
        }
    });
    if options.is_empty() {
        return html! { <p class="opacity-70">{ t("escape.no_options") }</p> };
    }
    html! { <div class="space-y-2">{ for buttons }</div> }
}

fn fix_input(value: &str, locked: bool, on_fix: &Callback<String>, testid: &'static str) -> Html {
    let cb = on_fix.clone();
    let oninput = Callback::from(move |e: InputEvent| cb.emit(dom::input_value(&e)));
    html! {
        <textarea class="textarea textarea-bordered w-full h-28" placeholder={t("escape.fix_placeholder")}
            value={value.to_string()} {oninput} disabled={locked} data-testid={testid}></textarea>
    }
}

fn puzzle_view(view: &EscapeView, p: &Props) -> Html {
    let locked = view.result.is_some() || view.submitting;
    let picked = match &view.answer {
        RoomAnswer::Selection(v) => Some(v.as_str()),
        _ => None,
    };
    match &view.puzzle {
        RoomView::Unavailable => html! {
            <div class="alert alert-warning" data-testid="escape-unavailable">{ t("escape.unavailable") }</div>
        },
        RoomView::Definition { term, options } => html! {
            <>
                <p class="text-lg">{ t("escape.pick_definition") }</p>
                <p class="text-2xl font-bold">{ term.clone() }</p>
                { choices(options, picked, locked, &p.on_select, "escape") }
            </>
        },
        RoomView::Exception { rule, scenario, options } => html! {
            <>
                <p class="font-semibold">{ t("escape.rule") }{ ": " }{ rule.clone() }</p>
                if !scenario.is_empty() { <p class="italic">{ scenario.clone() }</p> }
                <p>{ t("escape.pick_exception") }</p>
                { choices(options, picked, locked, &p.on_select, "escape") }
            </>
        },
        RoomView::Rule { scenario, options } => html! {
            <>
                <p class="italic">{ scenario.clone() }</p>
                <p>{ t("escape.pick_rule") }</p>
                { choices(options, picked, locked, &p.on_select, "escape") }
            </>
        },
        RoomView::Repair { scenario, violation } => {
            let fix = match &view.answer {
                RoomAnswer::Fix(v) => v.as_str(),
                _ => "",
            };
            html! {
                <>
                    if !scenario.is_empty() { <p class="italic">{ scenario.clone() }</p> }
                    <div class="alert alert-error">{ t("escape.violation") }{ ": " }{ violation.clone() }</div>
                    <p>{ t("escape.write_fix") }</p>
                    { fix_input(fix, locked, &p.on_fix, "escape-fix") }
                </>
            }
        }
        RoomView::Master { scenario, term, definition_options, rule_options, exception_rule, exception_options } => {
            let (definition, rule, exception, fix) = match &view.answer {
                RoomAnswer::Master { definition, rule, exception, violation_fix } => {
                    (definition.as_deref(), rule.as_deref(), exception.as_deref(), violation_fix.as_str())
                }
                _ => (None, None, None, ""),
            };
            let part = |part: MasterPart| {
                let cb = p.on_master.clone();
                Callback::from(move |value: String| cb.emit((part, value)))
            };
            html! {
                <>
                    <p class="italic">{ scenario.clone() }</p>
                    <h3 class="font-bold">{ "1. " }{ t("escape.pick_definition") }{ " " }{ term.clone() }</h3>
                    { choices(definition_options, definition, locked, &part(MasterPart::Definition), "master-definition") }
                    <h3 class="font-bold">{ "2. " }{ t("escape.pick_rule") }</h3>
                    { choices(rule_options, rule, locked, &part(MasterPart::Rule), "master-rule") }
                    <h3 class="font-bold">{ "3. " }{ t("escape.pick_exception") }{ " " }{ exception_rule.clone() }</h3>
                    { choices(exception_options, exception, locked, &part(MasterPart::Exception), "master-exception") }
                    <h3 class="font-bold">{ "4. " }{ t("escape.write_fix") }</h3>
                    { fix_input(fix, locked, &p.on_fix, "master-fix") }
                </>
            }
        }
    }
}

fn progress(status: &RoomStatus, current: RoomNumber) -> Html {
    let steps = RoomNumber::all().map(|room| {
        let class = classes!(
            "step",
            match status.get(room.get()) {
                RoomState::Done => Some("step-success"),
                RoomState::Failed => Some("step-error"),
                RoomState::Pending if room == current => Some("step-primary"),
                RoomState::Pending => None,
            }
        );
        html! { <li {class} data-content={room.icon()}>{ room.get() }</li> }
    });
    html! { <ul class="steps w-full" data-testid="escape-progress">{ for steps }</ul> }
}

#[function_component(EscapePlayPage)]
pub fn escape_play_page(p: &Props) -> Html {
    let Some(view) = &p.view else {
        return html! {
            <>
                <AlertBanner message={p.error.clone()} />
                if p.error.is_none() { <Loading /> }
            </>
        };
    };
    let submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let next = {
        let cb = p.on_next.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let quit = {
        let cb = p.on_quit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let result = view.result.as_ref().map(|result| {
        let (class, heading) = if result.correct {
            ("alert alert-success flex-col items-start", t("quiz.correct"))
        } else {
            ("alert alert-error flex-col items-start", t("quiz.incorrect"))
        };
        let next_label = if view.room.is_last() { t("escape.finish") } else { t("escape.next_room") };
        html! {
            <div {class} data-testid="escape-result">
                <span class="font-bold text-lg">{ heading }{ format!(" ({:+})", result.points_earned) }</span>
                if !result.explanation.is_empty() { <span>{ result.explanation.clone() }</span> }
                <button class="btn btn-primary btn-sm" onclick={next.clone()} data-testid="escape-next">{ next_label }</button>
            </div>
        }
    });

    html! {
        <section class="max-w-3xl mx-auto space-y-4" data-testid="escape-play-page">
            <div class="flex justify-between items-center">
                <button class="btn btn-ghost btn-sm" onclick={quit}>{ "← " }{ t("tap.quit") }</button>
                <ElapsedTimer started_at_ms={view.started_at_ms} />
                <ScoreTracker score={view.score} highlight={view.result.as_ref().is_some_and(|r| r.correct)} />
            </div>
            { progress(&view.room_status, view.room) }
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title text-2xl" data-testid="escape-room-title">{ view.room.icon() }{ " " }{ view.room.title() }</h2>
                    { puzzle_view(view, p) }
                    <AlertBanner message={p.error.clone()} />
                    if view.result.is_none() {
                        <button class="btn btn-success" onclick={submit} disabled={!view.can_submit} data-testid="escape-submit">
                            if view.submitting { <span class="loading loading-spinner"></span> }
                            { t("escape.submit") }
                        </button>
                    }
                    { for result }
                </div>
            </div>
        </section>
    }
}
