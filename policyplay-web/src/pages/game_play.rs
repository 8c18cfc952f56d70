use crate::components::alert::AlertBanner;
use crate::components::loading::Loading;
use crate::i18n::{t, tr};
use policyplay_core::{GameResult, GameSession, QuizSelection, locate_violation_range};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub session: Option<GameSession>,
    pub selection: QuizSelection,
    #[prop_or_default]
    pub result: Option<GameResult>,
    #[prop_or_default]
    pub submitting: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_pick_option: Callback<usize>,
    /// Fired on mouse-up over the scenario text so the container can read the selection.
    pub on_select_text: Callback<()>,
    pub on_submit: Callback<()>,
    pub on_back: Callback<()>,
}

fn letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .and_then(|i| b'A'.checked_add(i))
        .map_or('?', char::from)
}

fn result_view(result: &GameResult) -> Html {
    let (icon, heading, border) = if result.correct {
        ("✅", t("quiz.correct"), "border-success")
    } else {
        ("❌", t("quiz.incorrect"), "border-error")
    };
    let score = result.score.to_string();
    html! {
        <div class={classes!("card", "bg-base-100", "shadow-xl", "border-4", border)} data-testid="quiz-result">
            <div class="card-body items-center text-center">
                <span class="text-6xl">{ icon }</span>
                <h2 class="card-title text-3xl">{ heading }</h2>
                <p class="text-xl">{ tr("quiz.score_of_100", Some(&crate::targs! { "score" => score.as_str() })) }</p>
                if let (false, Some(answer)) = (result.correct, result.correct_answer.as_ref()) {
                    <p class="alert alert-info">{ t("quiz.correct_answer") }{ ": " }{ answer.clone() }</p>
                }
                <div class="text-left w-full">
                    <h3 class="font-bold">{ t("quiz.explanation") }</h3>
                    <p>{ result.explanation.clone() }</p>
                    <h3 class="font-bold mt-2">{ t("quiz.policy_rule") }</h3>
                    <p class="italic">{ result.policy_rule.clone() }</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(GamePlayPage)]
pub fn game_play_page(p: &Props) -> Html {
    let back = {
        let cb = p.on_back.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let Some(session) = &p.session else {
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

    let body = if let Some(result) = &p.result {
        result_view(result)
    } else if let Some(scenario) = &session.scenario {
        let options = scenario.options.iter().enumerate().map(|(idx, option)| {
            let cb = p.on_pick_option.clone();
            let selected = p.selection == QuizSelection::Option(idx);
            let class = classes!(
                "btn", "btn-block", "justify-start", "h-auto", "py-3", "normal-case",
                if selected { "btn-primary" } else { "btn-outline" }
            );
            html! {
                <button {class} onclick={Callback::from(move |_| cb.emit(idx))}
                    data-testid={format!("quiz-option-{idx}")} aria-pressed={selected.to_string()}>
                    <span class="badge mr-2">{ letter(idx) }</span>{ option.clone() }
                </button>
            }
        });
        let ready = matches!(p.selection, QuizSelection::Option(_));
        html! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title">{ t("quiz.scenario") }</h2>
                    <p>{ scenario.scenario_text.clone() }</p>
                    <div class="space-y-2">{ for options }</div>
                    <button class="btn btn-success" onclick={submit} disabled={!ready || p.submitting} data-testid="quiz-submit">
                        { t("quiz.submit") }
                    </button>
                </div>
            </div>
        }
    } else if let Some(violation) = &session.violation_scenario {
        let on_mouse_up = {
            let cb = p.on_select_text.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        let range = match &p.selection {
            QuizSelection::Text(text) => locate_violation_range(&violation.scenario_text, text),
            _ => None,
        };
        let chosen = range.as_ref().map(|r| {
            let (start, end) = (r.start.to_string(), r.end.to_string());
            html! {
                <p class="text-success" data-testid="quiz-selected-range">
                    { "✓ " }{ tr("quiz.selected_range", Some(&crate::targs! { "start" => start.as_str(), "end" => end.as_str() })) }
                </p>
            }
        });
        html! {
            <div class="card bg-base-100 shadow-xl">
                <div class="card-body gap-4">
                    <h2 class="card-title">{ t("quiz.find_violation") }</h2>
                    <p class="opacity-70 text-sm">{ t("quiz.select_hint") }</p>
                    <p class="p-4 bg-base-200 rounded select-text" onmouseup={on_mouse_up} data-testid="quiz-violation-text">
                        { violation.scenario_text.clone() }
                    </p>
                    { for chosen }
                    <button class="btn btn-success" onclick={submit} disabled={range.is_none() || p.submitting} data-testid="quiz-submit">
                        { t("quiz.submit") }
                    </button>
                </div>
            </div>
        }
    } else {
        html! { <div class="alert alert-warning">{ t("quiz.unplayable") }</div> }
    };

    let heading = match session.game_type {
        policyplay_core::GameType::Scenario => t("quiz.heading_scenario"),
        policyplay_core::GameType::Violation => t("quiz.heading_violation"),
    };
    html! {
        <section class="max-w-3xl mx-auto space-y-4" data-testid="game-play-page">
            <button class="btn btn-ghost btn-sm" onclick={back} data-testid="quiz-back">{ "← " }{ t("ui.back") }</button>
            <h1 class="text-3xl font-bold text-center">{ heading }</h1>
            <AlertBanner message={p.error.clone()} />
            { body }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::letter;

    #[test]
    fn option_letters() {
        assert_eq!(letter(0), 'A');
        assert_eq!(letter(3), 'D');
        assert_eq!(letter(300), '?');
    }
}
