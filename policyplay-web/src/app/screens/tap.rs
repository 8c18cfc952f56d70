use super::{Screen, use_screen};
use crate::dom;
use crate::i18n::t;
use crate::pages::policy_tap::PolicyTapPage;
use crate::pages::tap_leaderboard::TapLeaderboardPage;
use crate::pages::tap_levels::TapLevelsPage;
use crate::pages::tap_play::{TapPlayPage, TapView};
use crate::pages::tap_results::TapResultsPage;
use crate::router::Route;
use crate::storage::BrowserStore;
use crate::tap_driver::TapDriver;
use policyplay_core::{
    FinishTapRequest, Level, PolicySummary, TAP_RESULTS_KEY, TapLeaderboardEntry, TapResults,
    TapSession, take_results_for,
};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub(super) type PolicyLoad = (
    UseStateHandle<bool>,
    UseStateHandle<Vec<PolicySummary>>,
    UseStateHandle<Option<AttrValue>>,
);

/// Loads the policy list once for pickers on this screen.
#[hook]
pub(super) fn use_policies(screen: &Screen) -> PolicyLoad {
    let loading = use_state(|| true);
    let policies = use_state(Vec::<PolicySummary>::new);
    let error = use_state(|| None::<AttrValue>);
    {
        let (screen, loading, policies, error) =
            (screen.clone(), loading.clone(), policies.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                match screen.app.client.policies().await {
                    Ok(list) => policies.set(list),
                    Err(err) => error.set(screen.fail(&err)),
                }
                loading.set(false);
            });
        });
    }
    (loading, policies, error)
}

#[function_component(PolicyTapScreen)]
pub fn policy_tap_screen() -> Html {
    let screen = use_screen(false);
    let (loading, policies, error) = use_policies(&screen);
    let on_select = {
        let screen = screen.clone();
        Callback::from(move |policy_id: String| screen.go(&Route::TapLevels { policy_id }))
    };
    html! {
        <PolicyTapPage
            loading={*loading}
            policies={(*policies).clone()}
            error={(*error).clone()}
            {on_select}
            on_leaderboard={screen.link(Route::TapLeaderboard)}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LevelsProps {
    pub policy_id: String,
}

#[function_component(TapLevelsScreen)]
pub fn tap_levels_screen(p: &LevelsProps) -> Html {
    let screen = use_screen(false);
    let (loading, policies, error) = use_policies(&screen);
    let generating = use_state(|| None::<Level>);
    let policy = policies.iter().find(|pol| pol.policy_id == p.policy_id).cloned();

    let on_pick = {
        let (screen, generating, error) = (screen.clone(), generating.clone(), error.clone());
        let policy_id = p.policy_id.clone();
        Callback::from(move |level: Level| {
            if generating.is_some() {
                return;
            }
            let (screen, generating, error) = (screen.clone(), generating.clone(), error.clone());
            let policy_id = policy_id.clone();
            generating.set(Some(level));
            error.set(None);
            spawn_local(async move {
                match screen.app.client.begin_tap(&policy_id, level).await {
                    Ok((set, attempt)) => screen.go(&Route::TapPlay {
                        attempt_id: attempt.attempt_id,
                        game_set_id: set.game_set_id,
                    }),
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            error.set(Some(format!("{}: {message}", t("tap.start_failed")).into()));
                        }
                    }
                }
                generating.set(None);
            });
        })
    };

    html! {
        <TapLevelsPage
            loading={*loading}
            {policy}
            generating={*generating}
            error={(*error).clone()}
            {on_pick}
            on_back={screen.link(Route::PolicyTap)}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlayProps {
    pub attempt_id: String,
    pub game_set_id: String,
}

#[function_component(TapPlayScreen)]
pub fn tap_play_screen(p: &PlayProps) -> Html {
    let screen = use_screen(false);
    let driver = use_mut_ref(|| None::<TapDriver>);
    let view = use_state(|| None::<TapView>);

    {
        let (screen, driver, view) = (screen.clone(), driver.clone(), view.clone());
        use_effect_with(
            (p.attempt_id.clone(), p.game_set_id.clone()),
            move |(attempt_id, game_set_id)| {
                let (attempt_id, game_set_id) = (attempt_id.clone(), game_set_id.clone());
                let slot = driver.clone();
                let live = Rc::new(Cell::new(true));
                let still_mounted = live.clone();
                spawn_local(async move {
                    let set = match screen.app.client.tap_game_set(&game_set_id).await {
                        Ok(set) => set,
                        Err(err) => {
                            if let Some(message) = screen.fail(&err) {
                                dom::alert(&message);
                                screen.go(&Route::PolicyTap);
                            }
                            return;
                        }
                    };
                    if !still_mounted.get() {
                        return;
                    }
                    if set.questions.is_empty() {
                        dom::alert(&t("tap.no_questions"));
                        screen.go(&Route::PolicyTap);
                        return;
                    }
                    let session = TapSession::new(attempt_id, set.level, set.questions, dom::now_ms());
                    let on_change = {
                        let (slot, view) = (slot.clone(), view.clone());
                        Callback::from(move |()| {
                            if let Some(d) = slot.borrow().as_ref() {
                                view.set(Some(d.snapshot()));
                            }
                        })
                    };
                    let on_api_error = {
                        let screen = screen.clone();
                        Callback::from(move |err| {
                            screen.fail(&err);
                        })
                    };
                    let started = TapDriver::new(
                        session,
                        screen.app.client.clone(),
                        on_change,
                        screen.navigate(),
                        on_api_error,
                    );
                    *slot.borrow_mut() = Some(started.clone());
                    started.start();
                });
                move || {
                    live.set(false);
                    if let Some(d) = driver.borrow_mut().take() {
                        d.shutdown();
                    }
                }
            },
        );
    }

    let on_tap = {
        let driver = driver.clone();
        Callback::from(move |id: usize| {
            let current = driver.borrow().clone();
            if let Some(d) = current {
                d.tap(id);
            }
        })
    };
    let on_retry = {
        let driver = driver.clone();
        Callback::from(move |()| {
            let current = driver.borrow().clone();
            if let Some(d) = current {
                d.retry();
            }
        })
    };
    let on_quit = {
        let screen = screen.clone();
        Callback::from(move |()| {
            let done = driver.borrow().as_ref().is_some_and(TapDriver::is_finished);
            if done || dom::confirm(&t("tap.quit_confirm")) {
                screen.go(&Route::PolicyTap);
            }
        })
    };

    html! { <TapPlayPage view={(*view).clone()} {on_tap} {on_retry} {on_quit} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsProps {
    pub attempt_id: String,
}

#[function_component(TapResultsScreen)]
pub fn tap_results_screen(p: &ResultsProps) -> Html {
    let screen = use_screen(false);
    let attempt_id = p.attempt_id.clone();
    let results = use_state(move || {
        take_results_for::<_, TapResults>(&BrowserStore::Session, TAP_RESULTS_KEY, &attempt_id)
    });

    {
        let (screen, results) = (screen.clone(), results.clone());
        use_effect_with(p.attempt_id.clone(), move |attempt_id| {
            if results.is_none() {
                let attempt_id = attempt_id.clone();
                spawn_local(async move {
                    let request = FinishTapRequest {
                        attempt_id,
                        final_time_taken: 0,
                    };
                    match screen.app.client.tap_finish(&request).await {
                        Ok(loaded) => results.set(Some(loaded)),
                        Err(err) => {
                            log::warn!("tap results unavailable: {err}");
                            screen.fail(&err);
                            results.set(Some(TapResults::default()));
                        }
                    }
                });
            }
        });
    }

    html! {
        <TapResultsPage
            results={(*results).clone()}
            on_play_again={screen.link(Route::PolicyTap)}
            on_leaderboard={screen.link(Route::TapLeaderboard)}
        />
    }
}

#[function_component(TapLeaderboardScreen)]
pub fn tap_leaderboard_screen() -> Html {
    let screen = use_screen(false);
    let (_, policies, _) = use_policies(&screen);
    let filter = use_state(|| (None::<String>, None::<Level>));
    let entries = use_state(|| None::<Vec<TapLeaderboardEntry>>);
    let error = use_state(|| None::<AttrValue>);

    {
        let (screen, entries, error) = (screen.clone(), entries.clone(), error.clone());
        use_effect_with((*filter).clone(), move |(policy_id, level)| {
            let (policy_id, level) = (policy_id.clone(), *level);
            entries.set(None);
            spawn_local(async move {
                match screen
                    .app
                    .client
                    .tap_leaderboard(policy_id.as_deref(), level)
                    .await
                {
                    Ok(board) => {
                        error.set(None);
                        entries.set(Some(board.leaderboard));
                    }
                    Err(err) => {
                        entries.set(Some(Vec::new()));
                        error.set(screen.fail(&err));
                    }
                }
            });
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |next: (Option<String>, Option<Level>)| filter.set(next))
    };

    html! {
        <TapLeaderboardPage
            entries={(*entries).clone()}
            policies={(*policies).clone()}
            level={filter.1}
            policy_id={filter.0.clone()}
            error={(*error).clone()}
            {on_filter}
            on_play={screen.link(Route::PolicyTap)}
        />
    }
}
