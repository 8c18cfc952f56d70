use super::tap::use_policies;
use super::use_screen;
use crate::dom;
use crate::i18n::t;
use crate::pages::escape_leaderboard::EscapeLeaderboardPage;
use crate::pages::escape_levels::EscapeLevelsPage;
use crate::pages::escape_play::{EscapePlayPage, EscapeView};
use crate::pages::escape_results::EscapeResultsPage;
use crate::pages::escape_room::EscapeRoomPage;
use crate::router::Route;
use crate::storage::BrowserStore;
use policyplay_core::{
    ESCAPE_RESULTS_KEY, EscapeFlow, EscapeLeaderboardEntry, EscapeResults, Level, MasterPart,
    NextStep, RoomNumber, stash_results, take_results_for,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(EscapeRoomScreen)]
pub fn escape_room_screen() -> Html {
    let screen = use_screen(false);
    let (loading, policies, error) = use_policies(&screen);
    let on_select = {
        let screen = screen.clone();
        Callback::from(move |policy_id: String| screen.go(&Route::EscapeLevels { policy_id }))
    };
    html! {
        <EscapeRoomPage
            loading={*loading}
            policies={(*policies).clone()}
            error={(*error).clone()}
            {on_select}
            on_leaderboard={screen.link(Route::EscapeLeaderboard)}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LevelsProps {
    pub policy_id: String,
}

#[function_component(EscapeLevelsScreen)]
pub fn escape_levels_screen(p: &LevelsProps) -> Html {
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
                match screen.app.client.begin_escape(&policy_id, level).await {
                    Ok(attempt) => {
                        log::info!("escape attempt {} opened ({level})", attempt.attempt_id);
                        screen.go(&Route::escape_play(&attempt.attempt_id, RoomNumber::FIRST));
                    }
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            error.set(Some(format!("{}: {message}", t("escape.start_failed")).into()));
                        }
                    }
                }
                generating.set(None);
            });
        })
    };

    html! {
        <EscapeLevelsPage
            loading={*loading}
            {policy}
            generating={*generating}
            error={(*error).clone()}
            {on_pick}
            on_back={screen.link(Route::EscapeRoom)}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PlayProps {
    pub attempt_id: String,
    pub room: u8,
}

type FlowSlot = Rc<RefCell<Option<EscapeFlow>>>;

/// Apply `change` to the live flow and publish a fresh snapshot.
fn update(slot: &FlowSlot, view: &UseStateHandle<Option<EscapeView>>, change: impl FnOnce(&mut EscapeFlow)) {
    let mut guard = slot.borrow_mut();
    if let Some(flow) = guard.as_mut() {
        change(flow);
        view.set(Some(EscapeView::from(&*flow)));
    }
}

#[function_component(EscapePlayScreen)]
pub fn escape_play_screen(p: &PlayProps) -> Html {
    let screen = use_screen(false);
    let flow: FlowSlot = use_mut_ref(|| None::<EscapeFlow>);
    let view = use_state(|| None::<EscapeView>);
    let error = use_state(|| None::<AttrValue>);

    {
        let (screen, flow, view, error) = (screen.clone(), flow.clone(), view.clone(), error.clone());
        use_effect_with((p.attempt_id.clone(), p.room), move |(attempt_id, room)| {
            let Ok(room) = RoomNumber::new(*room) else {
                screen.go(&Route::EscapeRoom);
                return;
            };
            let resumable = flow
                .borrow()
                .as_ref()
                .is_some_and(|f| f.attempt_id() == attempt_id && f.room() == room);
            if resumable {
                return;
            }
            let attempt_id = attempt_id.clone();
            spawn_local(async move {
                match screen.app.client.escape_rooms(&attempt_id).await {
                    Ok(bundle) => {
                        let now = dom::now_ms();
                        let started = EscapeFlow::new(attempt_id, bundle, now, now).resume_at(room);
                        view.set(Some(EscapeView::from(&started)));
                        *flow.borrow_mut() = Some(started);
                    }
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            error.set(Some(message));
                        }
                    }
                }
            });
        });
    }

    let on_select = {
        let (flow, view) = (flow.clone(), view.clone());
        Callback::from(move |option: String| update(&flow, &view, |f| f.select(option)))
    };
    let on_fix = {
        let (flow, view) = (flow.clone(), view.clone());
        Callback::from(move |text: String| update(&flow, &view, |f| f.set_fix(text)))
    };
    let on_master = {
        let (flow, view) = (flow.clone(), view.clone());
        Callback::from(move |(part, option): (MasterPart, String)| {
            update(&flow, &view, |f| f.select_master(part, option));
        })
    };
    let on_submit = {
        let (screen, flow, view, error) = (screen.clone(), flow.clone(), view.clone(), error.clone());
        Callback::from(move |()| {
            let begun = flow.borrow_mut().as_mut().map(|f| f.begin_submit(dom::now_ms()));
            let submission = match begun {
                Some(Ok(submission)) => submission,
                Some(Err(err)) => {
                    error.set(Some(err.to_string().into()));
                    return;
                }
                None => return,
            };
            error.set(None);
            update(&flow, &view, |_| {});
            let (screen, flow, view) = (screen.clone(), flow.clone(), view.clone());
            spawn_local(async move {
                match screen.app.client.escape_submit(&submission).await {
                    Ok(result) => update(&flow, &view, |f| f.on_result(result)),
                    Err(err) => {
                        let detail = screen.fail(&err);
                        let mut message = None;
                        update(&flow, &view, |f| {
                            message = Some(f.on_submit_failed(&err.to_string()));
                        });
                        if let (Some(_), Some(message)) = (detail, message) {
                            dom::alert(&message);
                        }
                    }
                }
            });
        })
    };
    let on_next = {
        let (screen, flow, view) = (screen.clone(), flow.clone(), view.clone());
        Callback::from(move |()| {
            let confirmed = flow.borrow_mut().as_mut().map(|f| {
                let attempt_id = f.attempt_id().to_string();
                (attempt_id, f.confirm(dom::now_ms()))
            });
            let Some((attempt_id, step)) = confirmed else {
                return;
            };
            match step {
                Ok(NextStep::Next(room)) => {
                    update(&flow, &view, |_| {});
                    screen.go(&Route::escape_play(&attempt_id, room));
                }
                Ok(NextStep::Finish { time_taken }) => {
                    let (screen, flow, view) = (screen.clone(), flow.clone(), view.clone());
                    let request = policyplay_core::FinishEscapeRequest { time_taken };
                    spawn_local(async move {
                        match screen.app.client.escape_finish(&attempt_id, &request).await {
                            Ok(results) => {
                                if let Err(err) =
                                    stash_results(&BrowserStore::Session, ESCAPE_RESULTS_KEY, &results)
                                {
                                    log::error!("could not store escape results: {err}");
                                }
                                screen.go(&Route::EscapeResults { attempt_id });
                            }
                            Err(err) => {
                                update(&flow, &view, |f| f.finish_failed(&err.to_string()));
                                if let Some(message) = screen.fail(&err) {
                                    dom::alert(&format!("{}: {message}", t("escape.finish_failed")));
                                }
                            }
                        }
                    });
                }
                Err(err) => log::warn!("cannot leave room yet: {err}"),
            }
        })
    };
    let on_quit = {
        let screen = screen.clone();
        Callback::from(move |()| {
            if dom::confirm(&t("escape.quit_confirm")) {
                screen.go(&Route::EscapeRoom);
            }
        })
    };

    html! {
        <EscapePlayPage
            view={(*view).clone()}
            error={(*error).clone()}
            {on_select} {on_fix} {on_master} {on_submit} {on_next} {on_quit}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ResultsProps {
    pub attempt_id: String,
}

#[function_component(EscapeResultsScreen)]
pub fn escape_results_screen(p: &ResultsProps) -> Html {
    let screen = use_screen(false);
    let attempt_id = p.attempt_id.clone();
    let results = use_state(move || {
        take_results_for::<_, EscapeResults>(
            &BrowserStore::Session,
            ESCAPE_RESULTS_KEY,
            &attempt_id,
        )
    });
    let missing = results.is_none();
    html! {
        <EscapeResultsPage
            results={(*results).clone()}
            {missing}
            on_play_again={screen.link(Route::EscapeRoom)}
            on_leaderboard={screen.link(Route::EscapeLeaderboard)}
        />
    }
}

#[function_component(EscapeLeaderboardScreen)]
pub fn escape_leaderboard_screen() -> Html {
    let screen = use_screen(false);
    let level = use_state(|| None::<Level>);
    let entries = use_state(|| None::<Vec<EscapeLeaderboardEntry>>);
    let error = use_state(|| None::<AttrValue>);

    {
        let (screen, entries, error) = (screen.clone(), entries.clone(), error.clone());
        use_effect_with(*level, move |level| {
            let level = *level;
            entries.set(None);
            spawn_local(async move {
                match screen.app.client.escape_leaderboard(level).await {
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

    let on_level = {
        let level = level.clone();
        Callback::from(move |next: Option<Level>| level.set(next))
    };

    html! {
        <EscapeLeaderboardPage
            entries={(*entries).clone()}
            level={*level}
            error={(*error).clone()}
            {on_level}
            on_play={screen.link(Route::EscapeRoom)}
        />
    }
}
