use super::use_screen;
use crate::dom;
use crate::i18n::t;
use crate::pages::game_play::GamePlayPage;
use crate::pages::games::GamesPage;
use crate::pages::leaderboard::LeaderboardPage;
use crate::pages::upload::UploadPage;
use crate::pages::user_scores::UserScoresPage;
use crate::router::Route;
use policyplay_core::{
    GameListing, GameResult, GameSession, Leaderboard, PolicySummary, QuizSelection,
    StructuredPolicy, UserScores, build_submission,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(GamesScreen)]
pub fn games_screen() -> Html {
    let screen = use_screen(false);
    let loading = use_state(|| true);
    let policies = use_state(Vec::<PolicySummary>::new);
    let expanded = use_state(|| None::<String>);
    let games = use_state(|| None::<Vec<GameListing>>);
    let generating = use_state(|| None::<String>);
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

    let load_games = {
        let (screen, games, error) = (screen.clone(), games.clone(), error.clone());
        move |policy_id: String| {
            let (screen, games, error) = (screen.clone(), games.clone(), error.clone());
            games.set(None);
            spawn_local(async move {
                match screen.app.client.policy_games(&policy_id).await {
                    Ok(list) => games.set(Some(list)),
                    Err(err) => {
                        games.set(Some(Vec::new()));
                        error.set(screen.fail(&err));
                    }
                }
            });
        }
    };

    let on_toggle = {
        let expanded = expanded.clone();
        let load_games = load_games.clone();
        Callback::from(move |policy_id: String| {
            if expanded.as_deref() == Some(policy_id.as_str()) {
                expanded.set(None);
            } else {
                expanded.set(Some(policy_id.clone()));
                load_games(policy_id);
            }
        })
    };
    let on_generate = {
        let (screen, generating, expanded) = (screen.clone(), generating.clone(), expanded.clone());
        Callback::from(move |policy_id: String| {
            if generating.is_some() {
                return;
            }
            let (screen, generating, expanded) = (screen.clone(), generating.clone(), expanded.clone());
            let load_games = load_games.clone();
            generating.set(Some(policy_id.clone()));
            spawn_local(async move {
                match screen.app.client.generate_batch(&policy_id).await {
                    Ok(batch) => {
                        log::info!("generated {} games for {policy_id}", batch.total_games);
                        expanded.set(Some(policy_id.clone()));
                        load_games(policy_id);
                    }
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            dom::alert(&format!("{}: {message}", t("games.generate_failed")));
                        }
                    }
                }
                generating.set(None);
            });
        })
    };
    let on_play = {
        let screen = screen.clone();
        Callback::from(move |session_id: String| screen.go(&Route::GamePlay { session_id }))
    };

    html! {
        <GamesPage
            loading={*loading}
            policies={(*policies).clone()}
            expanded={(*expanded).clone()}
            expanded_games={(*games).clone()}
            generating={(*generating).clone()}
            error={(*error).clone()}
            {on_toggle} {on_generate} {on_play}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct GamePlayProps {
    pub session_id: String,
}

#[function_component(GamePlayScreen)]
pub fn game_play_screen(p: &GamePlayProps) -> Html {
    let screen = use_screen(false);
    let session = use_state(|| None::<GameSession>);
    let selection = use_state(QuizSelection::default);
    let result = use_state(|| None::<GameResult>);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);

    {
        let (screen, session) = (screen.clone(), session.clone());
        use_effect_with(p.session_id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match screen.app.client.start_game(&id).await {
                    Ok(loaded) => session.set(Some(loaded)),
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            dom::alert(&message);
                            screen.go(&Route::Games);
                        }
                    }
                }
            });
        });
    }

    let on_pick_option = {
        let selection = selection.clone();
        Callback::from(move |idx| selection.set(QuizSelection::Option(idx)))
    };
    let on_select_text = {
        let selection = selection.clone();
        Callback::from(move |()| {
            let text = dom::selected_text();
            if !text.trim().is_empty() {
                selection.set(QuizSelection::Text(text));
            }
        })
    };
    let on_submit = {
        let (screen, session, selection, result, submitting, error) = (
            screen.clone(),
            session.clone(),
            selection.clone(),
            result.clone(),
            submitting.clone(),
            error.clone(),
        );
        Callback::from(move |()| {
            let Some(current) = (*session).clone() else {
                return;
            };
            if *submitting || result.is_some() {
                return;
            }
            let submission = match build_submission(&current, &selection) {
                Ok(submission) => submission,
                Err(err) => {
                    error.set(Some(err.to_string().into()));
                    return;
                }
            };
            let (screen, result, submitting, error) =
                (screen.clone(), result.clone(), submitting.clone(), error.clone());
            submitting.set(true);
            error.set(None);
            spawn_local(async move {
                match screen.app.client.submit_game(&submission).await {
                    Ok(outcome) => result.set(Some(outcome)),
                    Err(err) => {
                        if let Some(message) = screen.fail(&err) {
                            dom::alert(&format!("{}: {message}", t("quiz.submit_failed")));
                        }
                    }
                }
                submitting.set(false);
            });
        })
    };
    let on_back = {
        let (screen, session, result) = (screen.clone(), session.clone(), result.clone());
        Callback::from(move |()| {
            let in_progress = session.is_some() && result.is_none();
            if !in_progress || dom::confirm(&t("quiz.leave_confirm")) {
                screen.go(&Route::Games);
            }
        })
    };

    html! {
        <GamePlayPage
            session={(*session).clone()}
            selection={(*selection).clone()}
            result={(*result).clone()}
            submitting={*submitting}
            error={(*error).clone()}
            {on_pick_option} {on_select_text} {on_submit} {on_back}
        />
    }
}

#[function_component(LeaderboardScreen)]
pub fn leaderboard_screen() -> Html {
    let screen = use_screen(false);
    let board = use_state(|| None::<Leaderboard>);
    let error = use_state(|| None::<AttrValue>);
    {
        let (screen, board, error) = (screen.clone(), board.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                match screen.app.client.leaderboard().await {
                    Ok(loaded) => board.set(Some(loaded)),
                    Err(err) => error.set(screen.fail(&err)),
                }
            });
        });
    }
    html! { <LeaderboardPage board={(*board).clone()} error={(*error).clone()} /> }
}

#[function_component(UserScoresScreen)]
pub fn user_scores_screen() -> Html {
    let screen = use_screen(false);
    let scores = use_state(|| None::<UserScores>);
    let error = use_state(|| None::<AttrValue>);
    {
        let (screen, scores, error) = (screen.clone(), scores.clone(), error.clone());
        use_effect_with((), move |()| {
            spawn_local(async move {
                match screen.app.client.user_scores().await {
                    Ok(loaded) => scores.set(Some(loaded)),
                    Err(err) => error.set(screen.fail(&err)),
                }
            });
        });
    }
    html! { <UserScoresPage scores={(*scores).clone()} error={(*error).clone()} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct UploadProps {
    pub admin: bool,
}

#[function_component(UploadScreen)]
pub fn upload_screen(p: &UploadProps) -> Html {
    let screen = use_screen(p.admin);
    let file = use_mut_ref(|| None::<web_sys::File>);
    let file_name = use_state(|| None::<AttrValue>);
    let uploading = use_state(|| false);
    let error = use_state(|| None::<AttrValue>);
    let result = use_state(|| None::<StructuredPolicy>);

    let on_pick = {
        let (file, file_name, error) = (file.clone(), file_name.clone(), error.clone());
        Callback::from(move |event: Event| {
            let picked = dom::picked_file(&event);
            match &picked {
                Some(f) if policyplay_core::is_supported_upload(&f.name()) => {
                    file_name.set(Some(f.name().into()));
                    error.set(None);
                }
                Some(_) => {
                    file_name.set(None);
                    error.set(Some(t("upload.unsupported").into()));
                }
                None => file_name.set(None),
            }
            *file.borrow_mut() = picked.filter(|f| policyplay_core::is_supported_upload(&f.name()));
        })
    };
    let on_upload = {
        let (screen, file, uploading, error, result) =
            (screen.clone(), file.clone(), uploading.clone(), error.clone(), result.clone());
        Callback::from(move |()| {
            let Some(chosen) = file.borrow().clone() else {
                error.set(Some(t("upload.pick_first").into()));
                return;
            };
            let (screen, uploading, error, result) =
                (screen.clone(), uploading.clone(), error.clone(), result.clone());
            uploading.set(true);
            error.set(None);
            spawn_local(async move {
                match screen.app.client.upload_policy(&chosen).await {
                    Ok(policy) => {
                        log::info!("uploaded {}", chosen.name());
                        result.set(Some(policy));
                    }
                    Err(err) => error.set(screen.fail(&err)),
                }
                uploading.set(false);
            });
        })
    };
    let on_reset = {
        let (file, file_name, result, error) =
            (file.clone(), file_name.clone(), result.clone(), error.clone());
        Callback::from(move |()| {
            *file.borrow_mut() = None;
            file_name.set(None);
            result.set(None);
            error.set(None);
        })
    };

    html! {
        <UploadPage
            admin={p.admin}
            file_name={(*file_name).clone()}
            uploading={*uploading}
            error={(*error).clone()}
            result={(*result).clone()}
            {on_pick} {on_upload} {on_reset}
        />
    }
}
