use super::use_screen;
use crate::app::routing::after_login;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFound;
use crate::pages::signup::SignupPage;
use crate::router::Route;
use policyplay_core::{ApiError, LoginRequest, SignupRequest, User};
use std::future::Future;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(HomeScreen)]
pub fn home_screen() -> Html {
    let screen = use_screen(false);
    html! { <HomePage user={screen.app.user.clone()} on_navigate={screen.navigate()} /> }
}

#[function_component(NotFoundScreen)]
pub fn not_found_screen() -> Html {
    let screen = use_screen(false);
    html! { <NotFound on_go_home={screen.link(Route::Home)} /> }
}

/// Shared sign-in plumbing for the three auth forms.
#[hook]
fn use_sign_in() -> (UseStateHandle<bool>, UseStateHandle<Option<AttrValue>>) {
    (use_state(|| false), use_state(|| None::<AttrValue>))
}

fn sign_in<F>(
    screen: super::Screen,
    busy: UseStateHandle<bool>,
    error: UseStateHandle<Option<AttrValue>>,
    call: F,
) where
    F: Future<Output = Result<User, ApiError>> + 'static,
{
    busy.set(true);
    error.set(None);
    spawn_local(async move {
        match call.await {
            Ok(user) => {
                log::info!("signed in as {}", user.email);
                let target = after_login(&user);
                screen.app.set_user.emit(Some(user));
                screen.go(&target);
            }
            Err(err) => {
                log::warn!("sign-in failed: {err}");
                error.set(Some(err.to_string().into()));
            }
        }
        busy.set(false);
    });
}

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let screen = use_screen(false);
    let (busy, error) = use_sign_in();
    let on_submit = {
        let (screen, busy, error) = (screen.clone(), busy.clone(), error.clone());
        Callback::from(move |request: LoginRequest| {
            let client = screen.app.client.clone();
            sign_in(screen.clone(), busy.clone(), error.clone(), async move {
                client.login(&request).await
            });
        })
    };
    html! {
        <LoginPage busy={*busy} error={(*error).clone()} {on_submit} on_navigate={screen.navigate()} />
    }
}

#[function_component(AdminLoginScreen)]
pub fn admin_login_screen() -> Html {
    let screen = use_screen(true);
    let (busy, error) = use_sign_in();
    let on_submit = {
        let (screen, busy, error) = (screen.clone(), busy.clone(), error.clone());
        Callback::from(move |request: LoginRequest| {
            let client = screen.app.client.clone();
            sign_in(screen.clone(), busy.clone(), error.clone(), async move {
                client.admin_login(&request).await
            });
        })
    };
    html! {
        <LoginPage admin=true busy={*busy} error={(*error).clone()} {on_submit} on_navigate={screen.navigate()} />
    }
}

#[function_component(SignupScreen)]
pub fn signup_screen() -> Html {
    let screen = use_screen(false);
    let (busy, error) = use_sign_in();
    let on_submit = {
        let (screen, busy, error) = (screen.clone(), busy.clone(), error.clone());
        Callback::from(move |request: SignupRequest| {
            let client = screen.app.client.clone();
            sign_in(screen.clone(), busy.clone(), error.clone(), async move {
                client.signup(&request).await
            });
        })
    };
    html! {
        <SignupPage busy={*busy} error={(*error).clone()} {on_submit} on_navigate={screen.navigate()} />
    }
}
