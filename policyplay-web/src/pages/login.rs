use crate::components::alert::AlertBanner;
use crate::dom;
use crate::i18n::t;
use crate::router::Route;
use policyplay_core::LoginRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Renders the admin variant of the form.
    #[prop_or_default]
    pub admin: bool,
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<LoginRequest>,
    pub on_navigate: Callback<Route>,
}

#[function_component(LoginPage)]
pub fn login_page(p: &Props) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| None::<AttrValue>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| email.set(dom::input_value(&e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(dom::input_value(&e)))
    };
    let onsubmit = {
        let (email, password, local_error) = (email.clone(), password.clone(), local_error.clone());
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            if request.email.is_empty() || request.password.is_empty() {
                local_error.set(Some(t("login.missing_fields").into()));
                return;
            }
            local_error.set(None);
            cb.emit(request);
        })
    };
    let go = |route: Route| {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(route.clone()))
    };
    let prefix = if p.admin { "admin_login" } else { "login" };
    let error = (*local_error).clone().or_else(|| p.error.clone());

    html! {
        <section class="flex justify-center py-12" data-testid={format!("{prefix}-page")}>
            <form class="card w-full max-w-md bg-base-100 shadow-xl" {onsubmit}>
                <div class="card-body gap-4">
                    <h1 class="card-title text-3xl">{ t(&format!("{prefix}.title")) }</h1>
                    <p class="opacity-70">{ t(&format!("{prefix}.subtitle")) }</p>
                    <AlertBanner message={error} />
                    <label class="form-control">
                        <span class="label-text">{ t("login.email") }</span>
                        <input class="input input-bordered" type="email" autocomplete="email"
                            value={(*email).clone()} oninput={on_email} data-testid="login-email" />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{ t("login.password") }</span>
                        <input class="input input-bordered" type="password" autocomplete="current-password"
                            value={(*password).clone()} oninput={on_password} data-testid="login-password" />
                    </label>
                    <button class="btn btn-primary" type="submit" disabled={p.busy} data-testid="login-submit">
                        if p.busy { <span class="loading loading-spinner"></span> }
                        { t(&format!("{prefix}.submit")) }
                    </button>
                    if p.admin {
                        <button type="button" class="btn btn-link" onclick={go(Route::Login)}>{ t("admin_login.user_link") }</button>
                    } else {
                        <button type="button" class="btn btn-link" onclick={go(Route::Signup)} data-testid="login-to-signup">
                            { t("login.signup_link") }
                        </button>
                    }
                </div>
            </form>
        </section>
    }
}
