use crate::components::alert::AlertBanner;
use crate::dom;
use crate::i18n::t;
use crate::router::Route;
use policyplay_core::SignupRequest;
use yew::prelude::*;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<SignupRequest>,
    pub on_navigate: Callback<Route>,
}

/// Checks the form locally before anything is sent.
///
/// # Errors
///
/// Returns the translated message for the first problem found.
pub fn validate_signup(request: &SignupRequest, confirm: &str) -> Result<(), String> {
    if request.name.trim().is_empty() || request.email.trim().is_empty() {
        return Err(t("signup.missing_fields"));
    }
    if request.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(t("signup.password_short"));
    }
    if request.password != confirm {
        return Err(t("signup.password_mismatch"));
    }
    Ok(())
}

#[function_component(SignupPage)]
pub fn signup_page(p: &Props) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let local_error = use_state(|| None::<AttrValue>);

    let bind = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| field.set(dom::input_value(&e)))
    };
    let onsubmit = {
        let (name, email, password, confirm) =
            (name.clone(), email.clone(), password.clone(), confirm.clone());
        let local_error = local_error.clone();
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = SignupRequest {
                email: email.trim().to_string(),
                name: name.trim().to_string(),
                password: (*password).clone(),
            };
            match validate_signup(&request, &confirm) {
                Ok(()) => {
                    local_error.set(None);
                    cb.emit(request);
                }
                Err(message) => local_error.set(Some(message.into())),
            }
        })
    };
    let to_login = {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(Route::Login))
    };
    let error = (*local_error).clone().or_else(|| p.error.clone());

    html! {
        <section class="flex justify-center py-12" data-testid="signup-page">
            <form class="card w-full max-w-md bg-base-100 shadow-xl" {onsubmit}>
                <div class="card-body gap-4">
                    <h1 class="card-title text-3xl">{ t("signup.title") }</h1>
                    <AlertBanner message={error} />
                    <label class="form-control">
                        <span class="label-text">{ t("signup.name") }</span>
                        <input class="input input-bordered" value={(*name).clone()} oninput={bind(&name)} data-testid="signup-name" />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{ t("login.email") }</span>
                        <input class="input input-bordered" type="email" value={(*email).clone()} oninput={bind(&email)} data-testid="signup-email" />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{ t("login.password") }</span>
                        <input class="input input-bordered" type="password" autocomplete="new-password"
                            value={(*password).clone()} oninput={bind(&password)} data-testid="signup-password" />
                    </label>
                    <label class="form-control">
                        <span class="label-text">{ t("signup.confirm") }</span>
                        <input class="input input-bordered" type="password" autocomplete="new-password"
                            value={(*confirm).clone()} oninput={bind(&confirm)} data-testid="signup-confirm" />
                    </label>
                    <button class="btn btn-success" type="submit" disabled={p.busy} data-testid="signup-submit">
                        if p.busy { <span class="loading loading-spinner"></span> }
                        { t("signup.submit") }
                    </button>
                    <button type="button" class="btn btn-link" onclick={to_login}>{ t("signup.login_link") }</button>
                </div>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str) -> SignupRequest {
        SignupRequest {
            email: "ana@example.com".into(),
            name: "Ana".into(),
            password: password.into(),
        }
    }

    #[test]
    fn rejects_short_and_mismatched_passwords() {
        crate::i18n::set_lang("en");
        assert!(validate_signup(&request("abc"), "abc").is_err());
        assert!(validate_signup(&request("abcdef"), "abcdeg").is_err());
        assert!(validate_signup(&request("abcdef"), "abcdef").is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut req = request("abcdef");
        req.name = "  ".into();
        assert!(validate_signup(&req, "abcdef").is_err());
    }
}
