use crate::i18n::t;
use crate::router::Route;
use policyplay_core::User;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub user: Option<User>,
    pub on_navigate: Callback<Route>,
}

const FEATURES: [(&str, &str); 3] = [
    ("📚", "home.feature_learn"),
    ("🤖", "home.feature_ai"),
    ("📊", "home.feature_progress"),
];

#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let go = |route: Route| {
        let cb = p.on_navigate.clone();
        Callback::from(move |_| cb.emit(route.clone()))
    };
    let actions = if p.user.is_some() {
        html! {
            <>
                <button class="btn btn-primary btn-lg" onclick={go(Route::Games)} data-testid="home-games">
                    { t("home.play_games") }
                </button>
                <button class="btn btn-secondary btn-lg" onclick={go(Route::PolicyTap)} data-testid="home-tap">
                    { t("home.play_tap") }
                </button>
                <button class="btn btn-accent btn-lg" onclick={go(Route::EscapeRoom)} data-testid="home-escape">
                    { t("home.play_escape") }
                </button>
            </>
        }
    } else {
        html! {
            <>
                <button class="btn btn-primary btn-lg" onclick={go(Route::Login)} data-testid="home-login">
                    { t("home.user_login") }
                </button>
                <button class="btn btn-success btn-lg" onclick={go(Route::Signup)} data-testid="home-signup">
                    { t("home.signup") }
                </button>
            </>
        }
    };
    let features = FEATURES.iter().map(|(icon, key)| {
        html! {
            <div class="card bg-base-100 shadow">
                <div class="card-body items-center">
                    <span class="text-4xl">{ *icon }</span>
                    <h3 class="font-bold">{ t(&format!("{key}.title")) }</h3>
                    <p class="text-sm opacity-70">{ t(&format!("{key}.desc")) }</p>
                </div>
            </div>
        }
    });
    html! {
        <section class="hero min-h-[70vh]" data-testid="home-page">
            <div class="hero-content text-center flex-col max-w-4xl">
                <h1 class="text-6xl font-bold text-primary">{ t("app.name") }</h1>
                <p class="text-2xl font-semibold">{ t("home.tagline") }</p>
                <p class="opacity-80">{ t("home.intro") }</p>
                <div class="flex flex-wrap gap-4 justify-center mt-8">{ actions }</div>
                <div class="grid gap-6 md:grid-cols-3 mt-12 w-full">{ for features }</div>
            </div>
        </section>
    }
}
