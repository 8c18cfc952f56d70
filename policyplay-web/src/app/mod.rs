#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod routing;
#[cfg(target_arch = "wasm32")]
pub mod screens;
#[cfg(target_arch = "wasm32")]
pub mod state;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::config::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();
    let navigator = use_navigator();
    let route = use_route::<Route>().unwrap_or(Route::NotFound);

    let redirect = routing::redirect_for(&route, (*app_state.user).as_ref());
    {
        let navigator = navigator.clone();
        let redirect = redirect.clone();
        use_effect_with(redirect, move |redirect| {
            if let (Some(target), Some(nav)) = (redirect.clone(), navigator) {
                log::info!("redirecting to {}", target.to_path());
                nav.replace(&target);
            }
        });
    }
    {
        let notice = app_state.notice.clone();
        use_effect_with(route.clone(), move |route| {
            if (*notice).as_ref().is_some_and(|(target, _)| target != route) {
                notice.set(None);
            }
        });
    }

    let on_navigate = {
        let navigator = navigator.clone();
        Callback::from(move |target: Route| {
            if let Some(nav) = &navigator {
                nav.push(&target);
            }
        })
    };
    let on_logout = {
        let ctx = app_state.context();
        let on_navigate = on_navigate.clone();
        Callback::from(move |()| {
            ctx.logout();
            on_navigate.emit(Route::Home);
        })
    };

    let main_view = if redirect.is_some() {
        html! { <crate::components::loading::Loading /> }
    } else {
        screens::switch(route)
    };

    html! {
        <ContextProvider<state::AppContext> context={app_state.context()}>
            <crate::components::header::Header user={(*app_state.user).clone()} {on_navigate} {on_logout} />
            <main id="main" role="main" class="container mx-auto px-4 py-8">
                <crate::components::alert::AlertBanner
                    message={(*app_state.notice).as_ref().map(|(_, message)| message.clone())}
                    kind={crate::components::alert::AlertKind::Info} />
                { main_view }
            </main>
        </ContextProvider<state::AppContext>>
    }
}
