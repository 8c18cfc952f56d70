use yew::prelude::*;

/// Shown when no route matches.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="hero min-h-[50vh]" aria-live="assertive" data-testid="not-found">
            <div class="hero-content text-center flex-col">
                <h1 class="text-5xl font-bold">{ crate::i18n::t("not_found.title") }</h1>
                <p>{ crate::i18n::t("not_found.message") }</p>
                <button type="button" class="btn btn-primary" onclick={go_home}>
                    { crate::i18n::t("not_found.back") }
                </button>
            </div>
        </section>
    }
}
