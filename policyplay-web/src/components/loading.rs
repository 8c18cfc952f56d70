use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_else(default_label)]
    pub label: AttrValue,
}

fn default_label() -> AttrValue {
    AttrValue::from(crate::i18n::t("ui.loading"))
}

#[function_component(Loading)]
pub fn loading(p: &Props) -> Html {
    html! {
        <div class="flex flex-col items-center gap-3 py-12" aria-live="polite" data-testid="loading">
            <span class="loading loading-spinner loading-lg"></span>
            <p class="text-sm opacity-70">{ p.label.clone() }</p>
        </div>
    }
}
