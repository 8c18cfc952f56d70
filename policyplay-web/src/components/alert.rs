use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    #[default]
    Error,
}

impl AlertKind {
    const fn class(self) -> &'static str {
        match self {
            Self::Info => "alert alert-info",
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-error",
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub kind: AlertKind,
}

/// Inline banner; renders nothing without a message.
#[function_component(AlertBanner)]
pub fn alert_banner(p: &Props) -> Html {
    let Some(message) = p.message.clone() else {
        return Html::default();
    };
    html! {
        <div role="alert" class={p.kind.class()} data-testid="alert-banner">
            <span>{ message }</span>
        </div>
    }
}
