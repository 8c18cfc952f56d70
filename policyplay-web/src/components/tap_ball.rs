use policyplay_core::Ball;
use yew::prelude::*;

/// Keyframes for the falling balls; a ball's fall time is set per element.
pub const TAP_FIELD_CSS: &str = "\
@keyframes policyplay-fall { from { top: -6rem; } to { top: 100%; } }\n\
.tap-ball { position: absolute; top: -6rem; transform: translateX(-50%); \
animation-name: policyplay-fall; animation-timing-function: linear; \
animation-fill-mode: forwards; }\n";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub ball: Ball,
    pub on_tap: Callback<usize>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(TapBall)]
pub fn tap_ball(p: &Props) -> Html {
    if !p.ball.is_live() {
        return Html::default();
    }
    let style = format!(
        "left: {:.2}%; z-index: {}; animation-duration: {}ms;",
        p.ball.x_percent, p.ball.z_index, p.ball.fall_ms
    );
    let onclick = {
        let cb = p.on_tap.clone();
        let id = p.ball.id;
        let disabled = p.disabled;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            e.stop_propagation();
            if !disabled {
                cb.emit(id);
            }
        })
    };
    html! {
        <button
            type="button"
            class="tap-ball btn btn-circle btn-primary w-28 h-28 text-xs normal-case shadow-xl"
            {style}
            {onclick}
            disabled={p.disabled}
            data-testid={format!("tap-ball-{}", p.ball.id)}
        >
            { p.ball.option.clone() }
        </button>
    }
}
