use yew::prelude::*;

const PARTICLES: usize = 12;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub x_percent: f64,
    pub correct: bool,
}

/// Burst shown where a ball was tapped.
#[function_component(BallExplosion)]
pub fn ball_explosion(p: &Props) -> Html {
    let color = if p.correct { "bg-success" } else { "bg-error" };
    #[allow(clippy::cast_precision_loss)]
    let particles = (0..PARTICLES).map(|i| {
        let angle = (i as f64) * 360.0 / PARTICLES as f64;
        let style = format!("transform: rotate({angle:.0}deg) translateY(-3rem);");
        html! { <span class={classes!("absolute", "w-2", "h-2", "rounded-full", color)} {style}></span> }
    });
    html! {
        <div
            class="absolute top-1/2 pointer-events-none"
            style={format!("left: {:.2}%;", p.x_percent)}
            data-testid="ball-explosion"
            aria-hidden="true"
        >
            <span class="text-5xl">{ if p.correct { "✨" } else { "💥" } }</span>
            { for particles }
        </div>
    }
}
