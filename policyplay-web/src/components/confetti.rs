use yew::prelude::*;

const PIECES: [&str; 6] = ["🎉", "🎊", "⭐", "✨", "🎉", "🎊"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: bool,
}

#[function_component(Confetti)]
pub fn confetti(p: &Props) -> Html {
    if !p.active {
        return Html::default();
    }
    let pieces = PIECES.iter().enumerate().map(|(i, piece)| {
        let style = format!("left: {}%; animation-delay: {}ms;", 8 + i * 16, i * 90);
        html! { <span class="absolute top-0 text-3xl animate-bounce" {style}>{ *piece }</span> }
    });
    html! {
        <div class="absolute inset-0 pointer-events-none overflow-hidden" data-testid="confetti" aria-hidden="true">
            { for pieces }
        </div>
    }
}
