use crate::i18n::tr;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub question: AttrValue,
    pub index: usize,
    pub total: usize,
}

#[function_component(QuestionCard)]
pub fn question_card(p: &Props) -> Html {
    let number = (p.index + 1).to_string();
    let total = p.total.to_string();
    let label = tr(
        "tap.question_of",
        Some(&crate::targs! { "n" => number.as_str(), "total" => total.as_str() }),
    );
    html! {
        <div class="card bg-base-100 shadow-xl" data-testid="question-card">
            <div class="card-body items-center text-center">
                <span class="badge badge-outline">{ label }</span>
                <h2 class="card-title text-2xl">{ p.question.clone() }</h2>
            </div>
        </div>
    }
}
