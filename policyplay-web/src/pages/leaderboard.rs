use crate::components::alert::AlertBanner;
use crate::components::leaderboard_table::{LeaderboardRow, LeaderboardTable};
use crate::components::loading::Loading;
use crate::i18n::t;
use policyplay_core::Leaderboard;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub board: Option<Leaderboard>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// Ranks follow list order.
#[must_use]
pub fn overall_rows(board: &Leaderboard) -> Vec<LeaderboardRow> {
    board
        .leaderboard
        .iter()
        .zip(1u32..)
        .map(|(entry, rank)| LeaderboardRow {
            rank,
            name: entry.user_name.clone(),
            email: entry.user_email.clone(),
            score: entry.total_score,
            detail: format!(
                "{} · {:.0}%",
                entry.completed_games, entry.accuracy
            ),
            highlight: entry.is_current_user,
        })
        .collect()
}

#[function_component(LeaderboardPage)]
pub fn leaderboard_page(p: &Props) -> Html {
    let content = match &p.board {
        None if p.error.is_none() => html! { <Loading /> },
        None => Html::default(),
        Some(board) => {
            let total = board.total_participants.to_string();
            let rank = board.current_user_rank.map(|r| r.to_string());
            html! {
                <>
                    <div class="stats shadow">
                        <div class="stat">
                            <div class="stat-title">{ t("leaderboard.participants") }</div>
                            <div class="stat-value">{ total }</div>
                        </div>
                        if let Some(rank) = rank {
                            <div class="stat" data-testid="leaderboard-my-rank">
                                <div class="stat-title">{ t("leaderboard.your_rank") }</div>
                                <div class="stat-value text-primary">{ format!("#{rank}") }</div>
                            </div>
                        }
                    </div>
                    <LeaderboardTable rows={overall_rows(board)} detail_label={AttrValue::from(t("leaderboard.games_accuracy"))} />
                </>
            }
        }
    };
    html! {
        <section class="space-y-6" data-testid="leaderboard-page">
            <h1 class="text-4xl font-bold text-center">{ "🏆 " }{ t("leaderboard.title") }</h1>
            <p class="text-center opacity-70">{ t("leaderboard.subtitle") }</p>
            <AlertBanner message={p.error.clone()} />
            { content }
        </section>
    }
}
