use crate::i18n::t;
use yew::prelude::*;

/// One ranked line, already projected from whichever leaderboard produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub email: String,
    pub score: i32,
    pub detail: String,
    pub highlight: bool,
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub rows: Vec<LeaderboardRow>,
    /// Header for the `detail` column.
    pub detail_label: AttrValue,
}

fn medal(rank: u32) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("#{n}"),
    }
}

#[function_component(LeaderboardTable)]
pub fn leaderboard_table(p: &Props) -> Html {
    if p.rows.is_empty() {
        return html! {
            <p class="text-center opacity-70 py-8" data-testid="leaderboard-empty">{ t("leaderboard.empty") }</p>
        };
    }
    let rows = p.rows.iter().map(|row| {
        let class = classes!(row.highlight.then_some("bg-primary/10 font-semibold"));
        html! {
            <tr {class} data-testid={format!("leaderboard-row-{}", row.rank)}>
                <td>{ medal(row.rank) }</td>
                <td>
                    <div>{ row.name.clone() }</div>
                    <div class="text-xs opacity-60">{ row.email.clone() }</div>
                </td>
                <td class="text-right">{ row.score }</td>
                <td class="text-right">{ row.detail.clone() }</td>
            </tr>
        }
    });
    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra w-full" data-testid="leaderboard-table">
                <thead>
                    <tr>
                        <th>{ t("leaderboard.rank") }</th>
                        <th>{ t("leaderboard.player") }</th>
                        <th class="text-right">{ t("leaderboard.score") }</th>
                        <th class="text-right">{ p.detail_label.clone() }</th>
                    </tr>
                </thead>
                <tbody>{ for rows }</tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::medal;

    #[test]
    fn podium_gets_medals() {
        assert_eq!(medal(1), "🥇");
        assert_eq!(medal(3), "🥉");
        assert_eq!(medal(4), "#4");
    }
}
