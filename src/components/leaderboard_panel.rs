use crate::model::PlayerScore;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardPanelProps {
    pub entries: Vec<PlayerScore>,
    // Nickname of the active session, highlighted in the list.
    #[prop_or_default]
    pub current: Option<String>,
}

#[function_component(LeaderboardPanel)]
pub fn leaderboard_panel(props: &LeaderboardPanelProps) -> Html {
    let rows = if props.entries.is_empty() {
        html! {
            <p style="text-align:center; color:#6b7280; margin:0;">{ "No players yet. Be the first!" }</p>
        }
    } else {
        html! {
            <ul style="list-style:none; margin:0; padding:0; font-size:17px;">
                { for props.entries.iter().map(|entry| {
                    let mine = props.current.as_deref() == Some(entry.name.as_str());
                    let row_style = if mine {
                        "display:flex; justify-content:space-between; padding:4px 8px; border-bottom:1px solid #d1d5db; background:#fef9c3; border-radius:6px; font-weight:700;"
                    } else {
                        "display:flex; justify-content:space-between; padding:4px 8px; border-bottom:1px solid #d1d5db;"
                    };
                    html! {
                        <li style={row_style}>
                            <span>{ entry.name.clone() }</span>
                            <span>{ entry.score }</span>
                        </li>
                    }
                }) }
            </ul>
        }
    };

    html! {
        <div style="margin-top:32px; background:#fff; color:#000; border-radius:12px; padding:24px; width:20rem; box-shadow:0 12px 30px rgba(0,0,0,0.25);">
            <h2 style="font-size:22px; font-weight:700; text-align:center; margin:0 0 16px;">{ "🏆 Leaderboard" }</h2>
            { rows }
        </div>
    }
}
