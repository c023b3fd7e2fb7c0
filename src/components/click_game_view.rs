use super::leaderboard_panel::LeaderboardPanel;
use crate::fx::{Burst, Fx};
use crate::model::GameState;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ClickGameViewProps {
    pub game: UseReducerHandle<GameState>,
    pub on_start: Callback<String>,
    pub on_cake_click: Callback<()>,
    pub to_invite: Callback<()>,
    pub to_photos: Callback<()>,
}

#[function_component(ClickGameView)]
pub fn click_game_view(props: &ClickGameViewProps) -> Html {
    let fx = use_context::<Fx>();
    let nickname_draft = use_state(String::new);
    // Seeded with the current count so remounting mid-session does not
    // replay an old celebration.
    let initial_celebrations = props.game.celebrations;
    let seen_celebrations = use_mut_ref(move || initial_celebrations);

    {
        let fx = fx.clone();
        let seen = seen_celebrations.clone();
        use_effect_with(props.game.celebrations, move |count| {
            let fired = *count > *seen.borrow();
            *seen.borrow_mut() = *count;
            if fired {
                if let Some(fx) = &fx {
                    fx.confetti.burst(Burst::milestone());
                }
            }
            || ()
        });
    }

    let on_nick_input = {
        let nickname_draft = nickname_draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            nickname_draft.set(input.value());
        })
    };
    let start = {
        let nickname_draft = nickname_draft.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| {
            on_start.emit((*nickname_draft).clone());
        })
    };
    let cake_click = {
        let on_cake_click = props.on_cake_click.clone();
        Callback::from(move |_: MouseEvent| on_cake_click.emit(()))
    };

    let stage = if !props.game.started {
        html! {
            <div style="display:flex; flex-direction:column; align-items:center;">
                <input
                    type="text"
                    placeholder="Enter your nickname"
                    value={(*nickname_draft).clone()}
                    oninput={on_nick_input}
                    style="padding:12px; border:none; border-radius:12px; color:#000; font-size:16px;"
                />
                <button
                    onclick={start}
                    style="margin-top:16px; background:#facc15; color:#000; padding:8px 16px; border:none; border-radius:12px; font-size:16px; font-weight:600; cursor:pointer; box-shadow:0 6px 16px rgba(0,0,0,0.25);"
                >
                    { "Start Game" }
                </button>
            </div>
        }
    } else {
        html! {
            <div style="display:flex; flex-direction:column; align-items:center;">
                <div
                    onclick={cake_click}
                    style="font-size:96px; cursor:pointer; user-select:none; animation:wiggle 1s ease-in-out infinite;"
                >
                    { "🎂" }
                </div>
                <p style="font-size:22px; font-weight:700; margin:16px 0 0;">
                    { format!("Clicks: {}", props.game.clicks) }
                </p>
            </div>
        }
    };

    let current = props.game.started.then(|| props.game.nickname.clone());

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100vh; background:linear-gradient(90deg, #a855f7, #ec4899, #9333ea); color:#fff; padding:24px; font-family:'Segoe UI', sans-serif;">
            <h1 style="font-size:min(9vw, 48px); font-weight:700; margin:0 0 24px; text-align:center;">
                { "🎂 Birthday Click Challenge! 🎉" }
            </h1>
            { stage }
            <LeaderboardPanel entries={props.game.board.entries().to_vec()} {current} />
            <div style="margin-top:24px; display:flex; gap:16px;">
                <button
                    onclick={{
                        let to_invite = props.to_invite.clone();
                        Callback::from(move |_| to_invite.emit(()))
                    }}
                    style="background:#3b82f6; color:#fff; padding:8px 16px; border:none; border-radius:10px; font-size:15px; cursor:pointer; box-shadow:0 6px 16px rgba(0,0,0,0.25);"
                >
                    { "🔙 Back to Main Page" }
                </button>
                <button
                    onclick={{
                        let to_photos = props.to_photos.clone();
                        Callback::from(move |_| to_photos.emit(()))
                    }}
                    style="background:#facc15; color:#000; padding:8px 16px; border:none; border-radius:10px; font-size:15px; cursor:pointer; box-shadow:0 6px 16px rgba(0,0,0,0.25);"
                >
                    { "📸 View Party Photos" }
                </button>
            </div>
        </div>
    }
}
