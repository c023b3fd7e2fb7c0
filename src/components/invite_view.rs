use super::{
    countdown::Countdown, photo_carousel::PhotoCarousel, rsvp_form::RsvpCard,
    useful_links::UsefulLinks,
};
use crate::fx::{click_origin, Burst, Fx};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InviteViewProps {
    pub to_click_game: Callback<()>,
    pub to_photos: Callback<()>,
}

#[function_component(InviteView)]
pub fn invite_view(props: &InviteViewProps) -> Html {
    // Feedback is optional: without the provider the page stays silent.
    let fx = use_context::<Fx>();

    let on_hover = {
        let fx = fx.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.hover();
                fx.confetti.burst(Burst::sparkles());
            }
        })
    };
    let nav_click = |target: Callback<()>| {
        let fx = fx.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.click();
                fx.confetti.burst(Burst::mini(click_origin(&e)));
            }
            target.emit(());
        })
    };
    let open_photos = nav_click(props.to_photos.clone());
    let open_click_game = nav_click(props.to_click_game.clone());

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; min-height:100vh; background:linear-gradient(90deg, #a855f7, #ec4899, #9333ea); color:#fff; padding:24px; font-family:'Segoe UI', sans-serif;">
            <h1
                onmouseenter={on_hover.clone()}
                style="font-size:min(9vw, 48px); font-weight:700; margin:0 0 24px; text-align:center; background:linear-gradient(90deg, #fef08a, #f472b6); -webkit-background-clip:text; background-clip:text; color:transparent; filter:drop-shadow(0 4px 6px rgba(0,0,0,0.3)); cursor:default;"
            >
                { "🎂 You're Invited to My Birthday Party! 🎉" }
            </h1>
            <Countdown on_hover={on_hover.clone()} />
            <PhotoCarousel />
            <div style="display:flex; gap:16px; margin-bottom:32px; flex-wrap:wrap; justify-content:center;">
                <button
                    onclick={open_photos}
                    onmouseenter={on_hover.clone()}
                    style="display:inline-flex; align-items:center; gap:8px; background:rgba(255,255,255,0.2); color:#fff; padding:12px 24px; border:1px solid rgba(255,255,255,0.3); border-radius:999px; font-size:16px; font-weight:600; cursor:pointer; box-shadow:0 8px 20px rgba(0,0,0,0.2);"
                >
                    { "📸 View All Party Photos ✨" }
                </button>
                <button
                    onclick={open_click_game}
                    onmouseenter={on_hover.clone()}
                    style="display:inline-flex; align-items:center; gap:8px; background:#facc15; color:#000; padding:12px 24px; border:1px solid #eab308; border-radius:999px; font-size:16px; font-weight:600; cursor:pointer; box-shadow:0 8px 20px rgba(0,0,0,0.2);"
                >
                    { "🏆 Leaderboard 🔥" }
                </button>
            </div>
            <RsvpCard />
            <UsefulLinks />
        </div>
    }
}
