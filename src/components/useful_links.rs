use crate::fx::{click_origin, Burst, Fx};
use yew::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("📍 Party Location", "https://maps.app.goo.gl/vQx4Pz9hXhGkTde28"),
    (
        "🎵 Party Playlist",
        "https://open.spotify.com/playlist/4kR7wZb2nQx9sVe1uYhTm0",
    ),
    ("💬 Party Chat", "https://t.me/+qLmXw4vRkTFhNzVi"),
    (
        "🎁 Birthday Wishlist",
        "https://docs.google.com/spreadsheets/d/1xK9mQvTn4pWcRj2sLbYe8aHdZuFgN3oVi5tUw7EqDkM/edit",
    ),
];

#[function_component(UsefulLinks)]
pub fn useful_links() -> Html {
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
    let on_click = {
        let fx = fx.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.click();
                fx.confetti.burst(Burst::mini(click_origin(&e)));
            }
        })
    };

    html! {
        <div style="width:100%; max-width:32rem; margin-top:32px; background:rgba(255,255,255,0.92); color:#000; border-radius:18px; padding:32px; box-shadow:0 20px 50px rgba(0,0,0,0.3); border:1px solid rgba(255,255,255,0.2);">
            <h2
                onmouseenter={on_hover.clone()}
                style="font-size:24px; font-weight:700; text-align:center; margin:0 0 24px; background:linear-gradient(90deg, #9333ea, #db2777); -webkit-background-clip:text; background-clip:text; color:transparent;"
            >
                { "Useful Links" }
            </h2>
            <ul style="list-style:none; margin:0; padding:0; display:flex; flex-direction:column; gap:16px;">
                { for LINKS.iter().map(|(label, href)| html! {
                    <li onmouseenter={on_hover.clone()} onclick={on_click.clone()}>
                        <a
                            href={*href}
                            target="_blank"
                            rel="noopener noreferrer"
                            style="display:flex; align-items:center; gap:8px; color:#9333ea; font-weight:600; text-decoration:none;"
                        >
                            { *label }
                        </a>
                    </li>
                }) }
            </ul>
        </div>
    }
}
