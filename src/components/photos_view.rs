use crate::fx::{click_origin, Burst, Fx};
use crate::model::{photo_path, PHOTO_COUNT};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PhotosViewProps {
    pub to_invite: Callback<()>,
}

#[function_component(PhotosView)]
pub fn photos_view(props: &PhotosViewProps) -> Html {
    let fx = use_context::<Fx>();
    let deck_index = use_state(|| 0u32);
    let selected = use_state(|| Option::<u32>::None);

    let on_hover = {
        let fx = fx.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.hover();
                fx.confetti.burst(Burst::sparkles());
            }
        })
    };
    let advance = {
        let deck_index = deck_index.clone();
        let fx = fx.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.click();
                fx.confetti.burst(Burst::mini(click_origin(&e)));
            }
            deck_index.set((*deck_index).saturating_add(1));
        })
    };
    let back = {
        let to_invite = props.to_invite.clone();
        Callback::from(move |_| to_invite.emit(()))
    };

    // The deck runs out after the last card; the grid below always stays.
    let deck = if *deck_index < PHOTO_COUNT {
        let n = *deck_index + 1;
        html! {
            <div style="display:flex; justify-content:center; margin-bottom:48px;">
                <div
                    onclick={advance}
                    onmouseenter={on_hover.clone()}
                    style="position:relative; width:min(28rem, 90vw); aspect-ratio:3/4; border-radius:18px; overflow:hidden; cursor:pointer; box-shadow:0 20px 50px rgba(0,0,0,0.4);"
                >
                    <img
                        src={photo_path(n)}
                        alt={format!("Party photo {}", n)}
                        style="width:100%; height:100%; object-fit:cover;"
                    />
                    <div style="position:absolute; bottom:0; left:0; right:0; padding:16px; background:linear-gradient(to top, rgba(0,0,0,0.8), transparent);">
                        <p style="color:#fff; font-size:17px; font-weight:600; margin:0;">
                            { "Tap the card to see more photos" }
                        </p>
                    </div>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let viewer = match *selected {
        Some(n) => html! {
            <div style="position:fixed; top:0; left:0; width:100vw; height:100vh; background:rgba(0,0,0,0.9); display:flex; align-items:center; justify-content:center; z-index:50;">
                <img
                    src={photo_path(n)}
                    alt="Selected photo"
                    style="max-width:90vw; max-height:90vh; object-fit:contain;"
                />
                <button
                    onclick={{
                        let selected = selected.clone();
                        Callback::from(move |_| selected.set(None))
                    }}
                    onmouseenter={on_hover.clone()}
                    style="position:absolute; top:16px; right:16px; background:none; border:none; color:#fff; font-size:36px; cursor:pointer;"
                >
                    { "✕" }
                </button>
            </div>
        },
        None => html! {},
    };

    html! {
        <div style="min-height:100vh; background:linear-gradient(90deg, #a855f7, #ec4899, #9333ea); padding:24px; font-family:'Segoe UI', sans-serif;">
            <div style="max-width:80rem; margin:0 auto;">
                <button
                    onclick={back}
                    onmouseenter={on_hover.clone()}
                    style="display:inline-flex; align-items:center; gap:8px; background:rgba(255,255,255,0.2); color:#fff; padding:12px 24px; border:1px solid rgba(255,255,255,0.3); border-radius:999px; font-size:16px; font-weight:600; cursor:pointer; box-shadow:0 8px 20px rgba(0,0,0,0.2); margin-bottom:32px;"
                >
                    { "← Back to Invitation 🎂" }
                </button>
                <h1 style="font-size:36px; font-weight:700; text-align:center; margin:0 0 32px; background:linear-gradient(90deg, #fef08a, #f472b6); -webkit-background-clip:text; background-clip:text; color:transparent; filter:drop-shadow(0 4px 6px rgba(0,0,0,0.3));">
                    { "Party Photos Gallery" }
                </h1>
                { deck }
                <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(160px, 1fr)); gap:16px;">
                    { for (1..=PHOTO_COUNT).map(|n| {
                        let open = {
                            let selected = selected.clone();
                            Callback::from(move |_| selected.set(Some(n)))
                        };
                        html! {
                            <div
                                onclick={open}
                                onmouseenter={on_hover.clone()}
                                style="aspect-ratio:1/1; border-radius:10px; overflow:hidden; cursor:pointer;"
                            >
                                <img
                                    src={photo_path(n)}
                                    alt={format!("Party photo {}", n)}
                                    style="width:100%; height:100%; object-fit:cover;"
                                />
                            </div>
                        }
                    }) }
                </div>
                { viewer }
            </div>
        </div>
    }
}
