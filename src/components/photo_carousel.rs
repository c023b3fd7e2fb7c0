use crate::fx::{click_origin, Burst, Fx};
use crate::model::{photo_path, PHOTO_COUNT};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const GROW_STEP: f64 = 0.2;
const MAX_SCALE: f64 = 2.5;
const SHRINK_STEP: f64 = 0.05;
const IDLE_BEFORE_SHRINK_MS: f64 = 3_000.0;

pub(crate) fn grow(scale: f64) -> f64 {
    (scale + GROW_STEP).min(MAX_SCALE)
}

pub(crate) fn shrink(scale: f64) -> f64 {
    (scale - SHRINK_STEP).max(1.0)
}

// Maps a [0, 1) sample to a photo number in 1..=PHOTO_COUNT.
pub(crate) fn random_photo(sample: f64) -> u32 {
    ((sample * PHOTO_COUNT as f64) as u32).min(PHOTO_COUNT - 1) + 1
}

#[function_component(PhotoCarousel)]
pub fn photo_carousel() -> Html {
    let fx = use_context::<Fx>();
    let photo = use_state(|| 1u32);
    let scale = use_state(|| 1.0f64);
    let last_click = use_mut_ref(js_sys::Date::now);
    // Interval closures outlive any one render; they read the scale
    // through a refreshed handle instead of a stale capture.
    let scale_ref = use_mut_ref(|| scale.clone());

    {
        let scale_ref = scale_ref.clone();
        let current = scale.clone();
        use_effect_with(*scale, move |_| {
            *scale_ref.borrow_mut() = current.clone();
            || ()
        });
    }
    {
        let photo = photo.clone();
        let scale_ref = scale_ref.clone();
        let last_click = last_click.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let rotate_tick = {
                let photo = photo.clone();
                Closure::wrap(Box::new(move || {
                    photo.set(random_photo(js_sys::Math::random()));
                }) as Box<dyn FnMut()>)
            };
            let rotate_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    rotate_tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            let shrink_tick = {
                let scale_ref = scale_ref.clone();
                let last_click = last_click.clone();
                Closure::wrap(Box::new(move || {
                    let handle = scale_ref.borrow().clone();
                    let idle_ms = js_sys::Date::now() - *last_click.borrow();
                    if idle_ms > IDLE_BEFORE_SHRINK_MS && *handle > 1.0 {
                        handle.set(shrink(*handle));
                    }
                }) as Box<dyn FnMut()>)
            };
            let shrink_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    shrink_tick.as_ref().unchecked_ref(),
                    100,
                )
                .unwrap();
            let window_clone = window.clone();
            move || {
                window_clone.clear_interval_with_handle(rotate_id);
                window_clone.clear_interval_with_handle(shrink_id);
                let _keep_alive = (&rotate_tick, &shrink_tick);
            }
        });
    }

    let on_photo_click = {
        let scale = scale.clone();
        let last_click = last_click.clone();
        let fx = fx.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            *last_click.borrow_mut() = js_sys::Date::now();
            scale.set(grow(*scale));
            if let Some(fx) = &fx {
                fx.sounds.click();
                fx.confetti.burst(Burst::mini(click_origin(&e)));
            }
        })
    };
    let on_photo_hover = {
        let fx = fx.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.hover();
                fx.confetti.burst(Burst::sparkles());
            }
        })
    };

    html! {
        <div style="position:relative; margin:0 0 24px;">
            <img
                src={photo_path(*photo)}
                alt="Random Photo"
                onclick={on_photo_click}
                onmouseenter={on_photo_hover}
                style={format!(
                    "width:256px; height:256px; object-fit:cover; border-radius:50%; border:4px solid rgba(255,255,255,0.3); box-shadow:0 0 20px 10px rgba(255,255,255,0.35); cursor:pointer; transition:transform 0.3s ease; transform:scale({});",
                    *scale
                )}
            />
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%,-50%); pointer-events:none; background:rgba(0,0,0,0.5); color:#fff; padding:8px 16px; border-radius:999px; font-size:15px; font-weight:600; white-space:nowrap;">
                { "Click to make it bigger! (if you know what I mean...)" }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_pump_the_scale_up_to_the_cap() {
        let mut scale = 1.0;
        for _ in 0..10 {
            scale = grow(scale);
        }
        assert!((scale - MAX_SCALE).abs() < 1e-9);
        assert_eq!(grow(MAX_SCALE), MAX_SCALE);
    }

    #[test]
    fn idle_shrink_floors_at_natural_size() {
        let mut scale = 1.12;
        for _ in 0..10 {
            scale = shrink(scale);
        }
        assert_eq!(scale, 1.0);
        assert_eq!(shrink(1.0), 1.0);
    }

    #[test]
    fn every_sample_lands_on_a_real_photo() {
        assert_eq!(random_photo(0.0), 1);
        assert_eq!(random_photo(0.5), 26);
        assert_eq!(random_photo(0.999), PHOTO_COUNT);
    }
}
