use crate::model::PARTY_START_ISO;
use crate::util::format_countdown;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

// Milliseconds until the party starts; negative once underway.
fn ms_until_party() -> f64 {
    let start = js_sys::Date::new(&JsValue::from_str(PARTY_START_ISO)).get_time();
    start - js_sys::Date::now()
}

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownProps {
    pub on_hover: Callback<MouseEvent>,
}

#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let left = use_state(ms_until_party);

    {
        let left = left.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let tick = Closure::wrap(Box::new(move || {
                left.set(ms_until_party());
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            let window_clone = window.clone();
            move || {
                window_clone.clear_interval_with_handle(id);
                let _keep_alive = &tick;
            }
        });
    }

    let text = match format_countdown(*left) {
        Some(remaining) => format!("⏳ Countdown: {}", remaining),
        None => "🎉 The Party Has Started! 🎉".to_string(),
    };

    html! {
        <h2
            onmouseenter={props.on_hover.clone()}
            style="font-size:24px; font-weight:600; background:rgba(0,0,0,0.5); padding:16px; border-radius:12px; border:1px solid rgba(255,255,255,0.2); box-shadow:0 8px 24px rgba(0,0,0,0.25); margin:0 0 24px;"
        >
            { text }
        </h2>
    }
}
