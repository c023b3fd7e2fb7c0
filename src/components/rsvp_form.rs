use crate::fx::{Burst, Fx};
use crate::rsvp::{
    urlencoded, Diet, Drink, RsvpForm, RsvpIssue, RsvpSubmission, FORM_RELAY_URL,
};
use crate::util::warn;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

enum RsvpStatus {
    Editing,
    Accepted(RsvpSubmission),
    Failed,
}

async fn post_rsvp(submission: &RsvpSubmission) -> bool {
    let body = urlencoded(&submission.form_pairs());
    let request = Request::post(FORM_RELAY_URL)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(body);
    match request {
        Ok(req) => match req.send().await {
            Ok(resp) if resp.ok() => true,
            Ok(resp) => {
                warn(&format!("rsvp relay rejected: HTTP {}", resp.status()));
                false
            }
            Err(err) => {
                warn(&format!("rsvp relay unreachable: {err}"));
                false
            }
        },
        Err(err) => {
            warn(&format!("rsvp request not built: {err}"));
            false
        }
    }
}

const INPUT_STYLE: &str = "padding:12px; border:2px solid #d1d5db; border-radius:12px; font-size:16px; width:100%; box-sizing:border-box;";

#[function_component(RsvpCard)]
pub fn rsvp_card() -> Html {
    let fx = use_context::<Fx>();
    let form = use_state(RsvpForm::default);
    let issues = use_state(Vec::<RsvpIssue>::new);
    let status = use_state(|| RsvpStatus::Editing);

    let on_hover = {
        let fx = fx.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(fx) = &fx {
                fx.sounds.hover();
                fx.confetti.burst(Burst::sparkles());
            }
        })
    };

    let edit_text = |apply: fn(&mut RsvpForm, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, input.value());
            form.set(next);
        })
    };
    let on_name = edit_text(|f, v| f.name = v);
    let on_guests = edit_text(|f, v| f.guests = v);
    let on_arrival = edit_text(|f, v| f.arrival_time = v);
    let on_fun_fact = edit_text(|f, v| f.fun_fact = v);

    let on_submit = {
        let form = form.clone();
        let issues = issues.clone();
        let status = status.clone();
        let fx = fx.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Err(found) => issues.set(found),
                Ok(submission) => {
                    issues.set(Vec::new());
                    // Celebrate right away; the relay answers in the background.
                    if let Some(fx) = &fx {
                        fx.sounds.success();
                        fx.confetti.burst(Burst::rsvp_blast());
                    }
                    status.set(RsvpStatus::Accepted(submission.clone()));
                    let status = status.clone();
                    spawn_local(async move {
                        if !post_rsvp(&submission).await {
                            status.set(RsvpStatus::Failed);
                        }
                    });
                }
            }
        })
    };

    let form_markup = html! {
        <form onsubmit={on_submit} style="display:flex; flex-direction:column; gap:20px;">
            <input
                type="text"
                name="name"
                placeholder="Your Name"
                value={form.name.clone()}
                oninput={on_name}
                onmouseenter={on_hover.clone()}
                style={INPUT_STYLE}
            />
            <input
                type="number"
                name="guests"
                placeholder="Number of Guests"
                value={form.guests.clone()}
                oninput={on_guests}
                onmouseenter={on_hover.clone()}
                style={INPUT_STYLE}
            />
            <fieldset style="border:none; margin:0; padding:0;">
                <legend style="font-size:18px; font-weight:600; margin-bottom:8px;">{ "Preferred Meal:" }</legend>
                <div style="display:flex; gap:16px;">
                    { for Diet::all().iter().map(|diet| {
                        let on_pick = {
                            let form = form.clone();
                            let diet = *diet;
                            Callback::from(move |_: Event| {
                                let mut next = (*form).clone();
                                next.diet = diet;
                                form.set(next);
                            })
                        };
                        html! {
                            <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
                                <input
                                    type="radio"
                                    name="diet"
                                    value={diet.form_value()}
                                    checked={form.diet == *diet}
                                    onchange={on_pick}
                                />
                                { diet.label() }
                            </label>
                        }
                    }) }
                </div>
            </fieldset>
            <fieldset style="border:none; margin:0; padding:0;">
                <legend style="font-size:18px; font-weight:600; margin-bottom:8px;">{ "Preferred Beverage:" }</legend>
                <div style="display:grid; grid-template-columns:1fr 1fr; gap:12px;">
                    { for Drink::all().iter().map(|drink| {
                        let on_toggle = {
                            let form = form.clone();
                            let drink = *drink;
                            Callback::from(move |_: Event| {
                                let mut next = (*form).clone();
                                next.toggle_drink(drink);
                                form.set(next);
                            })
                        };
                        html! {
                            <label style="display:flex; align-items:center; gap:6px; cursor:pointer;">
                                <input
                                    type="checkbox"
                                    name="drinks"
                                    value={drink.form_value()}
                                    checked={form.drinks.contains(drink)}
                                    onchange={on_toggle}
                                />
                                { drink.label() }
                            </label>
                        }
                    }) }
                </div>
            </fieldset>
            <div>
                <label style="font-size:18px; font-weight:600; display:block; margin-bottom:8px;">{ "Time of Arrival:" }</label>
                <input
                    type="time"
                    name="arrivalTime"
                    min="14:00"
                    max="23:00"
                    value={form.arrival_time.clone()}
                    oninput={on_arrival}
                    onmouseenter={on_hover.clone()}
                    style={INPUT_STYLE}
                />
                <p style="font-size:13px; color:#4b5563; margin:4px 0 0;">{ "Party starts at 14:00" }</p>
            </div>
            <input
                type="text"
                name="funFact"
                placeholder="Your Fun Fact"
                value={form.fun_fact.clone()}
                oninput={on_fun_fact}
                onmouseenter={on_hover.clone()}
                style={INPUT_STYLE}
            />
            { for issues.iter().map(|issue| html! {
                <p style="color:#dc2626; font-size:14px; margin:0;">{ issue.message() }</p>
            }) }
            <button
                type="submit"
                onmouseenter={on_hover.clone()}
                style="width:100%; background:linear-gradient(90deg, #9333ea, #db2777); color:#fff; padding:12px; border:none; border-radius:12px; font-size:17px; font-weight:600; cursor:pointer; box-shadow:0 8px 20px rgba(0,0,0,0.2);"
            >
                { "Submit RSVP" }
            </button>
        </form>
    };

    let inner = match &*status {
        RsvpStatus::Accepted(sub) => html! {
            <div style="background:#dcfce7; border:2px solid #22c55e; border-radius:12px; padding:20px; text-align:center;">
                <p style="font-size:20px; font-weight:700; margin:0;">{ "RSVP submitted! 🎉" }</p>
                <p style="margin:8px 0 0;">{ format!("Fun Fact: {}", sub.fun_fact) }</p>
                <p style="margin:4px 0 0;">{ format!("Hype level: {} 🔥", sub.hype_level()) }</p>
            </div>
        },
        RsvpStatus::Failed => html! {
            <>
                <p style="background:#fee2e2; border:2px solid #ef4444; border-radius:12px; padding:12px; font-weight:600; margin:0 0 16px;">
                    { "There was an error submitting your RSVP. Please try again." }
                </p>
                { form_markup.clone() }
            </>
        },
        RsvpStatus::Editing => form_markup.clone(),
    };

    html! {
        <div style="width:100%; max-width:32rem; background:rgba(255,255,255,0.92); color:#000; border-radius:18px; padding:32px; box-shadow:0 20px 50px rgba(0,0,0,0.3); border:1px solid rgba(255,255,255,0.2);">
            <h2
                onmouseenter={on_hover.clone()}
                style="font-size:28px; font-weight:700; text-align:center; margin:0 0 24px; background:linear-gradient(90deg, #9333ea, #db2777); -webkit-background-clip:text; background-clip:text; color:transparent;"
            >
                { "RSVP Here" }
            </h2>
            { inner }
        </div>
    }
}
