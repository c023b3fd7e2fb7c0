use crate::fx::{step_particles, Fx};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

#[function_component(ConfettiOverlay)]
pub fn confetti_overlay() -> Html {
    // Without the provider the shared vector is replaced by a private
    // empty one and the canvas simply stays blank.
    let particles = use_context::<Fx>()
        .map(|fx| fx.confetti.particles().clone())
        .unwrap_or_default();
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("window");
            let canvas: HtmlCanvasElement =
                canvas_ref.cast::<HtmlCanvasElement>().expect("canvas");
            let apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                move || {
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                }
            };
            apply_canvas_size();
            // RAF loop
            let raf_id = Rc::new(RefCell::new(None));
            {
                let raf_id_clone = raf_id.clone();
                let window_loop = window.clone();
                let canvas_loop = canvas.clone();
                let particles_loop = particles.clone();
                let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                    Rc::new(RefCell::new(None));
                let closure_cell_clone = closure_cell.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    if canvas_loop.is_connected() {
                        if let Some(ctx) = canvas_loop
                            .get_context("2d")
                            .ok()
                            .flatten()
                            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
                        {
                            let w = canvas_loop.width() as f64;
                            let h = canvas_loop.height() as f64;
                            ctx.clear_rect(0.0, 0.0, w, h);
                            let mut ps = particles_loop.borrow_mut();
                            step_particles(&mut ps);
                            for p in ps.iter() {
                                ctx.set_global_alpha(p.alpha());
                                ctx.set_fill_style_str(p.color);
                                ctx.begin_path();
                                ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::PI * 2.0)
                                    .ok();
                                ctx.fill();
                            }
                            ctx.set_global_alpha(1.0);
                        }
                    }
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_clone
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_clone.borrow_mut() = Some(id);
                    }
                })
                    as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }
            // Resize
            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();
            // Cleanup
            let window_clone = window.clone();
            move || {
                let _ = window_clone.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
                if let Some(id) = *raf_id.borrow() {
                    let _ = window_clone.cancel_animation_frame(id);
                }
                let _keep_alive = &resize_cb;
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            style="position:fixed; top:0; left:0; width:100vw; height:100vh; pointer-events:none; z-index:1000;"
        />
    }
}
