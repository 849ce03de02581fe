use gloo_timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use shared::scene::Scene;
use crate::config::CONFIG;

const PARTICLE_COLOR: &str = "#e0e7ff";
const EDGE_ALPHA: f64 = 0.55;

fn draw_frame(canvas: &HtmlCanvasElement, scene: &Scene, t: f64) -> Result<(), JsValue> {
    let width = canvas.client_width().max(1) as u32;
    let height = canvas.client_height().max(1) as u32;
    if canvas.width() != width || canvas.height() != height {
        canvas.set_width(width);
        canvas.set_height(height);
    }

    let ctx: CanvasRenderingContext2d = canvas.get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into()?;
    let (w, h) = (f64::from(width), f64::from(height));
    ctx.clear_rect(0.0, 0.0, w, h);

    let frame = scene.frame(t, w, h);

    ctx.set_line_width(1.2);
    ctx.set_global_alpha(EDGE_ALPHA);
    for segment in &frame.segments {
        ctx.set_stroke_style_str(segment.color);
        ctx.begin_path();
        ctx.move_to(segment.from.x, segment.from.y);
        ctx.line_to(segment.to.x, segment.to.y);
        ctx.stroke();
    }

    ctx.set_fill_style_str(PARTICLE_COLOR);
    for dot in &frame.dots {
        ctx.set_global_alpha(dot.alpha);
        ctx.begin_path();
        ctx.arc(dot.at.x, dot.at.y, dot.radius, 0.0, std::f64::consts::TAU)?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Full-viewport animated backdrop for the showcase page. Purely decorative.
#[function_component]
pub fn ParticleBackground() -> Html {
    let canvas_ref = use_node_ref();

    use_effect_with_deps(move |canvas_ref: &NodeRef| {
        let scene = Scene::new(CONFIG.scene_seed, CONFIG.particle_count);
        let started = js_sys::Date::now();
        let interval = canvas_ref.cast::<HtmlCanvasElement>().map(|canvas| {
            let mut failed = false;
            Interval::new(CONFIG.frame_interval_ms, move || {
                let t = (js_sys::Date::now() - started) / 1000.0;
                if let Err(err) = draw_frame(&canvas, &scene, t) {
                    if !failed {
                        log::warn!("background frame failed: {:?}", err);
                        failed = true;
                    }
                }
            })
        });
        move || drop(interval)
    }, canvas_ref.clone());

    html! {
        <canvas
            ref={canvas_ref}
            aria-hidden="true"
            class="fixed inset-0 w-full h-full z-0 pointer-events-none bg-gradient-to-b from-slate-950 via-indigo-950 to-slate-950"
        />
    }
}
