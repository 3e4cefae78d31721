use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo::render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::model::{VisualMode, element};
use crate::state::AtomSceneConfig;
use crate::state::atom::{
    Orbit, Projector, bohr_orbits, electron_cloud, nucleus_radius, rotate_y,
};

const ELECTRON_COLOR: &str = "#22d3ee";
const ORBIT_COLOR: &str = "rgba(148, 163, 184, 0.35)";

#[derive(Properties, PartialEq, Clone)]
pub struct AtomCanvasProps {
    pub number: u32,
    pub mode: VisualMode,
    /// Category colour of the element, used for the nucleus and the cloud.
    pub color: &'static str,
}

/// Everything one animation loop needs; dropped when the loop stops.
struct AtomScene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    cfg: AtomSceneConfig,
    mode: VisualMode,
    color: &'static str,
    nucleus: f64,
    orbits: Vec<Orbit>,
    cloud: Vec<[f64; 3]>,
    started_at: Cell<Option<f64>>,
    frame: RefCell<Option<AnimationFrame>>,
    running: Cell<bool>,
}

impl AtomScene {
    fn schedule(self: &Rc<Self>) {
        if !self.running.get() {
            return;
        }
        let scene = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| {
            scene.frame.borrow_mut().take();
            scene.draw(timestamp);
            scene.schedule();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    fn stop(&self) {
        self.running.set(false);
        self.frame.borrow_mut().take();
    }

    /// Keeps the backing store in step with the laid-out size.
    fn fit_canvas(&self) -> (f64, f64) {
        let w = self.canvas.client_width().max(1) as u32;
        let h = self.canvas.client_height().max(1) as u32;
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
        (w as f64, h as f64)
    }

    fn draw(&self, timestamp: f64) {
        if !self.canvas.is_connected() {
            self.stop();
            return;
        }
        let start = match self.started_at.get() {
            Some(s) => s,
            None => {
                self.started_at.set(Some(timestamp));
                timestamp
            }
        };
        let t = (timestamp - start) / 1000.0;
        let (w, h) = self.fit_canvas();
        let proj = Projector::new(w, h, &self.cfg);
        self.ctx.clear_rect(0.0, 0.0, w, h);
        match self.mode {
            VisualMode::Bohr => self.draw_bohr(&proj, t),
            VisualMode::Cloud => self.draw_cloud(&proj, t),
        }
    }

    fn draw_nucleus(&self, proj: &Projector) {
        let Some((x, y, k)) = proj.project([0.0, 0.0, 0.0]) else {
            return;
        };
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(self.color);
        ctx.begin_path();
        let _ = ctx.arc(x, y, self.nucleus * k, 0.0, TAU);
        ctx.fill();
    }

    fn draw_bohr(&self, proj: &Projector, t: f64) {
        let ctx = &self.ctx;
        let unit = proj.unit();
        let Some((cx, cy, _)) = proj.project([0.0, 0.0, 0.0]) else {
            return;
        };
        ctx.set_global_alpha(1.0);
        ctx.set_line_width(1.0);
        ctx.set_stroke_style_str(ORBIT_COLOR);
        for orbit in &self.orbits {
            ctx.begin_path();
            let _ = ctx.arc(cx, cy, orbit.radius * unit, 0.0, TAU);
            ctx.stroke();
        }
        self.draw_nucleus(proj);
        ctx.set_fill_style_str(ELECTRON_COLOR);
        for orbit in &self.orbits {
            for (ex, ey) in orbit.electron_positions(t) {
                if let Some((x, y, k)) = proj.project([ex, ey, 0.0]) {
                    ctx.begin_path();
                    let _ = ctx.arc(x, y, self.cfg.electron_radius * k, 0.0, TAU);
                    ctx.fill();
                }
            }
        }
    }

    fn draw_cloud(&self, proj: &Projector, t: f64) {
        let ctx = &self.ctx;
        let angle = t * self.cfg.cloud_spin;
        ctx.set_fill_style_str(self.color);
        ctx.set_global_alpha(0.6);
        for p in &self.cloud {
            if let Some((x, y, k)) = proj.project(rotate_y(*p, angle)) {
                let size = (0.08 * k).max(1.0);
                ctx.fill_rect(x - size / 2.0, y - size / 2.0, size, size);
            }
        }
        self.draw_nucleus(proj);
    }
}

/// Animated Bohr model or electron cloud for one element.
#[function_component(AtomCanvas)]
pub fn atom_canvas(props: &AtomCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    {
        let canvas_ref = canvas_ref.clone();
        let color = props.color;
        use_effect_with((props.number, props.mode), move |&(number, mode)| {
            let scene = element(number).and_then(|data| {
                let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()?
                    .dyn_into::<CanvasRenderingContext2d>()
                    .ok()?;
                let cfg = AtomSceneConfig::default();
                Some(Rc::new(AtomScene {
                    nucleus: nucleus_radius(number, &cfg),
                    orbits: bohr_orbits(number, &data.shells, &cfg),
                    cloud: match mode {
                        VisualMode::Cloud => electron_cloud(number, &cfg),
                        VisualMode::Bohr => Vec::new(),
                    },
                    canvas,
                    ctx,
                    cfg,
                    mode,
                    color,
                    started_at: Cell::new(None),
                    frame: RefCell::new(None),
                    running: Cell::new(true),
                }))
            });
            match &scene {
                Some(s) => {
                    log::debug!("atom scene for element {number} ({mode:?})");
                    s.schedule();
                }
                None => log::warn!("no 2d canvas for element {number}; atom view disabled"),
            }
            move || {
                if let Some(s) = scene {
                    s.stop();
                }
            }
        });
    }
    html! { <canvas ref={canvas_ref} class="atom-canvas"></canvas> }
}
