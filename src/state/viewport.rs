//! Pan/zoom controller for the periodic table viewport.
//!
//! Mouse, wheel and touch streams all funnel into one [`ViewTransform`]. The
//! controller keeps two kinds of state apart:
//!
//! - the transform itself, which the render layer repaints from. Every change
//!   bumps [`ViewportController::revision`].
//! - a [`GestureState`] scratch pad for the gesture in progress, which never
//!   bumps the revision.
//!
//! At most one gesture kind is active: starting a pinch cancels a drag. The
//! `has_moved` flag of the last gesture survives its end so that the click
//! which the host fires after pointer-up can be told apart from a drag release
//! (see [`ViewportController::tap_allowed`]).

use log::{debug, trace};

use super::camera::{ViewTransform, ViewportConfig};
use super::touch::{GestureState, TouchPoint};

#[derive(Debug, Clone)]
pub struct ViewportController {
    cfg: ViewportConfig,
    transform: ViewTransform,
    gesture: GestureState,
    viewport_width: Option<f64>,
    revision: u64,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}

impl ViewportController {
    pub fn new(cfg: ViewportConfig) -> Self {
        Self {
            cfg,
            transform: ViewTransform::default(),
            gesture: GestureState::default(),
            viewport_width: None,
            revision: 0,
        }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.cfg
    }

    pub fn transform(&self) -> ViewTransform {
        self.transform
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.dragging
    }

    /// True while a drag or pinch is in progress; the content layer drops its
    /// CSS transition during that time.
    pub fn is_interacting(&self) -> bool {
        self.gesture.is_active()
    }

    /// Whether a click arriving now should select the element under it.
    pub fn tap_allowed(&self) -> bool {
        !self.gesture.has_moved
    }

    /// Bumped on every transform change; the render layer repaints when it
    /// differs from the value it last saw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn set_transform(&mut self, next: ViewTransform) {
        if next != self.transform {
            self.transform = next;
            self.revision = self.revision.wrapping_add(1);
        }
    }

    fn set_scale(&mut self, scale: f64) {
        let scale = self.cfg.clamp_scale(scale);
        self.set_transform(ViewTransform {
            scale,
            ..self.transform
        });
    }

    // ---- sizing ---------------------------------------------------------

    /// Records the viewport width. The first measurement fits and centers the
    /// content; later ones only update the width `reset` fits against.
    pub fn measure(&mut self, viewport_width: f64) {
        let first = self.viewport_width.is_none();
        self.viewport_width = Some(viewport_width);
        if first {
            debug!("viewport measured at {viewport_width}px, fitting content");
            self.set_transform(ViewTransform::fitted(viewport_width, &self.cfg));
        }
    }

    /// Re-fits and re-centers for the last measured width. Absolute, so
    /// calling it repeatedly is the same as calling it once.
    pub fn reset(&mut self) {
        let Some(w) = self.viewport_width else {
            return;
        };
        debug!("viewport reset");
        self.set_transform(ViewTransform::fitted(w, &self.cfg));
    }

    // ---- drag -----------------------------------------------------------

    pub fn begin_drag(&mut self, x: f64, y: f64) {
        self.gesture = GestureState {
            start_x: x,
            start_y: y,
            start_transform_x: self.transform.x,
            start_transform_y: self.transform.y,
            dragging: true,
            ..GestureState::default()
        };
    }

    pub fn continue_drag(&mut self, x: f64, y: f64) {
        if !self.gesture.dragging {
            return;
        }
        let dx = x - self.gesture.start_x;
        let dy = y - self.gesture.start_y;
        let threshold = self.cfg.drag_threshold;
        if !self.gesture.has_moved && (dx.abs() > threshold || dy.abs() > threshold) {
            trace!("drag passed threshold ({dx}, {dy})");
            self.gesture.has_moved = true;
        }
        self.set_transform(ViewTransform {
            x: self.gesture.start_transform_x + dx,
            y: self.gesture.start_transform_y + dy,
            ..self.transform
        });
    }

    /// Ends the drag. Returns true when the click that follows must be
    /// suppressed because the pointer travelled.
    pub fn end_drag(&mut self) -> bool {
        self.gesture.dragging = false;
        self.gesture.has_moved
    }

    // ---- pinch ----------------------------------------------------------

    pub fn begin_pinch(&mut self, a: TouchPoint, b: TouchPoint) {
        self.gesture.dragging = false;
        self.gesture.is_pinching = true;
        self.gesture.initial_distance = a.distance_to(&b);
        self.gesture.initial_scale = self.transform.scale;
    }

    pub fn continue_pinch(&mut self, a: TouchPoint, b: TouchPoint) {
        if !self.gesture.is_pinching || self.gesture.initial_distance == 0.0 {
            return;
        }
        let factor = a.distance_to(&b) / self.gesture.initial_distance;
        let scale = self.gesture.initial_scale * factor;
        if !scale.is_finite() {
            return;
        }
        self.set_scale(scale);
    }

    // ---- zoom -----------------------------------------------------------

    pub fn wheel_zoom(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.set_scale(self.transform.scale - delta_y * self.cfg.wheel_sensitivity);
    }

    pub fn zoom_in(&mut self) {
        self.set_scale(self.transform.scale + self.cfg.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.set_scale(self.transform.scale - self.cfg.zoom_step);
    }

    // ---- host event mapping ---------------------------------------------

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.begin_drag(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.continue_drag(x, y);
    }

    pub fn pointer_up(&mut self) -> bool {
        self.end_drag()
    }

    /// Same as pointer up, so leaving mid-drag never leaves a stuck drag.
    pub fn pointer_leave(&mut self) -> bool {
        self.end_drag()
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        match touches {
            [] => {}
            [only] => self.begin_drag(only.x, only.y),
            [a, b, ..] => self.begin_pinch(*a, *b),
        }
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        match touches {
            [only] if self.gesture.dragging => self.continue_drag(only.x, only.y),
            [a, b, ..] if self.gesture.is_pinching => self.continue_pinch(*a, *b),
            _ => {}
        }
    }

    /// `remaining` are the touches still on the surface after the end event.
    pub fn touch_end(&mut self, remaining: &[TouchPoint]) {
        let was_pinching = self.gesture.is_pinching;
        self.gesture.dragging = false;
        self.gesture.is_pinching = false;
        if let ([only], true) = (remaining, was_pinching) {
            debug!("pinch ended with one touch left, starting a new drag");
            self.begin_drag(only.x, only.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ctl(width: f64) -> ViewportController {
        let mut c = ViewportController::default();
        c.measure(width);
        c
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_measurement_fits_content() {
        let c = ctl(900.0);
        let t = c.transform();
        assert!(approx(t.scale, 0.9));
        assert!(approx(t.x, 45.0));
        assert!(approx(t.y, 40.0));
    }

    #[test]
    fn later_measurements_do_not_move_content() {
        let mut c = ctl(900.0);
        c.zoom_in();
        let before = c.transform();
        c.measure(1200.0);
        assert_eq!(c.transform(), before);
        c.reset();
        assert!(approx(c.transform().x, (1200.0 - 900.0 * 0.9) / 2.0));
    }

    #[test]
    fn drag_past_threshold_marks_moved_and_translates() {
        let mut c = ctl(900.0);
        c.begin_drag(100.0, 100.0);
        c.continue_drag(103.0, 100.0);
        assert!(c.gesture.has_moved);
        assert!(approx(c.transform().x, 48.0));
        assert!(approx(c.transform().y, 40.0));
        assert!(c.end_drag());
        assert!(!c.tap_allowed());
    }

    #[test]
    fn small_jitter_is_still_a_tap() {
        let mut c = ctl(900.0);
        c.begin_drag(100.0, 100.0);
        c.continue_drag(102.0, 98.0);
        assert!(!c.gesture.has_moved);
        assert!(!c.end_drag());
        assert!(c.tap_allowed());
        // the transform still followed the pointer
        assert!(approx(c.transform().x, 47.0));
    }

    #[test]
    fn moved_flag_sticks_after_returning_to_start() {
        let mut c = ctl(900.0);
        c.begin_drag(0.0, 0.0);
        c.continue_drag(0.0, 10.0);
        c.continue_drag(0.0, 0.0);
        assert!(c.gesture.has_moved);
        assert!(approx(c.transform().y, 40.0));
    }

    #[test]
    fn new_drag_clears_moved_flag() {
        let mut c = ctl(900.0);
        c.begin_drag(0.0, 0.0);
        c.continue_drag(50.0, 0.0);
        c.end_drag();
        c.begin_drag(10.0, 10.0);
        assert!(!c.gesture.has_moved);
        assert!(c.tap_allowed());
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut c = ctl(900.0);
        let before = c.transform();
        c.continue_drag(500.0, 500.0);
        assert_eq!(c.transform(), before);
    }

    #[test]
    fn pointer_leave_ends_drag() {
        let mut c = ctl(900.0);
        c.pointer_down(10.0, 10.0);
        c.pointer_move(40.0, 10.0);
        assert!(c.pointer_leave());
        assert!(!c.is_dragging());
        let before = c.transform();
        c.pointer_move(400.0, 10.0);
        assert_eq!(c.transform(), before);
    }

    #[test]
    fn pinch_scales_by_distance_ratio() {
        let mut c = ctl(900.0);
        c.begin_pinch(TouchPoint::new(0.0, 0.0), TouchPoint::new(100.0, 0.0));
        c.continue_pinch(TouchPoint::new(0.0, 0.0), TouchPoint::new(150.0, 0.0));
        assert!(approx(c.transform().scale, 1.35));
        // translation is untouched
        assert!(approx(c.transform().x, 45.0));
    }

    #[test]
    fn zero_distance_pinch_is_ignored() {
        let mut c = ctl(900.0);
        let p = TouchPoint::new(50.0, 50.0);
        c.begin_pinch(p, p);
        c.continue_pinch(p, TouchPoint::new(200.0, 50.0));
        assert!(approx(c.transform().scale, 0.9));
        assert!(c.transform().scale.is_finite());
    }

    #[test]
    fn pinch_cancels_drag_without_leftover_delta() {
        let mut c = ctl(900.0);
        c.touch_start(&[TouchPoint::new(100.0, 100.0)]);
        c.touch_move(&[TouchPoint::new(130.0, 100.0)]);
        assert!(approx(c.transform().x, 75.0));
        c.touch_start(&[TouchPoint::new(130.0, 100.0), TouchPoint::new(230.0, 100.0)]);
        assert!(!c.is_dragging());
        assert!(c.gesture.is_pinching);
        assert!(approx(c.gesture.initial_distance, 100.0));
        c.touch_move(&[TouchPoint::new(130.0, 100.0), TouchPoint::new(330.0, 100.0)]);
        assert!(approx(c.transform().x, 75.0));
        assert!(approx(c.transform().scale, 1.8));
    }

    #[test]
    fn pinch_end_with_one_touch_resumes_as_drag() {
        let mut c = ctl(900.0);
        c.touch_start(&[TouchPoint::new(0.0, 0.0), TouchPoint::new(100.0, 0.0)]);
        c.touch_end(&[TouchPoint::new(100.0, 0.0)]);
        assert!(!c.gesture.is_pinching);
        assert!(c.is_dragging());
        c.touch_move(&[TouchPoint::new(110.0, 20.0)]);
        assert!(approx(c.transform().x, 55.0));
        assert!(approx(c.transform().y, 60.0));
        c.touch_end(&[]);
        assert!(!c.is_interacting());
    }

    #[test]
    fn drag_after_pinch_starts_with_a_clean_moved_flag() {
        let mut c = ctl(900.0);
        c.touch_start(&[TouchPoint::new(0.0, 0.0), TouchPoint::new(100.0, 0.0)]);
        c.touch_end(&[TouchPoint::new(100.0, 0.0)]);
        c.touch_move(&[TouchPoint::new(101.0, 0.0)]);
        assert!(!c.gesture.has_moved);
        assert!(c.tap_allowed());
        c.touch_move(&[TouchPoint::new(104.0, 0.0)]);
        assert!(c.gesture.has_moved);
    }

    #[test]
    fn wheel_zoom_clamps_both_ways() {
        let mut c = ctl(900.0);
        c.wheel_zoom(-100_000.0);
        assert_eq!(c.transform().scale, 3.0);
        c.wheel_zoom(100_000.0);
        assert_eq!(c.transform().scale, 0.2);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut c = ctl(900.0);
        c.wheel_zoom(100.0);
        assert!(approx(c.transform().scale, 0.8));
    }

    #[test]
    fn zoom_buttons_step_and_clamp() {
        let mut c = ctl(900.0);
        c.zoom_in();
        assert!(approx(c.transform().scale, 1.1));
        for _ in 0..20 {
            c.zoom_in();
        }
        assert_eq!(c.transform().scale, 3.0);
        for _ in 0..30 {
            c.zoom_out();
        }
        assert_eq!(c.transform().scale, 0.2);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut c = ctl(640.0);
        c.begin_drag(0.0, 0.0);
        c.continue_drag(123.0, -45.0);
        c.end_drag();
        c.wheel_zoom(-700.0);
        c.reset();
        let once = c.transform();
        c.reset();
        assert_eq!(c.transform(), once);
        assert_eq!(once, ViewTransform::fitted(640.0, c.config()));
    }

    #[test]
    fn reset_before_measure_is_noop() {
        let mut c = ViewportController::default();
        c.reset();
        assert_eq!(c.transform(), ViewTransform::default());
        assert_eq!(c.revision(), 0);
    }

    #[test]
    fn gesture_bookkeeping_does_not_bump_revision() {
        let mut c = ctl(900.0);
        let rev = c.revision();
        assert_eq!(rev, 1);
        c.begin_drag(5.0, 5.0);
        c.end_drag();
        c.begin_pinch(TouchPoint::new(0.0, 0.0), TouchPoint::new(10.0, 0.0));
        assert_eq!(c.revision(), rev);
        c.zoom_in();
        assert_eq!(c.revision(), rev + 1);
    }

    #[test]
    fn clamped_noop_does_not_bump_revision() {
        let mut c = ctl(900.0);
        c.wheel_zoom(-100_000.0);
        let rev = c.revision();
        c.zoom_in();
        assert_eq!(c.revision(), rev);
    }

    proptest! {
        #[test]
        fn scale_stays_in_bounds(deltas in proptest::collection::vec(-1.0e6f64..1.0e6, 1..30),
                                 dist in 0.0f64..2000.0) {
            let mut c = ctl(900.0);
            for d in deltas {
                c.wheel_zoom(d);
                prop_assert!((0.2..=3.0).contains(&c.transform().scale));
            }
            c.begin_pinch(TouchPoint::new(0.0, 0.0), TouchPoint::new(10.0, 0.0));
            c.continue_pinch(TouchPoint::new(0.0, 0.0), TouchPoint::new(dist, 0.0));
            prop_assert!((0.2..=3.0).contains(&c.transform().scale));
        }

        #[test]
        fn moved_iff_some_sample_crossed_threshold(
            path in proptest::collection::vec((-10.0f64..10.0, -10.0f64..10.0), 1..20)
        ) {
            let mut c = ctl(900.0);
            c.begin_drag(0.0, 0.0);
            let mut crossed = false;
            for (x, y) in path {
                c.continue_drag(x, y);
                crossed |= x.abs() > 2.0 || y.abs() > 2.0;
                prop_assert_eq!(c.gesture.has_moved, crossed);
            }
        }

        #[test]
        fn reset_idempotent_for_any_width(width in 1.0f64..4000.0) {
            let mut c = ctl(width);
            c.zoom_out();
            c.reset();
            let once = c.transform();
            c.reset();
            prop_assert_eq!(c.transform(), once);
        }
    }
}
