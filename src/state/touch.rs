// Per-gesture scratch state. Never triggers a redraw on its own.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &TouchPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Default, Debug, Clone)]
pub struct GestureState {
    pub start_x: f64,
    pub start_y: f64,
    pub start_transform_x: f64,
    pub start_transform_y: f64,
    pub initial_distance: f64,
    pub initial_scale: f64,
    pub dragging: bool,
    pub is_pinching: bool,
    /// Sticky for the lifetime of one gesture.
    pub has_moved: bool,
}

impl GestureState {
    pub fn is_active(&self) -> bool {
        self.dragging || self.is_pinching
    }
}
