// View transform of the periodic table content layer.

/// Tunables for fitting and zooming the table inside its viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    /// Nominal width of the table content in content units.
    pub content_width: f64,
    /// Viewports narrower than this start zoomed out to fit.
    pub mobile_breakpoint: f64,
    /// Fraction of the available width the fitted content occupies.
    pub fit_ratio: f64,
    pub top_padding: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    pub wheel_sensitivity: f64,
    pub zoom_step: f64,
    /// Per-axis displacement (px) after which a gesture counts as a drag.
    pub drag_threshold: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            content_width: 900.0,
            mobile_breakpoint: 768.0,
            fit_ratio: 0.9,
            top_padding: 40.0,
            min_scale: 0.2,
            max_scale: 3.0,
            wheel_sensitivity: 0.001,
            zoom_step: 0.2,
            drag_threshold: 2.0,
        }
    }
}

impl ViewportConfig {
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    /// Centered, fitted transform for a viewport of the given width.
    pub fn fitted(viewport_width: f64, cfg: &ViewportConfig) -> Self {
        let scale = if viewport_width < cfg.mobile_breakpoint {
            (viewport_width / cfg.content_width) * cfg.fit_ratio
        } else {
            cfg.fit_ratio
        };
        Self {
            x: (viewport_width - cfg.content_width * scale) / 2.0,
            y: cfg.top_padding,
            scale,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.x, self.y, self.scale
        )
    }
}
