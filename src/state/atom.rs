//! Geometry for the atom visualizer.
//!
//! Scene units are those of a camera sitting on the +z axis looking at the
//! origin. The Bohr model lies flat in the xy plane; the electron cloud fills
//! a sphere around the nucleus. [`Projector`] maps scene points to canvas
//! pixels.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;

#[derive(Debug, Clone, PartialEq)]
pub struct AtomSceneConfig {
    pub camera_distance: f64,
    pub fov_degrees: f64,
    pub nucleus_per_proton: f64,
    pub nucleus_min: f64,
    pub nucleus_max: f64,
    /// Gap between the nucleus surface and the first orbit.
    pub first_orbit_gap: f64,
    pub orbit_spacing: f64,
    /// Angular speed of the innermost shell, rad/s.
    pub base_speed: f64,
    pub speed_falloff: f64,
    pub electron_radius: f64,
    pub cloud_base_points: u32,
    pub cloud_points_per_proton: u32,
    pub cloud_inner_radius: f64,
    pub cloud_spread: f64,
    /// Rotation of the cloud about the vertical axis, rad/s.
    pub cloud_spin: f64,
}

impl Default for AtomSceneConfig {
    fn default() -> Self {
        Self {
            camera_distance: 30.0,
            fov_degrees: 35.0,
            nucleus_per_proton: 0.04,
            nucleus_min: 0.6,
            nucleus_max: 1.2,
            first_orbit_gap: 2.5,
            orbit_spacing: 1.8,
            base_speed: 0.2,
            speed_falloff: 0.02,
            electron_radius: 0.2,
            cloud_base_points: 500,
            cloud_points_per_proton: 80,
            cloud_inner_radius: 1.0,
            cloud_spread: 6.0,
            cloud_spin: 0.1,
        }
    }
}

pub fn nucleus_radius(number: u32, cfg: &AtomSceneConfig) -> f64 {
    (number as f64 * cfg.nucleus_per_proton).clamp(cfg.nucleus_min, cfg.nucleus_max)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub radius: f64,
    pub electrons: u32,
    /// rad/s; outer shells turn slower.
    pub speed: f64,
}

impl Orbit {
    /// Electron positions in the xy plane after `t` seconds, evenly spaced
    /// around the ring.
    pub fn electron_positions(&self, t: f64) -> Vec<(f64, f64)> {
        if self.electrons == 0 {
            return Vec::new();
        }
        let phase = t * self.speed;
        (0..self.electrons)
            .map(|k| {
                let angle = TAU * k as f64 / self.electrons as f64 + phase;
                (angle.cos() * self.radius, angle.sin() * self.radius)
            })
            .collect()
    }
}

pub fn bohr_orbits(number: u32, shells: &[u32], cfg: &AtomSceneConfig) -> Vec<Orbit> {
    let nucleus = nucleus_radius(number, cfg);
    shells
        .iter()
        .enumerate()
        .map(|(i, &electrons)| Orbit {
            radius: nucleus + cfg.first_orbit_gap + i as f64 * cfg.orbit_spacing,
            electrons,
            speed: cfg.base_speed - i as f64 * cfg.speed_falloff,
        })
        .collect()
}

pub fn cloud_point_count(number: u32, cfg: &AtomSceneConfig) -> usize {
    (number * cfg.cloud_points_per_proton + cfg.cloud_base_points) as usize
}

/// Point cloud for the probability-density view. Directions are uniform on
/// the sphere; radii follow `cbrt(u) * spread + inner`. Seeded by atomic
/// number so an element always shows the same cloud.
pub fn electron_cloud(number: u32, cfg: &AtomSceneConfig) -> Vec<[f64; 3]> {
    let mut rng = SmallRng::seed_from_u64(u64::from(number));
    (0..cloud_point_count(number, cfg))
        .map(|_| {
            let theta = TAU * rng.r#gen::<f64>();
            let phi = (2.0 * rng.r#gen::<f64>() - 1.0).acos();
            let r = rng.r#gen::<f64>().cbrt() * cfg.cloud_spread + cfg.cloud_inner_radius;
            [
                r * phi.sin() * theta.cos(),
                r * phi.sin() * theta.sin(),
                r * phi.cos(),
            ]
        })
        .collect()
}

pub fn rotate_y(p: [f64; 3], angle: f64) -> [f64; 3] {
    let (s, c) = angle.sin_cos();
    [p[0] * c + p[2] * s, p[1], -p[0] * s + p[2] * c]
}

/// Perspective projection onto a canvas of the given pixel size.
#[derive(Debug, Clone, Copy)]
pub struct Projector {
    cx: f64,
    cy: f64,
    focal: f64,
    camera_distance: f64,
}

impl Projector {
    pub fn new(width: f64, height: f64, cfg: &AtomSceneConfig) -> Self {
        let half_fov = cfg.fov_degrees.to_radians() / 2.0;
        Self {
            cx: width / 2.0,
            cy: height / 2.0,
            focal: (height / 2.0) / half_fov.tan(),
            camera_distance: cfg.camera_distance,
        }
    }

    /// Pixels per scene unit at the origin plane.
    pub fn unit(&self) -> f64 {
        self.focal / self.camera_distance
    }

    /// Canvas position and per-point size factor, or `None` behind the
    /// camera.
    pub fn project(&self, p: [f64; 3]) -> Option<(f64, f64, f64)> {
        let depth = self.camera_distance - p[2];
        if depth <= 0.1 {
            return None;
        }
        let k = self.focal / depth;
        Some((self.cx + p[0] * k, self.cy - p[1] * k, k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn nucleus_size_is_clamped() {
        let cfg = AtomSceneConfig::default();
        assert_eq!(nucleus_radius(1, &cfg), 0.6);
        assert!((nucleus_radius(20, &cfg) - 0.8).abs() < 1e-9);
        assert_eq!(nucleus_radius(118, &cfg), 1.2);
    }

    #[test]
    fn orbits_spread_out_and_slow_down() {
        let cfg = AtomSceneConfig::default();
        let orbits = bohr_orbits(11, &[2, 8, 1], &cfg);
        assert_eq!(orbits.len(), 3);
        assert!((orbits[0].radius - 3.1).abs() < 1e-9);
        assert!((orbits[2].radius - 6.7).abs() < 1e-9);
        assert!((orbits[1].speed - 0.18).abs() < 1e-9);
        assert_eq!(orbits[1].electrons, 8);
    }

    #[test]
    fn electrons_sit_evenly_on_their_ring() {
        let orbit = Orbit {
            radius: 2.0,
            electrons: 4,
            speed: 0.0,
        };
        let pts = orbit.electron_positions(10.0);
        assert_eq!(pts.len(), 4);
        for (x, y) in &pts {
            assert!((x.hypot(*y) - 2.0).abs() < 1e-9);
        }
        assert!((pts[1].0).abs() < 1e-9 && (pts[1].1 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn electrons_advance_with_time() {
        let orbit = Orbit {
            radius: 1.0,
            electrons: 1,
            speed: 0.5,
        };
        let (x, y) = orbit.electron_positions(PI)[0];
        let expected = PI * 0.5;
        assert!((x - expected.cos()).abs() < 1e-9);
        assert!((y - expected.sin()).abs() < 1e-9);
    }

    #[test]
    fn empty_shell_has_no_electrons() {
        let orbit = Orbit {
            radius: 1.0,
            electrons: 0,
            speed: 0.1,
        };
        assert!(orbit.electron_positions(1.0).is_empty());
    }

    #[test]
    fn cloud_is_deterministic_and_bounded() {
        let cfg = AtomSceneConfig::default();
        let a = electron_cloud(6, &cfg);
        let b = electron_cloud(6, &cfg);
        assert_eq!(a.len(), 6 * 80 + 500);
        assert_eq!(a, b);
        for p in &a {
            let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            assert!((1.0 - 1e-9..=7.0 + 1e-9).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let cfg = AtomSceneConfig::default();
        let proj = Projector::new(400.0, 300.0, &cfg);
        let (x, y, _) = proj.project([0.0, 0.0, 0.0]).unwrap();
        assert_eq!((x, y), (200.0, 150.0));
        // +y in the scene is up on the canvas
        let (_, y_up, _) = proj.project([0.0, 1.0, 0.0]).unwrap();
        assert!(y_up < 150.0);
        assert!(proj.project([0.0, 0.0, 40.0]).is_none());
    }

    #[test]
    fn rotation_preserves_length() {
        let p = rotate_y([3.0, 1.0, 4.0], 1.234);
        let len = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((len - 26.0_f64.sqrt()).abs() < 1e-9);
        assert_eq!(p[1], 1.0);
    }
}
