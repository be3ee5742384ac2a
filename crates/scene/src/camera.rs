use foundation::math::Vec3;

pub const MIN_FOV_DEG: f64 = 1.0;
pub const MAX_FOV_DEG: f64 = 120.0;
pub const DEFAULT_FOV_DEG: f64 = 75.0;

/// FOV change per wheel notch (degrees).
const WHEEL_FOV_STEP_DEG: f64 = 2.5;

/// Pitch stops just short of the poles so the view basis stays well-defined.
const MAX_PITCH_RAD: f64 = std::f64::consts::FRAC_PI_2 - 1e-3;

/// The orbiting viewer camera.
///
/// The camera sits at a fixed point just off the sphere center and only ever
/// reorients; interaction changes yaw/pitch and field of view, never the
/// position. Wheel zoom is an FOV change, not a dolly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OrbitCamera {
    position: Vec3,
    yaw_rad: f64,
    pitch_rad: f64,
    fov_deg: f64,
    aspect: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 0.1),
            yaw_rad: 0.0,
            pitch_rad: 0.0,
            fov_deg: DEFAULT_FOV_DEG,
            aspect: 16.0 / 9.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn yaw_rad(&self) -> f64 {
        self.yaw_rad
    }

    pub fn pitch_rad(&self) -> f64 {
        self.pitch_rad
    }

    pub fn fov_deg(&self) -> f64 {
        self.fov_deg
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        self.aspect = aspect.max(1e-6);
    }

    /// View direction derived from yaw/pitch. Yaw 0, pitch 0 looks down -Z.
    pub fn forward(&self) -> Vec3 {
        let cp = self.pitch_rad.cos();
        Vec3::new(
            cp * self.yaw_rad.sin(),
            self.pitch_rad.sin(),
            -cp * self.yaw_rad.cos(),
        )
    }

    /// Drag rotation. Pitch clamps short of the poles.
    pub fn orbit(&mut self, d_yaw_rad: f64, d_pitch_rad: f64) {
        self.yaw_rad += d_yaw_rad;
        self.pitch_rad = (self.pitch_rad + d_pitch_rad).clamp(-MAX_PITCH_RAD, MAX_PITCH_RAD);
    }

    /// Reorients toward `target` without moving the camera.
    ///
    /// A target coincident with the camera keeps the current orientation.
    pub fn look_at(&mut self, target: Vec3) {
        let Some(dir) = (target - self.position).normalize() else {
            return;
        };
        self.pitch_rad = dir.y.clamp(-1.0, 1.0).asin();
        self.yaw_rad = dir.x.atan2(-dir.z);
    }

    /// Wheel zoom, mode-independent.
    ///
    /// `delta` follows the DOM sign convention: wheel-forward is negative and
    /// narrows the FOV (zoom in), wheel-backward is positive and widens it.
    /// Clamped to `[MIN_FOV_DEG, MAX_FOV_DEG]` at both ends.
    pub fn apply_wheel(&mut self, delta: f64) {
        self.fov_deg = (self.fov_deg + delta * WHEEL_FOV_STEP_DEG).clamp(MIN_FOV_DEG, MAX_FOV_DEG);
    }

    pub fn reset_fov(&mut self) {
        self.fov_deg = DEFAULT_FOV_DEG;
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FOV_DEG, MAX_FOV_DEG, MIN_FOV_DEG, OrbitCamera};
    use foundation::math::Vec3;

    #[test]
    fn wheel_forward_converges_to_min_fov_exactly() {
        let mut camera = OrbitCamera::new();
        for _ in 0..200 {
            camera.apply_wheel(-1.0);
        }
        assert_eq!(camera.fov_deg(), MIN_FOV_DEG);
    }

    #[test]
    fn wheel_backward_converges_to_max_fov_exactly() {
        let mut camera = OrbitCamera::new();
        for _ in 0..200 {
            camera.apply_wheel(1.0);
        }
        assert_eq!(camera.fov_deg(), MAX_FOV_DEG);
    }

    #[test]
    fn reset_restores_default_fov() {
        let mut camera = OrbitCamera::new();
        camera.apply_wheel(-10.0);
        camera.reset_fov();
        assert_eq!(camera.fov_deg(), DEFAULT_FOV_DEG);
    }

    #[test]
    fn look_at_points_forward_at_target() {
        let mut camera = OrbitCamera::new();
        let target = Vec3::new(30.0, 10.0, -20.0);
        camera.look_at(target);
        let dir = (target - camera.position()).normalize().unwrap();
        let fwd = camera.forward();
        assert!((fwd - dir).length() < 1e-9);
    }

    #[test]
    fn look_at_is_idempotent() {
        let mut camera = OrbitCamera::new();
        let target = Vec3::new(-12.0, 4.0, 47.0);
        camera.look_at(target);
        let once = camera;
        camera.look_at(target);
        assert_eq!(camera, once);
    }

    #[test]
    fn look_at_own_position_keeps_orientation() {
        let mut camera = OrbitCamera::new();
        camera.orbit(0.5, 0.2);
        let before = camera;
        camera.look_at(camera.position());
        assert_eq!(camera, before);
    }

    #[test]
    fn orbit_clamps_pitch_short_of_the_poles() {
        let mut camera = OrbitCamera::new();
        camera.orbit(0.0, 10.0);
        assert!(camera.pitch_rad() < std::f64::consts::FRAC_PI_2);
        camera.orbit(0.0, -20.0);
        assert!(camera.pitch_rad() > -std::f64::consts::FRAC_PI_2);
    }
}
