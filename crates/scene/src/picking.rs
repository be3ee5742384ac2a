use foundation::math::Vec3;

use crate::camera::OrbitCamera;

const RAY_EPS: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// The inward-facing playback sphere the video is mapped onto.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewSphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Default for ViewSphere {
    fn default() -> Self {
        Self {
            center: Vec3::zero(),
            radius: 50.0,
        }
    }
}

impl ViewSphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Builds a world ray through a click's normalized device coordinates.
///
/// NDC follow the usual convention: x, y in `[-1, 1]` with +y up. Returns
/// `None` only for a degenerate camera basis (forward parallel to world up).
pub fn ray_from_ndc(camera: &OrbitCamera, ndc_x: f64, ndc_y: f64) -> Option<Ray> {
    let forward = camera.forward();
    let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalize()?;
    let up = right.cross(forward);

    let tan_half = (camera.fov_deg().to_radians() * 0.5).tan();
    let dir = forward
        + right.scale(ndc_x * tan_half * camera.aspect())
        + up.scale(ndc_y * tan_half);

    Some(Ray::new(camera.position(), dir.normalize()?))
}

/// Nearest intersection of `ray` with the sphere.
///
/// The camera sits inside the playback sphere, so the usual hit is the
/// single exit point (the larger root). A miss is a no-op for callers, not
/// an error.
pub fn intersect_sphere(ray: Ray, sphere: ViewSphere) -> Option<Vec3> {
    let dir = ray.dir.normalize()?;
    let oc = ray.origin - sphere.center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sq = disc.sqrt();
    let t_near = -b - sq;
    let t_far = -b + sq;
    let t = if t_near > RAY_EPS {
        t_near
    } else if t_far > RAY_EPS {
        t_far
    } else {
        return None;
    };

    Some(ray.origin + dir.scale(t))
}
