//! Ray intersection primitives.
//!
//! Hit-targets are swept-sphere (capsule) chains, so everything reduces to
//! ray/segment closest-approach plus a radius test.

use glam::Vec3;

use crate::target::HitTarget;

/// A world-space ray.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Normalized direction.
    pub direction: Vec3,
}

impl Ray {
    /// The point at parameter `t` along the ray.
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersects the ray with the plane `z = plane_z`. Returns the
    /// intersection point, or `None` when the ray is parallel to the plane
    /// or the plane is behind the ray.
    #[must_use]
    pub fn intersect_z_plane(&self, plane_z: f32) -> Option<Vec3> {
        let denom = self.direction.z;
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (plane_z - self.origin.z) / denom;
        if t < 0.0 {
            return None;
        }
        Some(self.at(t))
    }
}

/// A successful ray/target intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    /// Index of the hit target in the scene's target list.
    pub target: usize,
    /// Ray parameter of the hit.
    pub distance: f32,
    /// World-space hit point.
    pub point: Vec3,
}

/// Closest approach between a ray and a segment: returns `(s, dist)` where
/// `s` is the ray parameter of the closest point and `dist` the separation.
fn ray_segment_distance(ray: &Ray, a: Vec3, b: Vec3) -> (f32, f32) {
    let seg = b - a;
    let w0 = ray.origin - a;

    let aa = ray.direction.dot(ray.direction);
    let bb = ray.direction.dot(seg);
    let cc = seg.dot(seg);
    let dd = ray.direction.dot(w0);
    let ee = seg.dot(w0);

    let denom = aa * cc - bb * bb;
    let mut t = if denom.abs() < 1e-9 {
        0.0
    } else {
        (aa * ee - bb * dd) / denom
    };
    t = t.clamp(0.0, 1.0);

    let mut s = (bb * t - dd) / aa;
    s = s.max(0.0);

    let closest_on_ray = ray.at(s);
    let closest_on_seg = a + seg * t;
    (s, (closest_on_ray - closest_on_seg).length())
}

/// Intersects a ray with a capsule segment. Returns the ray parameter of the
/// entry point, treating the capsule locally as a sphere around the closest
/// axis point.
#[must_use]
pub fn intersect_capsule(ray: &Ray, a: Vec3, b: Vec3, radius: f32) -> Option<f32> {
    let (s, dist) = ray_segment_distance(ray, a, b);
    if dist > radius {
        return None;
    }
    let back_off = (radius * radius - dist * dist).sqrt();
    Some((s - back_off).max(0.0))
}

/// Finds the nearest target intersected by `ray`. Ties go to the earlier
/// target in the list.
#[must_use]
pub fn nearest_hit(ray: &Ray, targets: &[HitTarget]) -> Option<Hit> {
    let mut best: Option<Hit> = None;
    for (index, target) in targets.iter().enumerate() {
        for (a, b) in target.world_segments() {
            if let Some(t) = intersect_capsule(ray, a, b, target.radius()) {
                let better = best.is_none_or(|hit| t < hit.distance);
                if better {
                    best = Some(Hit {
                        target: index,
                        distance: t,
                        point: ray.at(t),
                    });
                }
            }
        }
    }
    best
}
