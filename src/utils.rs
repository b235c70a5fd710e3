// Initial-condition generators. Both take an explicit seeded RNG so a run is
// reproducible from its seed; nothing here touches global random state.

use crate::body::Body;
use crate::config;
use ultraviolet::DVec2;

/// Uniform scatter over a square, with one heavy central body standing in for
/// a star. `random_mass` draws each mass from the configured range instead of
/// the fixed default.
pub fn square_scatter(rng: &mut fastrand::Rng, n: usize, random_mass: bool) -> Vec<Body> {
    let extent = config::SCATTER_EXTENT;
    let mut bodies: Vec<Body> = Vec::with_capacity(n);

    while bodies.len() < n {
        let pos = DVec2::new(rng.f64() * extent, rng.f64() * extent);
        let mass = if random_mass {
            config::SCATTER_MIN_MASS + rng.f64() * (config::SCATTER_MAX_MASS - config::SCATTER_MIN_MASS)
        } else {
            config::SCATTER_BODY_MASS
        };
        bodies.push(Body::new(pos, DVec2::zero(), mass));
    }

    if let Some(center) = bodies.first_mut() {
        center.mass = config::SCATTER_BODY_MASS * config::SCATTER_CENTRAL_MASS_FACTOR;
        center.pos = DVec2::new(extent * 0.5, extent * 0.5);
    }

    bodies
}

/// Cold-start accretion disk: a heavy central body orbited by light bodies
/// between the inner and outer radius, each launched tangentially at the
/// circular-orbit speed `sqrt(g * M / r)` with a little eccentricity jitter.
pub fn orbit_disk(rng: &mut fastrand::Rng, n: usize, g: f64) -> Vec<Body> {
    let mut bodies: Vec<Body> = Vec::with_capacity(n);
    let central_mass = config::DISK_CENTRAL_MASS;

    bodies.push(Body::new(DVec2::zero(), DVec2::zero(), central_mass));

    while bodies.len() < n {
        let angle = rng.f64() * std::f64::consts::TAU;
        let radius = config::DISK_INNER_RADIUS
            + rng.f64() * (config::DISK_OUTER_RADIUS - config::DISK_INNER_RADIUS);
        let (sin, cos) = angle.sin_cos();

        let thickness = (rng.f64() * 2.0 - 1.0) * config::DISK_THICKNESS;
        let pos = DVec2::new(radius * cos, radius * sin + thickness);

        let speed = (g * central_mass / radius).sqrt() * (0.9 + rng.f64() * 0.2);
        let vel = DVec2::new(-speed * sin, speed * cos);

        let mass = config::DISK_BODY_MASS * (0.8 + rng.f64() * 0.4);
        bodies.push(Body::new(pos, vel, mass));
    }

    bodies
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disk_is_reproducible_from_seed() {
        let mut a = fastrand::Rng::with_seed(42);
        let mut b = fastrand::Rng::with_seed(42);
        let first = orbit_disk(&mut a, 64, crate::config::G);
        let second = orbit_disk(&mut b, 64, crate::config::G);
        for (x, y) in first.iter().zip(&second) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.vel, y.vel);
            assert_eq!(x.mass, y.mass);
        }
    }

    #[test]
    fn disk_radii_within_bounds() {
        let mut rng = fastrand::Rng::with_seed(7);
        let bodies = orbit_disk(&mut rng, 256, crate::config::G);
        for body in &bodies[1..] {
            let r = body.pos.mag();
            assert!(r >= crate::config::DISK_INNER_RADIUS - crate::config::DISK_THICKNESS);
            assert!(r <= crate::config::DISK_OUTER_RADIUS + crate::config::DISK_THICKNESS);
        }
    }

    #[test]
    fn scatter_places_central_body_at_domain_center() {
        let mut rng = fastrand::Rng::with_seed(1);
        let bodies = square_scatter(&mut rng, 100, false);
        assert_eq!(bodies.len(), 100);
        let center = &bodies[0];
        assert_eq!(center.pos.x, crate::config::SCATTER_EXTENT * 0.5);
        assert!(center.mass > crate::config::SCATTER_BODY_MASS);
    }
}
