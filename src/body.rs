// Point mass advanced by semi-implicit Euler. Bodies are created once by a
// generator, then mutated in place every step: `update` integrates from the
// current acceleration, and the force query overwrites `acc` afterwards.

use serde::{Deserialize, Serialize};
use ultraviolet::DVec2;

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Body {
    pub pos: DVec2,
    pub vel: DVec2,
    pub acc: DVec2,
    pub mass: f64,
}

impl Body {
    pub fn new(pos: DVec2, vel: DVec2, mass: f64) -> Self {
        Self {
            pos,
            vel,
            acc: DVec2::zero(),
            mass,
        }
    }

    /// One integration step: velocity first, then position with the updated
    /// velocity. No NaN/Inf screening; bad values propagate.
    pub fn update(&mut self, dt: f64) {
        self.vel += self.acc * dt;
        self.pos += self.vel * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_applies_acceleration_before_position() {
        let mut body = Body::new(DVec2::zero(), DVec2::zero(), 1.0);
        body.acc = DVec2::new(2.0, 0.0);
        body.update(0.5);

        // vel = 0 + 2*0.5 = 1, pos = 0 + 1*0.5 = 0.5 (semi-implicit order)
        assert_eq!(body.vel, DVec2::new(1.0, 0.0));
        assert_eq!(body.pos, DVec2::new(0.5, 0.0));
    }

    #[test]
    fn update_with_zero_acceleration_is_linear_motion() {
        let mut body = Body::new(DVec2::zero(), DVec2::new(3.0, -1.0), 1.0);
        for _ in 0..4 {
            body.update(0.25);
        }
        assert!((body.pos.x - 3.0).abs() < 1e-12);
        assert!((body.pos.y + 1.0).abs() < 1e-12);
    }
}
