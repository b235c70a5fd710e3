use crate::body::Body;
use ultraviolet::DVec2;

/// Axis-aligned square region of the simulation plane. Y points up.
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub center: DVec2,
    pub size: f64,
}

pub const NW: usize = 0;
pub const NE: usize = 1;
pub const SW: usize = 2;
pub const SE: usize = 3;

impl Quad {
    /// Smallest square containing every body. The box midpoint becomes the
    /// center and the longer box side the length, so all four children of any
    /// subdivision stay equal squares.
    pub fn new_containing(bodies: &[Body]) -> Self {
        if bodies.is_empty() {
            return Self {
                center: DVec2::zero(),
                size: 1.0,
            };
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for body in bodies {
            min_x = min_x.min(body.pos.x);
            min_y = min_y.min(body.pos.y);
            max_x = max_x.max(body.pos.x);
            max_y = max_y.max(body.pos.y);
        }

        let center = DVec2::new(min_x + max_x, min_y + max_y) * 0.5;
        let size = (max_x - min_x).max(max_y - min_y);

        Self { center, size }
    }

    /// Quadrant index for a position: NW=0, NE=1, SW=2, SE=3.
    /// Ties on the center lines go left (`x <= center.x`) and top
    /// (`y >= center.y`). Positions outside the quad are not checked.
    pub fn quadrant_of(&self, pos: DVec2) -> usize {
        ((pos.x > self.center.x) as usize) | (((pos.y < self.center.y) as usize) << 1)
    }

    /// Child square for a quadrant index: half the side, centered a quarter
    /// of the parent side toward that corner.
    pub fn into_quadrant(mut self, quadrant: usize) -> Self {
        self.size *= 0.5;
        self.center.x += ((quadrant & 1) as f64 - 0.5) * self.size;
        self.center.y += (0.5 - (quadrant >> 1) as f64) * self.size;
        self
    }

    pub fn subdivide(&self) -> [Quad; 4] {
        [NW, NE, SW, SE].map(|i| self.into_quadrant(i))
    }

    /// Whether a position lies within the closed square.
    pub fn contains(&self, pos: DVec2) -> bool {
        let half = self.size * 0.5;
        (pos.x - self.center.x).abs() <= half && (pos.y - self.center.y).abs() <= half
    }
}
