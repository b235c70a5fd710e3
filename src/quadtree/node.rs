use super::quad::Quad;
use ultraviolet::DVec2;

/// One arena slot of the quadtree. Nodes reference each other only by index
/// into the tree's node list; index 0 is always the root, so `children == 0`
/// doubles as the "no children" marker and `next == 0` as the end-of-walk
/// sentinel.
#[derive(Clone, Debug)]
pub struct Node {
    /// Index of the first of four consecutive children, or 0 for a leaf.
    pub children: usize,
    /// Index of the node a query continues at after skipping this subtree.
    pub next: usize,
    /// Center of mass after propagation; for a leaf, the held body's position.
    pub pos: DVec2,
    /// Aggregate mass of the subtree; 0.0 means the node holds nothing.
    pub mass: f64,
    pub quad: Quad,
}

impl Node {
    pub const ZEROED: Self = Self {
        children: 0,
        next: 0,
        pos: DVec2 { x: 0.0, y: 0.0 },
        mass: 0.0,
        quad: Quad {
            center: DVec2 { x: 0.0, y: 0.0 },
            size: 0.0,
        },
    };

    pub fn new(next: usize, quad: Quad) -> Self {
        Self {
            children: 0,
            next,
            pos: DVec2::zero(),
            mass: 0.0,
            quad,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children == 0
    }

    pub fn is_branch(&self) -> bool {
        self.children != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mass == 0.0
    }
}
