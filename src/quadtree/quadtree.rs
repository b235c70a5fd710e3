use super::node::Node;
use super::quad::Quad;
use crate::body::Body;
use crate::profile_scope;
use ultraviolet::DVec2;

/// Barnes-Hut quadtree over an arena of nodes.
///
/// The tree is rebuilt from scratch every simulation step: `reset` drops all
/// nodes and reseeds the root, `insert` grows the arena one body at a time,
/// `propagate` rolls masses up bottom-up, and `acc` runs the read-only
/// approximate force query. `parents` records the node subdivided by each
/// subdivision event in creation order; walking it in reverse visits children
/// before their parent, which is the whole aggregation schedule.
pub struct Quadtree {
    pub t_sq: f64,
    pub e_sq: f64,
    pub nodes: Vec<Node>,
    pub parents: Vec<usize>,
}

impl Quadtree {
    pub const ROOT: usize = 0;

    pub fn new(theta: f64, epsilon: f64) -> Self {
        Self {
            t_sq: theta * theta,
            e_sq: epsilon * epsilon,
            nodes: Vec::new(),
            parents: Vec::new(),
        }
    }

    /// Drop every node and reseed with a root covering `quad`. Capacity is
    /// kept, so steady-state steps allocate nothing.
    pub fn reset(&mut self, quad: Quad) {
        self.nodes.clear();
        self.parents.clear();
        self.nodes.push(Node::new(0, quad));
    }

    /// Insert one point mass. The caller must only pass positions inside the
    /// quad the tree was reset with; quadrant classification is meaningless
    /// for outside points and is not checked here.
    pub fn insert(&mut self, pos: DVec2, mass: f64) {
        let mut node = Self::ROOT;
        while self.nodes[node].is_branch() {
            let quadrant = self.nodes[node].quad.quadrant_of(pos);
            node = self.nodes[node].children + quadrant;
        }

        if self.nodes[node].is_empty() {
            self.nodes[node].pos = pos;
            self.nodes[node].mass = mass;
            return;
        }

        // Bit-identical positions merge instead of subdividing, otherwise two
        // coincident bodies would split the leaf forever.
        if pos == self.nodes[node].pos {
            self.nodes[node].mass += mass;
            return;
        }

        // The leaf holds one other body. Subdivide until the occupant and the
        // new point land in different quadrants, then drop each into its own
        // fresh leaf. Distinct bit patterns separate after finitely many
        // halvings, so the loop terminates.
        let occupant_pos = self.nodes[node].pos;
        let occupant_mass = self.nodes[node].mass;
        loop {
            let children = self.subdivide(node);

            let q1 = self.nodes[node].quad.quadrant_of(occupant_pos);
            let q2 = self.nodes[node].quad.quadrant_of(pos);

            if q1 == q2 {
                node = children + q1;
            } else {
                let n1 = children + q1;
                let n2 = children + q2;

                self.nodes[n1].pos = occupant_pos;
                self.nodes[n1].mass = occupant_mass;
                self.nodes[n2].pos = pos;
                self.nodes[n2].mass = mass;
                return;
            }
        }
    }

    /// Append four empty children for `node` and return the index of the
    /// first. Children 0..3 thread `next` to their following sibling; the
    /// last child inherits the parent's `next`, so a walk that descends into
    /// the children resurfaces exactly where skipping the parent would have.
    pub fn subdivide(&mut self, node: usize) -> usize {
        self.parents.push(node);
        let children = self.nodes.len();
        self.nodes[node].children = children;

        let nexts = [
            children + 1,
            children + 2,
            children + 3,
            self.nodes[node].next,
        ];
        let quads = self.nodes[node].quad.subdivide();
        for i in 0..4 {
            self.nodes.push(Node::new(nexts[i], quads[i]));
        }

        children
    }

    /// Roll masses and centers of mass up the tree. Reverse creation order
    /// guarantees all four children of a node are final before the node
    /// itself is touched. Leaves keep the exact position/mass set at insert.
    pub fn propagate(&mut self) {
        for &node in self.parents.iter().rev() {
            let i = self.nodes[node].children;

            let weighted = self.nodes[i].pos * self.nodes[i].mass
                + self.nodes[i + 1].pos * self.nodes[i + 1].mass
                + self.nodes[i + 2].pos * self.nodes[i + 2].mass
                + self.nodes[i + 3].pos * self.nodes[i + 3].mass;

            let mass = self.nodes[i].mass
                + self.nodes[i + 1].mass
                + self.nodes[i + 2].mass
                + self.nodes[i + 3].mass;

            // A node is only ever subdivided while occupied, so its subtree
            // holds at least one body.
            debug_assert!(mass > 0.0, "subdivided node {} has zero mass", node);

            self.nodes[node].pos = weighted / mass;
            self.nodes[node].mass = mass;
        }
    }

    /// Fit a root quad to the bodies, rebuild the tree, and aggregate.
    /// Sequential by design: insertion allocates node indices from a shared
    /// arena and cannot be split across workers.
    pub fn build(&mut self, bodies: &[Body]) {
        profile_scope!("tree_build");
        self.reset(Quad::new_containing(bodies));
        for body in bodies {
            self.insert(body.pos, body.mass);
        }
        self.propagate();
    }

    /// Gravitational acceleration at `pos`, walking the threaded tree
    /// iteratively. A node is treated as a single point mass when it is a
    /// leaf or when `size^2 < d^2 * theta^2`; accepted nodes contribute
    /// `g*m*d / ((d^2 + eps^2) * sqrt(d^2))` and the walk continues at their
    /// `next` pointer. Rejected branches are entered through their first
    /// child; siblings are reached through each child's own `next` chain.
    pub fn acc(&self, pos: DVec2, g: f64) -> DVec2 {
        let mut acc = DVec2::zero();
        let mut node = Self::ROOT;

        loop {
            let n = &self.nodes[node];

            let d = n.pos - pos;
            let d_sq = d.mag_sq();

            if n.is_leaf() || n.quad.size * n.quad.size < d_sq * self.t_sq {
                // Softening keeps the denominator finite near d = 0; the min
                // clamp keeps the scalar finite when d is exactly 0 (a body
                // querying its own leaf), where d = (0,0) zeroes the term.
                let denom = (d_sq + self.e_sq) * d_sq.sqrt();
                acc += d * (g * n.mass / denom).min(f64::MAX);

                if n.next == 0 {
                    break;
                }
                node = n.next;
            } else {
                node = n.children;
            }
        }

        acc
    }
}
