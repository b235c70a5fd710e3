// The per-step driver. Each step runs four strictly ordered phases:
// integrate all bodies, rebuild the quadtree over the new positions,
// propagate masses bottom-up, then query the tree once per body for the next
// acceleration. The tree carries nothing across steps.

use crate::body::Body;
use crate::config::SimParams;
use crate::profile_scope;
use crate::quadtree::Quadtree;
use rayon::prelude::*;

pub struct Simulation {
    pub params: SimParams,
    pub frame: usize,
    pub bodies: Vec<Body>,
    pub quadtree: Quadtree,
}

impl Simulation {
    pub fn new(params: SimParams, bodies: Vec<Body>) -> Self {
        let quadtree = Quadtree::new(params.theta, params.epsilon);
        Self {
            params,
            frame: 0,
            bodies,
            quadtree,
        }
    }

    /// Advance one step. A collision phase would slot between `iterate` and
    /// `attract`; collision handling is out of scope here.
    pub fn step(&mut self) {
        self.iterate();
        self.attract();
        self.frame += 1;
    }

    /// Integrate every body from its current acceleration. Each body touches
    /// only its own state, so the loop is data-parallel.
    pub fn iterate(&mut self) {
        profile_scope!("iterate");
        let dt = self.params.dt;
        self.bodies.par_iter_mut().for_each(|body| body.update(dt));
    }

    /// Rebuild and aggregate the tree, then overwrite every body's
    /// acceleration from a read-only query. The build is sequential; the
    /// query loop runs parallel against the fully aggregated tree.
    pub fn attract(&mut self) {
        self.quadtree.build(&self.bodies);

        profile_scope!("evaluate");
        let quadtree = &self.quadtree;
        let g = self.params.g;
        self.bodies
            .par_iter_mut()
            .for_each(|body| body.acc = quadtree.acc(body.pos, g));
    }
}
