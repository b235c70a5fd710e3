pub mod node;
pub mod quad;

pub use node::Node;
pub use quad::Quad;

mod quadtree;
pub use quadtree::Quadtree;
