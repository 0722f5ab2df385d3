pub mod assignment;
pub mod evaluator;
pub mod geometry;
pub mod placement;
pub mod ports;
pub mod trajectory;

pub use assignment::*;
pub use evaluator::*;
pub use geometry::Position3D;
pub use placement::*;
pub use ports::*;
pub use trajectory::*;
