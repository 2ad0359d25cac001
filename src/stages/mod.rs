pub mod analyze;
pub mod render;
pub mod segment;

pub use analyze::*;
pub use render::*;
pub use segment::*;
