pub mod frequency;
pub mod segments;

pub use frequency::*;
pub use segments::*;
