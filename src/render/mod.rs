pub mod braille;
pub mod frame;
pub mod sampler;

pub use braille::{BrailleGrid, rasterize};
pub use frame::render;
pub use sampler::{Span, clip_to_range, envelope};
