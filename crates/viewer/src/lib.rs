pub mod render;
pub mod router;
pub mod viewer;

pub use render::*;
pub use router::*;
pub use viewer::*;
