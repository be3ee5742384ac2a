pub mod activity;
pub mod camera;
pub mod highlight;
pub mod marker;
pub mod picking;

pub use activity::*;
pub use camera::*;
pub use highlight::*;
pub use marker::*;
pub use picking::*;
