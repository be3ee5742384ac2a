pub mod buffer;
pub mod clock;
pub mod error;
pub mod session;
pub mod surface;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use buffer::*;
pub use clock::*;
pub use error::*;
pub use session::*;
pub use surface::*;
