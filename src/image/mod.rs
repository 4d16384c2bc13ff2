pub mod buffer;
pub mod io;
pub mod traits;

pub use self::buffer::PixelBuffer;
pub use self::traits::{PlaneRows, PlaneRowsMut, PlaneView, PlaneViewMut};
