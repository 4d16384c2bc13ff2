#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod color;
pub mod diagnostics;
pub mod image;
pub mod math;
pub mod ops;

// Demo-tool plumbing; public so the bundled binary can drive it.
pub mod config;

// --- High-level re-exports -------------------------------------------------

// Main entry points: the buffer plus the whole-buffer transforms.
pub use crate::image::PixelBuffer;

pub use crate::color::{hsv_to_rgb, rgb_to_hcl, rgb_to_hsv};
pub use crate::ops::{clamp, copy, scale_channel, shift_channel, to_grayscale, OpError};

// Serializable per-plane statistics, mostly for tools and reports.
pub use crate::diagnostics::{BufferSummary, PlaneStats};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use color_plane::prelude::*;
///
/// let mut buffer = PixelBuffer::new(4, 4, 3);
/// buffer.write(0, 0, 2, 1.0);
/// rgb_to_hsv(&mut buffer);
/// assert_eq!(buffer.read(0, 0, 2), 1.0);
/// ```
pub mod prelude {
    pub use crate::color::{hsv_to_rgb, rgb_to_hcl, rgb_to_hsv};
    pub use crate::image::PixelBuffer;
    pub use crate::ops::{clamp, copy, scale_channel, shift_channel, to_grayscale};
}
