//! Whole-buffer operations built on the `PixelBuffer` accessors.
//!
//! In-place operations borrow the buffer mutably; operations that change the
//! channel count or need an independent copy return a fresh buffer and leave
//! the source untouched. All of them degrade to a no-op on zero-area buffers.
use crate::image::PixelBuffer;
use log::debug;
use std::error::Error;
use std::fmt;

/// Precondition failures of the buffer operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpError {
    /// The operation needs a specific channel count.
    ChannelCount { expected: usize, got: usize },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::ChannelCount { expected, got } => {
                write!(f, "expected a {expected}-channel buffer, got {got} channels")
            }
        }
    }
}

impl Error for OpError {}

/// Duplicate a buffer sample by sample. The copy shares no storage with the
/// source.
pub fn copy(src: &PixelBuffer) -> PixelBuffer {
    let mut out = PixelBuffer::new(src.width(), src.height(), src.channels());
    let (w, h, ch) = dims(src);
    for c in 0..ch {
        for y in 0..h {
            for x in 0..w {
                out.write(x, y, c, src.read(x, y, c));
            }
        }
    }
    out
}

/// Collapse a 3-channel RGB buffer into a single luma plane
/// (Rec. 601 weights 0.299/0.587/0.114).
pub fn to_grayscale(src: &PixelBuffer) -> Result<PixelBuffer, OpError> {
    if src.channels() != 3 {
        return Err(OpError::ChannelCount {
            expected: 3,
            got: src.channels(),
        });
    }
    debug!("to_grayscale {}x{}", src.width(), src.height());
    let mut gray = PixelBuffer::new(src.width(), src.height(), 1);
    let (w, h, _) = dims(src);
    for y in 0..h {
        for x in 0..w {
            let luma = 0.299 * src.read(x, y, 0)
                + 0.587 * src.read(x, y, 1)
                + 0.114 * src.read(x, y, 2);
            gray.write(x, y, 0, luma);
        }
    }
    Ok(gray)
}

/// Add `delta` to every sample of one channel plane, in place. No clamping:
/// values may leave [0, 1].
pub fn shift_channel(buffer: &mut PixelBuffer, channel: usize, delta: f32) {
    let (w, h, _) = dims(buffer);
    let c = channel as i32;
    for y in 0..h {
        for x in 0..w {
            buffer.write(x, y, c, buffer.read(x, y, c) + delta);
        }
    }
}

/// Multiply every sample of one channel plane by `factor`, in place.
pub fn scale_channel(buffer: &mut PixelBuffer, channel: usize, factor: f32) {
    let (w, h, _) = dims(buffer);
    let c = channel as i32;
    for y in 0..h {
        for x in 0..w {
            buffer.write(x, y, c, buffer.read(x, y, c) * factor);
        }
    }
}

/// Clamp every sample of every plane into [0, 1], in place. Idempotent.
pub fn clamp(buffer: &mut PixelBuffer) {
    let (w, h, ch) = dims(buffer);
    for c in 0..ch {
        for y in 0..h {
            for x in 0..w {
                let v = buffer.read(x, y, c);
                buffer.write(x, y, c, v.clamp(0.0, 1.0));
            }
        }
    }
}

#[inline]
fn dims(buffer: &PixelBuffer) -> (i32, i32, i32) {
    (
        buffer.width() as i32,
        buffer.height() as i32,
        buffer.channels() as i32,
    )
}
