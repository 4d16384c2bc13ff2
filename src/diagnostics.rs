//! Serializable summary statistics for pixel buffers.
//!
//! Captured by the demo utilities after each operation chain and written as
//! pretty JSON via `image::io::write_json_file`.
use crate::image::{PixelBuffer, PlaneView};
use serde::{Deserialize, Serialize};

/// Statistics for a single channel plane.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneStats {
    pub plane: usize,
    pub min: f32,
    pub max: f32,
    pub mean: f32,
}

/// Per-plane statistics of a whole buffer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferSummary {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub planes: Vec<PlaneStats>,
}

impl BufferSummary {
    pub fn collect(buffer: &PixelBuffer) -> Self {
        let area = buffer.width() * buffer.height();
        let planes = if area == 0 {
            Vec::new()
        } else {
            (0..buffer.channels())
                .map(|c| {
                    let mut min = f32::INFINITY;
                    let mut max = f32::NEG_INFINITY;
                    let mut sum = 0.0f64;
                    for &v in buffer.plane(c) {
                        min = min.min(v);
                        max = max.max(v);
                        sum += v as f64;
                    }
                    PlaneStats {
                        plane: c,
                        min,
                        max,
                        mean: (sum / area as f64) as f32,
                    }
                })
                .collect()
        };
        Self {
            width: buffer.width(),
            height: buffer.height(),
            channels: buffer.channels(),
            planes,
        }
    }
}
