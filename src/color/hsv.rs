//! In-place RGB ↔ HSV conversion on 3-plane buffers.
//!
//! Plane order is reinterpreted between (R, G, B) and (H, S, V); nothing in
//! the buffer records which convention currently applies. All three channels
//! are treated as [0, 1] quantities, hue included: one full turn maps to
//! [0, 1) rather than degrees.
use crate::image::PixelBuffer;
use crate::math::{three_way_max, three_way_min};
use log::debug;

/// Reinterpret a 3-plane RGB buffer as HSV, per pixel and in place.
///
/// Achromatic pixels (zero chroma) get hue 0; pure black additionally gets
/// saturation 0.
pub fn rgb_to_hsv(buffer: &mut PixelBuffer) {
    debug!("rgb_to_hsv {}x{}", buffer.width(), buffer.height());
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;
    for y in 0..h {
        for x in 0..w {
            let r = buffer.read(x, y, 0);
            let g = buffer.read(x, y, 1);
            let b = buffer.read(x, y, 2);

            let value = three_way_max(r, g, b);
            let chroma = value - three_way_min(r, g, b);

            let saturation = if value <= 0.0 { 0.0 } else { chroma / value };

            let sector = if chroma > 0.0 {
                if value == r {
                    (g - b) / chroma
                } else if value == g {
                    (b - r) / chroma + 2.0
                } else {
                    (r - g) / chroma + 4.0
                }
            } else {
                0.0
            };
            // Fold negative sectors into [0, 1)
            let hue = if sector < 0.0 {
                sector / 6.0 + 1.0
            } else {
                sector / 6.0
            };

            buffer.write(x, y, 0, hue);
            buffer.write(x, y, 1, saturation);
            buffer.write(x, y, 2, value);
        }
    }
}

/// Reinterpret a 3-plane HSV buffer as RGB, per pixel and in place.
///
/// Inverse of [`rgb_to_hsv`] up to floating-point tolerance, except at
/// achromatic pixels where the stored hue is unobservable.
pub fn hsv_to_rgb(buffer: &mut PixelBuffer) {
    debug!("hsv_to_rgb {}x{}", buffer.width(), buffer.height());
    let w = buffer.width() as i32;
    let h = buffer.height() as i32;
    for y in 0..h {
        for x in 0..w {
            let hue = buffer.read(x, y, 0);
            let saturation = buffer.read(x, y, 1);
            let value = buffer.read(x, y, 2);

            let chroma = saturation * value;
            let maxc = value;
            let minc = maxc - chroma;
            let h6 = hue * 6.0;

            // One 60° sector per branch; value == 0 short-circuits to black
            // before any degenerate ratio can form.
            let (r, g, b);
            if value == 0.0 {
                r = 0.0;
                g = 0.0;
                b = 0.0;
            } else if h6 < 1.0 {
                r = maxc;
                b = minc;
                g = h6 * chroma + b;
            } else if h6 < 2.0 {
                g = maxc;
                b = minc;
                r = b - (h6 - 2.0) * chroma;
            } else if h6 < 3.0 {
                g = maxc;
                r = minc;
                b = (h6 - 2.0) * chroma + r;
            } else if h6 < 4.0 {
                b = maxc;
                r = minc;
                g = r - (h6 - 4.0) * chroma;
            } else if h6 < 5.0 {
                b = maxc;
                g = minc;
                r = (h6 - 4.0) * chroma + g;
            } else {
                r = maxc;
                g = minc;
                b = g - (h6 - 6.0) * chroma;
            }

            buffer.write(x, y, 0, r);
            buffer.write(x, y, 1, g);
            buffer.write(x, y, 2, b);
        }
    }
}
