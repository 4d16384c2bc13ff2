mod common;

use color_plane::ops::{self, OpError};
use color_plane::PixelBuffer;
use common::synthetic_image::gradient_rgb;

#[test]
fn copy_is_independent_both_ways() {
    let mut original = gradient_rgb(6, 5);
    let mut duplicate = ops::copy(&original);

    let untouched = original.read(2, 2, 1);
    duplicate.write(2, 2, 1, 9.0);
    assert_eq!(original.read(2, 2, 1), untouched);

    let kept = duplicate.read(4, 3, 0);
    original.write(4, 3, 0, -3.0);
    assert_eq!(duplicate.read(4, 3, 0), kept);
}

#[test]
fn grayscale_uses_luma_weights() {
    let mut buffer = PixelBuffer::new(2, 2, 3);
    // (0,0) red, (1,0) green, (0,1) blue, (1,1) white
    buffer.write(0, 0, 0, 1.0);
    buffer.write(1, 0, 1, 1.0);
    buffer.write(0, 1, 2, 1.0);
    buffer.write(1, 1, 0, 1.0);
    buffer.write(1, 1, 1, 1.0);
    buffer.write(1, 1, 2, 1.0);

    let gray = ops::to_grayscale(&buffer).unwrap();
    assert_eq!(gray.channels(), 1);
    assert!((gray.read(0, 0, 0) - 0.299).abs() < 1e-6);
    assert!((gray.read(1, 0, 0) - 0.587).abs() < 1e-6);
    assert!((gray.read(0, 1, 0) - 0.114).abs() < 1e-6);
    assert!((gray.read(1, 1, 0) - 1.0).abs() < 1e-6);
}

#[test]
fn grayscale_rejects_wrong_channel_count() {
    let gray = PixelBuffer::new(4, 4, 1);
    assert_eq!(
        ops::to_grayscale(&gray).unwrap_err(),
        OpError::ChannelCount {
            expected: 3,
            got: 1
        }
    );
}

#[test]
fn shift_touches_only_its_plane() {
    let mut buffer = gradient_rgb(5, 4);
    let plane0 = plane_values(&buffer, 0);
    let plane1 = plane_values(&buffer, 1);
    let plane2 = plane_values(&buffer, 2);

    ops::shift_channel(&mut buffer, 1, 0.25);

    assert_eq!(plane_values(&buffer, 0), plane0);
    assert_eq!(plane_values(&buffer, 2), plane2);
    for (after, before) in plane_values(&buffer, 1).iter().zip(&plane1) {
        assert!((after - (before + 0.25)).abs() < 1e-6);
    }
}

#[test]
fn scale_touches_only_its_plane() {
    let mut buffer = gradient_rgb(5, 4);
    let plane0 = plane_values(&buffer, 0);
    let plane2 = plane_values(&buffer, 2);

    ops::scale_channel(&mut buffer, 2, 0.5);

    assert_eq!(plane_values(&buffer, 0), plane0);
    for (after, before) in plane_values(&buffer, 2).iter().zip(&plane2) {
        assert!((after - before * 0.5).abs() < 1e-6);
    }
}

#[test]
fn shift_does_not_clamp() {
    let mut buffer = PixelBuffer::new(2, 2, 3);
    ops::shift_channel(&mut buffer, 0, 1.5);
    assert_eq!(buffer.read(0, 0, 0), 1.5);
    ops::shift_channel(&mut buffer, 0, -3.0);
    assert_eq!(buffer.read(0, 0, 0), -1.5);
}

#[test]
fn clamp_is_idempotent() {
    let samples = vec![-0.5, 0.0, 0.3, 1.0, 1.7, 42.0, -0.0001, 0.9999];
    let mut buffer = PixelBuffer::from_samples(4, 1, 2, samples).unwrap();

    ops::clamp(&mut buffer);
    for &v in buffer.samples() {
        assert!((0.0..=1.0).contains(&v), "sample {v} escaped [0, 1]");
    }

    let once = buffer.samples().to_vec();
    ops::clamp(&mut buffer);
    assert_eq!(buffer.samples(), &once[..]);
}

#[test]
fn zero_area_buffers_are_a_no_op() {
    let mut empty = PixelBuffer::new(0, 3, 3);
    ops::shift_channel(&mut empty, 0, 1.0);
    ops::scale_channel(&mut empty, 0, 2.0);
    ops::clamp(&mut empty);

    let copied = ops::copy(&empty);
    assert_eq!(copied.width(), 0);

    let gray = ops::to_grayscale(&empty).unwrap();
    assert_eq!((gray.width(), gray.height(), gray.channels()), (0, 3, 1));
}

fn plane_values(buffer: &PixelBuffer, c: i32) -> Vec<f32> {
    let mut out = Vec::new();
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            out.push(buffer.read(x, y, c));
        }
    }
    out
}
