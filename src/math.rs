//! Scalar helpers shared by the color conversions.

/// Largest of three values.
#[inline]
pub fn three_way_max(a: f32, b: f32, c: f32) -> f32 {
    a.max(b).max(c)
}

/// Smallest of three values.
#[inline]
pub fn three_way_min(a: f32, b: f32, c: f32) -> f32 {
    a.min(b).min(c)
}

/// CIE Lab companding function.
///
/// Cube root above the (6/29)³ cutoff, linear continuation below it so the
/// derivative stays bounded near zero.
#[inline]
pub fn lab_f(t: f32) -> f32 {
    const DELTA: f32 = 6.0 / 29.0;
    const CUTOFF: f32 = DELTA * DELTA * DELTA;

    if t > CUTOFF {
        t.cbrt()
    } else {
        t / (3.0 * DELTA * DELTA) + 4.0 / 29.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn three_way_extrema() {
        assert_eq!(three_way_max(0.1, 0.7, 0.3), 0.7);
        assert_eq!(three_way_max(0.7, 0.1, 0.3), 0.7);
        assert_eq!(three_way_max(0.1, 0.3, 0.7), 0.7);
        assert_eq!(three_way_min(0.1, 0.7, 0.3), 0.1);
        assert_eq!(three_way_min(0.7, 0.1, 0.3), 0.1);
        assert_eq!(three_way_min(0.7, 0.3, 0.1), 0.1);
    }

    #[test]
    fn three_way_handles_ties() {
        assert_eq!(three_way_max(0.5, 0.5, 0.5), 0.5);
        assert_eq!(three_way_min(0.5, 0.5, 0.2), 0.2);
    }

    #[test]
    fn lab_f_endpoints() {
        assert!(approx_eq(lab_f(0.0), 4.0 / 29.0));
        assert!(approx_eq(lab_f(1.0), 1.0));
    }

    #[test]
    fn lab_f_continuous_at_cutoff() {
        let delta = 6.0f32 / 29.0;
        let cutoff = delta * delta * delta;
        let below = lab_f(cutoff - 1e-6);
        let above = lab_f(cutoff + 1e-6);
        assert!((below - above).abs() < 1e-4);
    }

    #[test]
    fn lab_f_is_monotonic() {
        let mut prev = lab_f(0.0);
        for i in 1..=100 {
            let t = i as f32 / 100.0;
            let v = lab_f(t);
            assert!(v > prev, "lab_f not increasing at t={t}");
            prev = v;
        }
    }
}
