//! Easing curves used by the reveal transitions.
//!
//! Each curve maps normalized progress `t` in [0, 1] to an eased value.
//! `BackOut` intentionally overshoots past 1.0 before settling; callers
//! that cannot represent an overshoot (opacity, for one) clamp the
//! interpolated result, not the curve.

/// Overshoot amount for [`Easing::BackOut`]. The name animation uses a
/// fairly springy settle.
const BACK_OVERSHOOT: f32 = 1.7;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, gentle landing.
    #[default]
    EaseOut,
    /// Quadratic ease-in-out: gentle at both ends.
    EaseInOut,
    /// Overshoots the target and settles back.
    BackOut,
}

impl Easing {
    /// Apply the curve to progress `t`, clamping input to [0, 1].
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::BackOut => {
                let c1 = BACK_OVERSHOOT;
                let c3 = c1 + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + c1 * u * u
            }
        }
    }
}

/// Triangle wave over one period: 0 -> 1 -> 0. Drives yoyo loops like the
/// scroll indicator bob.
pub fn ping_pong(elapsed_secs: f32, period_secs: f32) -> f32 {
    if period_secs <= 0.0 {
        return 0.0;
    }
    let phase = (elapsed_secs / period_secs).rem_euclid(1.0);
    if phase < 0.5 {
        phase * 2.0
    } else {
        2.0 - phase * 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::BackOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        assert!(Easing::EaseOut.apply(0.5) > 0.5);
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.25);
        let b = Easing::EaseInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn back_out_overshoots_then_settles() {
        let peak = (0..100)
            .map(|i| Easing::BackOut.apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
        assert!((Easing::BackOut.apply(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn ping_pong_cycles() {
        assert!((ping_pong(0.0, 2.0)).abs() < 1e-6);
        assert!((ping_pong(0.5, 2.0) - 0.5).abs() < 1e-6);
        assert!((ping_pong(1.0, 2.0) - 1.0).abs() < 1e-6);
        assert!((ping_pong(1.5, 2.0) - 0.5).abs() < 1e-6);
        assert!((ping_pong(2.0, 2.0)).abs() < 1e-6);
        // Degenerate period
        assert_eq!(ping_pong(1.0, 0.0), 0.0);
    }
}
