//! Declarative transition records.
//!
//! A [`Transition`] is plain data: start parameters, end parameters, a
//! duration, a delay, and an easing curve. The engine stores these records
//! and interpolates on demand; nothing here schedules per-frame work.

use std::time::Duration;

use super::easing::Easing;

/// The interpolated visual parameters a renderer applies when painting an
/// element: opacity in [0, 1] after clamping, a vertical rise offset in
/// rows (positive = displaced downward from its resting place), a
/// horizontal shift in columns (negative = displaced left), and a scale
/// factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualParams {
    pub opacity: f32,
    pub rise: f32,
    pub shift: f32,
    pub scale: f32,
}

impl VisualParams {
    /// Resting appearance: fully opaque, in place, natural size.
    pub const VISIBLE: VisualParams = VisualParams {
        opacity: 1.0,
        rise: 0.0,
        shift: 0.0,
        scale: 1.0,
    };

    pub const fn new(opacity: f32, rise: f32, shift: f32, scale: f32) -> Self {
        VisualParams {
            opacity,
            rise,
            shift,
            scale,
        }
    }

    /// Transparent and displaced downward, the common hidden pose.
    pub const fn hidden_below(rise: f32) -> Self {
        VisualParams::new(0.0, rise, 0.0, 1.0)
    }

    /// Transparent and displaced to the left.
    pub const fn hidden_left(shift: f32) -> Self {
        VisualParams::new(0.0, 0.0, -shift, 1.0)
    }

    /// Linear interpolation between two parameter sets. `t` is the eased
    /// progress and may exceed 1.0 for overshooting curves.
    pub fn lerp(from: &VisualParams, to: &VisualParams, t: f32) -> VisualParams {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        VisualParams {
            opacity: mix(from.opacity, to.opacity).clamp(0.0, 1.0),
            rise: mix(from.rise, to.rise),
            shift: mix(from.shift, to.shift),
            scale: mix(from.scale, to.scale),
        }
    }

    /// Whether the element is effectively invisible at these parameters.
    pub fn is_transparent(&self) -> bool {
        self.opacity <= f32::EPSILON
    }

    /// Stack child parameters on top of these: offsets add, opacity and
    /// scale multiply. Containers compose with their inner elements this
    /// way.
    pub fn compose(&self, inner: &VisualParams) -> VisualParams {
        VisualParams {
            opacity: (self.opacity * inner.opacity).clamp(0.0, 1.0),
            rise: self.rise + inner.rise,
            shift: self.shift + inner.shift,
            scale: self.scale * inner.scale,
        }
    }

    /// The single blend factor a terminal can actually apply. Scale has no
    /// glyph-level meaning in a cell grid, so sub-unit scale reads as extra
    /// translucency instead; overshoot past 1.0 contributes nothing.
    pub fn alpha(&self) -> f32 {
        (self.opacity * self.scale.min(1.0)).clamp(0.0, 1.0)
    }
}

impl Default for VisualParams {
    fn default() -> Self {
        VisualParams::VISIBLE
    }
}

/// One declarative animation: interpolate from `from` to `to` over
/// `duration`, starting `delay` after the trigger, shaped by `easing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub from: VisualParams,
    pub to: VisualParams,
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Transition {
    pub fn new(from: VisualParams, to: VisualParams, duration: Duration, easing: Easing) -> Self {
        Transition {
            from,
            to,
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    /// The workhorse shape: fade in while rising `rise` rows into place.
    pub fn fade_rise(rise: f32, duration: Duration, easing: Easing) -> Self {
        Transition::new(
            VisualParams::hidden_below(rise),
            VisualParams::VISIBLE,
            duration,
            easing,
        )
    }

    /// Fade in while sliding `shift` columns in from the left.
    pub fn slide_in(shift: f32, duration: Duration, easing: Easing) -> Self {
        Transition::new(
            VisualParams::hidden_left(shift),
            VisualParams::VISIBLE,
            duration,
            easing,
        )
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_from(mut self, from: VisualParams) -> Self {
        self.from = from;
        self
    }

    /// Delay plus duration: how long after the trigger the element settles.
    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }

    /// Interpolated parameters `elapsed` after the trigger: the `from`
    /// pose through the delay, the eased blend during the transition, the
    /// `to` pose afterwards.
    pub fn params_at(&self, elapsed: Duration) -> VisualParams {
        if elapsed < self.delay {
            return self.from;
        }
        let active = elapsed - self.delay;
        if active >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        VisualParams::lerp(&self.from, &self.to, self.easing.apply(t))
    }
}

impl Default for Transition {
    fn default() -> Self {
        // Matches the section container reveal: fade up over 0.8 s.
        Transition::fade_rise(2.0, Duration::from_millis(800), Easing::EaseOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f64) -> Duration {
        Duration::from_secs_f64(s)
    }

    #[test]
    fn holds_from_pose_during_delay() {
        let t = Transition::fade_rise(3.0, secs(0.6), Easing::Linear).with_delay(secs(0.5));
        assert_eq!(t.params_at(secs(0.2)), t.from);
        assert_eq!(t.params_at(Duration::ZERO), t.from);
    }

    #[test]
    fn reaches_target_after_total() {
        let t = Transition::fade_rise(3.0, secs(0.6), Easing::Linear).with_delay(secs(0.5));
        assert_eq!(t.params_at(secs(1.1)), VisualParams::VISIBLE);
        assert_eq!(t.params_at(secs(10.0)), VisualParams::VISIBLE);
        assert!(t.is_complete(secs(1.1)));
        assert!(!t.is_complete(secs(1.0)));
    }

    #[test]
    fn midpoint_interpolates_linearly() {
        let t = Transition::fade_rise(4.0, secs(1.0), Easing::Linear);
        let mid = t.params_at(secs(0.5));
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.rise - 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_duration_snaps_to_target() {
        let t = Transition::fade_rise(2.0, Duration::ZERO, Easing::EaseOut);
        assert_eq!(t.params_at(Duration::ZERO), VisualParams::VISIBLE);
    }

    #[test]
    fn slide_in_starts_left_of_rest() {
        let t = Transition::slide_in(5.0, secs(0.4), Easing::EaseOut);
        assert!(t.params_at(Duration::ZERO).shift < 0.0);
        assert_eq!(t.params_at(secs(0.4)).shift, 0.0);
    }

    #[test]
    fn opacity_clamps_under_overshoot() {
        let from = VisualParams::new(0.0, 0.0, 0.0, 0.5);
        let to = VisualParams::VISIBLE;
        // BackOut exceeds 1.0 mid-curve; opacity must not.
        let t = Transition::new(from, to, secs(1.0), Easing::BackOut);
        for i in 0..=100 {
            let p = t.params_at(secs(i as f64 / 100.0));
            assert!(p.opacity <= 1.0 && p.opacity >= 0.0);
        }
        // Scale is allowed to overshoot its target.
        let peak_scale = (0..=100)
            .map(|i| t.params_at(secs(i as f64 / 100.0)).scale)
            .fold(f32::MIN, f32::max);
        assert!(peak_scale > 1.0);
    }

    #[test]
    fn compose_stacks_offsets_and_blends() {
        let container = VisualParams::new(0.5, 2.0, 0.0, 1.0);
        let child = VisualParams::new(0.8, 1.0, -3.0, 0.9);
        let stacked = container.compose(&child);
        assert!((stacked.opacity - 0.4).abs() < 1e-6);
        assert!((stacked.rise - 3.0).abs() < 1e-6);
        assert!((stacked.shift + 3.0).abs() < 1e-6);
        assert!((stacked.scale - 0.9).abs() < 1e-6);
    }

    #[test]
    fn alpha_ignores_scale_overshoot() {
        assert_eq!(VisualParams::new(1.0, 0.0, 0.0, 1.1).alpha(), 1.0);
        let shrunk = VisualParams::new(1.0, 0.0, 0.0, 0.5);
        assert!((shrunk.alpha() - 0.5).abs() < 1e-6);
    }
}
