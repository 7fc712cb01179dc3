//! The reveal engine: visibility-driven state transitions.
//!
//! Elements register once with a threshold and a trigger-once policy, and
//! carry a declarative [`Transition`] record. Visibility is pushed in
//! (`viewport_changed`) whenever scroll or layout moves an element; the
//! engine never polls geometry. `tick` settles finished transitions and
//! `params` answers the interpolated pose for any instant, so per-frame
//! cost is a lookup plus arithmetic.
//!
//! State is monotonic under trigger-once: `Hidden -> Revealing -> Visible`,
//! never backward. Elements registered with trigger-once off revert to
//! `Hidden` when they leave the viewport.

use std::collections::HashMap;
use std::time::Instant;

use super::transition::{Transition, VisualParams};

/// Opaque registration handle. Stale handles (after `release`) are inert:
/// every operation on them is a no-op and queries return `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealHandle(u64);

/// Public view of an element's reveal lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealing,
    Visible,
}

#[derive(Debug, Clone, Copy)]
enum Phase {
    Hidden,
    Revealing { started: Instant },
    /// `triggered` keeps the original reveal instant so choreography that
    /// outlasts the element's own transition can still be derived from it.
    Visible { triggered: Instant },
}

struct Tracked {
    threshold: f32,
    trigger_once: bool,
    transition: Transition,
    phase: Phase,
}

#[derive(Default)]
pub struct RevealEngine {
    tracked: HashMap<RevealHandle, Tracked>,
    next_id: u64,
    /// Reduced-motion mode: triggered elements settle immediately.
    instant: bool,
}

impl RevealEngine {
    pub fn new() -> Self {
        RevealEngine::default()
    }

    pub fn set_instant(&mut self, instant: bool) {
        self.instant = instant;
    }

    /// Register an element for visibility tracking with the default
    /// transition. The element starts `Hidden`.
    pub fn observe(&mut self, threshold: f32, trigger_once: bool) -> RevealHandle {
        self.observe_with(threshold, trigger_once, Transition::default())
    }

    /// Register an element with an explicit transition record.
    pub fn observe_with(
        &mut self,
        threshold: f32,
        trigger_once: bool,
        transition: Transition,
    ) -> RevealHandle {
        let handle = RevealHandle(self.next_id);
        self.next_id += 1;
        self.tracked.insert(
            handle,
            Tracked {
                threshold: threshold.clamp(0.0, 1.0),
                trigger_once,
                transition,
                phase: Phase::Hidden,
            },
        );
        handle
    }

    /// Replace the transition record. The current phase is untouched.
    pub fn set_transition(&mut self, handle: RevealHandle, transition: Transition) {
        if let Some(tracked) = self.tracked.get_mut(&handle) {
            tracked.transition = transition;
        }
    }

    /// Push a visibility change for one element. Crossing the threshold
    /// while `Hidden` starts the reveal at `now`; dropping below it only
    /// matters when trigger-once is off.
    pub fn viewport_changed(&mut self, handle: RevealHandle, fraction: f32, now: Instant) {
        let instant = self.instant;
        let Some(tracked) = self.tracked.get_mut(&handle) else {
            return;
        };

        match tracked.phase {
            Phase::Hidden => {
                if fraction >= tracked.threshold {
                    tracked.phase = if instant {
                        Phase::Visible { triggered: now }
                    } else {
                        Phase::Revealing { started: now }
                    };
                }
            }
            Phase::Revealing { .. } | Phase::Visible { .. } => {
                if fraction < tracked.threshold && !tracked.trigger_once {
                    tracked.phase = Phase::Hidden;
                }
                // Trigger-once: sticky, nothing to do.
            }
        }
    }

    /// Force a reveal to start regardless of visibility. Used for the
    /// load-time timelines (page entrance, hero) that are not scroll-gated.
    pub fn trigger(&mut self, handle: RevealHandle, now: Instant) {
        let instant = self.instant;
        if let Some(tracked) = self.tracked.get_mut(&handle) {
            if matches!(tracked.phase, Phase::Hidden) {
                tracked.phase = if instant {
                    Phase::Visible { triggered: now }
                } else {
                    Phase::Revealing { started: now }
                };
            }
        }
    }

    /// Settle every transition that has run its course by `now`.
    pub fn tick(&mut self, now: Instant) {
        let instant = self.instant;
        for tracked in self.tracked.values_mut() {
            if let Phase::Revealing { started } = tracked.phase {
                let elapsed = now.saturating_duration_since(started);
                if instant || tracked.transition.is_complete(elapsed) {
                    tracked.phase = Phase::Visible { triggered: started };
                }
            }
        }
    }

    pub fn state(&self, handle: RevealHandle) -> Option<RevealState> {
        self.tracked.get(&handle).map(|t| match t.phase {
            Phase::Hidden => RevealState::Hidden,
            Phase::Revealing { .. } => RevealState::Revealing,
            Phase::Visible { .. } => RevealState::Visible,
        })
    }

    /// Interpolated visual parameters for `handle` at `now`, or `None` for
    /// released handles.
    pub fn params(&self, handle: RevealHandle, now: Instant) -> Option<VisualParams> {
        self.tracked.get(&handle).map(|t| match t.phase {
            Phase::Hidden => t.transition.from,
            Phase::Revealing { started } => t
                .transition
                .params_at(now.saturating_duration_since(started)),
            Phase::Visible { .. } => t.transition.to,
        })
    }

    /// Time since the element's reveal was triggered, or `None` while
    /// still hidden. Renderers derive inner choreography (header rows,
    /// dividers, staggered detail) from this instead of registering a
    /// handle per row. In reduced-motion mode the answer is far enough in
    /// the past that every derived transition has settled.
    pub fn elapsed_since_trigger(
        &self,
        handle: RevealHandle,
        now: Instant,
    ) -> Option<std::time::Duration> {
        let tracked = self.tracked.get(&handle)?;
        let origin = match tracked.phase {
            Phase::Hidden => return None,
            Phase::Revealing { started } => started,
            Phase::Visible { triggered } => triggered,
        };
        if self.instant {
            Some(std::time::Duration::from_secs(3600))
        } else {
            Some(now.saturating_duration_since(origin))
        }
    }

    /// Unregister an element, cancelling any pending transition. Safe to
    /// call twice; the handle is simply inert afterwards.
    pub fn release(&mut self, handle: RevealHandle) {
        self.tracked.remove(&handle);
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::easing::Easing;
    use std::time::Duration;

    fn engine_with(
        threshold: f32,
        trigger_once: bool,
        duration_ms: u64,
    ) -> (RevealEngine, RevealHandle) {
        let mut engine = RevealEngine::new();
        let handle = engine.observe_with(
            threshold,
            trigger_once,
            Transition::fade_rise(2.0, Duration::from_millis(duration_ms), Easing::Linear),
        );
        (engine, handle)
    }

    #[test]
    fn observed_elements_start_hidden() {
        let (engine, handle) = engine_with(0.2, true, 600);
        assert_eq!(engine.state(handle), Some(RevealState::Hidden));
    }

    #[test]
    fn below_threshold_stays_hidden() {
        let (mut engine, handle) = engine_with(0.3, true, 600);
        engine.viewport_changed(handle, 0.29, Instant::now());
        assert_eq!(engine.state(handle), Some(RevealState::Hidden));
    }

    #[test]
    fn crossing_threshold_starts_reveal() {
        let (mut engine, handle) = engine_with(0.3, true, 600);
        engine.viewport_changed(handle, 0.35, Instant::now());
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));
    }

    #[test]
    fn exact_threshold_triggers() {
        let (mut engine, handle) = engine_with(0.2, true, 600);
        engine.viewport_changed(handle, 0.2, Instant::now());
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));
    }

    #[test]
    fn tick_settles_after_duration() {
        let (mut engine, handle) = engine_with(0.2, true, 600);
        let start = Instant::now();
        engine.viewport_changed(handle, 0.5, start);

        engine.tick(start + Duration::from_millis(300));
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));

        engine.tick(start + Duration::from_millis(600));
        assert_eq!(engine.state(handle), Some(RevealState::Visible));
    }

    #[test]
    fn params_interpolate_during_reveal() {
        let (mut engine, handle) = engine_with(0.2, true, 1000);
        let start = Instant::now();
        engine.viewport_changed(handle, 1.0, start);

        let mid = engine
            .params(handle, start + Duration::from_millis(500))
            .unwrap();
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.rise > 0.0 && mid.rise < 2.0);

        let done = engine
            .params(handle, start + Duration::from_millis(1000))
            .unwrap();
        assert_eq!(done, VisualParams::VISIBLE);
    }

    #[test]
    fn trigger_once_is_sticky_after_visible() {
        let (mut engine, handle) = engine_with(0.3, true, 100);
        let start = Instant::now();
        engine.viewport_changed(handle, 0.35, start);
        engine.tick(start + Duration::from_millis(100));
        assert_eq!(engine.state(handle), Some(RevealState::Visible));

        // Element leaves the viewport entirely
        engine.viewport_changed(handle, 0.0, start + Duration::from_millis(200));
        assert_eq!(engine.state(handle), Some(RevealState::Visible));
    }

    #[test]
    fn trigger_once_is_sticky_while_revealing() {
        let (mut engine, handle) = engine_with(0.3, true, 600);
        let start = Instant::now();
        engine.viewport_changed(handle, 0.35, start);
        engine.viewport_changed(handle, 0.0, start + Duration::from_millis(50));
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));
    }

    #[test]
    fn reversible_when_trigger_once_off() {
        let (mut engine, handle) = engine_with(0.3, false, 100);
        let start = Instant::now();
        engine.viewport_changed(handle, 0.5, start);
        engine.tick(start + Duration::from_millis(100));
        assert_eq!(engine.state(handle), Some(RevealState::Visible));

        engine.viewport_changed(handle, 0.1, start + Duration::from_millis(200));
        assert_eq!(engine.state(handle), Some(RevealState::Hidden));
    }

    #[test]
    fn release_makes_handle_inert() {
        let (mut engine, handle) = engine_with(0.2, true, 600);
        let start = Instant::now();
        engine.viewport_changed(handle, 1.0, start);
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));

        engine.release(handle);
        assert_eq!(engine.state(handle), None);
        assert_eq!(engine.params(handle, start), None);

        // Pending transition never completes, pushes are no-ops
        engine.tick(start + Duration::from_secs(5));
        engine.viewport_changed(handle, 1.0, start + Duration::from_secs(5));
        engine.trigger(handle, start + Duration::from_secs(5));
        assert_eq!(engine.state(handle), None);
        assert!(engine.is_empty());

        // Releasing twice is fine
        engine.release(handle);
    }

    #[test]
    fn trigger_forces_reveal_without_visibility() {
        let (mut engine, handle) = engine_with(0.2, true, 600);
        engine.trigger(handle, Instant::now());
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));
    }

    #[test]
    fn delay_holds_hidden_pose() {
        let mut engine = RevealEngine::new();
        let transition = Transition::fade_rise(2.0, Duration::from_millis(400), Easing::Linear)
            .with_delay(Duration::from_millis(300));
        let handle = engine.observe_with(0.2, true, transition);

        let start = Instant::now();
        engine.trigger(handle, start);

        let early = engine
            .params(handle, start + Duration::from_millis(100))
            .unwrap();
        assert_eq!(early, transition.from);

        engine.tick(start + Duration::from_millis(400));
        assert_eq!(engine.state(handle), Some(RevealState::Revealing));
        engine.tick(start + Duration::from_millis(700));
        assert_eq!(engine.state(handle), Some(RevealState::Visible));
    }

    #[test]
    fn instant_mode_settles_on_trigger() {
        let mut engine = RevealEngine::new();
        engine.set_instant(true);
        let handle = engine.observe(0.2, true);

        let start = Instant::now();
        engine.viewport_changed(handle, 1.0, start);
        assert_eq!(engine.state(handle), Some(RevealState::Visible));
        assert_eq!(engine.params(handle, start), Some(VisualParams::VISIBLE));
    }

    #[test]
    fn elapsed_tracks_the_trigger_instant() {
        let (mut engine, handle) = engine_with(0.2, true, 100);
        let start = Instant::now();
        assert_eq!(engine.elapsed_since_trigger(handle, start), None);

        engine.viewport_changed(handle, 1.0, start);
        let later = start + Duration::from_millis(250);
        assert_eq!(
            engine.elapsed_since_trigger(handle, later),
            Some(Duration::from_millis(250))
        );

        // Settling into Visible keeps the original trigger instant
        engine.tick(start + Duration::from_millis(100));
        assert_eq!(engine.state(handle), Some(RevealState::Visible));
        assert_eq!(
            engine.elapsed_since_trigger(handle, later),
            Some(Duration::from_millis(250))
        );
    }

    #[test]
    fn instant_mode_reports_settled_choreography() {
        let mut engine = RevealEngine::new();
        engine.set_instant(true);
        let handle = engine.observe(0.2, true);
        let start = Instant::now();
        engine.viewport_changed(handle, 1.0, start);

        let elapsed = engine.elapsed_since_trigger(handle, start).unwrap();
        assert!(elapsed >= Duration::from_secs(3600));
    }

    #[test]
    fn handles_are_independent() {
        let mut engine = RevealEngine::new();
        let a = engine.observe(0.2, true);
        let b = engine.observe(0.2, true);

        engine.viewport_changed(a, 1.0, Instant::now());
        assert_eq!(engine.state(a), Some(RevealState::Revealing));
        assert_eq!(engine.state(b), Some(RevealState::Hidden));
        assert_eq!(engine.len(), 2);
    }
}
