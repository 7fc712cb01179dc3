//! Page scroll state.
//!
//! The page is a virtual column of rows; the viewport shows a slice of it.
//! Offsets are tracked as floats so anchor glides can ease smoothly, but
//! every public read rounds to whole rows. Manual scrolling moves
//! immediately and cancels any glide in flight.

use std::time::{Duration, Instant};

use crate::reveal::Easing;

/// Rows scrolled before the back-to-top affordance appears.
pub const BACK_TO_TOP_THRESHOLD: u16 = 15;

/// Rows moved per plain up/down step.
pub const LINE_SCROLL: u16 = 2;

/// Rows moved per page up/down. One short of a full screen keeps a line of
/// context across the jump.
pub const PAGE_SCROLL: u16 = 20;

/// How long an anchor glide takes.
const GLIDE_DURATION: Duration = Duration::from_millis(600);

#[derive(Debug, Clone, Copy)]
struct Glide {
    from: f32,
    to: f32,
    started: Instant,
}

#[derive(Debug, Default)]
pub struct PageScroll {
    offset: f32,
    content_height: u16,
    viewport_height: u16,
    glide: Option<Glide>,
    /// Reduced-motion mode: glides jump straight to their target.
    instant: bool,
}

impl PageScroll {
    pub fn new() -> Self {
        PageScroll::default()
    }

    pub fn set_instant(&mut self, instant: bool) {
        self.instant = instant;
    }

    /// Current offset in whole rows.
    pub fn offset(&self) -> u16 {
        self.offset.round().max(0.0) as u16
    }

    pub fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    pub fn content_height(&self) -> u16 {
        self.content_height
    }

    pub fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Update the geometry, re-clamping the offset (and any glide target)
    /// so a resize can never leave the view past the end of the page.
    pub fn set_geometry(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        let max = self.max_offset() as f32;
        self.offset = self.offset.clamp(0.0, max);
        if let Some(glide) = &mut self.glide {
            glide.to = glide.to.clamp(0.0, max);
        }
    }

    /// Immediate relative scroll. Cancels a glide in flight.
    pub fn scroll_by(&mut self, delta: i32) {
        self.glide = None;
        let target = self.offset + delta as f32;
        self.offset = target.clamp(0.0, self.max_offset() as f32);
    }

    /// Immediate absolute scroll. Cancels a glide in flight.
    pub fn scroll_to(&mut self, row: u16) {
        self.glide = None;
        self.offset = (row.min(self.max_offset())) as f32;
    }

    /// Ease toward `row` over the glide duration. In reduced-motion mode
    /// this is an immediate jump.
    pub fn glide_to(&mut self, row: u16, now: Instant) {
        let to = row.min(self.max_offset()) as f32;
        if self.instant || (to - self.offset).abs() < 0.5 {
            self.glide = None;
            self.offset = to;
            return;
        }
        self.glide = Some(Glide {
            from: self.offset,
            to,
            started: now,
        });
    }

    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Advance a glide in flight. Returns true when the offset moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(glide) = self.glide else {
            return false;
        };
        let before = self.offset();
        let elapsed = now.saturating_duration_since(glide.started);
        if elapsed >= GLIDE_DURATION {
            self.offset = glide.to;
            self.glide = None;
        } else {
            let t = elapsed.as_secs_f32() / GLIDE_DURATION.as_secs_f32();
            self.offset = glide.from + (glide.to - glide.from) * Easing::EaseInOut.apply(t);
        }
        self.offset() != before || self.glide.is_none()
    }

    /// Whether the back-to-top affordance should be shown.
    pub fn show_back_to_top(&self) -> bool {
        self.offset() > BACK_TO_TOP_THRESHOLD
    }

    /// Scroll progress in percent, for the status bar.
    pub fn percent(&self) -> u16 {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        ((self.offset() as f32 / max as f32) * 100.0).round() as u16
    }

    /// Visible fraction of an element spanning `[start, start + height)`
    /// page rows. The denominator is capped at the viewport height so an
    /// element taller than the screen can still reach full visibility.
    pub fn visible_fraction(&self, start: u16, height: u16) -> f32 {
        if height == 0 || self.viewport_height == 0 {
            return 0.0;
        }
        let view_start = self.offset() as f32;
        let view_end = view_start + self.viewport_height as f32;
        let elem_start = start as f32;
        let elem_end = elem_start + height as f32;

        let overlap = (view_end.min(elem_end) - view_start.max(elem_start)).max(0.0);
        let denom = (height.min(self.viewport_height)) as f32;
        (overlap / denom).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll(content: u16, viewport: u16) -> PageScroll {
        let mut s = PageScroll::new();
        s.set_geometry(content, viewport);
        s
    }

    #[test]
    fn scroll_by_clamps_to_bounds() {
        let mut s = scroll(100, 24);
        s.scroll_by(-10);
        assert_eq!(s.offset(), 0);
        s.scroll_by(200);
        assert_eq!(s.offset(), 76);
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut s = scroll(100, 24);
        s.scroll_to(76);
        s.set_geometry(50, 24);
        assert_eq!(s.offset(), 26);
    }

    #[test]
    fn content_shorter_than_viewport_pins_to_top() {
        let mut s = scroll(10, 24);
        s.scroll_by(5);
        assert_eq!(s.offset(), 0);
        assert_eq!(s.max_offset(), 0);
        assert_eq!(s.percent(), 100);
    }

    #[test]
    fn glide_eases_to_target() {
        let mut s = scroll(200, 24);
        let start = Instant::now();
        s.glide_to(100, start);
        assert!(s.is_gliding());

        s.tick(start + Duration::from_millis(300));
        let mid = s.offset();
        assert!(mid > 0 && mid < 100, "midway offset was {}", mid);

        s.tick(start + Duration::from_millis(600));
        assert_eq!(s.offset(), 100);
        assert!(!s.is_gliding());
    }

    #[test]
    fn manual_scroll_cancels_glide() {
        let mut s = scroll(200, 24);
        let start = Instant::now();
        s.glide_to(100, start);
        s.scroll_by(2);
        assert!(!s.is_gliding());
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn instant_mode_jumps() {
        let mut s = scroll(200, 24);
        s.set_instant(true);
        s.glide_to(120, Instant::now());
        assert!(!s.is_gliding());
        assert_eq!(s.offset(), 120);
    }

    #[test]
    fn back_to_top_threshold() {
        let mut s = scroll(200, 24);
        assert!(!s.show_back_to_top());
        s.scroll_to(BACK_TO_TOP_THRESHOLD);
        assert!(!s.show_back_to_top());
        s.scroll_to(BACK_TO_TOP_THRESHOLD + 1);
        assert!(s.show_back_to_top());
        s.scroll_to(0);
        assert!(!s.show_back_to_top());
    }

    #[test]
    fn visible_fraction_tracks_overlap() {
        let mut s = scroll(200, 20);
        // Element at rows 30..40, viewport at 0..20: no overlap
        assert_eq!(s.visible_fraction(30, 10), 0.0);

        // Half the element in view
        s.scroll_to(15);
        assert!((s.visible_fraction(30, 10) - 0.5).abs() < 1e-6);

        // Fully in view
        s.scroll_to(28);
        assert!((s.visible_fraction(30, 10) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn tall_elements_use_viewport_capacity() {
        let mut s = scroll(300, 20);
        // A 100-row element can still reach fraction 1.0 by filling the
        // viewport.
        s.scroll_to(80);
        assert!((s.visible_fraction(60, 100) - 1.0).abs() < 1e-6);

        // 35% of the viewport covered by the element's head
        s.scroll_to(53);
        let f = s.visible_fraction(60, 100);
        assert!((f - 0.65).abs() < 0.01, "fraction was {}", f);
    }

    #[test]
    fn degenerate_geometry_is_zero() {
        let s = PageScroll::new();
        assert_eq!(s.visible_fraction(0, 10), 0.0);
        let s2 = scroll(100, 24);
        assert_eq!(s2.visible_fraction(0, 0), 0.0);
    }
}
