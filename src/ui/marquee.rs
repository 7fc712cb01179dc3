//! Horizontally looping skill ticker.
//!
//! The strip holds every skill twice so the loop can wrap without a
//! visible seam. One full pass of the strip takes thirty seconds, the
//! clock pauses while the pointer hovers the row, and reduced motion
//! pins the strip at its start.

use std::time::{Duration, Instant};

use ratatui::text::{Line, Span};

use crate::ui::styles;

pub const LOOP_SECS: f32 = 30.0;
const CHIP_GAP: &str = "   ";

pub struct Marquee {
    acc: Duration,
    last: Option<Instant>,
    hovered: bool,
    frozen: bool,
}

impl Marquee {
    pub fn new() -> Self {
        Self {
            acc: Duration::ZERO,
            last: None,
            hovered: false,
            frozen: false,
        }
    }

    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    /// Hovering pauses the clock; leaving resumes it from where it was.
    pub fn set_hover(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.frozen
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last {
            if !self.is_paused() {
                self.acc += now.saturating_duration_since(last);
            }
        }
        self.last = Some(now);
    }

    /// Column offset into the doubled strip for the current clock.
    pub fn offset_cols(&self, strip_width: u16) -> u16 {
        if self.frozen || strip_width == 0 {
            return 0;
        }
        let turns = self.acc.as_secs_f32() / LOOP_SECS;
        (turns.fract() * strip_width as f32) as u16 % strip_width
    }
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new()
    }
}

/// Width in columns of a single (non-doubled) pass of the strip.
pub fn strip_width(skills: &[&str]) -> u16 {
    skills
        .iter()
        .map(|s| s.chars().count() as u16 + 2 + CHIP_GAP.len() as u16)
        .sum()
}

/// Build the doubled chip strip as one styled line.
pub fn strip_line(skills: &[&str]) -> Line<'static> {
    let mut spans = Vec::with_capacity(skills.len() * 4);
    for _ in 0..2 {
        for skill in skills {
            spans.push(Span::styled(format!(" {skill} "), styles::chip_style()));
            spans.push(Span::raw(CHIP_GAP));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_only_while_unpaused() {
        let mut m = Marquee::new();
        let t0 = Instant::now();
        m.tick(t0);
        m.tick(t0 + Duration::from_secs(3));
        assert_eq!(m.acc, Duration::from_secs(3));

        m.set_hover(true);
        m.tick(t0 + Duration::from_secs(10));
        assert_eq!(m.acc, Duration::from_secs(3));

        m.set_hover(false);
        m.tick(t0 + Duration::from_secs(11));
        m.tick(t0 + Duration::from_secs(12));
        assert_eq!(m.acc, Duration::from_secs(4));
    }

    #[test]
    fn offset_wraps_at_strip_width() {
        let mut m = Marquee::new();
        let t0 = Instant::now();
        m.tick(t0);
        // Half a loop in.
        m.tick(t0 + Duration::from_secs_f32(LOOP_SECS / 2.0));
        assert_eq!(m.offset_cols(100), 50);
        // A full loop lands back at the start.
        m.tick(t0 + Duration::from_secs_f32(LOOP_SECS));
        assert_eq!(m.offset_cols(100), 0);
    }

    #[test]
    fn frozen_strip_stays_at_start() {
        let mut m = Marquee::new();
        m.set_frozen(true);
        let t0 = Instant::now();
        m.tick(t0);
        m.tick(t0 + Duration::from_secs(12));
        assert_eq!(m.offset_cols(200), 0);
    }

    #[test]
    fn strip_holds_every_skill_twice() {
        let line = strip_line(&["Rust", "React"]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text.matches("Rust").count(), 2);
        assert_eq!(text.matches("React").count(), 2);
    }

    #[test]
    fn strip_width_counts_chip_padding() {
        // " ab " plus the gap, twice over for two chips.
        assert_eq!(strip_width(&["ab", "c"]), (2 + 2 + 3) + (1 + 2 + 3));
    }
}
