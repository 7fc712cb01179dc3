//! Ambient background blobs that drift behind the page content.
//!
//! Blobs are decorative: they loop forever, ignore scroll visibility,
//! and scroll at half speed for a parallax feel. Each blob gets a
//! random period and phase at startup so the field never moves in
//! lockstep.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::reveal::ping_pong;
use crate::ui::styles;

const MIN_PERIOD_SECS: f32 = 10.0;
const MAX_PERIOD_SECS: f32 = 20.0;
const MAX_PHASE_SECS: f32 = 5.0;
const ROWS_PER_BLOB: u16 = 18;

struct Blob {
    home_col: f32,
    home_row: f32,
    col_amp: f32,
    row_amp: f32,
    radius: u16,
    period: Duration,
    phase: Duration,
    tone: f32,
}

pub struct Decor {
    blobs: Vec<Blob>,
    started: Instant,
    frozen: bool,
}

impl Decor {
    /// Scatter blobs over a page of the given size using the supplied rng.
    pub fn new<R: Rng>(rng: &mut R, page_width: u16, page_height: u16) -> Self {
        let count = (page_height / ROWS_PER_BLOB).clamp(4, 12) as usize;
        let blobs = (0..count)
            .map(|_| Blob {
                home_col: rng.gen_range(0.0..page_width.max(1) as f32),
                home_row: rng.gen_range(0.0..page_height.max(1) as f32),
                col_amp: rng.gen_range(3.0..9.0),
                row_amp: rng.gen_range(1.5..4.0),
                radius: rng.gen_range(2..5),
                period: Duration::from_secs_f32(
                    rng.gen_range(MIN_PERIOD_SECS..=MAX_PERIOD_SECS),
                ),
                phase: Duration::from_secs_f32(rng.gen_range(0.0..=MAX_PHASE_SECS)),
                tone: rng.gen_range(0.10..0.25),
            })
            .collect();
        Self {
            blobs,
            started: Instant::now(),
            frozen: false,
        }
    }

    pub fn generate(page_width: u16, page_height: u16) -> Self {
        Self::new(&mut rand::thread_rng(), page_width, page_height)
    }

    /// Freeze all drift. Blobs still paint at their phase position.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn blob_count(&self) -> usize {
        self.blobs.len()
    }

    /// Paint the blob field into `area`. `parallax_row` is the page row
    /// at the top of the viewport for this layer (already halved by the
    /// caller); blobs live in page space and are translated by it.
    pub fn paint(&self, buf: &mut Buffer, area: Rect, parallax_row: f32, now: Instant) {
        let elapsed = if self.frozen {
            Duration::ZERO
        } else {
            now.saturating_duration_since(self.started)
        };
        for blob in &self.blobs {
            let t = elapsed + blob.phase;
            let swing_x = ping_pong(t.as_secs_f32(), blob.period.as_secs_f32()) * 2.0 - 1.0;
            let quarter = Duration::from_secs_f32(blob.period.as_secs_f32() / 4.0);
            let swing_y =
                ping_pong((t + quarter).as_secs_f32(), blob.period.as_secs_f32()) * 2.0 - 1.0;
            let col = blob.home_col + blob.col_amp * swing_x;
            let row = blob.home_row + blob.row_amp * swing_y - parallax_row;
            paint_blob(buf, area, col, row, blob.radius, blob.tone);
        }
    }
}

/// A blob is a rough diamond of shade glyphs, denser in the middle,
/// tinted toward the accent color and heavily faded into the page.
fn paint_blob(buf: &mut Buffer, area: Rect, col: f32, row: f32, radius: u16, tone: f32) {
    let r = radius as i32;
    for dy in -r..=r {
        // Terminal cells are about twice as tall as wide.
        let span = (r - dy.abs()) * 2;
        for dx in -span..=span {
            let x = col.round() as i32 + dx;
            let y = row.round() as i32 + dy;
            if x < area.left() as i32
                || x >= area.right() as i32
                || y < area.top() as i32
                || y >= area.bottom() as i32
            {
                continue;
            }
            let dist = (dx.abs() / 2 + dy.abs()) as u16;
            let glyph = if dist < radius / 2 { "▒" } else { "░" };
            let alpha = tone * (1.0 - dist as f32 / (radius + 1) as f32);
            if let Some(cell) = buf.cell_mut((x as u16, y as u16)) {
                cell.set_symbol(glyph);
                cell.set_style(Style::default().fg(styles::fade(styles::PINK, alpha)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn periods_and_phases_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let decor = Decor::new(&mut rng, 80, 200);
        assert!(!decor.blobs.is_empty());
        for blob in &decor.blobs {
            let period = blob.period.as_secs_f32();
            assert!((MIN_PERIOD_SECS..=MAX_PERIOD_SECS).contains(&period));
            assert!(blob.phase.as_secs_f32() <= MAX_PHASE_SECS);
        }
    }

    #[test]
    fn blob_count_scales_with_page_height() {
        let mut rng = StdRng::seed_from_u64(7);
        let short = Decor::new(&mut rng, 80, 40);
        let tall = Decor::new(&mut rng, 80, 400);
        assert!(short.blob_count() < tall.blob_count());
    }

    #[test]
    fn frozen_field_does_not_move() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut decor = Decor::new(&mut rng, 60, 120);
        decor.set_frozen(true);
        let area = Rect::new(0, 0, 60, 30);
        let now = Instant::now();
        let mut first = Buffer::empty(area);
        decor.paint(&mut first, area, 0.0, now);
        let mut later = Buffer::empty(area);
        decor.paint(&mut later, area, 0.0, now + Duration::from_secs(4));
        assert_eq!(first, later);
    }

    #[test]
    fn painting_respects_area_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let decor = Decor::new(&mut rng, 200, 300);
        let area = Rect::new(5, 5, 10, 10);
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 40));
        decor.paint(&mut buf, area, 0.0, Instant::now());
        for y in 0..40u16 {
            for x in 0..40u16 {
                let inside = x >= 5 && x < 15 && y >= 5 && y < 15;
                if !inside {
                    if let Some(cell) = buf.cell((x, y)) {
                        assert_eq!(cell.symbol(), " ", "cell ({x},{y}) painted out of bounds");
                    }
                }
            }
        }
    }
}
