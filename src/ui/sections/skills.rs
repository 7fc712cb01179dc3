//! Skills section: the looping marquee strip plus one card per
//! non-empty category, each skill row sliding in with an animated level
//! bar.

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph, Widget};

use crate::app::App;
use crate::content::SkillCategory;
use crate::reveal::{Easing, RevealHandle, Transition, VisualParams};
use crate::ui::marquee;
use crate::ui::sections::{
    derived, fade_line, fade_style, header_height, ms, offset_rect, paint_header, paint_line,
    section_params,
};
use crate::ui::styles;
use crate::utils::truncate_string;

const TITLE: &str = "Skills & Expertise";
pub(crate) const SUBTITLE: &str = "A comprehensive set of technical skills and tools \
that I use to bring creative ideas to life";

const CARD_GAP: u16 = 2;
const NAME_COL: usize = 14;

fn two_column(width: u16) -> bool {
    width >= 80
}

/// Categories that actually have skills, in display order.
fn visible_categories(app: &App) -> Vec<(usize, SkillCategory)> {
    SkillCategory::ALL
        .iter()
        .enumerate()
        .filter(|(_, c)| !app.portfolio.skills.category(**c).is_empty())
        .map(|(i, c)| (i, *c))
        .collect()
}

fn card_height(app: &App, category: SkillCategory) -> u16 {
    app.portfolio.skills.category(category).len() as u16 + 3
}

/// Page row of the marquee strip relative to the section start; the app
/// uses this to hit-test mouse hover.
pub fn marquee_row(width: u16) -> u16 {
    header_height(width, Some(SUBTITLE))
}

pub fn height(app: &App, width: u16) -> u16 {
    let mut h = marquee_row(width) + 2;
    let cats = visible_categories(app);
    if two_column(width) {
        for pair in cats.chunks(2) {
            let tallest = pair
                .iter()
                .map(|(_, c)| card_height(app, *c))
                .max()
                .unwrap_or(0);
            h += tallest + 1;
        }
    } else {
        for (_, c) in &cats {
            h += card_height(app, *c) + 1;
        }
    }
    h + 1
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    let handle = app.handles.skills;
    let sec = section_params(app, handle);
    let header_rows = paint_header(app, buf, area, handle, TITLE, Some(SUBTITLE));

    paint_marquee(app, buf, area, header_rows, &sec);

    let inner = Rect::new(
        area.x + 2,
        area.y + header_rows + 2,
        area.width.saturating_sub(4),
        area.height.saturating_sub(header_rows + 2),
    );

    let cats = visible_categories(app);
    let mut y = inner.y;
    if two_column(area.width) {
        let card_w = inner.width.saturating_sub(CARD_GAP) / 2;
        for (pair_idx, pair) in cats.chunks(2).enumerate() {
            let tallest = pair
                .iter()
                .map(|(_, c)| card_height(app, *c))
                .max()
                .unwrap_or(0);
            for (slot, (cat_idx, category)) in pair.iter().enumerate() {
                let x = inner.x + slot as u16 * (card_w + CARD_GAP);
                let rect = Rect::new(x, y, card_w, card_height(app, *category));
                paint_card(app, buf, area, rect, pair_idx * 2 + slot, *cat_idx, *category);
            }
            y += tallest + 1;
        }
    } else {
        for (shown, (cat_idx, category)) in cats.into_iter().enumerate() {
            let rect = Rect::new(inner.x, y, inner.width, card_height(app, category));
            paint_card(app, buf, area, rect, shown, cat_idx, category);
            y += card_height(app, category) + 1;
        }
    }
}

/// The marquee strip fades in late, then loops on its own clock.
fn paint_marquee(app: &App, buf: &mut Buffer, area: Rect, row: u16, sec: &VisualParams) {
    let tr = Transition::fade_rise(0.0, ms(600), Easing::EaseOut).with_delay(ms(800));
    let alpha = sec.compose(&derived(app, app.handles.skills, &tr)).alpha();
    if alpha <= f32::EPSILON {
        return;
    }

    let skills = app.portfolio.skills.all();
    if skills.is_empty() {
        return;
    }
    let strip_w = marquee::strip_width(&skills);
    let offset = if strip_w > area.width {
        app.marquee.offset_cols(strip_w)
    } else {
        0
    };

    let line = fade_line(&marquee::strip_line(&skills), alpha);
    let strip = Rect::new(area.x, area.y + row, area.width, 1);
    Paragraph::new(line).scroll((0, offset)).render(strip, buf);
}

fn paint_card(
    app: &App,
    buf: &mut Buffer,
    bound: Rect,
    rect: Rect,
    shown: usize,
    cat_idx: usize,
    category: SkillCategory,
) {
    let handle = app.handles.skill_cards[cat_idx];
    let params = app
        .engine
        .params(handle, app.now)
        .unwrap_or(VisualParams::VISIBLE);
    let Some(card) = offset_rect(rect, bound, &params) else {
        return;
    };
    let alpha = params.alpha();

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(fade_style(styles::border_style(false), alpha))
        .render(card, buf);

    let inner = Rect::new(
        card.x + 1,
        card.y + 1,
        card.width.saturating_sub(2),
        card.height.saturating_sub(2),
    );
    let title = Line::from(Span::styled(
        category.label(),
        fade_style(styles::title_style(), alpha),
    ));
    paint_line(buf, inner, 0, &title, &VisualParams::VISIBLE, Alignment::Left);

    for (skill_idx, skill) in app.portfolio.skills.category(category).iter().enumerate() {
        // Rows cascade across the whole grid, not just within one card.
        let row_delay = ms(shown as u64 * 100 + skill_idx as u64 * 50);
        paint_skill_row(app, buf, inner, handle, skill_idx, skill, cat_idx, row_delay, alpha);
    }
}

/// One `name ███░░ 72%` row. The row slides in on its own offset and
/// the bar fills toward its level over the following second.
#[allow(clippy::too_many_arguments)]
fn paint_skill_row(
    app: &App,
    buf: &mut Buffer,
    inner: Rect,
    handle: RevealHandle,
    skill_idx: usize,
    skill: &str,
    cat_idx: usize,
    row_delay: Duration,
    card_alpha: f32,
) {
    let row_tr = Transition::slide_in(2.0, ms(400), Easing::EaseOut).with_delay(row_delay);
    let mut params = derived(app, handle, &row_tr);
    params.opacity *= card_alpha;

    let level = app.skill_level(cat_idx, skill_idx);
    let fill = match app.engine.elapsed_since_trigger(handle, app.now) {
        Some(elapsed) => {
            let raw = (elapsed.as_secs_f32() - row_delay.as_secs_f32() - 0.4) / 1.0;
            Easing::EaseOut.apply(raw.clamp(0.0, 1.0))
        }
        None => 0.0,
    };

    let name = format!("{:<width$}", truncate_string(skill, NAME_COL), width = NAME_COL);
    let bar_w = inner.width.saturating_sub(NAME_COL as u16 + 6) as usize;
    let filled = (bar_w as f32 * level as f32 / 100.0 * fill).round() as usize;
    let shown_pct = (level as f32 * fill).round() as u8;

    let line = Line::from(vec![
        Span::styled(name, styles::body_style()),
        Span::raw(" "),
        Span::styled("█".repeat(filled.min(bar_w)), styles::divider_style()),
        Span::styled("░".repeat(bar_w.saturating_sub(filled)), styles::muted_style()),
        Span::styled(format!(" {shown_pct:>3}%"), styles::muted_style()),
    ]);
    paint_line(buf, inner, 1 + skill_idx as u16, &line, &params, Alignment::Left);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marquee_row_sits_under_the_header() {
        assert_eq!(marquee_row(100), header_height(100, Some(SUBTITLE)));
    }

    #[test]
    fn layout_breakpoint() {
        assert!(two_column(80));
        assert!(!two_column(79));
    }
}
