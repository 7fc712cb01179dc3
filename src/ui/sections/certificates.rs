//! Certificates section: the credential card grid plus the achievements
//! panel underneath. The panel entries ride the section's trigger on
//! late delays rather than owning observers.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::app::App;
use crate::content::Credential;
use crate::reveal::{Easing, Transition, VisualParams};
use crate::ui::sections::{
    derived, fade_style, header_height, ms, offset_rect, paint_header, paint_line, section_params,
};
use crate::ui::styles;
use crate::utils::{truncate_string, wrap_text};

const TITLE: &str = "Certificates & Achievements";
const SUBTITLE: &str = "Professional certifications and achievements that validate \
my expertise";
const PANEL_TITLE: &str = "Additional Achievements";

pub(crate) const CARD_HEIGHT: u16 = 8;
const CARD_GAP: u16 = 2;
const ENTRY_HEIGHT: u16 = 6;
const ENTRY_WIDTH: u16 = 22;

fn two_column(width: u16) -> bool {
    width >= 84
}

fn grid_rows(app: &App, width: u16) -> u16 {
    let n = app.portfolio.certificates.len() as u16;
    if two_column(width) {
        n.div_ceil(2)
    } else {
        n
    }
}

fn panel_height(app: &App, width: u16) -> u16 {
    if app.portfolio.achievements.is_empty() {
        return 0;
    }
    let n = app.portfolio.achievements.len() as u16;
    let fits = (width.saturating_sub(4) / (ENTRY_WIDTH + CARD_GAP)).max(1);
    let entry_rows = n.div_ceil(fits);
    2 + entry_rows * (ENTRY_HEIGHT + 1)
}

pub fn height(app: &App, width: u16) -> u16 {
    let mut h = header_height(width, Some(SUBTITLE));
    h += grid_rows(app, width) * (CARD_HEIGHT + 1);
    h += panel_height(app, width);
    h + 1
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    let handle = app.handles.certificates;
    let sec = section_params(app, handle);
    let header_rows = paint_header(app, buf, area, handle, TITLE, Some(SUBTITLE));

    let inner = Rect::new(
        area.x + 2,
        area.y + header_rows,
        area.width.saturating_sub(4),
        area.height.saturating_sub(header_rows),
    );

    let (cols, card_w) = if two_column(area.width) {
        (2u16, inner.width.saturating_sub(CARD_GAP) / 2)
    } else {
        (1u16, inner.width)
    };
    for (i, credential) in app.portfolio.certificates.iter().enumerate() {
        let col = i as u16 % cols;
        let grid_row = i as u16 / cols;
        let rect = Rect::new(
            inner.x + col * (card_w + CARD_GAP),
            inner.y + grid_row * (CARD_HEIGHT + 1),
            card_w,
            CARD_HEIGHT,
        );
        paint_card(app, buf, area, rect, i, credential);
    }

    let panel_top = inner.y + grid_rows(app, area.width) * (CARD_HEIGHT + 1);
    paint_achievements(app, buf, area, inner, panel_top, &sec);
}

fn paint_card(app: &App, buf: &mut Buffer, bound: Rect, rect: Rect, idx: usize, cred: &Credential) {
    let Some(&handle) = app.handles.certificate_cards.get(idx) else {
        return;
    };
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
    let w = inner.width as usize;

    // Banner row standing in for the certificate image.
    let bg = styles::fade(styles::PINK, 0.22 * alpha);
    if inner.height > 0 {
        for x in inner.left()..inner.right() {
            if let Some(cell) = buf.cell_mut((x, inner.y)) {
                cell.set_bg(bg);
            }
        }
    }
    let banner = Line::from(Span::styled("🏆", fade_style(styles::accent_style(), alpha)));
    paint_line(buf, inner, 0, &banner, &VisualParams::VISIBLE, Alignment::Center);

    let title = Line::from(Span::styled(
        truncate_string(&cred.title, w),
        fade_style(styles::heading_style(), alpha),
    ));
    paint_line(buf, inner, 1, &title, &VisualParams::VISIBLE, Alignment::Left);

    let issuer = Line::from(Span::styled(
        truncate_string(&cred.issuer, w),
        fade_style(styles::accent_style(), alpha),
    ));
    paint_line(buf, inner, 2, &issuer, &VisualParams::VISIBLE, Alignment::Left);

    let date = Line::from(Span::styled(
        format!("⧖ {}", cred.date),
        fade_style(styles::muted_style(), alpha),
    ));
    paint_line(buf, inner, 3, &date, &VisualParams::VISIBLE, Alignment::Left);

    let detail_row = 4;
    if let Some(description) = &cred.description {
        if let Some(first) = wrap_text(description, w).into_iter().next() {
            let line = Line::from(Span::styled(
                first,
                fade_style(styles::body_style(), alpha),
            ));
            paint_line(buf, inner, detail_row, &line, &VisualParams::VISIBLE, Alignment::Left);
        }
    }
    if cred.url.is_some() {
        let link = Line::from(Span::styled(
            "⌁ View credential",
            fade_style(styles::link_style(), alpha),
        ));
        paint_line(buf, inner, detail_row + 1, &link, &VisualParams::VISIBLE, Alignment::Left);
    }
}

fn paint_achievements(
    app: &App,
    buf: &mut Buffer,
    bound: Rect,
    inner: Rect,
    top: u16,
    sec: &VisualParams,
) {
    let achievements = &app.portfolio.achievements;
    if achievements.is_empty() {
        return;
    }
    let handle = app.handles.certificates;

    let panel_tr = Transition::fade_rise(1.0, ms(800), Easing::EaseOut).with_delay(ms(800));
    let panel = sec.compose(&derived(app, handle, &panel_tr));
    let heading = Line::from(Span::styled(PANEL_TITLE, styles::heading_style()));
    paint_line(buf, bound, top - bound.y, &heading, &panel, Alignment::Center);

    let fits = (inner.width / (ENTRY_WIDTH + CARD_GAP)).max(1);
    let row_w = fits.min(achievements.len() as u16) * (ENTRY_WIDTH + CARD_GAP) - CARD_GAP;
    let start_x = inner.x + inner.width.saturating_sub(row_w) / 2;

    for (i, achievement) in achievements.iter().enumerate() {
        let col = i as u16 % fits;
        let grid_row = i as u16 / fits;
        let rect = Rect::new(
            start_x + col * (ENTRY_WIDTH + CARD_GAP),
            top + 2 + grid_row * (ENTRY_HEIGHT + 1),
            ENTRY_WIDTH,
            ENTRY_HEIGHT,
        );

        let tr = Transition::new(
            VisualParams::new(0.0, 1.0, 0.0, 0.9),
            VisualParams::VISIBLE,
            ms(500),
            Easing::EaseOut,
        )
        .with_delay(ms(1000 + i as u64 * 100));
        let params = sec.compose(&derived(app, handle, &tr));
        let Some(card) = offset_rect(rect, bound, &params) else {
            continue;
        };
        let alpha = params.alpha();

        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(fade_style(styles::border_style(false), alpha))
            .render(card, buf);
        let body = Rect::new(
            card.x + 1,
            card.y + 1,
            card.width.saturating_sub(2),
            card.height.saturating_sub(2),
        );
        let w = body.width as usize;

        let marker = Line::from(Span::styled(
            "🏅",
            fade_style(styles::accent_style(), alpha),
        ));
        paint_line(buf, body, 0, &marker, &VisualParams::VISIBLE, Alignment::Center);
        let title = Line::from(Span::styled(
            truncate_string(&achievement.title, w),
            fade_style(styles::heading_style(), alpha),
        ));
        paint_line(buf, body, 1, &title, &VisualParams::VISIBLE, Alignment::Center);
        let issuer = Line::from(Span::styled(
            truncate_string(&achievement.issuer, w),
            fade_style(styles::accent_style(), alpha),
        ));
        paint_line(buf, body, 2, &issuer, &VisualParams::VISIBLE, Alignment::Center);
        let date = Line::from(Span::styled(
            achievement.date.clone(),
            fade_style(styles::muted_style(), alpha),
        ));
        paint_line(buf, body, 3, &date, &VisualParams::VISIBLE, Alignment::Center);
    }
}
