//! Footer: brand, quick links and contact columns over a deeper
//! background, then the divider and the copyright line.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::reveal::{Easing, Transition, VisualParams};
use crate::ui::sections::{derived, fade_style, ms, paint_line, section_params, Section};
use crate::ui::styles;
use crate::utils::{current_year, wrap_text};

use super::hero::platform_label;

const QUICK_LINKS_TITLE: &str = "Quick Links";
const CONTACT_TITLE: &str = "Contact Info";

const COLUMN_GAP: u16 = 4;

fn three_column(width: u16) -> bool {
    width >= 90
}

fn column_width(width: u16) -> u16 {
    if three_column(width) {
        (width.saturating_sub(4 + 2 * COLUMN_GAP)) / 3
    } else {
        width.saturating_sub(4)
    }
    .max(16)
}

fn brand_rows(app: &App, width: u16) -> u16 {
    let bio = wrap_text(&app.portfolio.personal.bio, column_width(width) as usize).len() as u16;
    2 + bio + 1
}

fn links_rows() -> u16 {
    1 + Section::NAV.len() as u16 - 1
}

fn contact_rows() -> u16 {
    4
}

pub fn height(app: &App, width: u16) -> u16 {
    let cols = if three_column(width) {
        brand_rows(app, width)
            .max(links_rows())
            .max(contact_rows())
    } else {
        brand_rows(app, width) + 1 + links_rows() + 1 + contact_rows()
    };
    2 + cols + 2 + 3 + 1
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    // The footer sits on the deep background tone.
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(styles::BG_DEEP);
            }
        }
    }

    let handle = app.handles.footer;
    let sec = section_params(app, handle);
    let col_w = column_width(area.width);
    let top = area.y + 2;

    if three_column(area.width) {
        let xs = [
            area.x + 2,
            area.x + 2 + col_w + COLUMN_GAP,
            area.x + 2 + 2 * (col_w + COLUMN_GAP),
        ];
        paint_brand(app, buf, area, Rect::new(xs[0], top, col_w, brand_rows(app, area.width)), &sec);
        paint_links(app, buf, area, Rect::new(xs[1], top, col_w, links_rows()), &sec);
        paint_contact(app, buf, area, Rect::new(xs[2], top, col_w, contact_rows()), &sec);
    } else {
        let mut y = top;
        paint_brand(app, buf, area, Rect::new(area.x + 2, y, col_w, brand_rows(app, area.width)), &sec);
        y += brand_rows(app, area.width) + 1;
        paint_links(app, buf, area, Rect::new(area.x + 2, y, col_w, links_rows()), &sec);
        y += links_rows() + 1;
        paint_contact(app, buf, area, Rect::new(area.x + 2, y, col_w, contact_rows()), &sec);
    }

    paint_bottom(app, buf, area, &sec);
}

fn col_area(bound: Rect, col: Rect) -> Rect {
    Rect::new(col.x, col.y, col.width, bound.bottom().saturating_sub(col.y))
}

fn paint_brand(app: &App, buf: &mut Buffer, bound: Rect, col: Rect, sec: &VisualParams) {
    let tr = Transition::fade_rise(1.5, ms(600), Easing::EaseOut);
    let params = sec.compose(&derived(app, app.handles.footer, &tr));
    let area = col_area(bound, col);
    let person = &app.portfolio.personal;

    let name = Line::from(Span::styled(person.name.clone(), styles::title_style()));
    paint_line(buf, area, 0, &name, &params, Alignment::Left);

    let mut row = 2;
    for text in wrap_text(&person.bio, col.width as usize) {
        let line = Line::from(Span::styled(text, styles::muted_style()));
        paint_line(buf, area, row, &line, &params, Alignment::Left);
        row += 1;
    }
    row += 1;

    let mut spans: Vec<Span> = Vec::new();
    for (i, platform) in app.portfolio.social.keys().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("⦿ {}", platform_label(platform)),
            styles::link_style(),
        ));
    }
    if !spans.is_empty() {
        paint_line(buf, area, row, &Line::from(spans), &params, Alignment::Left);
    }
}

fn paint_links(app: &App, buf: &mut Buffer, bound: Rect, col: Rect, sec: &VisualParams) {
    let handle = app.handles.footer;
    let col_tr = Transition::fade_rise(1.5, ms(600), Easing::EaseOut).with_delay(ms(200));
    let col_params = sec.compose(&derived(app, handle, &col_tr));
    let area = col_area(bound, col);

    let heading = Line::from(Span::styled(QUICK_LINKS_TITLE, styles::accent_style()));
    paint_line(buf, area, 0, &heading, &col_params, Alignment::Left);

    // The nav sections minus the hero itself, each with the key that
    // jumps to it.
    for (i, section) in Section::NAV.iter().skip(1).enumerate() {
        let tr = Transition::slide_in(2.0, ms(400), Easing::EaseOut)
            .with_delay(ms(300 + i as u64 * 100));
        let params = sec.compose(&derived(app, handle, &tr));
        let line = Line::from(vec![
            Span::styled("› ", styles::accent_style()),
            Span::styled(section.label(), styles::body_style()),
            Span::styled(format!(" [{}]", i + 2), styles::muted_style()),
        ]);
        paint_line(buf, area, 1 + i as u16, &line, &params, Alignment::Left);
    }
}

fn paint_contact(app: &App, buf: &mut Buffer, bound: Rect, col: Rect, sec: &VisualParams) {
    let handle = app.handles.footer;
    let col_tr = Transition::fade_rise(1.5, ms(600), Easing::EaseOut).with_delay(ms(400));
    let col_params = sec.compose(&derived(app, handle, &col_tr));
    let area = col_area(bound, col);

    let heading = Line::from(Span::styled(CONTACT_TITLE, styles::accent_style()));
    paint_line(buf, area, 0, &heading, &col_params, Alignment::Left);

    let person = &app.portfolio.personal;
    let rows = [
        ("✉", person.email.as_str()),
        ("☎", person.phone.as_str()),
        ("⌖", person.location.as_str()),
    ];
    for (i, (icon, value)) in rows.iter().filter(|(_, v)| !v.is_empty()).enumerate() {
        let tr = Transition::slide_in(2.0, ms(400), Easing::EaseOut)
            .with_delay(ms(500 + i as u64 * 100));
        let params = sec.compose(&derived(app, handle, &tr));
        let line = Line::from(vec![
            Span::styled(format!("{icon} "), styles::accent_style()),
            Span::styled(value.to_string(), styles::muted_style()),
        ]);
        paint_line(buf, area, 1 + i as u16, &line, &params, Alignment::Left);
    }
}

fn paint_bottom(app: &App, buf: &mut Buffer, area: Rect, sec: &VisualParams) {
    let handle = app.handles.footer;
    let divider_row = area.height.saturating_sub(4);

    // Divider scales out from the center.
    let grown = match app.engine.elapsed_since_trigger(handle, app.now) {
        Some(elapsed) => {
            let raw = (elapsed.as_secs_f32() - 0.5) / 0.8;
            Easing::EaseOut.apply(raw.clamp(0.0, 1.0))
        }
        None => 0.0,
    };
    let cols = (area.width.saturating_sub(8) as f32 * grown).round() as usize;
    if cols > 0 {
        let divider = Line::from(Span::styled(
            "─".repeat(cols),
            fade_style(styles::muted_style(), sec.alpha()),
        ));
        paint_line(buf, area, divider_row, &divider, &VisualParams::VISIBLE, Alignment::Center);
    }

    let copyright_tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut).with_delay(ms(700));
    let copyright = Line::from(Span::styled(
        format!(
            "© {} {}. All rights reserved.",
            current_year(),
            app.portfolio.personal.name
        ),
        styles::muted_style(),
    ));
    paint_line(
        buf,
        area,
        divider_row + 1,
        &copyright,
        &sec.compose(&derived(app, handle, &copyright_tr)),
        Alignment::Center,
    );

    let byline_tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut).with_delay(ms(800));
    let byline = Line::from(vec![
        Span::styled("Made with ", styles::muted_style()),
        Span::styled("♥", styles::divider_style()),
        Span::styled(" using Rust & Ratatui", styles::muted_style()),
    ]);
    paint_line(
        buf,
        area,
        divider_row + 2,
        &byline,
        &sec.compose(&derived(app, handle, &byline_tr)),
        Alignment::Center,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quick_links_skip_the_hero() {
        let links: Vec<&str> = Section::NAV.iter().skip(1).map(|s| s.label()).collect();
        assert_eq!(
            links,
            vec!["About", "Skills", "Projects", "Certificates", "Contact"]
        );
    }
}
