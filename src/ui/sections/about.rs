//! About section: photo, bio paragraphs and direct contact lines.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::app::App;
use crate::content::Asset;
use crate::reveal::{Easing, Transition, VisualParams};
use crate::ui::sections::{
    derived, fade_style, header_height, ms, offset_rect, paint_header, paint_line, section_params,
};
use crate::ui::styles;
use crate::utils::wrap_text;

const TITLE: &str = "About Me";
const SPECIALIZE: &str = "I specialize in creating beautiful, functional, and \
user-centered digital experiences. With a passion for clean code and innovative \
design, I bring ideas to life through modern web technologies and creative \
problem-solving.";

const PHOTO_WIDTH: u16 = 24;
const PHOTO_HEIGHT: u16 = 10;
const COLUMN_GAP: u16 = 3;

fn two_column(width: u16) -> bool {
    width >= 70
}

fn text_width(width: u16) -> usize {
    if two_column(width) {
        width.saturating_sub(PHOTO_WIDTH + COLUMN_GAP + 4) as usize
    } else {
        width.saturating_sub(6) as usize
    }
    .max(16)
}

fn text_rows(app: &App, width: u16) -> u16 {
    let w = text_width(width);
    let bio = wrap_text(&app.portfolio.personal.bio, w).len() as u16;
    let para = wrap_text(SPECIALIZE, w).len() as u16;
    // name, spacing, three contact rows and the CV button
    9 + bio + para
}

pub fn height(app: &App, width: u16) -> u16 {
    let header = header_height(width, None);
    let text = text_rows(app, width);
    if two_column(width) {
        header + text.max(PHOTO_HEIGHT) + 2
    } else {
        header + PHOTO_HEIGHT + 1 + text + 2
    }
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    let handle = app.handles.about;
    let sec = section_params(app, handle);
    let header_rows = paint_header(app, buf, area, handle, TITLE, None);

    let body = Rect::new(
        area.x + 2,
        area.y + header_rows,
        area.width.saturating_sub(4),
        area.height.saturating_sub(header_rows),
    );

    if two_column(area.width) {
        let photo = Rect::new(body.x, body.y, PHOTO_WIDTH, PHOTO_HEIGHT);
        paint_photo(app, buf, area, photo, &sec);

        let text = Rect::new(
            body.x + PHOTO_WIDTH + COLUMN_GAP,
            body.y,
            body.width.saturating_sub(PHOTO_WIDTH + COLUMN_GAP),
            body.height,
        );
        paint_text_column(app, buf, area, text, &sec);
    } else {
        let photo_x = body.x + body.width.saturating_sub(PHOTO_WIDTH) / 2;
        let photo = Rect::new(photo_x, body.y, PHOTO_WIDTH, PHOTO_HEIGHT);
        paint_photo(app, buf, area, photo, &sec);

        let text = Rect::new(
            body.x,
            body.y + PHOTO_HEIGHT + 1,
            body.width,
            body.height.saturating_sub(PHOTO_HEIGHT + 1),
        );
        paint_text_column(app, buf, area, text, &sec);
    }
}

/// Framed portrait slot. Without a resolvable photo it holds the
/// person's initials, which is also what the frame shows behind a real
/// image path.
fn paint_photo(app: &App, buf: &mut Buffer, bound: Rect, slot: Rect, sec: &VisualParams) {
    let tr = Transition::new(
        VisualParams::new(0.0, 0.0, 0.0, 0.8),
        VisualParams::VISIBLE,
        ms(600),
        Easing::EaseOut,
    )
    .with_delay(ms(300));
    let params = sec.compose(&derived(app, app.handles.about, &tr));
    let Some(rect) = offset_rect(slot, bound, &params) else {
        return;
    };
    let alpha = params.alpha();

    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(fade_style(styles::border_style(false), alpha))
        .render(rect, buf);

    let initials: String = app
        .portfolio
        .personal
        .name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect();
    let inner = Rect::new(
        rect.x + 1,
        rect.y + 1,
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    );
    let mid = inner.height / 2;
    let initials_line = Line::from(Span::styled(
        initials,
        fade_style(styles::title_style(), alpha),
    ));
    paint_line(
        buf,
        inner,
        mid.saturating_sub(1),
        &initials_line,
        &VisualParams::VISIBLE,
        Alignment::Center,
    );

    let caption = match app.assets.resolve(app.portfolio.personal.photo.as_deref()) {
        Asset::Found(path) => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
        Asset::Missing => "no photo".to_string(),
    };
    let caption_line = Line::from(Span::styled(
        caption,
        fade_style(styles::placeholder_style(), alpha),
    ));
    paint_line(
        buf,
        inner,
        mid + 1,
        &caption_line,
        &VisualParams::VISIBLE,
        Alignment::Center,
    );
}

fn paint_text_column(app: &App, buf: &mut Buffer, bound: Rect, col: Rect, sec: &VisualParams) {
    let handle = app.handles.about;
    let person = &app.portfolio.personal;
    let w = col.width as usize;
    let mut row = 0;

    let name_tr = Transition::fade_rise(1.0, ms(600), Easing::EaseOut).with_delay(ms(500));
    let name_line = Line::from(Span::styled(person.name.clone(), styles::heading_style()));
    paint_line(
        buf,
        col_area(bound, col),
        row,
        &name_line,
        &sec.compose(&derived(app, handle, &name_tr)),
        Alignment::Left,
    );
    row += 2;

    let bio_tr = Transition::fade_rise(1.0, ms(600), Easing::EaseOut).with_delay(ms(600));
    let bio_params = sec.compose(&derived(app, handle, &bio_tr));
    for text in wrap_text(&person.bio, w) {
        let line = Line::from(Span::styled(text, styles::body_style()));
        paint_line(buf, col_area(bound, col), row, &line, &bio_params, Alignment::Left);
        row += 1;
    }
    row += 1;

    let para_tr = Transition::fade_rise(1.0, ms(600), Easing::EaseOut).with_delay(ms(700));
    let para_params = sec.compose(&derived(app, handle, &para_tr));
    for text in wrap_text(SPECIALIZE, w) {
        let line = Line::from(Span::styled(text, styles::body_style()));
        paint_line(buf, col_area(bound, col), row, &line, &para_params, Alignment::Left);
        row += 1;
    }
    row += 1;

    let contacts = [
        ("✉", person.email.as_str(), true),
        ("☎", person.phone.as_str(), false),
        ("⌖", person.location.as_str(), false),
    ];
    for (i, (icon, value, is_link)) in contacts
        .iter()
        .filter(|(_, v, _)| !v.is_empty())
        .enumerate()
    {
        let tr = Transition::slide_in(2.0, ms(500), Easing::EaseOut)
            .with_delay(ms(900 + i as u64 * 100));
        let style = if *is_link {
            styles::link_style()
        } else {
            styles::body_style()
        };
        let line = Line::from(vec![
            Span::styled(format!("{icon} "), styles::accent_style()),
            Span::styled(value.to_string(), style),
        ]);
        paint_line(
            buf,
            col_area(bound, col),
            row,
            &line,
            &sec.compose(&derived(app, handle, &tr)),
            Alignment::Left,
        );
        row += 1;
    }
    row += 1;

    let button_tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut).with_delay(ms(1200));
    let button = Line::from(Span::styled(" ⤓ Download CV ", styles::button_style(true)));
    paint_line(
        buf,
        col_area(bound, col),
        row,
        &button,
        &sec.compose(&derived(app, handle, &button_tr)),
        Alignment::Left,
    );
}

/// Paint area for a column: the column's horizontal slice, clipped
/// vertically to the whole section so rises behave like everywhere else.
fn col_area(bound: Rect, col: Rect) -> Rect {
    Rect::new(col.x, col.y, col.width, bound.bottom().saturating_sub(col.y))
}
