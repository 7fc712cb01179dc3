//! Contact section: info cards on the left, the message form on the
//! right. After a submission completes the form area shows the
//! confirmation panel until the display window elapses.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::app::{App, AppState};
use crate::form::{FormField, FormFocus, FormState};
use crate::reveal::{Easing, Transition, VisualParams};
use crate::ui::sections::{
    derived, fade_style, header_height, ms, offset_rect, paint_header, paint_line, section_params,
};
use crate::ui::styles;
use crate::utils::{truncate_string, wrap_text};

const TITLE: &str = "Get In Touch";
const SUBTITLE: &str = "Let's work together! Feel free to reach out for collaborations \
or just a friendly hello";
const CONNECT_TITLE: &str = "Let's Connect";
const CONNECT_INTRO: &str = "Whether you have a question or just want to say hi, \
I'll try my best to get back to you!";
const FORM_TITLE: &str = "Send Message";
const SENT_TITLE: &str = "Message Sent!";
const SENT_BODY: &str = "Thank you for reaching out. I'll get back to you soon!";

const COLUMN_GAP: u16 = 4;
const INFO_CARD_HEIGHT: u16 = 4;
const MESSAGE_ROWS: u16 = 4;

fn two_column(width: u16) -> bool {
    width >= 90
}

fn column_width(width: u16) -> u16 {
    if two_column(width) {
        (width.saturating_sub(4 + COLUMN_GAP)) / 2
    } else {
        width.saturating_sub(4)
    }
}

fn info_rows(width: u16) -> u16 {
    let intro = wrap_text(CONNECT_INTRO, column_width(width).max(16) as usize).len() as u16;
    2 + intro + 1 + 3 * (INFO_CARD_HEIGHT + 1)
}

fn form_rows() -> u16 {
    // title, spacing, three single-line fields, the message box, button
    2 + 3 * 3 + (2 + MESSAGE_ROWS) + 2
}

pub fn height(app: &App, width: u16) -> u16 {
    let _ = app;
    let header = header_height(width, Some(SUBTITLE));
    if two_column(width) {
        header + info_rows(width).max(form_rows()) + 2
    } else {
        header + info_rows(width) + 2 + form_rows() + 2
    }
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    let handle = app.handles.contact;
    let sec = section_params(app, handle);
    let header_rows = paint_header(app, buf, area, handle, TITLE, Some(SUBTITLE));

    let body_y = area.y + header_rows;
    let col_w = column_width(area.width);

    if two_column(area.width) {
        let info = Rect::new(area.x + 2, body_y, col_w, area.bottom().saturating_sub(body_y));
        paint_info_column(app, buf, area, info, &sec);

        let form_x = area.x + 2 + col_w + COLUMN_GAP;
        let form = Rect::new(form_x, body_y, col_w, area.bottom().saturating_sub(body_y));
        paint_form_column(app, buf, area, form, &sec);
    } else {
        let info = Rect::new(area.x + 2, body_y, col_w, info_rows(area.width));
        paint_info_column(app, buf, area, info, &sec);

        let form_y = body_y + info_rows(area.width) + 2;
        let form = Rect::new(
            area.x + 2,
            form_y,
            col_w,
            area.bottom().saturating_sub(form_y),
        );
        paint_form_column(app, buf, area, form, &sec);
    }
}

fn paint_info_column(app: &App, buf: &mut Buffer, bound: Rect, col: Rect, sec: &VisualParams) {
    let handle = app.handles.contact;
    let col_tr = Transition::slide_in(5.0, ms(800), Easing::EaseOut).with_delay(ms(300));
    let col_params = sec.compose(&derived(app, handle, &col_tr));
    let area = Rect::new(col.x, col.y, col.width, bound.bottom().saturating_sub(col.y));

    let title = Line::from(Span::styled(CONNECT_TITLE, styles::heading_style()));
    paint_line(buf, area, 0, &title, &col_params, Alignment::Left);

    let mut row = 2;
    for text in wrap_text(CONNECT_INTRO, col.width.max(16) as usize) {
        let line = Line::from(Span::styled(text, styles::body_style()));
        paint_line(buf, area, row, &line, &col_params, Alignment::Left);
        row += 1;
    }
    row += 1;

    let person = &app.portfolio.personal;
    let cards = [
        ("✉", "Email", person.email.as_str()),
        ("☎", "Phone", person.phone.as_str()),
        ("⌖", "Location", person.location.as_str()),
    ];
    for (i, (icon, label, value)) in cards.iter().enumerate() {
        let tr = Transition::slide_in(3.0, ms(500), Easing::EaseOut)
            .with_delay(ms(500 + i as u64 * 100));
        let params = sec.compose(&derived(app, handle, &tr));
        let rect = Rect::new(col.x, col.y + row, col.width, INFO_CARD_HEIGHT);
        if let Some(card) = offset_rect(rect, bound, &params) {
            let alpha = params.alpha();
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(fade_style(styles::border_style(false), alpha))
                .render(card, buf);
            let inner = Rect::new(
                card.x + 2,
                card.y + 1,
                card.width.saturating_sub(3),
                card.height.saturating_sub(2),
            );
            let head = Line::from(vec![
                Span::styled(format!("{icon} "), fade_style(styles::accent_style(), alpha)),
                Span::styled(*label, fade_style(styles::muted_style(), alpha)),
            ]);
            paint_line(buf, inner, 0, &head, &VisualParams::VISIBLE, Alignment::Left);
            let text = if value.is_empty() { "—" } else { value };
            let val = Line::from(Span::styled(
                truncate_string(text, inner.width as usize),
                fade_style(styles::body_style(), alpha),
            ));
            paint_line(buf, inner, 1, &val, &VisualParams::VISIBLE, Alignment::Left);
        }
        row += INFO_CARD_HEIGHT + 1;
    }
}

fn paint_form_column(app: &App, buf: &mut Buffer, bound: Rect, col: Rect, sec: &VisualParams) {
    let handle = app.handles.contact;
    let area = Rect::new(col.x, col.y, col.width, bound.bottom().saturating_sub(col.y));

    let title_tr = Transition::fade_rise(1.0, ms(600), Easing::EaseOut).with_delay(ms(300));
    let title = Line::from(Span::styled(FORM_TITLE, styles::heading_style()));
    paint_line(
        buf,
        area,
        0,
        &title,
        &sec.compose(&derived(app, handle, &title_tr)),
        Alignment::Left,
    );

    if app.form.state() == FormState::Submitted {
        paint_sent_panel(app, buf, area, sec);
        return;
    }

    let editing = matches!(app.state, AppState::EditingForm);
    let mut row = 2;
    for (i, field) in [FormField::Name, FormField::Email, FormField::Subject]
        .iter()
        .enumerate()
    {
        let tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut)
            .with_delay(ms(400 + i as u64 * 100));
        let params = sec.compose(&derived(app, handle, &tr));
        paint_field(app, buf, area, row, *field, &params, editing);
        row += 3;
    }

    let msg_tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut).with_delay(ms(700));
    let msg_params = sec.compose(&derived(app, handle, &msg_tr));
    paint_message_box(app, buf, area, row, &msg_params, editing);
    row += 2 + MESSAGE_ROWS;

    let button_tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut).with_delay(ms(800));
    let button_params = sec.compose(&derived(app, handle, &button_tr));
    let (label, style) = match app.form.state() {
        FormState::Submitting => ("⋯ Sending...", styles::button_style(false)),
        _ => {
            let focused = editing && app.form.focus == FormFocus::Submit;
            ("➤ Send Message", styles::button_style(!editing || focused))
        }
    };
    let button = Line::from(Span::styled(format!(" {label} "), style));
    paint_line(buf, area, row + 1, &button, &button_params, Alignment::Left);
}

fn paint_field(
    app: &App,
    buf: &mut Buffer,
    area: Rect,
    row: u16,
    field: FormField,
    params: &VisualParams,
    editing: bool,
) {
    let alpha = params.alpha();
    if alpha <= f32::EPSILON {
        return;
    }
    let focused = editing && app.form.focus.field() == Some(field);
    let flagged = app.form.flagged == Some(field);

    let mut label_spans = vec![Span::styled(
        field.label(),
        fade_style(
            if flagged {
                styles::error_style()
            } else {
                styles::muted_style()
            },
            alpha,
        ),
    )];
    if flagged {
        label_spans.push(Span::styled(
            " · required",
            fade_style(styles::error_style(), alpha),
        ));
    }
    paint_line(buf, area, row, &Line::from(label_spans), params, Alignment::Left);

    let value = app.form.field(field);
    let w = area.width.saturating_sub(2) as usize;
    let shown = if focused && value.chars().count() > w.saturating_sub(1) {
        // Keep the caret end of a long value in view while typing.
        let tail: String = value
            .chars()
            .rev()
            .take(w.saturating_sub(2))
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        format!("…{tail}")
    } else if value.is_empty() {
        String::new()
    } else {
        truncate_string(value, w)
    };

    let input_style = if flagged {
        styles::field_flagged_style()
    } else {
        styles::field_style(focused)
    };
    let mut spans = Vec::new();
    if shown.is_empty() && !focused {
        spans.push(Span::styled(
            format!(" {}", truncate_string(field.placeholder(), w)),
            fade_style(styles::placeholder_style(), alpha),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {shown}"),
            fade_style(input_style, alpha),
        ));
        if focused {
            spans.push(Span::styled("▏", fade_style(styles::accent_style(), alpha)));
        }
    }
    // Fill the input row background across the column.
    let y = area.y as i32 + row as i32 + 1 + params.rise.round() as i32;
    if y >= area.y as i32 && y < area.bottom() as i32 {
        let bg = fade_style(input_style, alpha).bg.unwrap_or(styles::SURFACE);
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y as u16)) {
                cell.set_bg(bg);
            }
        }
    }
    paint_line(buf, area, row + 1, &Line::from(spans), params, Alignment::Left);
}

fn paint_message_box(
    app: &App,
    buf: &mut Buffer,
    area: Rect,
    row: u16,
    params: &VisualParams,
    editing: bool,
) {
    let alpha = params.alpha();
    if alpha <= f32::EPSILON {
        return;
    }
    let focused = editing && app.form.focus == FormFocus::Message;
    let flagged = app.form.flagged == Some(FormField::Message);

    let mut label_spans = vec![Span::styled(
        FormField::Message.label(),
        fade_style(
            if flagged {
                styles::error_style()
            } else {
                styles::muted_style()
            },
            alpha,
        ),
    )];
    if flagged {
        label_spans.push(Span::styled(
            " · required",
            fade_style(styles::error_style(), alpha),
        ));
    }
    paint_line(buf, area, row, &Line::from(label_spans), params, Alignment::Left);

    let w = area.width.saturating_sub(2) as usize;
    let value = app.form.field(FormField::Message);
    let mut lines: Vec<String> = if value.is_empty() {
        Vec::new()
    } else {
        value.split('\n').flat_map(|p| wrap_text(p, w)).collect()
    };
    if lines.is_empty() && !focused {
        lines.push(FormField::Message.placeholder().to_string());
    }
    // While typing, keep the end of the message in view.
    let visible: Vec<String> = if focused && lines.len() > MESSAGE_ROWS as usize {
        lines.split_off(lines.len() - MESSAGE_ROWS as usize)
    } else {
        lines.into_iter().take(MESSAGE_ROWS as usize).collect()
    };

    let input_style = if flagged {
        styles::field_flagged_style()
    } else {
        styles::field_style(focused)
    };
    let bg = fade_style(input_style, alpha).bg.unwrap_or(styles::SURFACE);
    let empty = app.form.field(FormField::Message).is_empty();
    for i in 0..MESSAGE_ROWS {
        let y = area.y as i32 + (row + 1 + i) as i32 + params.rise.round() as i32;
        if y < area.y as i32 || y >= area.bottom() as i32 {
            continue;
        }
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y as u16)) {
                cell.set_bg(bg);
            }
        }
        if let Some(text) = visible.get(i as usize) {
            let style = if empty {
                fade_style(styles::placeholder_style(), alpha)
            } else {
                fade_style(input_style, alpha)
            };
            let mut spans = vec![Span::styled(format!(" {text}"), style)];
            if focused && i as usize == visible.len().saturating_sub(1) && !empty {
                spans.push(Span::styled("▏", fade_style(styles::accent_style(), alpha)));
            }
            paint_line(buf, area, row + 1 + i, &Line::from(spans), params, Alignment::Left);
        }
    }
}

/// Confirmation shown in place of the form after delivery.
fn paint_sent_panel(app: &App, buf: &mut Buffer, area: Rect, sec: &VisualParams) {
    let pop = Transition::new(
        VisualParams::new(0.0, 0.0, 0.0, 0.8),
        VisualParams::VISIBLE,
        ms(500),
        Easing::EaseOut,
    );
    let params = match app.form_settled_at {
        Some(at) => sec.compose(&pop.params_at(app.now.saturating_duration_since(at))),
        None => *sec,
    };

    let check = Line::from(Span::styled("✔", styles::success_style()));
    paint_line(buf, area, 3, &check, &params, Alignment::Center);
    let title = Line::from(Span::styled(SENT_TITLE, styles::success_style()));
    paint_line(buf, area, 5, &title, &params, Alignment::Center);

    let mut row = 7;
    for text in wrap_text(SENT_BODY, area.width.saturating_sub(4).max(16) as usize) {
        let line = Line::from(Span::styled(text, styles::body_style()));
        paint_line(buf, area, row, &line, &params, Alignment::Center);
        row += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_past_ninety_cols() {
        assert!(two_column(90));
        assert!(!two_column(89));
        assert_eq!(column_width(94) * 2 + 4 + COLUMN_GAP, 94);
    }

    #[test]
    fn form_column_reserves_rows_for_every_field() {
        // Three line fields, the message area and the button.
        assert_eq!(form_rows(), 19);
    }
}
