//! Landing section. Runs a load-time timeline rather than waiting on
//! scroll visibility: name, title, bio, social links and the scroll
//! indicator enter one after another, then the indicator bobs forever.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::reveal::{ping_pong, Easing, Transition, VisualParams};
use crate::ui::sections::{derived, fade_style, ms, paint_line, section_params};
use crate::ui::styles;
use crate::utils::wrap_text;

const INDICATOR: &str = "▼ scroll ▼";

fn bio_width(width: u16) -> usize {
    width.saturating_sub(10).min(64).max(16) as usize
}

fn content_rows(app: &App, width: u16) -> u16 {
    let bio_lines = wrap_text(&app.portfolio.personal.bio, bio_width(width)).len() as u16;
    // name, title, bio, social and indicator with their spacing rows
    9 + bio_lines
}

/// The hero fills the first screen; short viewports get at least the
/// content.
pub fn height(app: &App, width: u16) -> u16 {
    app.viewport_height.max(content_rows(app, width) + 2)
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    let handle = app.handles.hero;
    let sec = section_params(app, handle);
    let person = &app.portfolio.personal;

    let rows = content_rows(app, area.width);
    let mut row = area.height.saturating_sub(rows) / 2;

    // Name crashes in with overshoot.
    let name_tr = Transition::new(
        VisualParams::new(0.0, 5.0, 0.0, 0.5),
        VisualParams::VISIBLE,
        ms(1200),
        Easing::BackOut,
    );
    let name_line = Line::from(styles::gradient_spans(
        &person.name,
        styles::PINK,
        styles::PINK_SOFT,
    ));
    paint_line(
        buf,
        area,
        row,
        &name_line,
        &sec.compose(&derived(app, handle, &name_tr)),
        Alignment::Center,
    );
    row += 2;

    // Title slides in from the left, slightly shrunk.
    let title_tr = Transition::new(
        VisualParams::new(0.0, 0.0, -5.0, 0.8),
        VisualParams::VISIBLE,
        ms(800),
        Easing::EaseOut,
    )
    .with_delay(ms(600));
    let title_line = Line::from(Span::styled(
        person.title.clone(),
        styles::accent_style(),
    ));
    paint_line(
        buf,
        area,
        row,
        &title_line,
        &sec.compose(&derived(app, handle, &title_tr)),
        Alignment::Center,
    );
    row += 2;

    let bio_tr = Transition::fade_rise(1.5, ms(800), Easing::EaseOut).with_delay(ms(1000));
    let bio_params = sec.compose(&derived(app, handle, &bio_tr));
    for text in wrap_text(&person.bio, bio_width(area.width)) {
        let line = Line::from(Span::styled(text, styles::body_style()));
        paint_line(buf, area, row, &line, &bio_params, Alignment::Center);
        row += 1;
    }
    row += 1;

    paint_social_row(app, buf, area, row, &sec);
    row += 3;

    paint_indicator(app, buf, area, row, &sec);
}

/// The social row enters as a block, then each link fades in on its own
/// small offset within it.
fn paint_social_row(app: &App, buf: &mut Buffer, area: Rect, row: u16, sec: &VisualParams) {
    let handle = app.handles.hero;
    let block_tr = Transition::new(
        VisualParams::new(0.0, 1.0, 0.0, 0.8),
        VisualParams::VISIBLE,
        ms(600),
        Easing::EaseOut,
    )
    .with_delay(ms(1500));
    let block = sec.compose(&derived(app, handle, &block_tr));
    if block.is_transparent() {
        return;
    }

    let mut spans: Vec<Span> = Vec::new();
    for (i, platform) in app.portfolio.social.keys().enumerate() {
        let link_tr = Transition::fade_rise(0.0, ms(300), Easing::EaseOut)
            .with_delay(ms(1500 + i as u64 * 100));
        let alpha = derived(app, handle, &link_tr).alpha();
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("⦿ {}", platform_label(platform)),
            fade_style(styles::link_style(), alpha),
        ));
    }
    if spans.is_empty() {
        return;
    }
    paint_line(buf, area, row, &Line::from(spans), &block, Alignment::Center);
}

fn paint_indicator(app: &App, buf: &mut Buffer, area: Rect, row: u16, sec: &VisualParams) {
    let handle = app.handles.hero;
    let enter = Transition::fade_rise(0.5, ms(500), Easing::EaseOut).with_delay(ms(1900));
    let mut params = sec.compose(&derived(app, handle, &enter));

    // Once settled, bob up and down forever. Reduced motion reports a
    // huge elapsed, which parks the wave far along but still moving; pin
    // it explicitly instead.
    if !app.reduced_motion() {
        if let Some(elapsed) = app.engine.elapsed_since_trigger(handle, app.now) {
            if enter.is_complete(elapsed) {
                let since = (elapsed - enter.total()).as_secs_f32();
                let wave = Easing::EaseInOut.apply(ping_pong(since, 1.5));
                params.rise -= wave;
            }
        }
    }

    let line = Line::from(Span::styled(INDICATOR, styles::muted_style()));
    paint_line(buf, area, row, &line, &params, Alignment::Center);
}

/// Display label for a social platform key from the content file.
pub(crate) fn platform_label(key: &str) -> String {
    match key {
        "github" => "GitHub".to_string(),
        "linkedin" => "LinkedIn".to_string(),
        "twitter" => "Twitter".to_string(),
        "youtube" => "YouTube".to_string(),
        _ => {
            let mut chars = key.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_labels_use_brand_casing() {
        assert_eq!(platform_label("github"), "GitHub");
        assert_eq!(platform_label("linkedin"), "LinkedIn");
        assert_eq!(platform_label("dribbble"), "Dribbble");
        assert_eq!(platform_label(""), "");
    }
}
