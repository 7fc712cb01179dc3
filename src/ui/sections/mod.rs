//! Section renderers for the portfolio page.
//!
//! Each section paints into the virtual page buffer:
//!
//! - `hero`: full-viewport intro with the load-time timeline
//! - `about`: photo, bio and contact rows
//! - `skills`: marquee strip and category cards with level bars
//! - `projects`: filterable project card grid
//! - `certificates`: certifications plus the achievements panel
//! - `contact`: info cards and the message form
//! - `footer`: brand, quick links and the copyright line
//!
//! A section has two entry points with the same shape everywhere:
//! `height(app, width)` so the page can be laid out before painting, and
//! `render(app, buf, area)` where `area` is the section's slice of the
//! page in page coordinates.

pub mod about;
pub mod certificates;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::reveal::{Easing, RevealHandle, Transition, VisualParams};
use crate::ui::styles;
use crate::utils::wrap_text;

/// The page sections in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Certificates,
    Contact,
    Footer,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
        Section::Footer,
    ];

    /// The sections reachable from the nav bar, in key order 1-6.
    pub const NAV: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
            Section::Contact => "Contact",
            Section::Footer => "Footer",
        }
    }

    /// Visible fraction that triggers the section's reveal. About waits
    /// for a deeper scroll than the rest.
    pub fn threshold(&self) -> f32 {
        match self {
            Section::About => 0.3,
            _ => 0.2,
        }
    }
}

pub fn section_height(app: &App, section: Section, width: u16) -> u16 {
    match section {
        Section::Hero => hero::height(app, width),
        Section::About => about::height(app, width),
        Section::Skills => skills::height(app, width),
        Section::Projects => projects::height(app, width),
        Section::Certificates => certificates::height(app, width),
        Section::Contact => contact::height(app, width),
        Section::Footer => footer::height(app, width),
    }
}

pub fn render_section(app: &App, section: Section, buf: &mut Buffer, area: Rect) {
    match section {
        Section::Hero => hero::render(app, buf, area),
        Section::About => about::render(app, buf, area),
        Section::Skills => skills::render(app, buf, area),
        Section::Projects => projects::render(app, buf, area),
        Section::Certificates => certificates::render(app, buf, area),
        Section::Contact => contact::render(app, buf, area),
        Section::Footer => footer::render(app, buf, area),
    }
}

// ============================================================================
// Shared choreography plumbing
// ============================================================================

pub(crate) const fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

/// Current pose of a section container.
pub(crate) fn section_params(app: &App, handle: RevealHandle) -> VisualParams {
    app.engine
        .params(handle, app.now)
        .unwrap_or(VisualParams::VISIBLE)
}

/// Pose of an inner element choreographed off its container's trigger.
/// Before the container triggers, the element holds its hidden pose.
pub(crate) fn derived(app: &App, handle: RevealHandle, tr: &Transition) -> VisualParams {
    match app.engine.elapsed_since_trigger(handle, app.now) {
        Some(elapsed) => tr.params_at(elapsed),
        None => tr.from,
    }
}

/// Map a style through the opacity fade. Unset foregrounds are assumed
/// to be body text so they still dim.
pub(crate) fn fade_style(style: Style, alpha: f32) -> Style {
    let mut faded = style;
    faded.fg = Some(styles::fade(style.fg.unwrap_or(styles::TEXT_DIM), alpha));
    if let Some(bg) = style.bg {
        faded.bg = Some(styles::fade(bg, alpha));
    }
    faded
}

pub(crate) fn fade_line(line: &Line, alpha: f32) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|s| Span::styled(s.content.to_string(), fade_style(s.style, alpha)))
        .collect();
    Line::from(spans)
}

/// Paint one line at `row` within `area`, displaced and faded by
/// `params`. Lines pushed outside the section clip silently.
pub(crate) fn paint_line(
    buf: &mut Buffer,
    area: Rect,
    row: u16,
    line: &Line,
    params: &VisualParams,
    align: Alignment,
) {
    let alpha = params.alpha();
    if alpha <= f32::EPSILON || area.width == 0 {
        return;
    }
    let y = area.y as i32 + row as i32 + params.rise.round() as i32;
    if y < area.y as i32 || y >= area.bottom() as i32 {
        return;
    }

    let width = line.width() as u16;
    let base_x = match align {
        Alignment::Left => area.x,
        Alignment::Center => area.x + area.width.saturating_sub(width) / 2,
        Alignment::Right => area.x + area.width.saturating_sub(width),
    };
    let x = base_x as i32 + params.shift.round() as i32;
    if x >= area.right() as i32 {
        return;
    }
    let x = x.max(area.x as i32) as u16;

    let faded = fade_line(line, alpha);
    buf.set_line(x, y as u16, &faded, area.right().saturating_sub(x));
}

/// Displace a card rectangle by `params` and clip it to `bound`.
/// Returns `None` when the card is invisible or fully clipped.
pub(crate) fn offset_rect(rect: Rect, bound: Rect, params: &VisualParams) -> Option<Rect> {
    if params.alpha() <= f32::EPSILON {
        return None;
    }
    let x = (rect.x as i32 + params.shift.round() as i32).max(0) as u16;
    let y = (rect.y as i32 + params.rise.round() as i32).max(0) as u16;
    let moved = Rect::new(x, y, rect.width, rect.height);
    let clipped = moved.intersection(bound);
    if clipped.width == 0 || clipped.height == 0 {
        None
    } else {
        Some(clipped)
    }
}

// ============================================================================
// Section header (title, divider, subtitle)
// ============================================================================

pub(crate) const DIVIDER_WIDTH: u16 = 24;

fn subtitle_width(width: u16) -> u16 {
    width.saturating_sub(8).min(64).max(16)
}

/// Rows the standard header occupies at this width.
pub(crate) fn header_height(width: u16, subtitle: Option<&str>) -> u16 {
    let sub_rows = subtitle
        .map(|s| wrap_text(s, subtitle_width(width) as usize).len() as u16)
        .unwrap_or(0);
    2 + sub_rows + 2
}

/// Paint the shared section header: centered title, growing divider, and
/// an optional subtitle. Returns the rows consumed.
pub(crate) fn paint_header(
    app: &App,
    buf: &mut Buffer,
    area: Rect,
    handle: RevealHandle,
    title: &str,
    subtitle: Option<&str>,
) -> u16 {
    let sec = section_params(app, handle);

    let title_tr = Transition::fade_rise(1.5, ms(600), Easing::EaseOut).with_delay(ms(200));
    let title_line = Line::from(Span::styled(title.to_string(), styles::heading_style()));
    paint_line(
        buf,
        area,
        0,
        &title_line,
        &sec.compose(&derived(app, handle, &title_tr)),
        Alignment::Center,
    );

    // Divider grows from nothing to its full width.
    let grown = match app.engine.elapsed_since_trigger(handle, app.now) {
        Some(elapsed) => {
            let raw = (elapsed.as_secs_f32() - 0.4) / 0.8;
            Easing::EaseOut.apply(raw.clamp(0.0, 1.0))
        }
        None => 0.0,
    };
    let divider_cols = (DIVIDER_WIDTH as f32 * grown).round() as usize;
    if divider_cols > 0 {
        let divider = Line::from(Span::styled(
            "─".repeat(divider_cols),
            styles::divider_style(),
        ));
        paint_line(buf, area, 1, &divider, &sec, Alignment::Center);
    }

    let mut rows = 2;
    if let Some(subtitle) = subtitle {
        let sub_tr = Transition::fade_rise(1.0, ms(600), Easing::EaseOut).with_delay(ms(600));
        let params = sec.compose(&derived(app, handle, &sub_tr));
        for text in wrap_text(subtitle, subtitle_width(area.width) as usize) {
            let line = Line::from(Span::styled(text, styles::muted_style()));
            paint_line(buf, area, rows, &line, &params, Alignment::Center);
            rows += 1;
        }
    }
    rows + 2
}
