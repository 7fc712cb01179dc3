//! Top-level frame composition.
//!
//! Sections paint into an offscreen buffer laid out in page coordinates,
//! and the viewport's slice of that page is blitted over the ambient blob
//! layer. Section renderers never see the scroll offset, and the decor can
//! move at its own parallax rate underneath. Cells the page never touched
//! stay transparent in the blit, which is what lets the blobs show through
//! the gaps between cards.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, AppState};
use crate::ui::sections::{self, Section};

use super::styles;

/// Rows of the nav bar, bottom border included.
pub const NAV_HEIGHT: u16 = 3;

/// Rows of the status bar.
pub const STATUS_HEIGHT: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(10),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(frame.area());

    // The layout is sized to the content area, so a resize (or the first
    // real frame after startup) re-lays the page out here.
    if app.page_width != chunks[1].width || app.viewport_height != chunks[1].height {
        app.rebuild_layout(chunks[1].width, chunks[1].height);
    }

    render_nav_bar(frame, app, chunks[0]);
    render_content(frame, app, chunks[1]);
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if matches!(app.state, AppState::ShowingHelp) {
        render_help_overlay(frame);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame);
    }
}

fn render_nav_bar(frame: &mut Frame, app: &App, area: Rect) {
    let active = app.active_section();

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(app.portfolio.personal.name.clone(), styles::title_style()),
        Span::raw("   "),
    ];
    for (i, section) in Section::NAV.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style()));
        }
        spans.push(Span::styled(
            format!("[{}] {}", i + 1, section.label()),
            styles::nav_style(*section == active),
        ));
    }

    let help_hint = "[?] Help";
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = (area.width as usize).saturating_sub(used + help_hint.len() + 2);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::styled(help_hint, styles::muted_style()));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style());

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let buf = frame.buffer_mut();

    // Ambient layer first; the page slice goes over it. The blobs live in
    // page space and scroll at half the page rate.
    let parallax = app.scroll.offset() as f32 / 2.0 - area.y as f32;
    app.decor.paint(buf, area, parallax, app.now);

    // Paint the whole page offscreen, then copy the viewport's slice.
    let mut page = Buffer::empty(Rect::new(0, 0, app.page_width, app.page_height));
    for slot in &app.layout {
        let rect = Rect::new(0, slot.start, app.page_width, slot.height);
        sections::render_section(app, slot.section, &mut page, rect);
    }
    // The page rides a row low until the entrance settles; the decor
    // underneath does not shift with it.
    let entrance = app.entrance_params();
    let rise = (entrance.rise.round().max(0.0) as u16).min(area.height);
    let content_area = Rect::new(area.x, area.y + rise, area.width, area.height - rise);
    blit_page(&page, buf, content_area, app.scroll.offset());

    // The startup fade covers decor and content alike.
    let alpha = entrance.alpha();
    if alpha < 1.0 {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let faded = sections::fade_style(cell.style(), alpha);
                    cell.set_style(faded);
                }
            }
        }
    }

    if app.scroll.show_back_to_top() {
        let chip = Line::from(Span::styled(" ↑ top [t] ", styles::chip_style()));
        let width = chip.width() as u16;
        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(2);
        buf.set_line(x, y, &chip, width);
    }
}

/// Copy the page rows `[offset, offset + viewport)` into `area`, leaving
/// untouched page cells transparent.
fn blit_page(page: &Buffer, buf: &mut Buffer, area: Rect, offset: u16) {
    let width = area.width.min(page.area.width);
    for row in 0..area.height {
        let page_y = offset.saturating_add(row);
        if page_y >= page.area.height {
            break;
        }
        for col in 0..width {
            let Some(cell) = page.cell((col, page_y)) else {
                continue;
            };
            if cell == &Cell::EMPTY {
                continue;
            }
            if let Some(dest) = buf.cell_mut((area.x + col, area.y + row)) {
                *dest = cell.clone();
            }
        }
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = match app.state {
        AppState::EditingForm => "[Tab] next field | [Shift+Tab] back | [Enter] send | [Esc] done",
        _ => "[1-6] jump | [j/k] scroll | [f]ilter | [e] contact | [q]uit",
    };
    let left_text = format!(" {} ", hints);

    let right_text = if app.reduced_motion() {
        format!(" reduced motion | {:>3}% ", app.scroll.percent())
    } else {
        format!(" {:>3}% ", app.scroll.percent())
    };

    let padding = (area.width as usize).saturating_sub(left_text.len() + right_text.len());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(right_text, styles::muted_style()),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style());
    frame.render_widget(paragraph, area);
}

fn render_help_overlay(frame: &mut Frame) {
    // Fixed size dialog matching the quit overlay
    let area = centered_rect_fixed(52, 24, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let version = env!("CARGO_PKG_VERSION");

    let help_text = vec![
        // ASCII Art Logo (centered for 52-width box, 50 interior)
        Line::from(Span::styled(
            "                  ╔═╗╔═╗╦  ╦╔═╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "                  ╠╣ ║ ║║  ║║ ║",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "                  ╚  ╚═╝╩═╝╩╚═╝",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            format!("                 version {}", version),
            styles::muted_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", styles::accent_style())),
        Line::from(vec![
            Span::styled("  1-6       ", styles::help_key_style()),
            Span::styled("Jump to a section", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  j/↓  k/↑  ", styles::help_key_style()),
            Span::styled("Scroll down / up", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  PgDn/PgUp ", styles::help_key_style()),
            Span::styled("Scroll a screen at a time", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  g/G       ", styles::help_key_style()),
            Span::styled("Top / bottom of the page", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  t         ", styles::help_key_style()),
            Span::styled("Glide back to the top", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Page", styles::accent_style())),
        Line::from(vec![
            Span::styled("  f         ", styles::help_key_style()),
            Span::styled("Toggle the project filter", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  e / Enter ", styles::help_key_style()),
            Span::styled("Edit the contact form", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(" Contact form", styles::accent_style())),
        Line::from(vec![
            Span::styled("  Tab       ", styles::help_key_style()),
            Span::styled("Next field (Shift+Tab back)", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Enter     ", styles::help_key_style()),
            Span::styled("Send, or newline in the message", styles::help_desc_style()),
        ]),
        Line::from(vec![
            Span::styled("  Esc       ", styles::help_key_style()),
            Span::styled("Back to browsing", styles::help_desc_style()),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("       Press ", styles::muted_style()),
            Span::styled("?", styles::help_key_style()),
            Span::styled(" or ", styles::muted_style()),
            Span::styled("Esc", styles::help_key_style()),
            Span::styled(" to close", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(help_text).block(block);

    frame.render_widget(paragraph, area);
}

fn render_quit_overlay(frame: &mut Frame) {
    let area = centered_rect_fixed(46, 10, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(
            "               ╔═╗╔═╗╦  ╦╔═╗",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "               ╠╣ ║ ║║  ║║ ║",
            styles::title_style(),
        )),
        Line::from(Span::styled(
            "               ╚  ╚═╝╩═╝╩╚═╝",
            styles::title_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "        Are you sure you want to quit?",
            styles::heading_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("        Press ", styles::muted_style()),
            Span::styled("[Y]", styles::help_key_style()),
            Span::styled(" to quit, ", styles::muted_style()),
            Span::styled("[N]", styles::help_key_style()),
            Span::styled(" to cancel", styles::muted_style()),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(true));

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn blit_translates_page_rows() {
        let mut page = Buffer::empty(Rect::new(0, 0, 10, 40));
        page.set_line(0, 25, &Line::from("X"), 10);

        let screen_area = Rect::new(0, 3, 10, 20);
        let mut screen = Buffer::empty(Rect::new(0, 0, 10, 25));
        blit_page(&page, &mut screen, screen_area, 25);

        assert_eq!(screen.cell((0, 3)).map(|c| c.symbol()), Some("X"));
    }

    #[test]
    fn blit_leaves_untouched_cells_alone() {
        let page = Buffer::empty(Rect::new(0, 0, 10, 40));

        let screen_area = Rect::new(0, 0, 10, 20);
        let mut screen = Buffer::empty(Rect::new(0, 0, 10, 20));
        // Something already painted underneath, like a decor blob.
        if let Some(cell) = screen.cell_mut((4, 4)) {
            cell.set_symbol("░").set_style(Style::default());
        }

        blit_page(&page, &mut screen, screen_area, 0);
        assert_eq!(screen.cell((4, 4)).map(|c| c.symbol()), Some("░"));
    }

    #[test]
    fn blit_stops_at_page_end() {
        let mut page = Buffer::empty(Rect::new(0, 0, 10, 5));
        page.set_line(0, 4, &Line::from("end"), 10);

        let screen_area = Rect::new(0, 0, 10, 20);
        let mut screen = Buffer::empty(Rect::new(0, 0, 10, 20));
        blit_page(&page, &mut screen, screen_area, 3);

        assert_eq!(screen.cell((0, 1)).map(|c| c.symbol()), Some("e"));
        // Nothing beyond the page paints.
        for y in 2..20 {
            assert_eq!(screen.cell((0, y)).map(|c| c.symbol()), Some(" "));
        }
    }

    #[test]
    fn centered_rect_clamps_to_frame() {
        let frame = Rect::new(0, 0, 80, 24);
        let dialog = centered_rect_fixed(52, 20, frame);
        assert_eq!(dialog.width, 52);
        assert_eq!(dialog.x, 14);

        let tiny = centered_rect_fixed(100, 50, frame);
        assert_eq!(tiny.width, 80);
        assert_eq!(tiny.height, 24);
    }
}
