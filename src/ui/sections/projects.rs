//! Projects section: the filter row and the card grid. Cards are
//! observed individually so a late scroll-in still staggers them, and
//! switching the filter re-runs the entrance for the new set.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Widget};

use crate::app::App;
use crate::content::{Asset, Project, ProjectFilter};
use crate::reveal::{Easing, Transition, VisualParams};
use crate::ui::sections::{
    derived, fade_style, header_height, ms, offset_rect, paint_header, paint_line, section_params,
};
use crate::ui::styles;
use crate::utils::{truncate_string, wrap_text};

const TITLE: &str = "My Projects";
const SUBTITLE: &str = "A showcase of my latest work and creative projects";

pub(crate) const CARD_HEIGHT: u16 = 10;
const CARD_GAP: u16 = 2;
const MAX_CHIPS: usize = 4;

fn two_column(width: u16) -> bool {
    width >= 84
}

pub fn height(app: &App, width: u16) -> u16 {
    let n = app.filtered_projects().len() as u16;
    let mut h = header_height(width, Some(SUBTITLE)) + 2;
    if n == 0 {
        return h + 3;
    }
    let rows = if two_column(width) { n.div_ceil(2) } else { n };
    h += rows * (CARD_HEIGHT + 1);
    h + 1
}

pub fn render(app: &App, buf: &mut Buffer, area: Rect) {
    let handle = app.handles.projects;
    let sec = section_params(app, handle);
    let header_rows = paint_header(app, buf, area, handle, TITLE, Some(SUBTITLE));

    paint_filter_row(app, buf, area, header_rows, &sec);

    let inner = Rect::new(
        area.x + 2,
        area.y + header_rows + 2,
        area.width.saturating_sub(4),
        area.height.saturating_sub(header_rows + 2),
    );

    let projects = app.filtered_projects();
    if projects.is_empty() {
        let note = Line::from(Span::styled(
            "Nothing to show here yet.",
            styles::placeholder_style(),
        ));
        paint_line(buf, inner, 1, &note, &sec, Alignment::Center);
        return;
    }

    let (cols, card_w) = if two_column(area.width) {
        (2u16, inner.width.saturating_sub(CARD_GAP) / 2)
    } else {
        (1u16, inner.width)
    };

    for (i, project) in projects.iter().enumerate() {
        let col = i as u16 % cols;
        let grid_row = i as u16 / cols;
        let rect = Rect::new(
            inner.x + col * (card_w + CARD_GAP),
            inner.y + grid_row * (CARD_HEIGHT + 1),
            card_w,
            CARD_HEIGHT,
        );
        paint_card(app, buf, area, rect, i, project);
    }
}

fn paint_filter_row(app: &App, buf: &mut Buffer, area: Rect, row: u16, sec: &VisualParams) {
    let tr = Transition::fade_rise(1.0, ms(500), Easing::EaseOut).with_delay(ms(800));
    let params = sec.compose(&derived(app, app.handles.projects, &tr));

    let mut spans = Vec::new();
    for (i, filter) in [ProjectFilter::All, ProjectFilter::Featured].iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!(" {} ", filter.label()),
            styles::filter_style(*filter == app.filter),
        ));
    }
    paint_line(buf, area, row, &Line::from(spans), &params, Alignment::Center);
}

fn paint_card(app: &App, buf: &mut Buffer, bound: Rect, rect: Rect, idx: usize, project: &Project) {
    let Some(&handle) = app.handles.project_cards.get(idx) else {
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

    paint_image_band(app, buf, inner, project, alpha);

    let mut title_spans = vec![Span::styled(
        truncate_string(&project.title, w.saturating_sub(11)),
        fade_style(styles::heading_style(), alpha),
    )];
    if project.featured {
        title_spans.push(Span::styled(
            " ★ Featured",
            fade_style(styles::accent_style(), alpha),
        ));
    }
    paint_line(
        buf,
        inner,
        3,
        &Line::from(title_spans),
        &VisualParams::VISIBLE,
        Alignment::Left,
    );

    let mut desc = wrap_text(&project.description, w);
    if desc.len() > 2 {
        desc.truncate(2);
        if let Some(last) = desc.last_mut() {
            *last = format!("{}…", truncate_string(last, w.saturating_sub(1)));
        }
    }
    for (i, text) in desc.iter().enumerate() {
        let line = Line::from(Span::styled(
            text.clone(),
            fade_style(styles::body_style(), alpha),
        ));
        paint_line(buf, inner, 4 + i as u16, &line, &VisualParams::VISIBLE, Alignment::Left);
    }

    paint_line(
        buf,
        inner,
        6,
        &tech_chips(project, alpha),
        &VisualParams::VISIBLE,
        Alignment::Left,
    );

    let mut links = Vec::new();
    if project.repo_url.is_some() {
        links.push(Span::styled("⌁ Code", fade_style(styles::link_style(), alpha)));
    }
    if project.demo_url.is_some() {
        if !links.is_empty() {
            links.push(Span::raw("   "));
        }
        links.push(Span::styled("⌁ Live", fade_style(styles::link_style(), alpha)));
    }
    if !links.is_empty() {
        paint_line(
            buf,
            inner,
            7,
            &Line::from(links),
            &VisualParams::VISIBLE,
            Alignment::Left,
        );
    }
}

/// Three-row banner standing in for the screenshot: the title over a
/// pink wash, with the resolved file name when there is one.
fn paint_image_band(app: &App, buf: &mut Buffer, inner: Rect, project: &Project, alpha: f32) {
    let band_alphas = [0.30, 0.24, 0.18];
    for (i, wash) in band_alphas.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let bg = styles::fade(styles::PINK, wash * alpha);
        for x in inner.left()..inner.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(bg);
            }
        }
    }

    let title = Line::from(Span::styled(
        truncate_string(&project.title, inner.width.saturating_sub(2) as usize),
        fade_style(styles::heading_style(), alpha),
    ));
    paint_line(buf, inner, 1, &title, &VisualParams::VISIBLE, Alignment::Center);

    if let Asset::Found(path) = app.assets.resolve(project.image.as_deref()) {
        if let Some(name) = path.file_name() {
            let caption = Line::from(Span::styled(
                format!("▣ {}", name.to_string_lossy()),
                fade_style(styles::placeholder_style(), alpha),
            ));
            paint_line(buf, inner, 2, &caption, &VisualParams::VISIBLE, Alignment::Center);
        }
    }
}

fn tech_chips(project: &Project, alpha: f32) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, tech) in project.technologies.iter().take(MAX_CHIPS).enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {tech} "),
            fade_style(styles::chip_style(), alpha),
        ));
    }
    let extra = project.technologies.len().saturating_sub(MAX_CHIPS);
    if extra > 0 {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" +{extra} "),
            fade_style(styles::chip_overflow_style(), alpha),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_techs(n: usize) -> Project {
        Project {
            technologies: (0..n).map(|i| format!("T{i}")).collect(),
            ..Project::default()
        }
    }

    #[test]
    fn chips_cap_at_four_with_overflow_count() {
        let line = tech_chips(&project_with_techs(6), 1.0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.contains("T3"));
        assert!(!text.contains("T4"));
        assert!(text.contains("+2"));
    }

    #[test]
    fn few_techs_show_no_overflow_chip() {
        let line = tech_chips(&project_with_techs(3), 1.0);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains('+'));
    }
}
