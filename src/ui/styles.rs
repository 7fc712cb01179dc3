// Allow dead code: Style functions defined for consistent UI
#![allow(dead_code)]

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

// Color palette: pink accents on slate
pub const BG: Color = Color::Rgb(30, 41, 59);
pub const BG_DEEP: Color = Color::Rgb(15, 23, 42);
pub const SURFACE: Color = Color::Rgb(51, 65, 85);
pub const SURFACE_EDGE: Color = Color::Rgb(71, 85, 105);
pub const PINK: Color = Color::Rgb(236, 72, 153);
pub const PINK_LIGHT: Color = Color::Rgb(244, 114, 182);
pub const PINK_SOFT: Color = Color::Rgb(249, 168, 212);
pub const TEXT: Color = Color::Rgb(241, 245, 249);
pub const TEXT_DIM: Color = Color::Rgb(203, 213, 225);
pub const MUTED: Color = Color::Rgb(148, 163, 184);
pub const SUCCESS: Color = Color::Rgb(34, 197, 94);
pub const ERROR: Color = Color::Rgb(248, 113, 113);

/// Blend `top` toward `under` by `alpha` (1.0 keeps `top`, 0.0 gives
/// `under`). Only RGB colors blend; anything else passes through, since
/// the palette is all RGB anyway.
pub fn blend(top: Color, under: Color, alpha: f32) -> Color {
    let (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) = (top, under) else {
        return top;
    };
    let a = alpha.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 * a + y as f32 * (1.0 - a)).round() as u8;
    Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
}

/// Fade a foreground color toward the page background. This is how
/// opacity renders in a terminal.
pub fn fade(color: Color, opacity: f32) -> Color {
    blend(color, BG, opacity)
}

/// Per-character gradient spans, for the hero name.
pub fn gradient_spans(text: &str, from: Color, to: Color) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let steps = chars.len().saturating_sub(1).max(1) as f32;
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let t = i as f32 / steps;
            Span::styled(
                c.to_string(),
                Style::default()
                    .fg(blend(to, from, t))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

// Styles
pub fn heading_style() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn title_style() -> Style {
    Style::default().fg(PINK).add_modifier(Modifier::BOLD)
}

pub fn accent_style() -> Style {
    Style::default().fg(PINK_LIGHT)
}

pub fn body_style() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn muted_style() -> Style {
    Style::default().fg(MUTED)
}

pub fn success_style() -> Style {
    Style::default().fg(SUCCESS)
}

pub fn error_style() -> Style {
    Style::default().fg(ERROR)
}

pub fn link_style() -> Style {
    Style::default()
        .fg(PINK_SOFT)
        .add_modifier(Modifier::UNDERLINED)
}

pub fn chip_style() -> Style {
    Style::default().fg(PINK_LIGHT).bg(SURFACE)
}

pub fn chip_overflow_style() -> Style {
    Style::default().fg(TEXT_DIM).bg(SURFACE_EDGE)
}

pub fn placeholder_style() -> Style {
    Style::default()
        .fg(MUTED)
        .add_modifier(Modifier::ITALIC)
}

pub fn divider_style() -> Style {
    Style::default().fg(PINK)
}

pub fn nav_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(PINK)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        Style::default().fg(TEXT_DIM)
    }
}

pub fn filter_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(TEXT)
            .bg(PINK)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_DIM).bg(SURFACE)
    }
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(PINK)
    } else {
        Style::default().fg(SURFACE_EDGE)
    }
}

pub fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(TEXT).bg(SURFACE_EDGE)
    } else {
        Style::default().fg(TEXT_DIM).bg(SURFACE)
    }
}

pub fn field_flagged_style() -> Style {
    Style::default().fg(ERROR).bg(SURFACE)
}

pub fn button_style(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(TEXT)
            .bg(PINK)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED).bg(SURFACE)
    }
}

pub fn status_bar_style() -> Style {
    Style::default().bg(BG_DEEP).fg(TEXT_DIM)
}

pub fn help_key_style() -> Style {
    Style::default().fg(PINK_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn help_desc_style() -> Style {
    Style::default().fg(TEXT)
}
