//! Rendering of surface state into the terminal frame.
//!
//! The controller only tracks tags and styles; everything visual derives
//! from them here, driven by elapsed milliseconds the same way on every
//! frame so the animations stay smooth at any poll rate.

use nori_core::palette::parse_hex;
use nori_stage::{
    ANIMATION_BOX, Controller, FLIPPED_TAG, FLIP_CARD, MODAL_OVERLAY, MODAL_SHOW_TAG, SPINNER,
    SPINNER_ACTIVE_TAG, Surface,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Clear, Paragraph},
};

/// Frames for the loading spinner.
const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Glyphs cycled while the box carries the spin tag.
const SPIN_GLYPHS: &[char] = &['|', '/', '-', '\\'];

/// Render the whole playground.
pub fn render(frame: &mut Frame, controller: &Controller, elapsed_ms: u64) {
    let accent = accent_color(controller.current_theme());
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Title
        Constraint::Fill(1),   // Animation box
        Constraint::Length(7), // Flip card and spinner
        Constraint::Length(1), // Help text
    ])
    .split(area);

    let title = Paragraph::new(title_line(controller.current_theme()))
        .style(Style::new().fg(accent).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    if let Ok(surface) = controller.stage().surface(ANIMATION_BOX) {
        render_animation_box(frame, chunks[1], surface, elapsed_ms, accent);
    }

    let row = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    if let Ok(surface) = controller.stage().surface(FLIP_CARD) {
        render_flip_card(frame, row[0], surface, accent);
    }
    if let Ok(surface) = controller.stage().surface(SPINNER) {
        render_spinner(frame, row[1], surface, elapsed_ms, accent);
    }

    let help = Line::from(vec![
        "b/s/k/g".bold().fg(accent),
        " animate  ".dark_gray(),
        "x".bold().fg(accent),
        " choreography  ".dark_gray(),
        "f".bold().fg(accent),
        " flip  ".dark_gray(),
        "m".bold().fg(accent),
        " modal  ".dark_gray(),
        "l".bold().fg(accent),
        " spinner  ".dark_gray(),
        "t".bold().fg(accent),
        " theme  ".dark_gray(),
        "q".bold().fg(accent),
        " quit".dark_gray(),
    ])
    .centered();
    frame.render_widget(help, chunks[3]);

    // Modal overlays everything else
    if let Ok(surface) = controller.stage().surface(MODAL_OVERLAY)
        && surface.has_tag(MODAL_SHOW_TAG)
    {
        render_modal(frame, area, accent);
    }
}

/// The title line, naming the active theme.
fn title_line(theme: Option<&str>) -> String {
    format!("nori playground - theme: {}", theme.unwrap_or("none"))
}

/// Map a theme name to its accent color. Unknown themes render unthemed.
fn accent_color(theme: Option<&str>) -> Color {
    match theme {
        Some("light") => Color::Blue,
        Some("dark") => Color::White,
        Some("colorful") => Color::Magenta,
        _ => Color::Gray,
    }
}

/// Draw the demo box, displaced and styled by its active animation tags.
fn render_animation_box(
    frame: &mut Frame,
    area: Rect,
    surface: &Surface,
    elapsed_ms: u64,
    accent: Color,
) {
    const BOX_WIDTH: u16 = 20;
    const BOX_HEIGHT: u16 = 5;

    if area.width < BOX_WIDTH + 4 || area.height < BOX_HEIGHT + 2 {
        return;
    }

    let t = elapsed_ms as f32;

    // Bounce displaces vertically, shake jitters horizontally
    let bounce_range = (area.height - BOX_HEIGHT) / 2;
    let y_offset = if surface.has_tag("bounce") {
        ((t / 130.0).sin().abs() * bounce_range as f32) as u16
    } else {
        0
    };
    let x_offset = if surface.has_tag("shake") {
        (((t / 40.0).sin() * 2.0) as i16).unsigned_abs()
    } else {
        0
    };

    let centered = centered_rect(area, BOX_WIDTH, BOX_HEIGHT);
    let rect = Rect {
        x: centered.x.saturating_add(x_offset),
        y: centered.y.saturating_sub(y_offset).max(area.y),
        ..centered
    }
    .intersection(area);

    let (fg, border) = match gradient_stops(surface.style("background")) {
        Some((first, second)) => (first, second),
        None => (accent, accent),
    };

    let border_style = if surface.has_tag("glow") {
        Style::new().fg(Color::Yellow).bold()
    } else {
        Style::new().fg(border)
    };

    let glyph = if surface.has_tag("spin") {
        SPIN_GLYPHS[(elapsed_ms / 100) as usize % SPIN_GLYPHS.len()]
    } else {
        '■'
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from(glyph.to_string()).style(Style::new().fg(fg).bold()),
        Line::from("nori").style(Style::new().fg(fg)),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().border_style(border_style));
    frame.render_widget(body, rect);
}

/// Draw the flip card, front or back per its flipped tag.
fn render_flip_card(frame: &mut Frame, area: Rect, surface: &Surface, accent: Color) {
    let raised = surface
        .style("transform")
        .is_some_and(|value| value.contains("translateY(-"));
    let rect = centered_rect(area, 24, if raised { 6 } else { 5 });

    let (label, style) = if surface.has_tag(FLIPPED_TAG) {
        ("back: tags are state", Style::new().fg(accent).reversed())
    } else {
        ("front: press f", Style::new().fg(accent))
    };

    let card = Paragraph::new(vec![Line::from(""), Line::from(label)])
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered());
    frame.render_widget(card, rect.intersection(area));
}

/// Draw the spinner; a static dot when inactive, cycling frames when active.
fn render_spinner(frame: &mut Frame, area: Rect, surface: &Surface, elapsed_ms: u64, accent: Color) {
    let rect = centered_rect(area, 24, 5);

    let glyph = if surface.has_tag(SPINNER_ACTIVE_TAG) {
        SPINNER_FRAMES[(elapsed_ms / 80) as usize % SPINNER_FRAMES.len()]
    } else {
        '·'
    };

    let spinner = Paragraph::new(vec![
        Line::from(""),
        Line::from(glyph.to_string()).style(Style::new().fg(accent).bold()),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered().title("spinner"));
    frame.render_widget(spinner, rect.intersection(area));
}

/// Draw the modal overlay centered over the whole frame.
fn render_modal(frame: &mut Frame, area: Rect, accent: Color) {
    let rect = centered_rect(area, 40, 7);
    frame.render_widget(Clear, rect);

    let modal = Paragraph::new(vec![
        Line::from(""),
        Line::from("modal open"),
        Line::from(""),
        Line::from("Esc closes".dark_gray()),
    ])
    .alignment(Alignment::Center)
    .style(Style::new().fg(accent))
    .block(Block::bordered().title("modal"));
    frame.render_widget(modal, rect);
}

/// Parse the two stops of a `linear-gradient(45deg, #a, #b)` style value.
fn gradient_stops(style: Option<&str>) -> Option<(Color, Color)> {
    let style = style?;
    let mut stops = style
        .match_indices('#')
        .filter_map(|(idx, _)| style.get(idx..idx + 7))
        .filter_map(parse_hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b));
    let first = stops.next()?;
    let second = stops.next().unwrap_or(first);
    Some((first, second))
}

/// A `width` x `height` rect centered in `area`, clamped to it.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_stops() {
        let stops = gradient_stops(Some("linear-gradient(45deg, #667eea, #f368e0)"));
        assert_eq!(
            stops,
            Some((Color::Rgb(0x66, 0x7e, 0xea), Color::Rgb(0xf3, 0x68, 0xe0)))
        );
        assert_eq!(gradient_stops(None), None);
        assert_eq!(gradient_stops(Some("red")), None);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 10, 4);
        let rect = centered_rect(area, 40, 7);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_title_line_is_plain_ascii() {
        assert_eq!(title_line(Some("dark")), "nori playground - theme: dark");
        assert_eq!(title_line(None), "nori playground - theme: none");
        assert!(title_line(Some("colorful")).is_ascii());
    }

    #[test]
    fn test_accent_color_for_unknown_theme() {
        assert_eq!(accent_color(Some("sunset")), Color::Gray);
        assert_eq!(accent_color(None), Color::Gray);
    }
}
