//! Frame layout and reusable widgets: the bordered play layout, the status
//! bar and centred modal cards.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &str = " Flappy ";
const INFO_PANEL_WIDTH: u16 = 22;

/// Areas of one frame. `info` is already inside the info panel's border.
pub struct GameLayout {
    pub world: Rect,
    pub status: Rect,
    pub info: Rect,
}

/// Draw the outer border and the info panel frame, and split the rest.
///
/// ```text
/// ┌─ Flappy ──────────────────────┬─ Info ─────┐
/// │ world                         │ stats      │
/// │ status (2 lines)              │            │
/// └───────────────────────────────┴────────────┘
/// ```
pub fn split_game_area(frame: &mut Frame, area: Rect, border_color: Color) -> GameLayout {
    frame.render_widget(Clear, area);
    let outer = Block::default()
        .title(TITLE)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(INFO_PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(columns[0]);

    let info_frame = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let info = info_frame.inner(columns[1]);
    frame.render_widget(info_frame, columns[1]);

    GameLayout {
        world: rows[0],
        status: rows[1],
        info,
    }
}

/// Status message over a line of `(key, action)` hints, both centred.
pub fn render_status_bar(frame: &mut Frame, area: Rect, status: Span, controls: &[(&str, &str)]) {
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            [
                Span::raw(if i == 0 { "" } else { "  " }),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {action}"), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();

    let text = vec![Line::from(status), Line::from(hints)];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

/// Rect of at most `width` x `height`, centred in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Render a bordered modal card with a bold title line followed by `lines`.
pub fn render_card(frame: &mut Frame, area: Rect, title: &str, color: Color, lines: Vec<Line>) {
    let height = lines.len() as u16 + 4;
    let width = lines
        .iter()
        .map(|l| l.width() as u16)
        .chain(std::iter::once(title.chars().count() as u16))
        .max()
        .unwrap_or(0)
        + 6;
    let card = centered_rect(area, width, height);

    frame.render_widget(Clear, card);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let mut text = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    text.extend(lines);

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
