//! Start and game-over cards drawn over the world.

use super::game_common::render_card;
use super::hud::Hud;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn prompt(text: &str, visible: bool) -> Line<'static> {
    if visible {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from("")
    }
}

pub fn render_start_screen(frame: &mut Frame, area: Rect, hud: &Hud) {
    let lines = vec![
        Line::from(vec![
            Span::styled("Best: ", Style::default().fg(Color::DarkGray)),
            Span::styled(hud.high_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        prompt("Press Space or click to fly", hud.blink_on()),
    ];
    render_card(frame, area, "FLAPPY", Color::Yellow, lines);
}

pub fn render_game_over_screen(frame: &mut Frame, area: Rect, hud: &Hud) {
    let Some(card) = hud.game_over else {
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                card.score.to_string(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:  ", Style::default().fg(Color::DarkGray)),
            Span::styled(card.high_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];
    if card.new_record {
        lines.push(Line::from(Span::styled(
            "NEW RECORD!",
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::from(""));
    lines.push(prompt(
        "Press Space to play again",
        hud.game_over_blinking && hud.blink_on(),
    ));

    render_card(frame, area, "GAME OVER", Color::Red, lines);
}
