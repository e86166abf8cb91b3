//! Terminal presentation: the world view, HUD panel and overlay cards.

pub mod flappy_scene;
pub mod game_common;
pub mod hud;
pub mod screens;

use crate::game::{BirdState, GameCoordinator, RunState};
use game_common::{render_status_bar, split_game_area};
use hud::Hud;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BACKGROUND_NAMES: [&str; 3] = ["Day", "Dusk", "Night"];

const CONTROLS: [(&str, &str); 3] = [("[Space/Click]", "Flap"), ("[M]", "Mute"), ("[Q]", "Quit")];

/// Draw one frame.
pub fn draw(frame: &mut Frame, game: &GameCoordinator, hud: &Hud) {
    let area = frame.size();
    let layout = split_game_area(frame, area, Color::Cyan);

    flappy_scene::render_world(frame, layout.world, game, hud.background);

    if hud.start_screen {
        screens::render_start_screen(frame, layout.world, hud);
    } else if hud.game_over_screen {
        screens::render_game_over_screen(frame, layout.world, hud);
    }

    let (status, color) = status_line(game, hud);
    render_status_bar(
        frame,
        layout.status,
        Span::styled(status, Style::default().fg(color)),
        &CONTROLS,
    );
    render_info_panel(frame, layout.info, game, hud);
}

fn status_line(game: &GameCoordinator, hud: &Hud) -> (String, Color) {
    match game.session().state() {
        RunState::NotStarted => ("Ready".to_string(), Color::Yellow),
        RunState::Running => (format!("Score: {}", hud.score), Color::Green),
        RunState::Over => (format!("Game over - score {}", hud.score), Color::Red),
    }
}

fn stat_line(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_info_panel(frame: &mut Frame, inner: Rect, game: &GameCoordinator, hud: &Hud) {
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let bird = game.bird();
    let state = match bird.state() {
        BirdState::Idle => "waiting",
        BirdState::Flying => "flying",
        BirdState::Dead => "falling",
        BirdState::Stopped => "grounded",
    };
    let background = BACKGROUND_NAMES
        .get(hud.background % BACKGROUND_NAMES.len())
        .copied()
        .unwrap_or("?");

    let mut lines = vec![
        stat_line("Score", hud.score.to_string(), Color::White),
        stat_line("Best", hud.high_score.to_string(), Color::Yellow),
        Line::from(""),
        stat_line("Bird", state.to_string(), Color::Cyan),
        stat_line("Distance", format!("{:.0}", bird.position().x / 10.0), Color::White),
        stat_line("Pipes", game.pipes().active_count().to_string(), Color::Green),
        stat_line("Sky", background.to_string(), Color::Magenta),
        Line::from(""),
    ];

    if hud.muted {
        lines.push(Line::from(Span::styled(
            " Sound off",
            Style::default().fg(Color::DarkGray),
        )));
    } else if let Some(label) = hud.sound_label() {
        lines.push(Line::from(Span::styled(
            format!(" ♪ {label}"),
            Style::default().fg(Color::LightBlue),
        )));
    } else if hud.music_playing {
        lines.push(Line::from(Span::styled(
            " ♪ music",
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
