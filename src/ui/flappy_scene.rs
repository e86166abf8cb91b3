//! World rendering: sky, pipes, ground and the bird, sampled onto the
//! terminal grid.
//!
//! The visible slice of the world is one viewport tall. Each terminal cell is
//! treated as twice as tall as it is wide, so a column covers half the pixels
//! of a row.

use crate::constants::{CAMERA_OFFSET_X, VIEWPORT_HEIGHT};
use crate::game::{BirdState, GameCoordinator};
use crate::geometry::Vec2;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Sky,
    Pipe,
    Ground,
    Bird(char),
}

/// Colours for one background variant.
struct Palette {
    sky: Color,
    star: Color,
    pipe: Color,
    ground: Color,
}

const PALETTES: [Palette; 3] = [
    // Day
    Palette {
        sky: Color::Blue,
        star: Color::White,
        pipe: Color::Green,
        ground: Color::Yellow,
    },
    // Dusk
    Palette {
        sky: Color::Magenta,
        star: Color::LightRed,
        pipe: Color::LightGreen,
        ground: Color::Red,
    },
    // Night
    Palette {
        sky: Color::Black,
        star: Color::Gray,
        pipe: Color::Green,
        ground: Color::DarkGray,
    },
];

fn palette(background: usize) -> &'static Palette {
    &PALETTES[background % PALETTES.len()]
}

/// Bird glyph by heading: nose up, level, nose down.
fn bird_glyph(state: BirdState, rotation: f32) -> char {
    match state {
        BirdState::Dead | BirdState::Stopped => 'x',
        _ if rotation < -0.2 => '▲',
        _ if rotation > 0.4 => '▼',
        _ => '►',
    }
}

/// Sample the world into `rows` x `cols` cells.
pub fn world_cells(game: &GameCoordinator, cols: usize, rows: usize) -> Vec<Vec<Cell>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let px_per_row = VIEWPORT_HEIGHT / rows as f32;
    let px_per_col = px_per_row / 2.0;
    let bird = game.bird();
    let camera_left = bird.position().x - CAMERA_OFFSET_X;
    let ground_y = game.floor().ground_y();

    let pipe_bodies: Vec<_> = game
        .pipes()
        .active()
        .flat_map(|pipe| [pipe.top_body(), pipe.bottom_body()])
        .collect();
    let segments = game.floor().segment_rects();

    let mut cells = vec![vec![Cell::Sky; cols]; rows];
    for (row, line) in cells.iter_mut().enumerate() {
        let y = (row as f32 + 0.5) * px_per_row;
        for (col, cell) in line.iter_mut().enumerate() {
            let point = Vec2::new(camera_left + (col as f32 + 0.5) * px_per_col, y);

            if y >= ground_y && segments.iter().any(|seg| seg.contains(point)) {
                *cell = Cell::Ground;
            } else if pipe_bodies.iter().any(|body| body.contains(point)) {
                *cell = Cell::Pipe;
            }
        }
    }

    // The bird is smaller than a cell at most sizes, so place it by centre.
    let centre = bird.position();
    let col = ((centre.x - camera_left) / px_per_col).floor();
    let row = (centre.y / px_per_row).floor();
    if col >= 0.0 && row >= 0.0 && (col as usize) < cols && (row as usize) < rows {
        cells[row as usize][col as usize] = Cell::Bird(bird_glyph(bird.state(), bird.rotation()));
    }

    cells
}

/// Render the world into `area`.
pub fn render_world(frame: &mut Frame, area: Rect, game: &GameCoordinator, background: usize) {
    let cells = world_cells(game, area.width as usize, area.height as usize);
    if cells.is_empty() {
        return;
    }
    let colors = palette(background);

    let lines: Vec<Line> = cells
        .iter()
        .enumerate()
        .map(|(row, line)| {
            let spans: Vec<Span> = line
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Cell::Sky => {
                        // Fixed star speckle, about one cell in a hundred.
                        let glyph = if (row * 31 + col * 17) % 97 == 0 { "·" } else { " " };
                        Span::styled(glyph, Style::default().fg(colors.star).bg(colors.sky))
                    }
                    Cell::Pipe => Span::styled("█", Style::default().fg(colors.pipe)),
                    Cell::Ground => Span::styled("▓", Style::default().fg(colors.ground)),
                    Cell::Bird(glyph) => {
                        let fg = if *glyph == 'x' {
                            Color::Red
                        } else {
                            Color::Yellow
                        };
                        Span::styled(
                            glyph.to_string(),
                            Style::default()
                                .fg(fg)
                                .bg(colors.sky)
                                .add_modifier(Modifier::BOLD),
                        )
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::high_score::MemoryHighScore;

    fn game() -> GameCoordinator {
        GameCoordinator::with_seed(GameConfig::default(), Box::new(MemoryHighScore::new()), 3)
    }

    fn count(cells: &[Vec<Cell>], wanted: fn(&Cell) -> bool) -> usize {
        cells.iter().flatten().filter(|c| wanted(c)).count()
    }

    #[test]
    fn test_empty_area_has_no_cells() {
        assert!(world_cells(&game(), 0, 10).is_empty());
        assert!(world_cells(&game(), 10, 0).is_empty());
    }

    #[test]
    fn test_bird_drawn_once_and_level_before_start() {
        let cells = world_cells(&game(), 80, 24);
        assert_eq!(cells.len(), 24);
        assert_eq!(count(&cells, |c| matches!(c, Cell::Bird(_))), 1);
        assert!(cells.iter().flatten().any(|c| *c == Cell::Bird('►')));
    }

    #[test]
    fn test_ground_fills_bottom_rows() {
        let cells = world_cells(&game(), 80, 24);
        // The floor starts at world x = 0; the camera sees a little behind it.
        assert!(cells[23][10..].iter().all(|c| *c == Cell::Ground));
        assert!(cells[0].iter().all(|c| *c != Cell::Ground));
    }

    #[test]
    fn test_pipes_appear_once_spawned() {
        let mut game = game();
        assert_eq!(count(&world_cells(&game, 200, 24), |c| *c == Cell::Pipe), 0);

        game.primary_action();
        game.frame_tick(0.0);
        assert!(count(&world_cells(&game, 200, 24), |c| *c == Cell::Pipe) > 0);
    }

    #[test]
    fn test_dead_bird_glyph() {
        assert_eq!(bird_glyph(BirdState::Dead, 0.0), 'x');
        assert_eq!(bird_glyph(BirdState::Flying, -0.5), '▲');
        assert_eq!(bird_glyph(BirdState::Flying, 1.0), '▼');
    }
}
