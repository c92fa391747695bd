use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use blockfall::game::ActivePiece;
use blockfall::{
    BOARD_H, BOARD_W, CELL_W, LockReport, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W, Shape,
    Snapshot, Status,
};

const TITLE: &str = "BLOCKFALL";

pub fn draw_game(frame: &mut Frame, snapshot: &Snapshot, last_lock: Option<LockReport>) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH || area.height < PLAY_H as u16 + 2 {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH,
            PLAY_H + 2
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(TITLE));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title(TITLE)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_W as u16),
            Constraint::Length(SIDEBAR_W),
            Constraint::Min(0),
        ])
        .split(cabinet_inner);

    let well_rect = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(0),
        ])
        .split(cols[1])[1];

    draw_playfield(frame, snapshot, well_rect);
    draw_sidebar(frame, snapshot, last_lock, cols[2]);
}

fn shape_color(shape: Shape) -> Color {
    match shape {
        Shape::I => Color::Rgb(0x00, 0xBC, 0xD4),
        Shape::O => Color::Rgb(0xFF, 0xEB, 0x3B),
        Shape::T => Color::Rgb(0x9C, 0x27, 0xB0),
        Shape::S => Color::Rgb(0x4C, 0xAF, 0x50),
        Shape::Z => Color::Rgb(0xF4, 0x43, 0x36),
        Shape::J => Color::Rgb(0x3F, 0x51, 0xB5),
        Shape::L => Color::Rgb(0xFF, 0x98, 0x00),
    }
}

#[derive(Clone, Copy)]
enum Glyph {
    Empty,
    Ghost(Shape),
    Block(Shape),
}

/// Per-cell glyphs for the inner well: locked cells, then ghost, then the
/// active piece on top.
fn compose(snapshot: &Snapshot) -> [[Glyph; BOARD_W]; BOARD_H] {
    let mut grid = [[Glyph::Empty; BOARD_W]; BOARD_H];
    for (x, y, shape) in snapshot.board.filled_cells() {
        grid[y][x] = Glyph::Block(shape);
    }

    let mut plot = |cells: &[(i32, i32)], glyph: Glyph| {
        for &(x, y) in cells {
            if let (Ok(xu), Ok(yu)) = (usize::try_from(x), usize::try_from(y)) {
                if xu < BOARD_W && yu < BOARD_H {
                    grid[yu][xu] = glyph;
                }
            }
        }
    };
    if let Some(ActivePiece { shape, cells }) = snapshot.active {
        if let Some(ghost) = snapshot.ghost {
            plot(&ghost, Glyph::Ghost(shape));
        }
        plot(&cells, Glyph::Block(shape));
    }
    grid
}

fn draw_playfield(frame: &mut Frame, snapshot: &Snapshot, play_rect: Rect) {
    let wall = Style::default().fg(Color::Gray);
    let inner_w = BOARD_W * CELL_W;

    let mut lines = Vec::with_capacity(PLAY_H);
    lines.push(Line::styled(format!("┌{}┐", "─".repeat(inner_w)), wall));
    for row in compose(snapshot) {
        let mut spans = Vec::with_capacity(BOARD_W + 2);
        spans.push(Span::styled("│", wall));
        for glyph in row {
            spans.push(match glyph {
                Glyph::Empty => Span::raw(" ".repeat(CELL_W)),
                Glyph::Ghost(shape) => {
                    Span::styled("·".repeat(CELL_W), Style::default().fg(shape_color(shape)))
                }
                Glyph::Block(shape) => {
                    Span::styled("█".repeat(CELL_W), Style::default().fg(shape_color(shape)))
                }
            });
        }
        spans.push(Span::styled("│", wall));
        lines.push(Line::from(spans));
    }
    lines.push(Line::styled(format!("└{}┘", "═".repeat(inner_w)), wall));

    frame.render_widget(Paragraph::new(lines), play_rect);

    if let Some(banner) = overlay_text(snapshot.status()) {
        let overlay_w = (PLAY_W as u16).saturating_sub(4).max(8);
        let overlay_h = 4u16;
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new(banner)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(overlay, popup);
    }
}

fn overlay_text(status: Status) -> Option<&'static str> {
    match status {
        Status::Playing => None,
        Status::Paused => Some("PAUSED\np to resume"),
        Status::GameOver => Some("GAME OVER\nr to restart"),
    }
}

fn draw_sidebar(
    frame: &mut Frame,
    snapshot: &Snapshot,
    last_lock: Option<LockReport>,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Length(10), Constraint::Min(0)])
        .split(area);

    let last = match last_lock {
        Some(report) if report.cleared > 0 => format!(
            "+{} ({} line{})",
            report.points,
            report.cleared,
            if report.cleared == 1 { "" } else { "s" }
        ),
        _ => "-".to_string(),
    };

    let info = Paragraph::new(vec![
        Line::raw(format!("{:<7} {}", "STATUS:", snapshot.status())),
        Line::raw(format!("{:<7} {}", "SCORE:", snapshot.score)),
        Line::raw(format!("{:<7} {}", "LINES:", snapshot.lines)),
        Line::raw(format!("{:<7} {}", "LEVEL:", snapshot.level)),
        Line::raw(format!("{:<7} {}", "LAST:", last)),
    ])
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new(vec![
        Line::raw("←/→   move"),
        Line::raw("↑     rotate"),
        Line::raw("↓     soft drop"),
        Line::raw("space hard drop"),
        Line::raw("p     pause"),
        Line::raw("r     restart"),
        Line::raw("q/esc quit"),
    ])
    .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, chunks[1]);
}

#[cfg(test)]
mod tests {
    use blockfall::Game;

    use super::*;

    #[test]
    fn compose_draws_active_piece_over_ghost() {
        let snapshot = Game::with_seed(2).snapshot();
        let grid = compose(&snapshot);
        let active = snapshot.active.expect("active piece");
        for (x, y) in active.cells {
            let (x, y) = (x as usize, y as usize);
            assert!(matches!(grid[y][x], Glyph::Block(s) if s == active.shape));
        }
        let ghosts = grid
            .iter()
            .flatten()
            .filter(|g| matches!(g, Glyph::Ghost(_)))
            .count();
        assert_eq!(ghosts, 4);
    }

    #[test]
    fn overlay_only_when_not_playing() {
        assert_eq!(overlay_text(Status::Playing), None);
        assert!(overlay_text(Status::Paused).is_some());
        assert!(overlay_text(Status::GameOver).is_some());
    }
}
