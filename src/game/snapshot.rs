use std::fmt;

use crate::game::piece::Offsets;
use crate::game::{Board, Game, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Paused,
    GameOver,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::Playing => "Playing",
            Status::Paused => "PAUSED",
            Status::GameOver => "GAME OVER",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    pub shape: Shape,
    pub cells: Offsets,
}

/// Read-only copy of everything a renderer needs to redraw the well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub board: Board,
    pub active: Option<ActivePiece>,
    pub ghost: Option<Offsets>,
    pub score: u64,
    pub lines: u64,
    pub level: u64,
    pub game_over: bool,
    pub paused: bool,
}

impl Snapshot {
    pub fn capture(game: &Game) -> Self {
        Self {
            board: game.board().clone(),
            active: game.current().map(|piece| ActivePiece {
                shape: piece.shape,
                cells: piece.cells(),
            }),
            ghost: game.ghost().map(|piece| piece.cells()),
            score: game.score(),
            lines: game.lines(),
            level: game.level(),
            game_over: game.is_game_over(),
            paused: game.is_paused(),
        }
    }

    pub fn status(&self) -> Status {
        if self.game_over {
            Status::GameOver
        } else if self.paused {
            Status::Paused
        } else {
            Status::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_snapshot() {
        let game = Game::with_seed(3);
        let snap = Snapshot::capture(&game);
        assert_eq!(snap.status(), Status::Playing);
        assert_eq!((snap.score, snap.lines, snap.level), (0, 0, 1));
        let active = snap.active.expect("piece spawned");
        assert_eq!(Some(active.cells), game.current().map(|p| p.cells()));
        // Ghost sits on the floor of an empty well.
        let ghost = snap.ghost.expect("ghost present");
        assert_eq!(ghost.iter().map(|&(_, y)| y).max(), Some(19));
    }

    #[test]
    fn status_words() {
        assert_eq!(Status::Playing.to_string(), "Playing");
        assert_eq!(Status::Paused.to_string(), "PAUSED");
        assert_eq!(Status::GameOver.to_string(), "GAME OVER");
    }

    #[test]
    fn paused_status() {
        let mut game = Game::with_seed(3);
        assert!(game.toggle_pause());
        assert_eq!(game.snapshot().status(), Status::Paused);
    }
}
