pub mod config;
pub mod driver;
pub mod game;

pub use config::{
    BOARD_H, BOARD_W, CELL_W, MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W, Timing,
};
pub use driver::{Command, Driver, Response};
pub use game::{Board, Cell, Game, LockReport, Piece, Shape, Snapshot, Status, Step};
