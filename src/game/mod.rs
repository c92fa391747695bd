pub mod board;
pub mod piece;
pub mod scoring;
pub mod snapshot;
pub mod state;

pub use board::{Board, Cell};
pub use piece::{Piece, Shape, random_shape};
pub use snapshot::{ActivePiece, Snapshot, Status};
pub use state::{Game, LockReport, Step};
