use rand::Rng;

use crate::config::{SPAWN_X, SPAWN_Y};

/// Offsets of the four blocks of one rotation state, relative to the anchor.
pub type Offsets = [(i32, i32); 4];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shape {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl Shape {
    pub const ALL: [Shape; 7] = [
        Shape::I,
        Shape::O,
        Shape::T,
        Shape::S,
        Shape::Z,
        Shape::J,
        Shape::L,
    ];

    /// Ordered rotation states; index with [`Shape::offsets`] to get wraparound.
    pub fn rotation_states(self) -> &'static [Offsets] {
        const I: [Offsets; 2] = [
            [(0, 1), (1, 1), (2, 1), (3, 1)],
            [(2, 0), (2, 1), (2, 2), (2, 3)],
        ];
        const O: [Offsets; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];
        const T: [Offsets; 4] = [
            [(1, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (2, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (1, 2)],
            [(1, 0), (0, 1), (1, 1), (1, 2)],
        ];
        const S: [Offsets; 2] = [
            [(1, 0), (2, 0), (0, 1), (1, 1)],
            [(1, 0), (1, 1), (2, 1), (2, 2)],
        ];
        const Z: [Offsets; 2] = [
            [(0, 0), (1, 0), (1, 1), (2, 1)],
            [(2, 0), (1, 1), (2, 1), (1, 2)],
        ];
        const J: [Offsets; 4] = [
            [(0, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (2, 0), (1, 1), (1, 2)],
            [(0, 1), (1, 1), (2, 1), (2, 2)],
            [(1, 0), (1, 1), (0, 2), (1, 2)],
        ];
        const L: [Offsets; 4] = [
            [(2, 0), (0, 1), (1, 1), (2, 1)],
            [(1, 0), (1, 1), (1, 2), (2, 2)],
            [(0, 1), (1, 1), (2, 1), (0, 2)],
            [(0, 0), (1, 0), (1, 1), (1, 2)],
        ];

        match self {
            Shape::I => &I,
            Shape::O => &O,
            Shape::T => &T,
            Shape::S => &S,
            Shape::Z => &Z,
            Shape::J => &J,
            Shape::L => &L,
        }
    }

    pub fn offsets(self, rotation: usize) -> &'static Offsets {
        let states = self.rotation_states();
        &states[rotation % states.len()]
    }
}

/// Uniform, independent draw over the seven shapes.
pub fn random_shape<R: Rng + ?Sized>(rng: &mut R) -> Shape {
    Shape::ALL[rng.gen_range(0..Shape::ALL.len())]
}

/// A falling piece: shape, unbounded rotation counter and anchor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            rotation: 0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Absolute board coordinates of the four blocks.
    pub fn cells(&self) -> Offsets {
        self.shape
            .offsets(self.rotation)
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.wrapping_add(1),
            ..*self
        }
    }

    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rotation_state_counts() {
        let counts: Vec<usize> = Shape::ALL
            .iter()
            .map(|s| s.rotation_states().len())
            .collect();
        assert_eq!(counts, vec![2, 1, 4, 2, 2, 4, 4]);
    }

    #[test]
    fn every_state_has_four_distinct_blocks() {
        for shape in Shape::ALL {
            for state in shape.rotation_states() {
                let unique: HashSet<_> = state.iter().collect();
                assert_eq!(unique.len(), 4, "{shape:?} {state:?}");
            }
        }
    }

    #[test]
    fn rotation_index_wraps_modulo_table_length() {
        assert_eq!(Shape::I.offsets(0), Shape::I.offsets(2));
        assert_eq!(Shape::I.offsets(1), Shape::I.offsets(7));
        assert_eq!(Shape::O.offsets(0), Shape::O.offsets(5));
        assert_eq!(Shape::T.offsets(1), Shape::T.offsets(5));
        assert_ne!(Shape::T.offsets(1), Shape::T.offsets(2));
    }

    #[test]
    fn cells_are_anchor_plus_offsets() {
        let piece = Piece {
            shape: Shape::T,
            rotation: 1,
            x: 4,
            y: 7,
        };
        assert_eq!(piece.cells(), [(5, 7), (5, 8), (6, 8), (5, 9)]);
    }

    #[test]
    fn spawn_uses_fixed_anchor() {
        let piece = Piece::spawn(Shape::L);
        assert_eq!((piece.x, piece.y, piece.rotation), (3, 0, 0));
        assert_eq!(piece.cells(), [(5, 0), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn random_shape_reaches_every_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<Shape> = (0..500).map(|_| random_shape(&mut rng)).collect();
        assert_eq!(seen.len(), Shape::ALL.len());
    }
}
