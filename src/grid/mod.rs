//! Grid generation and geometry.
//!
//! A grid of dimension `n` has `n²` dots, `2·n·(n-1)` candidate lines, and
//! `(n-1)²` candidate boxes. All of them are derived deterministically from
//! the dimension, created together when a game is (re)configured, and
//! destroyed wholesale on the next reset.

pub mod factory;
pub mod geometry;

pub use factory::{
    generate_boxes, generate_dots, generate_lines, BoxCell, Grid, Line, MAX_GRID_SIZE,
    MIN_GRID_SIZE,
};
pub use geometry::{BoxId, Dot, LineId, Orientation};
