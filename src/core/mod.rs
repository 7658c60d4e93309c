//! Core module - pure game rules with no I/O
//!
//! Shapes, rotation geometry, the board, and single-piece mechanics.
//! Everything here is deterministic and free of timing, threads, and
//! presentation concerns.

pub mod board;
pub mod catalog;
pub mod geometry;
pub mod piece;
pub mod rng;

// Re-export commonly used types
pub use board::Board;
pub use geometry::{Bitmap, RotationProperties, ShapeTable, SHAPE_TABLE};
pub use piece::Piece;
pub use rng::SimpleRng;
