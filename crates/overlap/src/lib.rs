//! Pairwise overlap matrices for named axis-aligned rectangles.
//!
//! The pipeline is linear: parse `<name> <x1> <y1> <x2> <y2>` records into an
//! ordered [`RectSet`], then emit an N×N tab-separated grid where each cell
//! describes the overlap of a (row, column) rectangle pair.
//!
//! All geometry lives in [`Rect`]: canonical construction from corners in any
//! order, strict-inequality overlap, area, and 90° rotation.

pub mod matrix;
pub mod parse;
pub mod rect;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use matrix::{write_matrix, MatrixKind};
pub use parse::{parse_rectangles, ParseError, RectSet};
pub use rect::Rect;
