//! N×N overlap matrix emission.
//!
//! Rows and columns follow the set's input order; each row is its cells
//! joined by single tabs, terminated by one newline.

use std::io::{self, Write};

use crate::parse::RectSet;
use crate::rect::Rect;

/// Which cell value the matrix carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatrixKind {
    /// `1` when the pair overlaps, `0` otherwise.
    Flags,
    /// Intersection area when the pair overlaps, `0` otherwise.
    Areas,
}

fn cell(kind: MatrixKind, row: &Rect, col: &Rect) -> String {
    match (kind, row.overlap(col)) {
        (MatrixKind::Flags, Some(_)) => "1".to_string(),
        // {:?} is the shortest round-trip decimal, e.g. 4.0 rather than 4
        (MatrixKind::Areas, Some(o)) => format!("{:?}", o.area()),
        (_, None) => "0".to_string(),
    }
}

/// Write the full pairwise matrix for `set` to `out`.
pub fn write_matrix<W: Write>(set: &RectSet, kind: MatrixKind, out: &mut W) -> io::Result<()> {
    for row in set.rects() {
        let cells: Vec<String> = set.rects().map(|col| cell(kind, row, col)).collect();
        writeln!(out, "{}", cells.join("\t"))?;
    }
    Ok(())
}
