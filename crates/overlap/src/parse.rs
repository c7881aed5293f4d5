//! Parsing of `<name> <x1> <y1> <x2> <y2>` records into an ordered set.
//!
//! Parsing is fail-fast: the first bad record aborts the whole input, and the
//! error carries that record verbatim so callers can report it unchanged.

use crate::rect::Rect;

/// A record that could not be parsed. Each variant embeds the full offending
/// input line so the CLI can surface it without extra bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("non-numeric value provided as input for '{record}'")]
    NonNumericCoordinate { record: String },
    #[error("incorrect number of coordinates for '{record}'")]
    InvalidCoordinateCount { record: String },
}

/// Named rectangles in input order.
///
/// Names are unique: a repeated name replaces the earlier rectangle but keeps
/// its original position, so matrix row/column order is stable.
#[derive(Clone, Debug, Default)]
pub struct RectSet {
    entries: Vec<(String, Rect)>,
}

impl RectSet {
    pub fn insert(&mut self, name: &str, rect: Rect) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = rect,
            None => self.entries.push((name.to_string(), rect)),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rect)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Rectangles only, in set order.
    pub fn rects(&self) -> impl Iterator<Item = &Rect> {
        self.entries.iter().map(|(_, r)| r)
    }
}

/// Parse one record per line. Blank and whitespace-only lines are skipped;
/// anything else must be a name followed by exactly four decimal coordinates,
/// corners in any order.
pub fn parse_rectangles<'a, I>(lines: I) -> Result<RectSet, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut set = RectSet::default();
    for line in lines {
        let mut fields = line.split_whitespace();
        let Some(name) = fields.next() else {
            continue;
        };
        let coords = fields
            .map(|tok| tok.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|_| ParseError::NonNumericCoordinate {
                record: line.to_string(),
            })?;
        let rect = Rect::from_coords(&coords).map_err(|_| ParseError::InvalidCoordinateCount {
            record: line.to_string(),
        })?;
        set.insert(name, rect);
    }
    Ok(set)
}
