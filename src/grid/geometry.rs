//! Geometric identifiers: dots, line ids, box ids.
//!
//! Line and box ids are derived from their position, so they are stable
//! across regeneration and usable as mapping keys.

use serde::{Deserialize, Serialize};

/// A grid vertex.
///
/// Purely positional; the presentation layer renders dots, but nothing in
/// the rules references them by identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dot {
    pub x: u8,
    pub y: u8,
}

impl Dot {
    /// Create a new dot.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Line orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Connects `(x, y)` to `(x+1, y)`.
    Horizontal,
    /// Connects `(x, y)` to `(x, y+1)`.
    Vertical,
}

/// Stable identifier for a line: orientation plus the smaller endpoint.
///
/// Exactly one line exists per adjacent dot pair, so this uniquely
/// identifies a line within a grid configuration.
///
/// ```
/// use dots_boxes::grid::{Dot, LineId};
///
/// let id = LineId::horizontal(2, 0);
/// assert_eq!(id.start(), Dot::new(2, 0));
/// assert_eq!(id.end(), Dot::new(3, 0));
/// assert_eq!(format!("{}", id), "h-2-0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId {
    pub orientation: Orientation,
    pub x: u8,
    pub y: u8,
}

impl LineId {
    /// Create the id of the horizontal line starting at `(x, y)`.
    #[must_use]
    pub const fn horizontal(x: u8, y: u8) -> Self {
        Self {
            orientation: Orientation::Horizontal,
            x,
            y,
        }
    }

    /// Create the id of the vertical line starting at `(x, y)`.
    #[must_use]
    pub const fn vertical(x: u8, y: u8) -> Self {
        Self {
            orientation: Orientation::Vertical,
            x,
            y,
        }
    }

    /// The smaller endpoint of the line.
    #[must_use]
    pub const fn start(self) -> Dot {
        Dot::new(self.x, self.y)
    }

    /// The larger endpoint of the line.
    #[must_use]
    pub const fn end(self) -> Dot {
        match self.orientation {
            Orientation::Horizontal => Dot::new(self.x + 1, self.y),
            Orientation::Vertical => Dot::new(self.x, self.y + 1),
        }
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self.orientation {
            Orientation::Horizontal => 'h',
            Orientation::Vertical => 'v',
        };
        write!(f, "{}-{}-{}", tag, self.x, self.y)
    }
}

/// Stable identifier for a unit box, keyed by its top-left dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoxId {
    pub x: u8,
    pub y: u8,
}

impl BoxId {
    /// Create a new box id.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// The four bounding line ids: top, right, bottom, left.
    #[must_use]
    pub const fn bounding_lines(self) -> [LineId; 4] {
        [
            LineId::horizontal(self.x, self.y),
            LineId::vertical(self.x + 1, self.y),
            LineId::horizontal(self.x, self.y + 1),
            LineId::vertical(self.x, self.y),
        ]
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "box-{}-{}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_id_endpoints() {
        let h = LineId::horizontal(1, 2);
        assert_eq!(h.start(), Dot::new(1, 2));
        assert_eq!(h.end(), Dot::new(2, 2));

        let v = LineId::vertical(1, 2);
        assert_eq!(v.start(), Dot::new(1, 2));
        assert_eq!(v.end(), Dot::new(1, 3));
    }

    #[test]
    fn test_line_id_display() {
        assert_eq!(format!("{}", LineId::horizontal(0, 3)), "h-0-3");
        assert_eq!(format!("{}", LineId::vertical(4, 0)), "v-4-0");
        assert_eq!(format!("{}", BoxId::new(2, 1)), "box-2-1");
    }

    #[test]
    fn test_line_id_equality_across_regeneration() {
        // Ids are pure values: two derivations of the same line compare equal.
        assert_eq!(LineId::horizontal(3, 1), LineId::horizontal(3, 1));
        assert_ne!(LineId::horizontal(3, 1), LineId::vertical(3, 1));
    }

    #[test]
    fn test_box_bounding_lines() {
        let [top, right, bottom, left] = BoxId::new(1, 1).bounding_lines();

        assert_eq!(top, LineId::horizontal(1, 1));
        assert_eq!(right, LineId::vertical(2, 1));
        assert_eq!(bottom, LineId::horizontal(1, 2));
        assert_eq!(left, LineId::vertical(1, 1));
    }

    #[test]
    fn test_box_lines_are_distinct() {
        let lines = BoxId::new(0, 0).bounding_lines();
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(lines[i], lines[j]);
            }
        }
    }

    #[test]
    fn test_serialization() {
        let id = LineId::vertical(2, 3);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: LineId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
