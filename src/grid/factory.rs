//! Grid factory: derives dots, lines, and boxes from a grid dimension.
//!
//! Lines live in an arena `Vec`; lookups go through an id-to-index map, and
//! each line knows the (at most two) boxes it bounds. Completion checks are
//! O(1) lookups instead of rescans of the line collection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::geometry::{BoxId, Dot, LineId};
use crate::core::{GameError, PlayerId, Result};

/// Smallest supported grid dimension.
pub const MIN_GRID_SIZE: u8 = 3;
/// Largest supported grid dimension.
pub const MAX_GRID_SIZE: u8 = 10;

/// A drawable edge between two adjacent dots.
///
/// `drawn == false` implies `owner == None`; once drawn, a line never
/// reverts within a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub id: LineId,
    pub start: Dot,
    pub end: Dot,
    pub drawn: bool,
    pub owner: Option<PlayerId>,
}

impl Line {
    fn undrawn(id: LineId) -> Self {
        Self {
            id,
            start: id.start(),
            end: id.end(),
            drawn: false,
            owner: None,
        }
    }
}

/// A unit cell bounded by four lines (top, right, bottom, left).
///
/// Owned by whichever player draws its fourth bounding line; ownership is
/// set at most once and never reassigned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxCell {
    pub id: BoxId,
    pub lines: [LineId; 4],
    pub owner: Option<PlayerId>,
}

impl BoxCell {
    fn unowned(id: BoxId) -> Self {
        Self {
            id,
            lines: id.bounding_lines(),
            owner: None,
        }
    }
}

/// All dots for a grid of the given dimension, row-major.
///
/// Pure function of the dimension; ordering is reproducible.
#[must_use]
pub fn generate_dots(size: u8) -> Vec<Dot> {
    let mut dots = Vec::with_capacity(size as usize * size as usize);
    for y in 0..size {
        for x in 0..size {
            dots.push(Dot::new(x, y));
        }
    }
    dots
}

/// All candidate lines for a grid of the given dimension, undrawn.
///
/// `size * (size - 1)` horizontal lines followed by `(size - 1) * size`
/// vertical ones.
#[must_use]
pub fn generate_lines(size: u8) -> Vec<Line> {
    let n = size as usize;
    let mut lines = Vec::with_capacity(2 * n * (n - 1));

    for y in 0..size {
        for x in 0..size - 1 {
            lines.push(Line::undrawn(LineId::horizontal(x, y)));
        }
    }
    for y in 0..size - 1 {
        for x in 0..size {
            lines.push(Line::undrawn(LineId::vertical(x, y)));
        }
    }

    lines
}

/// All `(size - 1)²` candidate boxes for a grid of the given dimension,
/// unowned.
#[must_use]
pub fn generate_boxes(size: u8) -> Vec<BoxCell> {
    let n = size as usize - 1;
    let mut boxes = Vec::with_capacity(n * n);
    for y in 0..size - 1 {
        for x in 0..size - 1 {
            boxes.push(BoxCell::unowned(BoxId::new(x, y)));
        }
    }
    boxes
}

/// The fixed geometry and mutable line/box state for one configuration.
///
/// Owned by the game engine; the presentation layer only reads the line and
/// box slices.
#[derive(Clone, Debug)]
pub struct Grid {
    size: u8,
    dots: Vec<Dot>,
    lines: Vec<Line>,
    boxes: Vec<BoxCell>,
    /// Arena index of each line by id.
    line_index: FxHashMap<LineId, usize>,
    /// Arena indices of the boxes each line bounds. Interior lines bound
    /// two boxes, edge lines one.
    boxes_by_line: FxHashMap<LineId, SmallVec<[usize; 2]>>,
}

impl Grid {
    /// Generate the full grid for a dimension in `[MIN_GRID_SIZE, MAX_GRID_SIZE]`.
    ///
    /// The UI enforces the same range, but out-of-range sizes are rejected
    /// here as well rather than trusting the caller.
    pub fn generate(size: u8) -> Result<Self> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            return Err(GameError::invalid_configuration(format!(
                "grid size {size} out of range {MIN_GRID_SIZE}-{MAX_GRID_SIZE}"
            )));
        }

        let dots = generate_dots(size);
        let lines = generate_lines(size);
        let boxes = generate_boxes(size);

        let line_index = lines
            .iter()
            .enumerate()
            .map(|(i, line)| (line.id, i))
            .collect();

        let mut boxes_by_line: FxHashMap<LineId, SmallVec<[usize; 2]>> = FxHashMap::default();
        for (i, cell) in boxes.iter().enumerate() {
            for line_id in cell.lines {
                boxes_by_line.entry(line_id).or_default().push(i);
            }
        }

        Ok(Self {
            size,
            dots,
            lines,
            boxes,
            line_index,
            boxes_by_line,
        })
    }

    /// The grid dimension.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// All dots, row-major.
    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// All lines.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All boxes.
    #[must_use]
    pub fn boxes(&self) -> &[BoxCell] {
        &self.boxes
    }

    /// Look up a line by id.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.line_index.get(&id).map(|&i| &self.lines[i])
    }

    /// Look up a box by id.
    #[must_use]
    pub fn box_cell(&self, id: BoxId) -> Option<&BoxCell> {
        self.boxes.iter().find(|cell| cell.id == id)
    }

    /// True once every line is drawn.
    #[must_use]
    pub fn all_drawn(&self) -> bool {
        self.lines.iter().all(|line| line.drawn)
    }

    pub(crate) fn line_mut(&mut self, id: LineId) -> Option<&mut Line> {
        self.line_index.get(&id).map(|&i| &mut self.lines[i])
    }

    /// Arena indices of the boxes bounded by `id`. Empty for unknown ids.
    pub(crate) fn adjacent_boxes(&self, id: LineId) -> &[usize] {
        self.boxes_by_line
            .get(&id)
            .map(SmallVec::as_slice)
            .unwrap_or(&[])
    }

    /// True when all four bounding lines of the box at `index` are drawn.
    pub(crate) fn box_complete(&self, index: usize) -> bool {
        self.boxes[index]
            .lines
            .iter()
            .all(|&id| self.line(id).is_some_and(|line| line.drawn))
    }

    pub(crate) fn box_at_mut(&mut self, index: usize) -> &mut BoxCell {
        &mut self.boxes[index]
    }
}
