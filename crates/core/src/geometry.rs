//! Geometry module - tetromino shape tables
//!
//! Every (kind, orientation) pair maps to a 16-bit [`ShapeMask`] over a 4x4
//! box, laid out row-major with the most significant bit at the top-left:
//!
//! ```text
//! 00 01 02 03
//! 04 05 06 07
//! 08 09 10 11
//! 12 13 14 15
//! ```
//!
//! Cell index `4 * row + col` lives in bit `15 - (4 * row + col)`.
//! The tables are compile-time constants indexed `[kind][orientation]`.

use crate::types::{Orientation, PieceKind};

/// Occupancy of a 4x4 box, bit 15 = (row 0, col 0), bit 0 = (row 3, col 3)
pub type ShapeMask = u16;

/// Build a mask from four cell indices
const fn mask(cells: [u8; 4]) -> ShapeMask {
    let mut bits: ShapeMask = 0;
    let mut i = 0;
    while i < 4 {
        bits |= 1 << (15 - cells[i]);
        i += 1;
    }
    bits
}

/// Shape masks indexed `[kind][orientation]`, orientation order Up, Right, Down, Left
///
/// Walking a row left to right is one rotate-right step at a time.
const SHAPES: [[ShapeMask; 4]; 7] = [
    // I
    [
        mask([4, 5, 6, 7]),
        mask([2, 6, 10, 14]),
        mask([8, 9, 10, 11]),
        mask([1, 5, 9, 13]),
    ],
    // J
    [
        mask([4, 5, 6, 10]),
        mask([1, 5, 8, 9]),
        mask([0, 4, 5, 6]),
        mask([1, 2, 5, 9]),
    ],
    // L
    [
        mask([2, 4, 5, 6]),
        mask([1, 5, 9, 10]),
        mask([4, 5, 6, 8]),
        mask([0, 1, 5, 9]),
    ],
    // O
    [
        mask([1, 2, 5, 6]),
        mask([1, 2, 5, 6]),
        mask([1, 2, 5, 6]),
        mask([1, 2, 5, 6]),
    ],
    // T
    [
        mask([1, 4, 5, 6]),
        mask([1, 5, 6, 9]),
        mask([4, 5, 6, 9]),
        mask([1, 4, 5, 9]),
    ],
    // S
    [
        mask([1, 2, 4, 5]),
        mask([1, 5, 6, 10]),
        mask([5, 6, 8, 9]),
        mask([0, 4, 5, 9]),
    ],
    // Z
    [
        mask([0, 1, 5, 6]),
        mask([2, 5, 6, 9]),
        mask([4, 5, 9, 10]),
        mask([1, 4, 5, 8]),
    ],
];

/// Preview cells over a 2x4 grid (bit 7 = row 0 col 0, bit 0 = row 1 col 3)
///
/// This is the spawn silhouette trimmed to two rows, used by hold/next frames.
const PREVIEWS: [u8; 7] = [
    preview([0, 1, 2, 3]), // I
    preview([0, 1, 2, 6]), // J
    preview([2, 4, 5, 6]), // L
    preview([0, 1, 4, 5]), // O
    preview([1, 4, 5, 6]), // T
    preview([1, 2, 4, 5]), // S
    preview([0, 1, 5, 6]), // Z
];

const fn preview(cells: [u8; 4]) -> u8 {
    let mut bits = 0u8;
    let mut i = 0;
    while i < 4 {
        bits |= 1 << (7 - cells[i]);
        i += 1;
    }
    bits
}

/// Shape mask for a kind in a given orientation
#[inline]
pub fn shape_mask(kind: PieceKind, orientation: Orientation) -> ShapeMask {
    SHAPES[kind.index()][orientation.index()]
}

/// Whether cell (col, row) of the 4x4 box is set
///
/// Coordinates outside `[0, 4)` are never set.
#[inline]
pub fn is_occupied(kind: PieceKind, orientation: Orientation, col: i8, row: i8) -> bool {
    if !(0..4).contains(&col) || !(0..4).contains(&row) {
        return false;
    }
    let bit = 15 - (4 * row + col) as u16;
    shape_mask(kind, orientation) & (1 << bit) != 0
}

/// Iterate the (col, row) offsets of the set cells, top to bottom, left to right
pub fn cells(kind: PieceKind, orientation: Orientation) -> impl Iterator<Item = (i8, i8)> {
    let bits = shape_mask(kind, orientation);
    (0..16u16)
        .filter(move |&i| bits & (1 << (15 - i)) != 0)
        .map(|i| ((i % 4) as i8, (i / 4) as i8))
}

/// Width of the preview silhouette, in cells
pub fn bounding_width(kind: PieceKind) -> u16 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Height of the preview silhouette, in cells
pub fn bounding_height(kind: PieceKind) -> u16 {
    match kind {
        PieceKind::I => 1,
        _ => 2,
    }
}

/// Whether cell (col, row) of the 2x4 preview grid is highlighted
pub fn preview_cell(kind: PieceKind, col: u16, row: u16) -> bool {
    if col >= 4 || row >= 2 {
        return false;
    }
    PREVIEWS[kind.index()] & (1 << (7 - (row * 4 + col))) != 0
}
