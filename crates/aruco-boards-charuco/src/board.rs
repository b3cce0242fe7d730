//! ChArUco board layout.

use aruco_boards_core::PredefinedDictionary;
use nalgebra::{Point3, Vector2};
use serde::{Deserialize, Serialize};

/// Parameters a [`CharucoBoard`] is synthesized from.
///
/// `squares_x`/`squares_y` are **square counts** (not inner corner counts).
/// Lengths share one unit, which is also the unit of the object points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharucoBoardSpec {
    pub squares_x: u32,
    pub squares_y: u32,
    pub square_length: f32,
    pub marker_length: f32,
    pub dictionary: PredefinedDictionary,
}

/// Board synthesis errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CharucoBoardError {
    #[error("squares_x and squares_y must be >= 2 (got {squares_x}x{squares_y})")]
    InvalidSize { squares_x: u32, squares_y: u32 },
    #[error("square length must be finite and > 0 (got {0})")]
    InvalidSquareLength(f32),
    #[error("marker length must be in (0, {square_length}) (got {marker_length})")]
    InvalidMarkerLength {
        marker_length: f32,
        square_length: f32,
    },
    #[error("board needs {needed} markers, {dictionary} has {available}")]
    NotEnoughDictionaryCodes {
        dictionary: PredefinedDictionary,
        needed: usize,
        available: usize,
    },
}

/// A synthesized ChArUco board.
///
/// Layout follows OpenCV: the top-left square is black, markers sit in the
/// white squares and ids are assigned row-major over those squares. The
/// object frame has its origin at the top-left board corner, x to the right,
/// y down, z = 0 on the board plane.
#[derive(Clone, Debug, PartialEq)]
pub struct CharucoBoard {
    spec: CharucoBoardSpec,
    marker_cells: Vec<[u32; 2]>,
}

impl CharucoBoard {
    /// Validate the spec and lay out the markers.
    pub fn new(spec: CharucoBoardSpec) -> Result<Self, CharucoBoardError> {
        if spec.squares_x < 2 || spec.squares_y < 2 {
            return Err(CharucoBoardError::InvalidSize {
                squares_x: spec.squares_x,
                squares_y: spec.squares_y,
            });
        }
        if !spec.square_length.is_finite() || spec.square_length <= 0.0 {
            return Err(CharucoBoardError::InvalidSquareLength(spec.square_length));
        }
        if !spec.marker_length.is_finite()
            || spec.marker_length <= 0.0
            || spec.marker_length >= spec.square_length
        {
            return Err(CharucoBoardError::InvalidMarkerLength {
                marker_length: spec.marker_length,
                square_length: spec.square_length,
            });
        }

        // checked before layout so oversized boards never allocate
        let squares = u64::from(spec.squares_x) * u64::from(spec.squares_y);
        let needed = usize::try_from(squares / 2).unwrap_or(usize::MAX);
        let available = spec.dictionary.marker_count();
        if available < needed {
            return Err(CharucoBoardError::NotEnoughDictionaryCodes {
                dictionary: spec.dictionary,
                needed,
                available,
            });
        }

        let marker_cells = open_cv_charuco_marker_cells(spec.squares_x, spec.squares_y);
        Ok(Self { spec, marker_cells })
    }

    #[inline]
    pub fn spec(&self) -> CharucoBoardSpec {
        self.spec
    }

    /// Number of markers on the board.
    #[inline]
    pub fn marker_count(&self) -> usize {
        self.marker_cells.len()
    }

    /// Number of ChArUco corners (inner chessboard corners).
    #[inline]
    pub fn charuco_corner_count(&self) -> usize {
        (self.spec.squares_x as usize - 1) * (self.spec.squares_y as usize - 1)
    }

    /// Physical extent of the board (without margins).
    pub fn board_size(&self) -> Vector2<f32> {
        Vector2::new(
            self.spec.squares_x as f32 * self.spec.square_length,
            self.spec.squares_y as f32 * self.spec.square_length,
        )
    }

    /// Square cell `(sx, sy)` carrying the given marker id.
    pub fn marker_cell(&self, marker_id: i32) -> Option<[u32; 2]> {
        let idx = usize::try_from(marker_id).ok()?;
        self.marker_cells.get(idx).copied()
    }

    /// Marker corners in object space, ordered TL, TR, BR, BL.
    pub fn marker_object_corners(&self, marker_id: i32) -> Option<[Point3<f32>; 4]> {
        let [sx, sy] = self.marker_cell(marker_id)?;
        let square = self.spec.square_length;
        let marker = self.spec.marker_length;
        let inset = 0.5 * (square - marker);
        let x0 = sx as f32 * square + inset;
        let y0 = sy as f32 * square + inset;
        Some([
            Point3::new(x0, y0, 0.0),
            Point3::new(x0 + marker, y0, 0.0),
            Point3::new(x0 + marker, y0 + marker, 0.0),
            Point3::new(x0, y0 + marker, 0.0),
        ])
    }

    /// True if `id` is a valid ChArUco corner id for this board.
    pub fn contains_charuco_id(&self, id: i32) -> bool {
        usize::try_from(id).is_ok_and(|id| id < self.charuco_corner_count())
    }

    /// Object point of a ChArUco corner id.
    pub fn charuco_object_point(&self, id: i32) -> Option<Point3<f32>> {
        if !self.contains_charuco_id(id) {
            return None;
        }
        let stride = self.spec.squares_x as i32 - 1;
        let ix = (id % stride + 1) as f32;
        let iy = (id / stride + 1) as f32;
        Some(Point3::new(
            ix * self.spec.square_length,
            iy * self.spec.square_length,
            0.0,
        ))
    }

    /// All ChArUco corner object points, indexed by id.
    pub fn charuco_object_points(&self) -> Vec<Point3<f32>> {
        (0..self.charuco_corner_count() as i32)
            .filter_map(|id| self.charuco_object_point(id))
            .collect()
    }

    /// The four ChArUco corner ids around a marker (TL, TR, BR, BL).
    ///
    /// Returns `None` if the marker is unknown or touches the board border.
    pub fn marker_surrounding_charuco_corners(&self, marker_id: i32) -> Option<[usize; 4]> {
        let [sx, sy] = self.marker_cell(marker_id)?;
        let (squares_x, squares_y) = (self.spec.squares_x as usize, self.spec.squares_y as usize);
        let (sx, sy) = (sx as usize, sy as usize);
        Some([
            charuco_corner_id(squares_x, squares_y, sx, sy)?,
            charuco_corner_id(squares_x, squares_y, sx + 1, sy)?,
            charuco_corner_id(squares_x, squares_y, sx + 1, sy + 1)?,
            charuco_corner_id(squares_x, squares_y, sx, sy + 1)?,
        ])
    }
}

/// Row-major ChArUco corner id for the chessboard intersection `(ix, iy)`.
///
/// Only inner intersections (`1..squares_x`, `1..squares_y`) carry an id.
pub fn charuco_corner_id(
    squares_x: usize,
    squares_y: usize,
    ix: usize,
    iy: usize,
) -> Option<usize> {
    if ix == 0 || iy == 0 || ix >= squares_x || iy >= squares_y {
        return None;
    }
    Some((iy - 1) * (squares_x - 1) + (ix - 1))
}

fn open_cv_charuco_marker_cells(squares_x: u32, squares_y: u32) -> Vec<[u32; 2]> {
    let mut out = Vec::with_capacity((squares_x as usize * squares_y as usize) / 2);
    for sy in 0..squares_y {
        for sx in 0..squares_x {
            // top-left square is black => white squares have (sx+sy) odd
            if (sx + sy) % 2 == 1 {
                out.push([sx, sy]);
            }
        }
    }
    out
}
