//! Per-frame ChArUco detection snapshot.

use crate::board::CharucoBoard;
use nalgebra::{Point2, Point3};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectionError {
    #[error("{corners} corners but {ids} ids")]
    LengthMismatch { corners: usize, ids: usize },
}

/// Corners and ids a tracker found on the board during the last frame.
///
/// `corners[k]` is the image position of ChArUco corner `ids[k]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CharucoDetection {
    corners: Vec<Point2<f32>>,
    ids: Vec<i32>,
    valid_transform: bool,
}

impl CharucoDetection {
    pub fn new(
        corners: Vec<Point2<f32>>,
        ids: Vec<i32>,
        valid_transform: bool,
    ) -> Result<Self, DetectionError> {
        if corners.len() != ids.len() {
            return Err(DetectionError::LengthMismatch {
                corners: corners.len(),
                ids: ids.len(),
            });
        }
        Ok(Self {
            corners,
            ids,
            valid_transform,
        })
    }

    #[inline]
    pub fn corners(&self) -> &[Point2<f32>] {
        &self.corners
    }

    #[inline]
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    /// Whether the board pose was estimated for this frame.
    #[inline]
    pub fn valid_transform(&self) -> bool {
        self.valid_transform
    }

    pub fn set_valid_transform(&mut self, valid: bool) {
        self.valid_transform = valid;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// `(id, corner)` pairs in detection order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Point2<f32>)> + '_ {
        self.ids.iter().copied().zip(self.corners.iter().copied())
    }

    pub fn clear(&mut self) {
        self.corners.clear();
        self.ids.clear();
        self.valid_transform = false;
    }

    /// Object/image correspondences for pose estimation.
    ///
    /// Ids the board does not know are skipped.
    pub fn object_points(&self, board: &CharucoBoard) -> (Vec<Point3<f32>>, Vec<Point2<f32>>) {
        self.iter()
            .filter_map(|(id, corner)| Some((board.charuco_object_point(id)?, corner)))
            .unzip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CharucoBoardSpec;
    use approx::assert_relative_eq;
    use aruco_boards_core::PredefinedDictionary;

    #[test]
    fn rejects_mismatched_lengths() {
        let err = CharucoDetection::new(vec![Point2::new(1.0, 2.0)], vec![], true).unwrap_err();
        assert_eq!(err, DetectionError::LengthMismatch { corners: 1, ids: 0 });
    }

    #[test]
    fn clear_resets_transform_flag() {
        let mut det =
            CharucoDetection::new(vec![Point2::new(1.0, 2.0)], vec![3], true).expect("det");
        assert_eq!(det.len(), 1);
        det.clear();
        assert!(det.is_empty());
        assert!(!det.valid_transform());
    }

    #[test]
    fn object_points_skip_unknown_ids() {
        let board = CharucoBoard::new(CharucoBoardSpec {
            squares_x: 4,
            squares_y: 3,
            square_length: 0.05,
            marker_length: 0.04,
            dictionary: PredefinedDictionary::Dict4x4_50,
        })
        .expect("board");
        let det = CharucoDetection::new(
            vec![
                Point2::new(10.0, 10.0),
                Point2::new(20.0, 10.0),
                Point2::new(30.0, 10.0),
            ],
            vec![4, 99, 0],
            false,
        )
        .expect("det");

        let (object, image) = det.object_points(&board);
        assert_eq!(object.len(), 2);
        assert_eq!(image, vec![Point2::new(10.0, 10.0), Point2::new(30.0, 10.0)]);
        assert_relative_eq!(object[0].x, 0.10);
        assert_relative_eq!(object[0].y, 0.10);
        assert_relative_eq!(object[1].x, 0.05);
    }
}
