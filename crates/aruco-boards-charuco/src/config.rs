use crate::board::CharucoBoardSpec;
use aruco_boards_core::{BoardBase, ImageSize, PredefinedDictionary};
use serde::{Deserialize, Serialize};

/// Value description of a ChArUco board.
///
/// `square_side_length` and `base.marker_side_length` share one unit: pixels
/// when the board is rendered to a printable image, metres when it is used
/// for tracking or calibration. No validation happens here; an unusable
/// configuration is reported when the board is built.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharucoBoardConfig {
    pub squares_x: u32,
    pub squares_y: u32,
    pub square_side_length: f32,
    #[serde(flatten)]
    pub base: BoardBase,
}

impl CharucoBoardConfig {
    pub fn new(
        squares_x: u32,
        squares_y: u32,
        square_side_length: f32,
        marker_side_length: f32,
    ) -> Self {
        Self {
            squares_x,
            squares_y,
            square_side_length,
            base: BoardBase {
                marker_side_length,
                ..BoardBase::default()
            },
        }
    }

    pub fn with_dictionary(mut self, dictionary: PredefinedDictionary) -> Self {
        self.base.dictionary = dictionary;
        self
    }

    pub fn with_margins(mut self, margins_size: u32) -> Self {
        self.base.margins_size = margins_size;
        self
    }

    /// Spec handed to the board factory.
    pub fn board_spec(&self) -> CharucoBoardSpec {
        CharucoBoardSpec {
            squares_x: self.squares_x,
            squares_y: self.squares_y,
            square_length: self.square_side_length,
            marker_length: self.base.marker_side_length,
            dictionary: self.base.dictionary,
        }
    }

    /// Rendered image size: every square is truncated to whole pixels, then
    /// the margins are added on each side.
    pub fn image_size(&self) -> ImageSize {
        let square_px = self.square_side_length as u32;
        ImageSize::with_margins(
            self.squares_x.saturating_mul(square_px),
            self.squares_y.saturating_mul(square_px),
            self.base.margins_size,
        )
    }

    /// Length of the pose axes drawn over the board: half its shorter side.
    pub fn axis_length(&self) -> f32 {
        0.5 * (self.squares_x.min(self.squares_y) as f32 * self.square_side_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn image_size_truncates_square_length() {
        let cfg = CharucoBoardConfig::new(5, 7, 100.9, 80.0).with_margins(20);
        assert_eq!(cfg.image_size(), ImageSize::new(540, 740));
    }

    #[test]
    fn metric_boards_have_margin_only_images() {
        let cfg = CharucoBoardConfig::new(10, 7, 0.05, 0.04).with_margins(3);
        assert_eq!(cfg.image_size(), ImageSize::new(6, 6));
    }

    #[test]
    fn axis_length_uses_shorter_side() {
        let cfg = CharucoBoardConfig::new(10, 7, 0.05, 0.04);
        assert_relative_eq!(cfg.axis_length(), 0.175);
    }

    #[test]
    fn flattened_json_layout() {
        let cfg = CharucoBoardConfig::new(10, 7, 0.05, 0.04)
            .with_dictionary(PredefinedDictionary::Dict6x6_250);
        let json = serde_json::to_value(cfg).expect("ser");
        assert_eq!(json["squares_x"], 10);
        assert_eq!(json["dictionary"], "DICT_6X6_250");
        assert_eq!(json["margins_size"], 0);

        let back: CharucoBoardConfig = serde_json::from_str(
            r#"{ "squares_x": 5, "squares_y": 4, "square_side_length": 120.0,
                 "marker_side_length": 90.0 }"#,
        )
        .expect("de");
        assert_eq!(back.base.dictionary, PredefinedDictionary::Dict4x4_50);
        assert_eq!(back.board_spec().marker_length, 90.0);
    }
}
