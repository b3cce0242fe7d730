//! Settings shared by every board kind.

use crate::PredefinedDictionary;
use serde::{Deserialize, Serialize};

/// Size of a rendered board image, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Content size plus a margin of `margins` pixels on every side.
    pub fn with_margins(content_width: u32, content_height: u32, margins: u32) -> Self {
        let border = margins.saturating_mul(2);
        Self {
            width: content_width.saturating_add(border),
            height: content_height.saturating_add(border),
        }
    }
}

/// Board settings that do not depend on the board layout.
///
/// `marker_side_length` uses the same unit as the layout lengths (pixels for
/// printable images, metres for tracking). `margins_size` is always pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardBase {
    pub marker_side_length: f32,
    #[serde(default)]
    pub margins_size: u32,
    #[serde(default)]
    pub dictionary: PredefinedDictionary,
}

impl Default for BoardBase {
    fn default() -> Self {
        Self {
            marker_side_length: 0.0,
            margins_size: 0,
            dictionary: PredefinedDictionary::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margins_are_added_on_both_sides() {
        assert_eq!(ImageSize::with_margins(500, 350, 10), ImageSize::new(520, 370));
        assert_eq!(
            ImageSize::with_margins(u32::MAX, 0, 1),
            ImageSize::new(u32::MAX, 2)
        );
    }

    #[test]
    fn base_defaults_fill_missing_fields() {
        let base: BoardBase =
            serde_json::from_str(r#"{ "marker_side_length": 0.04 }"#).expect("base");
        assert_eq!(base.margins_size, 0);
        assert_eq!(base.dictionary, PredefinedDictionary::Dict4x4_50);
    }
}
