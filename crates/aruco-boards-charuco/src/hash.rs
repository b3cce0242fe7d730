//! Content hash of a ChArUco board.

use aruco_boards_core::{type_token, ArucoHasher};
use serde::{Deserialize, Serialize};

/// Type token mixed into every ChArUco hash.
pub const CHARUCO_TYPE_TOKEN: i32 = type_token("ArucoCharucoBoard");

/// Which terms feed the length part of the hash.
///
/// `Legacy` is the hash the ArucoUnity `ArucoCharucoBoard` computes: it mixes
/// the marker length twice and never the square length, so two boards
/// differing only in square length collide under it. `Content` mixes the
/// square length as that code's own comment describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashScheme {
    /// Marker length then square length.
    #[default]
    Content,
    /// Marker length twice.
    Legacy,
}

/// Hash of a ChArUco board using [`HashScheme::Content`].
///
/// Lengths are quantized to thousandths of their unit before mixing. The
/// dictionary does not take part in the hash.
pub fn charuco_hash_code(
    squares_x: u32,
    squares_y: u32,
    marker_side_length: f32,
    square_side_length: f32,
) -> i32 {
    charuco_hash_code_with(
        HashScheme::Content,
        squares_x,
        squares_y,
        marker_side_length,
        square_side_length,
    )
}

pub fn charuco_hash_code_with(
    scheme: HashScheme,
    squares_x: u32,
    squares_y: u32,
    marker_side_length: f32,
    square_side_length: f32,
) -> i32 {
    let last_length = match scheme {
        HashScheme::Content => square_side_length,
        HashScheme::Legacy => marker_side_length,
    };
    ArucoHasher::for_type(CHARUCO_TYPE_TOKEN)
        .write_u32(squares_x)
        .write_u32(squares_y)
        .write_length(marker_side_length)
        .write_length(last_length)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aruco_boards_core::{HASH_MULTIPLIER, HASH_SEED};

    #[test]
    fn deterministic_for_identical_inputs() {
        let a = charuco_hash_code(10, 7, 0.04, 0.05);
        let b = charuco_hash_code(10, 7, 0.04, 0.05);
        assert_eq!(a, b);
    }

    #[test]
    fn matches_polynomial_definition() {
        let mut expected = HASH_SEED;
        for term in [CHARUCO_TYPE_TOKEN, 10, 7, 40, 50] {
            expected = expected.wrapping_mul(HASH_MULTIPLIER).wrapping_add(term);
        }
        assert_eq!(charuco_hash_code(10, 7, 0.04, 0.05), expected);
    }

    #[test]
    fn square_counts_change_the_hash() {
        let base = charuco_hash_code(10, 7, 0.04, 0.05);
        assert_ne!(base, charuco_hash_code(10, 8, 0.04, 0.05));
        assert_ne!(base, charuco_hash_code(11, 7, 0.04, 0.05));
        assert_ne!(base, charuco_hash_code(7, 10, 0.04, 0.05));
    }

    #[test]
    fn sub_millimetre_jitter_is_ignored() {
        let base = charuco_hash_code(10, 7, 0.04, 0.05);
        assert_eq!(base, charuco_hash_code(10, 7, 0.0401, 0.0499));
        assert_ne!(base, charuco_hash_code(10, 7, 0.041, 0.05));
    }

    #[test]
    fn content_scheme_mixes_square_length() {
        let a = charuco_hash_code(10, 7, 0.04, 0.05);
        let b = charuco_hash_code(10, 7, 0.04, 0.06);
        assert_ne!(a, b);
    }

    #[test]
    fn legacy_scheme_ignores_square_length() {
        let a = charuco_hash_code_with(HashScheme::Legacy, 10, 7, 0.04, 0.05);
        let b = charuco_hash_code_with(HashScheme::Legacy, 10, 7, 0.04, 0.06);
        assert_eq!(a, b);

        let mut expected = HASH_SEED;
        for term in [CHARUCO_TYPE_TOKEN, 10, 7, 40, 40] {
            expected = expected.wrapping_mul(HASH_MULTIPLIER).wrapping_add(term);
        }
        assert_eq!(a, expected);
    }
}
