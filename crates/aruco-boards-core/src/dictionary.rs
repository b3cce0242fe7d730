//! Predefined marker dictionaries.
//!
//! Only dictionary metadata lives here: the code tables belong to whatever
//! library renders or detects the markers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors raised when resolving a dictionary by name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    #[error("unknown dictionary `{0}`")]
    Unknown(String),
}

/// OpenCV predefined dictionaries, in `cv::aruco::PredefinedDictionaryType` order.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PredefinedDictionary {
    #[default]
    #[serde(rename = "DICT_4X4_50")]
    Dict4x4_50,
    #[serde(rename = "DICT_4X4_100")]
    Dict4x4_100,
    #[serde(rename = "DICT_4X4_250")]
    Dict4x4_250,
    #[serde(rename = "DICT_4X4_1000")]
    Dict4x4_1000,
    #[serde(rename = "DICT_5X5_50")]
    Dict5x5_50,
    #[serde(rename = "DICT_5X5_100")]
    Dict5x5_100,
    #[serde(rename = "DICT_5X5_250")]
    Dict5x5_250,
    #[serde(rename = "DICT_5X5_1000")]
    Dict5x5_1000,
    #[serde(rename = "DICT_6X6_50")]
    Dict6x6_50,
    #[serde(rename = "DICT_6X6_100")]
    Dict6x6_100,
    #[serde(rename = "DICT_6X6_250")]
    Dict6x6_250,
    #[serde(rename = "DICT_6X6_1000")]
    Dict6x6_1000,
    #[serde(rename = "DICT_7X7_50")]
    Dict7x7_50,
    #[serde(rename = "DICT_7X7_100")]
    Dict7x7_100,
    #[serde(rename = "DICT_7X7_250")]
    Dict7x7_250,
    #[serde(rename = "DICT_7X7_1000")]
    Dict7x7_1000,
    #[serde(rename = "DICT_ARUCO_ORIGINAL")]
    ArucoOriginal,
    #[serde(rename = "DICT_APRILTAG_16h5")]
    AprilTag16h5,
    #[serde(rename = "DICT_APRILTAG_25h9")]
    AprilTag25h9,
    #[serde(rename = "DICT_APRILTAG_36h10")]
    AprilTag36h10,
    #[serde(rename = "DICT_APRILTAG_36h11")]
    AprilTag36h11,
    #[serde(rename = "DICT_ARUCO_MIP_36h12")]
    ArucoMip36h12,
}

impl PredefinedDictionary {
    /// Every predefined dictionary, ordered by OpenCV id.
    pub const ALL: [PredefinedDictionary; 22] = [
        Self::Dict4x4_50,
        Self::Dict4x4_100,
        Self::Dict4x4_250,
        Self::Dict4x4_1000,
        Self::Dict5x5_50,
        Self::Dict5x5_100,
        Self::Dict5x5_250,
        Self::Dict5x5_1000,
        Self::Dict6x6_50,
        Self::Dict6x6_100,
        Self::Dict6x6_250,
        Self::Dict6x6_1000,
        Self::Dict7x7_50,
        Self::Dict7x7_100,
        Self::Dict7x7_250,
        Self::Dict7x7_1000,
        Self::ArucoOriginal,
        Self::AprilTag16h5,
        Self::AprilTag25h9,
        Self::AprilTag36h10,
        Self::AprilTag36h11,
        Self::ArucoMip36h12,
    ];

    /// OpenCV name, e.g. `DICT_4X4_50`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dict4x4_50 => "DICT_4X4_50",
            Self::Dict4x4_100 => "DICT_4X4_100",
            Self::Dict4x4_250 => "DICT_4X4_250",
            Self::Dict4x4_1000 => "DICT_4X4_1000",
            Self::Dict5x5_50 => "DICT_5X5_50",
            Self::Dict5x5_100 => "DICT_5X5_100",
            Self::Dict5x5_250 => "DICT_5X5_250",
            Self::Dict5x5_1000 => "DICT_5X5_1000",
            Self::Dict6x6_50 => "DICT_6X6_50",
            Self::Dict6x6_100 => "DICT_6X6_100",
            Self::Dict6x6_250 => "DICT_6X6_250",
            Self::Dict6x6_1000 => "DICT_6X6_1000",
            Self::Dict7x7_50 => "DICT_7X7_50",
            Self::Dict7x7_100 => "DICT_7X7_100",
            Self::Dict7x7_250 => "DICT_7X7_250",
            Self::Dict7x7_1000 => "DICT_7X7_1000",
            Self::ArucoOriginal => "DICT_ARUCO_ORIGINAL",
            Self::AprilTag16h5 => "DICT_APRILTAG_16h5",
            Self::AprilTag25h9 => "DICT_APRILTAG_25h9",
            Self::AprilTag36h10 => "DICT_APRILTAG_36h10",
            Self::AprilTag36h11 => "DICT_APRILTAG_36h11",
            Self::ArucoMip36h12 => "DICT_ARUCO_MIP_36h12",
        }
    }

    /// Numeric id used by OpenCV's `getPredefinedDictionary`.
    pub fn opencv_id(self) -> i32 {
        Self::ALL
            .iter()
            .position(|d| *d == self)
            .map_or(-1, |idx| idx as i32)
    }

    /// Marker side length in bits (inner cells per side, border excluded).
    pub fn marker_size(self) -> usize {
        match self {
            Self::Dict4x4_50
            | Self::Dict4x4_100
            | Self::Dict4x4_250
            | Self::Dict4x4_1000
            | Self::AprilTag16h5 => 4,
            Self::Dict5x5_50
            | Self::Dict5x5_100
            | Self::Dict5x5_250
            | Self::Dict5x5_1000
            | Self::ArucoOriginal
            | Self::AprilTag25h9 => 5,
            Self::Dict6x6_50
            | Self::Dict6x6_100
            | Self::Dict6x6_250
            | Self::Dict6x6_1000
            | Self::AprilTag36h10
            | Self::AprilTag36h11
            | Self::ArucoMip36h12 => 6,
            Self::Dict7x7_50 | Self::Dict7x7_100 | Self::Dict7x7_250 | Self::Dict7x7_1000 => 7,
        }
    }

    /// Number of distinct marker ids in the dictionary.
    pub fn marker_count(self) -> usize {
        match self {
            Self::Dict4x4_50 | Self::Dict5x5_50 | Self::Dict6x6_50 | Self::Dict7x7_50 => 50,
            Self::Dict4x4_100 | Self::Dict5x5_100 | Self::Dict6x6_100 | Self::Dict7x7_100 => 100,
            Self::Dict4x4_250
            | Self::Dict5x5_250
            | Self::Dict6x6_250
            | Self::Dict7x7_250
            | Self::ArucoMip36h12 => 250,
            Self::Dict4x4_1000
            | Self::Dict5x5_1000
            | Self::Dict6x6_1000
            | Self::Dict7x7_1000 => 1000,
            Self::ArucoOriginal => 1024,
            Self::AprilTag16h5 => 30,
            Self::AprilTag25h9 => 35,
            Self::AprilTag36h10 => 2320,
            Self::AprilTag36h11 => 587,
        }
    }

    /// Total number of inner bits per marker.
    #[inline]
    pub fn bit_count(self) -> usize {
        self.marker_size() * self.marker_size()
    }
}

impl fmt::Display for PredefinedDictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredefinedDictionary {
    type Err = DictionaryError;

    /// Accepts OpenCV names with or without the `DICT_` prefix, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        let wanted = wanted.strip_prefix("DICT_").unwrap_or(&wanted);
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name()[5..].eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DictionaryError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opencv_ids_follow_declaration_order() {
        assert_eq!(PredefinedDictionary::Dict4x4_50.opencv_id(), 0);
        assert_eq!(PredefinedDictionary::Dict7x7_1000.opencv_id(), 15);
        assert_eq!(PredefinedDictionary::ArucoOriginal.opencv_id(), 16);
        assert_eq!(PredefinedDictionary::ArucoMip36h12.opencv_id(), 21);
    }

    #[test]
    fn parses_names_loosely() {
        let d: PredefinedDictionary = "DICT_6X6_250".parse().expect("full name");
        assert_eq!(d, PredefinedDictionary::Dict6x6_250);
        let d: PredefinedDictionary = "apriltag_36h11".parse().expect("short name");
        assert_eq!(d, PredefinedDictionary::AprilTag36h11);
        assert!("DICT_3X3_10".parse::<PredefinedDictionary>().is_err());
    }

    #[test]
    fn serde_uses_opencv_names() {
        let json = serde_json::to_string(&PredefinedDictionary::AprilTag16h5).expect("ser");
        assert_eq!(json, "\"DICT_APRILTAG_16h5\"");
        let back: PredefinedDictionary = serde_json::from_str("\"DICT_5X5_100\"").expect("de");
        assert_eq!(back, PredefinedDictionary::Dict5x5_100);
    }

    #[test]
    fn metadata_matches_name() {
        for d in PredefinedDictionary::ALL {
            assert!(d.marker_count() > 0, "{d}");
            if let Some(rest) = d.name().strip_prefix("DICT_") {
                let count = rest
                    .rsplit_once('_')
                    .and_then(|(_, n)| n.parse::<usize>().ok());
                if let Some(count) = count {
                    if rest.as_bytes()[1] == b'X' {
                        assert_eq!(d.marker_count(), count, "{d}");
                    }
                }
            }
        }
        assert_eq!(PredefinedDictionary::Dict5x5_250.bit_count(), 25);
    }
}
