//! JSON configuration and report helpers for ChArUco boards.

use crate::config::CharucoBoardConfig;
use crate::descriptor::ArucoCharucoBoard;
use crate::factory::BoardFactory;
use crate::hash::HashScheme;
use aruco_boards_core::ImageSize;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum CharucoIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CharucoBoardConfig {
    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CharucoIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CharucoIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Everything derived from a board configuration, in serializable form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharucoBoardReport {
    pub config: CharucoBoardConfig,
    pub hash_scheme: HashScheme,
    pub aruco_hash_code: i32,
    pub image_size: ImageSize,
    pub axis_length: f32,
    #[serde(default)]
    pub marker_count: Option<usize>,
    #[serde(default)]
    pub charuco_corner_count: Option<usize>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CharucoBoardReport {
    pub fn from_board<F: BoardFactory>(board: &ArucoCharucoBoard<F>) -> Self {
        let (marker_count, charuco_corner_count, error) = match board.board() {
            Ok(b) => (Some(b.marker_count()), Some(b.charuco_corner_count()), None),
            Err(err) => (None, None, Some(err.to_string())),
        };
        Self {
            config: *board.config(),
            hash_scheme: board.hash_scheme(),
            aruco_hash_code: board.aruco_hash_code(),
            image_size: board.image_size(),
            axis_length: board.axis_length(),
            marker_count,
            charuco_corner_count,
            error,
        }
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), CharucoIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
