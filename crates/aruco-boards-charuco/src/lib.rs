//! ChArUco board descriptor.
//!
//! A ChArUco board is a chessboard whose white squares carry ArUco markers.
//! This crate holds the board configuration, derives a content hash for
//! change detection, rebuilds the board layout through a [`BoardFactory`]
//! whenever the configuration changes, and stores the per-frame detection
//! snapshot written by a tracker.
//!
//! Marker detection and pose estimation are out of scope; they belong to
//! whatever library consumes the board.
//!
//! ```
//! use aruco_boards_charuco::{ArucoCharucoBoard, CharucoBoardConfig};
//!
//! # fn main() -> Result<(), aruco_boards_charuco::CharucoBoardError> {
//! let mut board = ArucoCharucoBoard::new(CharucoBoardConfig::new(10, 7, 0.05, 0.04));
//! let before = board.aruco_hash_code();
//! board.set_squares_y(8)?;
//! assert_ne!(before, board.aruco_hash_code());
//! # Ok(())
//! # }
//! ```

mod board;
mod config;
mod descriptor;
mod detection;
mod factory;
mod hash;
mod io;

pub use board::{charuco_corner_id, CharucoBoard, CharucoBoardError, CharucoBoardSpec};
pub use config::CharucoBoardConfig;
pub use descriptor::ArucoCharucoBoard;
pub use detection::{CharucoDetection, DetectionError};
pub use factory::{BoardFactory, LayoutFactory};
pub use hash::{charuco_hash_code, charuco_hash_code_with, HashScheme, CHARUCO_TYPE_TOKEN};
pub use io::{CharucoBoardReport, CharucoIoError};

pub use aruco_boards_core::{
    BoardBase, ImageSize, ObserverId, PredefinedDictionary, PropertyEvent, PropertyObserver,
};
