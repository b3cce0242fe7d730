//! High-level facade crate for the `aruco-boards-*` workspace.
//!
//! Re-exports the board crates under short module names and ships the
//! `aruco-boards` command-line tool (feature `cli`).
//!
//! ## Quickstart
//!
//! ```
//! use aruco_boards::charuco::{ArucoCharucoBoard, CharucoBoardConfig};
//!
//! let board = ArucoCharucoBoard::new(CharucoBoardConfig::new(10, 7, 0.05, 0.04));
//! println!("hash {:#010x}", board.aruco_hash_code());
//! ```
//!
//! ## API map
//! - `aruco_boards::core`: dictionaries, content hashes, property events, logging.
//! - `aruco_boards::charuco`: ChArUco descriptor, layout, detection snapshot, JSON I/O.

pub use aruco_boards_charuco as charuco;
pub use aruco_boards_core as core;

pub use aruco_boards_charuco::{ArucoCharucoBoard, CharucoBoardConfig, HashScheme};
pub use aruco_boards_core::{PredefinedDictionary, PropertyEvent};

/// Install the workspace logger: `tracing` when the feature is on, the
/// stderr `log` backend otherwise.
#[cfg(not(feature = "tracing"))]
pub fn init_logging(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    aruco_boards_core::init_with_level(level)
}

/// Install the workspace logger: `tracing` when the feature is on, the
/// stderr `log` backend otherwise.
#[cfg(feature = "tracing")]
pub fn init_logging(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    // the subscriber bridges `log` records itself
    aruco_boards_core::init_tracing(false);
    log::set_max_level(level);
    Ok(())
}
