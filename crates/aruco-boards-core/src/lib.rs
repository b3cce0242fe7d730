//! Core types shared by the `aruco-boards-*` board descriptors.
//!
//! This crate is intentionally small. It knows nothing about a concrete board
//! layout; it provides the pieces every board kind needs:
//! - predefined marker dictionaries,
//! - the quantized content hash used for change detection,
//! - property-change events replacing pre/post update hooks,
//! - the settings shared by all boards (margins, marker size, dictionary).

mod base;
mod dictionary;
mod hash;
mod logger;
mod observer;

pub use base::{BoardBase, ImageSize};
pub use dictionary::{DictionaryError, PredefinedDictionary};
pub use hash::{quantize_length, type_token, ArucoHasher, HASH_MULTIPLIER, HASH_SEED};
pub use observer::{ObserverId, Observers, PropertyEvent, PropertyObserver};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
