//! The ChArUco board descriptor: configuration, hash, board and detection.

use crate::board::{CharucoBoard, CharucoBoardError};
use crate::config::CharucoBoardConfig;
use crate::detection::CharucoDetection;
use crate::factory::{BoardFactory, LayoutFactory};
use crate::hash::{charuco_hash_code_with, HashScheme};
use aruco_boards_core::{
    ImageSize, ObserverId, Observers, PredefinedDictionary, PropertyEvent, PropertyObserver,
};
use log::{debug, warn};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// A configurable ChArUco board.
///
/// Every mutation goes through an update method that emits
/// [`PropertyEvent::Updating`], applies the change, recomputes the hash,
/// rebuilds the board through the factory and emits
/// [`PropertyEvent::Updated`]. Both events fire exactly once per call, also
/// when the value did not change and when the rebuild fails.
///
/// The detection snapshot is tracker output, not configuration: writing it
/// does not emit events.
#[derive(Debug)]
pub struct ArucoCharucoBoard<F = LayoutFactory> {
    config: CharucoBoardConfig,
    hash_scheme: HashScheme,
    aruco_hash_code: i32,
    image_size: ImageSize,
    axis_length: f32,
    board: Result<CharucoBoard, CharucoBoardError>,
    detection: CharucoDetection,
    observers: Observers,
    factory: F,
}

impl ArucoCharucoBoard<LayoutFactory> {
    /// Describe a board laid out in-process.
    ///
    /// An unusable configuration still yields a descriptor; [`Self::board`]
    /// then reports why no board could be built.
    pub fn new(config: CharucoBoardConfig) -> Self {
        Self::with_factory(config, LayoutFactory)
    }
}

impl<F: BoardFactory> ArucoCharucoBoard<F> {
    pub fn with_factory(config: CharucoBoardConfig, factory: F) -> Self {
        let mut descriptor = Self {
            config,
            hash_scheme: HashScheme::default(),
            aruco_hash_code: 0,
            image_size: ImageSize::default(),
            axis_length: 0.0,
            board: Err(CharucoBoardError::InvalidSize {
                squares_x: config.squares_x,
                squares_y: config.squares_y,
            }),
            detection: CharucoDetection::default(),
            observers: Observers::new(),
            factory,
        };
        descriptor.update_aruco_hash_code();
        // a failed build is kept in `board`
        let _ = descriptor.update_board();
        descriptor
    }

    /// Select the hash scheme before the descriptor is shared.
    pub fn with_hash_scheme(mut self, scheme: HashScheme) -> Self {
        self.hash_scheme = scheme;
        self.update_aruco_hash_code();
        self
    }

    #[inline]
    pub fn config(&self) -> &CharucoBoardConfig {
        &self.config
    }

    #[inline]
    pub fn squares_x(&self) -> u32 {
        self.config.squares_x
    }

    #[inline]
    pub fn squares_y(&self) -> u32 {
        self.config.squares_y
    }

    #[inline]
    pub fn square_side_length(&self) -> f32 {
        self.config.square_side_length
    }

    #[inline]
    pub fn marker_side_length(&self) -> f32 {
        self.config.base.marker_side_length
    }

    #[inline]
    pub fn margins_size(&self) -> u32 {
        self.config.base.margins_size
    }

    #[inline]
    pub fn dictionary(&self) -> PredefinedDictionary {
        self.config.base.dictionary
    }

    #[inline]
    pub fn hash_scheme(&self) -> HashScheme {
        self.hash_scheme
    }

    /// Content hash of the current configuration.
    #[inline]
    pub fn aruco_hash_code(&self) -> i32 {
        self.aruco_hash_code
    }

    /// Size of the printable image, in pixels.
    #[inline]
    pub fn image_size(&self) -> ImageSize {
        self.image_size
    }

    #[inline]
    pub fn axis_length(&self) -> f32 {
        self.axis_length
    }

    /// The board built from the current configuration, or why it could not be built.
    pub fn board(&self) -> Result<&CharucoBoard, CharucoBoardError> {
        self.board.as_ref().map_err(Clone::clone)
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.board.is_ok()
    }

    #[inline]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    pub fn set_squares_x(&mut self, squares_x: u32) -> Result<(), CharucoBoardError> {
        self.update(|cfg| cfg.squares_x = squares_x)
    }

    pub fn set_squares_y(&mut self, squares_y: u32) -> Result<(), CharucoBoardError> {
        self.update(|cfg| cfg.squares_y = squares_y)
    }

    pub fn set_square_side_length(&mut self, length: f32) -> Result<(), CharucoBoardError> {
        self.update(|cfg| cfg.square_side_length = length)
    }

    pub fn set_marker_side_length(&mut self, length: f32) -> Result<(), CharucoBoardError> {
        self.update(|cfg| cfg.base.marker_side_length = length)
    }

    pub fn set_margins_size(&mut self, margins_size: u32) -> Result<(), CharucoBoardError> {
        self.update(|cfg| cfg.base.margins_size = margins_size)
    }

    pub fn set_dictionary(
        &mut self,
        dictionary: PredefinedDictionary,
    ) -> Result<(), CharucoBoardError> {
        self.update(|cfg| cfg.base.dictionary = dictionary)
    }

    pub fn set_hash_scheme(&mut self, scheme: HashScheme) -> Result<(), CharucoBoardError> {
        self.property_updating();
        self.hash_scheme = scheme;
        self.property_updated()
    }

    /// Replace the whole configuration in one update.
    pub fn apply(&mut self, config: CharucoBoardConfig) -> Result<(), CharucoBoardError> {
        self.update(|cfg| *cfg = config)
    }

    /// Edit several fields in one update.
    pub fn update(
        &mut self,
        edit: impl FnOnce(&mut CharucoBoardConfig),
    ) -> Result<(), CharucoBoardError> {
        self.property_updating();
        edit(&mut self.config);
        self.property_updated()
    }

    /// Rebuild hash and board without changing the configuration.
    pub fn refresh(&mut self) -> Result<(), CharucoBoardError> {
        self.update(|_| {})
    }

    pub fn subscribe<O>(&mut self, observer: O) -> ObserverId
    where
        O: PropertyObserver + 'static,
    {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    #[inline]
    pub fn detection(&self) -> &CharucoDetection {
        &self.detection
    }

    /// Overwrite the snapshot with the tracker output of the current frame.
    pub fn set_detection(&mut self, detection: CharucoDetection) {
        self.detection = detection;
    }

    pub fn set_valid_transform(&mut self, valid: bool) {
        self.detection.set_valid_transform(valid);
    }

    pub fn clear_detection(&mut self) {
        self.detection.clear();
    }

    fn property_updating(&mut self) {
        self.observers.notify(&PropertyEvent::Updating {
            hash: self.aruco_hash_code,
        });
    }

    fn property_updated(&mut self) -> Result<(), CharucoBoardError> {
        self.update_aruco_hash_code();
        let rebuilt = self.update_board();
        self.observers.notify(&PropertyEvent::Updated {
            hash: self.aruco_hash_code,
            board_valid: rebuilt.is_ok(),
        });
        rebuilt
    }

    fn update_aruco_hash_code(&mut self) {
        self.aruco_hash_code = charuco_hash_code_with(
            self.hash_scheme,
            self.config.squares_x,
            self.config.squares_y,
            self.config.base.marker_side_length,
            self.config.square_side_length,
        );
    }

    #[cfg_attr(
        feature = "tracing",
        instrument(
            level = "debug",
            skip(self),
            fields(squares_x = self.config.squares_x, squares_y = self.config.squares_y)
        )
    )]
    fn update_board(&mut self) -> Result<(), CharucoBoardError> {
        self.image_size = self.config.image_size();
        self.axis_length = self.config.axis_length();
        self.board = self.factory.create(&self.config.board_spec());

        match &self.board {
            Ok(board) => {
                debug!(
                    "charuco board {}x{} rebuilt: {} markers, {} corners, image {}x{}",
                    self.config.squares_x,
                    self.config.squares_y,
                    board.marker_count(),
                    board.charuco_corner_count(),
                    self.image_size.width,
                    self.image_size.height
                );
                Ok(())
            }
            Err(err) => {
                warn!("charuco board not rebuilt: {err}");
                Err(err.clone())
            }
        }
    }
}
