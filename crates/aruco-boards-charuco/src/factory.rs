use crate::board::{CharucoBoard, CharucoBoardError, CharucoBoardSpec};

/// Builds a board from its spec.
///
/// This is the seam to the library that owns the board at runtime. The
/// default [`LayoutFactory`] lays the board out natively; bindings to an
/// external vision library implement this trait to return their own board,
/// exposed through the same [`CharucoBoard`] geometry.
pub trait BoardFactory {
    fn create(&self, spec: &CharucoBoardSpec) -> Result<CharucoBoard, CharucoBoardError>;
}

/// OpenCV-compatible layout computed in-process.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutFactory;

impl BoardFactory for LayoutFactory {
    fn create(&self, spec: &CharucoBoardSpec) -> Result<CharucoBoard, CharucoBoardError> {
        CharucoBoard::new(*spec)
    }
}

impl<T: BoardFactory + ?Sized> BoardFactory for Box<T> {
    fn create(&self, spec: &CharucoBoardSpec) -> Result<CharucoBoard, CharucoBoardError> {
        (**self).create(spec)
    }
}
