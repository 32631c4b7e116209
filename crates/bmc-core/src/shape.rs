//! Grid shape descriptor.

use std::fmt;

/// `[height, width, channels]` of a pixel grid.
///
/// Two grids may only be blended when their shapes are equal.
///
/// ```rust
/// use bmc_core::Shape;
///
/// let a = Shape::new(10, 10);
/// let b = Shape::new(10, 12);
/// assert_ne!(a, b);
/// assert_eq!(b.to_string(), "10x12x3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// Rows
    pub height: u32,
    /// Columns
    pub width: u32,
    /// Samples per pixel
    pub channels: u32,
}

impl Shape {
    /// Creates an RGB shape with the given height and width.
    #[inline]
    pub const fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            channels: crate::CHANNELS as u32,
        }
    }

    /// Number of pixels covered by this shape.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Number of samples (pixels times channels).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixel_count() * self.channels as usize
    }

    /// Returns `true` if the shape covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.height, self.width, self.channels)
    }
}
