//! Pixel grid container.
//!
//! [`Grid`] is the only image type the engine works with: a row-major,
//! interleaved buffer of `f64` samples with exactly three channels.
//!
//! # Memory Layout
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  <- Row 0
//!         [R G B R G B R G B ...]  <- Row 1
//!         ...
//! ```
//!
//! The same layout holds `[H C L ...]` for an [`HclGrid`].
//!
//! # Immutability
//!
//! Every transform returns a new grid. The buffer sits behind an [`Arc`], so
//! cloning a grid is cheap and grids can be shared across threads.
//!
//! # Parallelism
//!
//! [`Grid::map`] and [`Grid::zip_map`] split the buffer into rows and run
//! them on the [`rayon`] thread pool. Each output pixel depends only on the
//! matching input pixel(s), so no synchronization is needed.
//!
//! # Usage
//!
//! ```rust
//! use bmc_core::PixelGrid;
//!
//! let red = PixelGrid::filled(4, 2, [1.0, 0.0, 0.0]);
//! let half = red.map::<bmc_core::Rgb, _>(|px| [px[0] * 0.5, px[1], px[2]]);
//! assert_eq!(half.pixel(3, 1), [0.5, 0.0, 0.0]);
//! ```

use crate::{ChannelSpace, Error, Hcl, Result, Rgb, Shape, CHANNELS};
use rayon::prelude::*;
use std::marker::PhantomData;
use std::sync::Arc;

/// RGB grid normalized to `[0, 1]`.
pub type PixelGrid = Grid<Rgb>;

/// Hue/chroma/luma grid, each channel in `[0, 1]`.
pub type HclGrid = Grid<Hcl>;

/// Owned three-channel sample grid tagged with a channel space.
///
/// `Grid<S>` stores `height * width * 3` samples where `S` is a marker type
/// ([`Rgb`] or [`Hcl`]) that keeps color representations from being mixed.
pub struct Grid<S: ChannelSpace = Rgb> {
    /// Sample buffer (Arc for cheap cloning)
    data: Arc<Vec<f64>>,
    /// Grid width in pixels
    width: u32,
    /// Grid height in pixels
    height: u32,
    /// Channel space marker
    _space: PhantomData<S>,
}

impl<S: ChannelSpace> Clone for Grid<S> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            width: self.width,
            height: self.height,
            _space: PhantomData,
        }
    }
}

impl<S: ChannelSpace> Grid<S> {
    fn from_parts(width: u32, height: u32, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize * CHANNELS);
        Self {
            data: Arc::new(data),
            width,
            height,
            _space: PhantomData,
        }
    }

    /// Creates a grid filled with zeros (black for RGB).
    ///
    /// ```rust
    /// use bmc_core::PixelGrid;
    ///
    /// let img = PixelGrid::new(12, 10);
    /// assert_eq!(img.width(), 12);
    /// assert_eq!(img.height(), 10);
    /// ```
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * CHANNELS;
        Self::from_parts(width, height, vec![0.0; len])
    }

    /// Creates a grid from an interleaved sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 3`.
    pub fn from_data(width: u32, height: u32, data: Vec<f64>) -> Result<Self> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Creates a grid from a row-major list of pixels.
    pub fn from_pixels(width: u32, height: u32, pixels: &[[f64; 3]]) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, pixels.len()),
            ));
        }
        let data = pixels.iter().flat_map(|px| px.iter().copied()).collect();
        Ok(Self::from_parts(width, height, data))
    }

    /// Creates a grid where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: [f64; 3]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * CHANNELS);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::from_parts(width, height, data)
    }

    /// Creates a grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: u32, height: u32, f: F) -> Self
    where
        F: Fn(u32, u32) -> [f64; 3],
    {
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::from_parts(width, height, data)
    }

    /// Returns the grid width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the grid dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `[height, width, channels]`.
    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.height, self.width)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the grid has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw interleaved samples.
    #[inline]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn row_len(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [f64; 3] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let o = self.offset(x, y);
        [self.data[o], self.data[o + 1], self.data[o + 2]]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[f64; 3]> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y), cloning the buffer if it is shared.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [f64; 3]) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::out_of_bounds(x, y, self.width, self.height));
        }
        let o = self.offset(x, y);
        let data = Arc::make_mut(&mut self.data);
        data[o..o + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }

    /// Returns one row of samples.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f64] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.row_len();
        &self.data[start..start + self.row_len()]
    }

    /// Iterates over pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        self.data.chunks_exact(CHANNELS).map(|c| [c[0], c[1], c[2]])
    }

    /// Applies `f` to every pixel, producing a grid in space `S2`.
    ///
    /// Rows are processed in parallel.
    pub fn map<S2, F>(&self, f: F) -> Grid<S2>
    where
        S2: ChannelSpace,
        F: Fn([f64; 3]) -> [f64; 3] + Sync + Send,
    {
        let mut out = vec![0.0; self.data.len()];
        let row_len = self.row_len();
        if row_len > 0 {
            out.par_chunks_mut(row_len)
                .zip(self.data.par_chunks(row_len))
                .for_each(|(dst, src)| {
                    for (d, s) in dst.chunks_exact_mut(CHANNELS).zip(src.chunks_exact(CHANNELS)) {
                        d.copy_from_slice(&f([s[0], s[1], s[2]]));
                    }
                });
        }
        Grid::from_parts(self.width, self.height, out)
    }

    /// Combines this grid with `other` pixel by pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the shapes differ.
    pub fn zip_map<S2, S3, F>(&self, other: &Grid<S2>, f: F) -> Result<Grid<S3>>
    where
        S2: ChannelSpace,
        S3: ChannelSpace,
        F: Fn([f64; 3], [f64; 3]) -> [f64; 3] + Sync + Send,
    {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(self.shape(), other.shape()));
        }
        let mut out = vec![0.0; self.data.len()];
        let row_len = self.row_len();
        if row_len > 0 {
            out.par_chunks_mut(row_len)
                .zip(self.data.par_chunks(row_len))
                .zip(other.data.par_chunks(row_len))
                .for_each(|((dst, a), b)| {
                    let pixels = dst
                        .chunks_exact_mut(CHANNELS)
                        .zip(a.chunks_exact(CHANNELS))
                        .zip(b.chunks_exact(CHANNELS));
                    for ((d, pa), pb) in pixels {
                        d.copy_from_slice(&f([pa[0], pa[1], pa[2]], [pb[0], pb[1], pb[2]]));
                    }
                });
        }
        Ok(Grid::from_parts(self.width, self.height, out))
    }

    /// Reinterprets the channel space without touching the samples.
    ///
    /// Use this only when the data is already in `S2`; actual conversions
    /// live in `bmc-color`.
    pub fn reinterpret<S2: ChannelSpace>(self) -> Grid<S2> {
        Grid {
            data: self.data,
            width: self.width,
            height: self.height,
            _space: PhantomData,
        }
    }

    /// Returns a copy with every sample clamped to `[0, 1]`.
    pub fn clipped(&self) -> Self {
        self.map(|px| [px[0].clamp(0.0, 1.0), px[1].clamp(0.0, 1.0), px[2].clamp(0.0, 1.0)])
    }

    /// Returns `true` if no sample is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Copies the rectangle starting at (x, y) of size `w x h`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the rectangle leaves the grid.
    pub fn crop(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Self> {
        let fits_x = x.checked_add(w).is_some_and(|r| r <= self.width);
        let fits_y = y.checked_add(h).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(Error::invalid_dimensions(
                w,
                h,
                format!(
                    "crop at ({}, {}) exceeds grid {}x{}",
                    x, y, self.width, self.height
                ),
            ));
        }
        let mut data = Vec::with_capacity(w as usize * h as usize * CHANNELS);
        for row in y..y + h {
            let start = self.offset(x, row);
            data.extend_from_slice(&self.data[start..start + w as usize * CHANNELS]);
        }
        Ok(Self::from_parts(w, h, data))
    }

    /// Crops the central `size x size` square.
    ///
    /// Offsets round down, so odd margins leave the extra pixel on the
    /// right/bottom.
    pub fn center_square(&self, size: u32) -> Result<Self> {
        if size > self.width || size > self.height {
            return Err(Error::invalid_dimensions(
                size,
                size,
                format!("square larger than grid {}x{}", self.width, self.height),
            ));
        }
        let left = (self.width - size) / 2;
        let top = (self.height - size) / 2;
        self.crop(left, top, size, size)
    }

    /// Places grids side by side, left to right.
    ///
    /// # Errors
    ///
    /// Fails if `grids` is empty or heights differ.
    pub fn hstack(grids: &[Self]) -> Result<Self> {
        let first = grids
            .first()
            .ok_or_else(|| Error::invalid_dimensions(0, 0, "nothing to stack"))?;
        let height = first.height;
        if let Some(bad) = grids.iter().find(|g| g.height != height) {
            return Err(Error::shape_mismatch(first.shape(), bad.shape()));
        }
        let width: u32 = grids.iter().map(|g| g.width).sum();
        let mut data = Vec::with_capacity(width as usize * height as usize * CHANNELS);
        for y in 0..height {
            for g in grids {
                data.extend_from_slice(g.row(y));
            }
        }
        Ok(Self::from_parts(width, height, data))
    }
}

impl Grid<Rgb> {
    /// Builds a normalized grid from 8-bit samples (`v / 255`).
    ///
    /// `channels` may be 3 (RGB) or 4 (RGBA, alpha dropped).
    pub fn from_u8(width: u32, height: u32, channels: u32, samples: &[u8]) -> Result<Self> {
        Self::from_integer(width, height, channels, samples, 255.0)
    }

    /// Builds a normalized grid from 16-bit samples (`v / 65535`).
    pub fn from_u16(width: u32, height: u32, channels: u32, samples: &[u16]) -> Result<Self> {
        Self::from_integer(width, height, channels, samples, 65535.0)
    }

    fn from_integer<T>(width: u32, height: u32, channels: u32, samples: &[T], max: f64) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        if channels != 3 && channels != 4 {
            return Err(Error::ChannelMismatch {
                expected: CHANNELS as u32,
                got: channels,
            });
        }
        let stride = channels as usize;
        let expected = width as usize * height as usize * stride;
        if samples.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, samples.len()),
            ));
        }
        let data = samples
            .chunks_exact(stride)
            .flat_map(|px| px[..CHANNELS].iter().map(move |&v| v.into() / max))
            .collect();
        Ok(Self::from_parts(width, height, data))
    }

    /// Quantizes to 8-bit RGB: `round(v * 255)`, clamped to `0..=255`.
    ///
    /// Rounding is half-to-even so exported values match reference
    /// renderers that quantize the same way.
    pub fn to_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

impl<S: ChannelSpace> PartialEq for Grid<S> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl<S: ChannelSpace> std::fmt::Debug for Grid<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &CHANNELS)
            .field("space", &S::NAME)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| {
            [x as f64 / width as f64, y as f64 / height as f64, 0.25]
        })
    }

    #[test]
    fn test_from_data_length_checked() {
        assert!(PixelGrid::from_data(2, 2, vec![0.0; 12]).is_ok());
        let err = PixelGrid::from_data(2, 2, vec![0.0; 11]).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { .. }));
    }

    #[test]
    fn test_shape_is_height_width_channels() {
        let img = PixelGrid::new(12, 10);
        assert_eq!(img.shape(), Shape::new(10, 12));
        assert_eq!(img.shape().len(), 360);
    }

    #[test]
    fn test_map_preserves_layout() {
        let img = gradient(7, 5);
        let out: PixelGrid = img.map(|px| [px[1], px[0], px[2]]);
        for y in 0..5 {
            for x in 0..7 {
                let a = img.pixel(x, y);
                assert_eq!(out.pixel(x, y), [a[1], a[0], a[2]]);
            }
        }
    }

    #[test]
    fn test_zip_map_shape_mismatch() {
        let a = PixelGrid::new(10, 10);
        let b = PixelGrid::new(12, 10);
        let err = a.zip_map::<Rgb, Rgb, _>(&b, |x, _| x).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_zip_map_empty() {
        let a = PixelGrid::new(0, 4);
        let out: PixelGrid = a.zip_map(&a, |x, _| x).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_clone_shares_buffer() {
        let a = gradient(4, 4);
        let mut b = a.clone();
        b.set_pixel(0, 0, [1.0, 1.0, 1.0]).unwrap();
        assert_eq!(a.pixel(0, 0), [0.0, 0.0, 0.25]);
        assert_eq!(b.pixel(0, 0), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut a = PixelGrid::new(2, 2);
        assert!(a.set_pixel(2, 0, [0.0; 3]).is_err());
    }

    #[test]
    fn test_center_square() {
        let img = gradient(10, 6);
        let sq = img.center_square(6).unwrap();
        assert_eq!(sq.dimensions(), (6, 6));
        assert_eq!(sq.pixel(0, 0), img.pixel(2, 0));
        assert!(img.center_square(7).is_err());
    }

    #[test]
    fn test_crop_bounds() {
        let img = gradient(4, 4);
        assert!(img.crop(2, 2, 2, 2).is_ok());
        assert!(img.crop(3, 0, 2, 1).is_err());
        assert!(img.crop(u32::MAX, 0, 2, 1).is_err());
    }

    #[test]
    fn test_hstack() {
        let a = PixelGrid::filled(2, 3, [1.0, 0.0, 0.0]);
        let b = PixelGrid::filled(1, 3, [0.0, 0.0, 1.0]);
        let s = PixelGrid::hstack(&[a, b]).unwrap();
        assert_eq!(s.dimensions(), (3, 3));
        assert_eq!(s.pixel(1, 2), [1.0, 0.0, 0.0]);
        assert_eq!(s.pixel(2, 2), [0.0, 0.0, 1.0]);

        let c = PixelGrid::new(1, 2);
        assert!(PixelGrid::hstack(&[s, c]).is_err());
        assert!(PixelGrid::hstack(&[]).is_err());
    }

    #[test]
    fn test_u8_roundtrip() {
        let samples: Vec<u8> = vec![0, 128, 255, 10, 20, 30];
        let img = PixelGrid::from_u8(2, 1, 3, &samples).unwrap();
        assert_eq!(img.pixel(0, 0)[2], 1.0);
        assert_eq!(img.to_u8(), samples);
    }

    #[test]
    fn test_from_u8_drops_alpha() {
        let samples: Vec<u8> = vec![255, 0, 0, 7, 0, 255, 0, 9];
        let img = PixelGrid::from_u8(2, 1, 4, &samples).unwrap();
        assert_eq!(img.pixel(0, 0), [1.0, 0.0, 0.0]);
        assert_eq!(img.pixel(1, 0), [0.0, 1.0, 0.0]);
        assert!(PixelGrid::from_u8(1, 1, 2, &[0, 0]).is_err());
    }

    #[test]
    fn test_to_u8_clamps_and_rounds() {
        let img = PixelGrid::from_data(1, 1, vec![-0.5, 1.5, 0.5]).unwrap();
        assert_eq!(img.to_u8(), vec![0, 255, 128]);
    }

    #[test]
    fn test_clipped_and_finite() {
        let img = PixelGrid::from_data(1, 1, vec![-0.1, 0.5, 1.2]).unwrap();
        assert_eq!(img.clipped().pixel(0, 0), [0.0, 0.5, 1.0]);
        assert!(img.is_finite());
        let bad = PixelGrid::from_data(1, 1, vec![f64::NAN, 0.0, 0.0]).unwrap();
        assert!(!bad.is_finite());
    }
}
