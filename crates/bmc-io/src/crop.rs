//! Input preparation for blending two photographs.
//!
//! Blending needs equal shapes. Two arbitrary images are brought to a
//! common shape by cutting the same-size square out of the middle of each:
//! the side is the smallest dimension of either image.

use crate::{png, IoResult};
use bmc_core::PixelGrid;
use std::path::Path;
use tracing::debug;

/// Crops both grids to their largest shared central square.
///
/// ```rust
/// use bmc_core::PixelGrid;
/// use bmc_io::crop_to_shared_square;
///
/// let wide = PixelGrid::new(40, 20);
/// let tall = PixelGrid::new(15, 30);
/// let (a, b) = crop_to_shared_square(&wide, &tall)?;
/// assert_eq!(a.dimensions(), (15, 15));
/// assert_eq!(b.dimensions(), (15, 15));
/// # Ok::<(), bmc_io::IoError>(())
/// ```
pub fn crop_to_shared_square(a: &PixelGrid, b: &PixelGrid) -> IoResult<(PixelGrid, PixelGrid)> {
    let size = a.width().min(a.height()).min(b.width()).min(b.height());
    debug!(
        a = ?a.dimensions(),
        b = ?b.dimensions(),
        size,
        "crop_to_shared_square"
    );
    Ok((a.center_square(size)?, b.center_square(size)?))
}

/// Loads a base/overlay pair, optionally cropping to a shared square.
pub fn load_pair<P, Q>(base: P, overlay: Q, crop: bool) -> IoResult<(PixelGrid, PixelGrid)>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let base = png::read(base)?;
    let overlay = png::read(overlay)?;
    if crop {
        crop_to_shared_square(&base, &overlay)
    } else {
        Ok((base, overlay))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crop_is_centered() {
        // Column index encoded in red, row index in green.
        let a = PixelGrid::from_fn(7, 3, |x, y| [x as f64 / 10.0, y as f64 / 10.0, 0.0]);
        let b = PixelGrid::new(5, 5);
        let (ca, cb) = crop_to_shared_square(&a, &b).unwrap();
        assert_eq!(ca.dimensions(), (3, 3));
        assert_eq!(cb.dimensions(), (3, 3));
        // (7 - 3) / 2 = 2 columns trimmed on the left.
        assert_eq!(ca.pixel(0, 0), [0.2, 0.0, 0.0]);
        assert_eq!(ca.pixel(2, 2), [0.4, 0.2, 0.0]);
    }

    #[test]
    fn test_odd_margin_rounds_down() {
        let a = PixelGrid::from_fn(6, 3, |x, _| [x as f64, 0.0, 0.0]);
        let (ca, _) = crop_to_shared_square(&a, &a).unwrap();
        // (6 - 3) / 2 = 1
        assert_eq!(ca.pixel(0, 0)[0], 1.0);
    }

    #[test]
    fn test_load_pair_crops() {
        let dir = tempfile::tempdir().unwrap();
        let pa = dir.path().join("a.png");
        let pb = dir.path().join("b.png");
        png::write(&pa, &PixelGrid::filled(8, 4, [1.0, 0.0, 0.0])).unwrap();
        png::write(&pb, &PixelGrid::filled(5, 9, [0.0, 0.0, 1.0])).unwrap();

        let (a, b) = load_pair(&pa, &pb, true).unwrap();
        assert_eq!(a.shape(), b.shape());
        assert_eq!(a.dimensions(), (4, 4));

        let (a, b) = load_pair(&pa, &pb, false).unwrap();
        assert_ne!(a.shape(), b.shape());
    }
}
