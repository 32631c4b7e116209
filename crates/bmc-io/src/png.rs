//! PNG reading and writing.
//!
//! Reading accepts 8- and 16-bit grayscale, grayscale+alpha, RGB and RGBA
//! (palette and low bit depth files are expanded first). Gray is
//! replicated to three channels and alpha is dropped. Samples are divided
//! by the type maximum, so an 8-bit value `v` becomes `v / 255`.
//!
//! Writing always produces 8-bit RGB: values are clamped to `[0, 1]`,
//! scaled by 255 and rounded.
//!
//! # Example
//!
//! ```rust,ignore
//! use bmc_io::png::{read, write};
//!
//! let grid = read("input.png")?;
//! write("output.png", &grid)?;
//! ```

use crate::{IoError, IoResult};
use bmc_core::PixelGrid;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::trace;

/// Reads a PNG file into a normalized RGB grid.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<PixelGrid> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;
    let bytes = &buf[..info.buffer_size()];
    let (width, height) = (info.width, info.height);
    trace!(
        path = %path.display(),
        width,
        height,
        color = ?info.color_type,
        depth = ?info.bit_depth,
        "png::read"
    );

    let grid = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => PixelGrid::from_u8(width, height, 3, bytes)?,
        (png::ColorType::Rgba, png::BitDepth::Eight) => PixelGrid::from_u8(width, height, 4, bytes)?,
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            PixelGrid::from_u16(width, height, 3, &bytes_to_u16(bytes))?
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            PixelGrid::from_u16(width, height, 4, &bytes_to_u16(bytes))?
        }
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            let rgb = gray_to_rgb(bytes, 1);
            PixelGrid::from_u8(width, height, 3, &rgb)?
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => {
            let rgb = gray_to_rgb(bytes, 2);
            PixelGrid::from_u8(width, height, 3, &rgb)?
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            let rgb = gray_to_rgb(&bytes_to_u16(bytes), 1);
            PixelGrid::from_u16(width, height, 3, &rgb)?
        }
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Sixteen) => {
            let rgb = gray_to_rgb(&bytes_to_u16(bytes), 2);
            PixelGrid::from_u16(width, height, 3, &rgb)?
        }
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedBitDepth(format!(
                "{:?} {:?}",
                color_type, bit_depth
            )));
        }
    };
    Ok(grid)
}

/// Writes a grid as an 8-bit RGB PNG.
pub fn write<P: AsRef<Path>>(path: P, grid: &PixelGrid) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, grid.width(), grid.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());
    encoder.set_source_srgb(png::SrgbRenderingIntent::Perceptual);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .write_image_data(&grid.to_u8())
        .map_err(|e| IoError::EncodeError(e.to_string()))?;
    png_writer
        .finish()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    trace!(path = %path.display(), width = grid.width(), height = grid.height(), "png::write");
    Ok(())
}

/// Converts a big-endian byte slice to u16 samples.
fn bytes_to_u16(bytes: &[u8]) -> Vec<u16> {
    bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_be_bytes([chunk[0], chunk[1]]))
        .collect()
}

/// Replicates the gray sample of each `stride`-wide pixel into RGB.
fn gray_to_rgb<T: Copy>(samples: &[T], stride: usize) -> Vec<T> {
    samples
        .chunks_exact(stride)
        .flat_map(|px| [px[0], px[0], px[0]])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn write_raw(path: &Path, w: u32, h: u32, color: png::ColorType, depth: png::BitDepth, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), w, h);
        encoder.set_color(color);
        encoder.set_depth(depth);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    #[test]
    fn test_roundtrip_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.png");
        let grid = PixelGrid::from_fn(32, 16, |x, y| [x as f64 / 31.0, y as f64 / 15.0, 0.5]);

        write(&path, &grid).unwrap();
        let loaded = read(&path).unwrap();

        assert_eq!(loaded.dimensions(), (32, 16));
        assert_eq!(loaded.to_u8(), grid.to_u8());
        for (a, b) in loaded.data().iter().zip(grid.data()) {
            assert_abs_diff_eq!(a, b, epsilon = 0.5 / 255.0 + 1e-12);
        }
    }

    #[test]
    fn test_read_rgba_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        write_raw(&path, 2, 1, png::ColorType::Rgba, png::BitDepth::Eight, &[255, 0, 51, 7, 0, 255, 0, 255]);

        let grid = read(&path).unwrap();
        assert_eq!(grid.pixel(0, 0), [1.0, 0.0, 0.2]);
        assert_eq!(grid.pixel(1, 0), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_read_gray_replicates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        write_raw(&path, 2, 2, png::ColorType::Grayscale, png::BitDepth::Eight, &[0, 51, 102, 255]);

        let grid = read(&path).unwrap();
        assert_eq!(grid.pixel(1, 0), [0.2, 0.2, 0.2]);
        assert_eq!(grid.pixel(1, 1), [1.0; 3]);
    }

    #[test]
    fn test_read_16bit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deep.png");
        write_raw(&path, 1, 1, png::ColorType::Rgb, png::BitDepth::Sixteen, &[0xff, 0xff, 0, 0, 0x80, 0x00]);

        let grid = read(&path).unwrap();
        let px = grid.pixel(0, 0);
        assert_eq!(px[0], 1.0);
        assert_eq!(px[1], 0.0);
        assert_abs_diff_eq!(px[2], 32768.0 / 65535.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}
