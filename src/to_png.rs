//! Host-side previews: render frames as PNG or looping APNG images.
//!
//! Each LED becomes a square cell with a dark gap around it, which reads closer to a real
//! panel than a plain scaled image.
#![cfg(feature = "host")]

use crate::led2d::Frame2d;
use png::{BitDepth, ColorType, Encoder};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pixels per LED cell when none is given.
pub const CELL_SIZE_DEFAULT: u32 = 8;

/// Write `frame` to a PNG at `output_path`, `cell_size` image pixels per LED.
///
/// # Errors
///
/// Returns any I/O or encoding error.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    cell_size: u32,
) -> Result<(), Box<dyn Error>> {
    let output_path = output_path.as_ref();
    let (width, height) = image_size::<W, H>(cell_size);
    let mut writer = encoder(output_path, width, height)?.write_header()?;
    writer.write_image_data(&panel_pixels(frame, cell_size))?;
    writer.finish()?;
    Ok(())
}

/// Write `frames` to a looping APNG, showing each for `frame_delay_ms`.
///
/// # Errors
///
/// Returns any I/O or encoding error, or an error if `frame_delay_ms` exceeds `u16::MAX`.
///
/// # Panics
///
/// Panics if `frames` is empty or `frame_delay_ms` is zero.
pub fn write_frames_apng<const W: usize, const H: usize>(
    frames: &[Frame2d<W, H>],
    output_path: impl AsRef<Path>,
    cell_size: u32,
    frame_delay_ms: u32,
) -> Result<(), Box<dyn Error>> {
    assert!(!frames.is_empty(), "frames must not be empty");
    assert!(frame_delay_ms > 0, "frame_delay_ms must be positive");
    let delay_ms = u16::try_from(frame_delay_ms)?;
    let frame_count = u32::try_from(frames.len())?;

    let output_path = output_path.as_ref();
    let (width, height) = image_size::<W, H>(cell_size);
    let mut encoder = encoder(output_path, width, height)?;
    encoder.set_animated(frame_count, 0)?;
    let mut writer = encoder.write_header()?;
    for frame in frames {
        writer.set_frame_delay(delay_ms, 1000)?;
        writer.write_image_data(&panel_pixels(frame, cell_size))?;
    }
    writer.finish()?;
    Ok(())
}

fn image_size<const W: usize, const H: usize>(cell_size: u32) -> (u32, u32) {
    assert!(cell_size >= 2, "cell_size must leave room for the gap");
    (W as u32 * cell_size, H as u32 * cell_size)
}

fn encoder(
    output_path: &Path,
    width: u32,
    height: u32,
) -> Result<Encoder<'static, BufWriter<File>>, Box<dyn Error>> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    Ok(encoder)
}

fn panel_pixels<const W: usize, const H: usize>(frame: &Frame2d<W, H>, cell_size: u32) -> Vec<u8> {
    let cell = cell_size as usize;
    let gap = (cell / 8).max(1);
    let row_bytes = W * cell * 3;
    let mut bytes = vec![0_u8; row_bytes * H * cell];

    for (y_index, row) in frame.iter().enumerate() {
        for (x_index, pixel) in row.iter().enumerate() {
            for local_y in gap..cell - gap {
                let line_start = (y_index * cell + local_y) * row_bytes;
                for local_x in gap..cell - gap {
                    let offset = line_start + (x_index * cell + local_x) * 3;
                    if let Some(rgb) = bytes.get_mut(offset..offset + 3) {
                        rgb.copy_from_slice(&[pixel.r, pixel.g, pixel.b]);
                    }
                }
            }
        }
    }
    bytes
}
