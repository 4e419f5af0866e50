//! Edge extrusion.
//!
//! Texture samplers that filter across sprite boundaries pick up colors from
//! neighbouring sprites. Extrusion surrounds each sprite with copies of its own
//! border so the filter only ever sees the sprite's colors.
use crate::error::{Error, Result};
use image::RgbaImage;
use std::borrow::Cow;
use tracy_full::zone;

/// Returns `image` grown by `padding` pixels on every side.
///
/// Each padding band repeats the nearest edge row or column of the source and
/// each corner square is filled with the nearest source corner pixel. This is
/// the same image you get by growing the source one pixel at a time `padding`
/// times, re-reading the border after every step.
///
/// A padding of zero borrows the source untouched. Images with zero area are
/// rejected.
pub fn extrude(image: &RgbaImage, padding: u32) -> Result<Cow<'_, RgbaImage>> {
    zone!("extrude");
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage { width, height });
    }
    if padding == 0 {
        return Ok(Cow::Borrowed(image));
    }

    let grow = padding.checked_mul(2).ok_or(Error::DimensionsOverflow)?;
    let out_width = width.checked_add(grow).ok_or(Error::DimensionsOverflow)?;
    let out_height = height.checked_add(grow).ok_or(Error::DimensionsOverflow)?;
    checked_buffer_len(out_width, out_height)?;

    let extruded = RgbaImage::from_fn(out_width, out_height, |x, y| {
        let src_x = x.saturating_sub(padding).min(width - 1);
        let src_y = y.saturating_sub(padding).min(height - 1);
        *image.get_pixel(src_x, src_y)
    });
    Ok(Cow::Owned(extruded))
}

/// Byte length of an RGBA buffer of `width` x `height` pixels, or
/// `DimensionsOverflow` if no allocation of that size is possible.
pub fn checked_buffer_len(width: u32, height: u32) -> Result<usize> {
    u64::from(width)
        .checked_mul(u64::from(height))
        .and_then(|pixels| pixels.checked_mul(4))
        .filter(|&len| len <= isize::MAX as u64)
        .and_then(|len| usize::try_from(len).ok())
        .ok_or(Error::DimensionsOverflow)
}
