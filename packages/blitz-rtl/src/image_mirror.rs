//! Horizontal mirroring of icon data
//!
//! Applies the pixel flip for resources a layout result lists in
//! `mirrored_resources`. Only PNG is accepted.

use std::io::Cursor;

use image::ImageFormat;

use crate::error::{RtlError, RtlResult};
use crate::layout::RtlLayoutResult;

/// Flip PNG data horizontally
pub fn mirror_image(bytes: &[u8]) -> RtlResult<Vec<u8>> {
    let format = image::guess_format(bytes)?;
    if format != ImageFormat::Png {
        return Err(RtlError::ImageMirroringFailed(format!(
            "unsupported image format {:?}, expected PNG",
            format
        )));
    }

    let flipped = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.fliph();

    let mut encoded = Vec::with_capacity(bytes.len());
    flipped.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;

    log::trace!(
        "mirrored {}x{} image ({} bytes)",
        flipped.width(),
        flipped.height(),
        encoded.len()
    );

    Ok(encoded)
}

/// Mirror every resource the layout result marks for flipping
///
/// `load` supplies the PNG data for a resource identifier. The first
/// failure aborts the call.
pub fn mirror_resources<F>(layout: &RtlLayoutResult, mut load: F) -> RtlResult<Vec<(String, Vec<u8>)>>
where
    F: FnMut(&str) -> RtlResult<Vec<u8>>,
{
    layout
        .mirrored_resources
        .iter()
        .map(|resource| {
            let bytes = load(resource)?;
            let mirrored = mirror_image(&bytes).map_err(|err| match err {
                RtlError::ImageMirroringFailed(reason) => {
                    RtlError::ImageMirroringFailed(format!("{}: {}", resource, reason))
                }
                other => other,
            })?;
            Ok((resource.clone(), mirrored))
        })
        .collect()
}
