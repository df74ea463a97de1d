//! Image placement within a page
//!
//! This module calculates where a single image lands on a single page:
//! - Uniform scaling so the image fits the printable area on both axes
//! - Centering within the full page
//!
//! The calculation is pure and deterministic; the same inputs always
//! produce the same placement.

use thiserror::Error;

use crate::geometry::PageGeometry;

/// Raised when an image reports a zero or negative dimension
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("image dimensions must be positive, got {width}x{height}")]
pub struct InvalidDimensions {
    pub width: f32,
    pub height: f32,
}

/// Final placement of one image on one page
///
/// All values are in points. `width` and `height` are the scaled image
/// dimensions; the origin is the bottom-left corner of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Uniform scale applied to both axes
    pub scale_factor: f32,
    /// Scaled image width
    pub width: f32,
    /// Scaled image height
    pub height: f32,
    /// X position of the image's left edge
    pub x_origin: f32,
    /// Y position of the image's bottom edge
    pub y_origin: f32,
}

/// Calculate the placement for an image with the given pixel dimensions.
///
/// The scale factor is the minimum of the two axis ratios, so the scaled
/// image fits within both the printable width and height simultaneously
/// while keeping its aspect ratio. The image is then centered on the full
/// page, leaving equal margins on each axis.
///
/// # Arguments
/// * `image_width` - Intrinsic image width in pixels
/// * `image_height` - Intrinsic image height in pixels
/// * `geometry` - Page and printable-area dimensions
pub fn compute_placement(
    image_width: f32,
    image_height: f32,
    geometry: &PageGeometry,
) -> Result<Placement, InvalidDimensions> {
    if image_width <= 0.0 || image_height <= 0.0 {
        return Err(InvalidDimensions {
            width: image_width,
            height: image_height,
        });
    }

    let scale_w = geometry.available_width / image_width;
    let scale_h = geometry.available_height / image_height;
    let scale_factor = scale_w.min(scale_h);

    let width = image_width * scale_factor;
    let height = image_height * scale_factor;

    Ok(Placement {
        scale_factor,
        width,
        height,
        x_origin: (geometry.page_width - width) / 2.0,
        y_origin: (geometry.page_height - height) / 2.0,
    })
}
