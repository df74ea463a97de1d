//! Page geometry constants
//!
//! All layout math happens in PDF points (1 inch = 72 points). The page
//! size and printable area are process-wide constants; nothing mutates
//! them after startup.

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

/// Page width in points (US Letter: 8.5" × 11")
pub const PAGE_WIDTH_PT: f32 = 612.0;

/// Page height in points (US Letter)
pub const PAGE_HEIGHT_PT: f32 = 792.0;

/// Printable width in points (page minus 36pt margins on each side)
pub const PRINTABLE_WIDTH_PT: f32 = 540.0;

/// Printable height in points (page minus 36pt margins on each side)
pub const PRINTABLE_HEIGHT_PT: f32 = 720.0;

/// Fixed page dimensions and printable area, in points.
///
/// The printable area is where image content may land; the band around it
/// stays blank so nothing prints into the physical margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    /// Full page width
    pub page_width: f32,
    /// Full page height
    pub page_height: f32,
    /// Width available for image content
    pub available_width: f32,
    /// Height available for image content
    pub available_height: f32,
}

impl PageGeometry {
    /// US Letter at 72 dpi with a 36pt margin on every side
    pub const LETTER: PageGeometry = PageGeometry {
        page_width: PAGE_WIDTH_PT,
        page_height: PAGE_HEIGHT_PT,
        available_width: PRINTABLE_WIDTH_PT,
        available_height: PRINTABLE_HEIGHT_PT,
    };
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::LETTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_margins_are_symmetric() {
        let geom = PageGeometry::LETTER;
        assert_eq!(geom.page_width - geom.available_width, 72.0);
        assert_eq!(geom.page_height - geom.available_height, 72.0);
    }

    #[test]
    fn test_unit_conversion_roundtrip() {
        let pt = 612.0;
        assert!((mm_to_pt(pt_to_mm(pt)) - pt).abs() < 0.001);
        // US Letter width is 215.9mm
        assert!((pt_to_mm(PAGE_WIDTH_PT) - 215.9).abs() < 0.01);
    }
}
