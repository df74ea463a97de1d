//! PDF document assembly
//!
//! Builds the whole document in memory: one page per source image, each
//! page painted with an opaque white background before the image is drawn
//! at its computed placement. Nothing touches the filesystem for output
//! here; the caller receives the serialized bytes and persists them in a
//! single write.

use printpdf::*;

use crate::error::{ConvertError, Result};
use crate::geometry::{PageGeometry, pt_to_mm};
use crate::job::ImageSource;
use crate::layout::{Placement, compute_placement};

/// Assemble a PDF from the given sources, in order.
///
/// `on_page` fires after each page is sealed, with the zero-based index of
/// the source that produced it. Any failure aborts the whole assembly; no
/// partial document escapes.
pub fn assemble_pdf_bytes<F>(
    sources: &[ImageSource],
    geometry: &PageGeometry,
    mut on_page: F,
) -> Result<Vec<u8>>
where
    F: FnMut(usize),
{
    let mut doc = PdfDocument::new("Images");
    let mut pages = Vec::with_capacity(sources.len());

    for (index, source) in sources.iter().enumerate() {
        let (width_px, height_px) = source.dimensions()?;
        let placement = compute_placement(width_px as f32, height_px as f32, geometry).map_err(
            |invalid| ConvertError::InvalidImageDimensions {
                path: source.path().to_owned(),
                source: invalid,
            },
        )?;

        let bytes = std::fs::read(source.path()).map_err(|e| ConvertError::ImageRead {
            path: source.path().to_owned(),
            message: e.to_string(),
        })?;
        let mut warnings = Vec::new();
        let raw_image = RawImage::decode_from_bytes(&bytes, &mut warnings).map_err(|message| {
            ConvertError::ImageRead {
                path: source.path().to_owned(),
                message,
            }
        })?;
        let image_id = doc.add_image(&raw_image);

        let ops = page_ops(image_id, &placement, geometry);
        pages.push(PdfPage::new(
            Mm(pt_to_mm(geometry.page_width)),
            Mm(pt_to_mm(geometry.page_height)),
            ops,
        ));

        log::debug!(
            "page {} sealed: {} at {:.1}x{:.1}pt, scale {:.3}",
            index,
            source.path().display(),
            placement.width,
            placement.height,
            placement.scale_factor
        );
        on_page(index);
    }

    doc.pages = pages;

    let mut warnings = Vec::new();
    Ok(doc.save(&PdfSaveOptions::default(), &mut warnings))
}

/// Operations for a single page: white background, then the image.
///
/// The image transform pins the dpi to 72 so one source pixel maps to one
/// point before the uniform placement scale is applied.
fn page_ops(image_id: XObjectId, placement: &Placement, geometry: &PageGeometry) -> Vec<Op> {
    let corners = [
        (0.0, 0.0),
        (geometry.page_width, 0.0),
        (geometry.page_width, geometry.page_height),
        (0.0, geometry.page_height),
    ];
    let background = Polygon {
        rings: vec![PolygonRing {
            points: corners
                .iter()
                .map(|&(x, y)| LinePoint {
                    p: Point { x: Pt(x), y: Pt(y) },
                    bezier: false,
                })
                .collect(),
        }],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    };

    vec![
        Op::SetFillColor {
            col: Color::Rgb(Rgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
                icc_profile: None,
            }),
        },
        Op::DrawPolygon {
            polygon: background,
        },
        Op::UseXobject {
            id: image_id,
            transform: XObjectTransform {
                translate_x: Some(Pt(placement.x_origin)),
                translate_y: Some(Pt(placement.y_origin)),
                rotate: None,
                scale_x: Some(placement.scale_factor),
                scale_y: Some(placement.scale_factor),
                dpi: Some(72.0),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ops_paint_background_before_image() {
        let placement = compute_placement(800.0, 600.0, &PageGeometry::LETTER).unwrap();
        let ops = page_ops(
            XObjectId::new(),
            &placement,
            &PageGeometry::LETTER,
        );

        assert_eq!(ops.len(), 3);
        assert!(matches!(ops[0], Op::SetFillColor { .. }));
        assert!(matches!(ops[1], Op::DrawPolygon { .. }));
        assert!(matches!(ops[2], Op::UseXobject { .. }));
    }

    #[test]
    fn test_background_covers_full_page() {
        let placement = compute_placement(800.0, 600.0, &PageGeometry::LETTER).unwrap();
        let ops = page_ops(XObjectId::new(), &placement, &PageGeometry::LETTER);

        let Op::DrawPolygon { polygon } = &ops[1] else {
            panic!("expected polygon op");
        };
        let points = &polygon.rings[0].points;
        assert_eq!(points.len(), 4);
        let max_x = points.iter().map(|p| p.p.x.0).fold(0.0f32, f32::max);
        let max_y = points.iter().map(|p| p.p.y.0).fold(0.0f32, f32::max);
        assert_eq!(max_x, 612.0);
        assert_eq!(max_y, 792.0);
    }
}
