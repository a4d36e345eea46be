//! PDF document writer
//!
//! Places a captured image on fixed-size pages with printpdf. The image
//! spans the full page width, anchored at the top-left corner of the page.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::{DynamicImage, ImageBuffer, RgbImage};
use printpdf::{Image, Mm, PdfDocument};
use tracing::debug;

use super::page::PageLayout;
use crate::error::{ReportError, ReportResult};

const MM_PER_INCH: f64 = 25.4;

/// Write `image` to a new PDF at `path`, returning the number of pages
pub fn write_pdf(
    image: &RgbImage,
    layout: &PageLayout,
    title: &str,
    path: &Path,
) -> ReportResult<usize> {
    let tiles = layout.tiles(image.width(), image.height());
    if tiles.is_empty() {
        return Err(ReportError::ExportFailed("captured image is empty".into()));
    }

    // Pixel density that makes the image exactly one page wide
    let dpi = image.width() as f64 * MM_PER_INCH / layout.width_mm;

    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(layout.width_mm),
        Mm(layout.height_mm),
        "Layer 1",
    );

    for (index, tile) in tiles.iter().enumerate() {
        let (page, layer) = if index == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(
                Mm(layout.width_mm),
                Mm(layout.height_mm),
                format!("Page {}", index + 1),
            )
        };
        let layer = doc.get_page(page).get_layer(layer);

        let strip: RgbImage = ImageBuffer::from_fn(image.width(), tile.height_px, |x, y| {
            *image.get_pixel(x, tile.y_px + y)
        });
        let pdf_image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(strip));

        debug!(
            page = index + 1,
            height_mm = tile.height_mm,
            "placing report image"
        );
        // PDF coordinates start at the bottom-left corner
        pdf_image.add_to_layer(
            layer,
            Some(Mm(0.0)),
            Some(Mm(layout.height_mm - tile.height_mm)),
            None,
            None,
            None,
            Some(dpi),
        );
    }

    let file = File::create(path).map_err(|e| {
        ReportError::ExportFailed(format!("Failed to create {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| ReportError::ExportFailed(format!("Failed to write PDF: {}", e)))?;

    Ok(tiles.len())
}
