//! Page geometry for exported documents
//!
//! The captured image always spans the full page width; its height follows
//! from the image's aspect ratio. Content taller than one page is split into
//! page-sized horizontal strips.

/// A4 width in millimeters
pub const A4_WIDTH_MM: f64 = 210.0;
/// A4 height in millimeters
pub const A4_HEIGHT_MM: f64 = 297.0;

/// Fixed page format, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub width_mm: f64,
    pub height_mm: f64,
}

/// One page's share of the captured image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTile {
    /// First pixel row of the strip
    pub y_px: u32,
    /// Height of the strip in pixels
    pub height_px: u32,
    /// Height the strip occupies on the page
    pub height_mm: f64,
}

impl PageLayout {
    /// A4, portrait
    pub fn a4_portrait() -> Self {
        Self {
            width_mm: A4_WIDTH_MM,
            height_mm: A4_HEIGHT_MM,
        }
    }

    /// Height of an image scaled to the page width
    pub fn image_height_mm(&self, image_width_px: u32, image_height_px: u32) -> f64 {
        image_height_px as f64 * self.width_mm / image_width_px as f64
    }

    /// Pixel rows of a `image_width_px`-wide image that fit on one page
    fn rows_per_page(&self, image_width_px: u32) -> u32 {
        let rows = (self.height_mm * image_width_px as f64 / self.width_mm).floor() as u32;
        rows.max(1)
    }

    /// Split an image into page strips, top to bottom
    ///
    /// Returns a single tile when the image fits on one page.
    pub fn tiles(&self, image_width_px: u32, image_height_px: u32) -> Vec<PageTile> {
        if image_width_px == 0 || image_height_px == 0 {
            return Vec::new();
        }

        let per_page = self.rows_per_page(image_width_px);
        let mut tiles = Vec::new();
        let mut y = 0;
        while y < image_height_px {
            let height_px = per_page.min(image_height_px - y);
            tiles.push(PageTile {
                y_px: y,
                height_px,
                height_mm: self.image_height_mm(image_width_px, height_px),
            });
            y += height_px;
        }
        tiles
    }
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::a4_portrait()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_preserves_aspect_ratio() {
        let layout = PageLayout::a4_portrait();
        assert_eq!(layout.image_height_mm(840, 400), 400.0 * 210.0 / 840.0);
        assert_eq!(layout.image_height_mm(420, 420), 210.0);
    }

    #[test]
    fn test_single_page_when_content_fits() {
        let layout = PageLayout::a4_portrait();
        let tiles = layout.tiles(840, 400);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].y_px, 0);
        assert_eq!(tiles[0].height_px, 400);
        assert_eq!(tiles[0].height_mm, 100.0);
    }

    #[test]
    fn test_tall_content_is_split_across_pages() {
        let layout = PageLayout::a4_portrait();
        // 210 px wide -> 1 px per mm -> 297 rows per page
        let tiles = layout.tiles(210, 700);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].height_px, 297);
        assert_eq!(tiles[1].y_px, 297);
        assert_eq!(tiles[2].y_px, 594);
        assert_eq!(tiles[2].height_px, 106);
        assert!(tiles.iter().all(|t| t.height_mm <= A4_HEIGHT_MM));

        let total: u32 = tiles.iter().map(|t| t.height_px).sum();
        assert_eq!(total, 700);
    }

    #[test]
    fn test_empty_image_has_no_tiles() {
        let layout = PageLayout::a4_portrait();
        assert!(layout.tiles(0, 100).is_empty());
        assert!(layout.tiles(100, 0).is_empty());
    }
}
