//! Capturing a rendered region as a raster image
//!
//! A region is a ratatui [`Buffer`]. Each cell becomes a block of
//! `CELL_WIDTH x CELL_HEIGHT` pixels (times the oversampling factor), with
//! the cell's glyph drawn from the built-in bitmap font on a white page.

use image::{Rgb, RgbImage};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::{Color, Modifier},
    widgets::Widget,
};
use tracing::debug;

use super::glyphs::{box_arms, glyph, is_set, GLYPH_WIDTH};
use crate::error::{ReportError, ReportResult};

/// Cell width in pixels at 1x
pub const CELL_WIDTH: u32 = 6;
/// Cell height in pixels at 1x
pub const CELL_HEIGHT: u32 = 10;

const PAPER: Rgb<u8> = Rgb([255, 255, 255]);
const INK: Rgb<u8> = Rgb([33, 37, 41]);

/// Something that can be rasterized for export
pub trait RegionCapture {
    /// Rasterize at `scale` times the base resolution
    fn capture(&self, scale: u32) -> ReportResult<RgbImage>;
}

/// A captured region backed by an off-screen buffer
#[derive(Debug, Clone)]
pub struct BufferCapture {
    buffer: Buffer,
}

impl BufferCapture {
    pub fn new(buffer: Buffer) -> Self {
        Self { buffer }
    }

    /// Render `widget` off-screen at the size of `region`
    ///
    /// The region's position is discarded; only its size matters.
    pub fn render<W: Widget>(widget: W, region: Rect) -> Self {
        let area = Rect::new(0, 0, region.width, region.height);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        Self { buffer }
    }

    pub fn area(&self) -> Rect {
        self.buffer.area
    }
}

impl RegionCapture for BufferCapture {
    fn capture(&self, scale: u32) -> ReportResult<RgbImage> {
        rasterize(&self.buffer, scale)
    }
}

/// Rasterize every cell of `buffer`
pub fn rasterize(buffer: &Buffer, scale: u32) -> ReportResult<RgbImage> {
    let area = buffer.area;
    if area.width == 0 || area.height == 0 {
        return Err(ReportError::ExportFailed(
            "report region is not rendered".into(),
        ));
    }
    if scale == 0 {
        return Err(ReportError::ExportFailed(
            "capture scale must be at least 1".into(),
        ));
    }

    let cell_w = CELL_WIDTH * scale;
    let cell_h = CELL_HEIGHT * scale;
    let mut image = RgbImage::from_pixel(
        area.width as u32 * cell_w,
        area.height as u32 * cell_h,
        PAPER,
    );

    for row in 0..area.height {
        for col in 0..area.width {
            let cell = &buffer.content[(row as usize) * (area.width as usize) + col as usize];
            let origin = (col as u32 * cell_w, row as u32 * cell_h);
            draw_cell(&mut image, cell, origin, scale);
        }
    }

    debug!(
        width = image.width(),
        height = image.height(),
        scale,
        "captured report region"
    );
    Ok(image)
}

fn draw_cell(image: &mut RgbImage, cell: &Cell, origin: (u32, u32), scale: u32) {
    if let Some(bg) = paper_color(cell.bg) {
        for y in 0..CELL_HEIGHT {
            for x in 0..CELL_WIDTH {
                fill(image, origin, x, y, scale, bg);
            }
        }
    }

    let ch = cell.symbol().chars().next().unwrap_or(' ');
    let ink = ink_color(cell.fg);

    if let Some((left, right, up, down)) = box_arms(ch) {
        let mid_x = CELL_WIDTH / 2;
        let mid_y = CELL_HEIGHT / 2;
        let xs = (if left { 0 } else { mid_x })..(if right { CELL_WIDTH } else { mid_x + 1 });
        if left || right {
            for x in xs {
                fill(image, origin, x, mid_y, scale, ink);
            }
        }
        let ys = (if up { 0 } else { mid_y })..(if down { CELL_HEIGHT } else { mid_y + 1 });
        if up || down {
            for y in ys {
                fill(image, origin, mid_x, y, scale, ink);
            }
        }
        return;
    }

    if let Some(columns) = glyph(ch) {
        let bold = cell.modifier.contains(Modifier::BOLD);
        for gx in 0..GLYPH_WIDTH {
            for gy in 0..CELL_HEIGHT - 1 {
                if is_set(columns, gx, gy) {
                    fill(image, origin, gx, gy + 1, scale, ink);
                    if bold {
                        fill(image, origin, gx + 1, gy + 1, scale, ink);
                    }
                }
            }
        }
    }
}

/// Paint one base-resolution pixel of a cell, scaled
fn fill(image: &mut RgbImage, origin: (u32, u32), x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    if x >= CELL_WIDTH || y >= CELL_HEIGHT {
        return;
    }
    for dy in 0..scale {
        for dx in 0..scale {
            image.put_pixel(
                origin.0 + x * scale + dx,
                origin.1 + y * scale + dy,
                color,
            );
        }
    }
}

/// Terminal foreground colors mapped to print-friendly ink
fn ink_color(color: Color) -> Rgb<u8> {
    match color {
        Color::Red | Color::LightRed => Rgb([176, 42, 55]),
        Color::Green | Color::LightGreen => Rgb([25, 135, 84]),
        Color::Blue | Color::LightBlue => Rgb([13, 110, 253]),
        Color::Yellow | Color::LightYellow => Rgb([176, 132, 0]),
        Color::Magenta | Color::LightMagenta => Rgb([111, 66, 193]),
        Color::Cyan | Color::LightCyan => Rgb([13, 132, 160]),
        Color::DarkGray => Rgb([108, 117, 125]),
        Color::Rgb(r, g, b) => Rgb([r, g, b]),
        _ => INK,
    }
}

/// Explicit cell backgrounds; terminal defaults stay white
fn paper_color(color: Color) -> Option<Rgb<u8>> {
    match color {
        Color::Rgb(r, g, b) => Some(Rgb([r, g, b])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    fn text_buffer(text: &str) -> Buffer {
        let area = Rect::new(0, 0, text.chars().count() as u16, 1);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, text, Style::default());
        buf
    }

    #[test]
    fn test_dimensions_follow_scale() {
        let capture = BufferCapture::new(text_buffer("Hi"));
        let one = capture.capture(1).unwrap();
        let two = capture.capture(2).unwrap();

        assert_eq!((one.width(), one.height()), (2 * CELL_WIDTH, CELL_HEIGHT));
        assert_eq!((two.width(), two.height()), (2 * one.width(), 2 * one.height()));
    }

    #[test]
    fn test_text_is_inked() {
        let image = rasterize(&text_buffer("H"), 1).unwrap();
        // Left stem of H, one row below the cell top
        assert_eq!(*image.get_pixel(0, 1), INK);
        // Spacing column stays blank
        assert_eq!(*image.get_pixel(5, 1), PAPER);
    }

    #[test]
    fn test_blank_cell_stays_white() {
        let image = rasterize(&text_buffer(" "), 2).unwrap();
        assert!(image.pixels().all(|p| *p == PAPER));
    }

    #[test]
    fn test_box_line_is_drawn() {
        let image = rasterize(&text_buffer("─"), 1).unwrap();
        for x in 0..CELL_WIDTH {
            assert_eq!(*image.get_pixel(x, CELL_HEIGHT / 2), INK);
        }
    }

    #[test]
    fn test_empty_region_fails() {
        let capture = BufferCapture::new(Buffer::empty(Rect::new(0, 0, 0, 0)));
        let err = capture.capture(2).unwrap_err();
        assert!(matches!(err, ReportError::ExportFailed(_)));
    }

    #[test]
    fn test_zero_scale_fails() {
        let capture = BufferCapture::new(text_buffer("x"));
        assert!(capture.capture(0).is_err());
    }

    #[test]
    fn test_render_discards_position() {
        let capture = BufferCapture::render(
            ratatui::widgets::Paragraph::new("abc"),
            Rect::new(10, 5, 3, 1),
        );
        assert_eq!(capture.area(), Rect::new(0, 0, 3, 1));
    }
}
