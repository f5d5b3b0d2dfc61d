use ab_glyph::{Font, PxScale};
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

use crate::card::{COLS, Card, ROWS};

/// Pixel geometry mapping card cells onto the template image.
///
/// Defaults are calibrated to the stock template; tests inject a smaller
/// layout to render against synthetic images.
#[derive(Debug, Clone, Copy)]
pub struct CardLayout {
    /// Left edge of the first column.
    pub start_x: i32,
    /// Top edge of the first row.
    pub start_y: i32,
    pub cell_width: i32,
    pub cell_height: i32,
    /// Extra horizontal shift for single-digit values in the leftmost
    /// column, compensating for proportional glyph widths.
    pub single_digit_offset: i32,
    /// Text color for the numbers.
    pub ink: Rgba<u8>,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            start_x: 250,
            start_y: 650,
            cell_width: 255,
            cell_height: 260,
            single_digit_offset: 30,
            ink: Rgba([255, 255, 255, 255]),
        }
    }
}

impl CardLayout {
    /// Top-left pixel position for a value at (column, row).
    pub fn cell_origin(&self, col: usize, row: usize, value: u8) -> (i32, i32) {
        let mut x = self.start_x + col as i32 * self.cell_width;
        if col == 0 && value < 10 {
            x += self.single_digit_offset;
        }
        let y = self.start_y + row as i32 * self.cell_height;
        (x, y)
    }
}

/// Render a card's numbers onto a copy of the template image.
///
/// The free cell is skipped outright. The template itself is never touched,
/// so consecutive cards cannot bleed into each other.
pub fn render_card_image(
    card: &Card,
    template: &DynamicImage,
    font: &impl Font,
    font_px: f32,
    layout: &CardLayout,
) -> RgbaImage {
    let mut canvas = template.to_rgba8();
    let scale = PxScale::from(font_px);
    for col in 0..COLS {
        for row in 0..ROWS {
            let Some(value) = card.value(col, row) else {
                continue;
            };
            let (x, y) = layout.cell_origin(col, row, value);
            draw_text_mut(
                &mut canvas,
                layout.ink,
                x,
                y,
                scale,
                font,
                &value.to_string(),
            );
        }
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cell_origin_follows_the_grid() {
        let layout = CardLayout::default();
        assert_eq!(layout.cell_origin(0, 0, 12), (250, 650));
        assert_eq!(layout.cell_origin(1, 0, 16), (505, 650));
        assert_eq!(layout.cell_origin(4, 4, 75), (250 + 4 * 255, 650 + 4 * 260));
    }

    #[test]
    fn single_digit_offset_applies_only_to_first_column() {
        let layout = CardLayout::default();
        // single digit in column 0 shifts right
        assert_eq!(layout.cell_origin(0, 1, 9), (280, 910));
        // double digit in column 0 does not
        assert_eq!(layout.cell_origin(0, 1, 10), (250, 910));
        // single-digit check never fires past column 0 (no such values exist,
        // but the guard is on the column, not the value)
        assert_eq!(layout.cell_origin(1, 1, 9), (505, 910));
    }
}
