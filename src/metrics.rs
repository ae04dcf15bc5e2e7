use crate::glyphs::GlyphWidthTable;

/// Width of the icon canvas the label is centered in, in pixels.
pub const TOTAL_WIDTH: i64 = 128;

/// Rendered width of `code` in pixels.
///
/// Characters without a table entry (digits, punctuation) contribute nothing.
/// A character whose uppercase form is several letters, like `ß` -> `SS`,
/// has no entry either.
pub fn text_width(code: &str) -> i64 {
    let table = GlyphWidthTable::get();
    code.chars()
        .filter_map(|character| {
            let mut upper = character.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(glyph), None) => table.width(glyph),
                _ => None,
            }
        })
        .map(i64::from)
        .sum()
}

/// Horizontal offset that centers `code` on a canvas of `total_width` pixels.
///
/// Negative when the label is wider than the canvas; not clamped.
pub fn left_margin_within(code: &str, total_width: i64) -> i64 {
    (total_width - text_width(code)).div_euclid(2)
}

/// Horizontal offset that centers `code` on the default canvas.
pub fn left_margin(code: &str) -> i64 {
    left_margin_within(code, TOTAL_WIDTH)
}
