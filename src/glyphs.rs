//! Glyph width table: approximate pixel widths of uppercase Latin letters.
//!
//! Widths were measured for Arial at 64px. The table is built once on first
//! access and shared read-only for the rest of the process, in the same way
//! the language registry is kept as a `OnceLock` singleton.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Static mapping from uppercase letter to rendered width in pixels.
pub struct GlyphWidthTable {
    widths: HashMap<char, u32>,
}

/// Global table instance (initialized lazily)
static TABLE: OnceLock<GlyphWidthTable> = OnceLock::new();

impl GlyphWidthTable {
    /// Get the global glyph width table.
    pub fn get() -> &'static GlyphWidthTable {
        TABLE.get_or_init(|| GlyphWidthTable {
            widths: ARIAL_64PX.iter().copied().collect(),
        })
    }

    /// Width of a single glyph, or `None` for characters outside the table.
    ///
    /// Lookup is exact: callers are expected to uppercase first.
    pub fn width(&self, glyph: char) -> Option<u32> {
        self.widths.get(&glyph).copied()
    }

    /// Number of glyphs in the table.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}

const ARIAL_64PX: [(char, u32); 26] = [
    ('Q', 50),
    ('W', 60),
    ('E', 43),
    ('R', 46),
    ('T', 39),
    ('Y', 43),
    ('U', 46),
    ('I', 18),
    ('O', 50),
    ('P', 43),
    ('A', 43),
    ('S', 43),
    ('D', 46),
    ('F', 39),
    ('G', 50),
    ('H', 46),
    ('J', 32),
    ('K', 43),
    ('L', 36),
    ('Z', 39),
    ('X', 43),
    ('C', 46),
    ('V', 43),
    ('B', 43),
    ('N', 46),
    ('M', 53),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_get_returns_singleton() {
        let table1 = GlyphWidthTable::get();
        let table2 = GlyphWidthTable::get();
        assert!(std::ptr::eq(table1, table2));
    }

    #[test]
    fn test_table_covers_latin_alphabet() {
        let table = GlyphWidthTable::get();
        assert!(!table.is_empty());
        assert_eq!(table.len(), 26);
        assert!(('A'..='Z').all(|c| table.width(c).is_some()));
    }

    #[test]
    fn test_known_widths() {
        let table = GlyphWidthTable::get();
        assert_eq!(table.width('I'), Some(18));
        assert_eq!(table.width('M'), Some(53));
        assert_eq!(table.width('W'), Some(60));
    }

    #[test]
    fn test_lowercase_and_digits_absent() {
        let table = GlyphWidthTable::get();
        assert_eq!(table.width('a'), None);
        assert_eq!(table.width('7'), None);
        assert_eq!(table.width('-'), None);
    }
}
