//! 5x7 bitmap font for vehicle labels
//!
//! Each glyph is seven rows, top to bottom; bit 4 is the leftmost column.

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance in font pixels (glyph plus one column of spacing)
pub const GLYPH_ADVANCE: u32 = 6;

type Glyph = [u8; GLYPH_HEIGHT as usize];

const DIGITS: [Glyph; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

const LOWERCASE: [Glyph; 26] = [
    [0x00, 0x00, 0x0E, 0x01, 0x0F, 0x11, 0x0F], // a
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x1E], // b
    [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E], // c
    [0x01, 0x01, 0x0D, 0x13, 0x11, 0x11, 0x0F], // d
    [0x00, 0x00, 0x0E, 0x11, 0x1F, 0x10, 0x0E], // e
    [0x06, 0x09, 0x08, 0x1C, 0x08, 0x08, 0x08], // f
    [0x00, 0x0F, 0x11, 0x11, 0x0F, 0x01, 0x0E], // g
    [0x10, 0x10, 0x16, 0x19, 0x11, 0x11, 0x11], // h
    [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E], // i
    [0x02, 0x00, 0x06, 0x02, 0x02, 0x12, 0x0C], // j
    [0x10, 0x10, 0x12, 0x14, 0x18, 0x14, 0x12], // k
    [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // l
    [0x00, 0x00, 0x1A, 0x15, 0x15, 0x11, 0x11], // m
    [0x00, 0x00, 0x16, 0x19, 0x11, 0x11, 0x11], // n
    [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E], // o
    [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10], // p
    [0x00, 0x00, 0x0D, 0x13, 0x0F, 0x01, 0x01], // q
    [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10], // r
    [0x00, 0x00, 0x0E, 0x10, 0x0E, 0x01, 0x1E], // s
    [0x08, 0x08, 0x1C, 0x08, 0x08, 0x09, 0x06], // t
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x13, 0x0D], // u
    [0x00, 0x00, 0x11, 0x11, 0x11, 0x0A, 0x04], // v
    [0x00, 0x00, 0x11, 0x11, 0x15, 0x15, 0x0A], // w
    [0x00, 0x00, 0x11, 0x0A, 0x04, 0x0A, 0x11], // x
    [0x00, 0x00, 0x11, 0x11, 0x0F, 0x01, 0x0E], // y
    [0x00, 0x00, 0x1F, 0x02, 0x04, 0x08, 0x1F], // z
];

/// Bitmap for `ch`; uppercase letters fall back to lowercase shapes
pub fn glyph(ch: char) -> Option<Glyph> {
    match ch {
        '0'..='9' => Some(DIGITS[ch as usize - '0' as usize]),
        'a'..='z' => Some(LOWERCASE[ch as usize - 'a' as usize]),
        'A'..='Z' => glyph(ch.to_ascii_lowercase()),
        ' ' => Some([0; GLYPH_HEIGHT as usize]),
        _ => None,
    }
}

/// Lit (column, row) cells of `ch`, row-major
pub fn lit_cells(ch: char) -> impl Iterator<Item = (u32, u32)> {
    let rows = glyph(ch).unwrap_or_default();
    (0..GLYPH_HEIGHT).flat_map(move |row| {
        (0..GLYPH_WIDTH)
            .filter(move |&col| rows[row as usize] & (0x10 >> col) != 0)
            .map(move |col| (col, row))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_glyphs_exist() {
        for ch in "2a2b".chars() {
            assert!(glyph(ch).is_some(), "missing glyph {ch:?}");
        }
    }

    #[test]
    fn test_full_coverage() {
        for ch in ('0'..='9').chain('a'..='z') {
            assert!(lit_cells(ch).count() > 0, "blank glyph {ch:?}");
        }
    }

    #[test]
    fn test_lit_cell_counts() {
        assert_eq!(lit_cells('2').count(), 14);
        assert_eq!(lit_cells('a').count(), 14);
        assert_eq!(lit_cells('b').count(), 16);
        assert_eq!(lit_cells(' ').count(), 0);
        assert_eq!(lit_cells('#').count(), 0);
    }

    #[test]
    fn test_cells_are_left_to_right() {
        let first_row: Vec<_> = lit_cells('7').take_while(|&(_, row)| row == 0).collect();
        assert_eq!(first_row, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);

        let one: Vec<_> = lit_cells('1').take(1).collect();
        assert_eq!(one, vec![(2, 0)]);
    }

    #[test]
    fn test_uppercase_falls_back() {
        assert_eq!(glyph('B'), glyph('b'));
    }
}
