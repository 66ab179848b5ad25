//! # Text Metrics
//!
//! Advance widths of the PDF base-14 Helvetica fonts, taken from the Adobe
//! AFM files (units of 1/1000 em). Used to resolve centred and
//! right-aligned text, since the built-in fonts carry no metrics at runtime.

use crate::ir::FontWeight;

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica, codes 32..=126.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

/// Helvetica-Bold, codes 32..=126.
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // '0'..'?'
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 'P'..'_'
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // '`'..'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,      // 'p'..'~'
];

/// Advance width of one character in 1/1000 em.
pub fn char_width(c: char, weight: FontWeight) -> u16 {
    let table = match weight {
        FontWeight::Normal => &HELVETICA,
        FontWeight::Bold => &HELVETICA_BOLD,
    };
    match c as u32 {
        code @ 32..=126 => table[(code - 32) as usize],
        _ => FALLBACK_WIDTH,
    }
}

/// Width of `text` in millimetres at `size` points.
pub fn text_width_mm(text: &str, weight: FontWeight, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| char_width(c, weight) as u32).sum();
    units as f32 / 1000.0 * size * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookups() {
        assert_eq!(char_width(' ', FontWeight::Normal), 278);
        assert_eq!(char_width('0', FontWeight::Normal), 556);
        assert_eq!(char_width('A', FontWeight::Normal), 667);
        assert_eq!(char_width('A', FontWeight::Bold), 722);
        assert_eq!(char_width('i', FontWeight::Normal), 222);
        assert_eq!(char_width('m', FontWeight::Bold), 889);
        assert_eq!(char_width('~', FontWeight::Bold), 584);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        assert_eq!(char_width('₹', FontWeight::Normal), FALLBACK_WIDTH);
        assert_eq!(char_width('\n', FontWeight::Bold), FALLBACK_WIDTH);
    }

    #[test]
    fn test_digits_width() {
        // Ten digits at 10pt: 5.56 em = 55.6pt
        let w = text_width_mm("0123456789", FontWeight::Normal, 10.0);
        assert!((w - 55.6 * MM_PER_PT).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_wider() {
        let text = "FIX PLUS AUTO CARE CENTER";
        assert!(
            text_width_mm(text, FontWeight::Bold, 18.0)
                > text_width_mm(text, FontWeight::Normal, 18.0)
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(text_width_mm("", FontWeight::Normal, 12.0), 0.0);
    }
}
