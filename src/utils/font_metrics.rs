//! Advance widths for the built-in Helvetica-Bold font.
//!
//! The base-14 fonts are not embedded in the document, so string
//! measurement uses the standard AFM widths, expressed in 1/1000 of the
//! font size. Only the printable ASCII range is tabulated; anything else
//! falls back to the default glyph width.

const MM_PER_PT: f32 = 25.4 / 72.0;

/// Width used for characters outside the tabulated range.
const DEFAULT_WIDTH: u16 = 556;

/// AFM advance widths for Helvetica-Bold, U+0020 through U+007E.
#[rustfmt::skip]
const WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, // space ! " # $ % & '
    333, 333, 389, 584, 278, 333, 278, 278, // ( ) * + , - . /
    556, 556, 556, 556, 556, 556, 556, 556, // 0 1 2 3 4 5 6 7
    556, 556, 333, 333, 584, 584, 584, 611, // 8 9 : ; < = > ?
    975, 722, 722, 722, 722, 667, 611, 778, // @ A B C D E F G
    722, 278, 556, 722, 611, 833, 722, 778, // H I J K L M N O
    667, 778, 722, 667, 611, 722, 667, 944, // P Q R S T U V W
    667, 667, 611, 333, 278, 333, 584, 556, // X Y Z [ \ ] ^ _
    333, 556, 611, 556, 611, 556, 333, 611, // ` a b c d e f g
    611, 278, 278, 556, 278, 889, 611, 611, // h i j k l m n o
    611, 611, 389, 556, 333, 611, 556, 778, // p q r s t u v w
    556, 556, 500, 389, 280, 389, 584,      // x y z { | } ~
];

fn glyph_width(c: char) -> u16 {
    let code = c as u32;
    match code {
        0x20..=0x7E => WIDTHS[(code - 0x20) as usize],
        _ => DEFAULT_WIDTH,
    }
}

/// Width of `text` rendered in Helvetica-Bold at `size_pt`, in mm.
pub fn helvetica_bold_width_mm(text: &str, size_pt: f32) -> f32 {
    let units: u32 = text.chars().map(|c| glyph_width(c) as u32).sum();
    units as f32 * size_pt / 1000.0 * MM_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_has_zero_width() {
        assert_eq!(helvetica_bold_width_mm("", 16.0), 0.0);
    }

    #[test]
    fn width_matches_afm_units() {
        // 'A' is 722/1000 em: 722 * 10pt / 1000 = 7.22pt = 2.547mm
        let w = helvetica_bold_width_mm("A", 10.0);
        assert!((w - 2.547).abs() < 0.01, "got {w}");
    }

    #[test]
    fn width_is_additive() {
        let a = helvetica_bold_width_mm("A", 16.0);
        let aa = helvetica_bold_width_mm("AA", 16.0);
        assert!((aa - 2.0 * a).abs() < 1e-4);
    }

    #[test]
    fn narrow_glyphs_are_narrower() {
        assert!(
            helvetica_bold_width_mm("i", 16.0) < helvetica_bold_width_mm("W", 16.0)
        );
    }

    #[test]
    fn unmapped_chars_use_the_default_width() {
        let w = helvetica_bold_width_mm("é", 16.0);
        let d = 556.0 * 16.0 / 1000.0 * (25.4 / 72.0);
        assert!((w - d).abs() < 1e-4);
    }
}
