//! Typeface lookup tables, one per export kind.
//!
//! The print-flow surface only has its small built-in catalog, so the three
//! choices collapse onto two families. The structured document references
//! fonts by name, so its table is the identity.
//!
//! Both tables are indexed by the `Font` discriminant, in `Font::ALL` order.

use crate::export::font_metrics::BaseFont;
use crate::models::Font;

/// Arial, Calibri → sans-serif; Times New Roman → serif.
const PRINT_FLOW_FONTS: [BaseFont; 3] = [
    BaseFont::Helvetica,
    BaseFont::Helvetica,
    BaseFont::TimesRoman,
];

const STRUCTURED_FONTS: [&str; 3] = ["Arial", "Calibri", "Times New Roman"];

pub fn print_flow_font(font: Font) -> BaseFont {
    PRINT_FLOW_FONTS[font as usize]
}

pub fn structured_font(font: Font) -> &'static str {
    STRUCTURED_FONTS[font as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_follow_font_order() {
        for (i, font) in Font::ALL.iter().enumerate() {
            assert_eq!(*font as usize, i);
        }
    }

    #[test]
    fn test_print_flow_collapses_sans_serif_choices() {
        assert_eq!(print_flow_font(Font::Arial), BaseFont::Helvetica);
        assert_eq!(print_flow_font(Font::Calibri), BaseFont::Helvetica);
        assert_eq!(print_flow_font(Font::TimesNewRoman), BaseFont::TimesRoman);
    }

    #[test]
    fn test_structured_is_identity() {
        for font in Font::ALL {
            assert_eq!(structured_font(font), font.name());
        }
    }
}
