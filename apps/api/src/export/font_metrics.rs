//! Static glyph-width tables for the two base fonts the print surface knows.
//!
//! Widths are the Adobe AFM advance widths of the standard Type1 fonts, in
//! 1/1000 em. All tables cover ASCII 0x20..=0x7E (95 printable characters).
//! Index = (char as usize) - 32.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Base font enum
// ────────────────────────────────────────────────────────────────────────────

/// Built-in families available on the print-flow surface without embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseFont {
    /// Generic sans-serif.
    Helvetica,
    /// Generic serif.
    TimesRoman,
}

impl BaseFont {
    /// PostScript name used in the PDF font dictionary.
    pub fn postscript_name(&self) -> &'static str {
        match self {
            BaseFont::Helvetica => "Helvetica",
            BaseFont::TimesRoman => "Times-Roman",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Character-width table for a base font.
///
/// `widths[i]` = advance width of ASCII character `(i + 32)` in 1/1000 em.
///
/// Width array slot layout:
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
pub struct FontMetricTable {
    pub font: BaseFont,
    widths: [u16; 95],
    /// Fallback width for non-ASCII characters (codepoints > 0x7E).
    pub average_char_width: u16,
}

impl FontMetricTable {
    /// Width of a single character in 1/1000 em.
    pub fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            self.widths[code - 32]
        } else {
            self.average_char_width
        }
    }

    /// Rendered width of a string in points at `size_pt`.
    ///
    /// Non-ASCII characters fall back to `average_char_width`.
    pub fn measure_pt(&self, s: &str, size_pt: f32) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size_pt / 1000.0
    }

    /// Width of one space in points at `size_pt`.
    pub fn space_pt(&self, size_pt: f32) -> f32 {
        f32::from(self.char_width(' ')) * size_pt / 1000.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (95 ASCII printable characters each)
// ────────────────────────────────────────────────────────────────────────────

static HELVETICA_TABLE: FontMetricTable = FontMetricTable {
    font: BaseFont::Helvetica,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0    1    2    3    4    5    6    7    8    9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :    ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [    \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {    |    }    ~
        334, 260, 334, 584,
    ],
    average_char_width: 556,
};

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    font: BaseFont::TimesRoman,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        278, 278, 564, 564, 564, 444, 921,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 469, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
        // {    |    }    ~
        480, 200, 480, 541,
    ],
    average_char_width: 500,
};

/// Returns the static metric table for a base font.
pub fn get_metrics(font: BaseFont) -> &'static FontMetricTable {
    match font {
        BaseFont::Helvetica => &HELVETICA_TABLE,
        BaseFont::TimesRoman => &TIMES_ROMAN_TABLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_returns_zero() {
        assert_eq!(get_metrics(BaseFont::Helvetica).measure_pt("", 11.0), 0.0);
    }

    #[test]
    fn test_measure_ascii_word() {
        let metrics = get_metrics(BaseFont::Helvetica);
        // "Brief" = B(667) + r(333) + i(222) + e(556) + f(278) = 2056 units
        let width = metrics.measure_pt("Brief", 10.0);
        assert!((width - 20.56).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_measure_scales_with_size() {
        let metrics = get_metrics(BaseFont::TimesRoman);
        let at_11 = metrics.measure_pt("Met vriendelijke groet", 11.0);
        let at_12 = metrics.measure_pt("Met vriendelijke groet", 12.0);
        assert!((at_12 / at_11 - 12.0 / 11.0).abs() < 1e-4);
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let metrics = get_metrics(BaseFont::Helvetica);
        assert_eq!(metrics.char_width('ë'), metrics.average_char_width);
    }

    #[test]
    fn test_times_is_narrower_than_helvetica_for_lowercase() {
        let text = "geachte mevrouw, hierbij bevestig ik onze afspraak";
        let helvetica = get_metrics(BaseFont::Helvetica).measure_pt(text, 11.0);
        let times = get_metrics(BaseFont::TimesRoman).measure_pt(text, 11.0);
        assert!(times < helvetica);
    }

    #[test]
    fn test_space_width() {
        assert!((get_metrics(BaseFont::Helvetica).space_pt(10.0) - 2.78).abs() < 1e-4);
        assert!((get_metrics(BaseFont::TimesRoman).space_pt(10.0) - 2.5).abs() < 1e-4);
    }
}
