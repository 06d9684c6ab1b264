//! Print-flow export: a single A4 page of pre-wrapped lines, encoded as PDF.
//!
//! Layout happens in `to_print_flow` (pure); `encode_pdf` only drives lopdf.
//! No page-break logic: text that runs past the bottom edge is left to the
//! viewer. Only single-page output is guaranteed correct.

use encoding_rs::WINDOWS_1252;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::export::font_metrics::{get_metrics, BaseFont};
use crate::export::fonts::print_flow_font;
use crate::export::wrap::wrap_text;
use crate::export::ExportError;
use crate::models::{GeneratedText, Typography};

const MM_TO_PT: f32 = 72.0 / 25.4;

/// A4 portrait, in points.
pub const PAGE_WIDTH_PT: f32 = 595.28;
pub const PAGE_HEIGHT_PT: f32 = 841.89;
/// Usable line width. Constant, whatever the page size.
pub const LINE_WIDTH_MM: f32 = 180.0;
pub const MARGIN_LEFT_MM: f32 = 15.0;
/// Distance from the top edge to the first baseline.
pub const FIRST_BASELINE_MM: f32 = 20.0;
pub const LINE_HEIGHT_FACTOR: f32 = 1.15;

const FONT_RESOURCE: &str = "F1";

/// Laid-out page, ready for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintDocument {
    pub base_font: BaseFont,
    pub size_pt: u8,
    pub lines: Vec<String>,
    /// First baseline, in PDF user space (origin bottom-left).
    pub origin_x_pt: f32,
    pub origin_y_pt: f32,
    pub leading_pt: f32,
}

/// Maps the typeface, sets the size, and wraps the text to the line width.
pub fn to_print_flow(text: &GeneratedText, typography: Typography) -> PrintDocument {
    let metrics = get_metrics(print_flow_font(typography.font));
    let size_pt = typography.font_size.points();
    let size = f32::from(size_pt);

    let lines = wrap_text(text, metrics, size, LINE_WIDTH_MM * MM_TO_PT);

    PrintDocument {
        base_font: metrics.font,
        size_pt,
        lines,
        origin_x_pt: MARGIN_LEFT_MM * MM_TO_PT,
        origin_y_pt: PAGE_HEIGHT_PT - FIRST_BASELINE_MM * MM_TO_PT,
        leading_pt: size * LINE_HEIGHT_FACTOR,
    }
}

/// Encodes the page as a one-page PDF using a standard Type1 font.
///
/// The output carries no timestamps or document IDs, so identical input
/// always yields identical bytes.
pub fn encode_pdf(page: &PrintDocument) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.4");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => page.base_font.postscript_name(),
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            FONT_RESOURCE => font_id,
        },
    });

    let content = Content {
        operations: text_operations(page),
    };
    let content_bytes = content
        .encode()
        .map_err(|e| ExportError::Pdf(format!("content stream: {e}")))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, content_bytes));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
        "MediaBox" => vec![
            0.into(),
            0.into(),
            Object::Real(PAGE_WIDTH_PT.into()),
            Object::Real(PAGE_HEIGHT_PT.into()),
        ],
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![page_id.into()],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Pdf(format!("write: {e}")))?;
    Ok(bytes)
}

fn text_operations(page: &PrintDocument) -> Vec<Operation> {
    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![FONT_RESOURCE.into(), Object::Integer(i64::from(page.size_pt))],
        ),
        Operation::new("TL", vec![Object::Real(page.leading_pt.into())]),
        Operation::new(
            "Td",
            vec![
                Object::Real(page.origin_x_pt.into()),
                Object::Real(page.origin_y_pt.into()),
            ],
        ),
    ];

    for (i, line) in page.lines.iter().enumerate() {
        if i > 0 {
            ops.push(Operation::new("T*", vec![]));
        }
        if !line.is_empty() {
            ops.push(Operation::new(
                "Tj",
                vec![Object::String(win_ansi_bytes(line), StringFormat::Literal)],
            ));
        }
    }

    ops.push(Operation::new("ET", vec![]));
    ops
}

/// Encodes a line for a WinAnsiEncoding font; unmappable characters become `?`.
///
/// Emoji presentation marks are dropped first, and a zero-width-joined
/// sequence counts as one character, so each visible emoji gives one `?`.
fn win_ansi_bytes(line: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(line.len());
    let mut buf = [0u8; 4];
    let mut joined = false;
    for c in line.chars() {
        if c == ZERO_WIDTH_JOINER {
            joined = true;
            continue;
        }
        if is_emoji_modifier(c) {
            continue;
        }
        let glued = std::mem::take(&mut joined);
        if c.is_ascii() {
            out.push(c as u8);
            continue;
        }
        let (encoded, _, had_errors) = WINDOWS_1252.encode(c.encode_utf8(&mut buf));
        if !had_errors {
            out.extend_from_slice(&encoded);
        } else if !glued {
            out.push(b'?');
        }
    }
    out
}

const ZERO_WIDTH_JOINER: char = '\u{200d}';

/// Variation selectors, skin tones and tag characters: never visible alone.
fn is_emoji_modifier(c: char) -> bool {
    matches!(
        c,
        '\u{fe00}'..='\u{fe0f}' | '\u{1f3fb}'..='\u{1f3ff}' | '\u{e0020}'..='\u{e007f}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Font, FontSize};

    fn typography(font: Font, font_size: FontSize) -> Typography {
        Typography { font, font_size }
    }

    #[test]
    fn test_font_mapping_and_size() {
        let text = GeneratedText::new("Hallo");
        let page = to_print_flow(&text, typography(Font::Calibri, FontSize::Pt12));
        assert_eq!(page.base_font, BaseFont::Helvetica);
        assert_eq!(page.size_pt, 12);

        let page = to_print_flow(&text, typography(Font::TimesNewRoman, FontSize::Pt11));
        assert_eq!(page.base_font, BaseFont::TimesRoman);
        assert_eq!(page.size_pt, 11);
    }

    #[test]
    fn test_origin_is_fixed_margin_offset() {
        let page = to_print_flow(&GeneratedText::new("x"), Typography::default());
        assert!((page.origin_x_pt - 42.52).abs() < 0.01);
        assert!((page.origin_y_pt - (841.89 - 56.69)).abs() < 0.01);
        assert!((page.leading_pt - 12.65).abs() < 1e-4);
    }

    #[test]
    fn test_lines_preserve_source_breaks() {
        let text = GeneratedText::new("Beste Anna,\n\nTot morgen!");
        let page = to_print_flow(&text, Typography::default());
        assert_eq!(page.lines, vec!["Beste Anna,", "", "Tot morgen!"]);
    }

    #[test]
    fn test_win_ansi_maps_dutch_accents_and_replaces_emoji() {
        assert_eq!(win_ansi_bytes("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(win_ansi_bytes("€"), vec![0x80]);
        assert_eq!(win_ansi_bytes("ok 👍"), b"ok ?".to_vec());
    }

    #[test]
    fn test_one_question_mark_per_visible_emoji() {
        use crate::models::options::Emoji;
        for emoji in Emoji::ALL {
            if emoji == Emoji::None {
                continue;
            }
            let line = format!("Let op {}", emoji.value());
            assert_eq!(win_ansi_bytes(&line), b"Let op ?".to_vec(), "{line}");
        }
        // Skin tone modifier and a joined family sequence.
        assert_eq!(win_ansi_bytes("👍🏽"), b"?".to_vec());
        assert_eq!(win_ansi_bytes("👨\u{200d}👩\u{200d}👧 klaar"), b"? klaar".to_vec());
    }

    #[test]
    fn test_encode_produces_pdf_header() {
        let page = to_print_flow(&GeneratedText::new("Geachte heer,"), Typography::default());
        let bytes = encode_pdf(&page).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
    }

    #[test]
    fn test_encode_is_byte_identical_on_repeat() {
        let page = to_print_flow(
            &GeneratedText::new("Geachte heer,\n\nMet vriendelijke groet"),
            typography(Font::TimesNewRoman, FontSize::Pt12),
        );
        assert_eq!(encode_pdf(&page).unwrap(), encode_pdf(&page).unwrap());
    }

    #[test]
    fn test_encoded_text_is_extractable() {
        let page = to_print_flow(
            &GeneratedText::new("Geachte heer,\n\nHierbij bevestig ik de afspraak."),
            Typography::default(),
        );
        let bytes = encode_pdf(&page).unwrap();
        let extracted = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(extracted.contains("Geachte"));
        assert!(extracted.contains("afspraak"));
    }

    #[test]
    fn test_encoded_font_dictionary_names_base_font() {
        let page = to_print_flow(
            &GeneratedText::new("Hallo"),
            typography(Font::TimesNewRoman, FontSize::Pt11),
        );
        let bytes = encode_pdf(&page).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        let has_times = doc.objects.values().any(|obj| {
            obj.as_dict()
                .ok()
                .and_then(|d| d.get(b"BaseFont").ok())
                .and_then(|name| name.as_name().ok())
                == Some(b"Times-Roman".as_slice())
        });
        assert!(has_times);
    }
}
