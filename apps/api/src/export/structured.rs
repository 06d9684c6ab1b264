//! Structured export: one paragraph per source line, packed as a DOCX.
//!
//! `to_structured_document` builds the paragraph/run model (pure);
//! `pack_docx` writes the minimal WordprocessingML package around it.
//! No wrapping and no paragraph merging: the word processor reflows.

use std::borrow::Cow;
use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::export::fonts::structured_font;
use crate::export::ExportError;
use crate::models::{GeneratedText, Typography};

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 portrait in twentieths of a point, with 1" margins.
const PAGE_WIDTH_TWIPS: &str = "11906";
const PAGE_HEIGHT_TWIPS: &str = "16838";
const MARGIN_TWIPS: &str = "1440";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordDocument {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    /// Literal family name, resolved by the consumer's installed fonts.
    pub font: &'static str,
    pub half_points: u32,
}

pub fn to_structured_document(text: &GeneratedText, typography: Typography) -> WordDocument {
    let font = structured_font(typography.font);
    let half_points = typography.font_size.half_points();

    WordDocument {
        paragraphs: text
            .lines()
            .map(|line| Paragraph {
                runs: vec![TextRun {
                    text: line.to_string(),
                    font,
                    half_points,
                }],
            })
            .collect(),
    }
}

/// Packs the document into DOCX bytes.
///
/// Entries carry the fixed DOS epoch timestamp so repeated packing of the
/// same document is byte-identical.
pub fn pack_docx(document: &WordDocument) -> Result<Vec<u8>, ExportError> {
    let body = document_xml(document)?;

    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let parts: [(&str, &[u8]); 3] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
        ("word/document.xml", &body),
    ];
    for (name, data) in parts {
        zip.start_file(name, options)
            .map_err(|e| ExportError::Docx(format!("{name}: {e}")))?;
        zip.write_all(data)
            .map_err(|e| ExportError::Docx(format!("{name}: {e}")))?;
    }

    let cursor = zip
        .finish()
        .map_err(|e| ExportError::Docx(format!("finish: {e}")))?;
    Ok(cursor.into_inner())
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

// ────────────────────────────────────────────────────────────────────────────
// word/document.xml
// ────────────────────────────────────────────────────────────────────────────

fn document_xml(document: &WordDocument) -> Result<Vec<u8>, ExportError> {
    let mut xml = Writer::new(Cursor::new(Vec::new()));

    emit(
        &mut xml,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))),
    )?;
    emit(
        &mut xml,
        Event::Start(BytesStart::new("w:document").with_attributes([("xmlns:w", WORDML_NS)])),
    )?;
    emit(&mut xml, Event::Start(BytesStart::new("w:body")))?;

    for paragraph in &document.paragraphs {
        emit(&mut xml, Event::Start(BytesStart::new("w:p")))?;
        for run in &paragraph.runs {
            write_run(&mut xml, run)?;
        }
        emit(&mut xml, Event::End(BytesEnd::new("w:p")))?;
    }

    write_section_properties(&mut xml)?;

    emit(&mut xml, Event::End(BytesEnd::new("w:body")))?;
    emit(&mut xml, Event::End(BytesEnd::new("w:document")))?;

    Ok(xml.into_inner().into_inner())
}

fn write_run(xml: &mut Writer<Cursor<Vec<u8>>>, run: &TextRun) -> Result<(), ExportError> {
    let size = run.half_points.to_string();

    emit(xml, Event::Start(BytesStart::new("w:r")))?;
    emit(xml, Event::Start(BytesStart::new("w:rPr")))?;
    emit(
        xml,
        Event::Empty(BytesStart::new("w:rFonts").with_attributes([
            ("w:ascii", run.font),
            ("w:hAnsi", run.font),
            ("w:cs", run.font),
            ("w:eastAsia", run.font),
        ])),
    )?;
    emit(
        xml,
        Event::Empty(BytesStart::new("w:sz").with_attributes([("w:val", size.as_str())])),
    )?;
    emit(
        xml,
        Event::Empty(BytesStart::new("w:szCs").with_attributes([("w:val", size.as_str())])),
    )?;
    emit(xml, Event::End(BytesEnd::new("w:rPr")))?;

    emit(
        xml,
        Event::Start(BytesStart::new("w:t").with_attributes([("xml:space", "preserve")])),
    )?;
    let text = xml_safe(&run.text);
    emit(xml, Event::Text(BytesText::from_escaped(escape(&*text))))?;
    emit(xml, Event::End(BytesEnd::new("w:t")))?;

    emit(xml, Event::End(BytesEnd::new("w:r")))
}

/// Replaces characters XML 1.0 cannot carry (C0 controls other than tab,
/// LF and CR, plus U+FFFE/U+FFFF) with U+FFFD.
fn xml_safe(text: &str) -> Cow<'_, str> {
    let illegal = |c: char| {
        matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
    };
    if text.contains(illegal) {
        Cow::Owned(
            text.chars()
                .map(|c| if illegal(c) { char::REPLACEMENT_CHARACTER } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

fn write_section_properties(xml: &mut Writer<Cursor<Vec<u8>>>) -> Result<(), ExportError> {
    emit(xml, Event::Start(BytesStart::new("w:sectPr")))?;
    emit(
        xml,
        Event::Empty(BytesStart::new("w:pgSz").with_attributes([
            ("w:w", PAGE_WIDTH_TWIPS),
            ("w:h", PAGE_HEIGHT_TWIPS),
        ])),
    )?;
    emit(
        xml,
        Event::Empty(BytesStart::new("w:pgMar").with_attributes([
            ("w:top", MARGIN_TWIPS),
            ("w:right", MARGIN_TWIPS),
            ("w:bottom", MARGIN_TWIPS),
            ("w:left", MARGIN_TWIPS),
            ("w:header", "708"),
            ("w:footer", "708"),
            ("w:gutter", "0"),
        ])),
    )?;
    emit(xml, Event::End(BytesEnd::new("w:sectPr")))
}

fn emit(xml: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<(), ExportError> {
    xml.write_event(event)
        .map_err(|e| ExportError::Docx(format!("document.xml: {e}")))
}
