//! Greedy line wrapping for the print-flow document.
//!
//! Every source line starts a new output line (empty ones included); within a
//! line, words are packed until the next one would cross `max_width_pt`.
//! Whitespace runs inside a line collapse to one space. A word wider than the
//! whole line is broken between characters.

use crate::export::font_metrics::FontMetricTable;
use crate::models::GeneratedText;

pub fn wrap_text(
    text: &GeneratedText,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        wrap_line(line, metrics, size_pt, max_width_pt, &mut out);
    }
    out
}

fn wrap_line(
    line: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
    out: &mut Vec<String>,
) {
    let space_w = metrics.space_pt(size_pt);
    let mut current = String::new();
    let mut current_w = 0.0_f32;

    for word in line.split_whitespace() {
        let word_w = metrics.measure_pt(word, size_pt);

        if word_w > max_width_pt {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let mut pieces = break_word(word, metrics, size_pt, max_width_pt);
            // The tail of a broken word may still share its line with what follows.
            if let Some(last) = pieces.pop() {
                out.extend(pieces);
                current_w = metrics.measure_pt(&last, size_pt);
                current = last;
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_w = word_w;
        } else if current_w + space_w + word_w > max_width_pt {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
            current_w = word_w;
        } else {
            current.push(' ');
            current.push_str(word);
            current_w += space_w + word_w;
        }
    }

    out.push(current);
}

/// Splits an over-long word into pieces that each fit the line.
/// Every piece holds at least one character, so this always terminates.
fn break_word(
    word: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width_pt: f32,
) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_w = 0.0_f32;

    for c in word.chars() {
        let c_w = f32::from(metrics.char_width(c)) * size_pt / 1000.0;
        if !piece.is_empty() && piece_w + c_w > max_width_pt {
            pieces.push(std::mem::take(&mut piece));
            piece_w = 0.0;
        }
        piece.push(c);
        piece_w += c_w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::font_metrics::{get_metrics, BaseFont};

    const WIDTH: f32 = 510.24;

    fn wrap(text: &str, width: f32) -> Vec<String> {
        wrap_text(
            &GeneratedText::new(text),
            get_metrics(BaseFont::Helvetica),
            11.0,
            width,
        )
    }

    #[test]
    fn test_short_lines_pass_through() {
        assert_eq!(
            wrap("Geachte heer,\n\nMet vriendelijke groet", WIDTH),
            vec!["Geachte heer,", "", "Met vriendelijke groet"]
        );
    }

    #[test]
    fn test_long_paragraph_wraps_within_width() {
        let paragraph = "Hierbij herinneren wij u aan de openstaande factuur met nummer 123. ".repeat(8);
        let metrics = get_metrics(BaseFont::Helvetica);
        let lines = wrap(&paragraph, WIDTH);

        assert!(lines.len() > 1);
        for line in &lines {
            assert!(metrics.measure_pt(line, 11.0) <= WIDTH + 0.01, "line too wide: {line}");
        }
        // No words lost or reordered.
        assert_eq!(
            lines.join(" ").split_whitespace().collect::<Vec<_>>(),
            paragraph.split_whitespace().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_overlong_word_is_broken_by_characters() {
        let word = "x".repeat(50);
        // x = 500 units → 5.5pt at 11pt; 55pt fits 10 characters.
        let lines = wrap(&word, 55.0);
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 10));
    }

    #[test]
    fn test_broken_word_tail_shares_line_with_next_word() {
        let lines = wrap(&format!("{} ok", "x".repeat(12)), 55.0);
        assert_eq!(lines, vec!["xxxxxxxxxx", "xx ok"]);
    }

    #[test]
    fn test_empty_text_yields_one_empty_line() {
        assert_eq!(wrap("", WIDTH), vec![String::new()]);
    }
}
