//! Request Composer: options in, instruction string out.
//!
//! Pure and total: no I/O, no state, no failure cases. Keeping this separate
//! from the network call means the prompt can be tested without a client.

use crate::generation::prompts::{INSTRUCTION_TEMPLATE, RESPONSE_INSTRUCTIONS_PREFIX};
use crate::models::GenerationOptions;

/// Fills the instruction template with the option values.
///
/// The reply-guidance line is present iff `response_instructions` is non-empty.
pub fn compose(options: &GenerationOptions) -> String {
    let instructions_block = if options.response_instructions.is_empty() {
        String::new()
    } else {
        format!(
            "{RESPONSE_INSTRUCTIONS_PREFIX}{}\n",
            options.response_instructions
        )
    };

    fill_template(
        INSTRUCTION_TEMPLATE,
        &[
            ("FORMAAT", options.format.value()),
            ("MODUS", options.mode.value()),
            ("INVOER", &options.input),
            ("TOON", options.tone.value()),
            ("EMOJI", options.emoji.value()),
            ("LETTERTYPE", options.font.name()),
            ("TEKENGROOTTE", options.font_size.value()),
            ("INSTRUCTIES_BLOK", &instructions_block),
        ],
    )
}

/// Single-pass `{{NAME}}` substitution.
///
/// The template is scanned once and substituted values are copied without
/// being re-scanned, so placeholder-like text inside user input stays literal.
/// Tokens with no matching value are kept as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(end) = after_open.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after_open[..end];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(name);
                out.push_str("}}");
            }
        }
        rest = &after_open[end + 2..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::options::{Emoji, Font, FontSize, Format, Mode, Tone};

    fn invoice_reminder() -> GenerationOptions {
        GenerationOptions {
            format: Format::Email,
            mode: Mode::Compose,
            tone: Tone::Formal,
            input: "Remind about invoice 123".to_string(),
            emoji: Emoji::None,
            response_instructions: String::new(),
            font: Font::Arial,
            font_size: FontSize::Pt11,
        }
    }

    fn field_line<'a>(instruction: &'a str, label: &str) -> Option<&'a str> {
        instruction
            .lines()
            .find_map(|line| line.strip_prefix(label))
    }

    #[test]
    fn test_compose_is_deterministic() {
        let options = invoice_reminder();
        assert_eq!(compose(&options), compose(&options.clone()));
    }

    #[test]
    fn test_compose_invoice_reminder_scenario() {
        let instruction = compose(&invoice_reminder());
        assert!(instruction.contains("Remind about invoice 123"));
        assert_eq!(field_line(&instruction, "Toon: "), Some("Officieel"));
        assert!(!instruction.contains(RESPONSE_INSTRUCTIONS_PREFIX));
    }

    #[test]
    fn test_compose_fills_every_choice_line() {
        let options = GenerationOptions {
            format: Format::ChatMessage,
            mode: Mode::Reply,
            tone: Tone::Friendly,
            input: "Kom je morgen ook?".to_string(),
            emoji: Emoji::ThumbsUp,
            response_instructions: String::new(),
            font: Font::TimesNewRoman,
            font_size: FontSize::Pt12,
        };
        let instruction = compose(&options);

        assert_eq!(
            field_line(&instruction, "Formaat: "),
            Some("bericht voor whatsapp")
        );
        assert_eq!(field_line(&instruction, "Modus: "), Some("reactie"));
        assert_eq!(
            field_line(&instruction, "Invoer: "),
            Some("Kom je morgen ook?")
        );
        assert_eq!(field_line(&instruction, "Toon: "), Some("Vriendelijk"));
        assert_eq!(field_line(&instruction, "Emoji: "), Some("👍"));
        assert_eq!(
            field_line(&instruction, "Lettertype: "),
            Some("Times New Roman")
        );
        assert_eq!(field_line(&instruction, "Tekengrootte: "), Some("12pt"));
        assert!(!instruction.contains("{{"));
    }

    #[test]
    fn test_choice_order_is_independent_of_mode() {
        let labels = [
            "Formaat: ",
            "Modus: ",
            "Invoer: ",
            "Toon: ",
            "Emoji: ",
            "Lettertype: ",
            "Tekengrootte: ",
        ];
        for mode in Mode::ALL {
            let options = GenerationOptions {
                mode,
                input: "x".to_string(),
                ..GenerationOptions::default()
            };
            let instruction = compose(&options);
            let positions: Vec<usize> = labels
                .iter()
                .map(|label| instruction.find(&format!("\n{label}")).unwrap())
                .collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "choice lines out of order for {mode:?}"
            );
        }
    }

    #[test]
    fn test_reply_guidance_line_present_when_non_empty() {
        let options = GenerationOptions {
            mode: Mode::Reply,
            input: "Kunnen we dinsdag afspreken?".to_string(),
            response_instructions: "Confirm Tuesday 10:00 meeting".to_string(),
            ..GenerationOptions::default()
        };
        let instruction = compose(&options);
        assert!(instruction
            .lines()
            .any(|line| line == "Instructies voor antwoord: Confirm Tuesday 10:00 meeting"));
    }

    #[test]
    fn test_reply_guidance_line_absent_when_empty() {
        let with_guidance = GenerationOptions {
            mode: Mode::Reply,
            input: "Kunnen we dinsdag afspreken?".to_string(),
            response_instructions: "Bevestig".to_string(),
            ..GenerationOptions::default()
        };
        let without_guidance = GenerationOptions {
            response_instructions: String::new(),
            ..with_guidance.clone()
        };

        let instruction = compose(&without_guidance);
        assert!(!instruction.contains("Instructies voor antwoord:"));
        // Exactly one line shorter: the slot leaves no blank placeholder behind.
        assert_eq!(
            compose(&with_guidance).lines().count(),
            instruction.lines().count() + 1
        );
    }

    #[test]
    fn test_placeholder_text_in_input_is_not_substituted() {
        let options = GenerationOptions {
            input: "Gebruik {{TOON}} en {{ONBEKEND}} letterlijk".to_string(),
            ..GenerationOptions::default()
        };
        let instruction = compose(&options);
        assert_eq!(
            field_line(&instruction, "Invoer: "),
            Some("Gebruik {{TOON}} en {{ONBEKEND}} letterlijk")
        );
    }

    #[test]
    fn test_multiline_input_is_inserted_verbatim() {
        let options = GenerationOptions {
            input: "Beste Jan,\n\nDe factuur is te laat.\n".to_string(),
            ..GenerationOptions::default()
        };
        let instruction = compose(&options);
        assert!(instruction.contains("Invoer: Beste Jan,\n\nDe factuur is te laat.\n\nToon: "));
    }

    #[test]
    fn test_fill_template_keeps_unknown_and_unterminated_tokens() {
        assert_eq!(
            fill_template("a {{X}} b {{Y}} c {{Z", &[("X", "1")]),
            "a 1 b {{Y}} c {{Z"
        );
    }
}
