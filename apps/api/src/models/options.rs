//! User-selected options for a single generation request.
//!
//! Wire values are the product's Dutch option values; they are what the UI
//! sends and what ends up verbatim in the composed instruction.

use serde::{Deserialize, Serialize};

/// Maximum length of `GenerationOptions::input`, in characters.
pub const MAX_INPUT_CHARS: usize = 2000;
/// Maximum length of `GenerationOptions::response_instructions`, in characters.
pub const MAX_RESPONSE_INSTRUCTIONS_CHARS: usize = 500;

// ────────────────────────────────────────────────────────────────────────────
// Option enums
// ────────────────────────────────────────────────────────────────────────────

/// Document genre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "brief")]
    Letter,
    #[default]
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "platte tekst")]
    PlainText,
    #[serde(rename = "bericht voor whatsapp")]
    ChatMessage,
}

impl Format {
    pub const ALL: [Format; 4] = [
        Format::Letter,
        Format::Email,
        Format::PlainText,
        Format::ChatMessage,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Format::Letter => "brief",
            Format::Email => "email",
            Format::PlainText => "platte tekst",
            Format::ChatMessage => "bericht voor whatsapp",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Format::Letter => "Brief",
            Format::Email => "E-mail",
            Format::PlainText => "Platte Tekst",
            Format::ChatMessage => "WhatsApp",
        }
    }
}

/// Whether `input` is an instruction to act on or a received message to answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "actie")]
    Compose,
    #[serde(rename = "reactie")]
    Reply,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Compose, Mode::Reply];

    pub fn value(&self) -> &'static str {
        match self {
            Mode::Compose => "actie",
            Mode::Reply => "reactie",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Compose => "Actie (genereer o.b.v. opdracht)",
            Mode::Reply => "Reactie (antwoord op tekst)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    #[serde(rename = "Neutraal")]
    Neutral,
    #[serde(rename = "Officieel")]
    Formal,
    #[serde(rename = "Geïrriteerd")]
    Irritated,
    #[serde(rename = "Vriendelijk")]
    Friendly,
    #[serde(rename = "Informatief")]
    Informative,
    #[serde(rename = "Kritisch")]
    Critical,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Neutral,
        Tone::Formal,
        Tone::Irritated,
        Tone::Friendly,
        Tone::Informative,
        Tone::Critical,
    ];

    /// Tone values double as their labels.
    pub fn value(&self) -> &'static str {
        match self {
            Tone::Neutral => "Neutraal",
            Tone::Formal => "Officieel",
            Tone::Irritated => "Geïrriteerd",
            Tone::Friendly => "Vriendelijk",
            Tone::Informative => "Informatief",
            Tone::Critical => "Kritisch",
        }
    }
}

/// Symbolic marker the generated text may carry. An empty wire value means `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emoji {
    #[default]
    #[serde(rename = "geen", alias = "")]
    None,
    #[serde(rename = "😊")]
    Smile,
    #[serde(rename = "👍")]
    ThumbsUp,
    #[serde(rename = "⚠️")]
    Warning,
    #[serde(rename = "❌")]
    Cross,
    #[serde(rename = "📅")]
    Calendar,
    #[serde(rename = "✅")]
    Check,
    #[serde(rename = "❗")]
    Exclamation,
    #[serde(rename = "😞")]
    Disappointed,
    #[serde(rename = "🔥")]
    Fire,
}

impl Emoji {
    pub const ALL: [Emoji; 10] = [
        Emoji::None,
        Emoji::Smile,
        Emoji::ThumbsUp,
        Emoji::Warning,
        Emoji::Cross,
        Emoji::Calendar,
        Emoji::Check,
        Emoji::Exclamation,
        Emoji::Disappointed,
        Emoji::Fire,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Emoji::None => "geen",
            Emoji::Smile => "😊",
            Emoji::ThumbsUp => "👍",
            Emoji::Warning => "⚠️",
            Emoji::Cross => "❌",
            Emoji::Calendar => "📅",
            Emoji::Check => "✅",
            Emoji::Exclamation => "❗",
            Emoji::Disappointed => "😞",
            Emoji::Fire => "🔥",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Emoji::None => "Geen Emoji",
            Emoji::Smile => "😊 Vriendelijk",
            Emoji::ThumbsUp => "👍 Akkoord",
            Emoji::Warning => "⚠️ Waarschuwing",
            Emoji::Cross => "❌ Afwijzing",
            Emoji::Calendar => "📅 Datum",
            Emoji::Check => "✅ Voltooid",
            Emoji::Exclamation => "❗ Urgent",
            Emoji::Disappointed => "😞 Teleurgesteld",
            Emoji::Fire => "🔥 Top",
        }
    }
}

/// The three typefaces offered to the user. The wire value is the literal font name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Font {
    #[default]
    Arial,
    Calibri,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::Arial, Font::Calibri, Font::TimesNewRoman];

    /// Literal family name, as a word processor would look it up.
    pub fn name(&self) -> &'static str {
        match self {
            Font::Arial => "Arial",
            Font::Calibri => "Calibri",
            Font::TimesNewRoman => "Times New Roman",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[default]
    #[serde(rename = "11pt")]
    Pt11,
    #[serde(rename = "12pt")]
    Pt12,
}

impl FontSize {
    pub const ALL: [FontSize; 2] = [FontSize::Pt11, FontSize::Pt12];

    pub fn value(&self) -> &'static str {
        match self {
            FontSize::Pt11 => "11pt",
            FontSize::Pt12 => "12pt",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Pt11 => "11 pt",
            FontSize::Pt12 => "12 pt",
        }
    }

    pub fn points(&self) -> u8 {
        match self {
            FontSize::Pt11 => 11,
            FontSize::Pt12 => 12,
        }
    }

    /// Size in half-points, the unit word-processor documents store.
    pub fn half_points(&self) -> u32 {
        u32::from(self.points()) * 2
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Request value
// ────────────────────────────────────────────────────────────────────────────

/// Everything the user picked for one generation. Built fresh per request and
/// never mutated after it is handed to the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub format: Format,
    pub mode: Mode,
    pub tone: Tone,
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub emoji: Emoji,
    /// Only meaningful in reply mode.
    #[serde(default)]
    pub response_instructions: String,
    pub font: Font,
    pub font_size: FontSize,
}

/// The subset of options the export engine reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font: Font,
    pub font_size: FontSize,
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog (what the UI renders in its dropdowns)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct OptionEntry {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionCatalog {
    pub formats: Vec<OptionEntry>,
    pub modes: Vec<OptionEntry>,
    pub tones: Vec<OptionEntry>,
    pub emojis: Vec<OptionEntry>,
    pub fonts: Vec<OptionEntry>,
    pub font_sizes: Vec<OptionEntry>,
    pub defaults: GenerationOptions,
    pub max_input_chars: usize,
    pub max_response_instructions_chars: usize,
}

pub fn option_catalog() -> OptionCatalog {
    OptionCatalog {
        formats: Format::ALL
            .iter()
            .map(|f| OptionEntry {
                value: f.value(),
                label: f.label(),
            })
            .collect(),
        modes: Mode::ALL
            .iter()
            .map(|m| OptionEntry {
                value: m.value(),
                label: m.label(),
            })
            .collect(),
        tones: Tone::ALL
            .iter()
            .map(|t| OptionEntry {
                value: t.value(),
                label: t.value(),
            })
            .collect(),
        emojis: Emoji::ALL
            .iter()
            .map(|e| OptionEntry {
                value: e.value(),
                label: e.label(),
            })
            .collect(),
        fonts: Font::ALL
            .iter()
            .map(|f| OptionEntry {
                value: f.name(),
                label: f.name(),
            })
            .collect(),
        font_sizes: FontSize::ALL
            .iter()
            .map(|s| OptionEntry {
                value: s.value(),
                label: s.label(),
            })
            .collect(),
        defaults: GenerationOptions::default(),
        max_input_chars: MAX_INPUT_CHARS,
        max_response_instructions_chars: MAX_RESPONSE_INSTRUCTIONS_CHARS,
    }
}
