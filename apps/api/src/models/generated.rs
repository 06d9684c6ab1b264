use serde::{Deserialize, Serialize};

/// Text returned by the generation service, exactly as received.
///
/// Newline-delimited paragraphs. Never trimmed or reflowed here: the export
/// engine owns all formatting decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedText(String);

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Source lines split on `\n`, with one trailing `\r` removed from each.
    ///
    /// Every line is yielded, empty ones included, so `"a\n\nb"` gives three.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
    }
}

impl From<String> for GeneratedText {
    fn from(text: String) -> Self {
        Self(text)
    }
}
