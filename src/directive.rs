//! Line classification.
//!
//! A line is a global directive only when the whole trimmed line is
//! `KEYWORD:<digits>`. Anything else, including `TEMPO:` with no value or
//! `tempo:120`, is handed to the token scanner.

/// Directive keywords recognized at line level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Tempo,
    Length,
    Volume,
    Octave,
}

impl DirectiveKind {
    pub fn keyword(self) -> &'static str {
        match self {
            DirectiveKind::Tempo => "TEMPO",
            DirectiveKind::Length => "LENGTH",
            DirectiveKind::Volume => "VOLUME",
            DirectiveKind::Octave => "OCTAVE",
        }
    }

    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "TEMPO" => Some(DirectiveKind::Tempo),
            "LENGTH" => Some(DirectiveKind::Length),
            "VOLUME" => Some(DirectiveKind::Volume),
            "OCTAVE" => Some(DirectiveKind::Octave),
            _ => None,
        }
    }
}

/// The numeric part of a directive.
///
/// The digits always match, but the number may still be too large for `u64`.
/// That case is kept apart so the driver decides per keyword what it means
/// instead of treating the line as a run of event tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveValue {
    Value(u64),
    Overflow(String),
}

/// A classified source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Line<'a> {
    Blank,
    Directive(DirectiveKind, DirectiveValue),
    Events(&'a str),
}

/// Classify one line of comment-stripped track text.
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }

    if let Some((keyword, digits)) = line.split_once(':') {
        if let Some(kind) = DirectiveKind::from_keyword(keyword) {
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                let value = match digits.parse::<u64>() {
                    Ok(v) => DirectiveValue::Value(v),
                    Err(_) => DirectiveValue::Overflow(digits.to_string()),
                };
                return Line::Directive(kind, value);
            }
        }
    }

    Line::Events(line)
}
