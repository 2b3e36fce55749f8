use crate::error::MaskError;
use crate::presets::preset;
use crate::token::{is_delimiter, MaskToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Token(MaskToken),
    Literal(char),
}

/// Parsed mask pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pattern: String,
    slots: Vec<Slot>,
    fill_blanks: bool,
}

impl Mask {
    /// Parse a preset name (`"phone"`, `"date"`, ...) or a literal pattern.
    pub fn parse(pattern: &str) -> Result<Self, MaskError> {
        let resolved = preset(pattern).unwrap_or(pattern);
        if resolved.is_empty() {
            return Err(MaskError::EmptyPattern);
        }
        let slots = resolved
            .chars()
            .map(|ch| match MaskToken::from_char(ch) {
                Some(token) => Slot::Token(token),
                None => Slot::Literal(ch),
            })
            .collect();
        Ok(Self {
            pattern: resolved.to_string(),
            slots,
            fill_blanks: true,
        })
    }

    /// Emit literals only when the input itself contains them.
    #[must_use]
    pub fn without_blank_fill(mut self) -> Self {
        self.fill_blanks = false;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn fills_blanks(&self) -> bool {
        self.fill_blanks
    }

    /// Longest display text the pattern can produce, in chars.
    pub fn max_length(&self) -> usize {
        self.slots.len()
    }

    /// Format `text` for display. Output stops at the first character a token
    /// rejects; trailing literals up to that point are kept.
    pub fn mask(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut chars = text.chars().peekable();
        let mut out = String::with_capacity(self.pattern.len());
        for slot in &self.slots {
            let next = chars.peek().copied();
            match *slot {
                Slot::Literal(literal) if next == Some(literal) => {
                    out.push(literal);
                    chars.next();
                }
                Slot::Literal(literal) => {
                    if self.fill_blanks {
                        out.push(literal);
                    }
                }
                Slot::Token(token) => match next {
                    Some(ch) if token.accepts(ch) => {
                        out.push(token.convert(ch));
                        chars.next();
                    }
                    _ => return out,
                },
            }
        }
        out
    }

    /// Strip every delimiter from `text`.
    pub fn unmask(&self, text: &str) -> String {
        text.chars().filter(|ch| !is_delimiter(*ch)).collect()
    }

    /// Map a caret in `typed` onto `display` so it stays after the same number
    /// of non-delimiter characters. Positions are char offsets.
    pub fn remap_caret(&self, typed: &str, caret: usize, display: &str) -> usize {
        let mut remaining = typed
            .chars()
            .take(caret)
            .filter(|ch| !is_delimiter(*ch))
            .count();
        let mut position = 0;
        for ch in display.chars() {
            if remaining == 0 {
                break;
            }
            if !is_delimiter(ch) {
                remaining -= 1;
            }
            position += 1;
        }
        position
    }
}
