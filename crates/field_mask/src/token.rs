//! Mask tokens and the delimiter set.

/// Characters removed by `unmask`. Every literal in a preset is drawn from here.
pub const DELIMITERS: &str = "-!$%^&*()_+|~=`{}[]:\";'<>?,./\\ ";

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(ch)
}

/// A single pattern position that accepts user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskToken {
    /// `#`: ASCII digit.
    Digit,
    /// `A`: ASCII letter, stored upper-case.
    Upper,
    /// `a`: ASCII letter, stored lower-case.
    Lower,
    /// `N`: ASCII letter or digit, stored upper-case.
    AlnumUpper,
    /// `n`: ASCII letter or digit, stored lower-case.
    AlnumLower,
    /// `X`: anything that is not a delimiter.
    Any,
}

impl MaskToken {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Digit),
            'A' => Some(Self::Upper),
            'a' => Some(Self::Lower),
            'N' => Some(Self::AlnumUpper),
            'n' => Some(Self::AlnumLower),
            'X' => Some(Self::Any),
            _ => None,
        }
    }

    pub fn accepts(self, ch: char) -> bool {
        match self {
            Self::Digit => ch.is_ascii_digit(),
            Self::Upper | Self::Lower => ch.is_ascii_alphabetic(),
            Self::AlnumUpper | Self::AlnumLower => ch.is_ascii_alphanumeric(),
            Self::Any => !is_delimiter(ch),
        }
    }

    pub fn convert(self, ch: char) -> char {
        match self {
            Self::Upper | Self::AlnumUpper => ch.to_ascii_uppercase(),
            Self::Lower | Self::AlnumLower => ch.to_ascii_lowercase(),
            Self::Digit | Self::Any => ch,
        }
    }
}
