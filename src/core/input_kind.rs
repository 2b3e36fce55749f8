//! Native input kinds.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    #[default]
    Text,
    Password,
    Email,
    Number,
    Search,
    Tel,
    Url,
    Color,
    File,
    Time,
    Date,
    DatetimeLocal,
    Week,
    Month,
}

impl InputKind {
    pub const ALL: [InputKind; 14] = [
        Self::Text,
        Self::Password,
        Self::Email,
        Self::Number,
        Self::Search,
        Self::Tel,
        Self::Url,
        Self::Color,
        Self::File,
        Self::Time,
        Self::Date,
        Self::DatetimeLocal,
        Self::Week,
        Self::Month,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Search => "search",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Color => "color",
            Self::File => "file",
            Self::Time => "time",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Kinds whose native widget shows chrome even with no value, so the
    /// label has to sit as if the field were dirty.
    pub fn renders_chrome_when_empty(self) -> bool {
        matches!(
            self,
            Self::Color
                | Self::File
                | Self::Time
                | Self::Date
                | Self::DatetimeLocal
                | Self::Week
                | Self::Month
        )
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| FieldError::UnknownInputKind(value.to_string()))
    }
}
