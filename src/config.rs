//! Field options and environment configuration.

use std::env;

use field_mask::Mask;
use serde::Deserialize;

use crate::core::input_kind::InputKind;
use crate::error::FieldError;

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub debug: bool,
    pub log_filter: Option<String>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag("TEXT_FIELD_DEBUG"),
            log_filter: env_string_opt("TEXT_FIELD_LOG"),
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// Text direction of the surrounding layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

/// Character counter shown under the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "CounterSpec")]
pub enum CounterLimit {
    #[default]
    Off,
    /// Counter on, limit taken from `max_length`.
    MaxLength,
    Limit(usize),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CounterSpec {
    Flag(bool),
    Limit(usize),
    Text(String),
}

impl TryFrom<CounterSpec> for CounterLimit {
    type Error = FieldError;

    fn try_from(spec: CounterSpec) -> Result<Self, Self::Error> {
        match spec {
            CounterSpec::Flag(false) => Ok(Self::Off),
            CounterSpec::Flag(true) => Ok(Self::MaxLength),
            CounterSpec::Limit(limit) => Ok(Self::Limit(limit)),
            CounterSpec::Text(text) => text.parse::<CounterLimit>(),
        }
    }
}

impl std::str::FromStr for CounterLimit {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "true" => Ok(Self::MaxLength),
            "false" | "" => Ok(Self::Off),
            other => other
                .parse::<usize>()
                .map(Self::Limit)
                .map_err(|_| FieldError::InvalidCounter(value.to_string())),
        }
    }
}

/// Host-supplied configuration of a single text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FieldOptions {
    /// Preset name or literal mask pattern.
    pub mask: Option<String>,
    pub dont_fill_mask_blanks: bool,
    #[serde(rename = "type")]
    pub kind: InputKind,
    pub clearable: bool,
    pub counter: CounterLimit,
    pub max_length: Option<usize>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub prepend_inner_icon: Option<String>,
    pub append_icon: Option<String>,
    pub append_outer_icon: Option<String>,
    pub autofocus: bool,
    pub disabled: bool,
    pub readonly: bool,
    pub browser_autocomplete: Option<String>,
    #[serde(rename = "box")]
    pub boxed: bool,
    pub solo: bool,
    pub solo_inverted: bool,
    pub outline: bool,
    /// Legacy alias for `outline`.
    pub textarea: bool,
    pub full_width: bool,
    pub single_line: bool,
    pub reverse: bool,
    pub direction: TextDirection,
}

impl FieldOptions {
    pub fn from_json(json: &str) -> Result<Self, FieldError> {
        serde_json::from_str(json).map_err(FieldError::Options)
    }

    /// Parse the configured mask, if any.
    pub fn build_mask(&self) -> Result<Option<Mask>, FieldError> {
        let Some(pattern) = self.mask.as_deref() else {
            return Ok(None);
        };
        let mask = Mask::parse(pattern).map_err(|source| FieldError::mask(pattern, source))?;
        Ok(Some(if self.dont_fill_mask_blanks {
            mask.without_blank_fill()
        } else {
            mask
        }))
    }
}
