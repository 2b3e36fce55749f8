//! Derived presentation state.
//!
//! Everything here is a pure function of the field's options and value state.
//! The rendering layer reads a [`Presentation`] snapshot and never writes back.

use unicode_segmentation::UnicodeSegmentation;

use crate::config::{CounterLimit, FieldOptions, TextDirection};

/// Horizontal shift of an un-elevated label when a prefix is shown.
pub const PREFIX_LABEL_OFFSET: u16 = 16;

/// Label anchoring. `None` means the edge is left to layout (auto).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelOffset {
    pub left: Option<u16>,
    pub right: Option<u16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub value: usize,
    pub max: Option<usize>,
}

/// Inputs for a presentation snapshot.
#[derive(Debug, Clone, Copy)]
pub struct PresentationInput<'a> {
    pub options: &'a FieldOptions,
    pub raw: Option<&'a str>,
    pub bad_input: bool,
    pub focused: bool,
    pub mask_length: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub is_dirty: bool,
    pub is_label_active: bool,
    pub is_solo: bool,
    pub is_single_line: bool,
    pub has_outline: bool,
    pub is_enclosed: bool,
    pub show_label: bool,
    pub label_is_elevated: bool,
    pub label_focused: bool,
    pub label_offset: LabelOffset,
    pub has_color: bool,
    pub show_clear_icon: bool,
    pub counter: Option<CounterState>,
    pub max_length: Option<usize>,
}

fn present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

pub fn is_dirty(raw: Option<&str>, bad_input: bool) -> bool {
    present(raw) || bad_input
}

pub fn is_label_active(options: &FieldOptions, dirty: bool) -> bool {
    dirty || options.kind.renders_chrome_when_empty()
}

pub fn is_solo(options: &FieldOptions) -> bool {
    options.solo || options.solo_inverted
}

pub fn is_single_line(options: &FieldOptions) -> bool {
    is_solo(options) || options.single_line
}

pub fn has_outline(options: &FieldOptions) -> bool {
    options.outline || options.textarea
}

pub fn is_enclosed(options: &FieldOptions) -> bool {
    options.boxed || is_solo(options) || has_outline(options) || options.full_width
}

pub fn show_label(options: &FieldOptions, label_active: bool) -> bool {
    present(options.label.as_deref())
        && (!is_single_line(options) || (!label_active && !present(options.placeholder.as_deref())))
}

pub fn label_is_elevated(options: &FieldOptions, focused: bool, label_active: bool) -> bool {
    !is_single_line(options) && (focused || label_active || present(options.placeholder.as_deref()))
}

pub fn label_offset(options: &FieldOptions, elevated: bool) -> LabelOffset {
    let offset = if present(options.prefix.as_deref()) && !elevated {
        PREFIX_LABEL_OFFSET
    } else {
        0
    };
    let rtl = options.direction == TextDirection::Rtl;
    if rtl != options.reverse {
        LabelOffset {
            left: None,
            right: Some(offset),
        }
    } else {
        LabelOffset {
            left: Some(offset),
            right: None,
        }
    }
}

pub fn counter(options: &FieldOptions, raw: Option<&str>) -> Option<CounterState> {
    let max = match options.counter {
        CounterLimit::Off => return None,
        CounterLimit::MaxLength => options.max_length,
        CounterLimit::Limit(limit) => Some(limit),
    };
    let value = raw.map_or(0, |raw| raw.graphemes(true).count());
    Some(CounterState { value, max })
}

impl Presentation {
    pub fn derive(input: &PresentationInput<'_>) -> Self {
        let options = input.options;
        let dirty = is_dirty(input.raw, input.bad_input);
        let label_active = is_label_active(options, dirty);
        let elevated = label_is_elevated(options, input.focused, label_active);
        let single_line = is_single_line(options);

        Self {
            is_dirty: dirty,
            is_label_active: label_active,
            is_solo: is_solo(options),
            is_single_line: single_line,
            has_outline: has_outline(options),
            is_enclosed: is_enclosed(options),
            show_label: show_label(options, label_active),
            label_is_elevated: elevated,
            label_focused: !single_line && input.focused,
            label_offset: label_offset(options, elevated),
            has_color: input.focused,
            show_clear_icon: options.clearable && dirty,
            counter: counter(options, input.raw),
            max_length: input.mask_length.or(options.max_length),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        counter, is_dirty, label_offset, CounterState, LabelOffset, Presentation,
        PresentationInput, PREFIX_LABEL_OFFSET,
    };
    use crate::config::{CounterLimit, FieldOptions, TextDirection};
    use crate::core::input_kind::InputKind;

    fn derive(options: &FieldOptions, raw: Option<&str>, bad_input: bool, focused: bool) -> Presentation {
        Presentation::derive(&PresentationInput {
            options,
            raw,
            bad_input,
            focused,
            mask_length: None,
        })
    }

    #[test]
    fn dirty_needs_text_or_bad_input() {
        assert!(!is_dirty(None, false));
        assert!(!is_dirty(Some(""), false));
        assert!(is_dirty(Some("a"), false));
        assert!(is_dirty(None, true));
    }

    #[test]
    fn date_kind_activates_label_without_value() {
        let options = FieldOptions {
            kind: InputKind::Date,
            ..FieldOptions::default()
        };
        let clean = derive(&options, None, false, false);
        assert!(!clean.is_dirty);
        assert!(clean.is_label_active);

        let bad = derive(&options, None, true, false);
        assert!(bad.is_dirty);
    }

    #[test]
    fn variants_drive_enclosed_and_single_line() {
        let solo = FieldOptions {
            solo_inverted: true,
            ..FieldOptions::default()
        };
        let p = derive(&solo, None, false, false);
        assert!(p.is_solo && p.is_single_line && p.is_enclosed);

        let legacy = FieldOptions {
            textarea: true,
            ..FieldOptions::default()
        };
        let p = derive(&legacy, None, false, false);
        assert!(p.has_outline && p.is_enclosed && !p.is_single_line);

        let plain = derive(&FieldOptions::default(), None, false, false);
        assert!(!plain.is_enclosed);
    }

    #[test]
    fn single_line_hides_label_once_active_or_placeholder() {
        let mut options = FieldOptions {
            label: Some("Name".to_string()),
            single_line: true,
            ..FieldOptions::default()
        };
        assert!(derive(&options, None, false, false).show_label);
        assert!(!derive(&options, Some("x"), false, false).show_label);
        options.placeholder = Some("Jane".to_string());
        assert!(!derive(&options, None, false, false).show_label);

        let unlabeled = FieldOptions::default();
        assert!(!derive(&unlabeled, None, false, false).show_label);
    }

    #[test]
    fn label_elevates_on_focus_value_or_placeholder() {
        let mut options = FieldOptions {
            label: Some("Name".to_string()),
            ..FieldOptions::default()
        };
        assert!(!derive(&options, None, false, false).label_is_elevated);
        assert!(derive(&options, None, false, true).label_is_elevated);
        assert!(derive(&options, Some("x"), false, false).label_is_elevated);
        options.placeholder = Some("hint".to_string());
        assert!(derive(&options, None, false, false).label_is_elevated);
        options.solo = true;
        assert!(!derive(&options, Some("x"), false, true).label_is_elevated);
    }

    #[test]
    fn label_offset_covers_direction_and_reverse() {
        let mut options = FieldOptions {
            prefix: Some("$".to_string()),
            ..FieldOptions::default()
        };
        let left = LabelOffset {
            left: Some(PREFIX_LABEL_OFFSET),
            right: None,
        };
        let right = LabelOffset {
            left: None,
            right: Some(PREFIX_LABEL_OFFSET),
        };

        assert_eq!(label_offset(&options, false), left);
        options.reverse = true;
        assert_eq!(label_offset(&options, false), right);
        options.direction = TextDirection::Rtl;
        assert_eq!(label_offset(&options, false), left);
        options.reverse = false;
        assert_eq!(label_offset(&options, false), right);

        assert_eq!(
            label_offset(&options, true),
            LabelOffset {
                left: None,
                right: Some(0)
            }
        );
    }

    #[test]
    fn counter_counts_graphemes() {
        let mut options = FieldOptions {
            counter: CounterLimit::Limit(5),
            ..FieldOptions::default()
        };
        assert_eq!(
            counter(&options, Some("e\u{301}ab")),
            Some(CounterState { value: 3, max: Some(5) })
        );
        options.counter = CounterLimit::MaxLength;
        options.max_length = Some(8);
        assert_eq!(counter(&options, None), Some(CounterState { value: 0, max: Some(8) }));
        options.counter = CounterLimit::Off;
        assert_eq!(counter(&options, Some("abc")), None);
    }

    #[test]
    fn clear_icon_follows_dirty_state() {
        let options = FieldOptions {
            clearable: true,
            ..FieldOptions::default()
        };
        assert!(!derive(&options, None, false, false).show_clear_icon);
        assert!(derive(&options, Some("x"), false, false).show_clear_icon);
    }

    #[test]
    fn mask_length_wins_over_configured_max_length() {
        let options = FieldOptions {
            max_length: Some(40),
            ..FieldOptions::default()
        };
        let masked = Presentation::derive(&PresentationInput {
            options: &options,
            raw: None,
            bad_input: false,
            focused: false,
            mask_length: Some(14),
        });
        assert_eq!(masked.max_length, Some(14));
        assert_eq!(derive(&options, None, false, false).max_length, Some(40));
    }
}
