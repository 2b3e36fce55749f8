//! Single owner of the canonical (unmasked) value.

use crate::core::mask::{MaskAdapter, NoMask};

/// Result of reconciling a value pushed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalSync {
    /// RawValue was set; the host already holds the canonical value.
    Applied,
    /// Normalization altered the pushed value. Once the current update cycle
    /// settles the native text must become `masked` and the host must be
    /// told the canonical value.
    Resync { masked: String },
}

/// Result of applying an edit made through the native input. Every edit owes
/// the host one `input` notification, whether or not RawValue moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalSync {
    /// RawValue differs from its value before the edit.
    pub changed: bool,
    /// Masked fields rewrite the native text and caret on the next tick.
    pub restore: Option<CaretRestore>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaretRestore {
    pub display: String,
    pub caret: usize,
}

pub struct ValueSynchronizer {
    raw: Option<String>,
    mask: Box<dyn MaskAdapter>,
}

impl Default for ValueSynchronizer {
    fn default() -> Self {
        Self::new(Box::new(NoMask))
    }
}

impl ValueSynchronizer {
    pub fn new(mask: Box<dyn MaskAdapter>) -> Self {
        Self { raw: None, mask }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    pub fn mask_length(&self) -> Option<usize> {
        self.mask.max_length()
    }

    /// What the native input should show for the current RawValue.
    pub fn display_text(&self) -> String {
        match self.raw.as_deref() {
            Some(raw) if self.mask.is_active() => self.mask.mask(raw),
            Some(raw) => raw.to_string(),
            None => String::new(),
        }
    }

    /// Initial value supplied at construction. Normalized, never echoed.
    pub fn seed(&mut self, value: Option<&str>) {
        self.raw = match value {
            Some(value) if self.mask.is_active() => Some(self.normalize_external(value).1),
            other => other.map(str::to_string),
        };
    }

    /// Reconcile a value pushed by the host.
    ///
    /// `internal_change` marks the push as the host echoing a value this field
    /// produced; such values are taken verbatim.
    pub fn set_from_external(&mut self, value: Option<&str>, internal_change: bool) -> ExternalSync {
        if !self.mask.is_active() || internal_change {
            self.raw = value.map(str::to_string);
            return ExternalSync::Applied;
        }

        let Some(value) = value else {
            self.raw = None;
            return ExternalSync::Applied;
        };

        let (masked, raw) = self.normalize_external(value);
        let drifted = raw != value;
        self.raw = Some(raw);
        if drifted {
            ExternalSync::Resync { masked }
        } else {
            ExternalSync::Applied
        }
    }

    /// Apply text typed into the native input. `caret` is in chars.
    pub fn set_from_internal(&mut self, candidate: Option<&str>, caret: Option<usize>) -> InternalSync {
        let previous = self.raw.take();

        if !self.mask.is_active() {
            self.raw = candidate.map(str::to_string);
            return InternalSync {
                changed: previous != self.raw,
                restore: None,
            };
        }

        let restore = match candidate {
            None => {
                self.raw = None;
                CaretRestore {
                    display: String::new(),
                    caret: 0,
                }
            }
            Some(candidate) => {
                let raw = self.mask.unmask(&self.mask.mask(&self.mask.unmask(candidate)));
                let display = self.mask.mask(&raw);
                let caret = match caret {
                    Some(caret) => self.mask.remap_caret(candidate, caret, &display),
                    None => display.chars().count(),
                };
                // Typing only rejected characters into an empty field leaves it empty.
                self.raw = if raw.is_empty() && previous.is_none() {
                    None
                } else {
                    Some(raw)
                };
                CaretRestore { display, caret }
            }
        };

        InternalSync {
            changed: previous != self.raw,
            restore: Some(restore),
        }
    }

    fn normalize_external(&self, value: &str) -> (String, String) {
        let masked = self.mask.mask(&self.mask.unmask(value));
        let raw = self.mask.unmask(&masked);
        (masked, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::{CaretRestore, ExternalSync, ValueSynchronizer};
    use field_mask::Mask;

    fn phone() -> ValueSynchronizer {
        ValueSynchronizer::new(Box::new(Mask::parse("(###) ###-####").unwrap()))
    }

    #[test]
    fn unmasked_external_is_taken_verbatim() {
        let mut sync = ValueSynchronizer::default();
        assert_eq!(sync.set_from_external(Some("a-b"), false), ExternalSync::Applied);
        assert_eq!(sync.raw(), Some("a-b"));
        assert_eq!(sync.display_text(), "a-b");
    }

    #[test]
    fn canonical_external_value_needs_no_resync() {
        let mut sync = phone();
        assert_eq!(sync.set_from_external(Some("5551234567"), false), ExternalSync::Applied);
        assert_eq!(sync.raw(), Some("5551234567"));
        assert_eq!(sync.display_text(), "(555) 123-4567");
    }

    #[test]
    fn formatted_external_value_is_resynced() {
        let mut sync = phone();
        assert_eq!(
            sync.set_from_external(Some("(555) 123-4567"), false),
            ExternalSync::Resync {
                masked: "(555) 123-4567".to_string()
            }
        );
        assert_eq!(sync.raw(), Some("5551234567"));
    }

    #[test]
    fn null_and_empty_external_values_round_trip_quietly() {
        let mut sync = phone();
        assert_eq!(sync.set_from_external(None, false), ExternalSync::Applied);
        assert_eq!(sync.raw(), None);
        assert_eq!(sync.set_from_external(Some(""), false), ExternalSync::Applied);
        assert_eq!(sync.raw(), Some(""));
        assert_eq!(sync.display_text(), "");
    }

    #[test]
    fn echoed_external_value_skips_mask() {
        let mut sync = phone();
        assert_eq!(sync.set_from_external(Some("555-12"), true), ExternalSync::Applied);
        assert_eq!(sync.raw(), Some("555-12"));
    }

    #[test]
    fn unmasked_internal_is_taken_verbatim() {
        let mut sync = ValueSynchronizer::default();
        sync.seed(Some("abc"));
        let outcome = sync.set_from_internal(Some("abc"), None);
        assert!(!outcome.changed);
        assert_eq!(outcome.restore, None);
    }

    #[test]
    fn masked_internal_normalizes_and_remaps_caret() {
        let mut sync = phone();
        let outcome = sync.set_from_internal(Some("5551"), Some(4));
        assert!(outcome.changed);
        assert_eq!(sync.raw(), Some("5551"));
        assert_eq!(
            outcome.restore,
            Some(CaretRestore {
                display: "(555) 1".to_string(),
                caret: 7,
            })
        );
    }

    #[test]
    fn masked_internal_rejected_character_keeps_value() {
        let mut sync = phone();
        sync.seed(Some("555"));
        let outcome = sync.set_from_internal(Some("(555) x"), Some(7));
        assert!(!outcome.changed);
        assert_eq!(sync.raw(), Some("555"));
        assert_eq!(outcome.restore.unwrap().display, "(555) ");
    }

    #[test]
    fn masked_clear_sets_null() {
        let mut sync = phone();
        sync.seed(Some("555"));
        let outcome = sync.set_from_internal(None, None);
        assert!(outcome.changed);
        assert_eq!(sync.raw(), None);
    }

    #[test]
    fn seed_normalizes_without_echo() {
        let mut sync = phone();
        sync.seed(Some("(555) 1"));
        assert_eq!(sync.raw(), Some("5551"));
    }
}
