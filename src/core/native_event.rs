//! Events delivered by the native input element.

/// Native event delivered to a field.
///
/// Notes:
/// - `Input` carries the whole visible text of the native element, not a delta.
/// - `KeyDown` carries a normalized key id (`"enter"`, `"escape"`, `"a"`, ...)
///   and is forwarded to the host unchanged after the field has looked at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeEvent {
    Focus,
    Blur,
    Input(InputPayload),
    KeyDown(KeyPress),
    MouseDown(PointerTarget),
    MouseUp(PointerTarget),
    Click,
}

/// State of the native input after the user edited it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPayload {
    pub value: String,
    /// The native element could not parse its own content (partial date, ...).
    pub bad_input: bool,
    /// Caret position in chars, if the element reports one.
    pub caret: Option<usize>,
}

impl InputPayload {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            bad_input: false,
            caret: None,
        }
    }

    #[must_use]
    pub fn with_caret(mut self, caret: usize) -> Self {
        self.caret = Some(caret);
        self
    }

    #[must_use]
    pub fn with_bad_input(mut self, bad_input: bool) -> Self {
        self.bad_input = bad_input;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key_id: String,
    pub raw: String,
}

impl KeyPress {
    pub fn new(key_id: impl Into<String>) -> Self {
        let key_id = key_id.into();
        Self {
            raw: key_id.clone(),
            key_id,
        }
    }

    #[must_use]
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = raw.into();
        self
    }

    pub fn is_confirm(&self) -> bool {
        self.key_id == "enter"
    }
}

/// Where a pointer event landed within the control's hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The native input element itself.
    Input,
    /// Anywhere else inside the control (label, affixes, icons, padding).
    Control,
}
