//! Base input controller shared by field widgets.

use crate::config::FieldOptions;
use crate::core::component::{EventFlow, Focusable, InputElementController, SlotPart};
use crate::core::native_event::PointerTarget;

/// Focus, pointer and enablement state common to every input control.
///
/// Field widgets own one and delegate to it, overriding only the handlers
/// they specialize.
#[derive(Debug, Default)]
pub struct BaseInput {
    focused: bool,
    has_mouse_down: bool,
    disabled: bool,
    readonly: bool,
}

impl BaseInput {
    pub fn new(options: &FieldOptions) -> Self {
        Self {
            focused: false,
            has_mouse_down: false,
            disabled: options.disabled,
            readonly: options.readonly,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.readonly
    }

    pub fn has_mouse_down(&self) -> bool {
        self.has_mouse_down
    }
}

impl Focusable for BaseInput {
    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }
}

impl InputElementController for BaseInput {
    fn on_mouse_down(&mut self, _target: PointerTarget) -> EventFlow {
        self.has_mouse_down = true;
        EventFlow::Continue
    }

    fn on_mouse_up(&mut self, _target: PointerTarget) -> EventFlow {
        self.has_mouse_down = false;
        EventFlow::Continue
    }

    fn input_slot(&self) -> Vec<SlotPart> {
        vec![SlotPart::Input]
    }
}
