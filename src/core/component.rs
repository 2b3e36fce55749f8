//! Capability traits between the field controller and its host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::element::ElementRef;
use crate::core::native_event::PointerTarget;

/// Access to the host's notion of "the active element".
pub trait FocusQuery {
    fn is_active_element(&self, element: ElementRef) -> bool;

    /// Ask the host to move input focus to `element`. The host answers later
    /// with a native focus event.
    fn request_focus(&mut self, element: ElementRef);
}

/// Shared focus capability; one per host, many fields.
pub type FocusHandle = Rc<RefCell<dyn FocusQuery>>;

/// Focusable behavior for controllers that track focus.
pub trait Focusable {
    fn set_focused(&mut self, focused: bool);
    fn is_focused(&self) -> bool;
}

/// Whether the host should keep processing a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFlow {
    Continue,
    /// Suppress the default action and stop propagation.
    Stop,
}

/// Ordered parts of the input slot, consumed by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPart {
    PrependInner,
    Label,
    Prefix,
    Input,
    Suffix,
    Clear,
    Append,
}

/// Input element behavior shared by the base controller and its wrappers.
pub trait InputElementController: Focusable {
    fn on_mouse_down(&mut self, target: PointerTarget) -> EventFlow;

    fn on_mouse_up(&mut self, target: PointerTarget) -> EventFlow;

    fn on_click(&mut self) {}

    fn input_slot(&self) -> Vec<SlotPart>;
}
