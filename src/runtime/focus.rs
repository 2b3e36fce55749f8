//! In-memory active-element tracking.

use crate::core::component::FocusQuery;
use crate::core::element::ElementRef;

/// Tracks the single active element for hosts without a native focus model
/// of their own (terminal UIs, tests).
#[derive(Debug, Default)]
pub struct ActiveElementTracker {
    active: Option<ElementRef>,
    requests: usize,
}

impl ActiveElementTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<ElementRef> {
        self.active
    }

    /// Focus requests received so far, including ones for the already active
    /// element.
    pub fn request_count(&self) -> usize {
        self.requests
    }

    /// Make `element` active without going through a field, e.g. when the
    /// user tabs to a sibling control.
    pub fn activate(&mut self, element: ElementRef) {
        self.active = Some(element);
    }

    /// Drop focus from `element` if it is the active one.
    pub fn release(&mut self, element: ElementRef) {
        if self.active == Some(element) {
            self.active = None;
        }
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

impl FocusQuery for ActiveElementTracker {
    fn is_active_element(&self, element: ElementRef) -> bool {
        self.active == Some(element)
    }

    fn request_focus(&mut self, element: ElementRef) {
        self.requests += 1;
        if self.active == Some(element) {
            return;
        }
        tracing::trace!(element = element.raw(), "focus moved");
        self.active = Some(element);
    }
}
