#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use text_field::{
    ActiveElementTracker, ElementRef, FieldOptions, FocusHandle, InputPayload, NativeEvent,
    Notification, TextField,
};

pub const INPUT: ElementRef = ElementRef::from_raw(1);
pub const SIBLING: ElementRef = ElementRef::from_raw(2);

pub struct Harness {
    pub field: TextField,
    pub tracker: Rc<RefCell<ActiveElementTracker>>,
}

impl Harness {
    pub fn new(options: FieldOptions, value: Option<&str>) -> Self {
        let tracker = Rc::new(RefCell::new(ActiveElementTracker::new()));
        let handle: FocusHandle = tracker.clone();
        let mut field = TextField::new(options, handle)
            .expect("valid options")
            .with_value(value);
        field.mount(INPUT);
        Self { field, tracker }
    }

    /// Programmatic focus followed by the host's native focus event.
    pub fn focus(&mut self) {
        self.field.focus();
        if self.tracker.borrow().active() == Some(INPUT) {
            self.field.handle_event(&NativeEvent::Focus);
        }
    }

    /// The user moves focus to another element.
    pub fn blur_to_sibling(&mut self) {
        self.tracker.borrow_mut().activate(SIBLING);
        self.field.handle_event(&NativeEvent::Blur);
    }

    pub fn type_text(&mut self, text: &str) {
        let caret = text.chars().count();
        self.field
            .handle_event(&NativeEvent::Input(InputPayload::new(text).with_caret(caret)));
    }

    /// Run deferred work the way a host does at the end of its update cycle.
    pub fn tick(&mut self) -> bool {
        self.field.run_deferred()
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        self.field.take_notifications()
    }
}

pub fn input(value: &str) -> Notification {
    Notification::Input(Some(value.to_string()))
}

pub fn change(value: &str) -> Notification {
    Notification::Change(Some(value.to_string()))
}

pub fn masked(pattern: &str) -> FieldOptions {
    FieldOptions {
        mask: Some(pattern.to_string()),
        ..FieldOptions::default()
    }
}
