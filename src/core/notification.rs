//! Outward notifications and the emitter that raises them.

use crate::core::native_event::KeyPress;

/// Icon affordances that can be activated by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSlot {
    PrependInner,
    Append,
    AppendOuter,
}

impl IconSlot {
    pub fn event_name(self) -> &'static str {
        match self {
            Self::PrependInner => "click:prepend-inner",
            Self::Append => "click:append",
            Self::AppendOuter => "click:append-outer",
        }
    }
}

/// Notification raised to the host, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Focus,
    Blur,
    Input(Option<String>),
    Change(Option<String>),
    ClickClear,
    IconClick(IconSlot),
    KeyDown(KeyPress),
}

impl Notification {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Input(_) => "input",
            Self::Change(_) => "change",
            Self::ClickClear => "click:clear",
            Self::IconClick(slot) => slot.event_name(),
            Self::KeyDown(_) => "keydown",
        }
    }
}

/// The only writer of notifications. The host drains them after each event.
#[derive(Debug, Default)]
pub struct Emitter {
    queue: Vec<Notification>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn focus(&mut self) {
        self.push(Notification::Focus);
    }

    pub(crate) fn blur(&mut self) {
        self.push(Notification::Blur);
    }

    pub(crate) fn input(&mut self, raw: Option<&str>) {
        self.push(Notification::Input(raw.map(str::to_string)));
    }

    pub(crate) fn change(&mut self, raw: Option<&str>) {
        self.push(Notification::Change(raw.map(str::to_string)));
    }

    pub(crate) fn click_clear(&mut self) {
        self.push(Notification::ClickClear);
    }

    pub(crate) fn icon_click(&mut self, slot: IconSlot) {
        self.push(Notification::IconClick(slot));
    }

    pub(crate) fn key_down(&mut self, key: KeyPress) {
        self.push(Notification::KeyDown(key));
    }

    fn push(&mut self, notification: Notification) {
        tracing::debug!(event = notification.name(), ?notification, "emit");
        self.queue.push(notification);
    }

    pub fn pending(&self) -> &[Notification] {
        &self.queue
    }

    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.queue)
    }
}
