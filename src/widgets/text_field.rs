//! Text field controller.
//!
//! Reconciles the host-bound value, the canonical RawValue and the native
//! input's visible text, and raises at most one blur-driven `change` per focus
//! session.

use crate::config::FieldOptions;
use crate::core::component::{EventFlow, FocusHandle, Focusable, InputElementController, SlotPart};
use crate::core::element::ElementRef;
use crate::core::mask::{MaskAdapter, NoMask};
use crate::core::native_event::{InputPayload, KeyPress, NativeEvent, PointerTarget};
use crate::core::notification::{Emitter, IconSlot, Notification};
use crate::error::FieldError;
use crate::logging::Advisories;
use crate::runtime::deferred::DeferredSlot;
use crate::widgets::base_input::BaseInput;
use crate::widgets::presentation::{self, Presentation, PresentationInput};
use crate::widgets::value_sync::{ExternalSync, InternalSync, ValueSynchronizer};

/// Focus state of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Blurred,
    Focused,
}

/// Work that must wait until the host finished its current update cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DeferredTask {
    /// Force the native text to `masked` and echo RawValue to the host.
    Resync { masked: String },
    /// Rewrite the native text after a masked edit and put the caret back.
    RestoreCaret { display: String, caret: usize },
}

/// Value of RawValue when the current focus session started.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FocusSession {
    baseline: Option<String>,
}

#[derive(Default)]
struct LegacyCallbacks {
    clear: Option<Box<dyn FnMut()>>,
    prepend_inner: Option<Box<dyn FnMut()>>,
    append_outer: Option<Box<dyn FnMut()>>,
}

/// Single-line text field controller.
pub struct TextField {
    options: FieldOptions,
    base: BaseInput,
    sync: ValueSynchronizer,
    emitter: Emitter,
    deferred: DeferredSlot<DeferredTask>,
    focus_query: FocusHandle,
    input: Option<ElementRef>,
    session: Option<FocusSession>,
    internal_change: bool,
    bad_input: bool,
    native_text: String,
    caret: usize,
    advisories: Advisories,
    legacy: LegacyCallbacks,
}

impl TextField {
    /// Build a field, parsing the mask named in `options`.
    pub fn new(options: FieldOptions, focus: FocusHandle) -> Result<Self, FieldError> {
        let mask: Box<dyn MaskAdapter> = match options.build_mask()? {
            Some(mask) => Box::new(mask),
            None => Box::new(NoMask),
        };
        Ok(Self::with_mask(options, mask, focus))
    }

    /// Build a field around an injected mask strategy. `options.mask` is
    /// ignored.
    pub fn with_mask(options: FieldOptions, mask: Box<dyn MaskAdapter>, focus: FocusHandle) -> Self {
        let mut advisories = Advisories::new();
        if options.textarea {
            advisories.deprecate("textarea", "outline");
        }
        Self {
            base: BaseInput::new(&options),
            options,
            sync: ValueSynchronizer::new(mask),
            emitter: Emitter::new(),
            deferred: DeferredSlot::new(),
            focus_query: focus,
            input: None,
            session: None,
            internal_change: false,
            bad_input: false,
            native_text: String::new(),
            caret: 0,
            advisories,
            legacy: LegacyCallbacks::default(),
        }
    }

    /// Initial external value. Normalized through the mask, never echoed.
    #[must_use]
    pub fn with_value(mut self, value: Option<&str>) -> Self {
        self.sync.seed(value);
        self.show_display();
        self
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    pub fn raw_value(&self) -> Option<&str> {
        self.sync.raw()
    }

    /// Masked rendering of RawValue.
    pub fn display_text(&self) -> String {
        self.sync.display_text()
    }

    /// Text currently held by the native input. Differs from
    /// [`display_text`](Self::display_text) only until deferred work runs.
    pub fn native_text(&self) -> &str {
        &self.native_text
    }

    /// Caret position in `native_text`, in chars.
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn state(&self) -> InteractionState {
        if self.base.is_focused() {
            InteractionState::Focused
        } else {
            InteractionState::Blurred
        }
    }

    pub fn is_internal_change(&self) -> bool {
        self.internal_change
    }

    pub fn has_bad_input(&self) -> bool {
        self.bad_input
    }

    /// RawValue captured when focus was gained; `None` outside a session.
    pub fn focus_baseline(&self) -> Option<Option<&str>> {
        self.session.as_ref().map(|session| session.baseline.as_deref())
    }

    pub fn input_element(&self) -> Option<ElementRef> {
        self.input
    }

    pub fn has_deferred_work(&self) -> bool {
        self.deferred.is_pending()
    }

    pub fn advisories(&self) -> &Advisories {
        &self.advisories
    }

    pub fn presentation(&self) -> Presentation {
        Presentation::derive(&PresentationInput {
            options: &self.options,
            raw: self.sync.raw(),
            bad_input: self.bad_input,
            focused: self.base.is_focused(),
            mask_length: self.sync.mask_length(),
        })
    }

    pub fn is_dirty(&self) -> bool {
        presentation::is_dirty(self.sync.raw(), self.bad_input)
    }

    pub fn pending_notifications(&self) -> &[Notification] {
        self.emitter.pending()
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.emitter.drain()
    }

    /// Attach the native input element. Honors `autofocus`.
    pub fn mount(&mut self, element: ElementRef) {
        self.input = Some(element);
        if self.options.autofocus {
            self.focus();
        }
    }

    pub fn unmount(&mut self) {
        self.input = None;
    }

    /// Legacy clear hook. Replaced by handling `click:clear`.
    pub fn set_clear_icon_cb(&mut self, handler: Option<Box<dyn FnMut()>>) {
        if handler.is_some() {
            self.advisories.deprecate("clear-icon-cb", "click:clear");
        }
        self.legacy.clear = handler;
    }

    /// Legacy prepend-inner icon hook. Replaced by `click:prepend-inner`.
    pub fn set_prepend_inner_icon_cb(&mut self, handler: Option<Box<dyn FnMut()>>) {
        if handler.is_some() {
            self.advisories
                .deprecate("prepend-inner-icon-cb", "click:prepend-inner");
        }
        self.legacy.prepend_inner = handler;
    }

    /// Legacy append-outer icon hook. Replaced by `click:append-outer`.
    pub fn set_append_outer_icon_cb(&mut self, handler: Option<Box<dyn FnMut()>>) {
        if handler.is_some() {
            self.advisories
                .deprecate("append-outer-icon-cb", "click:append-outer");
        }
        self.legacy.append_outer = handler;
    }

    /// The host pushed a new value.
    pub fn set_external(&mut self, value: Option<&str>) {
        match self.sync.set_from_external(value, self.internal_change) {
            ExternalSync::Applied => {
                if matches!(self.deferred.peek(), Some(DeferredTask::Resync { .. })) {
                    self.deferred.cancel();
                }
                let display = self.sync.display_text();
                let up_to_date = match self.deferred.peek() {
                    Some(DeferredTask::RestoreCaret { display: pending, .. }) => *pending == display,
                    _ => self.native_text == display,
                };
                if !up_to_date {
                    self.deferred.cancel();
                    self.show_display();
                }
            }
            ExternalSync::Resync { masked } => {
                if self.deferred.schedule(DeferredTask::Resync { masked }) {
                    tracing::debug!("pending resync replaced");
                }
            }
        }
    }

    /// Run the pending deferred task, if any. Hosts call this once their
    /// update cycle has settled.
    pub fn run_deferred(&mut self) -> bool {
        let Some(task) = self.deferred.take() else {
            return false;
        };
        match task {
            DeferredTask::Resync { masked } => {
                self.caret = masked.chars().count();
                self.native_text = masked;
                self.emitter.input(self.sync.raw());
            }
            DeferredTask::RestoreCaret { display, caret } => {
                self.native_text = display;
                self.caret = caret;
            }
        }
        true
    }

    /// Route a native event.
    pub fn handle_event(&mut self, event: &NativeEvent) -> EventFlow {
        match event {
            NativeEvent::Focus => self.focus(),
            NativeEvent::Blur => self.blur(),
            NativeEvent::Input(payload) => self.on_input(payload),
            NativeEvent::KeyDown(key) => self.on_key_down(key),
            NativeEvent::MouseDown(target) => return self.on_mouse_down(*target),
            NativeEvent::MouseUp(target) => return self.on_mouse_up(*target),
            NativeEvent::Click => self.on_click(),
        }
        EventFlow::Continue
    }

    /// Focus the field. Moves native focus first if the input is not the
    /// active element; the host answers with a focus event.
    pub fn focus(&mut self) {
        let Some(input) = self.input else {
            tracing::trace!("focus ignored: no input element mounted");
            return;
        };
        if !self.focus_query.borrow().is_active_element(input) {
            self.focus_query.borrow_mut().request_focus(input);
            return;
        }
        self.focus_gained();
    }

    pub fn blur(&mut self) {
        self.focus_lost();
    }

    /// Reset RawValue to null and return focus to the input.
    pub fn clear(&mut self) {
        let outcome = self.sync.set_from_internal(None, None);
        self.native_text.clear();
        self.caret = 0;
        self.apply_internal(outcome);
        self.focus();
    }

    /// The clear affordance was activated. Returns `false` when the
    /// affordance is not shown.
    pub fn activate_clear(&mut self) -> bool {
        if !self.options.clearable || !self.base.is_interactive() || !self.is_dirty() {
            return false;
        }
        self.emitter.click_clear();
        match self.legacy.clear.as_mut() {
            Some(handler) => handler(),
            None => self.clear(),
        }
        true
    }

    /// An icon affordance was activated. Returns `false` when no icon is
    /// configured for `slot`.
    pub fn activate_icon(&mut self, slot: IconSlot) -> bool {
        let configured = match slot {
            IconSlot::PrependInner => self.options.prepend_inner_icon.is_some(),
            IconSlot::Append => self.options.append_icon.is_some(),
            IconSlot::AppendOuter => self.options.append_outer_icon.is_some(),
        };
        if !configured || self.base.is_disabled() {
            return false;
        }
        self.emitter.icon_click(slot);
        let legacy = match slot {
            IconSlot::PrependInner => self.legacy.prepend_inner.as_mut(),
            IconSlot::AppendOuter => self.legacy.append_outer.as_mut(),
            IconSlot::Append => None,
        };
        if let Some(handler) = legacy {
            handler();
        }
        true
    }

    fn focus_gained(&mut self) {
        if self.base.is_focused() {
            return;
        }
        self.base.set_focused(true);
        self.session = Some(FocusSession {
            baseline: self.sync.raw().map(str::to_string),
        });
        tracing::debug!(baseline = ?self.sync.raw(), "focus gained");
        self.emitter.focus();
    }

    fn focus_lost(&mut self) {
        if !self.base.is_focused() {
            return;
        }
        self.base.set_focused(false);
        self.internal_change = false;
        self.emitter.blur();

        let session = self.session.take();
        let current = self.sync.raw();
        tracing::debug!(value = ?current, "focus lost");
        if let Some(session) = session {
            if session.baseline.as_deref() != current {
                self.emitter.change(current);
            }
        }
    }

    fn on_input(&mut self, payload: &InputPayload) {
        // Raised only inside a focus session; blur is the sole reset.
        self.internal_change = self.base.is_focused();
        self.native_text = payload.value.clone();
        self.caret = payload
            .caret
            .unwrap_or_else(|| payload.value.chars().count());
        self.bad_input = payload.bad_input;
        let outcome = self
            .sync
            .set_from_internal(Some(&payload.value), payload.caret);
        self.apply_internal(outcome);
    }

    fn on_key_down(&mut self, key: &KeyPress) {
        if self.base.is_focused() {
            self.internal_change = true;
            if key.is_confirm() {
                self.emitter.change(self.sync.raw());
            }
        }
        self.emitter.key_down(key.clone());
    }

    fn apply_internal(&mut self, outcome: InternalSync) {
        if !outcome.changed {
            tracing::trace!(value = ?self.sync.raw(), "edit left value unchanged");
        }
        self.emitter.input(self.sync.raw());
        if let Some(restore) = outcome.restore {
            self.deferred.schedule(DeferredTask::RestoreCaret {
                display: restore.display,
                caret: restore.caret,
            });
        }
    }

    fn show_display(&mut self) {
        self.native_text = self.sync.display_text();
        self.caret = self.native_text.chars().count();
    }

    fn input_is_active(&self) -> bool {
        self.input
            .is_some_and(|input| self.focus_query.borrow().is_active_element(input))
    }
}

impl Focusable for TextField {
    fn set_focused(&mut self, focused: bool) {
        if focused {
            self.focus_gained();
        } else {
            self.focus_lost();
        }
    }

    fn is_focused(&self) -> bool {
        self.base.is_focused()
    }
}

impl InputElementController for TextField {
    fn on_mouse_down(&mut self, target: PointerTarget) -> EventFlow {
        // Keep the input focused when the press lands on label, affix or icon.
        let flow = if target == PointerTarget::Input {
            EventFlow::Continue
        } else {
            EventFlow::Stop
        };
        self.base.on_mouse_down(target);
        flow
    }

    fn on_mouse_up(&mut self, target: PointerTarget) -> EventFlow {
        let refocus = presentation::is_solo(&self.options) || presentation::has_outline(&self.options);
        if refocus && !self.input_is_active() {
            if let Some(input) = self.input {
                self.focus_query.borrow_mut().request_focus(input);
            }
        }
        self.base.on_mouse_up(target)
    }

    fn on_click(&mut self) {
        if self.base.is_focused() || self.base.is_disabled() {
            return;
        }
        if let Some(input) = self.input {
            self.focus_query.borrow_mut().request_focus(input);
        }
    }

    fn input_slot(&self) -> Vec<SlotPart> {
        let presentation = self.presentation();
        let mut slot = Vec::new();
        if self.options.prepend_inner_icon.is_some() {
            slot.push(SlotPart::PrependInner);
        }
        if presentation.show_label {
            slot.push(SlotPart::Label);
        }
        if self.options.prefix.is_some() {
            slot.push(SlotPart::Prefix);
        }
        slot.extend(self.base.input_slot());
        if self.options.suffix.is_some() {
            slot.push(SlotPart::Suffix);
        }
        if self.options.clearable {
            slot.push(SlotPart::Clear);
        }
        if self.options.append_icon.is_some() {
            slot.push(SlotPart::Append);
        }
        slot
    }
}
