//! Text-field controller for terminal and embedded UIs.
//!
//! Only `core::notification::Emitter` raises `focus`, `blur`, `input`, `change`, `click:*` and `keydown` to the host.
//!
//! # Public API Overview
//! - Configure a field with [`FieldOptions`] and build it with [`TextField::new`].
//! - Mount it on a native element ([`ElementRef`]) and share a [`FocusHandle`]
//!   such as [`ActiveElementTracker`] between fields.
//! - Deliver [`NativeEvent`]s, push host values with [`TextField::set_external`],
//!   call [`TextField::run_deferred`] after every update cycle, then drain
//!   [`Notification`]s with [`TextField::take_notifications`].
//! - Read [`Presentation`] for label, dirty and counter state.

#![allow(clippy::new_without_default)]

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod runtime;
pub mod widgets;

/// Configuration types.
pub use crate::config::{CounterLimit, EnvConfig, FieldOptions, TextDirection};
pub use crate::error::FieldError;

/// Host capabilities and controller traits.
pub use crate::core::component::{
    EventFlow, FocusHandle, FocusQuery, Focusable, InputElementController, SlotPart,
};
pub use crate::core::element::ElementRef;
pub use crate::core::input_kind::InputKind;
/// Mask strategy seam and the bundled pattern engine.
pub use crate::core::mask::{MaskAdapter, NoMask};
pub use field_mask::{Mask, MaskError};
/// Native events and outward notifications.
pub use crate::core::native_event::{InputPayload, KeyPress, NativeEvent, PointerTarget};
pub use crate::core::notification::{IconSlot, Notification};

/// Runtime helpers.
pub use crate::runtime::deferred::DeferredSlot;
pub use crate::runtime::focus::ActiveElementTracker;

/// Field controllers and derived state.
pub use crate::widgets::{
    BaseInput, CounterState, InteractionState, LabelOffset, Presentation, TextField,
};

/// Logging helpers.
pub use crate::logging::{init_debug_logging, Advisories};
