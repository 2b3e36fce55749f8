//! Field controllers.

pub mod base_input;
pub mod presentation;
pub mod text_field;
pub mod value_sync;

pub use base_input::BaseInput;
pub use presentation::{CounterState, LabelOffset, Presentation, PresentationInput};
pub use text_field::{InteractionState, TextField};
pub use value_sync::{CaretRestore, ExternalSync, InternalSync, ValueSynchronizer};
