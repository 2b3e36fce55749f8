//! Core interfaces and types.

pub mod component;
pub mod element;
pub mod input_kind;
pub mod mask;
pub mod native_event;
pub mod notification;
