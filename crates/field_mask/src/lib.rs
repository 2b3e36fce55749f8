//! Pattern masks for single-line text fields.
//!
//! A mask is a pattern of tokens (`#`, `A`, `a`, `N`, `n`, `X`) and literals.
//! [`Mask::mask`] formats a raw value for display, [`Mask::unmask`] strips the
//! delimiters back out, and [`Mask::remap_caret`] keeps the caret on the same
//! logical character across the transform.

mod error;
mod mask;
mod presets;
mod token;

pub use error::MaskError;
pub use mask::Mask;
pub use presets::{preset, PRESETS};
pub use token::{is_delimiter, MaskToken, DELIMITERS};
