//! Native element handles.

/// Opaque handle to the native input element a field is mounted on.
///
/// The host allocates these; the field only compares them and passes them
/// back through [`FocusQuery`](crate::core::component::FocusQuery).
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ElementRef(u64);

impl ElementRef {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}
