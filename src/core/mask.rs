//! Mask strategy seam.

use field_mask::Mask;

/// Display transform injected into a field.
///
/// Implementations must keep `unmask(mask(unmask(x))) == unmask(x)` for every
/// display string they produce.
pub trait MaskAdapter {
    fn mask(&self, raw: &str) -> String;

    fn unmask(&self, display: &str) -> String;

    /// Caret position in `display` equivalent to `caret` in `typed` (chars).
    fn remap_caret(&self, typed: &str, caret: usize, display: &str) -> usize;

    /// Native max-length hint implied by the mask.
    fn max_length(&self) -> Option<usize> {
        None
    }

    /// `false` for the identity strategy.
    fn is_active(&self) -> bool {
        true
    }
}

/// Identity strategy used when no mask is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMask;

impl MaskAdapter for NoMask {
    fn mask(&self, raw: &str) -> String {
        raw.to_string()
    }

    fn unmask(&self, display: &str) -> String {
        display.to_string()
    }

    fn remap_caret(&self, _typed: &str, caret: usize, display: &str) -> usize {
        caret.min(display.chars().count())
    }

    fn is_active(&self) -> bool {
        false
    }
}

impl MaskAdapter for Mask {
    fn mask(&self, raw: &str) -> String {
        Mask::mask(self, raw)
    }

    fn unmask(&self, display: &str) -> String {
        Mask::unmask(self, display)
    }

    fn remap_caret(&self, typed: &str, caret: usize, display: &str) -> usize {
        Mask::remap_caret(self, typed, caret, display)
    }

    fn max_length(&self) -> Option<usize> {
        Some(Mask::max_length(self))
    }
}
