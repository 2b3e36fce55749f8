//! Debug logging setup and deprecation advisories.

use std::collections::HashSet;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

const DEFAULT_DEBUG_FILTER: &str = "text_field=debug";

/// Install a fmt subscriber when `TEXT_FIELD_DEBUG=1`.
///
/// Returns `true` only if this call installed the global subscriber.
pub fn init_debug_logging(config: &EnvConfig) -> bool {
    if !config.debug {
        return false;
    }
    let directive = config.log_filter.as_deref().unwrap_or(DEFAULT_DEBUG_FILTER);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DEBUG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}

/// Tracks which legacy options have already been reported for one field.
#[derive(Debug, Default)]
pub struct Advisories {
    reported: HashSet<&'static str>,
}

impl Advisories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn that `legacy` is deprecated in favour of `replacement`.
    ///
    /// Returns `false` when the advisory was already reported.
    pub fn deprecate(&mut self, legacy: &'static str, replacement: &'static str) -> bool {
        if !self.reported.insert(legacy) {
            return false;
        }
        tracing::warn!(
            legacy,
            replacement,
            "'{legacy}' is deprecated, use '{replacement}' instead"
        );
        true
    }

    pub fn was_reported(&self, legacy: &str) -> bool {
        self.reported.contains(legacy)
    }
}
