//! Per-setting override registry.
//!
//! Responsibilities:
//! - Hold override providers keyed by setting name.
//! - Resolve a setting to the value of its most recently registered provider.
//!
//! Does NOT handle:
//! - Stored (non-override) setting values (see `settings.rs`).
//! - Deciding which settings to override (see `pipeline.rs`).
//!
//! Invariants:
//! - Registrations are append-only; providers are never removed or replaced.
//! - Resolution consults providers most-recent-first, so the last registration wins.
//! - Setting names are case-sensitive.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

/// Produces the value of an overridden setting.
pub type OverrideProvider = Box<dyn Fn() -> String + Send + Sync>;

/// Map from setting name to its ordered list of override providers.
#[derive(Default)]
pub struct OverrideRegistry {
    providers: BTreeMap<String, Vec<OverrideProvider>>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for `name`. It takes precedence over earlier ones.
    pub fn register(&mut self, name: impl Into<String>, provider: OverrideProvider) {
        self.providers.entry(name.into()).or_default().push(provider);
    }

    /// Register a provider returning a fixed value.
    ///
    /// Logs a warning when this replaces an earlier override with a different value.
    pub fn register_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        if let Some(previous) = self.resolve(&name) {
            if previous != value {
                warn!(setting = %name, "Override replaced by a later registration");
            }
        }

        debug!(setting = %name, "Registered setting override");
        self.register(name, Box::new(move || value.clone()));
    }

    /// Value of the most recently registered provider for `name`, if any.
    pub fn resolve(&self, name: &str) -> Option<String> {
        self.providers
            .get(name)
            .and_then(|providers| providers.last())
            .map(|provider| provider())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Number of providers registered for `name`.
    pub fn provider_count(&self, name: &str) -> usize {
        self.providers.get(name).map_or(0, Vec::len)
    }

    /// Number of distinct overridden settings.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Overridden setting names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.providers.keys().map(String::as_str)
    }
}

impl fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values may be secrets; print provider counts only.
        f.debug_map()
            .entries(self.providers.iter().map(|(name, p)| (name, p.len())))
            .finish()
    }
}
