//! Table of configured event states

use crate::color::RgbColor;
use crate::error::ConfigError;
use crate::event::{EventConfig, EventKind};

/// Validated event configurations, indexed by kind
///
/// A catalog may hold any subset of kinds. Kinds that are not configured
/// read as [`EventConfig::ABSENT`] and never win resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventCatalog {
    entries: [Option<EventConfig>; EventKind::COUNT],
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::full()
    }
}

impl EventCatalog {
    /// Create an empty catalog
    pub const fn new() -> Self {
        Self {
            entries: [None; EventKind::COUNT],
        }
    }

    /// All eleven event states with their default look
    pub const fn full() -> Self {
        let mut entries = [None; EventKind::COUNT];
        let mut i = 0;
        while i < EventKind::COUNT {
            let kind = EventKind::ALL[i];
            entries[kind.index()] = Some(EventConfig::default_for(kind));
            i += 1;
        }
        Self { entries }
    }

    /// Error and warning only, the way a plain status LED behaves
    pub const fn minimal() -> Self {
        let mut entries = [None; EventKind::COUNT];
        entries[EventKind::Error.index()] = Some(EventConfig::blinking(RgbColor::RED));
        entries[EventKind::Warning.index()] = Some(EventConfig::blinking(RgbColor::ORANGE));
        Self { entries }
    }

    /// Add an event state
    ///
    /// Fails if the config is out of range or the kind is already present.
    pub fn with(mut self, kind: EventKind, config: EventConfig) -> Result<Self, ConfigError> {
        if self.contains(kind) {
            return Err(ConfigError::DuplicateEvent(kind));
        }
        config.validate(kind)?;
        self.entries[kind.index()] = Some(config);
        Ok(self)
    }

    /// Replace or add an event state
    pub fn set(&mut self, kind: EventKind, config: EventConfig) -> Result<(), ConfigError> {
        config.validate(kind)?;
        self.entries[kind.index()] = Some(config);
        Ok(())
    }

    /// Drop an event state from the catalog
    pub fn remove(&mut self, kind: EventKind) -> Option<EventConfig> {
        self.entries[kind.index()].take()
    }

    /// Get the configuration of `kind`
    pub fn get(&self, kind: EventKind) -> EventConfig {
        self.entries[kind.index()].unwrap_or(EventConfig::ABSENT)
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.entries[kind.index()].is_some()
    }

    /// Returns true if `kind` is configured and enabled
    pub fn is_enabled(&self, kind: EventKind) -> bool {
        self.entries[kind.index()].is_some_and(|config| config.enabled)
    }

    /// Iterate over configured kinds in id order
    pub fn iter(&self) -> impl Iterator<Item = (EventKind, EventConfig)> + '_ {
        EventKind::ALL
            .into_iter()
            .filter_map(|kind| self.entries[kind.index()].map(|config| (kind, config)))
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check every entry. Catalogs built with [`EventCatalog::with`] or
    /// [`EventCatalog::set`] are always valid; presets are checked here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.iter().try_for_each(|(kind, config)| config.validate(kind))
    }
}
