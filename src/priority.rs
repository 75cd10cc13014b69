//! Priority resolution
//!
//! Picks the single event state that controls the LED for one tick. The
//! result depends only on the signal snapshot, the catalog and the order;
//! there is no memory of earlier winners.

use heapless::Vec;

use crate::catalog::EventCatalog;
use crate::config::{GlobalSettings, PriorityMode};
use crate::error::ConfigError;
use crate::event::EventKind;
use crate::signal::SignalSet;

/// Severity order, highest first
const DEFAULT_ORDER: [EventKind; EventKind::COUNT] = [
    EventKind::Error,
    EventKind::Warning,
    EventKind::OtaError,
    EventKind::OtaBegin,
    EventKind::OtaProgress,
    EventKind::OtaEnd,
    EventKind::ApiDisconnected,
    EventKind::ApiConnected,
    EventKind::WifiConnected,
    EventKind::Boot,
    EventKind::Ok,
];

/// Ordered list of event kinds, highest priority first, without duplicates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityOrder {
    kinds: Vec<EventKind, { EventKind::COUNT }>,
}

impl Default for PriorityOrder {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_ORDER.into_iter().collect(),
        }
    }
}

impl PriorityOrder {
    /// Create an order from a list, highest priority first
    pub fn new(kinds: &[EventKind]) -> Result<Self, ConfigError> {
        let mut order: Vec<EventKind, { EventKind::COUNT }> = Vec::new();
        for &kind in kinds {
            if order.contains(&kind) {
                return Err(ConfigError::DuplicatePriority(kind));
            }
            // Without duplicates the list cannot outgrow the number of kinds
            order.push(kind).map_err(ConfigError::DuplicatePriority)?;
        }
        Ok(Self { kinds: order })
    }

    /// Error above warning
    pub fn minimal() -> Self {
        Self {
            kinds: [EventKind::Error, EventKind::Warning].into_iter().collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn as_slice(&self) -> &[EventKind] {
        &self.kinds
    }

    /// Rank of `kind`, `0` being the highest
    pub fn position(&self, kind: EventKind) -> Option<usize> {
        self.kinds.iter().position(|&k| k == kind)
    }

    pub fn contains(&self, kind: EventKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Check that the order names exactly the kinds of the catalog
    pub fn validate_against(&self, catalog: &EventCatalog) -> Result<(), ConfigError> {
        if let Some(kind) = self.iter().find(|&kind| !catalog.contains(kind)) {
            return Err(ConfigError::UnconfiguredPriority(kind));
        }
        if let Some((kind, _)) = catalog.iter().find(|&(kind, _)| !self.contains(kind)) {
            return Err(ConfigError::MissingPriority(kind));
        }
        Ok(())
    }
}

/// The status fallback must be configured and must not be `ok`
pub(crate) fn validate_fallback(
    settings: &GlobalSettings,
    catalog: &EventCatalog,
) -> Result<(), ConfigError> {
    match settings.status_fallback {
        Some(kind) if kind == EventKind::Ok || !catalog.contains(kind) => {
            Err(ConfigError::InvalidFallback(kind))
        }
        _ => Ok(()),
    }
}

/// Outcome of one resolution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    /// The event state controls the LED
    Event(EventKind),
    /// No event won; the manual color controls the LED
    Manual,
    /// No event won and there is no fallback; the LED is dark
    Off,
}

impl Resolution {
    pub const fn event(self) -> Option<EventKind> {
        match self {
            Self::Event(kind) => Some(kind),
            Self::Manual | Self::Off => None,
        }
    }
}

/// Resolves signal snapshots against a fixed priority order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityResolver {
    order: PriorityOrder,
    mode: PriorityMode,
    ok_state_enabled: bool,
    fallback: Option<EventKind>,
}

impl PriorityResolver {
    /// Create a resolver, checking the order and fallback against the catalog
    pub fn new(
        order: PriorityOrder,
        catalog: &EventCatalog,
        settings: &GlobalSettings,
    ) -> Result<Self, ConfigError> {
        order.validate_against(catalog)?;
        validate_fallback(settings, catalog)?;
        Ok(Self {
            order,
            mode: settings.priority_mode,
            ok_state_enabled: settings.ok_state_enabled,
            fallback: settings.status_fallback,
        })
    }

    pub fn order(&self) -> &PriorityOrder {
        &self.order
    }

    pub const fn mode(&self) -> PriorityMode {
        self.mode
    }

    /// Pick the winner for one snapshot
    pub fn resolve(&self, catalog: &EventCatalog, signals: SignalSet) -> Resolution {
        let winner = self
            .order
            .iter()
            .find(|&kind| self.participates(kind, catalog) && signals.contains(kind));
        if let Some(kind) = winner {
            return Resolution::Event(kind);
        }

        match self.mode {
            PriorityMode::User => Resolution::Manual,
            PriorityMode::Status => match self.fallback {
                Some(kind) if catalog.is_enabled(kind) => Resolution::Event(kind),
                _ => Resolution::Off,
            },
        }
    }

    fn participates(&self, kind: EventKind, catalog: &EventCatalog) -> bool {
        if kind == EventKind::Ok && !self.ok_state_enabled {
            return false;
        }
        catalog.is_enabled(kind)
    }
}
