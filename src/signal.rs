//! Event signal bus
//!
//! Other subsystems (network callbacks, OTA handlers, interrupt handlers)
//! assert and clear event flags at any time. All flags live in one word
//! behind a `critical-section` mutex, so a snapshot is a single read.

use core::cell::Cell;

use critical_section::Mutex;

use crate::event::EventKind;

/// Point-in-time set of asserted event kinds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalSet(u16);

impl SignalSet {
    pub const EMPTY: Self = Self(0);

    /// Create a set with every kind in `kinds` asserted
    pub const fn from_kinds(kinds: &[EventKind]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < kinds.len() {
            set = set.with(kinds[i]);
            i += 1;
        }
        set
    }

    #[must_use]
    pub const fn with(self, kind: EventKind) -> Self {
        Self(self.0 | mask(kind))
    }

    #[must_use]
    pub const fn without(self, kind: EventKind) -> Self {
        Self(self.0 & !mask(kind))
    }

    pub const fn contains(self, kind: EventKind) -> bool {
        self.0 & mask(kind) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Iterate over asserted kinds in id order
    pub fn iter(self) -> impl Iterator<Item = EventKind> {
        EventKind::ALL.into_iter().filter(move |&kind| self.contains(kind))
    }
}

const fn mask(kind: EventKind) -> u16 {
    1 << kind.id()
}

/// Shared, interrupt-safe event flags
///
/// Each update is atomic for one flag; there are no cross-flag
/// transactions.
pub struct EventSignalBus {
    flags: Mutex<Cell<SignalSet>>,
}

impl Default for EventSignalBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSignalBus {
    /// Create a bus with nothing asserted
    pub const fn new() -> Self {
        Self {
            flags: Mutex::new(Cell::new(SignalSet::EMPTY)),
        }
    }

    /// Assert `kind`
    ///
    /// Returns `false` if it was already asserted.
    pub fn assert(&self, kind: EventKind) -> bool {
        self.update(|flags| flags.with(kind))
    }

    /// Clear `kind`
    ///
    /// Returns `false` if it was not asserted.
    pub fn clear(&self, kind: EventKind) -> bool {
        self.update(|flags| flags.without(kind))
    }

    /// Assert or clear `kind`
    pub fn set(&self, kind: EventKind, asserted: bool) -> bool {
        if asserted {
            self.assert(kind)
        } else {
            self.clear(kind)
        }
    }

    pub fn is_asserted(&self, kind: EventKind) -> bool {
        self.snapshot().contains(kind)
    }

    /// Consistent copy of all flags
    pub fn snapshot(&self) -> SignalSet {
        critical_section::with(|cs| self.flags.borrow(cs).get())
    }

    /// Clear every flag
    pub fn clear_all(&self) {
        critical_section::with(|cs| self.flags.borrow(cs).set(SignalSet::EMPTY));
    }

    /// Apply `f` to the flags, returning whether they changed
    fn update(&self, f: impl FnOnce(SignalSet) -> SignalSet) -> bool {
        critical_section::with(|cs| {
            let flags = self.flags.borrow(cs);
            let current = flags.get();
            let next = f(current);
            flags.set(next);
            next != current
        })
    }
}
