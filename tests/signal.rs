mod tests {
    use rgb_status_led::{EventKind, EventSignalBus, SignalSet};

    #[test]
    fn test_assert_and_clear_are_idempotent() {
        let bus = EventSignalBus::new();
        assert!(bus.assert(EventKind::WifiConnected));
        assert!(!bus.assert(EventKind::WifiConnected));
        assert!(bus.is_asserted(EventKind::WifiConnected));

        assert!(bus.clear(EventKind::WifiConnected));
        assert!(!bus.clear(EventKind::WifiConnected));
        assert!(!bus.is_asserted(EventKind::WifiConnected));
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let bus = EventSignalBus::new();
        bus.assert(EventKind::Error);
        bus.set(EventKind::OtaBegin, true);

        let snapshot = bus.snapshot();
        bus.clear(EventKind::Error);

        assert!(snapshot.contains(EventKind::Error));
        assert!(snapshot.contains(EventKind::OtaBegin));
        assert_eq!(snapshot.len(), 2);
        assert!(!bus.snapshot().contains(EventKind::Error));
    }

    #[test]
    fn test_clear_all() {
        let bus = EventSignalBus::new();
        for kind in EventKind::ALL {
            bus.assert(kind);
        }
        assert_eq!(bus.snapshot().len(), EventKind::COUNT);
        bus.clear_all();
        assert!(bus.snapshot().is_empty());
    }

    #[test]
    fn test_signal_set() {
        let set = SignalSet::from_kinds(&[EventKind::Ok, EventKind::OtaError]);
        assert_eq!(set.bits(), (1 << 2) | (1 << 10));
        assert!(set.contains(EventKind::Ok));
        assert!(!set.contains(EventKind::Boot));

        let kinds: Vec<EventKind> = set.iter().collect();
        assert_eq!(kinds, vec![EventKind::Ok, EventKind::OtaError]);

        assert_eq!(set.without(EventKind::Ok).with(EventKind::Boot).len(), 2);
        assert!(SignalSet::EMPTY.is_empty());
    }

    #[test]
    fn test_concurrent_updates() {
        static BUS: EventSignalBus = EventSignalBus::new();

        std::thread::scope(|scope| {
            for kind in EventKind::ALL {
                scope.spawn(move || {
                    for _ in 0..100 {
                        BUS.assert(kind);
                        let _ = BUS.snapshot();
                        BUS.clear(kind);
                    }
                    BUS.assert(kind);
                });
            }
        });

        assert_eq!(BUS.snapshot().len(), EventKind::COUNT);
    }
}
