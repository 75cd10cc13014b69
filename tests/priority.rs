mod tests {
    use rgb_status_led::{
        ConfigError, EventCatalog, EventConfig, EventKind, GlobalSettings, PriorityMode,
        PriorityOrder, PriorityResolver, Resolution, RgbColor, SignalSet,
    };

    fn resolver(catalog: &EventCatalog, settings: &GlobalSettings) -> PriorityResolver {
        PriorityResolver::new(PriorityOrder::default(), catalog, settings).unwrap()
    }

    #[test]
    fn test_default_order() {
        let order = PriorityOrder::default();
        assert_eq!(order.len(), EventKind::COUNT);
        assert_eq!(order.position(EventKind::Error), Some(0));
        assert_eq!(order.position(EventKind::Warning), Some(1));
        assert_eq!(order.position(EventKind::OtaError), Some(2));
        assert_eq!(order.position(EventKind::Ok), Some(10));
    }

    #[test]
    fn test_order_rejects_duplicates() {
        assert_eq!(
            PriorityOrder::new(&[EventKind::Error, EventKind::Warning, EventKind::Error]),
            Err(ConfigError::DuplicatePriority(EventKind::Error))
        );
    }

    #[test]
    fn test_order_must_match_catalog() {
        let catalog = EventCatalog::minimal();
        let missing = PriorityOrder::new(&[EventKind::Error]).unwrap();
        assert_eq!(
            missing.validate_against(&catalog),
            Err(ConfigError::MissingPriority(EventKind::Warning))
        );

        let extra =
            PriorityOrder::new(&[EventKind::Error, EventKind::Warning, EventKind::Boot]).unwrap();
        assert_eq!(
            extra.validate_against(&catalog),
            Err(ConfigError::UnconfiguredPriority(EventKind::Boot))
        );
    }

    #[test]
    fn test_higher_priority_wins() {
        let catalog = EventCatalog::full();
        let resolver = resolver(&catalog, &GlobalSettings::default());
        let order = PriorityOrder::default();

        for (i, &high) in order.as_slice().iter().enumerate() {
            for &low in &order.as_slice()[i + 1..] {
                let signals = SignalSet::from_kinds(&[low, high]);
                assert_eq!(resolver.resolve(&catalog, signals), Resolution::Event(high));
            }
        }
    }

    #[test]
    fn test_custom_order() {
        let catalog = EventCatalog::minimal();
        let order = PriorityOrder::new(&[EventKind::Warning, EventKind::Error]).unwrap();
        let resolver = PriorityResolver::new(order, &catalog, &GlobalSettings::default()).unwrap();
        let signals = SignalSet::from_kinds(&[EventKind::Error, EventKind::Warning]);
        assert_eq!(resolver.resolve(&catalog, signals), Resolution::Event(EventKind::Warning));
    }

    #[test]
    fn test_disabled_never_wins() {
        let mut catalog = EventCatalog::full();
        catalog
            .set(EventKind::Error, EventConfig::blinking(RgbColor::RED).disabled())
            .unwrap();
        let resolver = resolver(&catalog, &GlobalSettings::default());

        assert_eq!(
            resolver.resolve(&catalog, SignalSet::from_kinds(&[EventKind::Error])),
            Resolution::Off
        );
        assert_eq!(
            resolver.resolve(
                &catalog,
                SignalSet::from_kinds(&[EventKind::Error, EventKind::Boot])
            ),
            Resolution::Event(EventKind::Boot)
        );
    }

    #[test]
    fn test_ok_requires_ok_state_enabled() {
        let catalog = EventCatalog::full();
        let signals = SignalSet::from_kinds(&[EventKind::Ok]);

        let enabled = resolver(&catalog, &GlobalSettings::default());
        assert_eq!(enabled.resolve(&catalog, signals), Resolution::Event(EventKind::Ok));

        let settings = GlobalSettings {
            ok_state_enabled: false,
            ..GlobalSettings::default()
        };
        let disabled = resolver(&catalog, &settings);
        assert_eq!(disabled.resolve(&catalog, signals), Resolution::Off);

        // ok is never picked without being asserted
        assert_eq!(enabled.resolve(&catalog, SignalSet::EMPTY), Resolution::Off);
    }

    #[test]
    fn test_user_mode_falls_back_to_manual() {
        let catalog = EventCatalog::full();
        let settings = GlobalSettings {
            priority_mode: PriorityMode::User,
            ..GlobalSettings::default()
        };
        let resolver = resolver(&catalog, &settings);

        assert_eq!(resolver.resolve(&catalog, SignalSet::EMPTY), Resolution::Manual);
        assert_eq!(
            resolver.resolve(&catalog, SignalSet::from_kinds(&[EventKind::Warning])),
            Resolution::Event(EventKind::Warning)
        );
    }

    #[test]
    fn test_status_fallback() {
        let catalog = EventCatalog::full();
        let settings = GlobalSettings {
            status_fallback: Some(EventKind::Boot),
            ..GlobalSettings::default()
        };
        let resolver = resolver(&catalog, &settings);
        assert_eq!(
            resolver.resolve(&catalog, SignalSet::EMPTY),
            Resolution::Event(EventKind::Boot)
        );
    }

    #[test]
    fn test_invalid_fallback() {
        let settings = GlobalSettings {
            status_fallback: Some(EventKind::Ok),
            ..GlobalSettings::default()
        };
        assert_eq!(
            PriorityResolver::new(PriorityOrder::default(), &EventCatalog::full(), &settings),
            Err(ConfigError::InvalidFallback(EventKind::Ok))
        );

        let settings = GlobalSettings {
            status_fallback: Some(EventKind::Boot),
            ..GlobalSettings::default()
        };
        assert_eq!(
            PriorityResolver::new(PriorityOrder::minimal(), &EventCatalog::minimal(), &settings),
            Err(ConfigError::InvalidFallback(EventKind::Boot))
        );
    }

    #[test]
    fn test_resolution_is_stateless() {
        let catalog = EventCatalog::full();
        let resolver = resolver(&catalog, &GlobalSettings::default());
        let error = SignalSet::from_kinds(&[EventKind::Error]);
        let wifi = SignalSet::from_kinds(&[EventKind::WifiConnected]);

        for _ in 0..3 {
            assert_eq!(resolver.resolve(&catalog, error), Resolution::Event(EventKind::Error));
            assert_eq!(
                resolver.resolve(&catalog, wifi),
                Resolution::Event(EventKind::WifiConnected)
            );
        }
    }
}
