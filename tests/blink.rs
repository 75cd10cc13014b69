mod tests {
    use embassy_time::{Duration, Instant};
    use rgb_status_led::BlinkClock;

    #[test]
    fn test_square_wave_halves() {
        let clock = BlinkClock::new();
        let period = Duration::from_millis(1000);

        assert_eq!(clock.evaluate(Instant::from_millis(0), period), 1.0);
        assert_eq!(clock.evaluate(Instant::from_millis(499), period), 1.0);
        assert_eq!(clock.evaluate(Instant::from_millis(500), period), 0.0);
        assert_eq!(clock.evaluate(Instant::from_millis(999), period), 0.0);
        assert_eq!(clock.evaluate(Instant::from_millis(1000), period), 1.0);
    }

    #[test]
    fn test_warning_speed_at_2000ms() {
        // 2000 mod 1500 = 500, inside the first 750 ms half
        let clock = BlinkClock::new();
        let period = Duration::from_millis(1500);
        assert!(clock.is_on(Instant::from_millis(2000), period));
        assert!(!clock.is_on(Instant::from_millis(2300), period));
    }

    #[test]
    fn test_evaluate_is_pure() {
        let clock = BlinkClock::anchored_at(Instant::from_millis(123));
        let period = Duration::from_millis(250);
        let now = Instant::from_millis(4567);
        let first = clock.evaluate(now, period);
        for _ in 0..10 {
            assert_eq!(clock.evaluate(now, period), first);
        }
    }

    #[test]
    fn test_one_transition_per_half_period() {
        let clock = BlinkClock::new();
        let period = Duration::from_millis(250);
        let mut transitions = 0;
        let mut last = clock.evaluate(Instant::from_millis(0), period);
        for ms in 1..=1000 {
            let value = clock.evaluate(Instant::from_millis(ms), period);
            if value != last {
                transitions += 1;
            }
            last = value;
        }
        // 1000 ms at 250 ms per cycle is 8 half periods
        assert_eq!(transitions, 8);
    }

    #[test]
    fn test_restart_moves_phase() {
        let mut clock = BlinkClock::new();
        let period = Duration::from_millis(1000);
        assert!(!clock.is_on(Instant::from_millis(1700), period));

        clock.restart(Instant::from_millis(1700));
        assert_eq!(clock.anchor(), Instant::from_millis(1700));
        assert!(clock.is_on(Instant::from_millis(1700), period));
        assert!(!clock.is_on(Instant::from_millis(2200), period));
    }

    #[test]
    fn test_before_anchor_counts_as_start() {
        let clock = BlinkClock::anchored_at(Instant::from_millis(5000));
        assert!(clock.is_on(Instant::from_millis(10), Duration::from_millis(1000)));
    }

    #[test]
    fn test_zero_period_reads_solid() {
        let clock = BlinkClock::new();
        assert_eq!(clock.evaluate(Instant::from_millis(777), Duration::from_ticks(0)), 1.0);
        assert_eq!(clock.pulse(Instant::from_millis(777), Duration::from_ticks(0)), 1.0);
    }

    #[test]
    fn test_pulse_shape() {
        let clock = BlinkClock::new();
        let period = Duration::from_millis(2000);

        let start = clock.pulse(Instant::from_millis(0), period);
        let peak = clock.pulse(Instant::from_millis(500), period);
        let trough = clock.pulse(Instant::from_millis(1500), period);

        assert!((start - 0.5).abs() < 1e-3);
        assert!((peak - 1.0).abs() < 1e-3);
        assert!(trough < 1e-3);

        for ms in (0..4000).step_by(7) {
            let value = clock.pulse(Instant::from_millis(ms), period);
            assert!((0.0..=1.0).contains(&value));
        }
    }
}
