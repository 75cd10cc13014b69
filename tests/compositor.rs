mod tests {
    use rgb_status_led::{ChannelOutput, OutputCompositor, Rgb, RgbColor};

    #[test]
    fn test_compose_product() {
        let mut compositor = OutputCompositor::new();
        let output = compositor.compose(RgbColor::new(1.0, 0.5, 0.0), 0.5, 0.5, 1.0);
        assert_eq!(
            output,
            ChannelOutput {
                red: 0.25,
                green: 0.125,
                blue: 0.0
            }
        );
        assert_eq!(compositor.clamp_count(), 0);
    }

    #[test]
    fn test_blink_factor_zero_is_off() {
        let mut compositor = OutputCompositor::new();
        let output = compositor.compose(RgbColor::WHITE, 1.0, 1.0, 0.0);
        assert!(output.is_off());
    }

    #[test]
    fn test_output_stays_in_range() {
        let mut compositor = OutputCompositor::new();
        let steps = [0.0, 0.1, 0.33, 0.5, 0.9, 1.0];
        for &c in &steps {
            for &brightness in &steps {
                for &global in &steps {
                    let output = compositor.compose(RgbColor::new(c, 1.0 - c, c), brightness, global, 1.0);
                    for value in output.as_array() {
                        assert!((0.0..=1.0).contains(&value));
                    }
                }
            }
        }
        assert_eq!(compositor.clamp_count(), 0);
    }

    #[test]
    fn test_misconfiguration_is_clamped_and_counted() {
        let mut compositor = OutputCompositor::new();
        let output = compositor.compose(RgbColor::new(2.0, -1.0, f32::NAN), 1.0, 1.0, 1.0);
        assert_eq!(
            output,
            ChannelOutput {
                red: 1.0,
                green: 0.0,
                blue: 0.0
            }
        );
        assert_eq!(compositor.clamp_count(), 3);
    }

    #[test]
    fn test_to_rgb8() {
        let output = ChannelOutput {
            red: 1.0,
            green: 0.5,
            blue: 0.0,
        };
        assert_eq!(output.to_rgb8(), Rgb { r: 255, g: 128, b: 0 });
        assert_eq!(ChannelOutput::OFF.to_rgb8(), Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn test_color_conversions() {
        assert_eq!(RgbColor::from_rgb8(Rgb { r: 255, g: 0, b: 255 }), RgbColor::new(1.0, 0.0, 1.0));
        assert_eq!(RgbColor::from_percent(100, 50, 0), RgbColor::ORANGE);
        assert!(RgbColor::SOFT_WHITE.is_normalized());
        assert!(!RgbColor::new(0.0, 1.01, 0.0).is_normalized());
    }
}
