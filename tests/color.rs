mod tests {
    use ring_animator::color::{
        BLUE, GREEN, RED, Rgb, fade_toward_black, gray, rgb_from_u32, wheel,
    };

    #[test]
    fn test_wheel_endpoints_meet() {
        assert_eq!(wheel(0), RED);
        assert_eq!(wheel(255), RED);
    }

    #[test]
    fn test_wheel_band_boundaries() {
        assert_eq!(wheel(85), GREEN);
        assert_eq!(wheel(170), BLUE);
    }

    #[test]
    fn test_wheel_bands_blend_two_channels() {
        for pos in 0..=255u8 {
            let color = wheel(pos);
            let zeros = [color.r, color.g, color.b]
                .iter()
                .filter(|channel| **channel == 0)
                .count();
            assert!(zeros >= 1, "position {pos} lights all channels");
            assert_eq!(
                u16::from(color.r) + u16::from(color.g) + u16::from(color.b),
                255,
                "position {pos} is not fully saturated"
            );
        }
    }

    #[test]
    fn test_wheel_is_deterministic() {
        for pos in 0..=255u8 {
            assert_eq!(wheel(pos), wheel(pos));
        }
        assert_eq!(wheel(42), Rgb { r: 129, g: 126, b: 0 });
    }

    #[test]
    fn test_fade_toward_black_floors_at_zero() {
        let color = Rgb { r: 10, g: 2, b: 0 };
        assert_eq!(fade_toward_black(color, 3), Rgb { r: 7, g: 0, b: 0 });
        assert_eq!(fade_toward_black(color, 255), Rgb::default());
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x12_34_56), Rgb { r: 0x12, g: 0x34, b: 0x56 });
        assert_eq!(gray(9), Rgb { r: 9, g: 9, b: 9 });
    }
}
