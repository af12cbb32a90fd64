mod tests {
    use core::convert::Infallible;

    use embedded_hal::digital::{ErrorType, InputPin};
    use ring_animator::{RotaryEncoder, Selection, Step, input::QuadratureDecoder};

    struct FakePin(bool);

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Self::Error> {
            Ok(self.0)
        }

        fn is_low(&mut self) -> Result<bool, Self::Error> {
            Ok(!self.0)
        }
    }

    #[test]
    fn test_decode_direction() {
        assert_eq!(QuadratureDecoder::decode(true, false), Step::Forward);
        assert_eq!(QuadratureDecoder::decode(false, true), Step::Forward);
        assert_eq!(QuadratureDecoder::decode(true, true), Step::Backward);
        assert_eq!(QuadratureDecoder::decode(false, false), Step::Backward);
    }

    #[test]
    fn test_forward_step_wraps_selection() {
        let selection = Selection::catalog(19);
        let mut encoder = RotaryEncoder::new(FakePin(true), FakePin(false));
        assert_eq!(encoder.on_edge(&selection), Ok(Step::Forward));
        assert_eq!(selection.get(), 0);
    }

    #[test]
    fn test_backward_step_wraps_selection() {
        let selection = Selection::catalog(0);
        let mut encoder = RotaryEncoder::new(FakePin(false), FakePin(false));
        assert_eq!(encoder.on_edge(&selection), Ok(Step::Backward));
        assert_eq!(selection.get(), 19);
    }

    #[test]
    fn test_each_edge_moves_exactly_one() {
        let selection = Selection::catalog(10);
        let (a, b) = RotaryEncoder::new(FakePin(true), FakePin(false)).release();
        let mut encoder = RotaryEncoder::new(a, b);
        for expected in [11, 12, 13] {
            encoder.on_edge(&selection).unwrap();
            assert_eq!(selection.get(), expected);
        }
    }
}
