mod tests {
    use ring_animator::{
        Duration, Instant,
        input::{ButtonAction, EncoderButton, PressState},
    };

    const DEBOUNCE: Duration = Duration::from_millis(50);
    const LONG_PRESS: Duration = Duration::from_millis(1_000);

    /// Hold the button from `down` until `up`, polling every millisecond
    /// until `end`, and collect the emitted actions.
    fn press(button: &mut EncoderButton, down: u64, up: u64, end: u64) -> Vec<(u64, ButtonAction)> {
        let mut actions = Vec::new();
        for t in 0..end {
            let level = (down..up).contains(&t);
            if let Some(action) = button.update(level, Instant::from_millis(t)) {
                actions.push((t, action));
            }
        }
        actions
    }

    #[test]
    fn test_short_press_fires_on_release() {
        let mut button = EncoderButton::new(DEBOUNCE, LONG_PRESS);
        let actions = press(&mut button, 10, 300, 500);
        assert_eq!(actions, vec![(350, ButtonAction::ShortPress)]);
        assert_eq!(button.state(), PressState::Idle);
    }

    #[test]
    fn test_long_press_fires_once_and_suppresses_short() {
        let mut button = EncoderButton::new(DEBOUNCE, LONG_PRESS);
        let actions = press(&mut button, 0, 1_200, 1_500);
        // Press edge commits at 50 ms, long press one second later.
        assert_eq!(actions, vec![(1_050, ButtonAction::LongPress)]);
    }

    #[test]
    fn test_very_long_hold_still_fires_once() {
        let mut button = EncoderButton::new(DEBOUNCE, LONG_PRESS);
        let actions = press(&mut button, 0, 5_000, 5_200);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].1, ButtonAction::LongPress);
    }

    #[test]
    fn test_new_press_rearms_long_press() {
        let mut button = EncoderButton::new(DEBOUNCE, LONG_PRESS);
        assert_eq!(
            press(&mut button, 0, 1_200, 1_500),
            vec![(1_050, ButtonAction::LongPress)]
        );

        let mut actions = Vec::new();
        for t in 1_500..2_000u64 {
            let level = t < 1_700;
            if let Some(action) = button.update(level, Instant::from_millis(t)) {
                actions.push((t, action));
            }
        }
        assert_eq!(actions, vec![(1_750, ButtonAction::ShortPress)]);
    }

    #[test]
    fn test_press_state_tracks_hold() {
        let mut button = EncoderButton::new(DEBOUNCE, LONG_PRESS);
        button.update(true, Instant::from_millis(0));
        button.update(true, Instant::from_millis(50));
        assert_eq!(
            button.state(),
            PressState::Pressed {
                since: Instant::from_millis(50),
                long_fired: false
            }
        );
        button.update(true, Instant::from_millis(1_050));
        assert_eq!(
            button.state(),
            PressState::Pressed {
                since: Instant::from_millis(50),
                long_fired: true
            }
        );
    }

    #[test]
    fn test_bouncy_press_is_ignored() {
        let mut button = EncoderButton::new(DEBOUNCE, LONG_PRESS);
        for t in 0..300u64 {
            let level = (t / 20) % 2 == 0;
            assert_eq!(button.update(level, Instant::from_millis(t)), None);
        }
        assert_eq!(button.state(), PressState::Idle);
    }
}
