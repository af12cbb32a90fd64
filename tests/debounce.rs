mod tests {
    use ring_animator::{
        Duration, Instant,
        input::{Debouncer, Edge},
    };

    const SETTLE: Duration = Duration::from_millis(50);

    fn ms(value: u64) -> Instant {
        Instant::from_millis(value)
    }

    #[test]
    fn test_fast_toggling_produces_no_edges() {
        let mut debouncer = Debouncer::new(SETTLE);
        let mut level = false;
        for t in (0..500).step_by(10) {
            level = !level;
            assert_eq!(debouncer.update(level, ms(t)), None);
        }
        assert!(!debouncer.is_pressed());
    }

    #[test]
    fn test_stable_press_and_release_emit_one_edge_each() {
        let mut debouncer = Debouncer::new(SETTLE);
        let mut edges = Vec::new();

        for t in 0..400u64 {
            let level = (100..250).contains(&t);
            if let Some(edge) = debouncer.update(level, ms(t)) {
                edges.push((t, edge));
            }
        }

        assert_eq!(edges, vec![(150, Edge::Pressed), (300, Edge::Released)]);
    }

    #[test]
    fn test_bounce_restarts_settle_interval() {
        let mut debouncer = Debouncer::new(SETTLE);
        assert_eq!(debouncer.update(true, ms(0)), None);
        assert_eq!(debouncer.update(true, ms(40)), None);
        // Contact bounce
        assert_eq!(debouncer.update(false, ms(45)), None);
        assert_eq!(debouncer.update(true, ms(48)), None);
        assert_eq!(debouncer.update(true, ms(90)), None);
        assert_eq!(debouncer.update(true, ms(98)), Some(Edge::Pressed));
        assert!(debouncer.is_pressed());
    }

    #[test]
    fn test_no_edge_without_change() {
        let mut debouncer = Debouncer::new(SETTLE);
        for t in 0..1_000u64 {
            assert_eq!(debouncer.update(false, ms(t)), None);
        }
    }
}
