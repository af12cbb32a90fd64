mod tests {
    use ring_animator::{
        ANIMATION_COUNT, AnimationId,
        animation::CATALOG,
    };

    #[test]
    fn test_catalog_matches_ids() {
        assert_eq!(CATALOG.len(), ANIMATION_COUNT);
        for (index, entry) in CATALOG.iter().enumerate() {
            assert_eq!(usize::from(entry.id.index()), index);
        }
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(AnimationId::from_raw(0), Some(AnimationId::Solid));
        assert_eq!(AnimationId::from_raw(4), Some(AnimationId::Rainbow));
        assert_eq!(AnimationId::from_raw(19), Some(AnimationId::Matrix));
        assert_eq!(AnimationId::from_raw(20), None);
        assert_eq!(AnimationId::from_raw(u8::MAX), None);
    }

    #[test]
    fn test_names_round_trip() {
        for entry in &CATALOG {
            assert_eq!(AnimationId::parse_from_str(entry.id.as_str()), Some(entry.id));
        }
        assert_eq!(AnimationId::parse_from_str("lava_lamp"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id.as_str(), b.id.as_str());
            }
        }
    }

    #[test]
    fn test_as_str_power_cycle() {
        assert_eq!(AnimationId::PowerCycle.as_str(), "power_cycle");
        assert_eq!(AnimationId::from_raw(17), Some(AnimationId::PowerCycle));
    }
}
