// Property-based tests for the ring animation and the todo list
// Random inputs check the invariants hold beyond the fixed dashboard values

use proptest::prelude::*;
use progress_dashboard::models::calendar::CalendarStrip;
use progress_dashboard::models::todo::TodoList;
use progress_dashboard::services::ring_progress::{RingAnimation, RingGeometry};
use std::time::Duration;

proptest! {
    /// Property: at or after the duration every ring sits exactly on its target
    #[test]
    fn prop_animation_ends_on_target(
        target in 0.0f32..=1.0,
        duration_ms in 1u64..5_000,
        extra_ms in 0u64..5_000,
    ) {
        let animation = RingAnimation::new([target], Duration::from_millis(duration_ms));
        let fraction = animation.fraction_after(0, Duration::from_millis(duration_ms + extra_ms));
        prop_assert_eq!(fraction, target);
    }

    /// Property: fill never decreases over time and never overshoots
    #[test]
    fn prop_animation_is_monotonic(
        target in 0.0f32..=1.0,
        a in 0u64..3_000,
        b in 0u64..3_000,
    ) {
        let animation = RingAnimation::new([target], Duration::from_millis(1500));
        let (early, late) = if a <= b { (a, b) } else { (b, a) };
        let early = animation.fraction_after(0, Duration::from_millis(early));
        let late = animation.fraction_after(0, Duration::from_millis(late));
        prop_assert!(early <= late);
        prop_assert!(late <= target);
    }

    /// Property: dash offset always stays within [0, circumference]
    #[test]
    fn prop_dash_offset_in_range(index in 0usize..3, fraction in -1.0f32..2.0) {
        let geometry = RingGeometry::DASHBOARD;
        let offset = geometry.dash_offset(index, fraction);
        prop_assert!(offset >= 0.0);
        prop_assert!(offset <= geometry.circumference(index) + 1e-3);
    }

    /// Property: toggling any id twice restores the list
    #[test]
    fn prop_double_toggle_is_identity(id in 0u32..8) {
        let original = TodoList::daily_checklist();
        let mut list = original.clone();
        list.toggle(id);
        list.toggle(id);
        prop_assert_eq!(list, original);
    }

    /// Property: toggles never add, remove or duplicate items
    #[test]
    fn prop_toggles_keep_ids_unique(ids in proptest::collection::vec(0u32..8, 0..40)) {
        let mut list = TodoList::daily_checklist();
        for id in ids {
            list.toggle(id);
        }
        let mut seen: Vec<u32> = list.items().iter().map(|item| item.id).collect();
        prop_assert_eq!(seen.clone(), vec![1, 2, 3, 4]);
        seen.dedup();
        prop_assert_eq!(seen.len(), 4);
    }

    /// Property: a valid strip always has exactly one selected day
    #[test]
    fn prop_strip_has_single_selection(start in 1u32..25, pick in 0u32..7) {
        let days: Vec<u32> = (start..start + 7).collect();
        let strip = CalendarStrip::new(&days, start + pick).unwrap();
        prop_assert_eq!(strip.days().iter().filter(|d| d.is_selected).count(), 1);
    }
}
