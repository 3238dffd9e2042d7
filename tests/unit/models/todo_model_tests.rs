// Unit tests for the todo and ring models
// Parameterized over every item of the interactive checklist

use pretty_assertions::assert_eq;
use progress_dashboard::models::ring::{RingCategory, RingValue};
use progress_dashboard::models::todo::{TodoItem, TodoList};
use test_case::test_case;

#[test_case(1, false; "walk starts open")]
#[test_case(2, true; "meditation starts done")]
#[test_case(3, false; "water starts open")]
#[test_case(4, false; "reading starts open")]
fn test_initial_completion(id: u32, expected: bool) {
    let list = TodoList::daily_checklist();
    assert_eq!(list.get(id).map(|item| item.completed), Some(expected));
}

#[test_case(1; "first item")]
#[test_case(2; "completed item")]
#[test_case(4; "last item")]
fn test_toggle_only_touches_one_item(id: u32) {
    let original = TodoList::daily_checklist();
    let mut list = original.clone();
    assert!(list.toggle(id));

    for (before, after) in original.items().iter().zip(list.items()) {
        if before.id == id {
            assert_eq!(after.completed, !before.completed);
        } else {
            assert_eq!(after, before);
        }
    }
}

#[test]
fn test_toggle_preserves_order_and_text() {
    let mut list = TodoList::daily_checklist();
    list.toggle(1);
    list.toggle(3);
    let texts: Vec<&str> = list.items().iter().map(|item| item.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "동대구시장까지 1시간 산책하기",
            "자기 전 30분 명상하기",
            "물 8잔 마시기",
            "30분 독서하기",
        ]
    );
    assert_eq!(list.completed_count(), 3);
}

#[test]
fn test_item_builder() {
    let item = TodoItem::new(7, "stretch").completed();
    assert_eq!(item.id, 7);
    assert!(item.completed);
}

#[test_case(RingCategory::Urgent, 0.75; "urgent")]
#[test_case(RingCategory::Routine, 0.45; "routine")]
#[test_case(RingCategory::Finished, 0.25; "finished")]
fn test_ring_targets(category: RingCategory, expected: f32) {
    let ring = RingValue::dashboard_defaults()
        .into_iter()
        .find(|ring| ring.category == category)
        .unwrap();
    assert_eq!(ring.target_fraction, expected);
}
