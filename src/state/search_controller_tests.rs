//! Tests for SearchController.

use super::*;
use crate::model::ItemId;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn catalog(names: impl IntoIterator<Item = String>) -> Vec<Item> {
    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| Item::new(ItemId::new(format!("id-{}", i)).unwrap(), name))
        .collect()
}

/// "a0".."a29"
fn thirty_items() -> Vec<Item> {
    catalog((0..30).map(|i| format!("a{}", i)))
}

fn settings(page_size: usize) -> ControllerSettings {
    ControllerSettings {
        page_size: PageSize::new(page_size).unwrap(),
        ..ControllerSettings::default()
    }
}

fn slice_names<'a>(view: &PageView<'a>) -> Vec<&'a str> {
    view.page_slice.iter().map(|item| item.name()).collect()
}

// ===== Construction =====

#[test]
fn new_controller_is_idle_on_page_one() {
    let controller = SearchController::default();

    assert_eq!(controller.raw_input(), "");
    assert_eq!(controller.committed_term(), "");
    assert_eq!(controller.current_page(), 1);
    assert_eq!(controller.mode(), SearchMode::Idle);
    assert!(!controller.is_debouncing());
}

#[test]
fn default_settings_match_catalog_defaults() {
    let settings = ControllerSettings::default();

    assert_eq!(settings.page_size.get(), 16);
    assert_eq!(settings.debounce_delay, ms(500));
    assert_eq!(settings.max_visible_pages, 10);
    assert!(settings.show_page_numbers);
}

#[test]
fn initial_term_is_committed_without_debounce() {
    let controller = SearchController::with_initial_term(settings(16), "a1");

    assert_eq!(controller.raw_input(), "a1");
    assert_eq!(controller.committed_term(), "a1");
    assert_eq!(controller.mode(), SearchMode::Filtering);
    assert!(!controller.is_debouncing());
}

// ===== Typing and debounce =====

#[test]
fn typing_echoes_immediately_but_commits_after_quiet_period() {
    let t0 = Instant::now();
    let mut controller = SearchController::default();

    controller.on_input_change("pika", t0);

    assert_eq!(controller.raw_input(), "pika");
    assert_eq!(controller.committed_term(), "", "Not committed during debounce");
    assert_eq!(controller.next_deadline(), Some(t0 + ms(500)));

    assert!(!controller.tick(t0 + ms(499)));
    assert!(controller.tick(t0 + ms(500)));
    assert_eq!(controller.committed_term(), "pika");
    assert_eq!(controller.mode(), SearchMode::Filtering);
}

#[test]
fn rapid_typing_commits_latest_value_once() {
    let t0 = Instant::now();
    let mut controller = SearchController::default();

    controller.on_input_change("p", t0);
    controller.on_input_change("pi", t0 + ms(100));
    controller.on_input_change("pik", t0 + ms(150));

    assert!(!controller.tick(t0 + ms(600)), "Superseded deadlines never fire");
    assert!(controller.tick(t0 + ms(650)));
    assert_eq!(controller.committed_term(), "pik");
    assert!(!controller.tick(t0 + ms(2_000)));
}

#[test]
fn clearing_input_returns_to_idle() {
    let t0 = Instant::now();
    let mut controller = SearchController::with_initial_term(settings(16), "abc");

    controller.on_input_change("", t0);
    controller.tick(t0 + ms(500));

    assert_eq!(controller.mode(), SearchMode::Idle);
}

#[test]
fn committing_same_term_does_not_reset_page() {
    let t0 = Instant::now();
    let mut controller = SearchController::default();
    controller.on_page_change(3);

    controller.on_input_change("x", t0);
    controller.on_input_change("", t0 + ms(10));

    assert!(!controller.tick(t0 + ms(510)), "Empty term equals committed term");
    assert_eq!(controller.current_page(), 3);
}

#[test]
fn teardown_cancels_pending_commit() {
    let t0 = Instant::now();
    let mut controller = SearchController::default();
    controller.on_input_change("mew", t0);

    controller.teardown();

    assert!(!controller.is_debouncing());
    assert!(!controller.tick(t0 + ms(1_000)));
    assert_eq!(controller.committed_term(), "");
    assert_eq!(controller.raw_input(), "mew", "Echoed text is kept");
}

// ===== Page changes =====

#[test]
fn page_change_to_current_page_is_noop() {
    let mut controller = SearchController::default();

    assert!(!controller.on_page_change(1));
    assert!(controller.on_page_change(2));
    assert!(!controller.on_page_change(2));
    assert_eq!(controller.current_page(), 2);
}

#[test]
fn page_change_to_zero_is_stored_as_one() {
    let mut controller = SearchController::default();
    controller.on_page_change(4);

    assert!(controller.on_page_change(0));
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn out_of_range_page_is_clamped_in_view() {
    let items = thirty_items();
    let mut controller = SearchController::new(settings(16));
    controller.on_page_change(9);

    let view = controller.page_view(&items);

    assert_eq!(view.clamped_page, 2);
    assert_eq!(controller.current_page(), 9, "Stored request is untouched");
    assert_eq!(controller.page_bounds(&items), (2, 2));
}

// ===== Page reset scenario =====

#[test]
fn committed_term_change_resets_to_first_page() {
    let t0 = Instant::now();
    let items = thirty_items();
    let mut controller = SearchController::new(settings(16));

    controller.on_page_change(2);
    let before = controller.page_view(&items);
    assert_eq!(before.clamped_page, 2);
    assert_eq!(before.total_pages, 2);
    assert_eq!(slice_names(&before), (16..30).map(|i| format!("a{}", i)).collect::<Vec<_>>());

    controller.on_input_change("a1", t0);
    assert!(controller.tick(t0 + ms(500)));

    assert_eq!(controller.current_page(), 1);
    let after = controller.page_view(&items);
    assert_eq!(after.clamped_page, 1);
    assert_eq!(after.total_pages, 1);
    assert_eq!(after.match_count, 11);
    assert_eq!(
        slice_names(&after),
        vec!["a1", "a10", "a11", "a12", "a13", "a14", "a15", "a16", "a17", "a18", "a19"]
    );
}

#[test]
fn page_survives_typing_until_commit() {
    let t0 = Instant::now();
    let items = thirty_items();
    let mut controller = SearchController::new(settings(16));
    controller.on_page_change(2);

    controller.on_input_change("a2", t0);
    let during = controller.page_view(&items);

    assert_eq!(during.raw_input, "a2");
    assert_eq!(during.committed_term, "");
    assert_eq!(during.clamped_page, 2, "Filter has not changed yet");
}

// ===== view() and loading =====

#[test]
fn loading_snapshot_suspends_pipeline_but_keeps_state() {
    let t0 = Instant::now();
    let mut controller = SearchController::new(settings(16));
    controller.on_input_change("a2", t0);
    controller.tick(t0 + ms(500));
    controller.on_page_change(3);

    let loading = CatalogSnapshot::loading();
    assert_eq!(controller.view(&loading), CatalogView::Loading { raw_input: "a2" });

    let loaded = CatalogSnapshot::loaded(thirty_items());
    match controller.view(&loaded) {
        CatalogView::Ready(view) => {
            assert_eq!(view.committed_term, "a2");
            assert_eq!(view.match_count, 11, "a2 and a20..a29");
            assert_eq!(view.clamped_page, 1);
        }
        other => panic!("Expected Ready view, got {:?}", other),
    }
}

#[test]
fn empty_catalog_yields_no_pages() {
    let controller = SearchController::default();

    let view = controller.page_view(&[]);

    assert!(view.is_empty());
    assert_eq!(view.total_pages, 0);
    assert_eq!(view.clamped_page, 1);
    assert!(view.page_slice.is_empty());
    assert!(view.visible_page_numbers.is_empty());
    assert!(view.page_controls.is_empty());
}

#[test]
fn view_carries_visible_window_and_controls() {
    let items = catalog((0..200).map(|i| format!("item{}", i)));
    let mut controller = SearchController::new(ControllerSettings {
        page_size: PageSize::new(10).unwrap(),
        max_visible_pages: 5,
        ..ControllerSettings::default()
    });
    controller.on_page_change(10);

    let view = controller.page_view(&items);

    assert_eq!(view.total_pages, 20);
    assert_eq!(view.visible_page_numbers, vec![8, 9, 10, 11, 12]);
    assert_eq!(view.page_controls.first(), Some(&PageControl::Prev { enabled: true }));
}
