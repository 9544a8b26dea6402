//! Tests for AppState transitions.

use super::*;
use crate::state::pagination::PageSize;
use crate::state::search_input_handler::{handle_backspace, handle_char_input};
use std::time::Duration;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item::new(ItemId::new(format!("id-{}", i)).unwrap(), format!("a{}", i)))
        .collect()
}

fn state(page_size: usize) -> AppState {
    AppState::new(ControllerSettings {
        page_size: PageSize::new(page_size).unwrap(),
        ..ControllerSettings::default()
    })
}

// ===== Initial state =====

#[test]
fn starts_in_search_focus_with_nothing_open() {
    let state = AppState::default();

    assert_eq!(state.focus, FocusPane::Search);
    assert!(!state.help_visible);
    assert!(!state.is_detail_open());
    assert_eq!(state.selected_index(), 0);
    assert_eq!(state.load_error(), None);
}

// ===== Search bar =====

#[test]
fn edit_search_routes_through_controller() {
    let t0 = Instant::now();
    let mut state = AppState::default();

    assert!(state.edit_search(|text| handle_char_input(text, 'a'), t0));
    assert!(state.edit_search(|text| handle_char_input(text, '1'), t0 + ms(50)));

    assert_eq!(state.search.raw_input(), "a1");
    assert!(state.search.is_debouncing());
}

#[test]
fn edit_search_without_change_does_not_restart_debounce() {
    let t0 = Instant::now();
    let mut state = AppState::default();

    assert!(!state.edit_search(handle_backspace, t0));
    assert!(!state.search.is_debouncing());
}

#[test]
fn search_escape_clears_text_then_leaves_bar() {
    let t0 = Instant::now();
    let mut state = AppState::default();
    state.edit_search(|text| handle_char_input(text, 'x'), t0);

    state.search_escape(t0);
    assert_eq!(state.search.raw_input(), "");
    assert_eq!(state.focus, FocusPane::Search);

    state.search_escape(t0);
    assert_eq!(state.focus, FocusPane::Grid);
}

#[test]
fn commit_resets_selection() {
    let t0 = Instant::now();
    let catalog = items(30);
    let mut state = state(16);
    state.focus_grid();
    state.handle_action(KeyAction::SelectNext, &catalog);
    state.handle_action(KeyAction::SelectNext, &catalog);
    assert_eq!(state.selected_index(), 2);

    state.edit_search(|_| "a1".to_string(), t0);
    assert!(state.tick(t0 + ms(500)));

    assert_eq!(state.selected_index(), 0);
}

// ===== Paging =====

#[test]
fn next_and_prev_page_move_within_bounds() {
    let catalog = items(40);
    let mut state = state(16);

    state.handle_action(KeyAction::NextPage, &catalog);
    assert_eq!(state.search.current_page(), 2);
    state.handle_action(KeyAction::NextPage, &catalog);
    assert_eq!(state.search.current_page(), 3);
    state.handle_action(KeyAction::NextPage, &catalog);
    assert_eq!(state.search.current_page(), 3, "No page 4");

    state.handle_action(KeyAction::PrevPage, &catalog);
    assert_eq!(state.search.current_page(), 2);
}

#[test]
fn prev_page_on_first_page_is_noop() {
    let catalog = items(40);
    let mut state = state(16);

    state.handle_action(KeyAction::PrevPage, &catalog);

    assert_eq!(state.search.current_page(), 1);
}

#[test]
fn first_and_last_page_jump() {
    let catalog = items(100);
    let mut state = state(16);

    state.handle_action(KeyAction::LastPage, &catalog);
    assert_eq!(state.search.current_page(), 7);

    state.handle_action(KeyAction::FirstPage, &catalog);
    assert_eq!(state.search.current_page(), 1);
}

#[test]
fn page_change_resets_selection() {
    let catalog = items(40);
    let mut state = state(16);
    state.handle_action(KeyAction::SelectNext, &catalog);

    state.handle_action(KeyAction::NextPage, &catalog);

    assert_eq!(state.selected_index(), 0);
}

#[test]
fn go_to_page_ignores_out_of_range_buttons() {
    let catalog = items(20);
    let mut state = state(16);

    state.go_to_page(&catalog, 0);
    state.go_to_page(&catalog, 5);

    assert_eq!(state.search.current_page(), 1);
}

// ===== Selection =====

#[test]
fn selection_clamps_to_last_row_of_partial_page() {
    let catalog = items(18);
    let mut state = state(16);
    state.handle_action(KeyAction::NextPage, &catalog);

    for _ in 0..10 {
        state.handle_action(KeyAction::SelectNext, &catalog);
    }

    assert_eq!(state.selected_index(), 1, "Page 2 holds two items");
}

#[test]
fn select_prev_saturates_at_first_row() {
    let catalog = items(5);
    let mut state = state(16);

    state.handle_action(KeyAction::SelectPrev, &catalog);

    assert_eq!(state.selected_index(), 0);
}

#[test]
fn selection_on_empty_page_is_none() {
    let state = state(16);
    let view = state.search.page_view(&[]);

    assert_eq!(state.clamped_selection(&view), None);
    assert_eq!(state.selected_item(&view), None);
}

// ===== Detail popup =====

#[test]
fn open_detail_targets_selected_item() {
    let catalog = items(5);
    let mut state = state(16);
    state.handle_action(KeyAction::SelectNext, &catalog);

    state.handle_action(KeyAction::OpenDetail, &catalog);

    assert_eq!(state.detail_target().map(ItemId::as_str), Some("id-1"));
}

#[test]
fn open_detail_on_empty_page_does_nothing() {
    let mut state = state(16);

    state.handle_action(KeyAction::OpenDetail, &[]);

    assert!(!state.is_detail_open());
}

#[test]
fn detail_swallows_navigation_and_closes_on_quit() {
    let catalog = items(40);
    let mut state = state(16);
    state.handle_action(KeyAction::OpenDetail, &catalog);

    assert!(!state.handle_action(KeyAction::NextPage, &catalog));
    assert_eq!(state.search.current_page(), 1, "Paging blocked under the popup");

    assert!(!state.handle_action(KeyAction::Quit, &catalog), "Quit closes popup first");
    assert!(!state.is_detail_open());
    assert!(state.handle_action(KeyAction::Quit, &catalog));
}

// ===== Help overlay =====

#[test]
fn help_blocks_other_actions_until_closed() {
    let catalog = items(40);
    let mut state = state(16);

    state.handle_action(KeyAction::Help, &catalog);
    assert!(state.help_visible);

    state.handle_action(KeyAction::NextPage, &catalog);
    assert_eq!(state.search.current_page(), 1);

    state.handle_action(KeyAction::CloseDetail, &catalog);
    assert!(!state.help_visible);
}

#[test]
fn focus_search_action_moves_focus() {
    let mut state = AppState::default();
    state.focus_grid();

    state.handle_action(KeyAction::FocusSearch, &[]);

    assert_eq!(state.focus, FocusPane::Search);
}

#[test]
fn load_error_is_recorded() {
    let mut state = AppState::default();

    state.set_load_error("bad json");

    assert_eq!(state.load_error(), Some("bad json"));
}
