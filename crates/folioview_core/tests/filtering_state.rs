use folioview_core::{
    Action, Effect, FocusTarget, InteractionState, Key, Theme, MOBILE_BREAKPOINT_PX,
};

/// Worked example: two projects, categories "web" and "design", with
/// only "all" and "web" declared as filters.
fn state_with_cards() -> InteractionState {
    let mut state = InteractionState::new(Theme::Light);
    state.set_cards(vec!["web".to_string(), "design".to_string()]);
    state
}

fn visibility(effects: &[Effect]) -> Vec<(usize, bool)> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::SetCardVisible { card, visible } => Some((*card, *visible)),
            _ => None,
        })
        .collect()
}

#[test]
fn selecting_web_shows_only_the_web_card() {
    let mut state = state_with_cards();
    let effects = state.dispatch(Action::SelectFilter("web".to_string()));

    assert_eq!(effects[0], Effect::MarkActiveFilter("web".to_string()));
    assert_eq!(visibility(&effects), vec![(0, true), (1, false)]);
    assert!(state.is_card_visible(0));
    assert!(!state.is_card_visible(1));
}

#[test]
fn selecting_all_shows_both_cards() {
    let mut state = state_with_cards();
    state.dispatch(Action::SelectFilter("web".to_string()));
    let effects = state.dispatch(Action::SelectFilter("all".to_string()));

    assert_eq!(visibility(&effects), vec![(0, true), (1, true)]);
}

#[test]
fn reselecting_the_active_filter_is_idempotent() {
    let mut state = state_with_cards();
    let first = state.dispatch(Action::SelectFilter("web".to_string()));
    let second = state.dispatch(Action::SelectFilter("web".to_string()));

    assert_eq!(visibility(&first), visibility(&second));
    assert_eq!(state.selection().active_filter, "web");
}

#[test]
fn selecting_a_filter_always_closes_the_menu() {
    let mut state = state_with_cards();

    // Menu closed: close effect still emitted, flag stays false.
    let effects = state.dispatch(Action::SelectFilter("web".to_string()));
    assert_eq!(effects.last(), Some(&Effect::CloseMenu));
    assert!(!state.selection().menu_open);

    // Menu open: selection forces it closed.
    state.dispatch(Action::ToggleMenu);
    assert!(state.selection().menu_open);
    let effects = state.dispatch(Action::SelectFilter("all".to_string()));
    assert_eq!(effects.last(), Some(&Effect::CloseMenu));
    assert!(!state.selection().menu_open);
}

#[test]
fn unknown_category_card_is_hidden_by_any_specific_filter() {
    let mut state = state_with_cards();

    // "design" is undeclared; selecting it still works mechanically,
    // and the orphaned card is only reachable under "all".
    state.dispatch(Action::SelectFilter("web".to_string()));
    assert!(!state.is_card_visible(1));
    state.dispatch(Action::SelectFilter("all".to_string()));
    assert!(state.is_card_visible(1));
}

#[test]
fn theme_toggle_is_an_involution() {
    let mut state = state_with_cards();

    let effects = state.dispatch(Action::ToggleTheme);
    assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Dark)]);
    assert_eq!(state.theme(), Theme::Dark);

    let effects = state.dispatch(Action::ToggleTheme);
    assert_eq!(effects, vec![Effect::ApplyTheme(Theme::Light)]);
    assert_eq!(state.theme(), Theme::Light);
}

#[test]
fn menu_toggle_flips_and_emits_markers() {
    let mut state = state_with_cards();

    assert_eq!(state.dispatch(Action::ToggleMenu), vec![Effect::OpenMenu]);
    assert!(state.selection().menu_open);
    assert_eq!(state.dispatch(Action::ToggleMenu), vec![Effect::CloseMenu]);
    assert!(!state.selection().menu_open);
}

#[test]
fn outside_click_closes_only_an_open_menu() {
    let mut state = state_with_cards();

    assert!(state.dispatch(Action::OutsideClick).is_empty());

    state.dispatch(Action::ToggleMenu);
    assert_eq!(
        state.dispatch(Action::OutsideClick),
        vec![Effect::CloseMenu]
    );
}

#[test]
fn resize_past_breakpoint_closes_an_open_menu() {
    let mut state = state_with_cards();
    state.dispatch(Action::ToggleMenu);

    // At the breakpoint: no close.
    assert!(state
        .dispatch(Action::Resize {
            width: MOBILE_BREAKPOINT_PX
        })
        .is_empty());
    assert!(state.selection().menu_open);

    // Past it: close.
    assert_eq!(
        state.dispatch(Action::Resize {
            width: MOBILE_BREAKPOINT_PX + 1
        }),
        vec![Effect::CloseMenu]
    );
    assert!(!state.selection().menu_open);
}

#[test]
fn escape_closes_only_an_open_menu() {
    let mut state = state_with_cards();

    assert!(state
        .dispatch(Action::Key {
            key: Key::Escape,
            focus: FocusTarget::Elsewhere
        })
        .is_empty());

    state.dispatch(Action::ToggleMenu);
    assert_eq!(
        state.dispatch(Action::Key {
            key: Key::Escape,
            focus: FocusTarget::Elsewhere
        }),
        vec![Effect::CloseMenu]
    );
}

#[test]
fn enter_and_space_activate_the_focused_control() {
    let mut state = state_with_cards();

    let effects = state.dispatch(Action::Key {
        key: Key::Enter,
        focus: FocusTarget::FilterButton("web".to_string()),
    });
    assert_eq!(effects[0], Effect::MarkActiveFilter("web".to_string()));
    assert_eq!(state.selection().active_filter, "web");

    let effects = state.dispatch(Action::Key {
        key: Key::Space,
        focus: FocusTarget::MenuToggle,
    });
    assert_eq!(effects, vec![Effect::OpenMenu]);
}

#[test]
fn keys_without_relevant_focus_do_nothing() {
    let mut state = state_with_cards();
    assert!(state
        .dispatch(Action::Key {
            key: Key::Enter,
            focus: FocusTarget::Elsewhere
        })
        .is_empty());
}

#[test]
fn navigation_effects_match_link_dispositions() {
    let mut state = state_with_cards();

    assert!(state
        .dispatch(Action::Navigate { href: "#".into() })
        .is_empty());
    assert!(state
        .dispatch(Action::Navigate { href: String::new() })
        .is_empty());
    assert_eq!(
        state.dispatch(Action::Navigate {
            href: "mailto:me@example.org".into()
        }),
        vec![Effect::NavigateCurrent("mailto:me@example.org".into())]
    );
    assert_eq!(
        state.dispatch(Action::Navigate {
            href: "https://example.org".into()
        }),
        vec![Effect::OpenNewContext("https://example.org".into())]
    );
    // Relative links fall through to default navigation.
    assert!(state
        .dispatch(Action::Navigate {
            href: "/about.html".into()
        })
        .is_empty());
}

#[test]
fn hover_lifts_visible_cards_and_skips_hidden_ones() {
    let mut state = state_with_cards();
    state.dispatch(Action::SelectFilter("web".to_string()));

    assert_eq!(
        state.dispatch(Action::HoverEnter { card: 0 }),
        vec![Effect::SetCardOffset {
            card: 0,
            offset_px: -4
        }]
    );
    assert!(state.dispatch(Action::HoverEnter { card: 1 }).is_empty());

    // Leave resets regardless of visibility.
    assert_eq!(
        state.dispatch(Action::HoverLeave { card: 1 }),
        vec![Effect::SetCardOffset {
            card: 1,
            offset_px: 0
        }]
    );
}

#[test]
fn visibility_change_toggles_the_page_hidden_marker() {
    let mut state = state_with_cards();
    assert_eq!(
        state.dispatch(Action::VisibilityChange { hidden: true }),
        vec![Effect::SetPageHidden(true)]
    );
    assert_eq!(
        state.dispatch(Action::VisibilityChange { hidden: false }),
        vec![Effect::SetPageHidden(false)]
    );
}
