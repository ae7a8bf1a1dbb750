//! Property-based tests for the toggle switch state machine
//!
//! Uses proptest to check invariants over random event sequences.

use proptest::prelude::*;
use trellis_core::switch::{OptionSlot, OptionValue, SwitchOption, SwitchOptions, SwitchState, SwitchView};
use trellis_core::ClassList;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Events a user or parent component can produce
#[derive(Debug, Clone)]
enum SwitchEvent {
    Click(OptionSlot),
    Key(&'static str),
    Hover(OptionSlot),
    Leave,
    External(Option<usize>),
}

fn slot_strategy() -> impl Strategy<Value = OptionSlot> {
    prop_oneof![Just(OptionSlot::First), Just(OptionSlot::Second)]
}

fn event_strategy() -> impl Strategy<Value = SwitchEvent> {
    prop_oneof![
        3 => slot_strategy().prop_map(SwitchEvent::Click),
        2 => prop::sample::select(vec!["Enter", " ", "Spacebar", "Tab", "a"]).prop_map(SwitchEvent::Key),
        2 => slot_strategy().prop_map(SwitchEvent::Hover),
        1 => Just(SwitchEvent::Leave),
        1 => prop::option::of(0..2usize).prop_map(SwitchEvent::External),
    ]
}

/// Two options with distinct values, text or numeric
fn options_strategy() -> impl Strategy<Value = SwitchOptions> {
    prop_oneof![
        ("[a-z]{1,8}", "[a-z]{1,8}")
            .prop_filter("distinct", |(a, b)| a != b)
            .prop_map(|(a, b)| (OptionValue::from(a), OptionValue::from(b))),
        (any::<i64>(), any::<i64>())
            .prop_filter("distinct", |(a, b)| a != b)
            .prop_map(|(a, b)| (OptionValue::from(a), OptionValue::from(b))),
    ]
    .prop_map(|(a, b)| {
        SwitchOptions::new(SwitchOption::new("first", a), SwitchOption::new("second", b))
            .expect("distinct values")
    })
}

fn external_value(options: &SwitchOptions, index: Option<usize>) -> Option<OptionValue> {
    index.map(|i| {
        let slot = if i == 0 { OptionSlot::First } else { OptionSlot::Second };
        options.get(slot).value.clone()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Once anything switched, exactly one option stays active
    #[test]
    fn exactly_one_active_after_switch(
        options in options_strategy(),
        events in prop::collection::vec(event_strategy(), 1..40),
    ) {
        let mut state = SwitchState::new(None);
        let mut switched = false;

        for event in events {
            match event {
                SwitchEvent::Click(slot) => switched |= state.select(&options, slot).switched.is_some(),
                SwitchEvent::Key(key) => switched |= state.toggle_by_key(&options, key).switched.is_some(),
                SwitchEvent::Hover(slot) => state.hover(slot),
                SwitchEvent::Leave => state.leave(),
                SwitchEvent::External(index) => {
                    let value = external_value(&options, index);
                    switched |= state.sync_external(value.as_ref());
                }
            }

            let view = SwitchView::build(&options, &state, None);
            if switched {
                prop_assert_eq!(view.active_count(), 1);
                prop_assert!(!view.show_border);
            } else {
                prop_assert_eq!(view.active_count(), 0);
                prop_assert!(view.show_border);
            }
        }
    }

    /// Hovering and leaving never change the active option or report a switch
    #[test]
    fn hover_never_selects(
        options in options_strategy(),
        hovers in prop::collection::vec(prop::option::of(slot_strategy()), 0..20),
        initial in prop::option::of(0..2usize),
    ) {
        let mut state = SwitchState::new(external_value(&options, initial));
        let before = state.active().cloned();

        for hover in hovers {
            match hover {
                Some(slot) => state.hover(slot),
                None => state.leave(),
            }
            prop_assert_eq!(state.active().cloned(), before.clone());
        }
    }

    /// Every toggle key flips to the other option and focuses it
    #[test]
    fn key_toggle_alternates(options in options_strategy(), presses in 1..10usize) {
        let mut state = SwitchState::new(Some(options.first().value.clone()));
        let mut expected = OptionSlot::First;

        for _ in 0..presses {
            expected = expected.other();
            let transition = state.toggle_by_key(&options, "Enter");
            prop_assert_eq!(transition.focus, Some(expected));
            prop_assert_eq!(transition.switched.as_ref(), Some(&options.get(expected).value));
        }
    }

    /// Joined class strings never carry empty entries
    #[test]
    fn class_list_has_no_blank_entries(parts in prop::collection::vec("[ a-z]{0,6}", 0..10)) {
        let classes = parts.iter().fold(ClassList::new(), |acc, p| acc.add(p));
        let rendered = classes.to_string();
        prop_assert!(!rendered.starts_with(' '));
        prop_assert!(!rendered.ends_with(' '));
        prop_assert!(classes.iter().all(|c| !c.is_empty()));
    }
}
