//! Edge case and boundary condition tests
//!
//! Malformed option lists, degenerate placeholder options and JSON option
//! files as read by the gallery.

use trellis_core::switch::{OptionSlot, OptionValue, SwitchOption, SwitchOptions, SwitchState};
use trellis_core::{FieldStatus, TrellisError};

// ============================================================================
// Option Validation
// ============================================================================

#[test]
fn test_short_option_lists_rejected() {
    for len in 0..2 {
        let options: Vec<SwitchOption> = (0..len).map(|i| SwitchOption::new("x", i as i64)).collect();
        assert_eq!(
            SwitchOptions::try_from(options),
            Err(TrellisError::TooFewOptions(len))
        );
    }
}

#[test]
fn test_long_option_lists_rejected() {
    let options: Vec<SwitchOption> = (0..5i64).map(|i| SwitchOption::new("x", i)).collect();
    assert_eq!(
        SwitchOptions::try_from(options),
        Err(TrellisError::TooManyOptions(5))
    );
}

#[test]
fn test_duplicate_values_rejected_even_with_distinct_names() {
    let result = SwitchOptions::try_from(vec![
        SwitchOption::new("On", "1"),
        SwitchOption::new("Enabled", "1"),
    ]);
    assert!(matches!(result, Err(TrellisError::DuplicateOptionValue(ref v)) if v == "1"));
}

#[test]
fn test_text_and_numeric_values_are_distinct() {
    let options = SwitchOptions::new(SwitchOption::new("A", "1"), SwitchOption::new("B", 1))
        .expect("text and number differ");
    assert_eq!(options.slot_of(&OptionValue::Number(1)), Some(OptionSlot::Second));
}

// ============================================================================
// Placeholder Options
// ============================================================================

#[test]
fn test_placeholder_options_start_unselected() {
    let options = SwitchOptions::default();
    let state = SwitchState::new(None);
    assert_eq!(state.active_slot(&options), None);
}

#[test]
fn test_placeholder_options_click_second_resolves_first() {
    let options = SwitchOptions::default();
    let mut state = SwitchState::new(None);

    let transition = state.select(&options, OptionSlot::Second);

    assert_eq!(transition.switched, Some(OptionValue::default()));
    assert_eq!(state.active_slot(&options), Some(OptionSlot::First));
}

// ============================================================================
// JSON Option Files
// ============================================================================

#[test]
fn test_options_from_json() {
    let json = r#"[{"name": "Monthly", "value": "month"}, {"name": "Yearly", "value": 12}]"#;
    let list: Vec<SwitchOption> = serde_json::from_str(json).unwrap();
    let options = SwitchOptions::try_from(list).unwrap();

    assert_eq!(options.first().value, OptionValue::Text("month".into()));
    assert_eq!(options.second().value, OptionValue::Number(12));
}

#[test]
fn test_options_json_roundtrip_keeps_value_kinds() {
    let option = SwitchOption::new("Seven", 7);
    let json = serde_json::to_string(&option).unwrap();
    assert_eq!(json, r#"{"name":"Seven","value":7}"#);
}

#[test]
fn test_single_option_json_rejected() {
    let list: Vec<SwitchOption> = serde_json::from_str(r#"[{"name": "Only", "value": "x"}]"#).unwrap();
    assert_eq!(SwitchOptions::try_from(list), Err(TrellisError::TooFewOptions(1)));
}

// ============================================================================
// Field Status Text
// ============================================================================

#[test]
fn test_status_text_fallback() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    assert_eq!(FieldStatus::parse_lenient("VALID"), FieldStatus::Valid);
    assert_eq!(FieldStatus::parse_lenient("pending"), FieldStatus::Default);
}
