use super::*;

// =============================================================
// classify
// =============================================================

#[test]
fn classify_boolean_marker_selects_switch() {
    assert_eq!(
        ControlKind::classify(&["required", "boolean"]),
        ControlKind::Boolean { string_mode: false }
    );
}

#[test]
fn classify_every_boolean_marker() {
    for marker in BOOLEAN_MARKERS {
        assert!(
            matches!(ControlKind::classify(&[marker]), ControlKind::Boolean { .. }),
            "{marker} should classify as boolean"
        );
    }
}

#[test]
fn classify_string_rule_enables_string_mode_in_any_order() {
    assert_eq!(
        ControlKind::classify(&["string", "boolean"]),
        ControlKind::Boolean { string_mode: true }
    );
    assert_eq!(
        ControlKind::classify(&["in:true,false", "string"]),
        ControlKind::Boolean { string_mode: true }
    );
}

#[test]
fn classify_boolean_takes_precedence_over_in_list() {
    assert_eq!(
        ControlKind::classify(&["in:a,b", "in:0,1"]),
        ControlKind::Boolean { string_mode: false }
    );
}

#[test]
fn classify_in_list_selects_enumerated_with_ordered_options() {
    assert_eq!(
        ControlKind::classify(&["required", "in:red,green,blue"]),
        ControlKind::Enumerated {
            options: vec!["red".to_owned(), "green".to_owned(), "blue".to_owned()],
        }
    );
}

#[test]
fn classify_uses_first_in_rule() {
    let kind = ControlKind::classify(&["in:a,b", "in:c,d,e"]);
    assert_eq!(
        kind,
        ControlKind::Enumerated {
            options: vec!["a".to_owned(), "b".to_owned()],
        }
    );
}

#[test]
fn classify_option_count_matches_literal_count() {
    let kind = ControlKind::classify(&["in:1.20,1.19,1.18,1.17"]);
    let ControlKind::Enumerated { options } = kind else {
        panic!("expected enumerated");
    };
    assert_eq!(options.len(), 4);
}

#[test]
fn classify_in_marker_that_is_not_a_boolean_pair_stays_enumerated() {
    assert_eq!(
        ControlKind::classify(&["in:0,1,2"]),
        ControlKind::Enumerated {
            options: vec!["0".to_owned(), "1".to_owned(), "2".to_owned()],
        }
    );
}

#[test]
fn classify_falls_back_to_text() {
    assert_eq!(ControlKind::classify(&["required", "string", "max:20"]), ControlKind::Text);
    assert_eq!(ControlKind::classify::<&str>(&[]), ControlKind::Text);
}

#[test]
fn classify_does_not_match_in_inside_other_rules() {
    assert_eq!(ControlKind::classify(&["regex:/^in:/"]), ControlKind::Text);
}

// =============================================================
// toggle values
// =============================================================

#[test]
fn numeric_switch_toggles_between_one_and_zero() {
    let kind = ControlKind::Boolean { string_mode: false };
    assert!(kind.is_checked("1"));
    assert!(!kind.is_checked("true"));
    assert_eq!(kind.toggled_value("1"), Some("0"));
    assert_eq!(kind.toggled_value("0"), Some("1"));
    assert_eq!(kind.toggled_value(""), Some("1"));
}

#[test]
fn string_switch_toggles_between_true_and_false() {
    let kind = ControlKind::Boolean { string_mode: true };
    assert!(kind.is_checked("true"));
    assert!(!kind.is_checked("1"));
    assert_eq!(kind.toggled_value("false"), Some("true"));
    assert_eq!(kind.toggled_value("true"), Some("false"));
}

#[test]
fn non_boolean_kinds_have_no_toggle() {
    assert_eq!(ControlKind::Text.toggled_value("1"), None);
    assert!(!ControlKind::Text.is_checked("1"));
}

// =============================================================
// EditEvent
// =============================================================

#[test]
fn toggle_event_sends_opposite_of_rendered_state() {
    let kind = ControlKind::classify(&["boolean"]);
    assert_eq!(EditEvent::Toggle.submission_value(&kind, "1"), Some("0".to_owned()));

    let kind = ControlKind::classify(&["string", "in:true,false"]);
    assert_eq!(EditEvent::Toggle.submission_value(&kind, "false"), Some("true".to_owned()));
}

#[test]
fn select_and_input_events_send_raw_value() {
    let kind = ControlKind::classify(&["in:red,green,blue"]);
    assert_eq!(
        EditEvent::Select("green".to_owned()).submission_value(&kind, "red"),
        Some("green".to_owned())
    );
    assert_eq!(
        EditEvent::Input(" spaced ".to_owned()).submission_value(&ControlKind::Text, ""),
        Some(" spaced ".to_owned())
    );
}

#[test]
fn toggle_event_on_text_control_is_ignored() {
    assert_eq!(EditEvent::Toggle.submission_value(&ControlKind::Text, "1"), None);
}
