mod support;

use proptest::prelude::*;
use support::{masked, Harness};
use text_field::{FieldOptions, Mask, Notification};

proptest! {
    #[test]
    fn blur_change_tracks_session_difference(
        initial in proptest::option::of("[a-z]{0,6}"),
        edits in proptest::collection::vec("[a-z]{0,6}", 0..6),
    ) {
        let mut h = Harness::new(FieldOptions::default(), initial.as_deref());
        h.focus();
        for edit in &edits {
            h.type_text(edit);
        }
        h.blur_to_sibling();

        let current = edits.last().cloned().or(initial.clone());
        let changes: Vec<_> = h
            .drain()
            .into_iter()
            .filter(|n| matches!(n, Notification::Change(_)))
            .collect();
        if current == initial {
            prop_assert!(changes.is_empty());
        } else {
            prop_assert_eq!(changes, vec![Notification::Change(current)]);
        }
    }

    #[test]
    fn unmasked_input_is_echoed_once_per_event(
        edits in proptest::collection::vec("[ -~]{0,8}", 1..8),
    ) {
        let mut h = Harness::new(FieldOptions::default(), None);
        h.focus();
        h.drain();
        for edit in &edits {
            h.type_text(edit);
        }
        let expected: Vec<_> = edits
            .iter()
            .map(|edit| Notification::Input(Some(edit.clone())))
            .collect();
        prop_assert_eq!(h.drain(), expected);
    }

    #[test]
    fn masked_input_is_echoed_once_per_event(
        initial in proptest::option::of("[0-9]{0,10}"),
        edits in proptest::collection::vec("[0-9a-z() -]{0,16}", 1..8),
    ) {
        let mut h = Harness::new(masked("(###) ###-####"), initial.as_deref());
        h.focus();
        h.drain();
        for edit in &edits {
            h.type_text(edit);
            h.tick();
            let inputs = h
                .drain()
                .into_iter()
                .filter(|n| matches!(n, Notification::Input(_)))
                .count();
            prop_assert_eq!(inputs, 1);
        }
    }

    #[test]
    fn masked_native_text_settles_on_display(
        edits in proptest::collection::vec("[0-9a-z() -]{0,16}", 1..6),
    ) {
        let pattern = "(###) ###-####";
        let mask = Mask::parse(pattern).unwrap();
        let mut h = Harness::new(masked(pattern), None);
        h.focus();
        for edit in &edits {
            h.type_text(edit);
            h.tick();
            let raw = h.field.raw_value().unwrap_or_default().to_string();
            prop_assert_eq!(h.field.native_text(), mask.mask(&raw));
            prop_assert!(h.field.caret() <= h.field.native_text().chars().count());
        }
    }

    #[test]
    fn host_echo_never_loops(value in "[0-9]{0,10}") {
        let mut h = Harness::new(masked("(###) ###-####"), None);
        h.field.set_external(Some(&value));
        h.tick();
        let echoed = h.drain();
        prop_assert!(echoed.is_empty());

        // Canonical digits round-trip without a resync.
        h.field.set_external(h.field.raw_value().map(str::to_string).as_deref());
        prop_assert!(!h.tick());
    }
}
