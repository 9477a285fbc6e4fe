//! Property tests for template normalization and rendering.

use dumb_templates::{escape, inj, join, unsafe_inj, Fragment, Segment, Template};
use proptest::prelude::*;
use std::collections::HashMap;

fn fragment() -> impl Strategy<Value = Fragment> {
    prop_oneof![
        "[a-z<>'\" ]{0,6}".prop_map(Fragment::Text),
        "[abc]".prop_map(|key| inj(key)),
        "[abc]".prop_map(|key| unsafe_inj(key)),
        Just(Fragment::Nothing),
    ]
}

fn template() -> impl Strategy<Value = Template> {
    prop::collection::vec(fragment(), 0..8).prop_map(|fragments| Template::new(fragments))
}

fn full_data() -> impl Strategy<Value = HashMap<String, String>> {
    ("[a-z<>]{0,4}", "[a-z<>]{0,4}", "[a-z<>]{0,4}").prop_map(|(a, b, c)| {
        HashMap::from([("a".to_string(), a), ("b".to_string(), b), ("c".to_string(), c)])
    })
}

proptest! {
    #[test]
    fn prop_join_renders_like_concatenation(a in template(), b in template(), data in full_data()) {
        let joined = join([&a, &b]).render(&data).unwrap();
        let separate = format!("{}{}", a.render(&data).unwrap(), b.render(&data).unwrap());
        prop_assert_eq!(joined, separate);
    }

    #[test]
    fn prop_literals_render_as_concatenation(parts in prop::collection::vec("[a-z<>]{0,5}", 0..6)) {
        let t = Template::new(parts.iter().map(String::as_str));
        prop_assert_eq!(t.render(&()).unwrap(), parts.concat());
    }

    #[test]
    fn prop_no_adjacent_literals(t in template()) {
        let adjacent = t.segments().windows(2).any(|pair| {
            matches!(pair, [Segment::Literal { .. }, Segment::Literal { .. }])
        });
        prop_assert!(!adjacent);
    }

    #[test]
    fn prop_join_keeps_normalization(a in template(), b in template()) {
        let joined = join([&a, &b]);
        let adjacent = joined.segments().windows(2).any(|pair| {
            matches!(pair, [Segment::Literal { .. }, Segment::Literal { .. }])
        });
        prop_assert!(!adjacent);
    }

    #[test]
    fn prop_escape_removes_markup_characters(text in ".{0,32}") {
        let escaped = escape(&text);
        prop_assert!(!escaped.contains(|c: char| matches!(c, '<' | '>' | '"' | '\'')));
    }

    #[test]
    fn prop_escaped_injection_matches_escape(value in "[a-z<>'\"]{0,8}") {
        let t = Template::new([inj("v")]);
        prop_assert_eq!(t.render(&[("v", value.as_str())]).unwrap(), escape(&value));
    }

    #[test]
    fn prop_missing_key_yields_error(t in template()) {
        let keys: Vec<String> = t.injection_keys().map(str::to_string).collect();
        let result = t.render(&());
        prop_assert_eq!(result.is_err(), !keys.is_empty());
    }
}
