//! Format round-trips: wrap, unwrap and query through the public API

use richtext_wasm::converters::{parse_markup, to_markup};
use richtext_wasm::structure::{format_range, formats_in_range, has_format_in_range, unwrap_tag};
use richtext_wasm::text::{project_text, text_len};
use richtext_wasm::{Document, EditError};

fn abc_def_ghi() -> Document {
    parse_markup("abc<b>def</b>ghi").unwrap()
}

#[test]
fn test_projection_ignores_nesting_depth() {
    let flat = parse_markup("abcdef").unwrap();
    let nested = parse_markup("<p><b>a<i>b<u>c</u></i></b>d</p><span>e</span>f").unwrap();

    assert_eq!(project_text(&flat), project_text(&nested));
    assert_eq!(text_len(&nested), 6);
}

#[test]
fn test_wrap_then_unwrap_restores_projection() {
    let markups = [
        "abc<b>def</b>ghi",
        "<p><b>ab<i>cd</i></b>ef</p>",
        "one <i>two</i> three",
    ];

    for markup in markups {
        let original = parse_markup(markup).unwrap();
        let len = text_len(&original);

        for start in 0..len {
            for end in start + 1..=len {
                let mut doc = original.clone();
                format_range(&mut doc, start, end, "mark").unwrap();
                assert_eq!(project_text(&doc), project_text(&original));
                assert_eq!(doc.elements_by_tag("mark").len(), 1, "{} {}..{}", markup, start, end);

                let report = unwrap_tag(&mut doc, start, end, "mark");
                assert_eq!(report.unwrapped, 1);
                assert!(doc.elements_by_tag("mark").is_empty());
                assert_eq!(project_text(&doc), project_text(&original));
            }
        }
    }
}

#[test]
fn test_zero_width_wrap_keeps_projection() {
    let original = parse_markup("<p><b>ab<i>cd</i></b>ef</p>").unwrap();

    for k in 0..=text_len(&original) + 1 {
        let mut doc = original.clone();
        let _ = format_range(&mut doc, k, k, "b");
        assert_eq!(project_text(&doc), "abcdef");
        assert_eq!(doc, original);
    }
}

#[test]
fn test_remove_format_intersecting_range() {
    let mut doc = abc_def_ghi();
    unwrap_tag(&mut doc, 4, 5, "b");

    assert_eq!(project_text(&doc), "abcdefghi");
    assert!(doc.elements_by_tag("b").is_empty());
}

#[test]
fn test_remove_format_touching_range() {
    let mut doc = abc_def_ghi();
    let report = unwrap_tag(&mut doc, 6, 9, "b");

    assert_eq!(report.unwrapped, 0);
    assert_eq!(to_markup(&doc), "abc<b>def</b>ghi");
}

#[test]
fn test_remove_format_several_elements() {
    let mut doc = parse_markup("<b>a</b>b<b>c<i>d</i></b>e<b>f</b>").unwrap();
    let report = unwrap_tag(&mut doc, 0, 4, "b");

    assert_eq!(report.unwrapped, 2);
    assert_eq!(to_markup(&doc), "abcde<b>f</b>");
}

#[test]
fn test_query_format_scenario() {
    let doc = parse_markup("<i>hi</i> there").unwrap();

    assert_eq!(project_text(&doc), "hi there");
    assert!(has_format_in_range(&doc, 0, 2, "i"));
    assert!(!has_format_in_range(&doc, 3, 8, "i"));
}

#[test]
fn test_active_formats() {
    let doc = parse_markup("a<b>b<i>c</i></b><u>d</u>").unwrap();

    assert_eq!(formats_in_range(&doc, 2, 4), vec!["b", "i", "u"]);
    assert_eq!(formats_in_range(&doc, 0, 1), Vec::<String>::new());
}

#[test]
fn test_format_out_of_range_is_reported() {
    let mut doc = abc_def_ghi();
    let result = format_range(&mut doc, 8, 12, "b");

    assert_eq!(
        result,
        Err(EditError::RangeUnresolved { start: 8, end: 12, len: 9 })
    );
    assert_eq!(to_markup(&doc), "abc<b>def</b>ghi");
}

#[test]
fn test_overlapping_formats_then_query() {
    let mut doc = parse_markup("hello world").unwrap();
    format_range(&mut doc, 0, 7, "b").unwrap();
    format_range(&mut doc, 3, 11, "i").unwrap();

    assert_eq!(project_text(&doc), "hello world");
    assert!(has_format_in_range(&doc, 0, 1, "b"));
    assert!(!has_format_in_range(&doc, 0, 3, "i"));
    assert!(has_format_in_range(&doc, 8, 9, "i"));
    assert!(!has_format_in_range(&doc, 8, 9, "b"));
}
