//! Search and highlight behaviour across container boundaries

use richtext_wasm::converters::{parse_markup, to_markup};
use richtext_wasm::search::{clear_highlights, find_occurrences, highlight_occurrences};
use richtext_wasm::text::project_text;
use richtext_wasm::{Document, Node, TextRange};

#[test]
fn test_highlight_and_clear_scenario() {
    let mut doc = Document::from_text("the cat sat");

    let report = highlight_occurrences(&mut doc, "at", "hl").unwrap();
    assert_eq!(report.applied, 2);
    assert_eq!(
        find_occurrences(&doc, "at"),
        vec![TextRange::new(5, 7), TextRange::new(9, 11)]
    );
    assert_eq!(doc.elements_by_class("hl").len(), 2);

    clear_highlights(&mut doc, "hl");
    assert_eq!(project_text(&doc), "the cat sat");
    assert!(doc.elements_by_class("hl").is_empty());
}

#[test]
fn test_search_results_never_overlap() {
    let texts = ["aaaaaaa", "abababab", "the cat sat on the mat", ""];
    let needles = ["a", "aa", "aba", "at", "the", "zzz"];

    for text in texts {
        let doc = Document::from_text(text);
        for needle in needles {
            let found = find_occurrences(&doc, needle);
            for pair in found.windows(2) {
                assert!(pair[0].end <= pair[1].start, "{:?} in {:?}", needle, text);
            }
        }
    }
}

#[test]
fn test_clear_twice_is_noop() {
    let mut doc = parse_markup("one <b>two</b> one").unwrap();
    highlight_occurrences(&mut doc, "one", "hl").unwrap();

    assert_eq!(clear_highlights(&mut doc, "hl"), 2);
    let after_first = doc.clone();

    assert_eq!(clear_highlights(&mut doc, "hl"), 0);
    assert_eq!(doc, after_first);
    assert_eq!(project_text(&doc), "one two one");
}

#[test]
fn test_highlight_spanning_formatting() {
    let mut doc = parse_markup("the c<b>at s</b>at").unwrap();
    let report = highlight_occurrences(&mut doc, "at", "hl").unwrap();

    assert_eq!(report.applied, 2);
    assert_eq!(
        to_markup(&doc),
        r#"the c<b><span class="hl">at</span> s</b><span class="hl">at</span>"#
    );

    clear_highlights(&mut doc, "hl");
    assert_eq!(to_markup(&doc), "the c<b>at s</b>at");
}

#[test]
fn test_highlight_only_clears_own_class() {
    let mut doc = parse_markup(r#"<span class="note">x</span> x"#).unwrap();
    highlight_occurrences(&mut doc, "x", "hl").unwrap();
    clear_highlights(&mut doc, "hl");

    assert_eq!(to_markup(&doc), r#"<span class="note">x</span> x"#);
}

#[test]
fn test_highlight_missing_text() {
    let mut doc = Document::from_text("nothing here");
    let report = highlight_occurrences(&mut doc, "absent", "hl").unwrap();

    assert_eq!(report.applied, 0);
    assert_eq!(doc.root.children, vec![Node::text("nothing here")]);
}

#[test]
fn test_highlight_empty_needle() {
    let mut doc = Document::from_text("abc");
    let report = highlight_occurrences(&mut doc, "", "hl").unwrap();

    assert_eq!(report.applied, 0);
    assert!(find_occurrences(&doc, "").is_empty());
}
