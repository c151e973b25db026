use obligation_tree::{parser, tree, Indent, ObligationDocument, ObligationForm, Payload, TextCodec};
use std::fs;

mod common;
use common::*;

#[test]
fn test_load_all_fixtures() {
    let fixtures = [
        "nested.txt",
        "flat.txt",
        "spaces.txt",
        "malformed.txt",
        "unicode.txt",
        "empty.txt",
    ];

    let codec = TextCodec::default();
    for fixture in fixtures {
        let result = parser::load_file(&fixture_path(fixture), &codec);
        assert!(result.is_ok(), "Failed to load {}", fixture);

        let (forest, _) = result.unwrap();
        assert!(
            verify_tree_integrity(&forest).is_ok(),
            "Broken tree in {}",
            fixture
        );
    }
}

#[test]
fn test_nested_fixture_structure() {
    let (forest, raw) = parser::load_file(&fixture_path("nested.txt"), &TextCodec::default()).unwrap();

    assert_eq!(forest.len(), 2);
    assert_eq!(count_at_depth(&forest, 1), 4);
    assert_eq!(count_at_depth(&forest, 2), 1);
    assert_eq!(calculate_forest_depth(&forest), 2);

    let must = find_node_by_line(&forest, "YOU MUST Provide License text").unwrap();
    assert_eq!(must.children.len(), 1);
    assert_eq!(must.children[0].payload, Payload::plain("Note", "in the documentation"));

    let should = find_node_by_line(&forest, "YOU SHOULD Include a changelog").unwrap();
    assert_eq!(should.payload, Payload::element("YOU SHOULD", "Include", "a changelog"));

    // The fixture is already canonical.
    assert_eq!(TextCodec::default().encode(&forest), raw);
}

#[test]
fn test_flat_fixture() {
    let (forest, _) = parser::load_file(&fixture_path("flat.txt"), &TextCodec::default()).unwrap();

    assert_eq!(forest.len(), 4);
    assert_eq!(calculate_forest_depth(&forest), 0);
    assert_eq!(forest[3].payload, Payload::plain("", "Single"));
}

#[test]
fn test_space_indented_fixture_converts_to_tabs() {
    let codec = TextCodec::default();
    let (forest, _) = parser::load_file(&fixture_path("spaces.txt"), &codec).unwrap();

    assert_eq!(
        codec.encode(&forest),
        "Header Info\n\tYOU MUST Provide License text\n\t\tNote legacy spaces\n\tFooter End"
    );
}

#[test]
fn test_space_indented_fixture_with_spaces_codec() {
    let codec = TextCodec::new(Indent::Spaces(4));
    let (forest, raw) = parser::load_file(&fixture_path("spaces.txt"), &codec).unwrap();

    assert_eq!(calculate_forest_depth(&forest), 2);
    assert_eq!(codec.encode(&forest), raw);
}

#[test]
fn test_malformed_fixture_degrades_gracefully() {
    let (forest, _) = parser::load_file(&fixture_path("malformed.txt"), &TextCodec::default()).unwrap();

    assert_eq!(all_lines(&forest[..1]), vec![
        "Root node",
        "Deep jump",
        "Middle step",
        "Back one",
        "Half indent",
    ]);
    assert_eq!(forest.len(), 2);
    assert_eq!(forest[1].payload.line(), "Next root");
    assert_eq!(forest[0].children.len(), 4);
}

#[test]
fn test_unicode_fixture() {
    let (forest, _) = parser::load_file(&fixture_path("unicode.txt"), &TextCodec::default()).unwrap();

    assert_eq!(forest[0].payload, Payload::plain("Überblick", "Lizenzpflichten"));
    let element = &forest[0].children[0];
    assert_eq!(element.payload, Payload::element("YOU MUST", "Provide", "Lizenztext ✓"));
    assert_eq!(
        element.children[0].payload,
        Payload::plain("Hinweis", "日本語のテキスト 🎯")
    );
}

#[test]
fn test_empty_fixture() {
    let (forest, raw) = parser::load_file(&fixture_path("empty.txt"), &TextCodec::default()).unwrap();
    assert!(forest.is_empty());
    assert_eq!(raw, "");
}

#[test]
fn test_record_fixture_loads_into_form() {
    let raw = fs::read_to_string(fixture_path("record.json")).unwrap();
    let record = ObligationDocument::from_json(&raw).unwrap();

    let form = ObligationForm::edit(record, TextCodec::default());

    assert_eq!(form.draft().id.as_deref(), Some("8a1f2c"));
    assert_eq!(tree::count(form.editor().tree()), 2);
    assert!(form.submission().is_ok());
    assert_eq!(
        form.preview(),
        "Attribution\nHeader Attribution requirements\n\tYOU MUST Provide License text"
    );
}

#[test]
fn test_incomplete_record_fixture() {
    let raw = fs::read_to_string(fixture_path("record_incomplete.json")).unwrap();
    let record = ObligationDocument::from_json(&raw).unwrap();

    let form = ObligationForm::edit(record, TextCodec::default());
    let err = form.submission().unwrap_err();

    assert_eq!(
        err.to_string(),
        "Please fill in all fields before submitting: text, obligationLevel"
    );
}
