//! Identical input produces byte-identical output.

use ccg_common::{ContentHash, SearchScope};
use ccg_conformance::{run_pipeline, sandbox_declaration};
use ccg_model::{RawAttribute, TypeRef};

#[test]
fn repeated_runs_are_identical() {
    let decl = sandbox_declaration();
    let first = run_pipeline(&decl).unit.unwrap();
    for _ in 0..10 {
        let again = run_pipeline(&decl).unit.unwrap();
        assert_eq!(again.text, first.text);
        assert_eq!(again.content_hash, first.content_hash);
    }
    assert_eq!(first.content_hash, ContentHash::of_text(&first.text));
}

#[test]
fn flag_combination_order_does_not_matter() {
    let a = sandbox_declaration().with_attribute(
        RawAttribute::of_type(TypeRef::global("Light"))
            .with_scope(SearchScope::PARENT | SearchScope::SELF | SearchScope::CHILDREN),
    );
    let b = sandbox_declaration().with_attribute(
        RawAttribute::of_type(TypeRef::global("Light"))
            .with_scope(SearchScope::SELF | SearchScope::CHILDREN | SearchScope::PARENT),
    );
    let a = run_pipeline(&a).unit.unwrap();
    let b = run_pipeline(&b).unit.unwrap();
    assert_eq!(a, b);

    let text = &a.text;
    let self_at = text.find("light = this.GetComponent<").unwrap();
    let children_at = text.find("light = this.GetComponentInChildren<").unwrap();
    let parent_at = text.find("light = this.GetComponentInParent<").unwrap();
    assert!(self_at < children_at && children_at < parent_at);
}

#[test]
fn attribute_order_is_emission_order() {
    let decl = sandbox_declaration();
    let mut reversed = decl.clone();
    reversed.attributes.reverse();

    let forward = run_pipeline(&decl).unit.unwrap();
    let backward = run_pipeline(&reversed).unit.unwrap();
    assert_ne!(forward.content_hash, backward.content_hash);
    assert!(forward.text.find("rb {").unwrap() < forward.text.find("sample {").unwrap());
    assert!(backward.text.find("sample {").unwrap() < backward.text.find("rb {").unwrap());
}

#[test]
fn output_has_no_trailing_whitespace() {
    let decl = sandbox_declaration().in_namespace("Game.Sandbox");
    let text = run_pipeline(&decl).unit.unwrap().text;
    for line in text.lines() {
        assert_eq!(line, line.trim_end(), "trailing whitespace in {line:?}");
    }
    assert!(!text.contains("\r\n"));
}
