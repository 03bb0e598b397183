//! Declaration names end up in generated text and in output file names.

use ccg_conformance::{parse_declaration, run_pipeline, sandbox_declaration};
use ccg_generator::{GenerateError, Generator};
use ccg_model::{AnnotatedDeclaration, IdentityError};

fn identity_error(decl: &AnnotatedDeclaration) -> IdentityError {
    let result = run_pipeline(decl);
    assert!(result.unit.is_none());
    assert!(result.diagnostics.is_empty());
    match result.error {
        Some(GenerateError::Declaration { source, .. }) => source,
        Some(other) => panic!("expected a declaration error, got: {other}"),
        None => panic!("expected a declaration error"),
    }
}

#[test]
fn path_like_name_produces_no_unit() {
    let decl = parse_declaration(
        r#"{"name": "../../escape", "is_partial": true, "ancestry": ["MonoBehaviour"]}"#,
    );
    assert_eq!(
        identity_error(&decl),
        IdentityError::InvalidName {
            name: "../../escape".to_string()
        }
    );
}

#[test]
fn namespace_cannot_inject_code() {
    let mut decl = sandbox_declaration();
    decl.namespace = Some("Game { class Evil {} } namespace X".to_string());
    assert!(matches!(
        identity_error(&decl),
        IdentityError::InvalidNamespace { .. }
    ));
}

#[test]
fn type_parameter_cannot_inject_code() {
    let decl = sandbox_declaration().with_type_parameter("T> { } class Evil<U");
    assert!(matches!(
        identity_error(&decl),
        IdentityError::InvalidTypeParameter { .. }
    ));
}

#[test]
fn bad_declaration_does_not_stop_the_batch() {
    let mut bad = sandbox_declaration();
    bad.name = "Bad Name".to_string();
    let outputs = Generator::with_defaults().generate_batch(&[bad, sandbox_declaration()]);
    assert!(outputs[0].unit.is_none());
    assert!(matches!(outputs[0].error, Some(GenerateError::Declaration { .. })));
    assert!(outputs[1].unit.is_some());
}

#[test]
fn generic_and_lookalike_plain_types_get_distinct_files() {
    let generic = sandbox_declaration()
        .in_namespace("Game")
        .with_type_parameter("T");
    let mut plain = sandbox_declaration().in_namespace("Game");
    plain.name = "Sandbox_T_".to_string();
    let two = generic.clone().with_type_parameter("U");

    let outputs = Generator::with_defaults().generate_batch(&[generic, plain, two]);
    let hints: Vec<&str> = outputs
        .iter()
        .map(|o| o.unit.as_ref().map(|u| u.hint_name.as_str()).unwrap_or(""))
        .collect();
    assert_eq!(
        hints,
        vec![
            "Game.Sandbox`1.ComponentCache.g.cs",
            "Game.Sandbox_T_.ComponentCache.g.cs",
            "Game.Sandbox`2.ComponentCache.g.cs",
        ]
    );
}
