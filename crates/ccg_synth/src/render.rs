//! Emission plan to C# text.

use ccg_common::file_safe_name;
use ccg_config::{EmitConfig, RuntimeApi};
use ccg_model::AnnotatedDeclaration;
use ccg_plan::{EmissionPlan, PlannedProperty};

use crate::unit::GeneratedUnit;
use crate::writer::SourceWriter;

const HEADER: &str = "// <auto-generated/>";

/// The file name a declaration's companion is registered under, e.g.
/// ``Game.Pool`1.ComponentCache.g.cs``.
pub fn hint_name(decl: &AnnotatedDeclaration, emit: &EmitConfig) -> String {
    format!(
        "{}.{}",
        file_safe_name(&decl.qualified_name()),
        emit.file_suffix
    )
}

/// Renders the companion source for `decl`.
///
/// Output depends only on the arguments: identical inputs produce
/// byte-identical text.
pub fn render(
    decl: &AnnotatedDeclaration,
    plan: &EmissionPlan,
    emit: &EmitConfig,
    runtime: &RuntimeApi,
) -> GeneratedUnit {
    let mut w = SourceWriter::new(emit.indent);
    w.line(HEADER);
    w.blank();

    let namespace = decl.namespace.as_deref().filter(|ns| !ns.is_empty());
    if let Some(ns) = namespace {
        w.line(&format!("namespace {ns}"));
        w.open();
    }

    for constraint in &plan.constraints {
        w.line(&format!(
            "[{}(typeof({}))]",
            runtime.require_attribute, constraint
        ));
    }
    w.line(&format!("partial class {}", decl.display_name()));
    w.open();

    for property in &plan.properties {
        w.line(&format!(
            "private {} {} {{ get; set; }}",
            property.dependency, property.name
        ));
    }
    if !plan.properties.is_empty() {
        w.blank();
    }

    w.line(&format!("private void {}()", emit.populate_method));
    w.open();
    for property in &plan.properties {
        write_population(&mut w, property, runtime);
    }
    w.close();

    if !decl.declares_member(&emit.lifecycle_hook, 0) {
        w.blank();
        w.line(&format!("private void {}()", emit.lifecycle_hook));
        w.open();
        w.line(&format!("{}();", emit.populate_method));
        w.close();
    }

    w.close();
    if namespace.is_some() {
        w.close();
    }

    let unit = GeneratedUnit::new(hint_name(decl, emit), w.finish());
    tracing::debug!(
        hint_name = %unit.hint_name,
        content_hash = %unit.content_hash,
        "rendered companion source"
    );
    unit
}

/// Reset, the fallback chain, then the guard for required properties.
fn write_population(w: &mut SourceWriter, property: &PlannedProperty, runtime: &RuntimeApi) {
    let name = &property.name;
    w.line(&format!("{name} = null;"));
    for (i, step) in property.steps.iter().enumerate() {
        let call = format!(
            "this.{}<{}>()",
            step.method(runtime),
            property.dependency
        );
        if i == 0 {
            w.line(&format!("{name} = {call};"));
        } else {
            w.line(&format!("if ({name} == null) {name} = {call};"));
        }
    }
    if property.required {
        w.line(&format!(
            "if ({name} == null) throw new {}();",
            runtime.missing_exception
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ccg_common::SearchScope;
    use ccg_config::GeneratorConfig;
    use ccg_model::{CacheDescriptor, TypeRef};
    use ccg_plan::EmissionPlanner;

    fn descriptor(ty: TypeRef, name: Option<&str>, scope: SearchScope, required: bool) -> CacheDescriptor {
        CacheDescriptor {
            dependency: ty,
            property_name: name.map(str::to_string),
            scope,
            required,
        }
    }

    fn render_with(config: &GeneratorConfig, decl: &AnnotatedDeclaration, descriptors: Vec<CacheDescriptor>) -> GeneratedUnit {
        let plan = EmissionPlanner::new(config).plan(descriptors);
        render(decl, &plan, &config.emit, &config.runtime)
    }

    fn sandbox() -> (AnnotatedDeclaration, Vec<CacheDescriptor>) {
        let decl = AnnotatedDeclaration::new("Sandbox")
            .partial()
            .inherits("MonoBehaviour");
        let descriptors = vec![
            descriptor(TypeRef::new("UnityEngine", "Rigidbody"), Some("rb"), SearchScope::SELF, true),
            descriptor(TypeRef::global("SampleComponent"), Some("sample"), SearchScope::CHILDREN, false),
        ];
        (decl, descriptors)
    }

    #[test]
    fn sandbox_companion() {
        let (decl, descriptors) = sandbox();
        let unit = render_with(&GeneratorConfig::default(), &decl, descriptors);
        assert_eq!(unit.hint_name, "Sandbox.ComponentCache.g.cs");
        insta::assert_snapshot!(unit.text.as_str(), @r###"
        // <auto-generated/>

        [global::UnityEngine.RequireComponent(typeof(global::UnityEngine.Rigidbody))]
        partial class Sandbox
        {
            private global::UnityEngine.Rigidbody rb { get; set; }
            private global::SampleComponent sample { get; set; }

            private void CacheComponents()
            {
                rb = null;
                rb = this.GetComponent<global::UnityEngine.Rigidbody>();
                if (rb == null) throw new global::UnityEngine.MissingReferenceException();
                sample = null;
                sample = this.GetComponentInChildren<global::SampleComponent>();
            }

            private void Awake()
            {
                CacheComponents();
            }
        }
        "###);
    }

    #[test]
    fn namespaced_generic_with_fallbacks() {
        let decl = AnnotatedDeclaration::new("Turret")
            .in_namespace("Game.Weapons")
            .with_type_parameter("T")
            .partial()
            .inherits("MonoBehaviour")
            .with_member("Awake", 0);
        let unit = render_with(
            &GeneratorConfig::default(),
            &decl,
            vec![descriptor(
                TypeRef::new("UnityEngine", "Animator"),
                None,
                SearchScope::PARENT | SearchScope::CHILDREN | SearchScope::SELF,
                false,
            )],
        );
        assert_eq!(unit.hint_name, "Game.Weapons.Turret`1.ComponentCache.g.cs");
        let expected = "\
// <auto-generated/>

namespace Game.Weapons
{
    partial class Turret<T>
    {
        private global::UnityEngine.Animator animator { get; set; }

        private void CacheComponents()
        {
            animator = null;
            animator = this.GetComponent<global::UnityEngine.Animator>();
            if (animator == null) animator = this.GetComponentInChildren<global::UnityEngine.Animator>();
            if (animator == null) animator = this.GetComponentInParent<global::UnityEngine.Animator>();
        }
    }
}
";
        assert_eq!(unit.text, expected);
    }

    #[test]
    fn empty_plan_still_declares_populate_method() {
        let decl = AnnotatedDeclaration::new("Empty").partial().inherits("MonoBehaviour");
        let unit = render_with(&GeneratorConfig::default(), &decl, Vec::new());
        let expected = "\
// <auto-generated/>

partial class Empty
{
    private void CacheComponents()
    {
    }

    private void Awake()
    {
        CacheComponents();
    }
}
";
        assert_eq!(unit.text, expected);
    }

    #[test]
    fn awake_with_parameters_does_not_suppress_hook() {
        let (decl, descriptors) = sandbox();
        let decl = decl.with_member("Awake", 1);
        let unit = render_with(&GeneratorConfig::default(), &decl, descriptors);
        assert!(unit.text.contains("    private void Awake()\n"));
    }

    #[test]
    fn configured_names_and_indent() {
        let mut config = GeneratorConfig::default();
        config.emit.populate_method = "Bind".to_string();
        config.emit.lifecycle_hook = "OnEnable".to_string();
        config.emit.indent = 2;
        config.emit.file_suffix = "Cache.g.cs".to_string();
        config.runtime.missing_exception = "global::System.InvalidOperationException".to_string();
        let (decl, descriptors) = sandbox();
        let unit = render_with(&config, &decl, descriptors);
        assert_eq!(unit.hint_name, "Sandbox.Cache.g.cs");
        assert!(unit.text.contains("\n  private void Bind()\n"));
        assert!(unit.text.contains("\n  private void OnEnable()\n  {\n    Bind();\n  }\n"));
        assert!(unit
            .text
            .contains("if (rb == null) throw new global::System.InvalidOperationException();"));
    }

    #[test]
    fn each_constraint_gets_its_own_line() {
        let decl = AnnotatedDeclaration::new("Sandbox").partial().inherits("MonoBehaviour");
        let unit = render_with(
            &GeneratorConfig::default(),
            &decl,
            vec![
                descriptor(TypeRef::global("A"), None, SearchScope::SELF, true),
                descriptor(TypeRef::global("B"), None, SearchScope::SELF, true),
                descriptor(TypeRef::global("A"), Some("a2"), SearchScope::SELF, true),
            ],
        );
        let requires: Vec<&str> = unit
            .text
            .lines()
            .filter(|l| l.starts_with("[global::UnityEngine.RequireComponent"))
            .collect();
        assert_eq!(
            requires,
            vec![
                "[global::UnityEngine.RequireComponent(typeof(global::A))]",
                "[global::UnityEngine.RequireComponent(typeof(global::B))]",
            ]
        );
    }

    #[test]
    fn no_trailing_whitespace() {
        let (decl, descriptors) = sandbox();
        let decl = decl.in_namespace("Game");
        let unit = render_with(&GeneratorConfig::default(), &decl, descriptors);
        assert!(unit.text.lines().all(|l| l == l.trim_end()));
        assert!(!unit.text.contains('\r'));
        assert!(unit.text.ends_with("}\n"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let (decl, descriptors) = sandbox();
        let a = render_with(&GeneratorConfig::default(), &decl, descriptors.clone());
        let b = render_with(&GeneratorConfig::default(), &decl, descriptors);
        assert_eq!(a, b);
        assert_eq!(a.content_hash, b.content_hash);
    }
}
