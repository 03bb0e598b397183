//! `ccg check`: validation and planning without rendering or writing.

use ccg_diagnostics::{Diagnostic, DiagnosticSink};
use ccg_generator::Generator;
use ccg_plan::EmissionPlan;
use serde::Serialize;

use crate::pipeline::{
    input_base_dir, load_sources, print_diagnostics, read_declarations, resolve_config, Tally,
};
use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// JSON record for one planned property.
#[derive(Serialize, Debug, PartialEq)]
struct PropertyReport {
    name: String,
    dependency: String,
    lookups: Vec<String>,
    required: bool,
}

/// JSON record for one declaration.
#[derive(Serialize, Debug)]
struct CheckReport {
    declaration: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    properties: Option<Vec<PropertyReport>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    constraints: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Runs the `ccg check` command.
///
/// Returns exit code 0 if every declaration would generate, 1 otherwise.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let decls = read_declarations(&args.input)?;

    if !global.quiet {
        eprintln!(
            "   Checking {} declaration(s) from {}",
            decls.len(),
            args.input.display()
        );
    }

    let generator = Generator::new(config);
    let reports: Vec<CheckReport> = decls
        .iter()
        .map(|decl| {
            let sink = DiagnosticSink::new();
            let result = generator.check(decl, &sink);
            let (plan, error) = match result {
                Ok(plan) => (plan, None),
                Err(e) => (None, Some(e.to_string())),
            };
            check_report(decl.qualified_name(), plan.as_ref(), sink.take_all(), error)
        })
        .collect();

    let mut tally = Tally::default();
    for report in &reports {
        tally.add(&report.diagnostics);
        tally.errors += usize::from(report.error.is_some());
    }

    match args.format {
        ReportFormat::Text => {
            let source_db = load_sources(&decls, &input_base_dir(&args.input));
            for report in &reports {
                print_diagnostics(&report.diagnostics, &source_db, global.color);
                if let Some(err) = &report.error {
                    eprintln!("error: {err}\n");
                }
                if global.verbose {
                    if let Some(properties) = &report.properties {
                        eprintln!("     Planned {}", report.declaration);
                        for p in properties {
                            eprintln!(
                                "       {} : {} [{}]{}",
                                p.name,
                                p.dependency,
                                p.lookups.join(" -> "),
                                if p.required { " required" } else { "" }
                            );
                        }
                    }
                }
            }
            if !global.quiet {
                eprintln!(
                    "   Result: {} error(s), {} warning(s)",
                    tally.errors, tally.warnings
                );
            }
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(if tally.errors > 0 { 1 } else { 0 })
}

fn check_report(
    declaration: String,
    plan: Option<&EmissionPlan>,
    diagnostics: Vec<Diagnostic>,
    error: Option<String>,
) -> CheckReport {
    let properties = plan.map(|plan| {
        plan.properties
            .iter()
            .map(|p| PropertyReport {
                name: p.name.clone(),
                dependency: p.dependency.to_string(),
                lookups: p.steps.iter().map(|s| s.scope().to_string()).collect(),
                required: p.required,
            })
            .collect()
    });
    let constraints = plan
        .map(|plan| plan.constraints.iter().map(|t| t.to_string()).collect())
        .unwrap_or_default();
    CheckReport {
        declaration,
        properties,
        constraints,
        diagnostics,
        error,
    }
}
