//! `ccg generate`: the full pipeline.
//!
//! 1. Resolve configuration
//! 2. Read declarations from the JSON input
//! 3. Run the generator over the batch in parallel
//! 4. Write changed units into the output directory
//! 5. Report diagnostics and input errors

use std::fs;
use std::path::PathBuf;

use ccg_diagnostics::Diagnostic;
use ccg_generator::{DeclarationOutput, Generator};
use serde::Serialize;

use crate::pipeline::{
    input_base_dir, load_sources, print_diagnostics, read_declarations, resolve_config,
    write_if_changed, Tally, WriteOutcome,
};
use crate::{GenerateArgs, GlobalArgs, ReportFormat};

/// JSON record for one declaration.
#[derive(Serialize)]
struct UnitReport<'a> {
    declaration: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    written: Option<&'static str>,
    diagnostics: &'a [Diagnostic],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Runs the `ccg generate` command.
///
/// Returns exit code 0 if no declaration failed, 1 otherwise.
pub fn run(args: &GenerateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let decls = read_declarations(&args.input)?;

    if !global.quiet {
        eprintln!(
            "  Generating {} declaration(s) from {}",
            decls.len(),
            args.input.display()
        );
    }

    let generator = Generator::new(config);
    let outputs = generator.generate_batch(&decls);

    let mut writes: Vec<Option<(PathBuf, WriteOutcome)>> = Vec::with_capacity(outputs.len());
    if !args.dry_run {
        fs::create_dir_all(&args.output)?;
    }
    for output in &outputs {
        let write = match &output.unit {
            Some(unit) if !args.dry_run => Some(write_if_changed(&args.output, unit)?),
            _ => None,
        };
        writes.push(write);
    }

    let mut tally = Tally::default();
    for output in &outputs {
        tally.add(&output.diagnostics);
        tally.errors += usize::from(output.error.is_some());
    }
    let units = outputs.iter().filter(|o| o.unit.is_some()).count();

    match args.format {
        ReportFormat::Text => {
            let source_db = load_sources(&decls, &input_base_dir(&args.input));
            for output in &outputs {
                print_diagnostics(&output.diagnostics, &source_db, global.color);
                if let Some(err) = &output.error {
                    eprintln!("error: {err}\n");
                }
            }
            if !global.quiet {
                for (path, outcome) in writes.iter().flatten() {
                    match outcome {
                        WriteOutcome::Created => eprintln!("     Created {}", path.display()),
                        WriteOutcome::Updated => eprintln!("     Updated {}", path.display()),
                        WriteOutcome::Unchanged if global.verbose => {
                            eprintln!("   Unchanged {}", path.display())
                        }
                        WriteOutcome::Unchanged => {}
                    }
                }
                eprintln!(
                    "   Result: {} unit(s), {} error(s), {} warning(s)",
                    units, tally.errors, tally.warnings
                );
            }
        }
        ReportFormat::Json => {
            let reports: Vec<UnitReport<'_>> = outputs
                .iter()
                .zip(&writes)
                .map(|(output, write)| unit_report(output, write.as_ref().map(|(_, o)| *o)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(if tally.errors > 0 { 1 } else { 0 })
}

fn unit_report(output: &DeclarationOutput, written: Option<WriteOutcome>) -> UnitReport<'_> {
    UnitReport {
        declaration: &output.declaration,
        hint_name: output.unit.as_ref().map(|u| u.hint_name.as_str()),
        content_hash: output.unit.as_ref().map(|u| u.content_hash.to_string()),
        written: written.map(|w| match w {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }),
        diagnostics: &output.diagnostics,
        error: output.error.as_ref().map(|e| e.to_string()),
    }
}
