//! Release check and update command
//!
//! Output follows a fixed layout so release scripts can grep it:
//! `FAILED checks:` with one `  - ` line per issue, `UPDATED:` with one line
//! per change, and `OK` on success.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use prep_core::{CheckReport, Outcome, ReleaseEngine, RunMode, UpdateReport, VersionTriple};

use crate::error::{CliError, Result};

/// Arguments of a release run
#[derive(Debug, Clone, Copy)]
pub struct ReleaseArgs<'a> {
    pub root: &'a Path,
    pub version: &'a str,
    pub update: bool,
    pub json: bool,
}

/// Run the release check, or the update when requested.
///
/// Returns the process exit code.
pub fn run_release(args: &ReleaseArgs<'_>) -> Result<i32> {
    let version = VersionTriple::parse(args.version).map_err(|e| CliError::usage(e.to_string()))?;
    let root = dunce::canonicalize(args.root).unwrap_or_else(|_| args.root.to_path_buf());
    tracing::debug!(root = %root.display(), %version, update = args.update, "starting release run");

    let engine = ReleaseEngine::open(&root, version)?;
    let mode = if args.update {
        RunMode::Update
    } else {
        RunMode::Check
    };
    let outcome = engine.run(mode)?;

    if args.json {
        print_json(&outcome)?;
    } else {
        print_outcome(&outcome, &engine.layout().changelog);
    }
    Ok(outcome.exit_code())
}

fn print_outcome(outcome: &Outcome, changelog: &str) {
    match outcome {
        Outcome::MissingFiles(files) => {
            eprintln!("{}: Missing expected files:", "ERROR".red().bold());
            for path in files {
                eprintln!("  - {}", path.display());
            }
        }
        Outcome::Consistent(_) => print_ok(),
        Outcome::IssuesFound(report) => print_issues(report),
        Outcome::Updated(report) => print_update(report, changelog),
    }
}

fn print_ok() {
    println!("{}", "OK".green().bold());
}

fn print_issues(report: &CheckReport) {
    println!("{} checks:", "FAILED".red().bold());
    for issue in &report.issues {
        println!("  - {}", issue.to_string().replace('\n', "\n    "));
    }
}

fn print_update(report: &UpdateReport, changelog: &str) {
    for diagnostic in &report.diagnostics {
        eprintln!("{}: {}", "WARNING".yellow().bold(), diagnostic);
    }

    if report.changes.is_empty() {
        println!("Nothing to update (2-5 already match).");
    } else {
        println!("{}:", "UPDATED".green().bold());
        for change in &report.changes {
            println!("  - {change}");
        }
    }

    if report.changelog_documented {
        print_ok();
    } else {
        println!(
            "{}: {changelog} still missing section '## {}'",
            "NOTE".yellow().bold(),
            report.version
        );
    }
}

fn print_json(outcome: &Outcome) -> Result<()> {
    let value = match outcome {
        Outcome::MissingFiles(files) => json!({
            "status": "missing_files",
            "missing_files": files,
        }),
        Outcome::Consistent(report) => json!({
            "status": "consistent",
            "report": report,
        }),
        Outcome::IssuesFound(report) => json!({
            "status": "issues_found",
            "report": report,
            "messages": report.issues.iter().map(ToString::to_string).collect::<Vec<_>>(),
        }),
        Outcome::Updated(report) => json!({
            "status": "updated",
            "report": report,
        }),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
