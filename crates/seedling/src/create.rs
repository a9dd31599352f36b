//! Project creation command handler

use anyhow::{bail, Context, Result};
use camino::Utf8PathBuf;
use std::io::IsTerminal;

use seedling_projects::{
    resolve_project_name, Error, ManifestOutcome, ProjectName, ScaffoldReport, Scaffolder,
    TemplateSource, MANIFEST_FILE,
};

use crate::cli::Cli;
use crate::output;
use crate::prompt::TerminalPrompt;

/// Create a new project in the current directory
pub fn run(cli: Cli) -> Result<()> {
    let name = resolve_name(cli.project_name.as_deref())?;

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    let parent = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|p| Error::invalid_path(p.display().to_string()))?;

    let template = TemplateSource::resolve(cli.template.as_deref())?;
    tracing::info!("Using template: {}", template);

    let human = !cli.json && !cli.quiet;
    if human {
        output::header("Create New Project");
        output::kv("Project name", name.as_str());
        output::kv("Location", parent.join(name.as_str()).as_str());
        output::kv("Template", &template.to_string());
        println!();
        output::info("Creating directory...");
    }

    let report = Scaffolder::new(template)
        .create(&parent, &name)
        .with_context(|| format!("Failed to create project '{}'", name))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if human {
        print_summary(&report);
    }

    if cli.strict && !report.is_clean() {
        bail!(
            "Project '{}' was created with problems ({} entries skipped, manifest {})",
            name,
            report.copy.failures.len(),
            if report.manifest.is_patched() {
                "updated"
            } else {
                "not updated"
            }
        );
    }

    Ok(())
}

/// Take the name from the argument, or ask for one on a terminal
fn resolve_name(arg: Option<&str>) -> Result<ProjectName> {
    if arg.is_none() && !std::io::stdin().is_terminal() {
        return Err(Error::NotInteractive.into());
    }
    Ok(resolve_project_name(arg, &mut TerminalPrompt)?)
}

fn print_summary(report: &ScaffoldReport) {
    if !report.copy.is_complete() {
        output::warning(&format!(
            "{} template entries could not be copied",
            report.copy.failures.len()
        ));
        for failure in &report.copy.failures {
            output::kv("skipped", &failure.path.display().to_string());
        }
    }

    if let ManifestOutcome::Failed { message } = &report.manifest {
        output::warning(&format!("{} was not updated: {}", MANIFEST_FILE, message));
    }

    println!();
    output::success("Project created successfully.");
    output::kv("Location", report.project_dir.as_str());
    output::kv("Files copied", &report.copy.files_copied.to_string());

    println!();
    output::info("Done. Now run:");
    println!();
    println!("  cd {}", report.name);
    println!("  npm install");
}
