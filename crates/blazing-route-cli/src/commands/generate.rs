use anyhow::{Context, Result};
use blazing_route::{generate, GeneratedUnit, GenerationOptions, OPTIONS_FILE_NAME};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::scan::Project;

/// Arguments of `blazing-route generate`
pub struct GenerateArgs {
    pub project: PathBuf,
    pub options: Option<PathBuf>,
    pub namespace: Option<String>,
    pub output: Option<PathBuf>,
    pub stdout: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    let project = Project::scan(&args.project)?;
    let options = load_options(&project, args.options.as_deref(), args.namespace);

    // Nothing is written unless generation succeeds as a whole
    let unit = generate(&project, &project, &options, project.identity())
        .context("Route generation failed")?;

    if args.stdout {
        print!("{}", unit.source);
        return Ok(());
    }

    let output_dir = args.output.unwrap_or_else(|| project.root().to_path_buf());
    let (path, written) = write_unit(&output_dir, &unit)?;

    if written {
        println!("{} {}", "Generated".green().bold(), path.display());
    } else {
        println!("{} {}", "Up to date".dimmed(), path.display());
    }
    Ok(())
}

/// Options from an explicit file or the project's default file
///
/// A `--namespace` flag overrides whatever the file says.
pub fn load_options(
    project: &Project,
    explicit: Option<&Path>,
    namespace: Option<String>,
) -> GenerationOptions {
    let path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project.root().join(OPTIONS_FILE_NAME));

    let mut options = GenerationOptions::load(path);
    if namespace.is_some() {
        options.namespace = namespace;
    }
    options
}

/// Writes `<ClassName>.g.cs`, leaving the file alone when unchanged
///
/// Returns the path and whether the file was (re)written.
fn write_unit(output_dir: &Path, unit: &GeneratedUnit) -> Result<(PathBuf, bool)> {
    let path = output_dir.join(format!("{}.g.cs", unit.name));

    if fs::read_to_string(&path).is_ok_and(|existing| existing == unit.source) {
        info!("{:?} is up to date", path);
        return Ok((path, false));
    }

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
    fs::write(&path, &unit.source)
        .with_context(|| format!("Failed to write generated routes: {:?}", path))?;

    Ok((path, true))
}
