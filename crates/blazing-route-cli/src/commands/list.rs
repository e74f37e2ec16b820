use anyhow::Result;
use blazing_route::{collect_routes, page_functions, parameter_list};
use colored::Colorize;
use std::path::Path;

use crate::scan::Project;

/// Prints every discovered page with its routes and generated signatures
pub fn execute(project_dir: &Path) -> Result<()> {
    let project = Project::scan(project_dir)?;
    let pages = collect_routes(&project, &project);

    if pages.is_empty() {
        println!("{}", "No routes found".yellow());
        return Ok(());
    }

    for page in &pages {
        println!("{}", page.page_name.cyan().bold());
        for route in page_functions(page) {
            println!(
                "  {}  {}({})",
                route.template,
                route.function_name.green(),
                parameter_list(&route.parameters)
            );
        }
    }

    let total: usize = pages.iter().map(|page| page.templates.len()).sum();
    println!();
    println!("{} route(s) on {} page(s)", total, pages.len());
    Ok(())
}
