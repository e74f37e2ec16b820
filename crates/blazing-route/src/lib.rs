//! # blazing-route
//!
//! Generates strongly-typed URL helpers from Blazor route templates.
//!
//! Route templates are collected from two places:
//! - classes decorated with `[Route("...")]`
//! - `@page "..."` directives in `.razor` files
//!
//! Each template becomes a C# function that builds the URL from typed
//! arguments, plus an optional `NavigationManager` extension that navigates
//! to it:
//!
//! - `{name}` → `string name`
//! - `{name?}` → `string? name`
//! - `{*name}` → `string name` (catch-all)
//! - `{id:guid}` / `{id:guid?}` → `Guid` / `Guid?`, formatted as `"D"`
//! - `{at:datetime}` → `DateTime`, formatted as `yyyy-MM-dd HH:mm:ss`
//! - `{n:int}` → any other annotation is used as the type verbatim
//!
//! ## Pipeline
//!
//! collect → parse parameters → rewrite template → build signatures → emit.
//! Every stage is pure and deterministic: the same input always produces
//! byte-identical output.
//!
//! ## Example
//!
//! ```
//! use blazing_route::{generate, Declaration, GenerationOptions, PageFile};
//!
//! let declarations = vec![Declaration::new("Profile", "/profile/{id:guid}")];
//! let files = vec![PageFile::new("Search", "@page \"/search/{term?}\"")];
//!
//! let unit = generate(&declarations, &files, &GenerationOptions::default(), Some("MyApp")).unwrap();
//!
//! assert_eq!(unit.name, "Routes");
//! assert!(unit.source.contains(
//!     "public static string Profile(Guid id) => $\"/profile/{id.ToString(\"D\", InvariantCulture)}\";"
//! ));
//! assert!(unit.source.contains("{term?.ToString(InvariantCulture)}"));
//! ```

use tracing::info;

// ============================================================================
// Module Declarations
// ============================================================================

pub mod collect;
pub mod emit;
mod error;
pub mod interpolate;
pub mod options;
pub mod parameter;
pub mod signature;

// Re-export public types
pub use collect::{
    collect_routes, extract_page_directives, Declaration, DeclarationSource, PageFile,
    PageFileSource, PageRoute, PAGE_DIRECTIVE,
};
pub use emit::{build_unit, CodeUnit, EmitSettings};
pub use error::{GenerationError, Result};
pub use interpolate::{interpolation, rewrite};
pub use options::{GenerationOptions, OPTIONS_FILE_NAME};
pub use parameter::{parse_parameter, parse_parameters, placeholders, RouteParameter, TypeTag};
pub use signature::{function_name, page_functions, parameter_list, GeneratedRoute};

// ============================================================================
// Generation
// ============================================================================

/// A named compilation unit produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Registration name: the configured class name
    pub name: String,
    pub source: String,
}

/// Generates the unit for already-collected pages
///
/// Fails only when no namespace can be resolved; nothing is produced in
/// that case.
pub fn generate_pages(
    pages: &[PageRoute],
    options: &GenerationOptions,
    host_identity: Option<&str>,
) -> Result<GeneratedUnit> {
    let namespace = options.resolve_namespace(host_identity)?;

    let settings = EmitSettings {
        namespace,
        class_name: options.class_name.clone(),
        generate_extensions: options.generate_extensions,
        extension_prefix: options.extension_prefix.clone(),
    };

    let source = build_unit(pages, &settings).render();

    info!(
        "Generated {}.{} with {} route(s) from {} page(s)",
        settings.namespace,
        settings.class_name,
        pages.iter().map(|page| page.templates.len()).sum::<usize>(),
        pages.len()
    );

    Ok(GeneratedUnit {
        name: settings.class_name,
        source,
    })
}

/// Collects routes from both sources and generates the unit
pub fn generate<D, P>(
    declarations: &D,
    page_files: &P,
    options: &GenerationOptions,
    host_identity: Option<&str>,
) -> Result<GeneratedUnit>
where
    D: DeclarationSource + ?Sized,
    P: PageFileSource + ?Sized,
{
    // Resolve first so a missing namespace aborts before any work
    options.resolve_namespace(host_identity)?;

    let pages = collect_routes(declarations, page_files);
    generate_pages(&pages, options, host_identity)
}
