//! Emission of the generated unit.
//!
//! [`build_unit`] turns collected pages into a [`CodeUnit`] tree;
//! [`CodeUnit::render`] serialises it. Both are deterministic: ordering comes
//! only from collection order and placeholder order.

mod tree;
mod writer;

pub use tree::{ClassDecl, CodeUnit, Expr, ListProperty, Member, MethodDecl, Using};
pub use writer::{escape_string_literal, escape_xml, SourceWriter};

use crate::collect::PageRoute;
use crate::signature::{page_functions, GeneratedRoute, NAVIGATION_CONTEXT_NAME};

/// Name of the flat list of every template.
pub const ALL_ROUTES_PROPERTY: &str = "All";

/// Settings of a single emission, with the namespace already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSettings {
    pub namespace: String,
    pub class_name: String,
    pub generate_extensions: bool,
    pub extension_prefix: String,
}

/// Builds the document tree for every page.
pub fn build_unit(pages: &[PageRoute], settings: &EmitSettings) -> CodeUnit {
    CodeUnit {
        preamble: vec!["// <auto-generated />".to_string(), "#nullable enable".to_string()],
        usings: usings(settings),
        namespace: settings.namespace.clone(),
        class: ClassDecl {
            name: settings.class_name.clone(),
            members: members(pages, settings),
        },
    }
}

fn usings(settings: &EmitSettings) -> Vec<Using> {
    let mut usings = vec![
        Using::Namespace("System".to_string()),
        Using::Namespace("System.Collections.Immutable".to_string()),
    ];
    if settings.generate_extensions {
        usings.push(Using::Namespace("Microsoft.AspNetCore.Components".to_string()));
    }
    usings.push(Using::Static("System.Globalization.CultureInfo".to_string()));
    usings
}

fn members(pages: &[PageRoute], settings: &EmitSettings) -> Vec<Member> {
    let mut members = Vec::new();

    // Cross-page duplicates stay; only per-page duplicates were removed.
    let all: Vec<String> = pages
        .iter()
        .flat_map(|page| page.templates.iter().cloned())
        .collect();

    if all.is_empty() {
        return members;
    }

    members.push(Member::List(ListProperty {
        name: ALL_ROUTES_PROPERTY.to_string(),
        items: all,
    }));

    for page in pages.iter().filter(|page| !page.templates.is_empty()) {
        members.push(Member::Blank);
        for route in page_functions(page) {
            members.push(Member::Method(primary_method(&route)));
            if settings.generate_extensions {
                members.push(Member::Method(navigation_method(
                    &route,
                    &settings.extension_prefix,
                )));
            }
        }
    }

    members
}

/// `public static string Name(...) => $"...";`
pub fn primary_method(route: &GeneratedRoute) -> MethodDecl {
    MethodDecl {
        summary: Some(route.template.clone()),
        return_type: "string".to_string(),
        name: route.function_name.clone(),
        parameters: route.parameters.clone(),
        body: Expr::Interpolated(route.body.clone()),
    }
}

/// `public static void PrefixName(this NavigationManager navigationManager, ...)`
pub fn navigation_method(route: &GeneratedRoute, prefix: &str) -> MethodDecl {
    MethodDecl {
        summary: Some(format!("Navigates to {}", route.template)),
        return_type: "void".to_string(),
        name: format!("{prefix}{}", route.function_name),
        parameters: route.navigation_parameters(),
        body: Expr::Invoke {
            target: NAVIGATION_CONTEXT_NAME.to_string(),
            method: "NavigateTo".to_string(),
            argument: route.forwarding_call(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn settings(generate_extensions: bool) -> EmitSettings {
        EmitSettings {
            namespace: "App".to_string(),
            class_name: "Routes".to_string(),
            generate_extensions,
            extension_prefix: String::new(),
        }
    }

    fn page(name: &str, templates: &[&str]) -> PageRoute {
        PageRoute {
            page_name: name.to_string(),
            templates: templates.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_unit_has_no_list() {
        let unit = build_unit(&[], &settings(true));
        assert!(unit.class.list().is_none());
        assert!(unit.class.members.is_empty());
    }

    #[test]
    fn test_list_keeps_cross_page_duplicates() {
        let pages = vec![page("A", &["/x", "/y"]), page("B", &["/x"])];
        let unit = build_unit(&pages, &settings(false));
        assert_eq!(
            unit.class.list().map(|list| list.items.clone()),
            Some(vec!["/x".to_string(), "/y".to_string(), "/x".to_string()])
        );
    }

    #[test]
    fn test_methods_in_page_and_template_order() {
        let pages = vec![page("A", &["/a", "/a/{id}"]), page("B", &["/b"])];
        let unit = build_unit(&pages, &settings(false));
        let names: Vec<_> = unit.class.methods().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["A", "A1", "B"]);
    }

    #[test]
    fn test_navigation_methods_follow_primary() {
        let pages = vec![page("Profile", &["/profile/{id:guid}"])];
        let mut settings = settings(true);
        settings.extension_prefix = "GoTo".to_string();

        let unit = build_unit(&pages, &settings);
        let signatures: Vec<_> = unit.class.methods().map(MethodDecl::signature).collect();

        assert_eq!(
            signatures,
            vec![
                "public static string Profile(Guid id) => $\"/profile/{id.ToString(\"D\", InvariantCulture)}\";",
                "public static void GoToProfile(this NavigationManager navigationManager, Guid id) => navigationManager.NavigateTo(Profile(id));",
            ]
        );
    }

    #[test]
    fn test_components_using_only_with_extensions() {
        let with = build_unit(&[], &settings(true));
        let without = build_unit(&[], &settings(false));
        let components = Using::Namespace("Microsoft.AspNetCore.Components".to_string());

        assert!(with.usings.contains(&components));
        assert!(!without.usings.contains(&components));
    }
}
