/// Function naming and signatures for generated routes

use crate::collect::PageRoute;
use crate::interpolate::rewrite;
use crate::parameter::{parse_parameters, RouteParameter};

/// Type of the context parameter of navigation functions
pub const NAVIGATION_CONTEXT_TYPE: &str = "NavigationManager";

/// Name of the context parameter of navigation functions
pub const NAVIGATION_CONTEXT_NAME: &str = "navigationManager";

/// Pipeline output for one template of one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRoute {
    pub function_name: String,
    /// Template as declared
    pub template: String,
    pub parameters: Vec<RouteParameter>,
    /// Body of the interpolated string, without `$"` and `"`
    pub body: String,
}

impl GeneratedRoute {
    /// Runs parser and rewriter for the `index`-th template of a page
    pub fn new(page_name: &str, template: &str, index: usize) -> Self {
        let parameters = parse_parameters(template);
        let body = rewrite(template, &parameters);

        Self {
            function_name: function_name(page_name, index),
            template: template.to_string(),
            parameters,
            body,
        }
    }

    /// Parameters of the companion navigation function, context first
    pub fn navigation_parameters(&self) -> Vec<RouteParameter> {
        std::iter::once(RouteParameter::context(
            NAVIGATION_CONTEXT_TYPE,
            NAVIGATION_CONTEXT_NAME,
        ))
        .chain(self.parameters.iter().cloned())
        .collect()
    }

    /// Call of the primary function forwarding every route parameter
    ///
    /// ```
    /// use blazing_route::GeneratedRoute;
    ///
    /// let route = GeneratedRoute::new("Post", "/posts/{year:int}/{slug}", 1);
    /// assert_eq!(route.forwarding_call(), "Post1(year, slug)");
    /// ```
    pub fn forwarding_call(&self) -> String {
        let arguments: Vec<&str> = self
            .parameters
            .iter()
            .filter(|parameter| !parameter.is_context_parameter)
            .map(|parameter| parameter.name.as_str())
            .collect();

        format!("{}({})", self.function_name, arguments.join(", "))
    }
}

/// Name of the function for the `index`-th template of a page
///
/// The first template uses the bare page name; later ones append their
/// index. Names are not checked for collisions across pages.
///
/// ```
/// use blazing_route::function_name;
///
/// assert_eq!(function_name("Foo", 0), "Foo");
/// assert_eq!(function_name("Foo", 2), "Foo2");
/// ```
pub fn function_name(page_name: &str, index: usize) -> String {
    if index == 0 {
        page_name.to_string()
    } else {
        format!("{page_name}{index}")
    }
}

/// Renders a parameter list as `Type name, Type name`
///
/// The context parameter is rendered as the `this` receiver.
pub fn parameter_list(parameters: &[RouteParameter]) -> String {
    parameters
        .iter()
        .map(|parameter| {
            let receiver = if parameter.is_context_parameter { "this " } else { "" };
            format!("{}{} {}", receiver, parameter.type_name(), parameter.name)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Generates every route of a page, in template order
pub fn page_functions(page: &PageRoute) -> Vec<GeneratedRoute> {
    page.templates
        .iter()
        .enumerate()
        .map(|(index, template)| GeneratedRoute::new(&page.page_name, template, index))
        .collect()
}
