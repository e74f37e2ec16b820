/// Placeholder parsing for route templates
///
/// Turns the inner text of a `{...}` placeholder into a typed parameter.
/// All functions are **pure**: same input → same output, no side effects.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

/// Lazy match so `{a}/{b}` yields two placeholders, not one.
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(.*?)\}").expect("placeholder regex is valid"));

/// Type of a route parameter as it appears in the generated signature
///
/// Closed over the tags the generator formats specially. Anything else is
/// carried through as `OtherRaw` and trusted to be a valid type name.
///
/// # Examples
///
/// ```
/// use blazing_route::TypeTag;
///
/// assert_eq!(TypeTag::from_annotation("GUID"), (TypeTag::Guid, false));
/// assert_eq!(TypeTag::from_annotation("datetime?"), (TypeTag::DateTime, true));
/// assert_eq!(
///     TypeTag::from_annotation("int"),
///     (TypeTag::OtherRaw("int".to_string()), false)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Untyped placeholder: `{name}`
    String,
    /// `{name:datetime}`
    DateTime,
    /// `{name:guid}`
    Guid,
    /// Any other annotation, e.g. `{id:int}`, without its trailing `?`
    OtherRaw(String),
}

impl TypeTag {
    /// Resolves a type annotation into a tag and a nullability flag
    ///
    /// Known tags are matched case-insensitively. Unknown annotations keep
    /// their exact text; a trailing `?` moves into the nullability flag so the
    /// rendered spelling reproduces the annotation verbatim.
    pub fn from_annotation(annotation: &str) -> (Self, bool) {
        match annotation.to_ascii_lowercase().as_str() {
            "datetime" => (TypeTag::DateTime, false),
            "datetime?" => (TypeTag::DateTime, true),
            "guid" => (TypeTag::Guid, false),
            "guid?" => (TypeTag::Guid, true),
            _ => match annotation.strip_suffix('?') {
                Some(base) => (TypeTag::OtherRaw(base.to_string()), true),
                None => (TypeTag::OtherRaw(annotation.to_string()), false),
            },
        }
    }

    /// C# spelling of the type without any nullable marker
    pub fn spelling(&self) -> &str {
        match self {
            TypeTag::String => "string",
            TypeTag::DateTime => "DateTime",
            TypeTag::Guid => "Guid",
            TypeTag::OtherRaw(raw) => raw,
        }
    }
}

/// A typed parameter of a generated route function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteParameter {
    /// Identifier used in the generated signature (first letter lower-cased)
    pub name: String,
    pub type_tag: TypeTag,
    pub is_nullable: bool,
    /// Placeholder was written as `{*name}`
    pub is_catch_all: bool,
    /// Synthetic leading parameter of navigation functions; never parsed from a template
    pub is_context_parameter: bool,
}

impl RouteParameter {
    /// Builds the synthetic context parameter for navigation functions
    pub fn context(type_name: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_tag: TypeTag::OtherRaw(type_name.to_string()),
            is_nullable: false,
            is_catch_all: false,
            is_context_parameter: true,
        }
    }

    /// Declared type, `?`-suffixed when nullable
    ///
    /// ```
    /// use blazing_route::parse_parameter;
    ///
    /// assert_eq!(parse_parameter("term?").type_name(), "string?");
    /// assert_eq!(parse_parameter("id:Guid").type_name(), "Guid");
    /// ```
    pub fn type_name(&self) -> String {
        let mut type_name = self.type_tag.spelling().to_string();
        if self.is_nullable {
            type_name.push('?');
        }
        type_name
    }
}

/// A `{...}` occurrence inside a route template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole placeholder, braces included
    pub range: Range<usize>,
    /// Text between the braces
    pub inner: &'a str,
}

/// Scans a template for placeholders, left to right
///
/// ```
/// use blazing_route::placeholders;
///
/// let inner: Vec<_> = placeholders("/users/{id:guid}/posts/{page?}")
///     .map(|p| p.inner)
///     .collect();
/// assert_eq!(inner, vec!["id:guid", "page?"]);
/// ```
pub fn placeholders(template: &str) -> impl Iterator<Item = Placeholder<'_>> {
    PLACEHOLDER_REGEX.captures_iter(template).filter_map(|caps| {
        let whole = caps.get(0)?;
        let inner = caps.get(1)?;
        Some(Placeholder {
            range: whole.range(),
            inner: inner.as_str(),
        })
    })
}

/// Parses the inner text of a placeholder into a parameter (pure function)
///
/// # Parsing Rules
///
/// 1. **Untyped** (`name`, `name?`, `*name`): trailing `?` marks nullable,
///    leading `*` marks catch-all, both are stripped. Type is `string`.
/// 2. **Typed** (`name:type`): split on the first `:`; the annotation is
///    resolved by [`TypeTag::from_annotation`]. The name is kept as written,
///    sigils included.
///
/// There is no failure path: unknown annotations pass through verbatim.
///
/// # Examples
///
/// ```
/// use blazing_route::{parse_parameter, TypeTag};
///
/// let param = parse_parameter("*Slug");
/// assert_eq!(param.name, "slug");
/// assert_eq!(param.type_tag, TypeTag::String);
/// assert!(param.is_catch_all);
/// assert!(!param.is_nullable);
///
/// let param = parse_parameter("Id:guid?");
/// assert_eq!(param.name, "id");
/// assert_eq!(param.type_name(), "Guid?");
/// ```
pub fn parse_parameter(inner: &str) -> RouteParameter {
    match inner.split_once(':') {
        Some((name, annotation)) => {
            let (type_tag, is_nullable) = TypeTag::from_annotation(annotation);
            RouteParameter {
                name: lower_first_char(name),
                type_tag,
                is_nullable,
                is_catch_all: false,
                is_context_parameter: false,
            }
        }
        None => {
            let (name, is_nullable) = match inner.strip_suffix('?') {
                Some(rest) => (rest, true),
                None => (inner, false),
            };
            let (name, is_catch_all) = match name.strip_prefix('*') {
                Some(rest) => (rest, true),
                None => (name, false),
            };
            RouteParameter {
                name: lower_first_char(name),
                type_tag: TypeTag::String,
                is_nullable,
                is_catch_all,
                is_context_parameter: false,
            }
        }
    }
}

/// Parses every placeholder of a template, in template order
pub fn parse_parameters(template: &str) -> Vec<RouteParameter> {
    placeholders(template)
        .map(|placeholder| parse_parameter(placeholder.inner))
        .collect()
}

/// Lower-cases the first character when it is upper-case
fn lower_first_char(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => first.to_lowercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("p", "p", "string", false, false)]
    #[case("p?", "p", "string?", true, false)]
    #[case("*p", "p", "string", false, true)]
    #[case("*Path?", "path", "string?", true, true)]
    fn test_parse_untyped(
        #[case] inner: &str,
        #[case] name: &str,
        #[case] type_name: &str,
        #[case] nullable: bool,
        #[case] catch_all: bool,
    ) {
        let param = parse_parameter(inner);
        assert_eq!(param.name, name);
        assert_eq!(param.type_tag, TypeTag::String);
        assert_eq!(param.type_name(), type_name);
        assert_eq!(param.is_nullable, nullable);
        assert_eq!(param.is_catch_all, catch_all);
        assert!(!param.is_context_parameter);
    }

    #[rstest]
    #[case("datetime", "DateTime")]
    #[case("DateTime", "DateTime")]
    #[case("datetime?", "DateTime?")]
    #[case("DATETIME?", "DateTime?")]
    #[case("guid", "Guid")]
    #[case("Guid", "Guid")]
    #[case("guid?", "Guid?")]
    #[case("GuId?", "Guid?")]
    fn test_parse_known_tags_case_insensitive(#[case] tag: &str, #[case] type_name: &str) {
        let param = parse_parameter(&format!("value:{tag}"));
        assert_eq!(param.name, "value");
        assert_eq!(param.type_name(), type_name);
        assert!(!param.is_catch_all);
    }

    #[rstest]
    #[case("int", "int", false)]
    #[case("int?", "int?", true)]
    #[case("bool", "bool", false)]
    #[case("DateTimeOffset", "DateTimeOffset", false)]
    fn test_parse_other_tags_verbatim(
        #[case] tag: &str,
        #[case] type_name: &str,
        #[case] nullable: bool,
    ) {
        let param = parse_parameter(&format!("count:{tag}"));
        assert!(matches!(param.type_tag, TypeTag::OtherRaw(_)));
        assert_eq!(param.type_name(), type_name);
        assert_eq!(param.is_nullable, nullable);
    }

    #[test]
    fn test_typed_name_keeps_sigils() {
        // Sigils are only stripped from untyped placeholders.
        let param = parse_parameter("*rest:int");
        assert_eq!(param.name, "*rest");
        assert!(!param.is_catch_all);

        let param = parse_parameter("id?:guid");
        assert_eq!(param.name, "id?");
        assert_eq!(param.type_tag, TypeTag::Guid);
        assert!(!param.is_nullable);
    }

    #[test]
    fn test_split_on_first_colon_only() {
        let param = parse_parameter("id:int:extra");
        assert_eq!(param.name, "id");
        assert_eq!(param.type_tag, TypeTag::OtherRaw("int:extra".to_string()));
    }

    #[test]
    fn test_lower_first_char() {
        assert_eq!(lower_first_char("UserId"), "userId");
        assert_eq!(lower_first_char("userId"), "userId");
        assert_eq!(lower_first_char("U"), "u");
        assert_eq!(lower_first_char(""), "");
        assert_eq!(lower_first_char("ÉCOLE"), "éCOLE");
    }

    #[test]
    fn test_placeholders_ranges() {
        let template = "/a/{x}/b/{y:int}";
        let found: Vec<_> = placeholders(template).collect();
        assert_eq!(found.len(), 2);
        assert_eq!(&template[found[0].range.clone()], "{x}");
        assert_eq!(found[1].inner, "y:int");
    }

    #[test]
    fn test_placeholder_clone_keeps_range() {
        let first = placeholders("/x/{id}").next().unwrap();
        let cloned = first.clone();
        assert_eq!(cloned, first);
        assert_eq!(cloned.range, 3..7);
    }

    #[test]
    fn test_placeholders_none() {
        assert_eq!(placeholders("/about").count(), 0);
        assert!(parse_parameters("/").is_empty());
    }

    #[test]
    fn test_context_parameter() {
        let param = RouteParameter::context("NavigationManager", "navigationManager");
        assert!(param.is_context_parameter);
        assert_eq!(param.type_name(), "NavigationManager");
    }
}
