/// Template → interpolated string rewriting
///
/// Each placeholder becomes an interpolation hole that formats its value
/// with the invariant culture, so generated URLs do not depend on the
/// current thread culture.

use crate::parameter::{placeholders, RouteParameter, TypeTag};

/// Format string used for `DateTime` parameters
pub const DATE_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss";

/// Format string used for `Guid` parameters (hyphenated, no braces)
pub const GUID_FORMAT: &str = "D";

/// Culture passed to every `ToString` call
///
/// Resolved through `using static System.Globalization.CultureInfo;` in the
/// generated unit.
pub const INVARIANT_CULTURE: &str = "InvariantCulture";

/// Builds the interpolation hole for one parameter, braces included
///
/// ```
/// use blazing_route::{interpolation, parse_parameter};
///
/// assert_eq!(
///     interpolation(&parse_parameter("id:guid")),
///     "{id.ToString(\"D\", InvariantCulture)}"
/// );
/// assert_eq!(
///     interpolation(&parse_parameter("term?")),
///     "{term?.ToString(InvariantCulture)}"
/// );
/// ```
pub fn interpolation(parameter: &RouteParameter) -> String {
    let null_conditional = if parameter.is_nullable { "?" } else { "" };

    let format_call = match parameter.type_tag {
        TypeTag::DateTime => format!(".ToString(\"{DATE_TIME_FORMAT}\", {INVARIANT_CULTURE})"),
        TypeTag::Guid => format!(".ToString(\"{GUID_FORMAT}\", {INVARIANT_CULTURE})"),
        TypeTag::String | TypeTag::OtherRaw(_) => format!(".ToString({INVARIANT_CULTURE})"),
    };

    format!("{{{}{}{}}}", parameter.name, null_conditional, format_call)
}

/// Rewrites a template into the body of an interpolated string
///
/// The i-th placeholder, scanning left to right, is replaced using the i-th
/// parameter. Identical placeholder text at two positions still maps to two
/// different parameters. Literal text between placeholders is escaped for an
/// interpolated string; placeholders without a matching parameter are kept
/// as literal text.
///
/// ```
/// use blazing_route::{parse_parameters, rewrite};
///
/// let template = "/users/{id:guid}/posts/{page?}";
/// assert_eq!(
///     rewrite(template, &parse_parameters(template)),
///     "/users/{id.ToString(\"D\", InvariantCulture)}/posts/{page?.ToString(InvariantCulture)}"
/// );
/// ```
pub fn rewrite(template: &str, parameters: &[RouteParameter]) -> String {
    let mut rewritten = String::with_capacity(template.len() * 2);
    let mut cursor = 0;

    for (placeholder, parameter) in placeholders(template).zip(parameters) {
        push_literal(&mut rewritten, &template[cursor..placeholder.range.start]);
        rewritten.push_str(&interpolation(parameter));
        cursor = placeholder.range.end;
    }

    push_literal(&mut rewritten, &template[cursor..]);
    rewritten
}

/// Appends text that must read literally inside `$"..."`
fn push_literal(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '{' => out.push_str("{{"),
            '}' => out.push_str("}}"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{parse_parameter, parse_parameters};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("when:datetime", "{when.ToString(\"yyyy-MM-dd HH:mm:ss\", InvariantCulture)}")]
    #[case("when:datetime?", "{when?.ToString(\"yyyy-MM-dd HH:mm:ss\", InvariantCulture)}")]
    #[case("id:guid", "{id.ToString(\"D\", InvariantCulture)}")]
    #[case("id:guid?", "{id?.ToString(\"D\", InvariantCulture)}")]
    #[case("name", "{name.ToString(InvariantCulture)}")]
    #[case("name?", "{name?.ToString(InvariantCulture)}")]
    #[case("*rest", "{rest.ToString(InvariantCulture)}")]
    #[case("count:int", "{count.ToString(InvariantCulture)}")]
    #[case("count:int?", "{count?.ToString(InvariantCulture)}")]
    fn test_interpolation_suffix(#[case] inner: &str, #[case] expected: &str) {
        assert_eq!(interpolation(&parse_parameter(inner)), expected);
    }

    #[test]
    fn test_rewrite_static_template() {
        assert_eq!(rewrite("/about", &[]), "/about");
    }

    #[test]
    fn test_rewrite_keeps_positions_for_identical_placeholders() {
        let template = "/{Part}/{Part}";
        let mut parameters = parse_parameters(template);
        parameters[1].name = "second".to_string();
        parameters[1].type_tag = TypeTag::Guid;

        assert_eq!(
            rewrite(template, &parameters),
            "/{part.ToString(InvariantCulture)}/{second.ToString(\"D\", InvariantCulture)}"
        );
    }

    #[test]
    fn test_rewrite_mixed_template() {
        let template = "/archive/{from:datetime}/{*slug}";
        assert_eq!(
            rewrite(template, &parse_parameters(template)),
            "/archive/{from.ToString(\"yyyy-MM-dd HH:mm:ss\", InvariantCulture)}/{slug.ToString(InvariantCulture)}"
        );
    }

    #[test]
    fn test_rewrite_missing_parameters_keeps_literal_text() {
        assert_eq!(rewrite("/a/{x}", &[]), "/a/{{x}}");
    }

    #[test]
    fn test_rewrite_escapes_literal_text() {
        assert_eq!(rewrite("/odd}brace", &[]), "/odd}}brace");
        assert_eq!(rewrite(r"/back\slash", &[]), r"/back\\slash");
    }
}
