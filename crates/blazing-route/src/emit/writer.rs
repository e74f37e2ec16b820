//! Rendering of the document tree into C# source text.

use super::tree::{ClassDecl, CodeUnit, Expr, ListProperty, Member, MethodDecl, Using};
use crate::signature::parameter_list;

const INDENT: &str = "    ";

/// Line-oriented writer with indentation.
#[derive(Debug, Default)]
pub struct SourceWriter {
    buffer: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes one line at the current depth.
    pub fn line(&mut self, text: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.buffer.push_str(INDENT);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
        self
    }

    /// Writes an empty line (no trailing whitespace).
    pub fn blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

impl CodeUnit {
    /// Renders the whole unit.
    pub fn render(&self) -> String {
        let mut writer = SourceWriter::new();

        for line in &self.preamble {
            writer.line(line);
        }
        if !self.preamble.is_empty() {
            writer.blank();
        }

        for using in &self.usings {
            match using {
                Using::Namespace(name) => writer.line(&format!("using {name};")),
                Using::Static(name) => writer.line(&format!("using static {name};")),
            };
        }
        if !self.usings.is_empty() {
            writer.blank();
        }

        writer.line(&format!("namespace {};", self.namespace));
        writer.blank();

        self.class.write(&mut writer);
        writer.finish()
    }
}

impl ClassDecl {
    fn write(&self, writer: &mut SourceWriter) {
        writer.line(&format!("public static partial class {}", self.name));
        writer.line("{").indent();

        for member in &self.members {
            match member {
                Member::List(list) => list.write(writer),
                Member::Method(method) => method.write(writer),
                Member::Blank => {
                    writer.blank();
                }
            }
        }

        writer.dedent().line("}");
    }
}

impl ListProperty {
    fn write(&self, writer: &mut SourceWriter) {
        writer.line(&format!(
            "public static ImmutableArray<string> {} {{ get; }} = new[]",
            self.name
        ));
        writer.line("{").indent();
        for item in &self.items {
            writer.line(&format!("\"{}\",", escape_string_literal(item)));
        }
        writer.dedent().line("}.ToImmutableArray();");
    }
}

impl MethodDecl {
    /// Renders the signature and expression body on one line.
    pub fn signature(&self) -> String {
        format!(
            "public static {} {}({}) => {};",
            self.return_type,
            self.name,
            parameter_list(&self.parameters),
            self.body.render()
        )
    }

    fn write(&self, writer: &mut SourceWriter) {
        if let Some(summary) = &self.summary {
            writer.line("/// <summary>");
            writer.line(&format!("/// {}", escape_xml(summary)));
            writer.line("/// </summary>");
        }
        writer.line(&self.signature());
    }
}

impl Expr {
    pub fn render(&self) -> String {
        match self {
            Expr::Interpolated(text) => format!("$\"{text}\""),
            Expr::Invoke {
                target,
                method,
                argument,
            } => format!("{target}.{method}({argument})"),
        }
    }
}

/// Escapes text for a regular C# string literal.
pub fn escape_string_literal(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escapes text for an XML doc comment.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_writer_indentation() {
        let mut writer = SourceWriter::new();
        writer.line("a").indent().line("b").blank().dedent().dedent().line("c");
        assert_eq!(writer.finish(), "a\n    b\n\nc\n");
    }

    #[test]
    fn test_escape_string_literal() {
        assert_eq!(escape_string_literal(r#"/a\"b"#), r#"/a\\\"b"#);
        assert_eq!(escape_string_literal("/plain/{id}"), "/plain/{id}");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("/a?x=1&y=<2>"), "/a?x=1&amp;y=&lt;2&gt;");
    }

    #[test]
    fn test_expr_render() {
        assert_eq!(Expr::Interpolated("/a".to_string()).render(), "$\"/a\"");
        assert_eq!(
            Expr::Invoke {
                target: "nav".to_string(),
                method: "NavigateTo".to_string(),
                argument: "Home()".to_string(),
            }
            .render(),
            "nav.NavigateTo(Home())"
        );
    }
}
