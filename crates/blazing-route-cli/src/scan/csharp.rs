// File: src/scan/csharp.rs
// Purpose: Find classes decorated with [Route("...")] in C# sources

use anyhow::{bail, Result};
use blazing_route::Declaration;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Either a route attribute (inside an attribute list) or a class header
static DECLARATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        [\[,]\s*
        (?:global::)?(?:Microsoft\.AspNetCore\.Components\.)?Route(?:Attribute)?
        \s*\(\s*
        (?P<arg>@"(?:[^"]|"")*"|"(?:[^"\\]|\\.)*"|[^)]*?)
        \s*\)
        |
        \bclass\s+(?P<class>[A-Za-z_][A-Za-z0-9_]*)
        "#,
    )
    .unwrap()
});

/// Scans C# source text for route declarations
///
/// Route attributes are attached to the next class header. Only string
/// literals (regular or verbatim) can be evaluated; any other argument is an
/// error, since the route it declares cannot be known without a compiler.
pub fn scan_route_attributes(source: &str) -> Result<Vec<Declaration>> {
    let code = strip_comments(source);

    let mut declarations = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for caps in DECLARATION_REGEX.captures_iter(&code) {
        if let Some(arg) = caps.name("arg") {
            pending.push(arg.as_str().to_string());
            continue;
        }

        if let Some(class) = caps.name("class") {
            for arg in pending.drain(..) {
                match evaluate_string_literal(&arg) {
                    Some(template) => {
                        declarations.push(Declaration::new(class.as_str(), template))
                    }
                    None => bail!(
                        "route attribute on class {} is not a string literal: {}",
                        class.as_str(),
                        arg
                    ),
                }
            }
        }
    }

    if !pending.is_empty() {
        warn!("Ignoring {} route attribute(s) not followed by a class", pending.len());
    }

    Ok(declarations)
}

/// Lexical context while stripping comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    LineComment,
    BlockComment,
    Text,
    VerbatimText,
    Character,
}

/// Blanks out `//` and `/* */` comments so commented-out attributes are ignored
///
/// Comment markers inside string and character literals are kept. Newlines
/// survive, so line structure is unchanged.
fn strip_comments(source: &str) -> String {
    let mut code = String::with_capacity(source.len());
    let mut state = Lexeme::Code;
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            Lexeme::Code => match (c, chars.peek().copied()) {
                ('/', Some('/')) => {
                    chars.next();
                    code.push_str("  ");
                    state = Lexeme::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    code.push_str("  ");
                    state = Lexeme::BlockComment;
                }
                ('@', Some('"')) => {
                    chars.next();
                    code.push_str("@\"");
                    state = Lexeme::VerbatimText;
                }
                ('"', _) => {
                    code.push(c);
                    state = Lexeme::Text;
                }
                ('\'', _) => {
                    code.push(c);
                    state = Lexeme::Character;
                }
                _ => code.push(c),
            },
            Lexeme::LineComment => {
                if c == '\n' {
                    code.push(c);
                    state = Lexeme::Code;
                } else {
                    code.push(' ');
                }
            }
            Lexeme::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    code.push_str("  ");
                    state = Lexeme::Code;
                } else {
                    code.push(if c == '\n' { c } else { ' ' });
                }
            }
            Lexeme::Text | Lexeme::Character => {
                code.push(c);
                let closing = if state == Lexeme::Text { '"' } else { '\'' };
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        code.push(escaped);
                    }
                } else if c == closing || c == '\n' {
                    state = Lexeme::Code;
                }
            }
            Lexeme::VerbatimText => {
                code.push(c);
                if c == '"' {
                    // `""` is an escaped quote
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        code.push('"');
                    } else {
                        state = Lexeme::Code;
                    }
                }
            }
        }
    }

    code
}

/// Evaluates a C# string literal, regular or verbatim
pub fn evaluate_string_literal(literal: &str) -> Option<String> {
    if let Some(inner) = literal
        .strip_prefix("@\"")
        .and_then(|rest| rest.strip_suffix('"'))
    {
        return Some(inner.replace("\"\"", "\""));
    }

    let inner = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next()? {
            'n' => value.push('\n'),
            't' => value.push('\t'),
            'r' => value.push('\r'),
            '0' => value.push('\0'),
            other => value.push(other),
        }
    }

    Some(value)
}
