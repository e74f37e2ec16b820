//! Document tree of the generated unit.
//!
//! The tree is built first and rendered last, so fragments can be inspected
//! in tests without diffing the whole unit.

use crate::parameter::RouteParameter;

/// A `using` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Using {
    /// `using System;`
    Namespace(String),
    /// `using static System.Globalization.CultureInfo;`
    Static(String),
}

/// One generated source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeUnit {
    /// Lines emitted verbatim before the usings (comments, pragmas).
    pub preamble: Vec<String>,
    pub usings: Vec<Using>,
    /// File-scoped namespace.
    pub namespace: String,
    pub class: ClassDecl,
}

/// `public static partial class <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub members: Vec<Member>,
}

impl ClassDecl {
    /// Methods in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
        self.members.iter().filter_map(|member| match member {
            Member::Method(method) => Some(method),
            _ => None,
        })
    }

    /// The `All` list, if emitted.
    pub fn list(&self) -> Option<&ListProperty> {
        self.members.iter().find_map(|member| match member {
            Member::List(list) => Some(list),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    List(ListProperty),
    Method(MethodDecl),
    /// Empty line between groups of members.
    Blank,
}

/// `public static ImmutableArray<string> <name> { get; }` initialised from `items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListProperty {
    pub name: String,
    pub items: Vec<String>,
}

/// `public static <return_type> <name>(<parameters>) => <body>;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Text of the `<summary>` doc comment.
    pub summary: Option<String>,
    pub return_type: String,
    pub name: String,
    pub parameters: Vec<RouteParameter>,
    pub body: Expr,
}

/// Expression body of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `$"<text>"`, where `text` is already a valid interpolated string body.
    Interpolated(String),
    /// `<target>.<method>(<argument>)`
    Invoke {
        target: String,
        method: String,
        argument: String,
    },
}
