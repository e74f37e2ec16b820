/// Route collection from declared classes and page files
///
/// Both sources contribute `(owner, template)` pairs. Contributions are
/// grouped by owner in first-seen order, declared classes before page files.

use std::collections::HashMap;

use tracing::debug;

/// Directive that declares a route in a page definition file
pub const PAGE_DIRECTIVE: &str = "@page";

/// One route template declared on a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Class identifier
    pub owner: String,
    /// Constant value of the route attribute argument
    pub template: String,
}

impl Declaration {
    pub fn new(owner: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            template: template.into(),
        }
    }
}

/// A page definition file (`.razor`) and its text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// File name without extension
    pub name: String,
    pub contents: String,
}

impl PageFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Provides route declarations found on classes
///
/// Implemented by whatever can enumerate decorated classes, e.g. a source
/// scanner or a compiler integration.
pub trait DeclarationSource {
    fn declarations(&self) -> Vec<Declaration>;
}

/// Provides page definition files
pub trait PageFileSource {
    fn page_files(&self) -> Vec<PageFile>;
}

impl DeclarationSource for [Declaration] {
    fn declarations(&self) -> Vec<Declaration> {
        self.to_vec()
    }
}

impl DeclarationSource for Vec<Declaration> {
    fn declarations(&self) -> Vec<Declaration> {
        self.clone()
    }
}

impl PageFileSource for [PageFile] {
    fn page_files(&self) -> Vec<PageFile> {
        self.to_vec()
    }
}

impl PageFileSource for Vec<PageFile> {
    fn page_files(&self) -> Vec<PageFile> {
        self.clone()
    }
}

/// A page and its distinct route templates, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    pub page_name: String,
    pub templates: Vec<String>,
}

/// Extracts the templates declared by `@page` lines
///
/// The keyword must end at a word boundary: it is followed by whitespace, a
/// quote, or the end of the line. Lines such as `@pageTitle "x"` are not
/// directives and contribute nothing.
///
/// ```
/// use blazing_route::extract_page_directives;
///
/// let razor = "@page \"/counter\"\n  @page \"/counter/{start:int}\"\n<h1>Counter</h1>";
/// assert_eq!(
///     extract_page_directives(razor),
///     vec!["/counter".to_string(), "/counter/{start:int}".to_string()]
/// );
/// ```
pub fn extract_page_directives(contents: &str) -> Vec<String> {
    contents
        .lines()
        .filter_map(parse_page_directive)
        .collect()
}

/// Parses a single line as `@page "<template>"`
fn parse_page_directive(line: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(PAGE_DIRECTIVE)?;

    // `@pageTitle` and similar are not directives
    if !rest.is_empty() && !rest.starts_with(|c: char| c.is_whitespace() || c == '"') {
        return None;
    }

    let template: String = rest.trim().chars().filter(|&c| c != '"').collect();
    let template = template.trim();

    (!template.is_empty()).then(|| template.to_string())
}

/// Accumulates pages in first-seen order
#[derive(Default)]
struct RouteIndex {
    pages: Vec<PageRoute>,
    positions: HashMap<String, usize>,
}

impl RouteIndex {
    /// Adds a template to its owner, creating the page on first sight
    fn with_template(mut self, owner: &str, template: String) -> Self {
        let position = match self.positions.get(owner) {
            Some(&position) => position,
            None => {
                self.pages.push(PageRoute {
                    page_name: owner.to_string(),
                    templates: Vec::new(),
                });
                self.positions.insert(owner.to_string(), self.pages.len() - 1);
                self.pages.len() - 1
            }
        };

        let page = &mut self.pages[position];
        if page.templates.contains(&template) {
            debug!("Skipping duplicate route {} on {}", template, owner);
        } else {
            page.templates.push(template);
        }
        self
    }

    fn into_pages(self) -> Vec<PageRoute> {
        self.pages
    }
}

/// Merges both sources into pages (pure given its inputs)
///
/// Declared classes are consumed first, so a class and a page file sharing a
/// name produce one page whose class templates come first. Pages only exist
/// once they have a template, so files without `@page` lines never appear.
pub fn collect_routes<D, P>(declarations: &D, page_files: &P) -> Vec<PageRoute>
where
    D: DeclarationSource + ?Sized,
    P: PageFileSource + ?Sized,
{
    let from_classes = declarations
        .declarations()
        .into_iter()
        .map(|declaration| (declaration.owner, declaration.template));

    let from_files = page_files.page_files().into_iter().flat_map(|file| {
        let templates = extract_page_directives(&file.contents);
        debug!("{} declares {} route(s)", file.name, templates.len());
        templates
            .into_iter()
            .map(move |template| (file.name.clone(), template))
    });

    let pages = from_classes
        .chain(from_files)
        .fold(RouteIndex::default(), |index, (owner, template)| {
            index.with_template(&owner, template)
        })
        .into_pages();

    debug!("Collected {} page(s)", pages.len());
    pages
}
