// File: src/scan/project.rs
// Purpose: Discovers route sources in a Blazor project directory

use anyhow::{Context, Result};
use blazing_route::{Declaration, DeclarationSource, PageFile, PageFileSource};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::csharp::scan_route_attributes;
use super::csproj::assembly_name;

/// Build output and tooling directories that never hold page sources
const SKIPPED_DIRS: &[&str] = &["bin", "obj", "node_modules"];

/// Route sources and identity of one project
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    identity: Option<String>,
    declarations: Vec<Declaration>,
    page_files: Vec<PageFile>,
}

impl Project {
    /// Scan a project directory
    ///
    /// Walks the tree in file-name order so repeated scans see sources in the
    /// same order. `.razor` files become page files; `.cs` files are searched
    /// for route attributes. Generated `*.g.cs` files are skipped.
    pub fn scan(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            anyhow::bail!("Project directory not found: {:?}", root);
        }

        let mut identity = None;
        let mut declarations = Vec::new();
        let mut page_files = Vec::new();

        let walker = WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry));

        for entry in walker {
            let entry = entry.with_context(|| format!("Failed to walk {:?}", root))?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy();

            match path.extension().and_then(|s| s.to_str()) {
                Some("razor") => {
                    let contents = read(path)?;
                    let name = path
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or_default()
                        .to_string();
                    debug!("Page file: {:?}", path);
                    page_files.push(PageFile::new(name, contents));
                }
                Some("cs") if !file_name.ends_with(".g.cs") => {
                    let contents = read(path)?;
                    let found = scan_route_attributes(&contents)
                        .with_context(|| format!("Failed to evaluate routes in {:?}", path))?;
                    if !found.is_empty() {
                        debug!("{} route attribute(s) in {:?}", found.len(), path);
                    }
                    declarations.extend(found);
                }
                Some("csproj") if entry.depth() == 1 => {
                    if identity.is_some() {
                        warn!("Multiple project files in {:?}, ignoring {:?}", root, path);
                        continue;
                    }
                    identity = assembly_name(path, &read(path)?);
                }
                _ => {}
            }
        }

        Ok(Self {
            root,
            identity,
            declarations,
            page_files,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Assembly name from the project file, if one was found
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }
}

impl DeclarationSource for Project {
    fn declarations(&self) -> Vec<Declaration> {
        self.declarations.clone()
    }
}

impl PageFileSource for Project {
    fn page_files(&self) -> Vec<PageFile> {
        self.page_files.clone()
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    entry.file_type().is_dir() && (name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))
}
