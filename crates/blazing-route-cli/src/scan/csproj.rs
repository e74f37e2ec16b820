// File: src/scan/csproj.rs
// Purpose: Resolve the compilation identity (assembly name) of a project

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static ASSEMBLY_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<AssemblyName>\s*([^<]+?)\s*</AssemblyName>").unwrap());

/// Assembly name of a project: `<AssemblyName>` when set, else the file stem
///
/// This mirrors what MSBuild uses as the compilation identity.
pub fn assembly_name(csproj_path: &Path, contents: &str) -> Option<String> {
    ASSEMBLY_NAME_REGEX
        .captures(contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        // MSBuild properties like $(MSBuildProjectName) need evaluation; fall back
        .filter(|name| !name.contains("$("))
        .or_else(|| {
            csproj_path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
}
