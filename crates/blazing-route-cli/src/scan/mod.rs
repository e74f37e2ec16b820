//! Project scanning: route sources and compilation identity.

pub mod csharp;
pub mod csproj;
mod project;

pub use project::Project;
