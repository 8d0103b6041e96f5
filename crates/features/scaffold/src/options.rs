use std::path::PathBuf;
use typed_builder::TypedBuilder;

/// Parsed options for one scaffolding run.
///
/// ```rust
/// use mkts_scaffold::ScaffoldOptions;
///
/// let options = ScaffoldOptions::builder().name("demo").parent("/tmp").git(true).build();
/// assert!(options.install);
/// assert!(!options.challenge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct ScaffoldOptions {
    /// Package and folder name.
    #[builder(setter(into))]
    pub name: String,
    /// Directory the project folder is created in.
    #[builder(setter(into))]
    pub parent: PathBuf,
    /// Initialize version control.
    #[builder(default)]
    pub git: bool,
    /// Lay out the coding challenge template.
    #[builder(default)]
    pub challenge: bool,
    /// Run the package manager for the configured dependencies.
    #[builder(default = true)]
    pub install: bool,
}
