use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for launcher operations.
///
/// Every variant is fatal at this layer: the launcher either hands off to the
/// runtime or aborts before doing any work. There is nothing to retry.
#[derive(Debug, Error)]
pub enum AppError {
    /// The location of the running code could not be resolved.
    #[error("{resource}: unable to resolve own location: {details}")]
    ResourceNotFound { resource: String, details: String },

    /// A reported origin does not have the packaged-archive shape.
    ///
    /// Expected when running unpackaged, e.g. straight from a build tree.
    #[error("{resource}: origin '{origin}' is not a packaged archive")]
    NotPackaged { resource: String, origin: String },

    /// The artifact path has no grandparent directory to use as the
    /// installation root.
    #[error("cannot derive installation root from '{}'", artifact.display())]
    NoInstallRoot { artifact: PathBuf },

    /// The runtime program could not be started.
    #[error("failed to start runtime '{program}': {details}")]
    RuntimeStart { program: String, details: String },
}
