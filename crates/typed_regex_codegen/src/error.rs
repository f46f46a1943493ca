use std::path::PathBuf;

use thiserror::Error;

/// Why generation failed for one declaration.
///
/// Any of these aborts the declaration it belongs to; nothing is emitted
/// for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The evaluator rejected the pattern or its options.
    #[error("pattern failed to compile: {message}")]
    PatternCompilation { message: String },

    /// Two capture groups legalize to the same accessor name.
    #[error(
        "capture groups {first} and {second} both map to accessor `{identifier}`; rename one of them"
    )]
    DuplicateAccessor {
        identifier: String,
        first: usize,
        second: usize,
    },

    /// A group name that cannot become a Rust method name.
    #[error("capture group {index} (`{raw_name}`) legalizes to `{identifier}`, which is not a valid Rust identifier")]
    InvalidAccessor {
        index: usize,
        raw_name: String,
        identifier: String,
    },

    /// A group name that collides with a generated constant.
    #[error("capture group {index} legalizes to `{identifier}`, which is reserved by the generated type")]
    ReservedAccessor { index: usize, identifier: String },

    #[error("`{name}` is not a valid type name")]
    InvalidTypeName { name: String },

    #[error("`{segment}` is not a valid module name")]
    InvalidModulePath { segment: String },

    #[error("`{path}` is not a valid runtime crate path")]
    InvalidRuntimePath { path: String },
}

impl From<regex::Error> for GenerateError {
    fn from(err: regex::Error) -> Self {
        GenerateError::PatternCompilation {
            message: err.to_string(),
        }
    }
}

/// Failure of a whole build-script run.
#[derive(Debug, Error)]
pub enum BuildError {
    /// At least one declaration failed; every failure is listed.
    #[error("{} declaration(s) failed to generate:{}", .0.len(), render_failures(.0))]
    Declarations(Vec<DeclarationFailure>),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "serde")]
    #[error("invalid pattern manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// A failed declaration, attributed to its destination type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationFailure {
    pub type_name: String,
    pub error: GenerateError,
}

fn render_failures(failures: &[DeclarationFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("\n  {}: {}", f.type_name, f.error))
        .collect()
}
