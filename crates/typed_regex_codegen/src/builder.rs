//! Generation from a build script.
//!
//! ```ignore
//! // build.rs
//! use typed_regex_codegen::{Builder, PatternSpec, RegexOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let out = std::path::Path::new(&std::env::var("OUT_DIR")?).join("patterns.rs");
//!     Builder::new()
//!         .pattern(PatternSpec::new("Semver", r"^(?<major>\d+)\.(?<minor>\d+)\.(?<patch>\d+)$"))
//!         .pattern(
//!             PatternSpec::new("Header", r"^(?<name>[a-z-]+):\s*(?<value>.*)$")
//!                 .with_options(RegexOptions::new().ignore_case(true)),
//!         )
//!         .write_to(&out)?;
//!     Ok(())
//! }
//! ```
//!
//! and in the crate: `include!(concat!(env!("OUT_DIR"), "/patterns.rs"));`

use std::path::Path;

use proc_macro2::TokenStream;

use crate::error::{BuildError, DeclarationFailure, GenerateError};
use crate::pattern_spec::PatternSpec;
use crate::resolver::resolve;
use crate::synthesizer::{DEFAULT_RUNTIME_PATH, Synthesizer};

/// Collects declarations and renders them into one Rust source file.
#[derive(Debug, Clone)]
pub struct Builder {
    specs: Vec<PatternSpec>,
    runtime: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    pub fn new() -> Self {
        Self {
            specs: Vec::new(),
            runtime: DEFAULT_RUNTIME_PATH.to_owned(),
        }
    }

    pub fn pattern(mut self, spec: PatternSpec) -> Self {
        self.specs.push(spec);
        self
    }

    pub fn patterns(mut self, specs: impl IntoIterator<Item = PatternSpec>) -> Self {
        self.specs.extend(specs);
        self
    }

    /// Path generated code uses for the runtime crate, `::typed_regex` by
    /// default. Needed when the runtime is renamed in `Cargo.toml`.
    pub fn runtime_path(mut self, path: impl Into<String>) -> Self {
        self.runtime = path.into();
        self
    }

    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }

    /// Generate every declaration on its own; one failure does not affect
    /// the others.
    pub fn generate_all(&self) -> Result<Vec<Result<TokenStream, GenerateError>>, BuildError> {
        let runtime = syn::parse_str::<syn::Path>(&self.runtime).map_err(|_| {
            GenerateError::InvalidRuntimePath {
                path: self.runtime.clone(),
            }
        })?;

        Ok(self
            .specs
            .iter()
            .map(|spec| {
                let resolved = resolve(spec)?;
                Synthesizer::new(spec, &resolved)
                    .runtime_path(runtime.clone())
                    .emit()
            })
            .collect())
    }

    /// Render all declarations, or report every one that failed.
    pub fn generate(&self) -> Result<String, BuildError> {
        let mut output = TokenStream::new();
        let mut failures = Vec::new();

        for (spec, result) in self.specs.iter().zip(self.generate_all()?) {
            match result {
                Ok(tokens) => output.extend(tokens),
                Err(error) => {
                    tracing::warn!(type_name = %spec.type_name, %error, "declaration failed");
                    failures.push(DeclarationFailure {
                        type_name: spec.type_name.clone(),
                        error,
                    });
                }
            }
        }

        if !failures.is_empty() {
            return Err(BuildError::Declarations(failures));
        }

        Ok(format!(
            "// @generated by typed_regex_codegen. Do not edit.\n\n{output}\n"
        ))
    }

    /// Generate and write the file at `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), BuildError> {
        let path = path.as_ref();
        let source = self.generate()?;
        std::fs::write(path, source).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), patterns = self.specs.len(), "wrote generated matchers");
        Ok(())
    }
}

/// JSON manifest listing declarations:
///
/// ```json
/// {
///   "runtime": "::typed_regex",
///   "patterns": [
///     { "name": "IsoDate", "pattern": "^(?<year>\\d{4})-(?<month>\\d{2})", "module": ["dates"] },
///     { "name": "Username", "pattern": "^[a-z]+$", "options": { "ignore_case": true } }
///   ]
/// }
/// ```
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Deserialize)]
struct Manifest {
    #[serde(default = "default_runtime")]
    runtime: String,
    patterns: Vec<PatternSpec>,
}

#[cfg(feature = "serde")]
fn default_runtime() -> String {
    DEFAULT_RUNTIME_PATH.to_owned()
}

#[cfg(feature = "serde")]
impl Builder {
    /// Load declarations from a JSON manifest.
    pub fn from_manifest(json: &str) -> Result<Self, BuildError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        Ok(Self::new()
            .runtime_path(manifest.runtime)
            .patterns(manifest.patterns))
    }

    /// Load declarations from a JSON manifest file.
    pub fn from_manifest_file(path: impl AsRef<Path>) -> Result<Self, BuildError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_manifest(&json)
    }
}
