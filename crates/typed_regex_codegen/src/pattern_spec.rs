use crate::options::RegexOptions;

/// Everything the core needs to know about one declared matcher type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatternSpec {
    /// Name of the generated type.
    #[cfg_attr(feature = "serde", serde(rename = "name"))]
    pub type_name: String,
    /// The regular expression.
    pub pattern: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: RegexOptions,
    /// Modules to nest the type in, outermost first. Empty places the type
    /// wherever the output lands.
    #[cfg_attr(feature = "serde", serde(default, rename = "module"))]
    pub module_path: Vec<String>,
}

impl PatternSpec {
    pub fn new(type_name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            pattern: pattern.into(),
            options: RegexOptions::default(),
            module_path: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: RegexOptions) -> Self {
        self.options = options;
        self
    }

    /// Nest the type in `path`, given as `a::b::c`.
    pub fn in_module(mut self, path: &str) -> Self {
        self.module_path = path
            .split("::")
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect();
        self
    }
}
