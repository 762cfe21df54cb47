//! The vocabulary configuration threaded through a generation run.

/// Name, namespace prefix and optional package of the vocabulary being generated.
///
/// Built from inferred defaults and then overridden by whatever the caller
/// supplies explicitly. `prefix` must be set (and non-blank) before emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VocabularySpec {
    /// Display name; lowercased, it becomes the `PREFIX` constant.
    pub name: Option<String>,
    /// Namespace IRI shared by every term.
    pub prefix: Option<String>,
    /// Target package or module path of the generated code.
    pub package: Option<String>,
}

impl VocabularySpec {
    /// Applies explicit overrides. Blank override values are ignored, so an
    /// empty answer to a prompt keeps the inferred default.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &VocabularySpec) -> Self {
        if let Some(name) = non_blank(overrides.name.as_deref()) {
            self.name = Some(name.to_string());
        }
        if let Some(prefix) = non_blank(overrides.prefix.as_deref()) {
            self.prefix = Some(prefix.to_string());
        }
        if let Some(package) = non_blank(overrides.package.as_deref()) {
            self.package = Some(package.to_string());
        }
        self
    }

    /// The prefix, if set and non-blank.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        non_blank(self.prefix.as_deref())
    }

    /// The name, if set and non-blank.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    /// The package, if set and non-blank.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        non_blank(self.package.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
