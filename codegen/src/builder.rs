//! The generation pipeline: load, infer, extract, describe, render, write.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::describe::resolve_description;
use crate::emit::write_file;
use crate::error::{Error, Result};
use crate::extract::{extract_terms, KeyCollision};
use crate::graph::Graph;
use crate::infer::infer;
use crate::loader;
use crate::render::{Language, Vocabulary};
use crate::vocabulary::VocabularySpec;

/// Report of what was generated.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// File written, if the run wrote one.
    pub output: Option<PathBuf>,
    /// Vocabulary name used.
    pub name: String,
    /// Namespace prefix used.
    pub prefix: String,
    /// Number of term constants emitted.
    pub term_count: usize,
    /// Number of those terms that carry a description.
    pub described_count: usize,
    /// Key collisions resolved by last-write-wins.
    pub collisions: Vec<KeyCollision>,
}

/// A loaded vocabulary plus the configuration that will be used to emit it.
///
/// Construction infers the default prefix and name; callers may then adjust
/// [`VocabularyBuilder::spec_mut`] before calling [`VocabularyBuilder::run`].
#[derive(Debug, Clone)]
pub struct VocabularyBuilder {
    graph: Graph,
    spec: VocabularySpec,
}

impl VocabularyBuilder {
    /// Loads the vocabulary at `path` and infers its defaults.
    ///
    /// # Errors
    ///
    /// Propagates the loader errors: [`Error::FileNotFound`],
    /// [`Error::UnknownFormat`], [`Error::Parse`] and [`Error::Io`].
    pub fn load(path: &Path, format: Option<&str>, base: Option<&str>) -> Result<Self> {
        let graph = loader::load(path, format, base)?;
        let spec = infer(&graph, path);
        debug!(
            prefix = spec.prefix.as_deref().unwrap_or("<none>"),
            name = spec.name.as_deref().unwrap_or("<none>"),
            "inferred defaults"
        );
        Ok(Self { graph, spec })
    }

    /// Wraps an already loaded graph; nothing is inferred.
    #[must_use]
    pub fn from_graph(graph: Graph, spec: VocabularySpec) -> Self {
        Self { graph, spec }
    }

    /// The loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The current configuration.
    #[must_use]
    pub fn spec(&self) -> &VocabularySpec {
        &self.spec
    }

    /// Mutable access to the configuration.
    pub fn spec_mut(&mut self) -> &mut VocabularySpec {
        &mut self.spec
    }

    /// Applies explicit overrides on top of the inferred defaults.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &VocabularySpec) -> Self {
        self.spec = self.spec.with_overrides(overrides);
        self
    }

    /// Renders the source text without touching the file system.
    ///
    /// `type_name` names the generated type where the language needs one
    /// (the Java class) and is the fallback vocabulary name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if no prefix is set or two terms map to
    /// the same identifier.
    pub fn render(&self, type_name: &str, language: Language) -> Result<(String, GenerationReport)> {
        let prefix = self.spec.prefix().ok_or_else(|| {
            Error::Generation("could not detect prefix, please set explicitly".to_string())
        })?;
        let name = self.spec.name().unwrap_or(type_name);

        let mut table = extract_terms(&self.graph, prefix);
        for collision in table.collisions() {
            warn!(
                key = %collision.key,
                kept = %collision.kept,
                dropped = %collision.dropped,
                "two terms share a key; keeping the later one"
            );
        }
        for entry in table.entries_mut() {
            entry.description = resolve_description(&self.graph, &entry.uri);
        }

        let terms = table.sorted();
        let vocab = Vocabulary {
            name,
            prefix,
            package: self.spec.package(),
            type_name,
            terms,
        };
        let source = language.render(&vocab)?;

        let report = GenerationReport {
            output: None,
            name: name.to_string(),
            prefix: prefix.to_string(),
            term_count: vocab.terms.len(),
            described_count: vocab.terms.iter().filter(|t| t.description.is_some()).count(),
            collisions: table.collisions().to_vec(),
        };
        Ok((source, report))
    }

    /// Renders the vocabulary and writes it to `output`.
    ///
    /// The output file stem names the generated type and is the fallback
    /// vocabulary name. Nothing is written if rendering fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if the configuration is incomplete and
    /// [`Error::Io`] if the file cannot be written.
    pub fn run(&self, output: &Path, language: Language) -> Result<GenerationReport> {
        let type_name = output
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                Error::Generation(format!("output path has no file name: {}", output.display()))
            })?;

        let (source, mut report) = self.render(type_name, language)?;
        write_file(output, &source)?;
        info!(
            output = %output.display(),
            terms = report.term_count,
            %language,
            "vocabulary written"
        );
        report.output = Some(output.to_path_buf());
        Ok(report)
    }
}
