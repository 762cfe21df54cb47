//! vocabgen code generator.
//!
//! Reads an RDF vocabulary (Turtle, N-Triples, N3 or RDF/XML) and generates a
//! source file exposing every term under the vocabulary's namespace as a
//! named constant, together with `NAMESPACE` and `PREFIX` constants.
//!
//! # Pipeline
//!
//! 1. [`loader`] parses the document into an in-memory [`Graph`].
//! 2. [`infer`] derives the default prefix (from an `owl:Ontology` subject)
//!    and name (from the file name).
//! 3. The caller may override prefix, name and package.
//! 4. [`extract`] keys every subject under the prefix by its sanitized local name.
//! 5. [`describe`] resolves a description per term.
//! 6. [`render`] produces the source text, which [`emit`] writes atomically.
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use vocabgen_codegen::{Language, VocabularyBuilder, VocabularySpec};
//!
//! let builder = VocabularyBuilder::load(Path::new("ldp.ttl"), None, None)?
//!     .with_overrides(&VocabularySpec {
//!         package: Some("vocab".into()),
//!         ..VocabularySpec::default()
//!     });
//! let report = builder.run(Path::new("src/Ldp.rs"), Language::Rust)?;
//! println!("{} terms", report.term_count);
//! # Ok::<(), vocabgen_codegen::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod describe;
pub mod emit;
pub mod error;
pub mod extract;
pub mod graph;
pub mod infer;
pub mod iris;
pub mod loader;
pub mod mapping;
pub mod render;
pub mod vocabulary;

pub use builder::{GenerationReport, VocabularyBuilder};
pub use error::{Error, Result};
pub use extract::{KeyCollision, TermEntry, TermTable};
pub use graph::{Graph, Literal, Node, Statement};
pub use loader::Format;
pub use render::Language;
pub use vocabulary::VocabularySpec;
