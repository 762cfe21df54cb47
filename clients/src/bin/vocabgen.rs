//! `vocabgen`: generates a constants file from an RDF vocabulary.
//!
//! Loads the vocabulary, infers its namespace prefix and name, applies any
//! overrides given on the command line (or answered at the prompt with
//! `--interactive`) and writes `<out>/<Name>.rs` or `<out>/<Name>.java`.
//!
//! **Usage:**
//! ```
//! vocabgen <FILE> [--format <MIME>] [--prefix <IRI>] [--name <NAME>]
//!          [--package <PATH>] [--out <DIR>] [--output <FILE>]
//!          [--language rust|java] [--base <IRI>] [--interactive] [-v...]
//! ```
//!
//! Exits non-zero if the vocabulary cannot be loaded or generated.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vocabgen_codegen::{Language, VocabularyBuilder, VocabularySpec};

/// Generate a constants file from an RDF vocabulary.
#[derive(Parser)]
#[command(
    name = "vocabgen",
    version,
    about = "Generate typed term constants from an RDF vocabulary"
)]
struct Args {
    /// Vocabulary file (Turtle, N-Triples, N3 or RDF/XML).
    input: Option<PathBuf>,

    /// MIME type or format name of the input [default: guessed from the extension].
    #[arg(short, long, value_name = "MIME")]
    format: Option<String>,

    /// Namespace IRI shared by all terms [default: the owl:Ontology subject].
    #[arg(short, long, value_name = "IRI")]
    prefix: Option<String>,

    /// Vocabulary name [default: the capitalized input file name].
    #[arg(short, long)]
    name: Option<String>,

    /// Package (Java) or module path (Rust) of the generated code.
    #[arg(long, value_name = "PATH")]
    package: Option<String>,

    /// Output directory; the file is named after the vocabulary.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,

    /// Full output file path; overrides --out.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Language of the generated file.
    #[arg(short, long, value_enum, default_value_t = Target::Rust)]
    language: Target,

    /// Base IRI for resolving relative IRIs in the input.
    #[arg(long, value_name = "IRI")]
    base: Option<String>,

    /// Prompt for every setting, showing the inferred default.
    #[arg(short, long)]
    interactive: bool,

    /// Increase log verbosity (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Target language choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    /// A Rust module of `const` terms.
    Rust,
    /// A Java class of Sesame `URI` constants.
    Java,
}

impl From<Target> for Language {
    fn from(target: Target) -> Self {
        match target {
            Target::Rust => Language::Rust,
            Target::Java => Language::Java,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout(), args.interactive);
    run(args, &mut prompt)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<R: BufRead, W: Write>(args: Args, prompt: &mut Prompt<R, W>) -> Result<()> {
    let language = Language::from(args.language);

    if args.interactive {
        prompt.say("*** RDF Namespace Constants Constructor ***")?;
    }

    let input = match args.input {
        Some(input) => input,
        None if args.interactive => PathBuf::from(prompt.ask("insert filepath", "")?),
        None => bail!("no input file given (pass a path or use --interactive)"),
    };
    if input.as_os_str().is_empty() {
        bail!("no input file given");
    }

    let guessed = args.format.clone().or_else(|| guess_mime(&input).map(str::to_string));
    let format = match guessed {
        Some(mime) if args.interactive && args.format.is_none() => {
            Some(prompt.ask("insert file mimetype", &mime)?)
        }
        other => other,
    };
    debug!(input = %input.display(), format = format.as_deref().unwrap_or("<none>"), "loading");

    let mut builder = VocabularyBuilder::load(&input, format.as_deref(), args.base.as_deref())
        .with_context(|| format!("Failed to load {}", input.display()))?
        .with_overrides(&VocabularySpec {
            name: args.name,
            prefix: args.prefix,
            package: args.package,
        });

    let mut out_dir = args.out;
    if args.interactive {
        let spec = builder.spec().clone();
        let answers = VocabularySpec {
            prefix: Some(prompt.ask("insert url-prefix", spec.prefix().unwrap_or(""))?),
            name: Some(prompt.ask("insert class name", spec.name().unwrap_or(""))?),
            package: Some(prompt.ask("insert package name", spec.package().unwrap_or(""))?),
        };
        builder = builder.with_overrides(&answers);
        if args.output.is_none() {
            let current = out_dir.to_string_lossy().into_owned();
            out_dir = PathBuf::from(prompt.ask("insert output folder", &current)?);
        }
    }

    let output = match args.output {
        Some(output) => output,
        None => {
            let stem = builder.spec().name().unwrap_or("Vocabulary");
            out_dir.join(format!("{stem}.{}", language.extension()))
        }
    };

    let report = builder
        .run(&output, language)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    prompt.say(&format!(
        "Generated {} terms ({} described) for {} <{}>",
        report.term_count, report.described_count, report.name, report.prefix
    ))?;
    for collision in &report.collisions {
        prompt.say(&format!(
            "  warning: <{}> and <{}> share key `{}`; kept <{}>",
            collision.dropped, collision.kept, collision.key, collision.kept
        ))?;
    }
    prompt.say(&format!("*** file created: '{}' ***", output.display()))?;
    Ok(())
}

/// MIME type guessed from the file extension; anything unrecognised is
/// assumed to be RDF/XML. Files without an extension get no guess.
fn guess_mime(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    Some(match ext.to_ascii_lowercase().as_str() {
        "ttl" => "text/turtle",
        "n3" => "text/n3",
        "nt" => "application/n-triples",
        _ => "application/rdf+xml",
    })
}

/// Line-based prompt: `question [default] : `, an empty answer keeps the default.
struct Prompt<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    fn new(input: R, output: W, interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive,
        }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}").context("Failed to write to stdout")
    }

    fn ask(&mut self, question: &str, default: &str) -> Result<String> {
        if !self.interactive {
            return Ok(default.to_string());
        }
        write!(self.output, "{question} [{default}] : ").context("Failed to write to stdout")?;
        self.output.flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        let answer = line.trim();
        Ok(if answer.is_empty() {
            default.to_string()
        } else {
            answer.to_string()
        })
    }
}
