//! Source text builder and atomic file output.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Write as IoWrite;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Line-oriented buffer for generated source text.
///
/// Every line written through [`SourceFile::line`] is prefixed with the
/// current indentation; blank lines carry no trailing whitespace.
#[derive(Debug, Default)]
pub struct SourceFile {
    /// Accumulated text.
    pub buf: String,
    indent: usize,
    unit: &'static str,
}

impl SourceFile {
    /// Creates an empty buffer that indents with `unit` (e.g. four spaces or a tab).
    #[must_use]
    pub fn new(unit: &'static str) -> Self {
        Self {
            buf: String::with_capacity(8 * 1024),
            indent: 0,
            unit,
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.buf.push('\n');
            return;
        }
        for _ in 0..self.indent {
            self.buf.push_str(self.unit);
        }
        let _ = writeln!(self.buf, "{text}");
    }

    /// Writes an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes each of `lines` behind `marker` (e.g. `///` or ` *`).
    ///
    /// An empty entry produces the bare marker.
    pub fn comment(&mut self, marker: &str, lines: &[String]) {
        for text in lines {
            if text.is_empty() {
                self.line(marker);
            } else {
                self.line(&format!("{marker} {text}"));
            }
        }
    }

    /// Increases the indentation by one unit.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decreases the indentation by one unit.
    pub fn dedent(&mut self) {
        self.indent = self.indent.saturating_sub(1);
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `content` to `path` through a temporary file in the same directory
/// that is renamed into place, so a failed write never leaves a partial file.
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns [`Error::Io`] if the directory, the temporary file, or the final
/// rename cannot be created.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(dir, e))?;
    tmp.write_all(content.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    tmp.flush().map_err(|e| Error::io(path, e))?;
    tmp.as_file().sync_all().map_err(|e| Error::io(path, e))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(|e| Error::io(path, e))?;
    }

    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
