//! Writing the rendered Dockerfile, or diffing it against the file on disk

use crate::error::{GenerateError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Create or truncate the target file
    Write,
    /// Compare the target file against the rendered content with an external diff tool
    Diff { program: String },
}

/// Where the rendered document goes and how.
#[derive(Debug, Clone)]
pub struct OutputTarget {
    pub path: PathBuf,
    pub mode: OutputMode,
}

impl OutputTarget {
    pub fn write(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            mode: OutputMode::Write,
        }
    }

    pub fn diff(path: impl Into<PathBuf>, program: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: OutputMode::Diff {
                program: program.into(),
            },
        }
    }

    pub fn emit(&self, rendered: &str) -> Result<()> {
        match &self.mode {
            OutputMode::Write => write_file(&self.path, rendered),
            OutputMode::Diff { program } => diff_file(program, &self.path, rendered),
        }
    }
}

fn write_file(path: &Path, rendered: &str) -> Result<()> {
    fs::write(path, rendered).map_err(|source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Runs `<program> -c <path> -` with the rendered content on stdin. The diff
/// goes straight to our stdout; the file on disk is never touched.
fn diff_file(program: &str, path: &Path, rendered: &str) -> Result<()> {
    debug!(program, path = %path.display(), "Diffing against rendered output");

    let mut child = Command::new(program)
        .arg("-c")
        .arg(path)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| GenerateError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let pipe_error = |source| GenerateError::Pipe {
        program: program.to_string(),
        source,
    };

    if let Some(mut stdin) = child.stdin.take() {
        // A diff tool may exit before reading everything (e.g. missing file);
        // its exit status is what decides the outcome.
        if let Err(e) = stdin.write_all(rendered.as_bytes()) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(pipe_error(e));
            }
        }
    }

    let status = child.wait().map_err(pipe_error)?;
    if !status.success() {
        return Err(GenerateError::DiffMismatch {
            path: path.to_path_buf(),
            program: program.to_string(),
            status,
        });
    }

    info!("{} is up to date", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");

        OutputTarget::write(&path).emit("FROM golang:latest\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM golang:latest\n");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");
        fs::write(&path, "a much longer previous content\n").unwrap();

        OutputTarget::write(&path).emit("short\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short\n");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("Dockerfile-testing");

        let result = OutputTarget::write(&path).emit("content\n");
        assert!(matches!(result, Err(GenerateError::Write { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_diff_identical_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");
        fs::write(&path, "FROM golang:latest\n").unwrap();

        OutputTarget::diff(&path, "diff")
            .emit("FROM golang:latest\n")
            .unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM golang:latest\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_diff_detects_difference_without_modifying() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");
        fs::write(&path, "FROM golang:1.10\n").unwrap();

        let result = OutputTarget::diff(&path, "diff").emit("FROM golang:latest\n");
        assert!(matches!(result, Err(GenerateError::DiffMismatch { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "FROM golang:1.10\n");
    }

    #[test]
    fn test_diff_missing_program() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");

        let result = OutputTarget::diff(&path, "gendockerfile-no-such-diff").emit("x\n");
        assert!(matches!(result, Err(GenerateError::Spawn { .. })));
    }
}
