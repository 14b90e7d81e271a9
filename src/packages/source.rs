//! Package enumeration sources
//!
//! The classifier never talks to `go list` directly. It consumes a
//! [`PackageSource`], which hands out a lazy, finite iterator of package
//! records exactly once. This keeps the enumeration mechanism swappable:
//!
//! - [`GoListSource`] spawns `go list -json` and decodes its stdout as it arrives
//! - [`JsonStreamSource`] decodes concatenated JSON records from any reader
//! - `Vec<PackageRecord>` serves synthetic records, mostly for tests

use super::PackageRecord;
use crate::error::{GenerateError, Result};
use serde_json::de::IoRead;
use serde_json::StreamDeserializer;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Stdio};
use tracing::{debug, warn};

/// Produces package records for one run. Consumes itself; a source cannot be restarted.
pub trait PackageSource {
    type Iter: Iterator<Item = Result<PackageRecord>>;

    fn packages(self) -> Result<Self::Iter>;
}

type Wrap = fn(PackageRecord) -> Result<PackageRecord>;

impl PackageSource for Vec<PackageRecord> {
    type Iter = std::iter::Map<std::vec::IntoIter<PackageRecord>, Wrap>;

    fn packages(self) -> Result<Self::Iter> {
        Ok(self.into_iter().map(Ok as Wrap))
    }
}

/// Decodes a stream of concatenated (or newline-delimited) JSON package records.
pub struct JsonStreamSource<R> {
    reader: R,
}

impl<R: Read> JsonStreamSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> PackageSource for JsonStreamSource<R> {
    type Iter = JsonRecords<R>;

    fn packages(self) -> Result<Self::Iter> {
        Ok(JsonRecords::new(self.reader))
    }
}

/// Iterator over records decoded from a reader. Stops after the first decode error.
pub struct JsonRecords<R: Read> {
    stream: StreamDeserializer<'static, IoRead<R>, PackageRecord>,
}

impl<R: Read> JsonRecords<R> {
    fn new(reader: R) -> Self {
        Self {
            stream: serde_json::Deserializer::from_reader(reader).into_iter(),
        }
    }
}

impl<R: Read> Iterator for JsonRecords<R> {
    type Item = Result<PackageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.stream
            .next()
            .map(|record| record.map_err(GenerateError::from))
    }
}

/// Enumerates packages under `<base>/...` and `<base>/vendor/...` with `go list -json`.
#[derive(Debug, Clone)]
pub struct GoListSource {
    program: String,
    base: PathBuf,
}

impl GoListSource {
    pub fn new(program: impl Into<String>, base: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            base: base.into(),
        }
    }

    pub fn patterns(&self) -> [PathBuf; 2] {
        package_patterns(&self.base)
    }
}

impl PackageSource for GoListSource {
    type Iter = GoListPackages;

    fn packages(self) -> Result<Self::Iter> {
        let patterns = self.patterns();
        debug!(program = %self.program, ?patterns, "Enumerating packages");

        let mut child = Command::new(&self.program)
            .arg("list")
            .arg("-json")
            .args(&patterns)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| GenerateError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| GenerateError::Pipe {
            program: self.program.clone(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout not captured"),
        })?;

        Ok(GoListPackages {
            records: JsonRecords::new(BufReader::new(stdout)),
            child: Some(child),
            program: self.program,
        })
    }
}

/// Records streamed from a running `go list`. The process is reaped once the
/// stream ends; a non-zero exit is reported as the final item.
pub struct GoListPackages {
    records: JsonRecords<BufReader<ChildStdout>>,
    child: Option<Child>,
    program: String,
}

impl GoListPackages {
    fn abort(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.kill() {
                warn!("Failed to kill {}: {}", self.program, e);
            }
            let _ = child.wait();
        }
    }

    fn finish(&mut self) -> Option<Result<PackageRecord>> {
        let mut child = self.child.take()?;
        match child.wait() {
            Ok(status) if status.success() => None,
            Ok(status) => Some(Err(GenerateError::EnumerationFailed {
                program: self.program.clone(),
                status,
            })),
            Err(source) => Some(Err(GenerateError::Pipe {
                program: self.program.clone(),
                source,
            })),
        }
    }
}

impl Iterator for GoListPackages {
    type Item = Result<PackageRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.child.as_ref()?;

        match self.records.next() {
            Some(Ok(record)) => Some(Ok(record)),
            Some(Err(e)) => {
                self.abort();
                Some(Err(e))
            }
            None => self.finish(),
        }
    }
}

impl Drop for GoListPackages {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Patterns handed to `go list`, rooted at `base`.
pub fn package_patterns(base: &Path) -> [PathBuf; 2] {
    if base == Path::new(".") {
        return [PathBuf::from("./..."), PathBuf::from("./vendor/...")];
    }
    [base.join("..."), base.join("vendor").join("...")]
}
