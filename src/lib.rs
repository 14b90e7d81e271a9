//! gendockerfile - Dockerfile generation for Go module dependencies
//!
//! This library enumerates the packages of a Go module with `go list -json`,
//! classifies every import as external (hosted under a domain-like first path
//! segment) or internal, and renders a Dockerfile that runs `go get` for each
//! external import. The result can either be written to disk or diffed against
//! the checked-in copy, which makes the tool usable as a CI drift check.
//!
//! # Example Usage
//!
//! ```
//! use gendockerfile::{generator, DockerfileTemplate, PackageRecord};
//!
//! let packages = vec![
//!     PackageRecord::new("go.elastic.co/apm").with_imports(["fmt", "github.com/pkg/errors"]),
//! ];
//!
//! let rendered = generator::render(packages, &DockerfileTemplate::default()).unwrap();
//! assert!(rendered.contains("RUN go get -v github.com/pkg/errors\n"));
//! assert!(!rendered.contains("fmt"));
//! ```
//!
//! # Project Structure
//!
//! - [`packages`]: package records, enumeration sources and import classification
//! - [`dockerfile`]: template rendering and write/diff output
//! - [`generator`]: end-to-end generation
//! - [`config`]: environment-driven configuration

pub mod cli;
pub mod config;
pub mod dockerfile;
pub mod error;
pub mod generator;
pub mod packages;
pub mod util;

pub use config::{ConfigError, GenerateOptions, GeneratorConfig};
pub use dockerfile::{DockerfileTemplate, OutputMode, OutputTarget};
pub use error::GenerateError;
pub use packages::{
    is_external, GoListSource, ImportTable, JsonStreamSource, PackageRecord, PackageSource,
};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
