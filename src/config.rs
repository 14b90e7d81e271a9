//! Configuration for gendockerfile
//!
//! Settings are loaded from environment variables with defaults that match
//! the layout of the APM agent repository. Command-line flags decide the
//! per-run values (base directory, output file, diff mode) and are combined
//! with this configuration into [`GenerateOptions`].
//!
//! # Environment Variables
//!
//! - `GENDOCKERFILE_GO_BIN`: Go toolchain binary - default: "go"
//! - `GENDOCKERFILE_DIFF_BIN`: diff tool used in diff mode - default: "diff"
//! - `GENDOCKERFILE_BASE_IMAGE`: image for the `FROM` line - default: "golang:latest"
//! - `GENDOCKERFILE_WORKDIR`: container source directory - default: "/go/src/go.elastic.co/apm"
//! - `GENDOCKERFILE_OUTPUT_DIR`: directory under the base holding the output - default: "scripts"
//! - `GENDOCKERFILE_LOG_LEVEL`: logging level - default: "info"

use crate::dockerfile::template::{DEFAULT_BASE_IMAGE, DEFAULT_WORKDIR};
use crate::dockerfile::{DockerfileTemplate, OutputTarget};
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

const DEFAULT_GO_BIN: &str = "go";
const DEFAULT_DIFF_BIN: &str = "diff";
const DEFAULT_OUTPUT_DIR: &str = "scripts";
const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_BASE_DIR: &str = ".";
pub const DEFAULT_OUTPUT_FILE: &str = "Dockerfile-testing";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub go_bin: String,
    pub diff_bin: String,
    pub base_image: String,
    pub workdir: String,
    pub output_dir: PathBuf,
    pub log_level: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            go_bin: env_or("GENDOCKERFILE_GO_BIN", DEFAULT_GO_BIN),
            diff_bin: env_or("GENDOCKERFILE_DIFF_BIN", DEFAULT_DIFF_BIN),
            base_image: env_or("GENDOCKERFILE_BASE_IMAGE", DEFAULT_BASE_IMAGE),
            workdir: env_or("GENDOCKERFILE_WORKDIR", DEFAULT_WORKDIR),
            output_dir: PathBuf::from(env_or("GENDOCKERFILE_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
            log_level: env_or("GENDOCKERFILE_LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("Go binary", self.go_bin.as_str()),
            ("Diff binary", self.diff_bin.as_str()),
            ("Base image", self.base_image.as_str()),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed(format!(
                    "{} must not be empty",
                    name
                )));
            }
        }

        if self.output_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output directory must not be empty".to_string(),
            ));
        }

        if !self.workdir.starts_with('/') {
            return Err(ConfigError::ValidationFailed(format!(
                "Working directory must be an absolute path, got: {}",
                self.workdir
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    pub fn template(&self) -> DockerfileTemplate {
        DockerfileTemplate::new(&self.base_image, &self.workdir)
    }

    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();
        map.insert("go_bin".to_string(), self.go_bin.clone());
        map.insert("diff_bin".to_string(), self.diff_bin.clone());
        map.insert("base_image".to_string(), self.base_image.clone());
        map.insert("workdir".to_string(), self.workdir.clone());
        map.insert(
            "output_dir".to_string(),
            self.output_dir.display().to_string(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());
        map
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gendockerfile Configuration:")?;
        writeln!(f, "  Go Binary: {}", self.go_bin)?;
        writeln!(f, "  Diff Binary: {}", self.diff_bin)?;
        writeln!(f, "  Base Image: {}", self.base_image)?;
        writeln!(f, "  Workdir: {}", self.workdir)?;
        writeln!(f, "  Output Dir: {}", self.output_dir.display())?;
        writeln!(f, "  Log Level: {}", self.log_level)?;
        Ok(())
    }
}

/// Everything one run needs, resolved from flags and configuration.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub base: PathBuf,
    pub output_file: PathBuf,
    pub diff: bool,
    pub config: GeneratorConfig,
}

impl GenerateOptions {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            base: PathBuf::from(DEFAULT_BASE_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            diff: false,
            config,
        }
    }

    /// `<base>/<output_dir>/<output_file>`. A rooted `output_file` still
    /// lands under the output directory.
    pub fn output_path(&self) -> PathBuf {
        self.base
            .join(&self.config.output_dir)
            .join(strip_root(&self.output_file))
    }

    pub fn output_target(&self) -> OutputTarget {
        let path = self.output_path();
        if self.diff {
            OutputTarget::diff(path, &self.config.diff_bin)
        } else {
            OutputTarget::write(path)
        }
    }
}

fn strip_root(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
        .collect()
}
