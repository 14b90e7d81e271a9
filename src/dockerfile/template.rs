//! Dockerfile text rendering

use std::fmt::Write;

pub const GENERATOR_NAME: &str = "gendockerfile";
pub const DEFAULT_BASE_IMAGE: &str = "golang:latest";
pub const DEFAULT_WORKDIR: &str = "/go/src/go.elastic.co/apm";

/// Renders a Dockerfile that runs `go get` for each external import and then
/// adds the source tree into the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerfileTemplate {
    pub base_image: String,
    pub workdir: String,
}

impl Default for DockerfileTemplate {
    fn default() -> Self {
        Self {
            base_image: DEFAULT_BASE_IMAGE.to_string(),
            workdir: DEFAULT_WORKDIR.to_string(),
        }
    }
}

impl DockerfileTemplate {
    pub fn new(base_image: impl Into<String>, workdir: impl Into<String>) -> Self {
        Self {
            base_image: base_image.into(),
            workdir: workdir.into(),
        }
    }

    /// `imports` is emitted in the order given; callers pass it sorted.
    pub fn render<S: AsRef<str>>(&self, imports: &[S]) -> String {
        let mut output = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(
            output,
            "# Code generated by {}. DO NOT EDIT.",
            GENERATOR_NAME
        );
        let _ = writeln!(output, "FROM {}", self.base_image);
        let _ = writeln!(output, "WORKDIR {}", self.workdir);
        for import in imports {
            let _ = writeln!(output, "RUN go get -v {}", import.as_ref());
        }
        let _ = writeln!(output);
        let _ = writeln!(output, "ADD . {}", self.workdir);

        output
    }
}
