//! End-to-end generation: enumerate packages, classify imports, render, emit

use crate::config::GenerateOptions;
use crate::dockerfile::{DockerfileTemplate, OutputTarget};
use crate::error::Result;
use crate::packages::{collect_imports, GoListSource, PackageSource};
use tracing::{debug, info};

/// Renders the Dockerfile for every package `source` yields.
///
/// The whole stream is consumed before anything is rendered, so a failed
/// enumeration never produces partial output.
pub fn render<S: PackageSource>(source: S, template: &DockerfileTemplate) -> Result<String> {
    let table = collect_imports(source)?;
    let imports = table.external_imports();
    debug!(external = imports.len(), "Collected external imports");
    Ok(template.render(&imports))
}

/// Renders from `source` and hands the result to `target`.
pub fn generate<S: PackageSource>(
    source: S,
    template: &DockerfileTemplate,
    target: &OutputTarget,
) -> Result<()> {
    let rendered = render(source, template)?;
    target.emit(&rendered)
}

/// Runs one generation against the Go toolchain using the resolved options.
pub fn run(options: &GenerateOptions) -> Result<()> {
    info!(
        "Generating {} from packages under {}",
        options.output_path().display(),
        options.base.display()
    );

    let source = GoListSource::new(&options.config.go_bin, &options.base);
    generate(
        source,
        &options.config.template(),
        &options.output_target(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenerateError;
    use crate::packages::{JsonStreamSource, PackageRecord};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_example_packages() {
        let packages = vec![
            PackageRecord::new("apm").with_imports(["example.com/foo/bar", "fmt"]),
            PackageRecord::new("apm/b").with_imports(["example.com/foo/bar", "golang.org/x/tools"]),
        ];

        let rendered = render(packages, &DockerfileTemplate::default()).unwrap();
        let runs: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with("RUN "))
            .collect();

        assert_eq!(
            runs,
            vec![
                "RUN go get -v example.com/foo/bar",
                "RUN go get -v golang.org/x/tools",
            ]
        );
    }

    #[test]
    fn test_decode_failure_leaves_no_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");
        let input = r#"{"ImportPath": "apm", "Imports": ["github.com/pkg/errors"]}{"Imp"#;

        let result = generate(
            JsonStreamSource::new(input.as_bytes()),
            &DockerfileTemplate::default(),
            &OutputTarget::write(&path),
        );

        assert!(matches!(result, Err(GenerateError::Decode(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_decode_failure_keeps_existing_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Dockerfile-testing");
        fs::write(&path, "previous\n").unwrap();

        let result = generate(
            JsonStreamSource::new("[1, 2]".as_bytes()),
            &DockerfileTemplate::default(),
            &OutputTarget::write(&path),
        );

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous\n");
    }
}
