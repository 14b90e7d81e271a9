use crate::config::{DEFAULT_BASE_DIR, DEFAULT_OUTPUT_FILE};
use clap::Parser;
use std::path::PathBuf;

/// Generates a Dockerfile that explicitly runs "go get" for each external import
#[derive(Parser, Debug)]
#[command(
    name = "gendockerfile",
    about = "Generates a Dockerfile that explicitly runs \"go get\" for each external import",
    version,
    long_about = "gendockerfile lists every package of a Go module (including its vendor \
                  directory) with `go list -json`, collects the imports hosted outside the \
                  standard library, and writes a Dockerfile that fetches each of them.\n\n\
                  Examples:\n  \
                  gendockerfile\n  \
                  gendockerfile --base ../apm-agent-go\n  \
                  gendockerfile -d"
)]
pub struct CliArgs {
    #[arg(
        long,
        value_name = "DIR",
        default_value = DEFAULT_BASE_DIR,
        help = "Base directory of the repo, relative to the working directory"
    )]
    pub base: PathBuf,

    #[arg(
        short = 'o',
        long,
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_FILE,
        help = "Output file, relative to the scripts directory"
    )]
    pub output: PathBuf,

    #[arg(
        short = 'd',
        long,
        help = "Diff the output file against the generated content instead of writing"
    )]
    pub diff: bool,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Enable debug logging")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - only log errors"
    )]
    pub quiet: bool,
}
