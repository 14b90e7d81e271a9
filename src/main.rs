use gendockerfile::cli::CliArgs;
use gendockerfile::config::{GenerateOptions, GeneratorConfig};
use gendockerfile::util::logging::{self, parse_level, LoggingConfig};
use gendockerfile::{generator, NAME, VERSION};

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tracing::{debug, error, Level};

fn main() {
    let args = CliArgs::parse();
    let config = GeneratorConfig::default();
    init_logging_from_args(&args, &config);

    debug!("{} v{} starting", NAME, VERSION);
    debug!("Arguments: {:?}", args);

    let exit_code = match handle_generate(&args, config) {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            1
        }
    };

    process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs, config: &GeneratorConfig) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        parse_level(&config.log_level)
    };

    logging::init_logging(LoggingConfig {
        use_json: logging::json_from_env(),
        ..LoggingConfig::with_level(level)
    });
}

fn handle_generate(args: &CliArgs, config: GeneratorConfig) -> Result<()> {
    config.validate().context("Invalid configuration")?;
    debug!("{}", config);

    let options = GenerateOptions {
        base: args.base.clone(),
        output_file: args.output.clone(),
        diff: args.diff,
        ..GenerateOptions::new(config)
    };

    generator::run(&options).with_context(|| {
        if options.diff {
            format!("Checking {} failed", options.output_path().display())
        } else {
            format!("Generating {} failed", options.output_path().display())
        }
    })
}
