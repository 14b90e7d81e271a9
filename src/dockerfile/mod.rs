//! Dockerfile rendering and emission

pub mod output;
pub mod template;

pub use output::{OutputMode, OutputTarget};
pub use template::DockerfileTemplate;
