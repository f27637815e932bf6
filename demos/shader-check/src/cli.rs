use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::{Report, eyre::WrapErr};

#[derive(Parser, Debug)]
#[command(
    name = "shader-check",
    about = "Runs OpenGL call, compile and link checks in a hidden window",
    long_about = "Creates an OpenGL 3.3 core context, triggers a deliberate call error and \
                  compiles a valid and a broken shader pair, printing every reported GL error. \
                  Optionally checks a user supplied vertex/fragment pair as well."
)]
pub struct Cli {
    /// Vertex shader source to check
    #[arg(long, value_name = "PATH", requires = "fragment", value_parser = validate_file_exists)]
    pub vertex: Option<PathBuf>,

    /// Fragment shader source to check
    #[arg(long, value_name = "PATH", requires = "vertex", value_parser = validate_file_exists)]
    pub fragment: Option<PathBuf>,

    /// Identifier used in reports for the supplied shader pair
    #[arg(short, long, default_value = "user shader", value_name = "NAME")]
    pub name: String,

    /// Where reported GL errors are sent
    #[arg(long, value_enum, default_value_t = SinkKind::Stdout)]
    pub sink: SinkKind,

    /// Skip the built-in valid and broken shader pairs
    #[arg(long)]
    pub skip_builtin: bool,

    /// Skip the deliberate invalid program binding
    #[arg(long)]
    pub skip_call_error: bool,
}

/// Destination for reported messages.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    /// Print each message on stdout
    Stdout,
    /// Emit each message as a tracing error event
    Tracing,
    /// Register no sink; errors are detected but not shown
    Silent,
}

/// A vertex/fragment source pair read from disk.
#[derive(Debug, Clone)]
pub struct ShaderSources {
    pub name: String,
    pub vertex: String,
    pub fragment: String,
}

impl Cli {
    /// Reads the user supplied shader pair, if any.
    pub fn load_sources(&self) -> Result<Option<ShaderSources>, Report> {
        let (Some(vertex), Some(fragment)) = (&self.vertex, &self.fragment) else {
            return Ok(None);
        };

        let read = |path: &PathBuf| {
            std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read shader source {}", path.display()))
        };

        Ok(Some(ShaderSources {
            name: self.name.clone(),
            vertex: read(vertex)?,
            fragment: read(fragment)?,
        }))
    }
}

fn validate_file_exists(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);

    match () {
        _ if !path.exists() => Err(format!("Shader file does not exist: {s}")),
        _ if !path.is_file() => Err(format!("Path is not a file: {s}")),
        _ => Ok(path),
    }
}
