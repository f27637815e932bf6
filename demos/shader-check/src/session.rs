use std::{cell::Cell, num::NonZeroU32, rc::Rc};

use color_eyre::{Report, eyre::eyre};
use gldebug_core::{Debugger, Reporter, ShaderProgram, Sink, TracingSink, gld_call};
use glow::HasContext;

use crate::cli::{ShaderSources, SinkKind};

const TRIANGLE_VERTEX: &str = include_str!("../shaders/triangle.vert");
const TRIANGLE_FRAGMENT: &str = include_str!("../shaders/triangle.frag");
const BROKEN_VERTEX: &str = include_str!("../shaders/broken.vert");
const BROKEN_FRAGMENT: &str = include_str!("../shaders/broken.frag");

/// A program name no context has created.
const UNKNOWN_PROGRAM: NonZeroU32 = NonZeroU32::new(1337).unwrap();

/// What a session asks the debugger to check.
#[derive(Debug, Clone)]
pub struct SessionPlan {
    pub sink: SinkKind,
    pub call_error: bool,
    pub builtin: bool,
    pub user_sources: Option<ShaderSources>,
}

/// Counts of what a session found.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Messages handed to the reporter.
    pub reported: usize,
    /// Shader pairs that failed to build.
    pub failed_builds: usize,
}

/// Builds a reporter for `kind`, counting every message it dispatches.
pub fn counting_reporter(kind: SinkKind, counter: Rc<Cell<usize>>) -> Reporter {
    let count = move || counter.set(counter.get() + 1);

    match kind {
        SinkKind::Stdout => Reporter::with_sink(move |message: &str| {
            count();
            println!("{message}");
        }),
        SinkKind::Tracing => Reporter::with_sink(move |message: &str| {
            count();
            TracingSink.notify(message);
        }),
        SinkKind::Silent => Reporter::new(),
    }
}

/// Runs the planned checks against a current GL context.
pub fn run(gl: &glow::Context, plan: &SessionPlan) -> Result<Summary, Report> {
    let counter = Rc::new(Cell::new(0));
    let debugger: Debugger<'_, glow::Context> =
        Debugger::with_reporter(gl, counting_reporter(plan.sink, counter.clone()));

    let mut summary = Summary::default();

    if plan.call_error {
        debugger.start();
        gld_call!(debugger, unsafe { gl.use_program(None) });
        gld_call!(debugger, unsafe { gl.use_program(Some(glow::NativeProgram(UNKNOWN_PROGRAM))) });
    }

    if plan.builtin {
        for (name, vertex, fragment) in [
            ("no errors", TRIANGLE_VERTEX, TRIANGLE_FRAGMENT),
            ("syntax errors", BROKEN_VERTEX, BROKEN_FRAGMENT),
        ] {
            if check_shader_pair(&debugger, name, vertex, fragment)? {
                summary.failed_builds += 1;
            }
        }
    }

    if let Some(sources) = &plan.user_sources {
        match ShaderProgram::create(&debugger, &sources.vertex, &sources.fragment, &sources.name) {
            Ok(program) => {
                tracing::info!(name = %sources.name, "shader pair built");
                program.delete(gl);
            },
            Err(e) => {
                tracing::warn!(name = %sources.name, error = %e, "shader pair rejected");
                summary.failed_builds += 1;
            },
        }
    }

    summary.reported = counter.get();
    Ok(summary)
}

/// Builds and tears down a program one checked call at a time, returning
/// true if compiling or linking failed.
fn check_shader_pair(
    debugger: &Debugger<'_, glow::Context>,
    name: &str,
    vertex_source: &str,
    fragment_source: &str,
) -> Result<bool, Report> {
    let gl = debugger.gl();
    debugger.start();

    let vertex = gld_call!(debugger, unsafe { gl.create_shader(glow::VERTEX_SHADER) })
        .map_err(|e| eyre!("Failed to create vertex shader: {e}"))?;
    gld_call!(debugger, unsafe { gl.shader_source(vertex, vertex_source) });
    let mut failed = debugger.compile(vertex, name);

    let fragment = gld_call!(debugger, unsafe { gl.create_shader(glow::FRAGMENT_SHADER) })
        .map_err(|e| eyre!("Failed to create fragment shader: {e}"))?;
    gld_call!(debugger, unsafe { gl.shader_source(fragment, fragment_source) });
    failed |= debugger.compile(fragment, name);

    let program = gld_call!(debugger, unsafe { gl.create_program() })
        .map_err(|e| eyre!("Failed to create program: {e}"))?;
    gld_call!(debugger, unsafe { gl.attach_shader(program, vertex) });
    gld_call!(debugger, unsafe { gl.attach_shader(program, fragment) });
    failed |= debugger.link(program, name);

    gld_call!(debugger, unsafe { gl.detach_shader(program, vertex) });
    gld_call!(debugger, unsafe { gl.detach_shader(program, fragment) });
    gld_call!(debugger, unsafe { gl.delete_shader(vertex) });
    gld_call!(debugger, unsafe { gl.delete_shader(fragment) });
    gld_call!(debugger, unsafe { gl.delete_program(program) });

    tracing::debug!(name, failed, "shader pair checked");
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_sources() {
        assert!(TRIANGLE_VERTEX.starts_with("#version 330 core"));
        assert!(TRIANGLE_FRAGMENT.starts_with("#version 330 core"));
        assert!(BROKEN_VERTEX.starts_with("#version 1234"));
        assert!(BROKEN_FRAGMENT.contains("vec3(1.0f, 0.0f, 1.0f, 1.0f)"));
    }

    #[test]
    fn test_counting_reporter_counts_dispatched_messages() {
        let counter = Rc::new(Cell::new(0));
        let reporter = counting_reporter(SinkKind::Tracing, counter.clone());

        reporter.report("\"GL_INVALID_VALUE\" from statement \"x\" at line \"1\" in file \"y\"");
        reporter.report("second");

        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_silent_reporter_has_no_sink() {
        let counter = Rc::new(Cell::new(0));
        let reporter = counting_reporter(SinkKind::Silent, counter.clone());

        reporter.report("dropped");

        assert!(!reporter.is_enabled());
        assert_eq!(counter.get(), 0);
    }
}
