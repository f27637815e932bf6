use std::{marker::PhantomData, panic::Location};

use crate::{
    bounded,
    error::Error,
    gl::{ActiveChecks, CallSite, CheckLevel, DebugContext, ErrorCode},
    reporter::{Reporter, Sink},
};

/// Upper bound on error-state reads per drain.
///
/// A conforming driver keeps one flag per error kind, so real drains stop
/// long before this.
pub const MAX_DRAINED_ERRORS: usize = 64;

/// Checks GL calls and shader builds against a context, reporting what it
/// finds to an optional [`Sink`].
///
/// The check level `C` decides which paths are compiled in; see
/// [`checks`](crate::gl::checks). Checks never fail: they return whether an
/// error was found and leave recovery to the caller.
///
/// ```ignore
/// let mut debugger = Debugger::new(&gl);
/// debugger.set_callback(|msg: &str| eprintln!("{msg}"));
///
/// debugger.start();
/// let program = gld_call!(debugger, unsafe { gl.create_program() });
/// debugger.compile(shader, "sprite shader");
/// ```
#[derive(Debug)]
pub struct Debugger<'gl, G: DebugContext, C: CheckLevel = ActiveChecks> {
    gl: &'gl G,
    reporter: Reporter,
    checks: PhantomData<C>,
}

impl<'gl, G: DebugContext, C: CheckLevel> Debugger<'gl, G, C> {
    /// Creates a debugger with no sink.
    pub fn new(gl: &'gl G) -> Self {
        Self::with_reporter(gl, Reporter::new())
    }

    /// Creates a debugger reporting through `reporter`.
    pub fn with_reporter(gl: &'gl G, reporter: Reporter) -> Self {
        tracing::debug!(level = C::NAME, "gldebug debugger created");
        Self { gl, reporter, checks: PhantomData }
    }

    /// The wrapped context.
    pub fn gl(&self) -> &'gl G {
        self.gl
    }

    /// The reporter messages are dispatched through.
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// Mutable access to the reporter, e.g. to swap or clear the sink.
    pub fn reporter_mut(&mut self) -> &mut Reporter {
        &mut self.reporter
    }

    /// Registers `sink`, replacing the previous one.
    pub fn set_callback(&mut self, sink: impl Sink + 'static) {
        self.reporter.set_callback(sink);
    }

    /// Begins a checked block: drains stale errors left by unchecked code so
    /// they are not blamed on the next checked call. No-op without call checks.
    pub fn start(&self) {
        self.clear_errors();
    }

    /// Reads the error state until it reports `GL_NO_ERROR`, discarding
    /// every code. Returns the number of codes discarded.
    ///
    /// Without call checks compiled in the error state is left alone and
    /// this returns 0.
    pub fn clear_errors(&self) -> usize {
        if !C::CALLS {
            return 0;
        }

        let mut drained = 0;
        while drained < MAX_DRAINED_ERRORS && self.gl.get_error() != glow::NO_ERROR {
            drained += 1;
        }

        if drained > 0 {
            tracing::trace!(drained, "discarded stale GL errors");
        }
        drained
    }

    /// Consumes one code from the error state and reports it against the
    /// given statement. Returns true if an error was found.
    ///
    /// Only the first queued code is attributed to the statement; codes left
    /// by earlier unchecked calls cannot be told apart from it.
    pub fn check_call(&self, statement: &str, line: u32, file: &str) -> bool {
        if !C::CALLS {
            return false;
        }

        match ErrorCode::from_raw(self.gl.get_error()) {
            None => false,
            Some(code) => {
                self.emit(&Error::call(code, CallSite::new(statement, line, file)));
                true
            },
        }
    }

    /// Drains the error state, reporting every queued code against `label`
    /// and the caller's location. Returns the number of codes reported.
    #[track_caller]
    pub fn report_pending(&self, label: &str) -> usize {
        if !C::CALLS {
            return 0;
        }

        let caller = Location::caller();
        let mut reported = 0;
        while reported < MAX_DRAINED_ERRORS {
            let Some(code) = ErrorCode::from_raw(self.gl.get_error()) else {
                break;
            };

            self.emit(&Error::call(code, CallSite::new(label, caller.line(), caller.file())));
            reported += 1;
        }
        reported
    }

    /// Compiles `shader` and checks the result. Returns true on failure.
    pub fn compile(&self, shader: G::Shader, identifier: &str) -> bool {
        self.try_compile(shader, identifier).is_err()
    }

    /// Links `program` and checks the result. Returns true on failure.
    pub fn link(&self, program: G::Program, identifier: &str) -> bool {
        self.try_link(program, identifier).is_err()
    }

    /// Compiles `shader`, returning the reported compile error if any.
    ///
    /// # Errors
    /// [`Error::Compile`] carrying the bounded info log when build checks are
    /// compiled in and the shader did not compile.
    pub fn try_compile(&self, shader: G::Shader, identifier: &str) -> Result<(), Error> {
        crate::gld_call!(self, self.gl.compile_shader(shader));
        self.shader_compile_error(shader, identifier)
            .map_or(Ok(()), Err)
    }

    /// Links `program`, returning the reported link error if any.
    ///
    /// # Errors
    /// [`Error::Link`] carrying the bounded info log when build checks are
    /// compiled in and the program did not link.
    pub fn try_link(&self, program: G::Program, identifier: &str) -> Result<(), Error> {
        crate::gld_call!(self, self.gl.link_program(program));
        self.program_link_error(program, identifier)
            .map_or(Ok(()), Err)
    }

    /// Checks the compile status of an already compiled `shader`. Returns
    /// true, after reporting the info log, if it failed to compile.
    pub fn check_shader_compile(&self, shader: G::Shader, identifier: &str) -> bool {
        self.shader_compile_error(shader, identifier).is_some()
    }

    /// Checks the link status of an already linked `program`. Returns true,
    /// after reporting the info log, if it failed to link.
    pub fn check_program_link(&self, program: G::Program, identifier: &str) -> bool {
        self.program_link_error(program, identifier).is_some()
    }

    fn shader_compile_error(&self, shader: G::Shader, identifier: &str) -> Option<Error> {
        if !C::BUILDS {
            return None;
        }

        let compiled = crate::gld_call!(self, self.gl.shader_compile_status(shader));
        if compiled {
            return None;
        }

        let log = crate::gld_call!(self, self.gl.shader_info_log(shader));
        let error = Error::compile_failed(identifier, bounded::info_log(log));
        self.emit(&error);
        Some(error)
    }

    fn program_link_error(&self, program: G::Program, identifier: &str) -> Option<Error> {
        if !C::BUILDS {
            return None;
        }

        let linked = crate::gld_call!(self, self.gl.program_link_status(program));
        if linked {
            return None;
        }

        let log = crate::gld_call!(self, self.gl.program_info_log(program));
        let error = Error::link_failed(identifier, bounded::info_log(log));
        self.emit(&error);
        Some(error)
    }

    fn emit(&self, error: &Error) {
        tracing::debug!(%error, "GL error detected");
        self.reporter.report(error.to_string());
    }
}
