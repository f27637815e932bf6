//! In-memory stand-in for a GL driver, used by unit tests.

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use crate::gl::DebugContext;

/// Returns a message log and a sink appending to it.
pub(crate) fn collector() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) + 'static) {
    let messages = Rc::new(RefCell::new(Vec::new()));
    let sink_messages = messages.clone();
    (messages, move |m: &str| sink_messages.borrow_mut().push(m.to_string()))
}

#[derive(Debug, Default)]
struct FakeShader {
    source: String,
    compile_attempted: bool,
    compiled: bool,
    log_override: Option<String>,
    deleted: bool,
}

#[derive(Debug, Default)]
struct FakeProgram {
    shaders: Vec<u32>,
    linked: bool,
    deleted: bool,
}

/// Error queue plus shader and program objects.
///
/// A shader compiles when its source starts with `#version 330` and does not
/// mention `vec32`; a program links when all attached shaders compiled.
#[derive(Debug, Default)]
pub(crate) struct FakeGl {
    errors: RefCell<VecDeque<u32>>,
    sticky_error: Cell<Option<u32>>,
    log_query_error: Cell<Option<u32>>,
    no_objects: Cell<bool>,
    no_links: Cell<bool>,
    shaders: RefCell<Vec<FakeShader>>,
    programs: RefCell<Vec<FakeProgram>>,
}

impl FakeGl {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push_error(&self, code: u32) {
        self.errors.borrow_mut().push_back(code);
    }

    pub(crate) fn pending_errors(&self) -> usize {
        self.errors.borrow().len()
    }

    /// Makes every `get_error` return `code`, like a driver stuck in a loop.
    pub(crate) fn set_sticky_error(&self, code: u32) {
        self.sticky_error.set(Some(code));
    }

    /// Makes info log queries raise `code`.
    pub(crate) fn fail_log_queries(&self, code: u32) {
        self.log_query_error.set(Some(code));
    }

    /// Makes shader and program creation fail, like an out-of-memory driver.
    pub(crate) fn fail_object_creation(&self) {
        self.no_objects.set(true);
    }

    /// Makes every link fail regardless of the attached shaders.
    pub(crate) fn fail_links(&self) {
        self.no_links.set(true);
    }

    pub(crate) fn add_shader(&self, source: &str) -> u32 {
        let mut shaders = self.shaders.borrow_mut();
        shaders.push(FakeShader { source: source.to_string(), ..FakeShader::default() });
        shaders.len() as u32
    }

    pub(crate) fn set_shader_log(&self, shader: u32, log: String) {
        self.shader(shader, |s| s.log_override = Some(log));
    }

    pub(crate) fn compile(&self, shader: u32) {
        self.shader(shader, |s| {
            s.compile_attempted = true;
            s.compiled = s.source.starts_with("#version 330") && !s.source.contains("vec32");
        });
    }

    pub(crate) fn is_compiled_attempted(&self, shader: u32) -> bool {
        self.shader(shader, |s| s.compile_attempted)
    }

    pub(crate) fn is_shader_deleted(&self, shader: u32) -> bool {
        self.shader(shader, |s| s.deleted)
    }

    pub(crate) fn add_program(&self, shaders: &[u32]) -> u32 {
        let mut programs = self.programs.borrow_mut();
        programs.push(FakeProgram { shaders: shaders.to_vec(), ..FakeProgram::default() });
        programs.len() as u32
    }

    pub(crate) fn link(&self, program: u32) {
        let shaders = self.program(program, |p| p.shaders.clone());
        let linked = !self.no_links.get()
            && !shaders.is_empty()
            && shaders.iter().all(|&s| self.shader(s, |s| s.compiled));
        self.program(program, |p| p.linked = linked);
    }

    pub(crate) fn attached_shaders(&self, program: u32) -> Vec<u32> {
        self.program(program, |p| p.shaders.clone())
    }

    pub(crate) fn is_program_deleted(&self, program: u32) -> bool {
        self.program(program, |p| p.deleted)
    }

    /// Number of program objects ever created.
    pub(crate) fn program_count(&self) -> usize {
        self.programs.borrow().len()
    }

    fn shader<R>(&self, shader: u32, f: impl FnOnce(&mut FakeShader) -> R) -> R {
        f(&mut self.shaders.borrow_mut()[shader as usize - 1])
    }

    fn program<R>(&self, program: u32, f: impl FnOnce(&mut FakeProgram) -> R) -> R {
        f(&mut self.programs.borrow_mut()[program as usize - 1])
    }

    fn log_queried(&self) {
        if let Some(code) = self.log_query_error.get() {
            self.push_error(code);
        }
    }
}

impl DebugContext for FakeGl {
    type Shader = u32;
    type Program = u32;

    fn get_error(&self) -> u32 {
        if let Some(code) = self.sticky_error.get() {
            return code;
        }
        self.errors.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn create_shader(&self, _shader_type: u32) -> Result<u32, String> {
        if self.no_objects.get() {
            return Err("out of memory".to_string());
        }
        Ok(self.add_shader(""))
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.shader(shader, |s| s.source = source.to_string());
    }

    fn compile_shader(&self, shader: u32) {
        self.compile(shader);
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.shader(shader, |s| s.compiled)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.log_queried();
        self.shader(shader, |s| match (&s.log_override, s.compiled) {
            (Some(log), _) => log.clone(),
            (None, true) => String::new(),
            (None, false) => "0:1(10): error: GLSL 12.34 is not supported\n".to_string(),
        })
    }

    fn delete_shader(&self, shader: u32) {
        self.shader(shader, |s| s.deleted = true);
    }

    fn create_program(&self) -> Result<u32, String> {
        if self.no_objects.get() {
            return Err("out of memory".to_string());
        }
        Ok(self.add_program(&[]))
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.program(program, |p| p.shaders.push(shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.program(program, |p| p.shaders.retain(|&s| s != shader));
    }

    fn link_program(&self, program: u32) {
        self.link(program);
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.program(program, |p| p.linked)
    }

    fn program_info_log(&self, program: u32) -> String {
        self.log_queried();
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader\n".to_string()
        }
    }

    fn delete_program(&self, program: u32) {
        self.program(program, |p| p.deleted = true);
    }
}
