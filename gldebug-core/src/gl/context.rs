use std::fmt::Debug;

use glow::HasContext;

/// The slice of a GL context the checked paths need.
///
/// Implemented for every [`glow::HasContext`], so a `glow::Context` can be
/// handed straight to a [`Debugger`](crate::Debugger). All calls must happen
/// on the thread the context is current on.
pub trait DebugContext {
    /// Shader object handle.
    type Shader: Copy + Debug;
    /// Program object handle.
    type Program: Copy + Debug;

    /// Reads and clears one code from the error state (`glGetError`).
    fn get_error(&self) -> u32;

    /// Creates a shader object of the given `GL_*_SHADER` type.
    ///
    /// # Errors
    /// The driver's description when no object could be created.
    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String>;

    /// Replaces the source of the shader object (`glShaderSource`).
    fn shader_source(&self, shader: Self::Shader, source: &str);

    /// Compiles the shader object (`glCompileShader`).
    fn compile_shader(&self, shader: Self::Shader);

    /// `GL_COMPILE_STATUS` of the shader object.
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;

    /// Full info log of the shader object, unbounded.
    fn shader_info_log(&self, shader: Self::Shader) -> String;

    /// `glDeleteShader`
    fn delete_shader(&self, shader: Self::Shader);

    /// Creates an empty program object.
    ///
    /// # Errors
    /// The driver's description when no object could be created.
    fn create_program(&self) -> Result<Self::Program, String>;

    /// `glAttachShader`
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// `glDetachShader`
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Links the program object (`glLinkProgram`).
    fn link_program(&self, program: Self::Program);

    /// `GL_LINK_STATUS` of the program object.
    fn program_link_status(&self, program: Self::Program) -> bool;

    /// Full info log of the program object, unbounded.
    fn program_info_log(&self, program: Self::Program) -> String;

    /// `glDeleteProgram`
    fn delete_program(&self, program: Self::Program);
}

impl<T: HasContext> DebugContext for T {
    type Shader = T::Shader;
    type Program = T::Program;

    fn get_error(&self) -> u32 {
        unsafe { HasContext::get_error(self) }
    }

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, shader_type) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) };
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) };
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) };
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) };
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::detach_shader(self, program, shader) };
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) };
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) };
    }
}
