use crate::{
    error::Error,
    gl::{CheckLevel, DebugContext, Debugger},
    gld_call,
};

/// A linked program built through the checked compile and link paths.
#[derive(Debug)]
pub struct ShaderProgram<P> {
    program: P,
}

impl<P: Copy> ShaderProgram<P> {
    /// Compiles both stages, links them and releases the shader objects.
    ///
    /// Both stages are compiled even if the first one fails, so every stage
    /// error reaches the sink; the first one is returned.
    ///
    /// # Errors
    /// [`Error::Compile`] or [`Error::Link`] when build checks are compiled
    /// in and the sources are rejected, [`Error::Resource`] if GL objects
    /// cannot be created.
    pub fn create<G, C>(
        debugger: &Debugger<'_, G, C>,
        vertex_source: &str,
        fragment_source: &str,
        identifier: &str,
    ) -> Result<Self, Error>
    where
        G: DebugContext<Program = P>,
        C: CheckLevel,
    {
        let gl = debugger.gl();
        debugger.start();

        let vertex = compile_shader(debugger, ShaderType::Vertex, vertex_source, identifier);
        let fragment = compile_shader(debugger, ShaderType::Fragment, fragment_source, identifier);
        let (vertex, fragment) = match (vertex, fragment) {
            (Ok(vertex), Ok(fragment)) => (vertex, fragment),
            (Err(e), other) | (other, Err(e)) => {
                if let Ok(shader) = other {
                    gld_call!(debugger, gl.delete_shader(shader));
                }
                return Err(e);
            },
        };

        let program = match gld_call!(debugger, gl.create_program()) {
            Ok(program) => program,
            Err(e) => {
                for shader in [vertex, fragment] {
                    gld_call!(debugger, gl.delete_shader(shader));
                }
                return Err(Error::program_creation_failed(&e));
            },
        };

        // attach shaders and link program
        gld_call!(debugger, gl.attach_shader(program, vertex));
        gld_call!(debugger, gl.attach_shader(program, fragment));
        let linked = debugger.try_link(program, identifier);

        // shaders are no longer needed once the program is linked
        for shader in [vertex, fragment] {
            gld_call!(debugger, gl.detach_shader(program, shader));
            gld_call!(debugger, gl.delete_shader(shader));
        }

        if let Err(e) = linked {
            gld_call!(debugger, gl.delete_program(program));
            return Err(e);
        }

        tracing::debug!(identifier, "shader program linked");
        Ok(ShaderProgram { program })
    }

    /// The GL program handle.
    pub fn program(&self) -> P {
        self.program
    }

    /// Use the shader program.
    pub fn use_program<G: glow::HasContext<Program = P>>(&self, gl: &G) {
        unsafe { glow::HasContext::use_program(gl, Some(self.program)) };
    }

    /// Deletes the GL program object.
    pub fn delete<G: DebugContext<Program = P>>(self, gl: &G) {
        gl.delete_program(self.program);
    }
}

fn compile_shader<G: DebugContext, C: CheckLevel>(
    debugger: &Debugger<'_, G, C>,
    shader_type: ShaderType,
    source: &str,
    identifier: &str,
) -> Result<G::Shader, Error> {
    let gl = debugger.gl();
    let shader = gld_call!(debugger, gl.create_shader(shader_type.into())).map_err(|e| {
        Error::shader_creation_failed(&format!("{} shader: {e}", shader_type.name()))
    })?;

    gld_call!(debugger, gl.shader_source(shader, source));
    if let Err(e) = debugger.try_compile(shader, identifier) {
        gld_call!(debugger, gl.delete_shader(shader));
        return Err(e);
    }

    Ok(shader)
}

/// Enum representing the type of shader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderType {
    /// `GL_VERTEX_SHADER`
    Vertex,
    /// `GL_FRAGMENT_SHADER`
    Fragment,
}

impl ShaderType {
    /// Lowercase stage name.
    pub fn name(&self) -> &'static str {
        match self {
            ShaderType::Vertex => "vertex",
            ShaderType::Fragment => "fragment",
        }
    }
}

impl From<ShaderType> for u32 {
    fn from(val: ShaderType) -> Self {
        use ShaderType::*;

        match val {
            Vertex => glow::VERTEX_SHADER,
            Fragment => glow::FRAGMENT_SHADER,
        }
    }
}
