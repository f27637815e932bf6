/// Evaluates a GL call, then checks the error state against it.
///
/// The statement text, line and file of the invocation end up in the
/// reported message. Evaluates to the value of the call, so it can wrap
/// expressions producing handles:
///
/// ```ignore
/// let shader = gld_call!(debugger, unsafe { gl.create_shader(glow::VERTEX_SHADER) });
/// gld_call!(debugger, unsafe { gl.use_program(None) });
/// ```
///
/// Without call checks compiled in, this is the bare call.
#[macro_export]
macro_rules! gld_call {
    ($debugger:expr, $call:expr $(,)?) => {
        match $call {
            result => {
                $debugger.check_call(::core::stringify!($call), ::core::line!(), ::core::file!());
                result
            },
        }
    };
}
