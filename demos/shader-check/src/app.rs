use std::num::NonZeroU32;

use color_eyre::{Report, eyre::eyre};
use glutin::{
    config::{ConfigTemplateBuilder, GlConfig},
    context::{ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, Version},
    display::{GetGlDisplay, GlDisplay},
    surface::{SurfaceAttributesBuilder, WindowSurface},
};
use glow::HasContext;
use glutin_winit::DisplayBuilder;
use raw_window_handle::HasWindowHandle;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::ActiveEventLoop,
    window::{WindowAttributes, WindowId},
};

use crate::session::{self, SessionPlan, Summary};

/// Runs one check session as soon as the event loop hands out a window,
/// then exits the loop.
pub struct App {
    plan: SessionPlan,
    outcome: Option<Result<Summary, Report>>,
}

impl App {
    pub fn new(plan: SessionPlan) -> Self {
        Self { plan, outcome: None }
    }

    /// The session result; an error if the loop exited before the session ran.
    pub fn finish(self) -> Result<Summary, Report> {
        self.outcome
            .unwrap_or_else(|| Err(eyre!("Event loop exited before a GL context was created")))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.outcome.is_some() {
            return;
        }

        self.outcome = Some(run_in_hidden_window(event_loop, &self.plan));
        event_loop.exit();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
        }
    }
}

/// Creates an invisible window with a current OpenGL 3.3 core context and
/// runs the session against it. Everything is torn down on return.
fn run_in_hidden_window(
    event_loop: &ActiveEventLoop,
    plan: &SessionPlan,
) -> Result<Summary, Report> {
    let window_attrs = WindowAttributes::default()
        .with_title("gldebug shader-check")
        .with_inner_size(PhysicalSize::new(512, 512))
        .with_visible(false);

    let (window, gl_config) = DisplayBuilder::new()
        .with_window_attributes(Some(window_attrs))
        .build(event_loop, ConfigTemplateBuilder::new(), |configs| {
            configs
                .reduce(|accum, config| {
                    if config.num_samples() < accum.num_samples() { config } else { accum }
                })
                .expect("display offers no GL configs")
        })
        .map_err(|e| eyre!("Failed to build display: {e}"))?;

    let window = window.ok_or_else(|| eyre!("Failed to create window"))?;
    let gl_display = gl_config.display();
    let raw_handle = window.window_handle()?.as_raw();

    let context_attrs = ContextAttributesBuilder::new()
        .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
        .with_profile(GlProfile::Core)
        .build(Some(raw_handle));

    let not_current_context = unsafe { gl_display.create_context(&gl_config, &context_attrs) }?;

    let size = window.inner_size();
    let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
        raw_handle,
        NonZeroU32::new(size.width).unwrap_or(NonZeroU32::MIN),
        NonZeroU32::new(size.height).unwrap_or(NonZeroU32::MIN),
    );
    let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attrs) }?;
    let _gl_context = not_current_context.make_current(&gl_surface)?;

    let gl = unsafe {
        glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
    };

    tracing::info!(
        version = ?gl.version(),
        "OpenGL context ready"
    );

    session::run(&gl, plan)
}
