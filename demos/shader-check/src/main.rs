mod app;
mod cli;
mod logging;
mod session;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use gldebug_core::{ActiveChecks, CheckLevel};
use winit::event_loop::EventLoop;

use crate::{
    app::App,
    cli::Cli,
    logging::{LoggingConfig, init_logging},
    session::SessionPlan,
};

fn main() -> Result<()> {
    // panic hook
    color_eyre::install()?;

    let logging_config = LoggingConfig::from_env();
    let _guard = init_logging(&logging_config).wrap_err("Failed to initialize logging")?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        checks = ActiveChecks::NAME,
        "shader-check starting up"
    );

    let cli = Cli::parse();
    let plan = SessionPlan {
        sink: cli.sink,
        call_error: !cli.skip_call_error,
        builtin: !cli.skip_builtin,
        user_sources: cli.load_sources()?,
    };

    let event_loop = EventLoop::new().wrap_err("Failed to create event loop")?;
    let mut app = App::new(plan);
    event_loop
        .run_app(&mut app)
        .wrap_err("Event loop failed")?;

    let summary = app.finish()?;
    tracing::info!(
        reported = summary.reported,
        failed_builds = summary.failed_builds,
        "shader-check finished"
    );

    Ok(())
}
