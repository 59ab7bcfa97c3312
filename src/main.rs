use std::process;

use winit::event_loop::{ControlFlow, EventLoop};

use thefirstone::shader::ShaderSet;
use thefirstone::window::App;

fn init_logging() {
    let mut builder = env_logger::Builder::new();
    if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        builder.filter_level(log::LevelFilter::Info);
    }
    builder.init();
}

fn main() {
    init_logging();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {}", e);
            process::exit(-1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(ShaderSet::default());
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {}", e);
        process::exit(-1);
    }

    if app.fatal_error().is_some() {
        process::exit(-1);
    }
}
