//! Application shell: window creation, input and the render loop.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::context::RenderContext;
use crate::error::BootstrapError;
use crate::shader::ShaderSet;

pub const WINDOW_TITLE: &str = "thefirstone";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

/// True when the key event should close the window.
pub fn exit_requested(key: PhysicalKey, state: ElementState) -> bool {
    state == ElementState::Pressed && key == PhysicalKey::Code(KeyCode::Escape)
}

pub struct App {
    shaders: ShaderSet,
    window: Option<Arc<Window>>,
    context: Option<RenderContext>,
    fatal: Option<BootstrapError>,
}

impl App {
    pub fn new(shaders: ShaderSet) -> Self {
        Self {
            shaders,
            window: None,
            context: None,
            fatal: None,
        }
    }

    /// Startup failure observed before the render loop, if any.
    pub fn fatal_error(&self) -> Option<&BootstrapError> {
        self.fatal.as_ref()
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("windowing didnt opened: {}", e);
                self.fatal = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(RenderContext::new(window.clone(), &self.shaders)) {
            Ok(context) => {
                self.window = Some(window);
                self.context = Some(context);
            }
            Err(e) => {
                log::error!("failed to init gpu: {}", e);
                self.fatal = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if exit_requested(event.physical_key, event.state) {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(context) = &mut self.context {
                    context.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(context) = &mut self.context {
                    match context.render() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            let size = winit::dpi::PhysicalSize {
                                width: context.config.width,
                                height: context.config.height,
                            };
                            context.resize(size);
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => log::error!("render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_press_requests_exit() {
        let escape = PhysicalKey::Code(KeyCode::Escape);
        assert!(exit_requested(escape, ElementState::Pressed));
        assert!(!exit_requested(escape, ElementState::Released));
    }

    #[test]
    fn other_keys_are_ignored() {
        let space = PhysicalKey::Code(KeyCode::Space);
        assert!(!exit_requested(space, ElementState::Pressed));
    }

    #[test]
    fn window_constants() {
        assert_eq!(WINDOW_TITLE, "thefirstone");
        assert_eq!((WINDOW_WIDTH, WINDOW_HEIGHT), (800, 600));
    }

    #[test]
    fn new_app_has_no_fatal_error() {
        let app = App::new(ShaderSet::default());
        assert!(app.fatal_error().is_none());
    }
}
