//! Error types for startup failures.
//!
//! Only the two fatal bootstrap paths are modeled as errors: failing to
//! open the window and failing to bring up the GPU. Shader compile and
//! link problems are reported through [`crate::shader::BuildReport`] and
//! the program keeps running.

use std::fmt;

/// Errors that can occur while bringing up the GPU context.
#[derive(Debug)]
pub enum ContextError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter(wgpu::RequestAdapterError),
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            ContextError::NoAdapter(e) => write!(f, "No compatible GPU adapter found: {}", e),
            ContextError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for ContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContextError::SurfaceCreation(e) => Some(e),
            ContextError::NoAdapter(e) => Some(e),
            ContextError::DeviceCreation(e) => Some(e),
        }
    }
}

impl From<wgpu::CreateSurfaceError> for ContextError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        ContextError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestAdapterError> for ContextError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        ContextError::NoAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for ContextError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        ContextError::DeviceCreation(e)
    }
}

/// Errors that can occur before the render loop starts.
#[derive(Debug)]
pub enum BootstrapError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Context(ContextError),
}

impl fmt::Display for BootstrapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootstrapError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            BootstrapError::Window(e) => write!(f, "Failed to create window: {}", e),
            BootstrapError::Context(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for BootstrapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BootstrapError::EventLoop(e) => Some(e),
            BootstrapError::Window(e) => Some(e),
            BootstrapError::Context(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for BootstrapError {
    fn from(e: winit::error::EventLoopError) -> Self {
        BootstrapError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for BootstrapError {
    fn from(e: winit::error::OsError) -> Self {
        BootstrapError::Window(e)
    }
}

impl From<ContextError> for BootstrapError {
    fn from(e: ContextError) -> Self {
        BootstrapError::Context(e)
    }
}
