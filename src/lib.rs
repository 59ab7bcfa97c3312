//! A windowed wireframe quad.
//!
//! Opens an 800x600 window, checks a fixed vertex/fragment WGSL pair,
//! uploads a static quad mesh (4 vertices, 6 indices) and draws it in
//! wireframe every frame until the window closes or escape is pressed.
//!
//! Shader compile and link diagnostics are logged and never abort the
//! program; only window creation and GPU bring-up failures are fatal.

pub mod context;
pub mod error;
pub mod mesh;
pub mod shader;
pub mod window;
