//! Static quad geometry.
//!
//! A unit square centered at the origin in the z = 0 plane, drawn as two
//! triangles over four shared vertices. Uploaded once at startup and
//! never modified.

use bytemuck::{Pod, Zeroable};

/// One vertex of the quad. Matches attribute 0 in the vertex stage.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

pub const QUAD_VERTICES: [Vertex; 4] = [
    Vertex { position: [0.5, 0.5, 0.0] },
    Vertex { position: [0.5, -0.5, 0.0] },
    Vertex { position: [-0.5, -0.5, 0.0] },
    Vertex { position: [-0.5, 0.5, 0.0] },
];

/// Two triangles sharing the 1-3 diagonal.
pub const QUAD_INDICES: [u32; 6] = [0, 1, 3, 1, 2, 3];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_floats_match_layout_order() {
        let floats: &[f32] = bytemuck::cast_slice(&QUAD_VERTICES);
        assert_eq!(
            floats,
            &[0.5, 0.5, 0.0, 0.5, -0.5, 0.0, -0.5, -0.5, 0.0, -0.5, 0.5, 0.0]
        );
    }

    #[test]
    fn indices_cover_the_square() {
        assert_eq!(QUAD_INDICES, [0, 1, 3, 1, 2, 3]);
        // Every vertex is referenced by at least one triangle.
        for v in 0..QUAD_VERTICES.len() as u32 {
            assert!(QUAD_INDICES.contains(&v));
        }
    }

    #[test]
    fn layout_is_one_tightly_packed_position() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 12);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(layout.attributes.len(), 1);

        let attr = layout.attributes[0];
        assert_eq!(attr.shader_location, 0);
        assert_eq!(attr.offset, 0);
        assert_eq!(attr.format, wgpu::VertexFormat::Float32x3);
    }
}
