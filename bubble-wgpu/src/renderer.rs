//! GPU renderer for bubble meshes

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, Device, Queue, RenderPass, RenderPipeline, TextureFormat,
};

use crate::mesh::{BubbleMesh, ShapeVertex};

/// Per-frame placement of the bubble in the viewport
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
struct Placement {
    /// Logical to physical pixels
    scale: [f32; 2],
    /// Bubble origin in physical pixels
    origin: [f32; 2],
    /// Viewport size in physical pixels
    viewport: [f32; 2],
    _padding: [f32; 2],
}

impl Placement {
    fn new(position: [f32; 2], viewport: [f32; 2], scale_factor: f32) -> Self {
        Self {
            scale: [scale_factor; 2],
            origin: [position[0] * scale_factor, position[1] * scale_factor],
            viewport,
            _padding: [0.0; 2],
        }
    }
}

/// Geometry uploaded by the last `prepare`
struct PreparedMesh {
    vertex_buffer: Buffer,
    index_buffer: Buffer,
    index_count: u32,
}

/// Draws one bubble per frame
pub struct BubbleRenderer {
    pipeline: RenderPipeline,
    placement_buffer: Buffer,
    bind_group: BindGroup,
    prepared: Option<PreparedMesh>,
}

impl BubbleRenderer {
    /// Create a new renderer for targets of `format`
    pub fn new(device: &Device, format: TextureFormat) -> Self {
        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("speech-bubble placement layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline = create_pipeline(device, &layout, format);

        let placement_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("speech-bubble placement"),
            contents: bytemuck::bytes_of(&Placement::new([0.0; 2], [1.0; 2], 1.0)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("speech-bubble placement"),
            layout: &layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: placement_buffer.as_entire_binding(),
            }],
        });

        log::debug!("Bubble pipeline created for {:?}", format);

        Self {
            pipeline,
            placement_buffer,
            bind_group,
            prepared: None,
        }
    }

    /// Upload `mesh`, placed at `position` (logical pixels) in a
    /// `viewport` of physical pixels
    pub fn prepare(
        &mut self,
        device: &Device,
        queue: &Queue,
        mesh: &BubbleMesh,
        position: [f32; 2],
        viewport: [f32; 2],
        scale_factor: f32,
    ) {
        let placement = Placement::new(position, viewport, scale_factor);
        queue.write_buffer(&self.placement_buffer, 0, bytemuck::bytes_of(&placement));

        if mesh.is_empty() {
            self.prepared = None;
            return;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("speech-bubble vertices"),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("speech-bubble indices"),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        self.prepared = Some(PreparedMesh {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices().len() as u32,
        });
    }

    /// Render the prepared mesh
    pub fn render<'a>(&'a self, render_pass: &mut RenderPass<'a>) {
        let Some(prepared) = &self.prepared else {
            return;
        };

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, prepared.vertex_buffer.slice(..));
        render_pass.set_index_buffer(prepared.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
        render_pass.draw_indexed(0..prepared.index_count, 0, 0..1);
    }
}

fn create_pipeline(
    device: &Device,
    bind_group_layout: &BindGroupLayout,
    format: TextureFormat,
) -> RenderPipeline {
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("speech-bubble shader"),
        source: wgpu::ShaderSource::Wgsl(BUBBLE_SHADER.into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("speech-bubble pipeline layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("speech-bubble pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: "vs_bubble",
            buffers: &[ShapeVertex::desc()],
        },
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: "fs_bubble",
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        // Rotated nips flip winding, so nothing is culled
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
    })
}

const BUBBLE_SHADER: &str = r#"
struct Placement {
    scale: vec2<f32>,
    origin: vec2<f32>,
    viewport: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> placement: Placement;

struct Varyings {
    @builtin(position) position: vec4<f32>,
    @location(0) color: vec4<f32>,
}

@vertex
fn vs_bubble(@location(0) pos: vec2<f32>, @location(1) color: vec4<f32>) -> Varyings {
    let px = pos * placement.scale + placement.origin;
    let ndc = vec2<f32>(px.x / placement.viewport.x * 2.0 - 1.0, 1.0 - px.y / placement.viewport.y * 2.0);

    var v: Varyings;
    v.position = vec4<f32>(ndc, 0.0, 1.0);
    v.color = color;
    return v;
}

@fragment
fn fs_bubble(v: Varyings) -> @location(0) vec4<f32> {
    return v.color;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_layout() {
        // Uniform structs are sized in 16 byte steps
        assert_eq!(std::mem::size_of::<Placement>(), 32);
    }

    #[test]
    fn test_placement_scales_position() {
        let placement = Placement::new([10.0, 20.0], [800.0, 600.0], 2.0);
        assert_eq!(placement.scale, [2.0, 2.0]);
        assert_eq!(placement.origin, [20.0, 40.0]);
        assert_eq!(placement.viewport, [800.0, 600.0]);
    }

    #[test]
    fn test_shader_entry_points() {
        assert!(BUBBLE_SHADER.contains("fn vs_bubble("));
        assert!(BUBBLE_SHADER.contains("fn fs_bubble("));
    }
}
