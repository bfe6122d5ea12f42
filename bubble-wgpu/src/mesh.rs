//! Triangle meshes for bubble layouts

use bytemuck::{Pod, Zeroable};
use speech_bubble::paint::{self, Canvas};
use speech_bubble::{BubbleLayout, Rect};

/// Segments per rounded corner
const CORNER_SEGMENTS: usize = 8;

/// Vertex format for shape rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeVertex {
    /// Position [x, y] in pixels
    pub position: [f32; 2],
    /// Color [r, g, b, a]
    pub color: [f32; 4],
}

impl ShapeVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub(crate) fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ShapeVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Shadow, body and nip of one bubble as an indexed triangle list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleMesh {
    vertices: Vec<ShapeVertex>,
    indices: Vec<u16>,
    /// Bounding box [x, y, width, height]
    bounds: [f32; 4],
}

impl BubbleMesh {
    /// Tessellate a layout. Draw order: shadow, body, nip.
    pub fn from_layout(layout: &BubbleLayout) -> Self {
        let mut mesh = Self {
            bounds: layout.extent().to_array(),
            ..Default::default()
        };

        let body = &layout.body;
        if let Some(shadow) = &body.shadow {
            mesh.push_shadow(&shadow.rect, body.border_radius, shadow.blur, shadow.color);
        }
        mesh.push_rounded_rect(&body.rect, body.border_radius, body.color);

        let mut canvas = MeshCanvas {
            mesh: &mut mesh,
            path: Vec::new(),
        };
        paint::replay(&layout.nip.path, &mut canvas);

        mesh
    }

    /// Rounded rectangle as a fan around its center
    fn push_rounded_rect(&mut self, rect: &Rect, radius: f32, color: [f32; 4]) {
        let outline = rounded_outline(rect, radius, 0.0);
        self.push_fan(rect.center(), &outline, color);
    }

    /// Rounded rectangle whose edge fades to transparent over `blur`
    /// beyond the outline
    fn push_shadow(&mut self, rect: &Rect, radius: f32, blur: f32, color: [f32; 4]) {
        if blur <= 0.0 {
            self.push_rounded_rect(rect, radius, color);
            return;
        }

        let inner = rounded_outline(rect, radius, 0.0);
        let outer = rounded_outline(rect, radius, blur);
        let inner_start = self.push_fan(rect.center(), &inner, color);

        let transparent = [color[0], color[1], color[2], 0.0];
        let outer_start = self.vertices.len() as u16;
        self.vertices.extend(outer.iter().map(|&position| ShapeVertex {
            position,
            color: transparent,
        }));

        let count = outer.len() as u16;
        for i in 0..count {
            let next = (i + 1) % count;
            self.indices.extend_from_slice(&[
                inner_start + i,
                outer_start + i,
                inner_start + next,
                inner_start + next,
                outer_start + i,
                outer_start + next,
            ]);
        }
    }

    /// Fan around `center`; returns the index of the first outline vertex
    fn push_fan(&mut self, center: [f32; 2], outline: &[[f32; 2]], color: [f32; 4]) -> u16 {
        let center_idx = self.vertices.len() as u16;
        self.vertices.push(ShapeVertex {
            position: center,
            color,
        });

        let first_idx = self.vertices.len() as u16;
        self.vertices
            .extend(outline.iter().map(|&position| ShapeVertex { position, color }));

        let count = outline.len() as u16;
        for i in 0..count {
            let next = (i + 1) % count;
            self.indices
                .extend_from_slice(&[center_idx, first_idx + i, first_idx + next]);
        }
        first_idx
    }

    /// Convex polygon as a fan from its first point
    fn push_polygon(&mut self, points: &[[f32; 2]], color: [f32; 4]) {
        if points.len() < 3 {
            return;
        }

        let start = self.vertices.len() as u16;
        self.vertices
            .extend(points.iter().map(|&position| ShapeVertex { position, color }));
        for i in 1..points.len() as u16 - 1 {
            self.indices.extend_from_slice(&[start, start + i, start + i + 1]);
        }
    }

    pub fn vertices(&self) -> &[ShapeVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    /// Get the bounding box [x, y, width, height]
    pub fn bounds(&self) -> [f32; 4] {
        self.bounds
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Corner arcs of a rounded rect, clockwise from the top-left. `grow` pushes
/// the outline outward around the same corner centers.
fn rounded_outline(rect: &Rect, radius: f32, grow: f32) -> Vec<[f32; 2]> {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let ring = (radius + grow).max(0.0);
    let [left, top] = rect.min();
    let [right, bottom] = rect.max();

    let corners = [
        (left + radius, top + radius, PI, FRAC_PI_2 * 3.0),
        (right - radius, top + radius, FRAC_PI_2 * 3.0, TAU),
        (right - radius, bottom - radius, 0.0, FRAC_PI_2),
        (left + radius, bottom - radius, FRAC_PI_2, PI),
    ];

    let mut outline = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (cx, cy, start, end) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start + (end - start) * i as f32 / CORNER_SEGMENTS as f32;
            outline.push([cx + ring * angle.cos(), cy + ring * angle.sin()]);
        }
    }
    outline
}

/// Collects path points and fills them into the mesh
struct MeshCanvas<'a> {
    mesh: &'a mut BubbleMesh,
    path: Vec<[f32; 2]>,
}

impl Canvas for MeshCanvas<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.path.clear();
        self.path.push([x, y]);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.push([x, y]);
    }

    fn close(&mut self) {}

    fn fill(&mut self, color: [f32; 4]) {
        let path = std::mem::take(&mut self.path);
        self.mesh.push_polygon(&path, color);
    }
}
