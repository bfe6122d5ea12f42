//! # bubble-wgpu
//!
//! Draws [`speech_bubble::BubbleLayout`]s with wgpu, for hosts that render
//! without egui.
//!
//! ## Example
//!
//! ```no_run
//! use bubble_wgpu::{BubbleMesh, BubbleRenderer};
//! use speech_bubble::{NipLocation, SpeechBubble};
//!
//! fn draw(device: &wgpu::Device, queue: &wgpu::Queue, format: wgpu::TextureFormat) {
//!     let layout = SpeechBubble::new()
//!         .with_nip_location(NipLocation::Left)
//!         .layout([120.0, 32.0]);
//!     let mesh = BubbleMesh::from_layout(&layout);
//!
//!     let mut renderer = BubbleRenderer::new(device, format);
//!     renderer.prepare(device, queue, &mesh, [40.0, 40.0], [800.0, 600.0], 1.0);
//!     // renderer.render(&mut render_pass);
//! }
//! ```

mod mesh;
mod renderer;

pub use mesh::{BubbleMesh, ShapeVertex};
pub use renderer::BubbleRenderer;
