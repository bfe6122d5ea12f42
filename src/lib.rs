//! # speech-bubble
//!
//! A speech bubble container for egui: a rounded body around any content,
//! with a small triangular nip pointing out of one of eight spots.
//!
//! ## Features
//! - Nip on any edge center or corner, with an extra offset for corners
//! - Body sized to its content or fixed, with configurable padding
//! - Drop shadow driven by an elevation value
//! - TOML configuration
//! - Backend-neutral layout ([`BubbleLayout`]) for custom renderers
//!
//! ## Example
//!
//! ```no_run
//! use speech_bubble::{NipLocation, SpeechBubble};
//!
//! fn ui(ui: &mut egui::Ui) {
//!     SpeechBubble::new()
//!         .with_nip_location(NipLocation::TopRight)
//!         .with_color([0.27, 0.54, 1.0, 1.0])
//!         .with_offset(-4.0, 0.0)
//!         .show(ui, |ui| {
//!             ui.label("Hello!");
//!         });
//! }
//! ```

mod bubble;
mod config;
mod error;
pub mod layout;
pub mod paint;
pub mod placement;
mod types;
mod widget;

pub use bubble::SpeechBubble;
pub use config::{SpeechBubbleConfig, DEFAULT_COLOR};
pub use error::{BubbleError, ConfigError};
pub use layout::{BodyPanel, BubbleLayout, NipLayer, Shadow};
pub use paint::{Canvas, PathCommand, PathRecorder, TrianglePainter};
pub use placement::{resolve, ResolvedPlacement};
pub use types::{Anchor, Insets, NipLocation, NipRotation, Rect};
