//! Draws posed skeletons through an immediate-mode backend.
//!
//! Converts region and mesh attachments into textured, colored vertices and
//! submits them slot by slot, in draw order.
//!
//! # Architecture
//!
//! - [`SpineRenderer`] - Owned rendering context (backend, textures, drawer)
//! - [`SkeletonDrawer`] - Draw-order walk; one call per skeleton per frame
//! - [`ScratchBuffer`] - Fixed-capacity staging for one attachment
//! - [`WindingOrder`] / [`LayerOffsetTracker`] - Quad traversal and depth bias
//! - [`build_region`] / [`build_mesh`] - Attachment to vertex conversion
//!
//! # Usage
//!
//! ```ignore
//! // Setup (once)
//! let mut renderer = SpineRenderer::new(backend, RenderConfig::default());
//! let atlas = renderer.load_texture("atlas.png")?;
//!
//! // Each frame, after posing:
//! let report = renderer.draw_skeleton(&skeleton, vec3(400.0, 300.0, 0.0));
//! for diagnostic in &report.diagnostics {
//!     // slot skipped this frame
//! }
//! ```
//!
//! Slots that cannot be drawn (oversized meshes, unloaded textures,
//! attachments without geometry) are skipped and listed in the returned
//! [`FrameReport`]; the rest of the frame is still drawn.

mod builder;
mod config;
mod drawer;
mod error;
mod layer;
mod renderer;
mod report;
mod scratch;
mod submit;
mod vertex;
mod winding;

pub use builder::{REGION_VERTEX_COUNT, build_mesh, build_region, tint};
pub use config::{MAX_VERTICES_PER_ATTACHMENT, RenderConfig};
pub use drawer::{DrawState, SkeletonDrawer};
pub use error::DrawError;
pub use layer::LayerOffsetTracker;
pub use renderer::SpineRenderer;
pub use report::{FrameReport, SlotDiagnostic};
pub use scratch::ScratchBuffer;
pub use vertex::Vertex;
pub use winding::WindingOrder;
