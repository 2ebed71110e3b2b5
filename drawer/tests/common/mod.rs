//! Shared fixtures for drawer integration tests.
//!
//! Skeletons here are built by hand with identity or translated bones, so
//! expected vertex positions can be written down directly.

#![allow(dead_code)]

use image::RgbaImage;
use rigdraw::{FrameReport, RenderConfig, SkeletonDrawer};
use rigdraw_core::math::Vec3;
use rigdraw_core::{
    Attachment, Bone, MeshAttachment, MeshVertices, RegionAttachment, Skeleton, Slot,
    TextureHandle,
};
use rigdraw_graphics::{DummyBackend, RecordedBatch, TextureRegistry};

/// Corners of a 2x2 square centered on its bone: BR, BL, TL, TR.
pub const SQUARE_OFFSETS: [f32; 8] = [1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// UVs of a full, unrotated atlas page in corner order.
pub const SQUARE_UVS: [f32; 8] = [1.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0];

// ============================================================================
// Test Context
// ============================================================================

/// Recording backend plus a registry holding one loaded atlas page.
pub struct TestContext {
    pub backend: DummyBackend,
    pub textures: TextureRegistry,
    pub atlas: TextureHandle,
}

impl TestContext {
    pub fn new() -> Self {
        Self::with_backend(DummyBackend::new())
    }

    pub fn with_backend(mut backend: DummyBackend) -> Self {
        let mut textures = TextureRegistry::new();
        let atlas = textures
            .load_image(&mut backend, "atlas", &RgbaImage::new(4, 4))
            .expect("load test atlas");
        backend.clear();
        Self {
            backend,
            textures,
            atlas,
        }
    }

    /// Draw one frame with a fresh drawer built from `config`.
    pub fn draw(&mut self, config: &RenderConfig, skeleton: &Skeleton, position: Vec3) -> FrameReport {
        let mut drawer = SkeletonDrawer::new(config);
        drawer.draw_skeleton(&mut self.backend, &self.textures, skeleton, position)
    }

    pub fn batches(&self) -> Vec<RecordedBatch> {
        self.backend.batches()
    }
}

// ============================================================================
// Attachments
// ============================================================================

pub fn square_region(texture: TextureHandle) -> RegionAttachment {
    RegionAttachment::from_raw("square", texture, SQUARE_OFFSETS, SQUARE_UVS)
}

/// Unit quad mesh split into triangles (0, 1, 2) and (2, 3, 0).
pub fn quad_mesh(texture: TextureHandle) -> MeshAttachment {
    MeshAttachment::new(
        "quad",
        texture,
        MeshVertices::Unweighted(vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]),
        vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        vec![0, 1, 2, 2, 3, 0],
    )
}

/// Mesh declaring `count` vertices, all at the origin, with a single triangle.
pub fn large_mesh(texture: TextureHandle, count: usize) -> MeshAttachment {
    MeshAttachment::new(
        "large",
        texture,
        MeshVertices::Unweighted(vec![[0.0, 0.0]; count]),
        vec![0.0; count * 2],
        vec![0, 1, 2],
    )
}

// ============================================================================
// Skeletons
// ============================================================================

/// Skeleton with one identity bone and one slot per attachment, in order.
pub fn skeleton_with(attachments: Vec<Attachment>) -> Skeleton {
    let mut skeleton = Skeleton::new();
    let bone = skeleton.add_bone(Bone::IDENTITY);
    for (i, attachment) in attachments.into_iter().enumerate() {
        skeleton.add_slot(Slot::new(format!("slot{i}"), bone).with_attachment(attachment));
    }
    skeleton
}

/// Recorded vertex positions of a batch, dropping z.
pub fn positions_2d(batch: &RecordedBatch) -> Vec<[f32; 2]> {
    batch
        .vertices
        .iter()
        .map(|vertex| [vertex.position[0], vertex.position[1]])
        .collect()
}

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}
