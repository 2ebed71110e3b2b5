//! Draw-order walk over a posed skeleton.

use rigdraw_core::math::Vec3;
use rigdraw_core::{Attachment, Color, MeshAttachment, RegionAttachment, Skeleton, Slot};
use rigdraw_graphics::{ImmediateBackend, TextureRegistry};

use crate::builder::{build_mesh, build_region, tint};
use crate::config::RenderConfig;
use crate::error::DrawError;
use crate::layer::LayerOffsetTracker;
use crate::report::{FrameReport, SlotDiagnostic};
use crate::scratch::ScratchBuffer;
use crate::submit::{submit_mesh, submit_region};
use crate::winding::WindingOrder;

/// Where the drawer is in its per-frame walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawState {
    /// No frame drawn yet.
    Idle,
    /// Inside [`SkeletonDrawer::draw_skeleton`].
    Walking,
    /// Last walk finished. Behaves like `Idle` for the next frame.
    Done,
}

/// Per-slot inputs shared by the region and mesh paths.
struct SlotDraw<'a> {
    skeleton: &'a Skeleton,
    slot: &'a Slot,
    tint: Color,
    position: Vec3,
    bias: f32,
}

/// Walks a skeleton's draw order and submits each slot's attachment.
///
/// Owns the scratch buffers, so drawing allocates nothing per frame
/// (diagnostics aside). Not thread-safe: one drawer per rendering thread.
#[derive(Debug)]
pub struct SkeletonDrawer {
    scratch: ScratchBuffer,
    world_vertices: Vec<f32>,
    layer: LayerOffsetTracker,
    double_faced: bool,
    wireframe: bool,
    state: DrawState,
}

impl SkeletonDrawer {
    pub fn new(config: &RenderConfig) -> Self {
        let capacity = config.max_vertices_per_attachment;
        Self {
            scratch: ScratchBuffer::new(capacity),
            world_vertices: vec![0.0; capacity * 2],
            layer: LayerOffsetTracker::new(config.layer_spacing_base, config.layer_spacing),
            double_faced: config.double_faced,
            wireframe: config.wireframe,
            state: DrawState::Idle,
        }
    }

    pub fn state(&self) -> DrawState {
        self.state
    }

    /// Vertices staged for the last attachment drawn.
    pub fn scratch(&self) -> &ScratchBuffer {
        &self.scratch
    }

    /// Depth bias of the last slot visited.
    pub fn layer_bias(&self) -> f32 {
        self.layer.current()
    }

    /// Draw every slot of `skeleton`, in draw order, offset by `position`.
    ///
    /// Slots that cannot be drawn are skipped and reported; the walk always
    /// finishes.
    pub fn draw_skeleton<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        textures: &TextureRegistry,
        skeleton: &Skeleton,
        position: Vec3,
    ) -> FrameReport {
        self.state = DrawState::Walking;
        let winding = WindingOrder::select(skeleton.scale_x, skeleton.scale_y);
        self.layer.reset();

        let mut report = FrameReport::default();
        for (draw_index, &slot_index) in skeleton.draw_order.iter().enumerate() {
            let bias = self.layer.next();

            let Some(slot) = skeleton.slot(slot_index) else {
                report.slots_skipped += 1;
                report.record(SlotDiagnostic {
                    draw_index,
                    slot_index,
                    slot_name: String::new(),
                    error: DrawError::InvalidSlot {
                        index: slot_index,
                        count: skeleton.slots.len(),
                    },
                });
                continue;
            };
            let Some(attachment) = &slot.attachment else {
                continue;
            };

            let draw = SlotDraw {
                skeleton,
                slot,
                tint: tint(skeleton.color, slot.color),
                position,
                bias,
            };
            let result = match attachment {
                Attachment::Region(region) => {
                    self.draw_region(backend, textures, &draw, region, winding)
                }
                Attachment::Mesh(mesh) => {
                    if self.double_faced {
                        report.record(SlotDiagnostic {
                            draw_index,
                            slot_index,
                            slot_name: slot.name.clone(),
                            error: DrawError::UnsupportedAttachment {
                                kind: attachment.kind(),
                                detail: "double-faced rendering is not supported for meshes",
                            },
                        });
                    }
                    self.draw_mesh(backend, textures, &draw, mesh)
                }
                other => Err(DrawError::UnsupportedAttachment {
                    kind: other.kind(),
                    detail: "attachment has no geometry",
                }),
            };

            match result {
                Ok(submissions) => {
                    report.submissions += submissions;
                    report.slots_drawn += 1;
                }
                Err(error) => {
                    report.slots_skipped += 1;
                    report.record(SlotDiagnostic {
                        draw_index,
                        slot_index,
                        slot_name: slot.name.clone(),
                        error,
                    });
                }
            }
        }

        self.state = DrawState::Done;
        log::trace!(
            "Drew skeleton: {} slots, {} submissions, {} skipped",
            skeleton.draw_order.len(),
            report.submissions,
            report.slots_skipped
        );
        report
    }

    fn draw_region<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        textures: &TextureRegistry,
        draw: &SlotDraw<'_>,
        region: &RegionAttachment,
        winding: WindingOrder,
    ) -> Result<usize, DrawError> {
        let texture = textures
            .resolve(region.texture())
            .ok_or(DrawError::MissingTexture(region.texture()))?;
        let bone = draw.skeleton.slot_bone(draw.slot)?;

        let mut world = [0.0; 8];
        region.compute_world_vertices(bone, &mut world);
        let written = build_region(&mut self.scratch, 0, &world, region.uvs(), draw.tint)?;

        Ok(submit_region(
            backend,
            texture,
            &self.scratch.as_slice()[..written],
            winding,
            draw.position,
            draw.bias,
            self.double_faced,
        ))
    }

    fn draw_mesh<B: ImmediateBackend + ?Sized>(
        &mut self,
        backend: &mut B,
        textures: &TextureRegistry,
        draw: &SlotDraw<'_>,
        mesh: &MeshAttachment,
    ) -> Result<usize, DrawError> {
        let capacity = self.scratch.capacity();
        if mesh.vertex_count() > capacity {
            return Err(DrawError::CapacityExceeded {
                required: mesh.vertex_count(),
                capacity,
            });
        }

        let texture = textures
            .resolve(mesh.texture())
            .ok_or(DrawError::MissingTexture(mesh.texture()))?;
        let floats =
            mesh.compute_world_vertices(&draw.skeleton.bones, draw.slot, &mut self.world_vertices)?;
        let written = build_mesh(
            &mut self.scratch,
            0,
            &self.world_vertices[..floats],
            mesh.uvs(),
            mesh.triangles(),
            draw.tint,
        )?;
        if written == 0 {
            return Ok(0);
        }

        Ok(submit_mesh(
            backend,
            texture,
            &self.scratch.as_slice()[..written],
            draw.position,
            draw.bias,
            self.wireframe,
        ))
    }
}
