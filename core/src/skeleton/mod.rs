//! Read-only model of a posed skeleton.
//!
//! The animation runtime owns bone hierarchies, constraints and animation
//! state. Drawing only needs what that runtime has already computed:
//!
//! - [`Bone`] - final world matrix and translation
//! - [`Slot`] - per-slot color, bone binding, deform and active attachment
//! - [`Attachment`] - the closed set of attachment shapes
//! - [`Skeleton`] - bones, slots, draw order, skeleton color and scale

mod attachment;
mod bone;
mod error;
mod mesh;
mod region;
mod slot;

pub use attachment::{Attachment, AttachmentKind};
pub use bone::Bone;
pub use error::SkeletonError;
pub use mesh::{BoneWeight, MeshAttachment, MeshVertices};
pub use region::{AtlasRect, RegionAttachment, RegionFrame};
pub use slot::Slot;

use crate::color::Color;

/// A posed skeleton, ready to be drawn.
#[derive(Debug, Clone)]
pub struct Skeleton {
    /// Bones with world transforms already computed.
    pub bones: Vec<Bone>,
    /// Slots in setup order.
    pub slots: Vec<Slot>,
    /// Indices into [`slots`](Self::slots), back to front.
    pub draw_order: Vec<usize>,
    /// Color multiplied into every slot color.
    pub color: Color,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl Skeleton {
    /// Create an empty skeleton with unit scale and white color.
    pub fn new() -> Self {
        Self {
            bones: Vec::new(),
            slots: Vec::new(),
            draw_order: Vec::new(),
            color: Color::WHITE,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_scale(mut self, scale_x: f32, scale_y: f32) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    /// Add a bone and return its index.
    pub fn add_bone(&mut self, bone: Bone) -> usize {
        self.bones.push(bone);
        self.bones.len() - 1
    }

    /// Add a slot and append it to the end of the draw order.
    pub fn add_slot(&mut self, slot: Slot) -> usize {
        self.slots.push(slot);
        let index = self.slots.len() - 1;
        self.draw_order.push(index);
        index
    }

    /// Replace the draw order.
    pub fn set_draw_order(&mut self, draw_order: Vec<usize>) {
        self.draw_order = draw_order;
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn find_slot(&self, name: &str) -> Option<usize> {
        self.slots.iter().position(|slot| slot.name == name)
    }

    /// Bone a slot is attached to.
    pub fn slot_bone(&self, slot: &Slot) -> Result<&Bone, SkeletonError> {
        self.bones
            .get(slot.bone)
            .ok_or(SkeletonError::BoneOutOfRange {
                bone: slot.bone,
                count: self.bones.len(),
            })
    }

    /// Whether an odd number of axes is flipped.
    pub fn is_mirrored(&self) -> bool {
        self.scale_x * self.scale_y < 0.0
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_skeleton_is_empty() {
        let skeleton = Skeleton::new();
        assert!(skeleton.slots.is_empty());
        assert!(skeleton.draw_order.is_empty());
        assert_eq!(skeleton.color, Color::WHITE);
        assert!(!skeleton.is_mirrored());
    }

    #[test]
    fn test_add_slot_extends_draw_order() {
        let mut skeleton = Skeleton::new();
        let root = skeleton.add_bone(Bone::IDENTITY);
        let a = skeleton.add_slot(Slot::new("a", root));
        let b = skeleton.add_slot(Slot::new("b", root));
        assert_eq!(skeleton.draw_order, vec![a, b]);
        assert_eq!(skeleton.find_slot("b"), Some(b));
        assert_eq!(skeleton.find_slot("missing"), None);
    }

    #[test]
    fn test_slot_bone_out_of_range() {
        let skeleton = Skeleton::new();
        let slot = Slot::new("orphan", 3);
        assert_eq!(
            skeleton.slot_bone(&slot).unwrap_err(),
            SkeletonError::BoneOutOfRange { bone: 3, count: 0 }
        );
    }

    #[test]
    fn test_mirrored() {
        assert!(Skeleton::new().with_scale(-1.0, 1.0).is_mirrored());
        assert!(!Skeleton::new().with_scale(-1.0, -1.0).is_mirrored());
        assert!(!Skeleton::new().with_scale(0.0, -1.0).is_mirrored());
    }
}
