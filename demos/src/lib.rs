//! # rigdraw demos
//!
//! Sample content shared by the demo binaries.
//!
//! ## Available Demos
//!
//! - `skeleton_demo` - Poses a small puppet for a number of frames and draws
//!   it into the recording backend

use image::{Rgba, RgbaImage};
use rigdraw_core::{
    AtlasRect, Attachment, Bone, BoneWeight, Color, MeshAttachment, MeshVertices,
    RegionAttachment, RegionFrame, Skeleton, Slot, TextureHandle,
};

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bone indices of the [`puppet`] skeleton.
pub mod bones {
    pub const ROOT: usize = 0;
    pub const TORSO: usize = 1;
    pub const HEAD: usize = 2;
    pub const ARM: usize = 3;
}

/// Checkerboard atlas page, two colors, `cell` pixels per square.
pub fn checker_atlas(size: u32, cell: u32) -> RgbaImage {
    let cell = cell.max(1);
    RgbaImage::from_fn(size, size, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            Rgba([230, 230, 230, 255])
        } else {
            Rgba([40, 90, 160, 255])
        }
    })
}

/// A small puppet: torso and head regions, a weighted cape mesh, an
/// unweighted arm mesh and a point attachment marking the hand.
///
/// Every attachment samples `atlas`. Bones start in their rest pose; call
/// [`pose`] to move them.
pub fn puppet(atlas: TextureHandle) -> Skeleton {
    let mut skeleton = Skeleton::new();
    skeleton.add_bone(Bone::IDENTITY);
    skeleton.add_bone(Bone::from_translation(0.0, 40.0));
    skeleton.add_bone(Bone::from_translation(0.0, 90.0));
    skeleton.add_bone(Bone::from_translation(20.0, 60.0));

    let quarter = |u: f32, v: f32| AtlasRect {
        u,
        v,
        u2: u + 0.5,
        v2: v + 0.5,
        rotated: false,
    };

    let torso = RegionAttachment::new(
        "torso",
        atlas,
        &RegionFrame::sized(40.0, 60.0),
        &quarter(0.0, 0.0),
    );
    let head = RegionAttachment::new(
        "head",
        atlas,
        &RegionFrame::sized(32.0, 32.0).with_rotation(-5.0),
        &AtlasRect {
            rotated: true,
            ..quarter(0.5, 0.0)
        },
    );

    skeleton.add_slot(Slot::new("cape", bones::TORSO).with_attachment(cape(atlas)));
    skeleton.add_slot(Slot::new("torso", bones::TORSO).with_attachment(torso));
    skeleton.add_slot(
        Slot::new("head", bones::HEAD)
            .with_color(Color::new(1.0, 0.9, 0.8, 1.0))
            .with_attachment(head),
    );
    skeleton.add_slot(Slot::new("arm", bones::ARM).with_attachment(arm(atlas)));
    skeleton.add_slot(Slot::new("hand", bones::ARM).with_attachment(Attachment::Point {
        name: "hand".into(),
    }));
    skeleton.add_slot(Slot::new("shadow", bones::ROOT));
    skeleton
}

/// Move the puppet for frame `frame`: the arm swings and the head nods.
pub fn pose(skeleton: &mut Skeleton, frame: u32) {
    let sway = (frame as f32 * 0.1).sin();
    if let Some(head) = skeleton.bones.get_mut(bones::HEAD) {
        *head = Bone::from_transform(0.0, 90.0, sway * 8.0, 1.0, 1.0);
    }
    if let Some(arm) = skeleton.bones.get_mut(bones::ARM) {
        *arm = Bone::from_transform(20.0, 60.0, -30.0 + sway * 45.0, 1.0, 1.0);
    }
}

/// Two-segment arm strip along +x.
fn arm(atlas: TextureHandle) -> MeshAttachment {
    MeshAttachment::new(
        "arm",
        atlas,
        MeshVertices::Unweighted(vec![
            [0.0, -4.0],
            [20.0, -4.0],
            [40.0, -3.0],
            [40.0, 3.0],
            [20.0, 4.0],
            [0.0, 4.0],
        ]),
        vec![0.0, 0.5, 0.25, 0.5, 0.5, 0.5, 0.5, 0.6, 0.25, 0.6, 0.0, 0.6],
        vec![0, 1, 4, 4, 5, 0, 1, 2, 3, 3, 4, 1],
    )
}

/// Cape hanging from the torso, blended between torso and root.
fn cape(atlas: TextureHandle) -> MeshAttachment {
    let blended = |x: f32, y: f32, top: f32| {
        vec![
            BoneWeight {
                bone: bones::TORSO,
                x,
                y,
                weight: top,
            },
            BoneWeight {
                bone: bones::ROOT,
                x,
                y: y + 40.0,
                weight: 1.0 - top,
            },
        ]
    };
    MeshAttachment::new(
        "cape",
        atlas,
        MeshVertices::Weighted(vec![
            blended(-22.0, 30.0, 1.0),
            blended(22.0, 30.0, 1.0),
            blended(26.0, -30.0, 0.3),
            blended(-26.0, -30.0, 0.3),
        ]),
        vec![0.5, 0.5, 1.0, 0.5, 1.0, 1.0, 0.5, 1.0],
        vec![0, 1, 2, 2, 3, 0],
    )
}
