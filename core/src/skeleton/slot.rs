use crate::color::Color;

use super::attachment::Attachment;

/// A draw-order entry of a posed skeleton.
#[derive(Debug, Clone)]
pub struct Slot {
    pub name: String,
    /// Index of the bone this slot follows.
    pub bone: usize,
    pub color: Color,
    /// Currently active attachment, if any.
    pub attachment: Option<Attachment>,
    /// Vertex deform produced by animation.
    ///
    /// For unweighted meshes this replaces the local vertex positions and
    /// must hold two floats per vertex. For weighted meshes it holds two
    /// offsets per bone weight. Empty means no deform.
    pub deform: Vec<f32>,
}

impl Slot {
    pub fn new(name: impl Into<String>, bone: usize) -> Self {
        Self {
            name: name.into(),
            bone,
            color: Color::WHITE,
            attachment: None,
            deform: Vec::new(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_attachment(mut self, attachment: impl Into<Attachment>) -> Self {
        self.attachment = Some(attachment.into());
        self
    }

    pub fn with_deform(mut self, deform: Vec<f32>) -> Self {
        self.deform = deform;
        self
    }
}
