//! Fixed-capacity vertex staging area.

use crate::error::DrawError;
use crate::vertex::Vertex;

/// Reusable vertex storage for one attachment at a time.
///
/// Allocated once with a fixed capacity. Every build overwrites the buffer
/// from its start offset; only the vertices of the most recent build are
/// meaningful.
#[derive(Debug)]
pub struct ScratchBuffer {
    vertices: Box<[Vertex]>,
    len: usize,
}

impl ScratchBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: vec![Vertex::default(); capacity].into_boxed_slice(),
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.vertices.len()
    }

    /// Number of meaningful vertices.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Vertices written by the last build.
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices[..self.len]
    }

    /// Fail unless `count` vertices fit starting at `start`.
    pub(crate) fn ensure_room(&self, start: usize, count: usize) -> Result<(), DrawError> {
        let required = start.saturating_add(count);
        if required > self.capacity() {
            return Err(DrawError::CapacityExceeded {
                required,
                capacity: self.capacity(),
            });
        }
        Ok(())
    }

    /// Mutable window of `count` vertices at `start`; mark them meaningful.
    ///
    /// Callers check [`ensure_room`](Self::ensure_room) first.
    pub(crate) fn window(&mut self, start: usize, count: usize) -> &mut [Vertex] {
        self.len = start + count;
        &mut self.vertices[start..start + count]
    }
}
