//! Quad traversal order selection.
//!
//! Region quads are staged as six vertices (`c0 c1 c2 c2 c3 c0`). A quad
//! is drawn from four of them: staged indices 0, 1, 2 and 4, i.e. corners
//! c0..c3. Mirroring the skeleton on exactly one axis flips the screen
//! winding of every quad, so the traversal is reversed to keep quads
//! front-facing.

const NORMAL: [usize; 4] = [0, 1, 2, 4];
const INVERSE: [usize; 4] = [4, 2, 1, 0];

/// Order in which the four corners of a staged region are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindingOrder {
    /// c0, c1, c2, c3. Used for mirrored skeletons.
    Normal,
    /// c3, c2, c1, c0. Used otherwise.
    Inverse,
}

impl WindingOrder {
    /// Pick the order for a skeleton's scale.
    ///
    /// A zero product counts as not mirrored.
    pub fn select(scale_x: f32, scale_y: f32) -> Self {
        if scale_x * scale_y < 0.0 {
            Self::Normal
        } else {
            Self::Inverse
        }
    }

    /// Indices into the six staged region vertices.
    pub fn corner_indices(&self) -> [usize; 4] {
        match self {
            Self::Normal => NORMAL,
            Self::Inverse => INVERSE,
        }
    }

    /// The opposite traversal, used for back faces.
    pub fn reversed(self) -> Self {
        match self {
            Self::Normal => Self::Inverse,
            Self::Inverse => Self::Normal,
        }
    }
}
