//! Per-frame draw results.

use rigdraw_core::AttachmentKind;

use crate::error::DrawError;

/// A problem met while drawing one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDiagnostic {
    /// Position in the draw order.
    pub draw_index: usize,
    pub slot_index: usize,
    pub slot_name: String,
    pub error: DrawError,
}

/// Outcome of one skeleton walk.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Primitive batches submitted to the backend.
    pub submissions: usize,
    /// Slots whose attachment was submitted.
    pub slots_drawn: usize,
    /// Slots left out because of an error.
    pub slots_skipped: usize,
    pub diagnostics: Vec<SlotDiagnostic>,
}

impl FrameReport {
    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Diagnostics whose error matches `predicate`.
    pub fn count(&self, predicate: impl Fn(&DrawError) -> bool) -> usize {
        self.diagnostics
            .iter()
            .filter(|diagnostic| predicate(&diagnostic.error))
            .count()
    }

    /// Log and keep a diagnostic.
    pub(crate) fn record(&mut self, diagnostic: SlotDiagnostic) {
        match &diagnostic.error {
            DrawError::UnsupportedAttachment { kind, .. } if !kind.is_renderable() => {
                log::debug!(
                    "Slot {:?} ({}): {}",
                    diagnostic.slot_name,
                    diagnostic.slot_index,
                    diagnostic.error
                );
            }
            _ => {
                log::warn!(
                    "Slot {:?} ({}): {}",
                    diagnostic.slot_name,
                    diagnostic.slot_index,
                    diagnostic.error
                );
            }
        }
        self.diagnostics.push(diagnostic);
    }

    /// Diagnostics for slots of a given attachment kind being unsupported.
    pub fn unsupported(&self, of: AttachmentKind) -> usize {
        self.count(|error| {
            matches!(error, DrawError::UnsupportedAttachment { kind, .. } if *kind == of)
        })
    }
}
