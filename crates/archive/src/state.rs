//! Health, position and framing bookkeeping shared by the archive types

use archwire_core::{ArchiveError, Limits};

#[derive(Debug, Clone)]
pub(crate) struct StreamState {
    pub(crate) limits: Limits,
    pub(crate) position: u64,
    error: Option<ArchiveError>,
    depth: usize,
}

impl StreamState {
    pub(crate) fn new(limits: Limits) -> Self {
        StreamState {
            limits,
            position: 0,
            error: None,
            depth: 0,
        }
    }

    pub(crate) fn good(&self) -> bool {
        self.error.is_none()
    }

    pub(crate) fn error(&self) -> Option<&ArchiveError> {
        self.error.as_ref()
    }

    pub(crate) fn depth(&self) -> usize {
        self.depth
    }

    /// Record a failure; the first one sticks.
    pub(crate) fn fail(&mut self, error: ArchiveError) {
        if self.error.is_none() {
            tracing::debug!(
                target: "archwire::archive",
                position = self.position,
                error = %error,
                "Archive stream failed"
            );
            self.error = Some(error);
        }
    }

    /// Enter an array, enforcing the nesting limit. Returns false on failure.
    pub(crate) fn open_array(&mut self) -> bool {
        if !self.good() {
            return false;
        }
        if let Err(e) = self.limits.check_depth(self.depth + 1) {
            self.fail(e.into());
            return false;
        }
        self.depth += 1;
        true
    }

    pub(crate) fn close_array(&mut self) {
        if !self.good() {
            return;
        }
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => self.fail(ArchiveError::Unbalanced),
        }
    }

    pub(crate) fn check_array_len(&mut self, len: usize) -> bool {
        match self.limits.check_array_len(len) {
            Ok(()) => true,
            Err(e) => {
                self.fail(e.into());
                false
            }
        }
    }

    pub(crate) fn check_blob_len(&mut self, len: usize) -> bool {
        match self.limits.check_blob_len(len) {
            Ok(()) => true,
            Err(e) => {
                self.fail(e.into());
                false
            }
        }
    }
}
