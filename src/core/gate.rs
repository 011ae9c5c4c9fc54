/// Load state of one image group.
///
/// A group becomes loaded in two steps: a trigger (image already complete, or
/// its `load` event) requests a frame, and the frame commits. Triggers racing
/// each other collapse into a single request and a single commit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGate {
    pending: bool,
    loaded: bool,
}

impl LoadGate {
    /// True when the caller should schedule the commit frame.
    pub fn request(&mut self) -> bool {
        if self.pending || self.loaded {
            return false;
        }
        self.pending = true;
        true
    }

    /// True exactly once, when the group flips to loaded.
    pub fn commit(&mut self) -> bool {
        self.pending = false;
        if self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
