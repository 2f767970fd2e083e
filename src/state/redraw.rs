/// Why a redraw was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawReason {
    Commit,
    Extend,
    Undo,
    Redo,
    Clear,
    ToolMoved,
    ToolVisibility,
    ToolChanged,
}

/// Collects redraw requests from state mutations until the host repaints.
/// Redraws are idempotent, so several requests collapse into one.
#[derive(Debug, Clone, Default)]
pub struct RedrawTracker {
    pending: bool,
    last_reason: Option<RedrawReason>,
    requests: u64,
}

impl RedrawTracker {
    pub fn request(&mut self, reason: RedrawReason) {
        log::trace!("Redraw requested: {reason:?}");
        self.pending = true;
        self.last_reason = Some(reason);
        self.requests += 1;
    }

    /// Consume the pending flag, returning whether a redraw is due
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn last_reason(&self) -> Option<RedrawReason> {
        self.last_reason
    }

    /// Total requests since creation
    pub fn requests(&self) -> u64 {
        self.requests
    }
}
